//! Serializable reports produced when evaluating a relation.

use serde::Serialize;

use crate::Key;
use crate::error::RelationError;

/// Outcome of evaluating one key of a memoized relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation<T> {
    /// Name of the evaluated relation (e.g., "fibonacci").
    pub relation: String,
    /// The requested key.
    pub key: Key,
    /// The value, or the cached computation error.
    #[serde(flatten)]
    pub outcome: Outcome<T>,
    /// How many times the computation function ran while answering.
    pub invocations: usize,
    /// Number of entries in the cache table afterwards.
    pub cached_entries: usize,
    /// Wall-clock time spent, in microseconds.
    pub elapsed_micros: u128,
}

/// Value-or-error half of an [`Evaluation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<T> {
    Value(T),
    Error(RelationError),
}

impl<T> Outcome<T> {
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }
}

impl<T> From<Result<T, RelationError>> for Outcome<T> {
    fn from(result: Result<T, RelationError>) -> Self {
        match result {
            Ok(value) => Outcome::Value(value),
            Err(err) => Outcome::Error(err),
        }
    }
}

/// One row of a cache-table dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheEntry {
    pub key: Key,
    /// Display form of the cached value or error.
    pub result: String,
    /// Whether the cached result is an error.
    pub is_error: bool,
}

impl CacheEntry {
    pub fn from_result<T: ToString>(key: Key, result: &Result<T, RelationError>) -> Self {
        match result {
            Ok(value) => Self {
                key,
                result: value.to_string(),
                is_error: false,
            },
            Err(err) => Self {
                key,
                result: err.to_string(),
                is_error: true,
            },
        }
    }
}

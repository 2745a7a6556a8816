use serde::Serialize;
use thiserror::Error;

use crate::Key;

/// Errors produced by the built-in relations for a given key.
///
/// These are ordinary cached results: a relation that fails for a key fails
/// the same way on every later lookup of that key, so the type is `Clone`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RelationError {
    #[error("{relation} is undefined for negative key {key}")]
    NegativeKey { relation: &'static str, key: Key },

    #[error("{relation}({key}) overflows u64")]
    Overflow { relation: &'static str, key: Key },

    #[error("{relation} key {key} is outside the table (max {max})")]
    OutOfDomain {
        relation: &'static str,
        key: Key,
        max: Key,
    },
}

impl RelationError {
    /// The key the error was produced for.
    pub fn key(&self) -> Key {
        match self {
            Self::NegativeKey { key, .. }
            | Self::Overflow { key, .. }
            | Self::OutOfDomain { key, .. } => *key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_key_display() {
        let err = RelationError::NegativeKey {
            relation: "fibonacci",
            key: -3,
        };
        assert_eq!(err.to_string(), "fibonacci is undefined for negative key -3");
    }

    #[test]
    fn test_overflow_display() {
        let err = RelationError::Overflow {
            relation: "catalan",
            key: 37,
        };
        assert_eq!(err.to_string(), "catalan(37) overflows u64");
        assert_eq!(err.key(), 37);
    }

    #[test]
    fn test_out_of_domain_serializes_with_kind_tag() {
        let err = RelationError::OutOfDomain {
            relation: "edit_distance",
            key: 40,
            max: 19,
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "out_of_domain");
        assert_eq!(json["relation"], "edit_distance");
        assert_eq!(json["key"], 40);
        assert_eq!(json["max"], 19);
    }
}

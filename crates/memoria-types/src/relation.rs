//! Names of the built-in integer-indexed relations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A built-in relation that can be evaluated by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// `F(n) = F(n-1) + F(n-2)`, `F(0) = 0`, `F(1) = 1`.
    Fibonacci,
    /// `T(n) = T(n-1) + T(n-2) + T(n-3)`, `T(0) = T(1) = 0`, `T(2) = 1`.
    Tribonacci,
    /// Catalan numbers, `C(n) = sum C(i) * C(n-1-i)`.
    Catalan,
    /// Integer partition counts via Euler's pentagonal number theorem.
    Partitions,
}

impl Relation {
    /// All relations, in display order.
    pub const ALL: [Relation; 4] = [
        Relation::Fibonacci,
        Relation::Tribonacci,
        Relation::Catalan,
        Relation::Partitions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Fibonacci => "fibonacci",
            Relation::Tribonacci => "tribonacci",
            Relation::Catalan => "catalan",
            Relation::Partitions => "partitions",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a relation name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown relation '{0}' (expected one of: fibonacci, tribonacci, catalan, partitions)")]
pub struct ParseRelationError(pub String);

impl FromStr for Relation {
    type Err = ParseRelationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fibonacci" | "fib" => Ok(Relation::Fibonacci),
            "tribonacci" | "trib" => Ok(Relation::Tribonacci),
            "catalan" => Ok(Relation::Catalan),
            "partitions" | "partition" => Ok(Relation::Partitions),
            _ => Err(ParseRelationError(s.to_string())),
        }
    }
}

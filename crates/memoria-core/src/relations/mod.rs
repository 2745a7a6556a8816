//! Built-in integer-indexed relations on the memo engine.
//!
//! Every relation is written as a plain step function `(key, &engine)` that
//! recurses through the engine it is handed, so all smaller keys end up
//! cached as a side effect of evaluating a larger one.

pub mod edit_distance;
pub mod sequences;

use memoria_types::Key;
use memoria_types::error::RelationError;
use memoria_types::relation::Relation;

use crate::counted::Counted;
use crate::memo::{Memo, TryMemo};

pub use edit_distance::{EditDistance, edit_distance};
pub use sequences::{
    catalan, catalan_step, fibonacci, fibonacci_step, fibonacci_unchecked, partitions,
    partitions_step, tribonacci, tribonacci_step,
};

/// Step function of a `u64`-valued relation.
pub type Step = fn(Key, &TryMemo<u64, RelationError>) -> Result<u64, RelationError>;

/// The step function for a named relation.
pub fn step(relation: Relation) -> Step {
    match relation {
        Relation::Fibonacci => fibonacci_step,
        Relation::Tribonacci => tribonacci_step,
        Relation::Catalan => catalan_step,
        Relation::Partitions => partitions_step,
    }
}

/// A fresh engine for a named relation.
pub fn for_relation(relation: Relation) -> TryMemo<u64, RelationError> {
    Memo::new(step(relation))
}

/// A fresh engine for a named relation that counts computation runs.
pub fn counted(relation: Relation) -> Counted<Result<u64, RelationError>> {
    Counted::new(step(relation))
}

pub(crate) fn negative(relation: &'static str, key: Key) -> RelationError {
    RelationError::NegativeKey { relation, key }
}

pub(crate) fn overflow(relation: &'static str, key: Key) -> RelationError {
    RelationError::Overflow { relation, key }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_relation_dispatches() {
        assert_eq!(for_relation(Relation::Fibonacci).get(10), Ok(55));
        assert_eq!(for_relation(Relation::Tribonacci).get(10), Ok(81));
        assert_eq!(for_relation(Relation::Catalan).get(10), Ok(16796));
        assert_eq!(for_relation(Relation::Partitions).get(10), Ok(42));
    }

    #[test]
    fn counted_relations_compute_each_key_once() {
        for relation in Relation::ALL {
            let memo = counted(relation);
            assert!(memo.get(30).is_ok(), "{relation} failed at 30");
            assert_eq!(memo.invocations(), 31, "{relation}");
            assert_eq!(memo.len(), 31, "{relation}");
        }
    }

    #[test]
    fn huge_keys_overflow_with_a_single_computation() {
        for relation in Relation::ALL {
            let memo = counted(relation);
            assert!(
                matches!(memo.get(1_000_000), Err(RelationError::Overflow { .. })),
                "{relation}"
            );
            assert_eq!(memo.invocations(), 1, "{relation}");
        }
    }

    #[test]
    fn negative_keys_fail_for_every_relation() {
        for relation in Relation::ALL {
            let memo = counted(relation);
            assert_eq!(memo.get(-1), Err(negative(relation.as_str(), -1)));
            assert_eq!(memo.invocations(), 1);
        }
    }
}

//! Levenshtein distance as an integer-indexed relation.
//!
//! The DP cell `(i, j)` -- distance between the first `i` chars of `a` and
//! the first `j` chars of `b` -- lives at key `i * (b.len() + 1) + j`.

use memoria_types::Key;
use memoria_types::error::RelationError;

use super::negative;
use crate::counted::Counted;
use crate::memo::TryMemo;

const EDIT_DISTANCE: &str = "edit_distance";

/// Memoized edit-distance table between two strings.
#[derive(Debug)]
pub struct EditDistance {
    memo: Counted<Result<usize, RelationError>>,
    rows: usize,
    cols: usize,
}

impl EditDistance {
    pub fn new(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let width = cols as Key;
        let max = (rows * cols - 1) as Key;

        let memo = Counted::new(move |key, d: &TryMemo<usize, RelationError>| {
            if key < 0 {
                return Err(negative(EDIT_DISTANCE, key));
            }
            if key > max {
                return Err(out_of_domain(key, max));
            }

            let (i, j) = ((key / width) as usize, (key % width) as usize);
            if i == 0 {
                return Ok(j);
            }
            if j == 0 {
                return Ok(i);
            }

            let diagonal = key - width - 1;
            if a[i - 1] == b[j - 1] {
                return d.get(diagonal);
            }
            let substitute = d.get(diagonal)?;
            let delete = d.get(key - width)?;
            let insert = d.get(key - 1)?;
            Ok(1 + substitute.min(delete).min(insert))
        });

        Self { memo, rows, cols }
    }

    /// Distance between the full strings.
    pub fn distance(&self) -> Result<usize, RelationError> {
        self.cell(self.rows - 1, self.cols - 1)
    }

    /// Distance between the first `i` chars of `a` and the first `j` of `b`.
    pub fn cell(&self, i: usize, j: usize) -> Result<usize, RelationError> {
        if i >= self.rows || j >= self.cols {
            let key = i
                .checked_mul(self.cols)
                .and_then(|row| row.checked_add(j))
                .and_then(|key| Key::try_from(key).ok())
                .unwrap_or(Key::MAX);
            return Err(out_of_domain(key, self.max_key()));
        }
        self.memo.get((i * self.cols + j) as Key)
    }

    /// Raw lookup by encoded key.
    pub fn get(&self, key: Key) -> Result<usize, RelationError> {
        self.memo.get(key)
    }

    pub fn max_key(&self) -> Key {
        (self.rows * self.cols - 1) as Key
    }

    /// Number of table cells computed so far.
    pub fn invocations(&self) -> usize {
        self.memo.invocations()
    }

    pub fn cached_cells(&self) -> usize {
        self.memo.len()
    }
}

fn out_of_domain(key: Key, max: Key) -> RelationError {
    RelationError::OutOfDomain {
        relation: EDIT_DISTANCE,
        key,
        max,
    }
}

/// Levenshtein distance between `a` and `b`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    EditDistance::new(a, b)
        .distance()
        .expect("every key reached from the last cell is inside the table")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_pairs() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
        assert_eq!(edit_distance("intention", "execution"), 5);
    }

    #[test]
    fn empty_strings() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", "abcd"), 4);
    }

    #[test]
    fn unicode_is_compared_by_char() {
        assert_eq!(edit_distance("café", "cafe"), 1);
        assert_eq!(edit_distance("日本語", "日本"), 1);
    }

    #[test]
    fn identical_strings_walk_only_the_diagonal() {
        let table = EditDistance::new("memo", "memo");
        assert_eq!(table.distance(), Ok(0));
        assert_eq!(table.invocations(), 5);
    }

    #[test]
    fn each_cell_computed_at_most_once() {
        let table = EditDistance::new("kitten", "sitting");
        assert_eq!(table.distance(), Ok(3));
        let first = table.invocations();
        assert!(first <= 7 * 8);
        assert_eq!(first, table.cached_cells());

        assert_eq!(table.distance(), Ok(3));
        assert_eq!(table.cell(3, 3), Ok(1));
        assert_eq!(table.invocations(), first);
    }

    #[test]
    fn keys_outside_the_table() {
        let table = EditDistance::new("ab", "cde");
        assert_eq!(table.max_key(), 11);
        assert_eq!(
            table.get(12),
            Err(RelationError::OutOfDomain {
                relation: "edit_distance",
                key: 12,
                max: 11
            })
        );
        assert_eq!(
            table.get(-1),
            Err(RelationError::NegativeKey {
                relation: "edit_distance",
                key: -1
            })
        );
        assert!(matches!(
            table.cell(0, 4),
            Err(RelationError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn huge_cell_indices_are_out_of_domain() {
        let table = EditDistance::new("ab", "cd");
        assert_eq!(
            table.cell(usize::MAX, 0),
            Err(RelationError::OutOfDomain {
                relation: "edit_distance",
                key: Key::MAX,
                max: 8
            })
        );
        assert!(matches!(
            table.cell(0, usize::MAX),
            Err(RelationError::OutOfDomain { .. })
        ));
        assert!(matches!(
            table.cell(3, 0),
            Err(RelationError::OutOfDomain { key: 9, max: 8, .. })
        ));
        assert_eq!(table.invocations(), 0);
    }
}

//! Linear integer sequences: Fibonacci, Tribonacci, Catalan and partition
//! numbers, all with checked `u64` arithmetic.

use memoria_types::Key;
use memoria_types::error::RelationError;

use super::{negative, overflow};
use crate::memo::{Memo, TryMemo};

const FIBONACCI: &str = "fibonacci";
const TRIBONACCI: &str = "tribonacci";
const CATALAN: &str = "catalan";
const PARTITIONS: &str = "partitions";

// Smallest key whose value no longer fits in u64. Keys past it fail with the
// same error without recursing down to it.
const FIBONACCI_OVERFLOW: Key = 94;
const TRIBONACCI_OVERFLOW: Key = 76;
const CATALAN_OVERFLOW: Key = 37;
const PARTITIONS_OVERFLOW: Key = 417;

/// `F(0) = 0`, `F(1) = 1`, `F(n) = F(n-1) + F(n-2)`. Overflows at 94.
pub fn fibonacci_step(n: Key, fib: &TryMemo<u64, RelationError>) -> Result<u64, RelationError> {
    match n {
        _ if n < 0 => Err(negative(FIBONACCI, n)),
        _ if n > FIBONACCI_OVERFLOW => Err(overflow(FIBONACCI, FIBONACCI_OVERFLOW)),
        0 => Ok(0),
        1 => Ok(1),
        _ => fib
            .get(n - 1)?
            .checked_add(fib.get(n - 2)?)
            .ok_or_else(|| overflow(FIBONACCI, n)),
    }
}

pub fn fibonacci() -> TryMemo<u64, RelationError> {
    Memo::new(fibonacci_step)
}

/// Infallible Fibonacci with wrapping addition. Negative keys evaluate to 0.
pub fn fibonacci_unchecked() -> Memo<u64> {
    Memo::new(|n, fib: &Memo<u64>| match n {
        ..=0 => 0,
        1 => 1,
        _ => fib.get(n - 1).wrapping_add(fib.get(n - 2)),
    })
}

/// `T(0) = T(1) = 0`, `T(2) = 1`, `T(n) = T(n-1) + T(n-2) + T(n-3)`.
pub fn tribonacci_step(n: Key, trib: &TryMemo<u64, RelationError>) -> Result<u64, RelationError> {
    match n {
        _ if n < 0 => Err(negative(TRIBONACCI, n)),
        _ if n > TRIBONACCI_OVERFLOW => Err(overflow(TRIBONACCI, TRIBONACCI_OVERFLOW)),
        0 | 1 => Ok(0),
        2 => Ok(1),
        _ => {
            let (a, b, c) = (trib.get(n - 1)?, trib.get(n - 2)?, trib.get(n - 3)?);
            a.checked_add(b)
                .and_then(|ab| ab.checked_add(c))
                .ok_or_else(|| overflow(TRIBONACCI, n))
        }
    }
}

pub fn tribonacci() -> TryMemo<u64, RelationError> {
    Memo::new(tribonacci_step)
}

/// `C(0) = 1`, `C(n) = sum over i in 0..n of C(i) * C(n-1-i)`.
pub fn catalan_step(n: Key, cat: &TryMemo<u64, RelationError>) -> Result<u64, RelationError> {
    if n < 0 {
        return Err(negative(CATALAN, n));
    }
    if n > CATALAN_OVERFLOW {
        return Err(overflow(CATALAN, CATALAN_OVERFLOW));
    }
    if n == 0 {
        return Ok(1);
    }

    let mut total: u64 = 0;
    for i in (0..n).rev() {
        let term = cat
            .get(i)?
            .checked_mul(cat.get(n - 1 - i)?)
            .ok_or_else(|| overflow(CATALAN, n))?;
        total = total
            .checked_add(term)
            .ok_or_else(|| overflow(CATALAN, n))?;
    }
    Ok(total)
}

pub fn catalan() -> TryMemo<u64, RelationError> {
    Memo::new(catalan_step)
}

/// Partition counts from Euler's pentagonal number theorem:
/// `p(n) = sum over k >= 1 of (-1)^(k+1) * (p(n - g(k)) + p(n - g(-k)))`
/// with generalized pentagonal numbers `g(k) = k(3k-1)/2`.
pub fn partitions_step(n: Key, p: &TryMemo<u64, RelationError>) -> Result<u64, RelationError> {
    if n < 0 {
        return Err(negative(PARTITIONS, n));
    }
    if n > PARTITIONS_OVERFLOW {
        return Err(overflow(PARTITIONS, PARTITIONS_OVERFLOW));
    }
    if n == 0 {
        return Ok(1);
    }

    let mut total: i128 = 0;
    let mut k: Key = 1;
    loop {
        let first = k * (3 * k - 1) / 2;
        if first > n {
            break;
        }
        let sign: i128 = if k % 2 == 1 { 1 } else { -1 };
        total += sign * i128::from(p.get(n - first)?);

        let second = k * (3 * k + 1) / 2;
        if second <= n {
            total += sign * i128::from(p.get(n - second)?);
        }
        k += 1;
    }

    u64::try_from(total).map_err(|_| overflow(PARTITIONS, n))
}

pub fn partitions() -> TryMemo<u64, RelationError> {
    Memo::new(partitions_step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fibonacci_values() {
        let fib = fibonacci();
        assert_eq!(fib.get(0), Ok(0));
        assert_eq!(fib.get(1), Ok(1));
        assert_eq!(fib.get(50), Ok(12586269025));
        assert_eq!(fib.get(93), Ok(12200160415121876738));
        assert_eq!(fib.len(), 94);
    }

    #[test]
    fn fibonacci_overflow_is_cached() {
        let fib = fibonacci();
        assert_eq!(fib.get(94), Err(overflow(FIBONACCI, 94)));
        // Larger keys fail with the first overflowing sub-result.
        assert_eq!(fib.get(100), Err(overflow(FIBONACCI, 94)));
        assert_eq!(fib.peek(94), Some(Err(overflow(FIBONACCI, 94))));
        assert_eq!(fib.peek(93), Some(Ok(12200160415121876738)));
    }

    #[test]
    fn keys_far_past_overflow_fail_without_recursing() {
        let fib = fibonacci();
        assert_eq!(fib.get(1_000_000), Err(overflow(FIBONACCI, 94)));
        assert_eq!(fib.len(), 1);

        assert_eq!(tribonacci().get(200_000), Err(overflow(TRIBONACCI, 76)));
        assert_eq!(catalan().get(200_000), Err(overflow(CATALAN, 37)));
        assert_eq!(partitions().get(i64::MAX), Err(overflow(PARTITIONS, 417)));
    }

    #[test]
    fn first_overflowing_keys_are_exact() {
        let trib = tribonacci();
        assert_eq!(trib.get(75), Ok(12903063846126135669));
        assert_eq!(trib.get(76), Err(overflow(TRIBONACCI, 76)));

        let p = partitions();
        assert_eq!(p.get(416), Ok(17873792969689876004));
        assert_eq!(p.get(417), Err(overflow(PARTITIONS, 417)));
    }

    #[test]
    fn fibonacci_negative_key() {
        assert_eq!(fibonacci().get(-5), Err(negative(FIBONACCI, -5)));
    }

    #[test]
    fn fibonacci_unchecked_matches_checked() {
        let checked = fibonacci();
        let unchecked = fibonacci_unchecked();
        for n in 0..=93 {
            assert_eq!(checked.get(n), Ok(unchecked.get(n)));
        }
        assert_eq!(unchecked.get(-4), 0);
        // Wraps instead of failing.
        assert_eq!(
            unchecked.get(94),
            12200160415121876738u64.wrapping_add(7540113804746346429)
        );
    }

    #[test]
    fn tribonacci_values() {
        let trib = tribonacci();
        let expected = [0, 0, 1, 1, 2, 4, 7, 13, 24, 44, 81, 149];
        for (n, value) in expected.iter().enumerate() {
            assert_eq!(trib.get(n as Key), Ok(*value));
        }
    }

    #[test]
    fn catalan_values() {
        let cat = catalan();
        let expected = [1, 1, 2, 5, 14, 42, 132, 429, 1430, 4862];
        for (n, value) in expected.iter().enumerate() {
            assert_eq!(cat.get(n as Key), Ok(*value));
        }
        assert_eq!(cat.get(36), Ok(11959798385860453492));
        assert_eq!(cat.get(37), Err(overflow(CATALAN, 37)));
    }

    #[test]
    fn partition_values() {
        let p = partitions();
        let expected = [1, 1, 2, 3, 5, 7, 11, 15, 22, 30, 42];
        for (n, value) in expected.iter().enumerate() {
            assert_eq!(p.get(n as Key), Ok(*value));
        }
        assert_eq!(p.get(100), Ok(190569292));
        assert_eq!(p.get(200), Ok(3972999029388));
    }
}

//! Bounded generation.
//!
//! Each parameterless operation is a fixed instance of a general form that
//! takes the count (or range) explicitly. The general forms always produce
//! exactly the requested number of elements, or fail with `InvalidArgument`
//! when the request cannot be represented.

use std::iter::successors;

use collection_common::error::{CollectionError, Result};
use collection_common::numeric::{Fibonacci, Primes};
use tracing::trace;

use crate::constants::{EVEN_COUNT, FIBONACCI_COUNT, PRIME_COUNT, SQUARES_RANGE};

/// `1, 4, 9, ..., 100`.
pub fn squares_of_one_to_ten() -> Vec<i64> {
    SQUARES_RANGE.map(|n| n * n).collect()
}

/// Squares of every integer from `low` to `high` inclusive.
///
/// # Example
/// ```
/// use collection_utils::generation::squares_in_range;
/// assert_eq!(squares_in_range(-2, 2), Ok(vec![4, 1, 0, 1, 4]));
/// assert_eq!(squares_in_range(3, 2), Ok(vec![]));
/// assert!(squares_in_range(i64::MAX - 1, i64::MAX).is_err());
/// ```
pub fn squares_in_range(low: i64, high: i64) -> Result<Vec<i64>> {
    (low..=high)
        .map(|n| {
            n.checked_mul(n).ok_or_else(|| {
                CollectionError::invalid_argument("squares_in_range", format!("{n}^2 overflows i64"))
            })
        })
        .collect()
}

/// `[0, 1, 1, 2, 3, 5, 8, 13, 21, 34]`.
///
/// # Example
/// ```
/// use collection_utils::generation::first_ten_fibonacci;
/// assert_eq!(first_ten_fibonacci(), vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
/// ```
pub fn first_ten_fibonacci() -> Vec<u64> {
    Fibonacci::new().take(FIBONACCI_COUNT).collect()
}

/// The first `count` Fibonacci numbers, seeded with 0, 1.
///
/// Only 94 terms fit in a `u64`; asking for more is an `InvalidArgument`.
pub fn first_fibonacci(count: usize) -> Result<Vec<u64>> {
    trace!(count, "generating fibonacci terms");
    let terms: Vec<u64> = Fibonacci::new().take(count).collect();
    if terms.len() < count {
        return Err(CollectionError::invalid_argument(
            "first_fibonacci",
            format!("only {} terms fit in u64, {count} requested", terms.len()),
        ));
    }
    Ok(terms)
}

/// `[2, 3, 5, ..., 71]`.
pub fn first_twenty_primes() -> Vec<i64> {
    first_primes(PRIME_COUNT)
}

/// The first `count` primes in ascending order.
///
/// # Example
/// ```
/// use collection_utils::generation::first_primes;
/// assert_eq!(first_primes(4), vec![2, 3, 5, 7]);
/// assert!(first_primes(0).is_empty());
/// ```
pub fn first_primes(count: usize) -> Vec<i64> {
    trace!(count, "generating primes");
    Primes::new().take(count).collect()
}

/// Sum of `2 + 4 + ... + 200`.
///
/// # Example
/// ```
/// use collection_utils::generation::sum_of_first_hundred_evens;
/// assert_eq!(sum_of_first_hundred_evens(), 10_100);
/// ```
pub fn sum_of_first_hundred_evens() -> i64 {
    successors(Some(2i64), |n| n.checked_add(2))
        .take(EVEN_COUNT)
        .sum()
}

/// `2, 4, 6, ...`, `count` terms.
pub fn first_evens(count: usize) -> Result<Vec<i64>> {
    check_even_count("first_evens", count)?;
    trace!(count, "generating even numbers");
    Ok(successors(Some(2i64), |n| n.checked_add(2))
        .take(count)
        .collect())
}

/// Sum of the first `count` even numbers, `count * (count + 1)`.
pub fn sum_of_first_evens(count: usize) -> Result<i64> {
    let overflow = || {
        CollectionError::invalid_argument(
            "sum_of_first_evens",
            format!("sum of {count} even numbers overflows i64"),
        )
    };
    let n = i64::try_from(count).map_err(|_| overflow())?;
    n.checked_add(1)
        .and_then(|next| n.checked_mul(next))
        .ok_or_else(overflow)
}

fn check_even_count(operation: &'static str, count: usize) -> Result<()> {
    let fits = i64::try_from(count)
        .ok()
        .and_then(|n| n.checked_mul(2))
        .is_some();
    if fits {
        Ok(())
    } else {
        Err(CollectionError::invalid_argument(
            operation,
            format!("{count} even numbers exceed i64"),
        ))
    }
}

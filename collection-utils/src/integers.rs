//! Pipelines over a sequence of integers.
//!
//! Aggregates use the identity element on empty input (0 for sums, 1 for the
//! product, 0.0 for the average). The maximum, the median and the second
//! largest value have no meaning for an empty sequence and fail with
//! `EmptyInput` instead.
//!
//! Sums and the product wrap around in two's complement on overflow, so no
//! input makes them panic.

use collection_common::error::{CollectionError, Result, ensure_non_empty};
use collection_common::grouping::{Groups, Partition};
use collection_common::list::{self, distinct, group_by, join_with, partition_by, sorted_by};
use collection_common::numeric::is_prime;

use crate::constants::{REMAINDER_DIVISOR, SEPARATOR, THRESHOLD};

fn is_even(n: i64) -> bool {
    n % 2 == 0
}

fn wrapping_sum(numbers: impl Iterator<Item = i64>) -> i64 {
    numbers.fold(0, i64::wrapping_add)
}

// =============================================================================
// Aggregates
// =============================================================================

/// Sum of the even elements. Overflow wraps around.
///
/// # Example
/// ```
/// use collection_utils::integers::sum_of_evens;
/// assert_eq!(sum_of_evens(&[1, 2, 3, 4]), 6);
/// assert_eq!(sum_of_evens(&[]), 0);
/// ```
pub fn sum_of_evens(numbers: &[i64]) -> i64 {
    wrapping_sum(numbers.iter().copied().filter(|&n| is_even(n)))
}

/// Sum of the odd elements. Complements [`sum_of_evens`].
pub fn sum_of_odds(numbers: &[i64]) -> i64 {
    wrapping_sum(numbers.iter().copied().filter(|&n| !is_even(n)))
}

/// Sum of the squares of the odd elements.
///
/// Both the squares and the sum wrap around on overflow.
///
/// # Example
/// ```
/// use collection_utils::integers::sum_of_squares_of_odds;
/// assert_eq!(sum_of_squares_of_odds(&[1, 2, 3]), 10);
/// ```
pub fn sum_of_squares_of_odds(numbers: &[i64]) -> i64 {
    wrapping_sum(
        numbers
            .iter()
            .copied()
            .filter(|&n| !is_even(n))
            .map(|n| n.wrapping_mul(n)),
    )
}

/// Sum of the elements strictly greater than five.
pub fn sum_greater_than_five(numbers: &[i64]) -> i64 {
    sum_greater_than(numbers, THRESHOLD)
}

/// Sum of the elements strictly greater than `threshold`. Overflow wraps around.
///
/// # Example
/// ```
/// use collection_utils::integers::sum_greater_than;
/// assert_eq!(sum_greater_than(&[1, 5, 6, 10], 5), 16);
/// ```
pub fn sum_greater_than(numbers: &[i64], threshold: i64) -> i64 {
    wrapping_sum(numbers.iter().copied().filter(|&n| n > threshold))
}

/// Product of all elements; 1 for an empty sequence.
///
/// Overflow wraps around in two's complement.
///
/// # Example
/// ```
/// use collection_utils::integers::product_of_list;
/// assert_eq!(product_of_list(&[2, 3, 4]), 24);
/// assert_eq!(product_of_list(&[]), 1);
/// ```
pub fn product_of_list(numbers: &[i64]) -> i64 {
    numbers.iter().fold(1, |acc, &n| acc.wrapping_mul(n))
}

/// Arithmetic mean; 0.0 for an empty sequence.
///
/// # Example
/// ```
/// use collection_utils::integers::average_of_list;
/// assert_eq!(average_of_list(&[1, 2, 3, 4]), 2.5);
/// assert_eq!(average_of_list(&[]), 0.0);
/// ```
pub fn average_of_list(numbers: &[i64]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    // Accumulate wide so the sum itself cannot overflow.
    let total: i128 = numbers.iter().map(|&n| i128::from(n)).sum();
    total as f64 / numbers.len() as f64
}

/// Largest element.
///
/// # Example
/// ```
/// use collection_utils::integers::max_in_list;
/// assert_eq!(max_in_list(&[3, 9, -1]), Ok(9));
/// assert!(max_in_list(&[]).is_err());
/// ```
pub fn max_in_list(numbers: &[i64]) -> Result<i64> {
    numbers
        .iter()
        .copied()
        .max()
        .ok_or_else(|| CollectionError::empty_input("max_in_list"))
}

/// Median: the middle element of the sorted sequence, or the mean of the two
/// middle elements when the length is even.
///
/// # Example
/// ```
/// use collection_utils::integers::median_of_list;
/// assert_eq!(median_of_list(&[4, 1, 3, 2]), Ok(2.5));
/// assert_eq!(median_of_list(&[5]), Ok(5.0));
/// assert!(median_of_list(&[]).is_err());
/// ```
pub fn median_of_list(numbers: &[i64]) -> Result<f64> {
    let sorted = sort_ascending(ensure_non_empty("median_of_list", numbers)?);
    let mid = sorted.len() / 2;
    if sorted.len().is_multiple_of(2) {
        Ok((sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0)
    } else {
        Ok(sorted[mid] as f64)
    }
}

/// Second largest distinct value.
///
/// Fails with `EmptyInput` on an empty sequence. A non-empty sequence with a
/// single distinct value has no second largest and yields `Ok(None)`.
///
/// # Example
/// ```
/// use collection_utils::integers::second_largest;
/// assert_eq!(second_largest(&[4, 9, 9, 7]), Ok(Some(7)));
/// assert_eq!(second_largest(&[5, 5, 5]), Ok(None));
/// assert!(second_largest(&[]).is_err());
/// ```
pub fn second_largest(numbers: &[i64]) -> Result<Option<i64>> {
    let unique = distinct(ensure_non_empty("second_largest", numbers)?);
    Ok(sorted_by(&unique, |a, b| b.cmp(a)).get(1).copied())
}

// =============================================================================
// Predicates and filters
// =============================================================================

/// True when every element is strictly positive (vacuously true when empty).
pub fn all_positive(numbers: &[i64]) -> bool {
    numbers.iter().all(|&n| n > 0)
}

/// True when at least one element is negative.
pub fn contains_negative(numbers: &[i64]) -> bool {
    numbers.iter().any(|&n| n < 0)
}

/// Keeps the prime elements, in input order.
///
/// # Example
/// ```
/// use collection_utils::integers::filter_primes;
/// assert_eq!(filter_primes(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]), vec![2, 3, 5, 7]);
/// ```
pub fn filter_primes(numbers: &[i64]) -> Vec<i64> {
    list::filter(numbers, |&n| is_prime(n))
}

// =============================================================================
// Ordering and deduplication
// =============================================================================

/// Drops repeated values, keeping first occurrences in order.
///
/// # Example
/// ```
/// use collection_utils::integers::remove_duplicates;
/// assert_eq!(remove_duplicates(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn remove_duplicates(numbers: &[i64]) -> Vec<i64> {
    distinct(numbers)
}

pub fn sort_ascending(numbers: &[i64]) -> Vec<i64> {
    sorted_by(numbers, Ord::cmp)
}

/// Sorts by the reverse of the natural order.
///
/// # Example
/// ```
/// use collection_utils::integers::sort_descending;
/// assert_eq!(sort_descending(&[2, 9, 2, 5]), vec![9, 5, 2, 2]);
/// ```
pub fn sort_descending(numbers: &[i64]) -> Vec<i64> {
    sorted_by(numbers, |a, b| b.cmp(a))
}

// =============================================================================
// Transformations and grouping
// =============================================================================

/// Renders the elements joined by commas, e.g. `"1,2,3"`.
pub fn comma_separated_integers(numbers: &[i64]) -> String {
    join_with(numbers, SEPARATOR, ToString::to_string)
}

/// Binary representation of each element.
///
/// Negative values are rendered as their 64-bit two's complement.
///
/// # Example
/// ```
/// use collection_utils::integers::to_binary_strings;
/// assert_eq!(to_binary_strings(&[0, 5, 8]), vec!["0", "101", "1000"]);
/// ```
pub fn to_binary_strings(numbers: &[i64]) -> Vec<String> {
    numbers.iter().map(|n| format!("{n:b}")).collect()
}

/// Splits into evens (`true`) and odds (`false`). Both buckets always exist.
///
/// # Example
/// ```
/// use collection_utils::integers::partition_even_odd;
/// let split = partition_even_odd(&[1, 2, 3, 4]);
/// assert_eq!(split.get(true), &[2, 4]);
/// assert_eq!(split.get(false), &[1, 3]);
/// ```
pub fn partition_even_odd(numbers: &[i64]) -> Partition<i64> {
    partition_by(numbers, |&n| is_even(n))
}

/// Groups by `n % 3`. The remainder takes the sign of the element, so
/// negative elements land under `0`, `-1` or `-2`.
///
/// # Example
/// ```
/// use collection_utils::integers::group_by_remainder;
/// let groups = group_by_remainder(&[1, 2, 3, 4, 5, 6]);
/// assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![1, 2, 0]);
/// assert_eq!(groups.get(&0), Some(&[3, 6][..]));
/// ```
pub fn group_by_remainder(numbers: &[i64]) -> Groups<i64, i64> {
    group_by(numbers, |n| n % REMAINDER_DIVISOR)
}

/// Groups by `n % divisor`; a zero divisor is rejected.
///
/// `i64::MIN` with a divisor of `-1` lands in the `0` bucket.
pub fn group_by_remainder_of(numbers: &[i64], divisor: i64) -> Result<Groups<i64, i64>> {
    if divisor == 0 {
        return Err(CollectionError::invalid_argument(
            "group_by_remainder_of",
            "divisor must be non-zero",
        ));
    }
    Ok(group_by(numbers, |n| n.wrapping_rem(divisor)))
}

//! Fixed parameters behind the parameterless operations.

use std::ops::RangeInclusive;

/// Terms produced by [`first_ten_fibonacci`](crate::generation::first_ten_fibonacci).
pub const FIBONACCI_COUNT: usize = 10;

/// Primes produced by [`first_twenty_primes`](crate::generation::first_twenty_primes).
pub const PRIME_COUNT: usize = 20;

/// Even numbers summed by [`sum_of_first_hundred_evens`](crate::generation::sum_of_first_hundred_evens).
pub const EVEN_COUNT: usize = 100;

/// Bases squared by [`squares_of_one_to_ten`](crate::generation::squares_of_one_to_ten).
pub const SQUARES_RANGE: RangeInclusive<i64> = 1..=10;

/// Vowels in both cases.
pub const VOWELS: &str = "aeiouAEIOU";

/// Separator for every join operation.
pub const SEPARATOR: &str = ",";

/// How many strings [`top_three_longest_strings`](crate::strings::top_three_longest_strings) keeps.
pub const TOP_LONGEST: usize = 3;

/// Divisor for [`group_by_remainder`](crate::integers::group_by_remainder).
pub const REMAINDER_DIVISOR: i64 = 3;

/// Exclusive lower bound for [`sum_greater_than_five`](crate::integers::sum_greater_than_five).
pub const THRESHOLD: i64 = 5;

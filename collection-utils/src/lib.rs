//! # Collection Utilities
//!
//! Fifty small, pure transformations over lists of numbers and strings, each
//! written as a short iterator pipeline.
//!
//! Operations are grouped by the shape of their input:
//! - [`integers`]: sums, extrema, median, filters, sorting, partition and grouping of `&[i64]`
//! - [`strings`]: lengths, searches, joins, counting and grouping of `&[S]` where `S: AsRef<str>`
//! - [`nested`]: flattening `&[Vec<i64>]`
//! - [`text`]: character and vowel counts over a single `&str`
//! - [`generation`]: bounded Fibonacci, prime, even and square sequences
//! - [`derived`]: maps from each element to a derived value
//!
//! Inputs are borrowed and never mutated, and every result is freshly
//! allocated, so all operations can be called from any number of threads at
//! once. Empty inputs are defined everywhere: aggregates fall back to their
//! identity element, searches to `None`, and the operations with no answer
//! for an empty sequence (maximum, median, second largest) return
//! [`CollectionError::EmptyInput`].
//!
//! ```
//! use collection_utils::{integers, strings};
//!
//! assert_eq!(integers::sum_of_evens(&[1, 2, 3, 4]), 6);
//! assert_eq!(integers::median_of_list(&[1, 2, 3, 4]), Ok(2.5));
//! assert_eq!(
//!     strings::most_frequent_word(&["a", "b", "a", "c", "a", "b"]),
//!     Some("a".to_string())
//! );
//! ```

pub mod constants;
pub mod derived;
pub mod generation;
pub mod integers;
pub mod nested;
pub mod strings;
pub mod text;

#[cfg(test)]
mod property_tests;

pub use collection_common::{CollectionError, Groups, Partition, Result};

//! Maps keyed by the input elements themselves.
//!
//! A repeated element maps to the same derived value every time, so the
//! first occurrence is kept and later ones are ignored.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use collection_common::error::Result;
use collection_common::numeric::factorial;

use crate::text::count_vowels;

fn map_to<K, V, F>(keys: impl IntoIterator<Item = K>, value: F) -> HashMap<K, V>
where
    K: Eq + Hash,
    F: Fn(&K) -> V,
{
    let mut derived = HashMap::new();
    for key in keys {
        derived.entry(key).or_insert_with_key(|key| value(key));
    }
    derived
}

/// String → length in `char`s.
///
/// # Example
/// ```
/// use collection_utils::derived::map_to_string_lengths;
/// let lengths = map_to_string_lengths(&["one", "three", "one"]);
/// assert_eq!(lengths.len(), 2);
/// assert_eq!(lengths["three"], 5);
/// ```
pub fn map_to_string_lengths<S: AsRef<str>>(strings: &[S]) -> HashMap<String, usize> {
    map_to(
        strings.iter().map(|s| s.as_ref().to_string()),
        |s| s.chars().count(),
    )
}

/// String → number of vowels.
pub fn map_to_vowel_counts<S: AsRef<str>>(strings: &[S]) -> HashMap<String, usize> {
    map_to(strings.iter().map(|s| s.as_ref().to_string()), |s| {
        count_vowels(s)
    })
}

/// Integer → factorial.
///
/// Fails with `InvalidArgument` if any element is negative or above 20.
///
/// # Example
/// ```
/// use collection_utils::derived::map_to_factorials;
/// let factorials = map_to_factorials(&[0, 3, 5]).unwrap();
/// assert_eq!(factorials[&5], 120);
/// assert_eq!(factorials[&0], 1);
/// assert!(map_to_factorials(&[3, -1]).is_err());
/// ```
pub fn map_to_factorials(numbers: &[i64]) -> Result<HashMap<i64, u64>> {
    let mut factorials = HashMap::with_capacity(numbers.len());
    for &n in numbers {
        if let Entry::Vacant(slot) = factorials.entry(n) {
            slot.insert(factorial(n)?);
        }
    }
    Ok(factorials)
}

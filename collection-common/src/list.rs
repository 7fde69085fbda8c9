//! # Pipeline Combinators
//!
//! Generic building blocks for collection pipelines. Each one takes a borrowed
//! slice plus an explicit function parameter (predicate, key extractor,
//! formatter) and returns a freshly built value; the input is never mutated.
//!
//! The named operations in `collection-utils` are thin compositions of these.
//!
//! ## Example
//!
//! ```
//! use collection_common::list::{group_by, distinct, join_with};
//!
//! let words = ["apple", "avocado", "banana", "apple"];
//!
//! let unique = distinct(&words);
//! assert_eq!(unique, vec!["apple", "avocado", "banana"]);
//!
//! let by_initial = group_by(&unique, |w| w.chars().next());
//! assert_eq!(by_initial.get(&Some('a')), Some(&["apple", "avocado"][..]));
//!
//! assert_eq!(join_with(&[1, 2, 3], ",", |n| n.to_string()), "1,2,3");
//! ```

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::grouping::{Groups, Partition};

/// Keeps the elements satisfying `predicate`, in input order.
///
/// # Example
/// ```
/// use collection_common::list::filter;
/// assert_eq!(filter(&[1, 2, 3, 4], |n| n % 2 == 0), vec![2, 4]);
/// ```
pub fn filter<T, P>(items: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Groups elements by a derived key.
///
/// Keys appear in first-encounter order; each bucket keeps input order.
///
/// # Example
/// ```
/// use collection_common::list::group_by;
/// let groups = group_by(&[1, 2, 3, 4, 5], |n| n % 2);
/// assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![1, 0]);
/// assert_eq!(groups.get(&1), Some(&[1, 3, 5][..]));
/// ```
pub fn group_by<T, K, F>(items: &[T], key: F) -> Groups<K, T>
where
    T: Clone,
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    items.iter().map(|item| (key(item), item.clone())).collect()
}

/// Splits elements into the ones satisfying `predicate` and the rest.
///
/// # Example
/// ```
/// use collection_common::list::partition_by;
/// let split = partition_by(&[1, 2, 3], |n| *n > 1);
/// assert_eq!(split.get(true), &[2, 3]);
/// assert_eq!(split.get(false), &[1]);
/// ```
pub fn partition_by<T, P>(items: &[T], predicate: P) -> Partition<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    items
        .iter()
        .map(|item| (predicate(item), item.clone()))
        .collect()
}

/// Counts occurrences of each derived key.
///
/// # Example
/// ```
/// use collection_common::list::count_by;
/// let counts = count_by(&["a", "b", "a"], |s| *s);
/// assert_eq!(counts["a"], 2);
/// assert_eq!(counts["b"], 1);
/// ```
pub fn count_by<T, K, F>(items: &[T], key: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    items.iter().fold(HashMap::new(), |mut counts, item| {
        *counts.entry(key(item)).or_insert(0) += 1;
        counts
    })
}

/// Removes duplicates, keeping the first occurrence of each value in order.
///
/// # Example
/// ```
/// use collection_common::list::distinct;
/// assert_eq!(distinct(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn distinct<T>(items: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Element with the greatest key; the earliest one wins a tie.
///
/// `Iterator::max_by_key` returns the last maximum, which is why this exists.
///
/// # Example
/// ```
/// use collection_common::list::max_by_key_first;
/// assert_eq!(max_by_key_first(&["ab", "cd", "e"], |s| s.len()), Some(&"ab"));
/// assert_eq!(max_by_key_first::<&str, usize, _>(&[], |s| s.len()), None);
/// ```
pub fn max_by_key_first<T, K, F>(items: &[T], key: F) -> Option<&T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    items.iter().reduce(|best, item| {
        if key(item) > key(best) { item } else { best }
    })
}

/// Element with the smallest key; the earliest one wins a tie.
///
/// # Example
/// ```
/// use collection_common::list::min_by_key_first;
/// assert_eq!(min_by_key_first(&["ab", "c", "d"], |s| s.len()), Some(&"c"));
/// ```
pub fn min_by_key_first<T, K, F>(items: &[T], key: F) -> Option<&T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    items.iter().min_by_key(|item| key(item))
}

/// Formats each element and joins the results with `separator`.
///
/// An empty input yields an empty string.
pub fn join_with<T, F>(items: &[T], separator: &str, format: F) -> String
where
    F: Fn(&T) -> String,
{
    items.iter().map(format).collect::<Vec<_>>().join(separator)
}

/// Concatenates nested sequences in order.
///
/// # Example
/// ```
/// use collection_common::list::flatten;
/// assert_eq!(flatten(&[vec![1, 2], vec![], vec![3]]), vec![1, 2, 3]);
/// ```
pub fn flatten<T: Clone>(lists: &[Vec<T>]) -> Vec<T> {
    lists.iter().flatten().cloned().collect()
}

/// Checks that every adjacent pair is in order under `compare`.
///
/// Sequences with fewer than two elements are sorted.
///
/// # Example
/// ```
/// use collection_common::list::is_sorted_by;
/// assert!(is_sorted_by(&[1, 2, 2, 5], |a, b| a.cmp(b)));
/// assert!(!is_sorted_by(&[2, 1], |a, b| a.cmp(b)));
/// assert!(is_sorted_by::<i32, _>(&[], |a, b| a.cmp(b)));
/// ```
pub fn is_sorted_by<T, F>(items: &[T], compare: F) -> bool
where
    F: Fn(&T, &T) -> Ordering,
{
    items
        .windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

/// Returns a stably sorted copy under `compare`.
pub fn sorted_by<T, F>(items: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(compare);
    sorted
}

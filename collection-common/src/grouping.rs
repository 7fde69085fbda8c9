//! # Grouping Results
//!
//! Result types for bucketing a sequence by a derived key.
//!
//! - [`Groups`]: key → elements, with keys in first-encounter order and each
//!   bucket in input order.
//! - [`Partition`]: exactly two buckets addressed by `bool`, both present even
//!   when one is empty.
//!
//! ## Example
//!
//! ```
//! use collection_common::grouping::Groups;
//!
//! let mut groups = Groups::new();
//! groups.push('b', "banana");
//! groups.push('a', "apple");
//! groups.push('b', "blueberry");
//!
//! assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec!['b', 'a']);
//! assert_eq!(groups.get(&'b'), Some(&["banana", "blueberry"][..]));
//! ```

use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered mapping from a grouping key to the elements that produced it.
///
/// Lookups go through a `HashMap` index into a `Vec` of buckets, so iteration
/// order is the order in which keys were first seen.
#[derive(Debug, Clone)]
pub struct Groups<K, V> {
    buckets: Vec<(K, Vec<V>)>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for Groups<K, V> {
    fn default() -> Self {
        Self {
            buckets: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> Groups<K, V> {
    /// Creates an empty grouping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` to the bucket for `key`, opening the bucket if needed.
    pub fn push(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&slot) => self.buckets[slot].1.push(value),
            None => {
                self.index.insert(key.clone(), self.buckets.len());
                self.buckets.push((key, vec![value]));
            }
        }
    }

    /// Returns the bucket for `key`.
    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.index
            .get(key)
            .map(|&slot| self.buckets[slot].1.as_slice())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }
}

impl<K, V> Groups<K, V> {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Keys in first-encounter order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.buckets.iter().map(|(key, _)| key)
    }

    /// Buckets in key order.
    pub fn values(&self) -> impl Iterator<Item = &[V]> {
        self.buckets.iter().map(|(_, bucket)| bucket.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.buckets
            .iter()
            .map(|(key, bucket)| (key, bucket.as_slice()))
    }

    /// Consumes the grouping, yielding the buckets in key order.
    pub fn into_values(self) -> impl Iterator<Item = Vec<V>> {
        self.buckets.into_iter().map(|(_, bucket)| bucket)
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Groups<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.buckets == other.buckets
    }
}

impl<K: Eq, V: Eq> Eq for Groups<K, V> {}

impl<K, V> IntoIterator for Groups<K, V> {
    type Item = (K, Vec<V>);
    type IntoIter = std::vec::IntoIter<(K, Vec<V>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

impl<K: Eq + Hash + Clone, V> FromIterator<(K, V)> for Groups<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut groups = Groups::new();
        for (key, value) in iter {
            groups.push(key, value);
        }
        groups
    }
}

/// Two-way split of a sequence by a predicate.
///
/// Both buckets always exist: `get(true)` holds the elements that satisfied
/// the predicate and `get(false)` the rest, each in input order.
///
/// # Example
/// ```
/// use collection_common::grouping::Partition;
///
/// let split: Partition<i64> = [1, 2, 3, 4].into_iter().map(|n| (n % 2 == 0, n)).collect();
/// assert_eq!(split.get(true), &[2, 4]);
/// assert_eq!(split.get(false), &[1, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    matching: Vec<T>,
    rejected: Vec<T>,
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            matching: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<T> Partition<T> {
    /// Bucket for `key`.
    pub fn get(&self, key: bool) -> &[T] {
        if key { &self.matching } else { &self.rejected }
    }

    pub fn matching(&self) -> &[T] {
        &self.matching
    }

    pub fn rejected(&self) -> &[T] {
        &self.rejected
    }

    /// Splits into `(matching, rejected)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.matching, self.rejected)
    }

    pub fn len(&self) -> usize {
        self.matching.len() + self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matching.is_empty() && self.rejected.is_empty()
    }
}

impl<T> FromIterator<(bool, T)> for Partition<T> {
    fn from_iter<I: IntoIterator<Item = (bool, T)>>(iter: I) -> Self {
        let mut partition = Partition::default();
        for (key, value) in iter {
            if key {
                partition.matching.push(value);
            } else {
                partition.rejected.push(value);
            }
        }
        partition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_preserve_first_encounter_order() {
        let groups: Groups<usize, &str> = ["ccc", "a", "bb", "dd", "e"]
            .into_iter()
            .map(|s| (s.len(), s))
            .collect();

        let keys: Vec<usize> = groups.keys().copied().collect();
        assert_eq!(keys, vec![3, 1, 2]);
        assert_eq!(groups.get(&2), Some(&["bb", "dd"][..]));
        assert_eq!(groups.get(&1), Some(&["a", "e"][..]));
        assert_eq!(groups.get(&7), None);
        assert_eq!(groups.len(), 3);
    }

    #[test]
    fn test_groups_equality_is_order_sensitive() {
        let ab: Groups<char, i32> = [('a', 1), ('b', 2)].into_iter().collect();
        let ba: Groups<char, i32> = [('b', 2), ('a', 1)].into_iter().collect();
        assert_ne!(ab, ba);
        assert_eq!(ab.clone(), ab);
    }

    #[test]
    fn test_groups_into_iter() {
        let groups: Groups<bool, i32> = [(true, 1), (false, 2), (true, 3)].into_iter().collect();
        let pairs: Vec<(bool, Vec<i32>)> = groups.into_iter().collect();
        assert_eq!(pairs, vec![(true, vec![1, 3]), (false, vec![2])]);
    }

    #[test]
    fn test_empty_groups() {
        let groups: Groups<char, String> = Groups::new();
        assert!(groups.is_empty());
        assert_eq!(groups.values().count(), 0);
    }

    #[test]
    fn test_partition_keeps_both_buckets() {
        let split: Partition<i32> = [2, 4].into_iter().map(|n| (n % 2 == 0, n)).collect();
        assert_eq!(split.get(true), &[2, 4]);
        assert!(split.get(false).is_empty());
        assert_eq!(split.len(), 2);

        let empty: Partition<i32> = Partition::default();
        assert!(empty.is_empty());
        assert!(empty.matching().is_empty());
        assert!(empty.rejected().is_empty());
    }
}

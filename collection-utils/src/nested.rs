//! Pipelines over a sequence of integer sequences.

use collection_common::list::flatten;

/// Concatenates the inner sequences in order.
///
/// # Example
/// ```
/// use collection_utils::nested::flatten_list_of_lists;
/// let lists = vec![vec![1, 2], vec![], vec![3, 4, 5]];
/// assert_eq!(flatten_list_of_lists(&lists), vec![1, 2, 3, 4, 5]);
/// ```
pub fn flatten_list_of_lists(lists: &[Vec<i64>]) -> Vec<i64> {
    flatten(lists)
}

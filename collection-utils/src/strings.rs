//! Pipelines over a sequence of strings.
//!
//! Every operation accepts any `&[S]` with `S: AsRef<str>`, so `&[&str]`,
//! `&[String]` and `Vec<String>` all work. Lengths are counted in `char`s.
//! Searches that can come up empty return `None`; ties go to the element that
//! appears first.

use std::collections::HashSet;

use collection_common::grouping::Groups;
use collection_common::list::{
    count_by, distinct, group_by, is_sorted_by, join_with, max_by_key_first, min_by_key_first,
    sorted_by,
};

use crate::constants::{SEPARATOR, TOP_LONGEST};
use crate::text::count_vowels;

fn as_strs<S: AsRef<str>>(strings: &[S]) -> Vec<&str> {
    strings.iter().map(|s| s.as_ref()).collect()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn owned(strings: impl IntoIterator<Item = impl AsRef<str>>) -> Vec<String> {
    strings
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect()
}

// =============================================================================
// Element-wise transformations
// =============================================================================

/// Length of each string, in `char`s.
///
/// # Example
/// ```
/// use collection_utils::strings::lengths_of_strings;
/// assert_eq!(lengths_of_strings(&["a", "bcd", "", "né"]), vec![1, 3, 0, 2]);
/// ```
pub fn lengths_of_strings<S: AsRef<str>>(strings: &[S]) -> Vec<usize> {
    strings.iter().map(|s| char_len(s.as_ref())).collect()
}

pub fn to_upper_case<S: AsRef<str>>(strings: &[S]) -> Vec<String> {
    strings.iter().map(|s| s.as_ref().to_uppercase()).collect()
}

/// Number of vowels (`aeiouAEIOU`) in each string.
///
/// # Example
/// ```
/// use collection_utils::strings::count_vowels_in_strings;
/// assert_eq!(count_vowels_in_strings(&["Apple", "sky", ""]), vec![2, 0, 0]);
/// ```
pub fn count_vowels_in_strings<S: AsRef<str>>(strings: &[S]) -> Vec<usize> {
    strings.iter().map(|s| count_vowels(s.as_ref())).collect()
}

pub fn sum_of_string_lengths<S: AsRef<str>>(strings: &[S]) -> usize {
    lengths_of_strings(strings).into_iter().sum()
}

// =============================================================================
// Filters and predicates
// =============================================================================

pub fn filter_empty_strings<S: AsRef<str>>(strings: &[S]) -> Vec<String> {
    owned(as_strs(strings).into_iter().filter(|s| !s.is_empty()))
}

/// Keeps the strings starting with `prefix`. An empty prefix keeps everything.
///
/// # Example
/// ```
/// use collection_utils::strings::filter_by_prefix;
/// let kept = filter_by_prefix(&["pre", "post", "prefix", "Pre"], "pre");
/// assert_eq!(kept, vec!["pre", "prefix"]);
/// ```
pub fn filter_by_prefix<S: AsRef<str>>(strings: &[S], prefix: &str) -> Vec<String> {
    owned(
        as_strs(strings)
            .into_iter()
            .filter(|s| s.starts_with(prefix)),
    )
}

/// True when any string contains the letter `a`.
pub fn contains_letter_a<S: AsRef<str>>(strings: &[S]) -> bool {
    any_contains(strings, 'a')
}

/// True when any string contains `letter` (case-sensitive).
pub fn any_contains<S: AsRef<str>>(strings: &[S], letter: char) -> bool {
    strings.iter().any(|s| s.as_ref().contains(letter))
}

/// True when no string is empty (vacuously true for an empty sequence).
pub fn all_strings_non_empty<S: AsRef<str>>(strings: &[S]) -> bool {
    !strings.iter().any(|s| s.as_ref().is_empty())
}

/// True when each string is less than or equal to its successor.
///
/// # Example
/// ```
/// use collection_utils::strings::is_sorted_alphabetically;
/// assert!(is_sorted_alphabetically(&["apple", "banana", "banana", "cherry"]));
/// assert!(!is_sorted_alphabetically(&["b", "a"]));
/// assert!(is_sorted_alphabetically::<&str>(&[]));
/// ```
pub fn is_sorted_alphabetically<S: AsRef<str>>(strings: &[S]) -> bool {
    is_sorted_by(&as_strs(strings), |a, b| a.cmp(b))
}

// =============================================================================
// Searches
// =============================================================================

pub fn first_non_empty_string<S: AsRef<str>>(strings: &[S]) -> Option<String> {
    strings
        .iter()
        .map(|s| s.as_ref())
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Longest string; the first one wins a tie.
///
/// # Example
/// ```
/// use collection_utils::strings::longest_string;
/// assert_eq!(longest_string(&["ab", "xyz", "uvw"]), Some("xyz".to_string()));
/// assert_eq!(longest_string::<&str>(&[]), None);
/// ```
pub fn longest_string<S: AsRef<str>>(strings: &[S]) -> Option<String> {
    max_by_key_first(&as_strs(strings), |s| char_len(s)).map(|s| (*s).to_string())
}

/// Shortest string; the first one wins a tie.
pub fn shortest_string<S: AsRef<str>>(strings: &[S]) -> Option<String> {
    min_by_key_first(&as_strs(strings), |s| char_len(s)).map(|s| (*s).to_string())
}

/// Longest string containing the letter `e`.
pub fn longest_string_with_e<S: AsRef<str>>(strings: &[S]) -> Option<String> {
    longest_containing(strings, 'e')
}

/// Longest string containing `letter`; `None` if no string qualifies.
///
/// # Example
/// ```
/// use collection_utils::strings::longest_containing;
/// let words = ["tree", "elephant", "sky"];
/// assert_eq!(longest_containing(&words, 'e'), Some("elephant".to_string()));
/// assert_eq!(longest_containing(&words, 'q'), None);
/// ```
pub fn longest_containing<S: AsRef<str>>(strings: &[S], letter: char) -> Option<String> {
    let candidates: Vec<&str> = as_strs(strings)
        .into_iter()
        .filter(|s| s.contains(letter))
        .collect();
    longest_string(&candidates)
}

/// Word with the most occurrences. On a tie the word seen first wins.
///
/// # Example
/// ```
/// use collection_utils::strings::most_frequent_word;
/// let words = ["a", "b", "a", "c", "a", "b"];
/// assert_eq!(most_frequent_word(&words), Some("a".to_string()));
/// assert_eq!(most_frequent_word(&["x", "y"]), Some("x".to_string()));
/// ```
pub fn most_frequent_word<S: AsRef<str>>(words: &[S]) -> Option<String> {
    let words = as_strs(words);
    let counts = count_by(&words, |w| *w);
    max_by_key_first(&distinct(&words), |w| counts.get(w).copied().unwrap_or(0))
        .map(|w| (*w).to_string())
}

/// The three longest strings, longest first. Equal lengths keep input order.
pub fn top_three_longest_strings<S: AsRef<str>>(strings: &[S]) -> Vec<String> {
    top_longest(strings, TOP_LONGEST)
}

/// The `n` longest strings, longest first. Equal lengths keep input order.
///
/// # Example
/// ```
/// use collection_utils::strings::top_longest;
/// let words = ["a", "ccc", "bb", "ddd", "e"];
/// assert_eq!(top_longest(&words, 3), vec!["ccc", "ddd", "bb"]);
/// assert_eq!(top_longest(&words, 0), Vec::<String>::new());
/// ```
pub fn top_longest<S: AsRef<str>>(strings: &[S], n: usize) -> Vec<String> {
    let by_length = sorted_by(&as_strs(strings), |a, b| char_len(b).cmp(&char_len(a)));
    owned(by_length.into_iter().take(n))
}

// =============================================================================
// Ordering, deduplication and joining
// =============================================================================

/// Sorted copy in code-point order (uppercase before lowercase).
pub fn sort_strings<S: AsRef<str>>(strings: &[S]) -> Vec<String> {
    owned(sorted_by(&as_strs(strings), |a, b| a.cmp(b)))
}

/// Number of distinct words.
///
/// # Example
/// ```
/// use collection_utils::strings::count_unique_words;
/// assert_eq!(count_unique_words(&["to", "be", "or", "not", "to", "be"]), 4);
/// ```
pub fn count_unique_words<S: AsRef<str>>(words: &[S]) -> usize {
    words.iter().map(|s| s.as_ref()).collect::<HashSet<&str>>().len()
}

/// Every distinct `char` across all strings.
pub fn distinct_characters<S: AsRef<str>>(strings: &[S]) -> HashSet<char> {
    strings.iter().flat_map(|s| s.as_ref().chars()).collect()
}

/// Joins with commas: `["a", "b"]` becomes `"a,b"`.
pub fn concatenate_strings<S: AsRef<str>>(strings: &[S]) -> String {
    join_with(strings, SEPARATOR, |s| s.as_ref().to_string())
}

/// Wraps each string in double quotes, then joins with commas.
///
/// # Example
/// ```
/// use collection_utils::strings::concatenate_with_quotes;
/// assert_eq!(concatenate_with_quotes(&["a", "b c"]), r#""a","b c""#);
/// assert_eq!(concatenate_with_quotes::<&str>(&[]), "");
/// ```
pub fn concatenate_with_quotes<S: AsRef<str>>(strings: &[S]) -> String {
    join_with(strings, SEPARATOR, |s| format!("\"{}\"", s.as_ref()))
}

// =============================================================================
// Grouping
// =============================================================================

/// Groups by first `char`. Empty strings have no first character and are
/// left out.
///
/// # Example
/// ```
/// use collection_utils::strings::group_by_first_character;
/// let groups = group_by_first_character(&["banana", "apple", "", "blueberry"]);
/// assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec!['b', 'a']);
/// assert_eq!(groups.get(&'b').map(|g| g.len()), Some(2));
/// ```
pub fn group_by_first_character<S: AsRef<str>>(strings: &[S]) -> Groups<char, String> {
    strings
        .iter()
        .map(|s| s.as_ref())
        .filter_map(|s| s.chars().next().map(|first| (first, s.to_string())))
        .collect()
}

/// Same grouping as [`group_by_first_character`].
pub fn group_by_first_char<S: AsRef<str>>(strings: &[S]) -> Groups<char, String> {
    group_by_first_character(strings)
}

/// Groups by length in `char`s, keys in first-encounter order.
///
/// # Example
/// ```
/// use collection_utils::strings::group_by_string_length;
/// let groups = group_by_string_length(&["to", "tea", "be", "ten"]);
/// assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![2, 3]);
/// assert_eq!(groups.get(&3), Some(&["tea".to_string(), "ten".to_string()][..]));
/// ```
pub fn group_by_string_length<S: AsRef<str>>(strings: &[S]) -> Groups<usize, String> {
    group_by(&owned(strings), |s| char_len(s))
}

/// Same grouping as [`group_by_string_length`].
pub fn group_words_by_length<S: AsRef<str>>(words: &[S]) -> Groups<usize, String> {
    group_by_string_length(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_owned_and_borrowed() {
        let owned_words = vec!["x".to_string(), "yy".to_string()];
        assert_eq!(lengths_of_strings(&owned_words), vec![1, 2]);
        assert_eq!(lengths_of_strings(&["x", "yy"]), vec![1, 2]);
    }

    #[test]
    fn test_lengths_count_chars_not_bytes() {
        assert_eq!(lengths_of_strings(&["日本語"]), vec![3]);
        assert_eq!(sum_of_string_lengths(&["日本語", "ab"]), 5);
        assert_eq!(sum_of_string_lengths::<&str>(&[]), 0);
    }

    #[test]
    fn test_to_upper_case() {
        assert_eq!(to_upper_case(&["abc", "Straße"]), vec!["ABC", "STRASSE"]);
    }

    #[test]
    fn test_filter_empty_strings() {
        assert_eq!(filter_empty_strings(&["", "a", "", "b"]), vec!["a", "b"]);
        assert!(filter_empty_strings(&["", ""]).is_empty());
    }

    #[test]
    fn test_predicates() {
        assert!(contains_letter_a(&["xyz", "bar"]));
        assert!(!contains_letter_a(&["ABC"]));
        assert!(!contains_letter_a::<&str>(&[]));
        assert!(all_strings_non_empty::<&str>(&[]));
        assert!(!all_strings_non_empty(&["a", ""]));
    }

    #[test]
    fn test_first_non_empty_string() {
        assert_eq!(
            first_non_empty_string(&["", "", "first", "second"]),
            Some("first".to_string())
        );
        assert_eq!(first_non_empty_string(&["", ""]), None);
    }

    #[test]
    fn test_longest_and_shortest_prefer_first() {
        let words = ["bb", "aa", "c", "d", "ee"];
        assert_eq!(longest_string(&words), Some("bb".to_string()));
        assert_eq!(shortest_string(&words), Some("c".to_string()));
        assert_eq!(shortest_string::<String>(&[]), None);
    }

    #[test]
    fn test_longest_string_with_e() {
        assert_eq!(
            longest_string_with_e(&["three", "seventeen", "eleventy"]),
            Some("seventeen".to_string())
        );
        assert_eq!(longest_string_with_e(&["sky", "dry"]), None);
    }

    #[test]
    fn test_most_frequent_word() {
        assert_eq!(most_frequent_word::<&str>(&[]), None);
        assert_eq!(
            most_frequent_word(&["b", "a", "a", "b"]),
            Some("b".to_string())
        );
    }

    #[test]
    fn test_top_three_longest_strings() {
        let words = ["one", "three", "eleven", "two", "seven"];
        assert_eq!(
            top_three_longest_strings(&words),
            vec!["eleven", "three", "seven"]
        );
        assert_eq!(top_three_longest_strings(&["a"]), vec!["a"]);
    }

    #[test]
    fn test_sort_strings() {
        assert_eq!(
            sort_strings(&["pear", "Apple", "banana", "apple"]),
            vec!["Apple", "apple", "banana", "pear"]
        );
    }

    #[test]
    fn test_distinct_characters() {
        let chars = distinct_characters(&["aab", "bc"]);
        assert_eq!(chars, HashSet::from(['a', 'b', 'c']));
        assert!(distinct_characters::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_concatenate_strings() {
        assert_eq!(concatenate_strings(&["a", "b", "c"]), "a,b,c");
        assert_eq!(concatenate_strings::<&str>(&[]), "");
        assert_eq!(concatenate_strings(&[""]), "");
    }

    #[test]
    fn test_grouping_aliases_agree() {
        let words = ["apple", "avocado", "kiwi", "banana", "fig"];
        assert_eq!(group_by_first_char(&words), group_by_first_character(&words));
        assert_eq!(group_words_by_length(&words), group_by_string_length(&words));
    }

    #[test]
    fn test_group_by_string_length_order() {
        let groups = group_by_string_length(&["kiwi", "fig", "pear", "", "yam"]);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![4, 3, 0]);
        assert_eq!(groups.get(&0), Some(&[String::new()][..]));
    }
}

//! Pipelines over a single string, treated as a sequence of `char`s.

use std::collections::HashMap;

use collection_common::list::count_by;

use crate::constants::VOWELS;

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Number of vowels in `text`, either case.
///
/// # Example
/// ```
/// use collection_utils::text::count_vowels;
/// assert_eq!(count_vowels("Education"), 5);
/// assert_eq!(count_vowels("rhythm"), 0);
/// ```
pub fn count_vowels(text: &str) -> usize {
    text.chars().filter(|&c| is_vowel(c)).count()
}

/// Occurrences of each `char`. Case-sensitive.
///
/// # Example
/// ```
/// use collection_utils::text::count_character_occurrences;
/// let counts = count_character_occurrences("banana");
/// assert_eq!(counts[&'a'], 3);
/// assert_eq!(counts[&'n'], 2);
/// assert_eq!(counts.get(&'z'), None);
/// ```
pub fn count_character_occurrences(text: &str) -> HashMap<char, usize> {
    let chars: Vec<char> = text.chars().collect();
    count_by(&chars, |c| *c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_character_occurrences() {
        let counts = count_character_occurrences("AaA ü");
        assert_eq!(counts.len(), 4);
        assert_eq!(counts[&'A'], 2);
        assert_eq!(counts[&'a'], 1);
        assert_eq!(counts[&' '], 1);
        assert_eq!(counts[&'ü'], 1);
        assert!(count_character_occurrences("").is_empty());
    }

    #[test]
    fn test_vowels_in_both_cases() {
        assert_eq!(count_vowels("AEIOUaeiou"), 10);
        assert_eq!(count_vowels("yY"), 0);
        assert_eq!(count_vowels(""), 0);
        assert!(is_vowel('E'));
        assert!(!is_vowel('é'));
    }
}

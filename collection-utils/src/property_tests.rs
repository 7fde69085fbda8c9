//! Property-based tests using proptest.
//!
//! Invariants that should hold for every input, plus a check that the
//! operations give the same answers when called from several threads.

use std::collections::HashMap;
use std::thread;

use collection_common::list::group_by;
use proptest::prelude::*;

use crate::integers::*;
use crate::nested::flatten_list_of_lists;
use crate::strings::*;
use crate::text::count_character_occurrences;

fn numbers() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000_000i64..1_000_000, 0..40)
}

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-eA-E]{0,6}", 0..30)
}

fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut items = items.to_vec();
    items.sort();
    items
}

proptest! {
    // ========================================================================
    // Integer pipelines
    // ========================================================================

    #[test]
    fn evens_and_odds_sum_to_total(xs in prop::collection::vec(any::<i64>(), 0..40)) {
        let total = xs.iter().fold(0i64, |acc, &n| acc.wrapping_add(n));
        prop_assert_eq!(sum_of_evens(&xs).wrapping_add(sum_of_odds(&xs)), total);
    }

    #[test]
    fn remove_duplicates_is_idempotent(xs in prop::collection::vec(-5i64..5, 0..30)) {
        let once = remove_duplicates(&xs);
        prop_assert_eq!(remove_duplicates(&once), once);
    }

    #[test]
    fn descending_reversed_is_ascending(xs in prop::collection::vec(-10i64..10, 0..30)) {
        let mut descending = sort_descending(&xs);
        descending.reverse();
        prop_assert_eq!(descending, sort_ascending(&xs));
    }

    #[test]
    fn partition_preserves_elements(xs in numbers()) {
        let split = partition_even_odd(&xs);
        prop_assert!(split.get(true).iter().all(|n| n % 2 == 0));
        prop_assert!(split.get(false).iter().all(|n| n % 2 != 0));

        let (evens, odds) = split.into_parts();
        let rejoined = [evens, odds].concat();
        prop_assert_eq!(sorted(&rejoined), sorted(&xs));
    }

    #[test]
    fn grouping_preserves_elements(xs in numbers(), divisor in 1i64..7) {
        let groups = group_by(&xs, |n| n.rem_euclid(divisor));
        let flattened = flatten_list_of_lists(&groups.into_values().collect::<Vec<_>>());
        prop_assert_eq!(sorted(&flattened), sorted(&xs));

        let by_remainder = group_by_remainder(&xs);
        prop_assert!(by_remainder.iter().all(|(key, bucket)| bucket.iter().all(|n| n % 3 == *key)));
    }

    #[test]
    fn median_lies_between_extremes(xs in prop::collection::vec(-1_000i64..1_000, 1..30)) {
        let median = median_of_list(&xs).unwrap();
        let min = *xs.iter().min().unwrap() as f64;
        let max = max_in_list(&xs).unwrap() as f64;
        prop_assert!(min <= median && median <= max);
    }

    #[test]
    fn second_largest_is_below_max(xs in prop::collection::vec(-20i64..20, 1..30)) {
        let max = max_in_list(&xs).unwrap();
        match second_largest(&xs).unwrap() {
            Some(second) => {
                prop_assert!(second < max);
                prop_assert!(!xs.iter().any(|&n| second < n && n < max));
            }
            None => prop_assert!(xs.iter().all(|&n| n == max)),
        }
    }

    #[test]
    fn filter_primes_keeps_order(xs in prop::collection::vec(-10i64..200, 0..40)) {
        let primes = filter_primes(&xs);
        let mut rest = xs.iter();
        prop_assert!(primes.iter().all(|p| rest.any(|n| n == p)));
    }

    // ========================================================================
    // String pipelines
    // ========================================================================

    #[test]
    fn sort_strings_output_is_sorted(ws in words()) {
        let sorted_words = sort_strings(&ws);
        prop_assert!(is_sorted_alphabetically(&sorted_words));
        prop_assert_eq!(sorted_words.len(), ws.len());
    }

    #[test]
    fn grouping_by_length_preserves_words(ws in words()) {
        let groups = group_by_string_length(&ws);
        prop_assert!(groups.iter().all(|(len, bucket)| bucket.iter().all(|w| w.chars().count() == *len)));
        let rejoined: Vec<String> = groups.into_values().flatten().collect();
        prop_assert_eq!(sorted(&rejoined), sorted(&ws));
    }

    #[test]
    fn top_longest_takes_the_longest(ws in words(), n in 0usize..6) {
        let top = top_longest(&ws, n);
        prop_assert_eq!(top.len(), n.min(ws.len()));
        let lengths = lengths_of_strings(&top);
        prop_assert!(lengths.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn most_frequent_word_has_highest_count(ws in words()) {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for w in &ws {
            *counts.entry(w.as_str()).or_insert(0) += 1;
        }
        match most_frequent_word(&ws) {
            Some(word) => {
                let best = counts[word.as_str()];
                prop_assert!(counts.values().all(|&c| c <= best));
            }
            None => prop_assert!(ws.is_empty()),
        }
    }

    #[test]
    fn character_counts_cover_every_char(text in "\\PC{0,40}") {
        let counts = count_character_occurrences(&text);
        prop_assert_eq!(counts.values().sum::<usize>(), text.chars().count());
    }
}

#[test]
fn operations_agree_across_threads() {
    let numbers: Vec<i64> = (-50..50).collect();
    let words = vec!["alpha", "beta", "gamma", "delta", "epsilon", "beta"];

    let run = || {
        (
            sum_of_evens(&numbers),
            median_of_list(&numbers),
            second_largest(&numbers),
            group_by_remainder(&numbers),
            most_frequent_word(&words),
            group_by_first_character(&words),
        )
    };
    let expected = run();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(run)).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });

    // Inputs are untouched after concurrent use.
    assert_eq!(numbers, (-50..50).collect::<Vec<i64>>());
}

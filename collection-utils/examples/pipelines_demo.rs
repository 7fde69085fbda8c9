//! Collection Pipelines Demonstration
//!
//! Walks through one operation from each module and shows the two failure
//! kinds. Set `RUST_LOG=debug` to see the events emitted when an operation
//! rejects its input, or `RUST_LOG=trace` for the generators as well.
//!
//! Run with: cargo run --example pipelines_demo

use collection_utils::{derived, generation, integers, nested, strings, text};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Log filter built from `RUST_LOG`; INFO when the variable is unset or empty.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

fn main() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .init();

    println!("=== Collection Pipelines ===\n");

    // =========================================================================
    // Integers
    // =========================================================================
    println!("Integers");
    println!("{}", "=".repeat(60));

    let numbers = vec![7, 2, 9, 4, 2, 11, -3, 8];
    println!("  input:               {numbers:?}");
    println!("  sum of evens:        {}", integers::sum_of_evens(&numbers));
    println!("  average:             {}", integers::average_of_list(&numbers));
    println!("  median:              {:?}", integers::median_of_list(&numbers));
    println!("  second largest:      {:?}", integers::second_largest(&numbers));
    println!("  primes:              {:?}", integers::filter_primes(&numbers));
    println!("  without duplicates:  {:?}", integers::remove_duplicates(&numbers));
    println!("  descending:          {:?}", integers::sort_descending(&numbers));

    let split = integers::partition_even_odd(&numbers);
    println!("  evens / odds:        {:?} / {:?}", split.get(true), split.get(false));

    for (remainder, bucket) in integers::group_by_remainder(&numbers).iter() {
        println!("  n % 3 == {remainder:>2}:        {bucket:?}");
    }

    // =========================================================================
    // Strings
    // =========================================================================
    println!("\nStrings");
    println!("{}", "=".repeat(60));

    let words = ["pear", "apple", "", "banana", "avocado", "apple", "fig"];
    println!("  input:               {words:?}");
    println!("  longest:             {:?}", strings::longest_string(&words));
    println!("  top three:           {:?}", strings::top_three_longest_strings(&words));
    println!("  most frequent:       {:?}", strings::most_frequent_word(&words));
    println!("  quoted:              {}", strings::concatenate_with_quotes(&words));
    println!("  vowels per word:     {:?}", strings::count_vowels_in_strings(&words));

    for (first, bucket) in strings::group_by_first_character(&words).iter() {
        println!("  starts with {first}:       {bucket:?}");
    }

    // =========================================================================
    // Nested, text and derived maps
    // =========================================================================
    println!("\nNested, text and derived maps");
    println!("{}", "=".repeat(60));

    let lists = vec![vec![1, 2], vec![], vec![3, 4, 5]];
    println!("  flattened:           {:?}", nested::flatten_list_of_lists(&lists));

    let mut counts: Vec<(char, usize)> = text::count_character_occurrences("mississippi")
        .into_iter()
        .collect();
    counts.sort_unstable();
    println!("  'mississippi':       {counts:?}");
    println!("  factorials:          {:?}", derived::map_to_factorials(&[0, 5, 10]));

    // =========================================================================
    // Generation
    // =========================================================================
    println!("\nGeneration");
    println!("{}", "=".repeat(60));
    println!("  fibonacci:           {:?}", generation::first_ten_fibonacci());
    println!("  primes:              {:?}", generation::first_twenty_primes());
    println!("  squares:             {:?}", generation::squares_of_one_to_ten());
    println!("  sum of 100 evens:    {}", generation::sum_of_first_hundred_evens());

    // =========================================================================
    // Failures
    // =========================================================================
    println!("\nFailures");
    println!("{}", "=".repeat(60));

    let empty: &[i64] = &[];
    if let Err(err) = integers::max_in_list(empty) {
        println!("  error:               {err}");
    }
    if let Err(err) = integers::median_of_list(empty) {
        println!("  error:               {err}");
    }
    if let Err(err) = derived::map_to_factorials(&[3, -1]) {
        println!("  error:               {err}");
    }
    if let Err(err) = generation::first_fibonacci(100) {
        println!("  error:               {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::{Layer, Registry};

    fn max_level(directives: &str) -> Option<LevelFilter> {
        <EnvFilter as Layer<Registry>>::max_level_hint(&log_filter(directives))
    }

    #[test]
    fn test_log_filter_honours_requested_level() {
        assert_eq!(max_level("debug"), Some(LevelFilter::DEBUG));
        assert_eq!(max_level("trace"), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(max_level(""), Some(LevelFilter::INFO));
    }
}

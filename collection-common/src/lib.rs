//! # Collection Common
//!
//! Shared building blocks for the collection pipelines in `collection-utils`.
//!
//! ## Modules
//!
//! - [`error`]: The two failure kinds (`EmptyInput`, `InvalidArgument`)
//! - [`grouping`]: Ordered grouping and two-way partition results
//! - [`list`]: Generic combinators (group, partition, count, distinct, join, ...)
//! - [`numeric`]: Primality, factorial and the Fibonacci/prime streams
//!
//! ## Design Principles
//!
//! 1. **Pure Functional**: Inputs are borrowed and never mutated; results are freshly built
//! 2. **Explicit parameters**: Predicates and key extractors are passed in as `Fn` values
//! 3. **Iterator-centric**: Sequence work is done with iterator combinators
//! 4. **No sentinels**: Missing results are `Option`, failures are `Result`

pub mod error;
pub mod grouping;
pub mod list;
pub mod numeric;

// Re-export main types for convenience
pub use error::{CollectionError, Result};
pub use grouping::{Groups, Partition};

//! # Errors
//!
//! Collection pipelines fail in exactly two ways:
//!
//! - [`CollectionError::EmptyInput`]: the operation has no defined result for an
//!   empty sequence (maximum, median, second largest).
//! - [`CollectionError::InvalidArgument`]: a scalar argument is outside the
//!   operation's domain (negative factorial, a count too large to represent).
//!
//! Every other operation degrades to an identity element, an empty collection
//! or `None`.
//!
//! ## Example
//!
//! ```
//! use collection_common::error::{CollectionError, ensure_non_empty};
//!
//! let empty: &[i64] = &[];
//! let err = ensure_non_empty("median_of_list", empty).unwrap_err();
//! assert_eq!(err, CollectionError::EmptyInput { operation: "median_of_list" });
//! assert_eq!(err.to_string(), "median_of_list requires at least one element");
//! ```

/// Errors raised by collection operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("{operation} requires at least one element")]
    EmptyInput { operation: &'static str },

    #[error("invalid argument to {operation}: {reason}")]
    InvalidArgument {
        operation: &'static str,
        reason: String,
    },
}

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, CollectionError>;

impl CollectionError {
    /// Builds an [`CollectionError::EmptyInput`] for `operation`.
    pub fn empty_input(operation: &'static str) -> Self {
        tracing::debug!(operation, "rejecting empty input");
        CollectionError::EmptyInput { operation }
    }

    /// Builds an [`CollectionError::InvalidArgument`] for `operation`.
    pub fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!(operation, %reason, "rejecting invalid argument");
        CollectionError::InvalidArgument { operation, reason }
    }

    /// Name of the operation that raised the error.
    pub fn operation(&self) -> &'static str {
        match self {
            CollectionError::EmptyInput { operation }
            | CollectionError::InvalidArgument { operation, .. } => operation,
        }
    }
}

/// Returns `items` unchanged, or `EmptyInput` if it has no elements.
pub fn ensure_non_empty<'a, T>(operation: &'static str, items: &'a [T]) -> Result<&'a [T]> {
    if items.is_empty() {
        Err(CollectionError::empty_input(operation))
    } else {
        Ok(items)
    }
}

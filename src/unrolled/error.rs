//! Error types for the unrolled deque.
//!
//! Every fallible operation of [`UnrolledDeque`](super::UnrolledDeque) and
//! its iterators reports one of the variants of [`DequeError`]. Failures are
//! always detected before any state change, so a returned error never leaves
//! the deque half-updated.

use thiserror::Error;

/// Represents errors that can occur when working with an unrolled deque.
///
/// # Examples
///
/// ```rust
/// use unrolled_deque::{DequeError, UnrolledDeque};
///
/// let error = UnrolledDeque::<i32>::with_block_size(3).unwrap_err();
/// assert_eq!(
///     error,
///     DequeError::InvalidConfiguration {
///         block_size: 3,
///         reason: "block size must be even",
///     }
/// );
/// assert_eq!(
///     format!("{error}"),
///     "invalid configuration (block_size = 3): block size must be even"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DequeError {
    /// The requested block size is zero or odd.
    #[error("invalid configuration (block_size = {block_size}): {reason}")]
    InvalidConfiguration {
        /// The rejected block size.
        block_size: usize,
        /// Why the block size was rejected.
        reason: &'static str,
    },

    /// A strict read or removal was attempted on an empty deque.
    #[error("{operation}: deque is empty")]
    EmptyContainer {
        /// The name of the operation that failed.
        operation: &'static str,
    },

    /// An element was requested from an iterator with no remaining budget.
    #[error("iterator exhausted")]
    IteratorExhausted,

    /// The operation is deliberately not provided by the deque.
    #[error("{operation} is not supported by UnrolledDeque")]
    UnsupportedOperation {
        /// The name of the rejected operation.
        operation: &'static str,
    },
}

impl DequeError {
    pub(crate) const fn empty(operation: &'static str) -> Self {
        Self::EmptyContainer { operation }
    }

    pub(crate) const fn unsupported(operation: &'static str) -> Self {
        Self::UnsupportedOperation { operation }
    }
}

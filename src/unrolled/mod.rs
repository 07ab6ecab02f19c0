//! Block-chained double-ended queue.
//!
//! This module provides [`UnrolledDeque`], a deque whose elements live in a
//! doubly linked chain of fixed-capacity blocks:
//!
//! - [`UnrolledDeque`]: the container
//! - [`DequeConfig`]: construction-time configuration (block size)
//! - [`DequeError`]: errors reported by fallible operations
//! - [`Iter`], [`DescendingIter`], [`IntoIter`]: iterators
//!
//! # Examples
//!
//! ```rust
//! use unrolled_deque::UnrolledDeque;
//!
//! let mut deque = UnrolledDeque::with_block_size(4).unwrap();
//! for index in 1..=3 {
//!     deque.push_front(-index);
//!     deque.push_back(index);
//! }
//!
//! while let (Some(front), Some(back)) = (deque.pop_front(), deque.pop_back()) {
//!     assert_eq!(front, -back);
//! }
//! assert!(deque.is_empty());
//! ```
//!
//! ## Strict and non-strict access
//!
//! ```rust
//! use unrolled_deque::{DequeError, UnrolledDeque};
//!
//! let mut deque: UnrolledDeque<i32> = UnrolledDeque::new();
//! assert_eq!(deque.pop_front(), None);
//! assert_eq!(
//!     deque.remove_front(),
//!     Err(DequeError::EmptyContainer { operation: "remove_front" })
//! );
//! ```

mod arena;
mod config;
mod deque;
mod error;
mod iterator;

pub use config::DEFAULT_BLOCK_SIZE;
pub use config::DequeConfig;
pub use deque::UnrolledDeque;
pub use error::DequeError;
pub use iterator::DescendingIter;
pub use iterator::IntoIter;
pub use iterator::Iter;

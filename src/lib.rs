//! # unrolled-deque
//!
//! A double-ended queue built as a chain of fixed-capacity blocks
//! (an unrolled linked list).
//!
//! ## Overview
//!
//! A node-per-element linked list pays one allocation and two links for
//! every element, and a growable ring buffer pays a full copy whenever it
//! grows. [`UnrolledDeque`] sits between the two: elements are packed into
//! blocks of `block_size` slots, blocks are chained together, and both ends
//! grow one block at a time.
//!
//! - Amortized O(1) insertion and removal at both ends
//! - Forward and descending iteration
//! - Linear-scan containment queries
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`UnrolledDeque`] and
//!   [`DequeConfig`]
//!
//! ## Example
//!
//! ```rust
//! use unrolled_deque::prelude::*;
//!
//! let mut deque = UnrolledDeque::with_block_size(6).unwrap();
//! deque.push_front(1);
//! deque.extend_back(2..=5);
//!
//! let drained: Vec<i32> = std::iter::from_fn(|| deque.pop_front()).collect();
//! assert_eq!(drained, vec![1, 2, 3, 4, 5]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use unrolled_deque::prelude::*;
/// ```
pub mod prelude {
    pub use crate::unrolled::*;
}

pub mod unrolled;

pub use unrolled::{
    DEFAULT_BLOCK_SIZE, DequeConfig, DequeError, DescendingIter, IntoIter, Iter, UnrolledDeque,
};

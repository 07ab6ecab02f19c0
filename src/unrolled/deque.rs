//! Double-ended queue backed by a chain of fixed-capacity blocks.
//!
//! # Overview
//!
//! `UnrolledDeque` stores its elements in blocks of `block_size` slots that
//! are linked into a doubly linked chain. Two cursors track the first live
//! slot of the head block and the last live slot of the tail block:
//!
//! - O(1) `push_front`, `push_back`, `pop_front`, `pop_back`
//! - O(1) `front`, `back`, `len` and `is_empty`
//! - O(n) `contains`, `contains_all` and iteration
//!
//! # Block Layout
//!
//! A fresh deque owns a single block. Its head cursor sits at `center + 1`
//! and its tail cursor at `center`, where `center = block_size / 2 - 1`, so
//! the first front push and the first back push land on the two slots
//! straddling the middle of the block. The block can therefore grow in both
//! directions before a second block is needed.
//!
//! A new block is allocated only when a cursor runs off its block on
//! insertion, and a block is released as soon as its last live element is
//! removed. Whenever the deque becomes empty it returns to the centered
//! single-block layout above.
//!
//! # Examples
//!
//! ```rust
//! use unrolled_deque::UnrolledDeque;
//!
//! let mut deque = UnrolledDeque::with_block_size(4).unwrap();
//! deque.push_back(2);
//! deque.push_back(3);
//! deque.push_front(1);
//!
//! assert_eq!(deque.front(), Some(&1));
//! assert_eq!(deque.back(), Some(&3));
//! assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! assert_eq!(deque.pop_front(), Some(1));
//! assert_eq!(deque.pop_back(), Some(3));
//! assert_eq!(deque.len(), 1);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;

use super::arena::{BlockArena, BlockHandle};
use super::config::{DEFAULT_BLOCK_SIZE, DequeConfig};
use super::iterator::{DescendingIter, IntoIter, Iter};
use super::DequeError;

static_assertions::const_assert!(DEFAULT_BLOCK_SIZE > 0 && DEFAULT_BLOCK_SIZE % 2 == 0);

/// A double-ended queue built as an unrolled linked list.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new`          | O(block size) |
/// | `push_front`   | O(1), O(block size) when a block is allocated |
/// | `push_back`    | O(1), O(block size) when a block is allocated |
/// | `pop_front`    | O(1)       |
/// | `pop_back`     | O(1)       |
/// | `front`        | O(1)       |
/// | `back`         | O(1)       |
/// | `len`          | O(1)       |
/// | `contains`     | O(n)       |
/// | `contains_all` | O(n + m)   |
/// | `clear`        | O(n)       |
///
/// # Examples
///
/// ```rust
/// use unrolled_deque::UnrolledDeque;
///
/// let mut deque: UnrolledDeque<i32> = UnrolledDeque::new();
/// deque.push_back(42);
/// assert_eq!(deque.front(), Some(&42));
/// assert_eq!(deque.len(), 1);
/// ```
#[derive(Clone)]
pub struct UnrolledDeque<T> {
    arena: BlockArena<T>,
    head: BlockHandle,
    tail: BlockHandle,
    head_index: usize,
    tail_index: usize,
    len: usize,
}

impl<T> UnrolledDeque<T> {
    /// Creates an empty deque with [`DEFAULT_BLOCK_SIZE`] slots per block.
    #[must_use]
    pub fn new() -> Self {
        Self::build(DEFAULT_BLOCK_SIZE)
    }

    /// Creates an empty deque with `block_size` slots per block.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::InvalidConfiguration`] if `block_size` is zero
    /// or odd.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_deque::UnrolledDeque;
    ///
    /// assert!(UnrolledDeque::<i32>::with_block_size(8).is_ok());
    /// assert!(UnrolledDeque::<i32>::with_block_size(0).is_err());
    /// assert!(UnrolledDeque::<i32>::with_block_size(7).is_err());
    /// ```
    pub fn with_block_size(block_size: usize) -> Result<Self, DequeError> {
        Self::with_config(&DequeConfig::new().block_size(block_size))
    }

    /// Creates an empty deque from a [`DequeConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::InvalidConfiguration`] if the configuration
    /// does not validate.
    pub fn with_config(config: &DequeConfig) -> Result<Self, DequeError> {
        config.validate()?;
        Ok(Self::build(config.get_block_size()))
    }

    fn build(block_size: usize) -> Self {
        let mut arena = BlockArena::new(block_size);
        let head = arena.allocate();
        let center = block_size / 2 - 1;
        Self {
            arena,
            head,
            tail: head,
            head_index: center + 1,
            tail_index: center,
            len: 0,
        }
    }

    /// Puts the cursors back into the centered empty layout.
    fn reset_cursors(&mut self) {
        let center = self.center();
        self.tail = self.head;
        self.len = 0;
        self.head_index = center + 1;
        self.tail_index = center;
    }

    #[inline]
    const fn center(&self) -> usize {
        self.arena.block_size() / 2 - 1
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns the number of elements in the deque.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots per block.
    #[inline]
    #[must_use]
    pub const fn block_size(&self) -> usize {
        self.arena.block_size()
    }

    /// Returns the number of blocks currently in the chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_deque::UnrolledDeque;
    ///
    /// let mut deque = UnrolledDeque::with_block_size(4).unwrap();
    /// deque.extend_back(1..=2);
    /// assert_eq!(deque.block_count(), 1);
    /// deque.push_back(3);
    /// assert_eq!(deque.block_count(), 2);
    /// ```
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.arena.live_blocks()
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Prepends an element to the front of the deque.
    pub fn push_front(&mut self, element: T) {
        if self.head_index == 0 {
            debug_assert!(!self.is_empty(), "empty deque keeps its head cursor centered");
            let block = self.arena.allocate();
            self.arena.link(block, self.head);
            self.head = block;
            self.head_index = self.block_size() - 1;
        } else {
            self.head_index -= 1;
        }
        self.arena.get_mut(self.head).store(self.head_index, element);
        self.len += 1;
    }

    /// Appends an element to the back of the deque.
    pub fn push_back(&mut self, element: T) {
        if self.tail_index + 1 == self.block_size() {
            let block = self.arena.allocate();
            self.arena.link(self.tail, block);
            self.tail = block;
            self.tail_index = 0;
        } else {
            self.tail_index += 1;
        }
        self.arena.get_mut(self.tail).store(self.tail_index, element);
        self.len += 1;
    }

    /// Prepends an element, returning `true`.
    ///
    /// The deque is unbounded, so an offer never fails.
    pub fn offer_front(&mut self, element: T) -> bool {
        self.push_front(element);
        true
    }

    /// Appends an element, returning `true`.
    ///
    /// The deque is unbounded, so an offer never fails.
    pub fn offer_back(&mut self, element: T) -> bool {
        self.push_back(element);
        true
    }

    /// Queue-style alias of [`offer_back`](Self::offer_back).
    pub fn offer(&mut self, element: T) -> bool {
        self.offer_back(element)
    }

    /// Stack-style alias of [`push_front`](Self::push_front).
    pub fn push(&mut self, element: T) {
        self.push_front(element);
    }

    /// Appends every element of `elements` in iteration order.
    ///
    /// Returns `true` if at least one element was appended.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_deque::UnrolledDeque;
    ///
    /// let mut deque = UnrolledDeque::new();
    /// assert!(!deque.extend_back(Vec::<i32>::new()));
    /// assert!(deque.extend_back(vec![1, 2, 3]));
    /// assert_eq!(deque.len(), 3);
    /// ```
    pub fn extend_back<I: IntoIterator<Item = T>>(&mut self, elements: I) -> bool {
        let before = self.len;
        for element in elements {
            self.push_back(element);
        }
        self.len != before
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Removes and returns the first element, or `None` if the deque is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let element = self.arena.get_mut(self.head).take(self.head_index);
        self.head_index += 1;
        self.len -= 1;

        if self.is_empty() {
            self.reset_cursors();
        } else if self.head_index == self.block_size()
            && let Some(next) = self.arena.next(self.head)
        {
            self.arena.release(self.head);
            self.arena.detach_previous(next);
            self.head = next;
            self.head_index = 0;
        }
        element
    }

    /// Removes and returns the last element, or `None` if the deque is
    /// empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let element = self.arena.get_mut(self.tail).take(self.tail_index);
        self.len -= 1;

        if self.is_empty() {
            self.reset_cursors();
        } else if self.tail_index == 0 {
            if let Some(previous) = self.arena.previous(self.tail) {
                self.arena.release(self.tail);
                self.arena.detach_next(previous);
                self.tail = previous;
                self.tail_index = self.block_size() - 1;
            }
        } else {
            self.tail_index -= 1;
        }
        element
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn remove_front(&mut self) -> Result<T, DequeError> {
        self.pop_front()
            .ok_or_else(|| DequeError::empty("remove_front"))
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn remove_back(&mut self) -> Result<T, DequeError> {
        self.pop_back().ok_or_else(|| DequeError::empty("remove_back"))
    }

    /// Queue-style alias of [`pop_front`](Self::pop_front).
    pub fn poll(&mut self) -> Option<T> {
        self.pop_front()
    }

    /// Stack-style alias of [`remove_front`](Self::remove_front).
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn pop(&mut self) -> Result<T, DequeError> {
        self.pop_front().ok_or_else(|| DequeError::empty("pop"))
    }

    /// Queue-style alias of [`remove_front`](Self::remove_front).
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn remove(&mut self) -> Result<T, DequeError> {
        self.pop_front().ok_or_else(|| DequeError::empty("remove"))
    }

    /// Removes all elements, leaving a single fresh block.
    pub fn clear(&mut self) {
        tracing::debug!(
            len = self.len,
            block_count = self.block_count(),
            "clearing deque"
        );
        self.head = self.arena.reset();
        self.reset_cursors();
    }

    // =========================================================================
    // Peek
    // =========================================================================

    /// Returns a reference to the first element, if any.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.arena.get(self.head).slot(self.head_index)
    }

    /// Returns a reference to the last element, if any.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.arena.get(self.tail).slot(self.tail_index)
    }

    /// Returns a mutable reference to the first element, if any.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        self.arena.get_mut(self.head).slot_mut(self.head_index)
    }

    /// Returns a mutable reference to the last element, if any.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        self.arena.get_mut(self.tail).slot_mut(self.tail_index)
    }

    /// Queue-style alias of [`front`](Self::front).
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.front()
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn first(&self) -> Result<&T, DequeError> {
        self.front().ok_or_else(|| DequeError::empty("first"))
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn last(&self) -> Result<&T, DequeError> {
        self.back().ok_or_else(|| DequeError::empty("last"))
    }

    /// Queue-style alias of [`first`](Self::first).
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn element(&self) -> Result<&T, DequeError> {
        self.front().ok_or_else(|| DequeError::empty("element"))
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Creates an iterator from the first element to the last.
    #[must_use]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.head, self.head_index, self.len)
    }

    /// Creates an iterator from the last element to the first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_deque::UnrolledDeque;
    ///
    /// let deque: UnrolledDeque<i32> = (1..=3).collect();
    /// let reversed: Vec<&i32> = deque.descending_iter().collect();
    /// assert_eq!(reversed, vec![&3, &2, &1]);
    /// ```
    #[must_use]
    pub const fn descending_iter(&self) -> DescendingIter<'_, T> {
        DescendingIter::new(&self.arena, self.tail, self.tail_index, self.len)
    }

    /// Copies every element into a new `Vec`, front to back.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    // =========================================================================
    // Containment
    // =========================================================================

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|element| element == value)
    }

    /// Returns `true` if every value in `values` is present in the deque.
    ///
    /// Duplicates in `values` are collapsed: the query is a set, so
    /// `[1, 1]` is contained in a deque holding a single `1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_deque::UnrolledDeque;
    ///
    /// let deque: UnrolledDeque<i32> = (1..=5).collect();
    /// assert!(deque.contains_all(&[]));
    /// assert!(deque.contains_all(&[2, 4, 4]));
    /// assert!(!deque.contains_all(&[2, 6]));
    /// ```
    pub fn contains_all<'q, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'q T>,
        T: Eq + Hash + 'q,
    {
        let mut values = values.into_iter();
        let Some(first) = values.next() else {
            return true;
        };
        let Some(second) = values.next() else {
            return self.contains(first);
        };

        let mut pending: HashSet<&T> = [first, second].into_iter().chain(values).collect();
        for element in self {
            pending.remove(element);
            if pending.is_empty() {
                return true;
            }
        }
        pending.is_empty()
    }
}

// =============================================================================
// Unsupported Operations
// =============================================================================

/// Removal by value and bulk filtering cannot be done without shifting
/// elements across blocks, so they are rejected outright.
#[allow(clippy::unused_self, clippy::needless_pass_by_ref_mut)]
impl<T> UnrolledDeque<T> {
    /// Always fails; removing the first occurrence of a value is not
    /// supported.
    ///
    /// # Errors
    ///
    /// Always returns [`DequeError::UnsupportedOperation`].
    pub fn remove_first_occurrence(&mut self, _value: &T) -> Result<bool, DequeError> {
        Err(DequeError::unsupported("remove_first_occurrence"))
    }

    /// Always fails; removing the last occurrence of a value is not
    /// supported.
    ///
    /// # Errors
    ///
    /// Always returns [`DequeError::UnsupportedOperation`].
    pub fn remove_last_occurrence(&mut self, _value: &T) -> Result<bool, DequeError> {
        Err(DequeError::unsupported("remove_last_occurrence"))
    }

    /// Always fails; removing an arbitrary element is not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`DequeError::UnsupportedOperation`].
    pub fn remove_element(&mut self, _value: &T) -> Result<bool, DequeError> {
        Err(DequeError::unsupported("remove_element"))
    }

    /// Always fails; bulk removal is not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`DequeError::UnsupportedOperation`].
    pub fn remove_all<'q, I>(&mut self, _values: I) -> Result<bool, DequeError>
    where
        I: IntoIterator<Item = &'q T>,
        T: 'q,
    {
        Err(DequeError::unsupported("remove_all"))
    }

    /// Always fails; bulk retention is not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`DequeError::UnsupportedOperation`].
    pub fn retain_all<'q, I>(&mut self, _values: I) -> Result<bool, DequeError>
    where
        I: IntoIterator<Item = &'q T>,
        T: 'q,
    {
        Err(DequeError::unsupported("retain_all"))
    }

    /// Always fails; removal by predicate is not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`DequeError::UnsupportedOperation`].
    pub fn remove_if<F>(&mut self, _predicate: F) -> Result<bool, DequeError>
    where
        F: FnMut(&T) -> bool,
    {
        Err(DequeError::unsupported("remove_if"))
    }
}

impl<T> Default for UnrolledDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for UnrolledDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for UnrolledDeque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<T> Extend<T> for UnrolledDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.extend_back(iter);
    }
}

impl<T> FromIterator<T> for UnrolledDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend_back(iter);
        deque
    }
}

impl<T> IntoIterator for UnrolledDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a UnrolledDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for UnrolledDeque<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct UnrolledDequeVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> UnrolledDequeVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for UnrolledDequeVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = UnrolledDeque<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut deque = UnrolledDeque::new();
        while let Some(element) = seq.next_element()? {
            deque.push_back(element);
        }
        Ok(deque)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for UnrolledDeque<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(UnrolledDequeVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

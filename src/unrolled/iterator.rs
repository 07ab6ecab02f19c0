//! Iterators over an [`UnrolledDeque`].
//!
//! Each borrowing iterator carries its own cursor (block handle, offset
//! within the block and remaining element budget) captured when it is
//! created. The budget, not the block layout, decides when iteration stops.

use std::iter::FusedIterator;

use super::arena::{BlockArena, BlockHandle};
use super::{DequeError, UnrolledDeque};

/// Iterator from the first element of a deque to the last.
///
/// Created by [`UnrolledDeque::iter`].
pub struct Iter<'a, T> {
    arena: &'a BlockArena<T>,
    block: BlockHandle,
    index: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) const fn new(
        arena: &'a BlockArena<T>,
        block: BlockHandle,
        index: usize,
        remaining: usize,
    ) -> Self {
        Self {
            arena,
            block,
            index,
            remaining,
        }
    }

    /// Returns the next element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::IteratorExhausted`] once every element has been
    /// produced.
    pub fn try_next(&mut self) -> Result<&'a T, DequeError> {
        self.next().ok_or(DequeError::IteratorExhausted)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let arena = self.arena;
        let element = arena.get(self.block).slot(self.index);
        self.index += 1;
        self.remaining -= 1;

        if self.index == arena.block_size()
            && self.remaining > 0
            && let Some(next) = arena.next(self.block)
        {
            self.block = next;
            self.index = 0;
        }
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self::new(self.arena, self.block, self.index, self.remaining)
    }
}

/// Iterator from the last element of a deque to the first.
///
/// Created by [`UnrolledDeque::descending_iter`].
pub struct DescendingIter<'a, T> {
    arena: &'a BlockArena<T>,
    block: BlockHandle,
    index: usize,
    remaining: usize,
}

impl<'a, T> DescendingIter<'a, T> {
    pub(crate) const fn new(
        arena: &'a BlockArena<T>,
        block: BlockHandle,
        index: usize,
        remaining: usize,
    ) -> Self {
        Self {
            arena,
            block,
            index,
            remaining,
        }
    }

    /// Returns the next element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::IteratorExhausted`] once every element has been
    /// produced.
    pub fn try_next(&mut self) -> Result<&'a T, DequeError> {
        self.next().ok_or(DequeError::IteratorExhausted)
    }
}

impl<'a, T> Iterator for DescendingIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let arena = self.arena;
        let element = arena.get(self.block).slot(self.index);
        self.remaining -= 1;

        if self.remaining > 0 {
            if self.index > 0 {
                self.index -= 1;
            } else if let Some(previous) = arena.previous(self.block) {
                self.block = previous;
                self.index = arena.block_size() - 1;
            }
        }
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for DescendingIter<'_, T> {}

impl<T> FusedIterator for DescendingIter<'_, T> {}

impl<T> Clone for DescendingIter<'_, T> {
    fn clone(&self) -> Self {
        Self::new(self.arena, self.block, self.index, self.remaining)
    }
}

/// Owning iterator that drains a deque from front to back.
///
/// Created by `UnrolledDeque::into_iter`. Iterating from the back with
/// [`DoubleEndedIterator::next_back`] drains from the other end.
pub struct IntoIter<T> {
    deque: UnrolledDeque<T>,
}

impl<T> IntoIter<T> {
    pub(crate) const fn new(deque: UnrolledDeque<T>) -> Self {
        Self { deque }
    }

    /// Returns the next element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::IteratorExhausted`] once the deque is drained.
    pub fn try_next(&mut self) -> Result<T, DequeError> {
        self.next().ok_or(DequeError::IteratorExhausted)
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.deque.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

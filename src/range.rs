// SPDX-License-Identifier: Apache-2.0

//! Position abstraction over random-access sequences
//!
//! The search core never works with memory addresses. A sorted range is any
//! [`RandomAccess`] sequence plus a pair of `usize` positions `[begin, end)`;
//! offsets are added to positions and distances are plain subtraction.

use std::collections::VecDeque;

/// A sequence with constant-time positional addressing.
///
/// Implementations must return the same element for the same position for as
/// long as a search borrows the sequence.
pub trait RandomAccess {
    type Item;

    /// Number of addressable positions.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `position`. Panics when `position >= len()`.
    fn at(&self, position: usize) -> &Self::Item;
}

impl<T> RandomAccess for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn at(&self, position: usize) -> &T {
        &self[position]
    }
}

impl<T, const N: usize> RandomAccess for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, position: usize) -> &T {
        &self[position]
    }
}

impl<T> RandomAccess for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn at(&self, position: usize) -> &T {
        &self[position]
    }
}

impl<T> RandomAccess for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn at(&self, position: usize) -> &T {
        &self[position]
    }
}

/// The active window `[start, start + length)` of one search call.
///
/// Owned by a single invocation; it only ever shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub length: usize,
}

impl Window {
    #[inline]
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Window covering `[begin, end)`. Panics in debug builds if `begin > end`.
    #[inline]
    pub fn from_bounds(begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end, "range begin {} is past end {}", begin, end);
        Self {
            start: begin,
            length: end - begin,
        }
    }

    /// One past the last position of the window.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Length of each of the first `arity - 1` fragments. The remainder
    /// `length % arity` belongs to the last fragment.
    #[inline]
    pub fn fragment_length(&self, arity: usize) -> usize {
        self.length / arity
    }

    /// Move the start forward by `offset`, keeping the end fixed.
    #[inline]
    pub fn advance(&mut self, offset: usize) {
        debug_assert!(offset <= self.length);
        self.start += offset;
        self.length -= offset;
    }

    /// Keep the start, shrink to `length`.
    #[inline]
    pub fn truncate(&mut self, length: usize) {
        debug_assert!(length <= self.length);
        self.length = length;
    }
}

//! Core traits and types for Lomsort.
//!
//! This module defines:
//! - [`Sequence`]: The trait a container implements to be sorted in place.
//! - [`Range`]: Inclusive index pair describing the sub-sequence being sorted.

use std::collections::VecDeque;

/// A mutable, contiguously indexed collection that can be sorted in place.
///
/// The sorter only ever reads elements by index and exchanges two positions,
/// so any random-access container can be sorted without copying it into a
/// `Vec` first.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use lomsort::core::Sequence;
///
/// struct Scores {
///     values: Vec<u32>,
/// }
///
/// impl Sequence for Scores {
///     type Item = u32;
///
///     fn get(&self, index: usize) -> &u32 {
///         &self.values[index]
///     }
///
///     fn swap(&mut self, a: usize, b: usize) {
///         self.values.swap(a, b);
///     }
///
///     fn len(&self) -> usize {
///         self.values.len()
///     }
/// }
/// ```
pub trait Sequence {
    /// Element type stored in the sequence.
    type Item;

    /// Returns a reference to the element at `index`.
    ///
    /// Implementations may panic if `index >= self.len()`.
    fn get(&self, index: usize) -> &Self::Item;

    /// Exchanges the elements at positions `a` and `b`.
    fn swap(&mut self, a: usize, b: usize);

    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline(always)]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_mut_slice()).
impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline(always)]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

// VecDeque has O(1) random access and a native swap, so it sorts without
// being made contiguous.
impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline(always)]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

/// Inclusive index range `[lo, hi]` of a sub-sequence awaiting sorting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Range {
    pub lo: usize,
    pub hi: usize,
}

impl Range {
    /// Builds the range `[lo, hi]`.
    pub fn new(lo: usize, hi: usize) -> Self {
        Self { lo, hi }
    }

    /// Full range of a sequence of length `len`, or `None` when it is empty.
    pub fn of(len: usize) -> Option<Self> {
        len.checked_sub(1).map(|hi| Self { lo: 0, hi })
    }

    /// Number of elements covered by the range.
    pub fn len(&self) -> usize {
        self.hi.saturating_sub(self.lo) + usize::from(self.lo <= self.hi)
    }

    /// `true` when `lo > hi`.
    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    /// `true` when the range holds at most one element and is therefore sorted.
    pub fn is_trivial(&self) -> bool {
        self.lo >= self.hi
    }

    /// Child range `[lo, pi - 1]` left of the partition index, if non-empty.
    pub fn left_of(&self, pi: usize) -> Option<Self> {
        match pi.checked_sub(1) {
            Some(hi) if hi >= self.lo => Some(Self { lo: self.lo, hi }),
            _ => None,
        }
    }

    /// Child range `[pi + 1, hi]` right of the partition index, if non-empty.
    pub fn right_of(&self, pi: usize) -> Option<Self> {
        let lo = pi + 1;
        (lo <= self.hi).then_some(Self { lo, hi: self.hi })
    }
}

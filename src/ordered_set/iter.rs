//! Iterators over an [`OrderedSet`](super::OrderedSet).

use std::iter::FusedIterator;

use super::sequence::{Handle, Sequence};

/// Iterator over references to the members of an `OrderedSet`, front to back.
///
/// Created by [`OrderedSet::iter`](super::OrderedSet::iter).
pub struct Iter<'a, T> {
    sequence: &'a Sequence<T>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) const fn new(sequence: &'a Sequence<T>) -> Self {
        Self {
            sequence,
            front: sequence.head(),
            back: sequence.tail(),
            remaining: sequence.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        self.remaining -= 1;
        self.front = self.sequence.next(handle);
        Some(self.sequence.get(handle))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        self.remaining -= 1;
        self.back = self.sequence.previous(handle);
        Some(self.sequence.get(handle))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the members of an `OrderedSet`, front to back.
///
/// Created by the `IntoIterator` implementation of `OrderedSet`.
pub struct IntoIter<T> {
    sequence: Sequence<T>,
}

impl<T> IntoIter<T> {
    pub(super) const fn new(sequence: Sequence<T>) -> Self {
        Self { sequence }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.sequence.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.sequence.len(), Some(self.sequence.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.sequence.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.sequence.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

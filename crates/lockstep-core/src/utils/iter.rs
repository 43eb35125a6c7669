// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Cursor Iterator Bridge
//!
//! `CursorIter<C>` walks a half-open cursor pair `[begin, end)` and exposes it
//! as a standard `Iterator`, so adaptor ranges plug into `for` loops,
//! `collect`, and the rest of the iterator ecosystem.
//!
//! ## Highlights
//!
//! - Stops as soon as `front.equals(&back)`, honoring adaptor-specific
//!   termination (a zip ends at its shortest component).
//! - Exact `size_hint` through `Cursor::count_to`, hence `ExactSizeIterator`.
//! - `FusedIterator`: once exhausted it stays exhausted.
//!
//! ## Usage
//!
//! ```rust
//! use lockstep_core::cursor::Cursor;
//! use lockstep_core::utils::iter::CursorIter;
//!
//! #[derive(Clone)]
//! struct Counter(isize);
//!
//! impl Cursor for Counter {
//!     type Item = isize;
//!     fn get(&self) -> isize { self.0 }
//!     fn advance(&mut self, n: isize) { self.0 += n; }
//!     fn distance_to(&self, other: &Self) -> isize { other.0 - self.0 }
//! }
//!
//! let it = CursorIter::new(Counter(2), Counter(5));
//! assert_eq!(it.len(), 3);
//! assert_eq!(it.collect::<Vec<_>>(), vec![2, 3, 4]);
//! ```

use crate::cursor::Cursor;
use std::iter::FusedIterator;

/// An iterator over the half-open cursor range `[front, back)`.
#[derive(Debug, Clone)]
pub struct CursorIter<C> {
    front: C,
    back: C,
}

impl<C> CursorIter<C> {
    /// Creates an iterator yielding every position from `begin` up to, but
    /// excluding, `end`.
    #[inline]
    pub fn new(begin: C, end: C) -> Self {
        Self {
            front: begin,
            back: end,
        }
    }

    /// Returns the cursor that will be read next.
    #[inline]
    pub fn front(&self) -> &C {
        &self.front
    }

    /// Returns the end cursor.
    #[inline]
    pub fn back(&self) -> &C {
        &self.back
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front.equals(&self.back) {
            return None;
        }
        let item = self.front.get();
        self.front.increment();
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.front.count_to(&self.back);
        (n, Some(n))
    }
}

impl<C: Cursor> ExactSizeIterator for CursorIter<C> {
    #[inline]
    fn len(&self) -> usize {
        self.front.count_to(&self.back)
    }
}

impl<C: Cursor> FusedIterator for CursorIter<C> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Counter(isize);

    impl Cursor for Counter {
        type Item = isize;

        fn get(&self) -> isize {
            self.0
        }

        fn advance(&mut self, n: isize) {
            self.0 += n;
        }

        fn distance_to(&self, other: &Self) -> isize {
            other.0 - self.0
        }
    }

    #[test]
    fn test_yields_half_open_range() {
        let mut iter = CursorIter::new(Counter(0), Counter(3));
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_empty_range() {
        let mut iter = CursorIter::new(Counter(4), Counter(4));
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_len_tracks_progress() {
        let mut iter = CursorIter::new(Counter(0), Counter(5));
        assert_eq!(iter.len(), 5);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.front().get(), 2);
        assert_eq!(iter.back().get(), 5);
    }

    #[test]
    fn test_fused_iterator() {
        let mut iter = CursorIter::new(Counter(0), Counter(1));
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);

        fn assert_fused<I: FusedIterator>(_: I) {}
        assert_fused(iter);
    }
}

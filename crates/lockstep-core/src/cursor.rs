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

//! # Random-Access Cursors
//!
//! A `Cursor` is a position in a sequence that can be read, moved by a signed
//! offset in constant time, and compared with another position of the same
//! sequence. Adaptors (`Strided`, `Zip`) and numeric ranges are all cursors,
//! so they compose: a zip of strided cursors is itself a cursor.
//!
//! ## Contract
//!
//! Implementors supply `get`, `advance` and `distance_to`. Everything else is
//! derived from those three and may be overridden when an adaptor has a
//! different notion of "reached the end":
//!
//! - `equals` is the termination test used by traversal loops. For plain
//!   cursors it is `distance_to(other) == 0`; a zip reports equality as soon as
//!   any component reaches its end, and a numeric range as soon as the value
//!   reaches or passes its bound.
//! - `precedes` is a coarse ordering. It is not guaranteed to be the negation
//!   of `equals` for composite cursors.
//! - `count_to` is the number of `increment` calls until `equals(end)` holds.
//!
//! ## Usage
//!
//! ```rust
//! use lockstep_core::cursor::Cursor;
//!
//! #[derive(Clone, Debug)]
//! struct Counter(isize);
//!
//! impl Cursor for Counter {
//!     type Item = isize;
//!
//!     fn get(&self) -> isize {
//!         self.0
//!     }
//!
//!     fn advance(&mut self, n: isize) {
//!         self.0 += n;
//!     }
//!
//!     fn distance_to(&self, other: &Self) -> isize {
//!         other.0 - self.0
//!     }
//! }
//!
//! let begin = Counter(0);
//! let end = Counter(4);
//! assert_eq!(begin.count_to(&end), 4);
//! assert_eq!(begin.at(2), 2);
//! assert!(begin.offset(4).equals(&end));
//! ```

/// A random-access position in a sequence.
pub trait Cursor: Clone {
    /// The value produced when the cursor is read.
    type Item;

    /// Reads the element at the current position.
    fn get(&self) -> Self::Item;

    /// Moves the cursor by `n` positions. Negative values move backwards.
    fn advance(&mut self, n: isize);

    /// Returns the signed number of positions from `self` to `other`.
    fn distance_to(&self, other: &Self) -> isize;

    /// Reads the element `n` positions away without moving.
    #[inline]
    fn at(&self, n: isize) -> Self::Item {
        self.clone().offset(n).get()
    }

    /// Returns `true` when `self` and `other` denote the same position.
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.distance_to(other) == 0
    }

    /// Returns `true` when `self` lies strictly before `other`.
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        self.distance_to(other) > 0
    }

    /// Returns the number of increments until `self` equals `end`, or zero if
    /// `end` is not ahead of `self`.
    #[inline]
    fn count_to(&self, end: &Self) -> usize {
        self.distance_to(end).max(0) as usize
    }

    /// Moves one position forward.
    #[inline]
    fn increment(&mut self) {
        self.advance(1);
    }

    /// Moves one position backward.
    #[inline]
    fn decrement(&mut self) {
        self.advance(-1);
    }

    /// Moves `n` positions backward.
    #[inline]
    fn retreat(&mut self, n: isize) {
        self.advance(-n);
    }

    /// Moves one position forward and returns the cursor as it was before.
    #[inline]
    fn post_increment(&mut self) -> Self {
        let prev = self.clone();
        self.increment();
        prev
    }

    /// Moves one position backward and returns the cursor as it was before.
    #[inline]
    fn post_decrement(&mut self) -> Self {
        let prev = self.clone();
        self.decrement();
        prev
    }

    /// Returns a copy moved by `n` positions.
    #[inline]
    fn offset(mut self, n: isize) -> Self {
        self.advance(n);
        self
    }
}

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

//! # Slice Cursors
//!
//! `SliceCursor<'a, T>` is the random-access cursor over a borrowed slice and
//! the leaf that every adaptor ultimately wraps. Reading yields `&'a T`.
//!
//! Mutable sources are viewed as `&[Cell<T>]` (via `Cell::from_mut`), so a
//! cursor over them reads `&'a Cell<T>` and writes go through `Cell::set`.
//! This lets several cursors into one buffer coexist, which lockstep
//! traversal requires, without any `unsafe`.
//!
//! ```rust
//! use lockstep_core::cursor::Cursor;
//! use lockstep_iter::slice::SliceCursor;
//!
//! let data = [10, 20, 30];
//! let begin = SliceCursor::begin(&data);
//! let end = SliceCursor::end(&data);
//! assert_eq!(*begin.get(), 10);
//! assert_eq!(*begin.at(2), 30);
//! assert_eq!(begin.distance_to(&end), 3);
//! ```

use lockstep_core::cursor::Cursor;

/// A position within a borrowed slice.
///
/// Positions outside `0..len` are valid cursor states (an end cursor, or a
/// strided cursor that stepped past the end); reading one panics.
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    position: isize,
}

impl<T> Clone for SliceCursor<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<'a, T> SliceCursor<'a, T> {
    /// Creates a cursor at the first element of `slice`.
    #[inline]
    pub fn begin(slice: &'a [T]) -> Self {
        Self { slice, position: 0 }
    }

    /// Creates a cursor one past the last element of `slice`.
    #[inline]
    pub fn end(slice: &'a [T]) -> Self {
        Self {
            slice,
            position: slice.len() as isize,
        }
    }

    /// Creates a cursor at `position` within `slice`.
    #[inline]
    pub fn at_position(slice: &'a [T], position: isize) -> Self {
        Self { slice, position }
    }

    /// Returns the current position.
    #[inline]
    pub fn position(&self) -> isize {
        self.position
    }

    /// Returns the underlying slice.
    #[inline]
    pub fn slice(&self) -> &'a [T] {
        self.slice
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn get(&self) -> &'a T {
        usize::try_from(self.position)
            .ok()
            .and_then(|i| self.slice.get(i))
            .unwrap_or_else(|| {
                panic!(
                    "cursor position {} out of bounds for a sequence of length {}",
                    self.position,
                    self.slice.len()
                )
            })
    }

    #[inline(always)]
    fn advance(&mut self, n: isize) {
        self.position += n;
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        debug_assert!(
            std::ptr::eq(self.slice.as_ptr(), other.slice.as_ptr()),
            "cursors into different sequences cannot be compared"
        );
        other.position - self.position
    }
}

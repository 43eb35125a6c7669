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

//! # Sequences
//!
//! A `Sequence` is anything that can hand out a half-open `(begin, end)`
//! cursor pair: borrowed slices, vectors and arrays, and the adaptor ranges
//! themselves. Adaptor constructors such as `strided` and `zip` accept any
//! `Sequence`, so adaptors nest freely.
//!
//! Shared borrows (`&[T]`, `&Vec<T>`, `&[T; N]`) produce cursors reading
//! `&T`. Exclusive borrows (`&mut [T]`, `&mut Vec<T>`, `&mut [T; N]`) are
//! reinterpreted as slices of `Cell<T>`, producing cursors reading
//! `&Cell<T>` through which the elements can be written.

use crate::slice::SliceCursor;
use lockstep_core::cursor::Cursor;
use std::cell::Cell;

/// A source of a half-open cursor range.
pub trait Sequence {
    /// The cursor type delimiting the range.
    type Cursor: Cursor;

    /// Returns the `(begin, end)` cursors.
    fn bounds(self) -> (Self::Cursor, Self::Cursor);
}

impl<'a, T> Sequence for &'a [T] {
    type Cursor = SliceCursor<'a, T>;

    #[inline]
    fn bounds(self) -> (Self::Cursor, Self::Cursor) {
        (SliceCursor::begin(self), SliceCursor::end(self))
    }
}

impl<'a, T> Sequence for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;

    #[inline]
    fn bounds(self) -> (Self::Cursor, Self::Cursor) {
        self.as_slice().bounds()
    }
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;

    #[inline]
    fn bounds(self) -> (Self::Cursor, Self::Cursor) {
        self.as_slice().bounds()
    }
}

impl<'a, T> Sequence for &'a mut [T] {
    type Cursor = SliceCursor<'a, Cell<T>>;

    #[inline]
    fn bounds(self) -> (Self::Cursor, Self::Cursor) {
        let cells: &'a [Cell<T>] = Cell::from_mut(self).as_slice_of_cells();
        cells.bounds()
    }
}

impl<'a, T> Sequence for &'a mut Vec<T> {
    type Cursor = SliceCursor<'a, Cell<T>>;

    #[inline]
    fn bounds(self) -> (Self::Cursor, Self::Cursor) {
        self.as_mut_slice().bounds()
    }
}

impl<'a, T, const N: usize> Sequence for &'a mut [T; N] {
    type Cursor = SliceCursor<'a, Cell<T>>;

    #[inline]
    fn bounds(self) -> (Self::Cursor, Self::Cursor) {
        self.as_mut_slice().bounds()
    }
}

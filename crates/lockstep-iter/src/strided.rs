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

//! # Strided Adaptor
//!
//! `Strided<C>` wraps a cursor and moves it by a fixed, non-zero step per
//! logical position, so a sequence can be traversed every `|step|`-th element,
//! forwards (`step > 0`) or backwards (`step < 0`). `StridedRange<C>` pairs a
//! begin and an end strided cursor over a sequence.
//!
//! ## Counting
//!
//! For a sequence of raw length `L` and step `s`, a strided range enumerates
//! exactly `ceil(L / |s|)` elements: indices `0, s, 2s, ...` for a positive
//! step and `L - 1, L - 1 + s, ...` for a negative step. The end cursor is
//! aligned one whole step past the last enumerated element, so termination is
//! an exact equality test even when `s` does not divide `L`.
//!
//! ## Highlights
//!
//! - `distance_to` is the wrapped distance divided by the step (truncating),
//!   hence `precedes` only holds when at least one full step separates the
//!   cursors in the step's direction.
//! - Relating cursors with different steps is a precondition violation: a
//!   debug assertion on the hot path, `AdaptorError::StepMismatch` from
//!   `checked_distance_to`.
//! - A zero step panics in `new` and is `AdaptorError::ZeroStep` in `try_new`.
//!
//! ## Usage
//!
//! ```rust
//! use lockstep_iter::strided::strided;
//!
//! let v: Vec<i32> = (0..10).collect();
//! let forward: Vec<i32> = strided(&v, 3).into_iter().copied().collect();
//! assert_eq!(forward, vec![0, 3, 6, 9]);
//!
//! let backward: Vec<i32> = strided(&v, -4).into_iter().copied().collect();
//! assert_eq!(backward, vec![9, 5, 1]);
//! ```

use crate::sequence::Sequence;
use lockstep_core::cursor::Cursor;
use lockstep_core::error::AdaptorError;
use lockstep_core::utils::iter::CursorIter;

/// A cursor that moves its wrapped cursor `step` positions per increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strided<C> {
    inner: C,
    step: isize,
}

impl<C> Strided<C> {
    /// Wraps `inner` with the given step.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lockstep_core::cursor::Cursor;
    /// # use lockstep_iter::slice::SliceCursor;
    /// # use lockstep_iter::strided::Strided;
    /// let v = [0, 1, 2, 3, 4, 5];
    /// let c = Strided::new(SliceCursor::begin(&v), 2);
    /// assert_eq!(*c.at(2), 4);
    /// ```
    #[inline]
    pub fn new(inner: C, step: isize) -> Self {
        assert!(step != 0, "Invalid stride: the step must be non-zero");
        Self { inner, step }
    }

    /// Wraps `inner` with the given step, or returns `AdaptorError::ZeroStep`.
    #[inline]
    pub fn try_new(inner: C, step: isize) -> Result<Self, AdaptorError> {
        if step == 0 {
            return Err(AdaptorError::ZeroStep);
        }
        Ok(Self { inner, step })
    }

    /// Returns the step.
    #[inline]
    pub fn step(&self) -> isize {
        self.step
    }

    /// Returns the wrapped cursor.
    #[inline]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwraps the cursor.
    #[inline]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Cursor> Strided<C> {
    /// Returns the strided distance to `other`, or
    /// `AdaptorError::StepMismatch` if the steps differ.
    #[inline]
    pub fn checked_distance_to(&self, other: &Self) -> Result<isize, AdaptorError> {
        if self.step != other.step {
            return Err(AdaptorError::StepMismatch {
                left: self.step,
                right: other.step,
            });
        }
        Ok(self.inner.distance_to(&other.inner) / self.step)
    }
}

impl<C: Cursor> Cursor for Strided<C> {
    type Item = C::Item;

    #[inline(always)]
    fn get(&self) -> C::Item {
        self.inner.get()
    }

    #[inline]
    fn at(&self, n: isize) -> C::Item {
        self.inner.at(n * self.step)
    }

    #[inline(always)]
    fn advance(&mut self, n: isize) {
        self.inner.advance(n * self.step);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        debug_assert_eq!(
            self.step, other.step,
            "strided cursors with different steps cannot be related"
        );
        self.inner.distance_to(&other.inner) / self.step
    }
}

/// A half-open range of strided cursors over a sequence.
#[derive(Debug, Clone, Copy)]
pub struct StridedRange<C> {
    begin: Strided<C>,
    end: Strided<C>,
    len: usize,
}

impl<C: Cursor> StridedRange<C> {
    /// Creates the strided view of `[first, last)` with the given step.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    #[inline]
    pub fn new(first: C, last: C, step: isize) -> Self {
        assert!(step != 0, "Invalid stride: the step must be non-zero");
        Self::build(first, last, step)
    }

    /// Creates the strided view of `[first, last)`, or returns
    /// `AdaptorError::ZeroStep`.
    #[inline]
    pub fn try_new(first: C, last: C, step: isize) -> Result<Self, AdaptorError> {
        if step == 0 {
            return Err(AdaptorError::ZeroStep);
        }
        Ok(Self::build(first, last, step))
    }

    fn build(first: C, last: C, step: isize) -> Self {
        let raw = first.distance_to(&last).max(0);
        let len = (raw as usize).div_ceil(step.unsigned_abs());

        // Backward traversal starts at the last element, counted from `first`
        // so that composite cursors stay aligned.
        let start = if step > 0 || raw == 0 {
            first
        } else {
            first.offset(raw - 1)
        };
        let begin = Strided { inner: start, step };
        let end = begin.clone().offset(len as isize);
        Self { begin, end, len }
    }

    /// Returns the number of elements in the range, `ceil(L / |step|)` for a
    /// raw length `L`.
    ///
    /// This is the count the range enumerates, not the truncating signed
    /// `L / step`; the two differ whenever `step` does not divide `L` or is
    /// negative.
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns `true` if the range has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the step.
    #[inline]
    pub fn step(&self) -> isize {
        self.begin.step
    }

    /// Returns the cursor at the first element.
    #[inline]
    pub fn begin(&self) -> Strided<C> {
        self.begin.clone()
    }

    /// Returns the cursor one step past the last element.
    #[inline]
    pub fn end(&self) -> Strided<C> {
        self.end.clone()
    }
}

impl<C: Cursor> IntoIterator for StridedRange<C> {
    type Item = C::Item;
    type IntoIter = CursorIter<Strided<C>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        CursorIter::new(self.begin, self.end)
    }
}

impl<C: Cursor> Sequence for StridedRange<C> {
    type Cursor = Strided<C>;

    #[inline]
    fn bounds(self) -> (Strided<C>, Strided<C>) {
        (self.begin, self.end)
    }
}

/// Returns the strided view of `sequence` with the given step.
///
/// # Panics
///
/// Panics if `step` is zero.
#[inline]
pub fn strided<S: Sequence>(sequence: S, step: isize) -> StridedRange<S::Cursor> {
    let (first, last) = sequence.bounds();
    StridedRange::new(first, last, step)
}

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

//! # Numeric Ranges
//!
//! Arithmetic progressions `first, first + step, first + 2 * step, ...` over
//! primitive integers, exposed through the same cursor model as slices so
//! they can be zipped with data (an index column) or strided.
//!
//! The end is exclusive in the direction of travel: a positive step stops
//! before reaching `last` from below, a negative step before reaching it from
//! above. The number of values is `ceil((last - first) / step)`, capped at
//! `isize::MAX`, or zero when `last` lies behind `first`.
//!
//! `FloatRange` provides the same enumeration for `num_traits::Float` types.
//! Each value is computed as `first + index * step` rather than accumulated,
//! so rounding error does not grow along the range.
//!
//! ```rust
//! use lockstep_iter::range::{range, range_step};
//!
//! assert_eq!(range(4).into_iter().collect::<Vec<i32>>(), vec![0, 1, 2, 3]);
//! assert_eq!(range_step(10, 0, -3).into_iter().collect::<Vec<_>>(), vec![10, 7, 4, 1]);
//!
//! use lockstep_iter::range::float_range_step;
//! let xs: Vec<f64> = float_range_step(0.0, 1.0, 0.25).into_iter().collect();
//! assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75]);
//! ```

use crate::sequence::Sequence;
use lockstep_core::cursor::Cursor;
use lockstep_core::error::AdaptorError;
use lockstep_core::utils::iter::CursorIter;
use num_traits::{Float, NumCast, PrimInt};

#[inline]
fn widen<T: PrimInt>(value: T) -> i128 {
    value
        .to_i128()
        .unwrap_or_else(|| panic!("range bound exceeds the supported numeric domain"))
}

/// A cursor over an arithmetic progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeCursor<T> {
    first: T,
    step: T,
    index: isize,
}

impl<T: PrimInt> RangeCursor<T> {
    /// Returns the step of the progression.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Returns the number of steps taken from the first value.
    #[inline]
    pub fn index(&self) -> isize {
        self.index
    }

    #[inline]
    fn value_at(&self, index: isize) -> T {
        let v = widen(self.first) + widen(self.step) * index as i128;
        <T as NumCast>::from(v).unwrap_or_else(|| {
            panic!(
                "range cursor at index {} lies outside the value domain",
                index
            )
        })
    }
}

impl<T: PrimInt> Cursor for RangeCursor<T> {
    type Item = T;

    #[inline]
    fn get(&self) -> T {
        self.value_at(self.index)
    }

    #[inline]
    fn at(&self, n: isize) -> T {
        self.value_at(self.index + n)
    }

    #[inline(always)]
    fn advance(&mut self, n: isize) {
        self.index += n;
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        debug_assert!(
            self.first == other.first && self.step == other.step,
            "cursors into different ranges cannot be compared"
        );
        other.index - self.index
    }
}

/// The progression from `first` towards, but excluding, `last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericRange<T> {
    first: T,
    step: T,
    len: usize,
}

impl<T: PrimInt> NumericRange<T> {
    fn build(first: T, last: T, step: T) -> Self {
        let (f, l, s) = (widen(first), widen(last), widen(step));
        let span = if s > 0 { l - f } else { f - l };
        let len = if span <= 0 {
            0
        } else {
            // Cursor distances are `isize`, so longer progressions are capped.
            let q = span.unsigned_abs().div_ceil(s.unsigned_abs());
            isize::try_from(q).map_or(isize::MAX as usize, |n| n as usize)
        };
        Self { first, step, len }
    }

    /// Returns the first value.
    #[inline]
    pub fn first(&self) -> T {
        self.first
    }

    /// Returns the step.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Returns the number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the range has no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the cursor at the first value.
    #[inline]
    pub fn begin(&self) -> RangeCursor<T> {
        RangeCursor {
            first: self.first,
            step: self.step,
            index: 0,
        }
    }

    /// Returns the cursor one step past the last value.
    #[inline]
    pub fn end(&self) -> RangeCursor<T> {
        self.begin().offset(self.len as isize)
    }
}

impl<T: PrimInt> IntoIterator for NumericRange<T> {
    type Item = T;
    type IntoIter = CursorIter<RangeCursor<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        CursorIter::new(self.begin(), self.end())
    }
}

impl<T: PrimInt> Sequence for NumericRange<T> {
    type Cursor = RangeCursor<T>;

    #[inline]
    fn bounds(self) -> (RangeCursor<T>, RangeCursor<T>) {
        (self.begin(), self.end())
    }
}

/// A cursor over a floating-point arithmetic progression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRangeCursor<T> {
    first: T,
    step: T,
    index: isize,
}

impl<T: Float> FloatRangeCursor<T> {
    /// Returns the step of the progression.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Returns the number of steps taken from the first value.
    #[inline]
    pub fn index(&self) -> isize {
        self.index
    }

    #[inline]
    fn value_at(&self, index: isize) -> T {
        let n = <T as NumCast>::from(index).unwrap_or_else(T::nan);
        self.first + self.step * n
    }
}

impl<T: Float> Cursor for FloatRangeCursor<T> {
    type Item = T;

    #[inline]
    fn get(&self) -> T {
        self.value_at(self.index)
    }

    #[inline]
    fn at(&self, n: isize) -> T {
        self.value_at(self.index + n)
    }

    #[inline(always)]
    fn advance(&mut self, n: isize) {
        self.index += n;
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        debug_assert!(
            self.first == other.first && self.step == other.step,
            "cursors into different ranges cannot be compared"
        );
        other.index - self.index
    }
}

/// The floating-point progression from `first` towards, but excluding, `last`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRange<T> {
    first: T,
    step: T,
    len: usize,
}

impl<T: Float> FloatRange<T> {
    fn build(first: T, last: T, step: T) -> Self {
        // NaN bounds fail the comparison and give an empty range.
        let q = ((last - first) / step).ceil();
        let len = if q > T::zero() {
            q.to_isize().map_or(isize::MAX as usize, |n| n as usize)
        } else {
            0
        };
        Self { first, step, len }
    }

    /// Returns the first value.
    #[inline]
    pub fn first(&self) -> T {
        self.first
    }

    /// Returns the step.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Returns the number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the range has no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the cursor at the first value.
    #[inline]
    pub fn begin(&self) -> FloatRangeCursor<T> {
        FloatRangeCursor {
            first: self.first,
            step: self.step,
            index: 0,
        }
    }

    /// Returns the cursor one step past the last value.
    #[inline]
    pub fn end(&self) -> FloatRangeCursor<T> {
        self.begin().offset(self.len as isize)
    }
}

impl<T: Float> IntoIterator for FloatRange<T> {
    type Item = T;
    type IntoIter = CursorIter<FloatRangeCursor<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        CursorIter::new(self.begin(), self.end())
    }
}

impl<T: Float> Sequence for FloatRange<T> {
    type Cursor = FloatRangeCursor<T>;

    #[inline]
    fn bounds(self) -> (FloatRangeCursor<T>, FloatRangeCursor<T>) {
        (self.begin(), self.end())
    }
}

/// Returns `0, 1, ..., last - 1`.
#[inline]
pub fn range<T: PrimInt>(last: T) -> NumericRange<T> {
    NumericRange::build(T::zero(), last, T::one())
}

/// Returns `first, first + 1, ..., last - 1`.
#[inline]
pub fn range_between<T: PrimInt>(first: T, last: T) -> NumericRange<T> {
    NumericRange::build(first, last, T::one())
}

/// Returns `first, first + step, ...` up to, but excluding, `last`.
///
/// # Panics
///
/// Panics if `step` is zero.
///
/// # Examples
///
/// ```rust
/// # use lockstep_iter::range::range_step;
/// let odd: Vec<u8> = range_step(1, 10, 2).into_iter().collect();
/// assert_eq!(odd, vec![1, 3, 5, 7, 9]);
/// ```
#[inline]
pub fn range_step<T: PrimInt>(first: T, last: T, step: T) -> NumericRange<T> {
    assert!(!step.is_zero(), "Invalid step: the step must be non-zero");
    NumericRange::build(first, last, step)
}

/// Returns `first, first + step, ...` up to, but excluding, `last`, or
/// `AdaptorError::ZeroStep`.
#[inline]
pub fn try_range_step<T: PrimInt>(
    first: T,
    last: T,
    step: T,
) -> Result<NumericRange<T>, AdaptorError> {
    if step.is_zero() {
        return Err(AdaptorError::ZeroStep);
    }
    Ok(NumericRange::build(first, last, step))
}

/// Returns `first, first + step, ...` up to, but excluding, `last`, over a
/// floating-point type.
///
/// # Panics
///
/// Panics if `step` is zero or not finite.
#[inline]
pub fn float_range_step<T: Float>(first: T, last: T, step: T) -> FloatRange<T> {
    assert!(
        step != T::zero() && step.is_finite(),
        "Invalid step: the step must be non-zero and finite"
    );
    FloatRange::build(first, last, step)
}

/// Returns `first, first + step, ...` up to, but excluding, `last`, or
/// `AdaptorError::ZeroStep` if `step` is zero or not finite.
#[inline]
pub fn try_float_range_step<T: Float>(
    first: T,
    last: T,
    step: T,
) -> Result<FloatRange<T>, AdaptorError> {
    if step == T::zero() || !step.is_finite() {
        return Err(AdaptorError::ZeroStep);
    }
    Ok(FloatRange::build(first, last, step))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn values<T: PrimInt>(r: NumericRange<T>) -> Vec<T> {
        r.into_iter().collect()
    }

    #[test]
    fn test_range() {
        assert_eq!(values(range(5_u32)), [0, 1, 2, 3, 4]);
        assert!(range(0_i64).is_empty());
        assert!(range(-3_i64).is_empty());
    }

    #[test]
    fn test_range_between() {
        assert_eq!(values(range_between(-2_i16, 2)), [-2, -1, 0, 1]);
        assert!(range_between(5, 5).is_empty());
        assert!(range_between(6, 5).is_empty());
    }

    #[test]
    fn test_range_step_forward() {
        assert_eq!(values(range_step(0, 10, 3)), [0, 3, 6, 9]);
        assert_eq!(values(range_step(0, 9, 3)), [0, 3, 6]);
    }

    #[test]
    fn test_range_step_backward() {
        assert_eq!(values(range_step(10, 0, -3)), [10, 7, 4, 1]);
        assert_eq!(values(range_step(9, 0, -3)), [9, 6, 3]);
        assert!(range_step(0, 10, -1).is_empty());
    }

    #[test]
    fn test_exclusive_end_is_symmetric() {
        assert!(!values(range_step(0, 6, 2)).contains(&6));
        assert!(!values(range_step(6, 0, -2)).contains(&0));
    }

    #[test]
    fn test_cursor_navigation() {
        let r = range_step(100_i32, 0, -10);
        let b = r.begin();
        assert_eq!(b.get(), 100);
        assert_eq!(b.at(3), 70);
        assert_eq!(b.distance_to(&r.end()), 10);
        assert_eq!(b.step(), -10);
        let mut c = b;
        c.advance(4);
        assert_eq!(c.index(), 4);
        assert_eq!(c.get(), 60);
    }

    #[test]
    fn test_unsigned_extremes() {
        let r = range_between(250_u8, 255);
        assert_eq!(values(r), [250, 251, 252, 253, 254]);
        assert_eq!(r.end().distance_to(&r.begin()), -5);
    }

    #[test]
    #[should_panic(expected = "Invalid step: the step must be non-zero")]
    fn test_zero_step_panics() {
        let _ = range_step(0, 10, 0);
    }

    #[test]
    fn test_try_range_step() {
        assert_eq!(try_range_step(0, 10, 0), Err(AdaptorError::ZeroStep));
        assert_eq!(try_range_step(0, 10, 5).map(|r| r.len()), Ok(2));
    }

    #[test]
    fn test_randomized_lengths() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..300 {
            let first: i64 = rng.random_range(-50..50);
            let last: i64 = rng.random_range(-50..50);
            let mut step: i64 = rng.random_range(-7..8);
            if step == 0 {
                step = -1;
            }
            let got = values(range_step(first, last, step));

            let mut expected = Vec::new();
            let mut v = first;
            while (step > 0 && v < last) || (step < 0 && v > last) {
                expected.push(v);
                v += step;
            }
            assert_eq!(got, expected, "first {} last {} step {}", first, last, step);
            assert_eq!(range_step(first, last, step).len(), expected.len());
        }
    }

    #[test]
    fn test_length_capped_at_isize_max() {
        let r = range(usize::MAX);
        assert_eq!(r.len(), isize::MAX as usize);
        assert_eq!(r.begin().distance_to(&r.end()), isize::MAX);
        assert_eq!(r.into_iter().len(), isize::MAX as usize);
        assert_eq!(r.into_iter().take(3).collect::<Vec<_>>(), [0, 1, 2]);

        let wide = range_between(i64::MIN, i64::MAX);
        assert_eq!(wide.len(), isize::MAX as usize);
        assert!(wide.begin().precedes(&wide.end()));
    }

    #[test]
    fn test_float_range() {
        let xs: Vec<f64> = float_range_step(0.0, 1.0, 0.25).into_iter().collect();
        assert_eq!(xs, [0.0, 0.25, 0.5, 0.75]);

        let down: Vec<f32> = float_range_step(1.0, 0.0, -0.5).into_iter().collect();
        assert_eq!(down, [1.0, 0.5]);

        // A non-dividing step still ends before `last`.
        let r = float_range_step(0.0_f64, 1.0, 0.3);
        assert_eq!(r.len(), 4);
        assert!(r.into_iter().all(|x| x < 1.0));
        assert!((r.begin().at(3) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_float_range_empty() {
        assert!(float_range_step(1.0, 0.0, 0.5).is_empty());
        assert!(float_range_step(0.0, 0.0, 0.5).is_empty());
        assert!(float_range_step(f64::NAN, 1.0, 0.5).is_empty());
    }

    #[test]
    fn test_float_range_infinite_bound_is_capped() {
        let r = float_range_step(0.0, f64::INFINITY, 1.0);
        assert_eq!(r.len(), isize::MAX as usize);
        assert_eq!(r.into_iter().take(2).collect::<Vec<_>>(), [0.0, 1.0]);
    }

    #[test]
    #[should_panic(expected = "Invalid step: the step must be non-zero and finite")]
    fn test_float_zero_step_panics() {
        let _ = float_range_step(0.0, 1.0, 0.0);
    }

    #[test]
    fn test_try_float_range_step() {
        assert_eq!(
            try_float_range_step(0.0, 1.0, f64::NAN).err(),
            Some(AdaptorError::ZeroStep)
        );
        assert_eq!(try_float_range_step(0.0, 1.0, 0.5).map(|r| r.len()), Ok(2));
    }
}

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

//! # Zip Adaptor
//!
//! `Zip<T>` bundles a tuple of cursors (arity 1 through 12) into a single
//! cursor that moves them in lockstep. Every operation is one tuple algorithm
//! over the bundled cursors:
//!
//! | operation     | algorithm                                          |
//! |---------------|----------------------------------------------------|
//! | `get`, `at`   | `transform`: the tuple of per-cursor items         |
//! | `advance`     | `for_each` over mutable references                 |
//! | `equals`      | `any_of2`: done as soon as any component is done   |
//! | `precedes`    | `all_of2`: every component strictly before         |
//! | `distance_to` | `min` of the per-pair distances (`transform2`)     |
//!
//! Together these make a traversal over sequences of different lengths stop at
//! the shortest one. Note that `equals` and `precedes` are not complements of
//! each other; `equals` is the termination test.
//!
//! ## Usage
//!
//! ```rust
//! use lockstep_iter::zip::zip;
//!
//! let x = [1.0, 2.0, 3.0];
//! let mut y = vec![10.0, 20.0, 30.0, 40.0];
//! for (xi, yi) in zip((&x, &mut y)) {
//!     yi.set(yi.get() + 2.0 * xi);
//! }
//! assert_eq!(y, [12.0, 24.0, 36.0, 40.0]);
//! ```

use crate::sequence::Sequence;
use crate::strided::StridedRange;
use lockstep_core::algorithm::callable::{BinaryMapper, BinaryPredicate, Mapper, Visitor};
use lockstep_core::algorithm::tuple::{
    Tuple, all_of2, any_of2, for_each, min, transform, transform2,
};
use lockstep_core::cursor::Cursor;
use lockstep_core::utils::iter::CursorIter;

/// A cursor moving a tuple of cursors in lockstep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zip<T> {
    cursors: T,
}

impl<T> Zip<T> {
    /// Bundles a tuple of cursors.
    #[inline]
    pub fn new(cursors: T) -> Self {
        Self { cursors }
    }

    /// Returns the bundled cursors.
    #[inline]
    pub fn cursors(&self) -> &T {
        &self.cursors
    }

    /// Unbundles the cursors.
    #[inline]
    pub fn into_inner(self) -> T {
        self.cursors
    }
}

struct Dereference;

impl<C: Cursor> Mapper<&C> for Dereference {
    type Output = C::Item;

    #[inline(always)]
    fn map(&mut self, cursor: &C) -> C::Item {
        cursor.get()
    }
}

struct DereferenceAt(isize);

impl<C: Cursor> Mapper<&C> for DereferenceAt {
    type Output = C::Item;

    #[inline(always)]
    fn map(&mut self, cursor: &C) -> C::Item {
        cursor.at(self.0)
    }
}

struct AdvanceBy(isize);

impl<C: Cursor> Visitor<&mut C> for AdvanceBy {
    #[inline(always)]
    fn visit(&mut self, cursor: &mut C) {
        cursor.advance(self.0);
    }
}

struct DistanceTo;

impl<C: Cursor> BinaryMapper<&C, &C> for DistanceTo {
    type Output = isize;

    #[inline(always)]
    fn map_pair(&mut self, left: &C, right: &C) -> isize {
        left.distance_to(right)
    }
}

struct CountTo;

impl<C: Cursor> BinaryMapper<&C, &C> for CountTo {
    type Output = usize;

    #[inline(always)]
    fn map_pair(&mut self, left: &C, right: &C) -> usize {
        left.count_to(right)
    }
}

struct Equal;

impl<C: Cursor> BinaryPredicate<&C, &C> for Equal {
    #[inline(always)]
    fn test_pair(&mut self, left: &C, right: &C) -> bool {
        left.equals(right)
    }
}

struct Precedes;

impl<C: Cursor> BinaryPredicate<&C, &C> for Precedes {
    #[inline(always)]
    fn test_pair(&mut self, left: &C, right: &C) -> bool {
        left.precedes(right)
    }
}

/// Builds a `ZipRange` from a tuple of sequences.
pub trait IntoZip {
    /// The tuple of cursor types.
    type Cursors;

    /// Splits every sequence into its bounds and bundles them.
    fn into_zip(self) -> ZipRange<Self::Cursors>;
}

macro_rules! impl_zip {
    ($($C:ident $S:ident $n:tt),+) => {
        impl<$($C: Cursor),+> Cursor for Zip<($($C,)+)> {
            type Item = ($($C::Item,)+);

            #[inline]
            fn get(&self) -> Self::Item {
                transform(self.cursors.as_refs(), Dereference)
            }

            #[inline]
            fn at(&self, n: isize) -> Self::Item {
                transform(self.cursors.as_refs(), DereferenceAt(n))
            }

            #[inline]
            fn advance(&mut self, n: isize) {
                for_each(self.cursors.as_muts(), AdvanceBy(n));
            }

            #[inline]
            fn distance_to(&self, other: &Self) -> isize {
                min(transform2(self.cursors.as_refs(), other.cursors.as_refs(), DistanceTo))
            }

            #[inline]
            fn equals(&self, other: &Self) -> bool {
                any_of2(self.cursors.as_refs(), other.cursors.as_refs(), Equal)
            }

            #[inline]
            fn precedes(&self, other: &Self) -> bool {
                all_of2(self.cursors.as_refs(), other.cursors.as_refs(), Precedes)
            }

            #[inline]
            fn count_to(&self, end: &Self) -> usize {
                min(transform2(self.cursors.as_refs(), end.cursors.as_refs(), CountTo))
            }
        }

        impl<$($S: Sequence),+> IntoZip for ($($S,)+) {
            type Cursors = ($($S::Cursor,)+);

            #[inline]
            fn into_zip(self) -> ZipRange<Self::Cursors> {
                let bounds = ($(self.$n.bounds(),)+);
                ZipRange {
                    begin: Zip::new(($(bounds.$n.0,)+)),
                    end: Zip::new(($(bounds.$n.1,)+)),
                }
            }
        }
    };
}

impl_zip!(C0 S0 0);
impl_zip!(C0 S0 0, C1 S1 1);
impl_zip!(C0 S0 0, C1 S1 1, C2 S2 2);
impl_zip!(C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3);
impl_zip!(C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3, C4 S4 4);
impl_zip!(C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3, C4 S4 4, C5 S5 5);
impl_zip!(C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3, C4 S4 4, C5 S5 5, C6 S6 6);
impl_zip!(C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3, C4 S4 4, C5 S5 5, C6 S6 6, C7 S7 7);
impl_zip!(C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3, C4 S4 4, C5 S5 5, C6 S6 6, C7 S7 7, C8 S8 8);
impl_zip!(C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3, C4 S4 4, C5 S5 5, C6 S6 6, C7 S7 7, C8 S8 8, C9 S9 9);
impl_zip!(C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3, C4 S4 4, C5 S5 5, C6 S6 6, C7 S7 7, C8 S8 8, C9 S9 9, C10 S10 10);
impl_zip!(C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3, C4 S4 4, C5 S5 5, C6 S6 6, C7 S7 7, C8 S8 8, C9 S9 9, C10 S10 10, C11 S11 11);

/// A half-open range of zip cursors.
#[derive(Debug, Clone, Copy)]
pub struct ZipRange<T> {
    begin: Zip<T>,
    end: Zip<T>,
}

impl<T> ZipRange<T>
where
    Zip<T>: Cursor,
{
    /// Creates the range `[begin, end)` from tuples of cursors.
    #[inline]
    pub fn new(begin: T, end: T) -> Self {
        Self {
            begin: Zip::new(begin),
            end: Zip::new(end),
        }
    }

    /// Returns the cursor at the first element.
    #[inline]
    pub fn begin(&self) -> Zip<T> {
        self.begin.clone()
    }

    /// Returns the end cursor.
    #[inline]
    pub fn end(&self) -> Zip<T> {
        self.end.clone()
    }

    /// Returns the length of the shortest source.
    #[inline]
    pub fn len(&self) -> usize {
        self.begin.count_to(&self.end)
    }

    /// Returns `true` if any source is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin.equals(&self.end)
    }

    /// Returns the strided view of this range.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lockstep_iter::zip::zip;
    /// let a = [0, 1, 2, 3, 4, 5, 6];
    /// let b = [0, 10, 20, 30, 40, 50];
    /// let picked: Vec<(i32, i32)> = zip((&a, &b))
    ///     .stepped(2)
    ///     .into_iter()
    ///     .map(|(x, y)| (*x, *y))
    ///     .collect();
    /// assert_eq!(picked, vec![(0, 0), (2, 20), (4, 40)]);
    /// ```
    #[inline]
    pub fn stepped(self, step: isize) -> StridedRange<Zip<T>> {
        StridedRange::new(self.begin, self.end, step)
    }
}

impl<T> IntoIterator for ZipRange<T>
where
    Zip<T>: Cursor,
{
    type Item = <Zip<T> as Cursor>::Item;
    type IntoIter = CursorIter<Zip<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        CursorIter::new(self.begin, self.end)
    }
}

impl<T> Sequence for ZipRange<T>
where
    Zip<T>: Cursor,
{
    type Cursor = Zip<T>;

    #[inline]
    fn bounds(self) -> (Zip<T>, Zip<T>) {
        (self.begin, self.end)
    }
}

/// Zips a tuple of sequences into one range of element tuples.
///
/// The range ends with its shortest source. Sources borrowed `&mut` yield
/// `&Cell<T>` items that can be written through.
///
/// # Examples
///
/// ```rust
/// # use lockstep_iter::zip::zip;
/// let a = [1, 2, 3];
/// let b = vec![10, 20, 30, 40];
/// let sums: Vec<i32> = zip((&a, &b)).into_iter().map(|(x, y)| x + y).collect();
/// assert_eq!(sums, vec![11, 22, 33]);
/// ```
#[inline]
pub fn zip<S: IntoZip>(sources: S) -> ZipRange<S::Cursors> {
    sources.into_zip()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{range, range_between};
    use crate::slice::SliceCursor;
    use crate::strided::strided;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_stops_at_shortest() {
        let a = [1, 2, 3];
        let b = [10, 20, 30, 40];
        let pairs: Vec<(i32, i32)> = zip((&a, &b)).into_iter().map(|(x, y)| (*x, *y)).collect();
        assert_eq!(pairs, [(1, 10), (2, 20), (3, 30)]);
        assert_eq!(zip((&b, &a)).len(), 3);
    }

    #[test]
    fn test_heterogeneous_sources() {
        let names = ["a", "b", "c"];
        let weights = vec![0.5, 1.5, 2.5];
        let out: Vec<String> = zip((range(10_usize), &names, &weights))
            .into_iter()
            .map(|(i, n, w)| format!("{}{}:{}", n, i, w))
            .collect();
        assert_eq!(out, ["a0:0.5", "b1:1.5", "c2:2.5"]);
    }

    #[test]
    fn test_single_source() {
        let a = [4, 5];
        let items: Vec<(i32,)> = zip((&a,)).into_iter().map(|(x,)| (*x,)).collect();
        assert_eq!(items, [(4,), (5,)]);
    }

    #[test]
    fn test_write_through_zip() {
        let x = vec![1, 2, 3];
        let mut y = vec![0, 0, 0];
        for (xi, yi) in zip((&x, &mut y)) {
            yi.set(xi * 3);
        }
        assert_eq!(y, [3, 6, 9]);
    }

    #[test]
    fn test_empty_source() {
        let a: [i32; 0] = [];
        let b = [1, 2, 3];
        let r = zip((&b, &a));
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.into_iter().count(), 0);
    }

    #[test]
    fn test_cursor_operations() {
        let a = [1, 2, 3, 4];
        let b = [5, 6, 7];
        let r = zip((&a, &b));
        let begin = r.begin();
        let end = r.end();

        assert_eq!(begin.distance_to(&end), 3);
        assert_eq!(begin.get(), (&1, &5));
        assert_eq!(begin.at(2), (&3, &7));
        assert!(begin.precedes(&end));
        assert!(!begin.equals(&end));

        let moved = begin.offset(3);
        // The shorter component reached its end, so the zip is done.
        assert!(moved.equals(&end));
        // The longer component has not, so `precedes` still holds.
        assert!(!moved.precedes(&end));
        assert_eq!(moved.cursors().0.position(), 3);
    }

    #[test]
    fn test_equals_any_precedes_all() {
        let a = [0; 5];
        let b = [0; 5];
        let x = Zip::new((SliceCursor::at_position(&a, 1), SliceCursor::at_position(&b, 4)));
        let y = Zip::new((SliceCursor::at_position(&a, 3), SliceCursor::at_position(&b, 4)));
        assert!(x.equals(&y));
        assert!(!x.precedes(&y));
        assert_eq!(x.distance_to(&y), 0);
        let (ca, cb) = x.into_inner();
        assert_eq!((ca.position(), cb.position()), (1, 4));
    }

    #[test]
    fn test_zip_of_strided() {
        let x: Vec<f64> = (0..10).map(f64::from).collect();
        let mut y = vec![0.0; 12];
        for (xi, yi) in zip((strided(&x, 2), strided(&mut y, 3))) {
            yi.set(*xi);
        }
        assert_eq!(
            y,
            [0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 4.0, 0.0, 0.0, 6.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_zip_of_strided_forward_and_backward() {
        let a = [1, 2, 3, 4, 5, 6];
        let pairs: Vec<(i32, i32)> = zip((strided(&a, 1), strided(&a, -1)))
            .into_iter()
            .map(|(x, y)| (*x, *y))
            .collect();
        assert_eq!(pairs, [(1, 6), (2, 5), (3, 4), (4, 3), (5, 2), (6, 1)]);
    }

    #[test]
    fn test_stepped_backward_stays_aligned() {
        let a = [0, 1, 2, 3, 4];
        let b = [0, 10, 20, 30, 40, 50, 60];
        let picked: Vec<(i32, i32)> = zip((&a, &b))
            .stepped(-2)
            .into_iter()
            .map(|(x, y)| (*x, *y))
            .collect();
        assert_eq!(picked, [(4, 40), (2, 20), (0, 0)]);
    }

    #[test]
    fn test_twelve_sources() {
        let v = [1u8, 2, 3];
        let r = zip((&v, &v, &v, &v, &v, &v, &v, &v, &v, &v, &v, range_between(7u8, 9)));
        assert_eq!(r.len(), 2);
        let last = r.begin().at(1);
        assert_eq!(*last.0, 2);
        assert_eq!(last.11, 8);
    }

    #[test]
    fn test_randomized_lengths() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let la: usize = rng.random_range(0..20);
            let lb: usize = rng.random_range(0..20);
            let lc: usize = rng.random_range(0..20);
            let a: Vec<usize> = (0..la).collect();
            let b: Vec<usize> = (0..lb).map(|i| i * 2).collect();
            let r = zip((&a, &b, range(lc)));
            let expected = la.min(lb).min(lc);
            assert_eq!(r.len(), expected);

            let mut count = 0;
            for (x, y, z) in r {
                assert_eq!(*x, count);
                assert_eq!(*y, 2 * count);
                assert_eq!(z, count);
                count += 1;
            }
            assert_eq!(count, expected);
        }
    }

    #[test]
    fn test_zip_with_unbounded_index_range() {
        let v = [10, 20, 30, 40];
        let r = zip((&v, range(usize::MAX)));
        assert_eq!(r.len(), 4);
        assert_eq!(r.into_iter().len(), 4);
        let pairs: Vec<(i32, usize)> = r.into_iter().map(|(x, i)| (*x, i)).collect();
        assert_eq!(pairs, [(10, 0), (20, 1), (30, 2), (40, 3)]);

        let every_other: Vec<(i32, usize)> = r
            .stepped(2)
            .into_iter()
            .map(|(x, i)| (*x, i))
            .collect();
        assert_eq!(every_other, [(10, 0), (30, 2)]);
    }
}

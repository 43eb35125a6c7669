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

//! # Tuple Traversal Algorithms
//!
//! Element-wise algorithms over fixed-arity, heterogeneous tuples. Every
//! algorithm is unrolled at compile time for tuples of arity 1 through 12,
//! so a traversal costs exactly one call per element and no allocation.
//!
//! ## Algorithms
//!
//! - `for_each` / `for_each2`: visit every element (or position-matched pair)
//!   in index order and hand the visitor back, so stateful visitors can be
//!   inspected afterwards.
//! - `transform` / `transform2`: build a new tuple from per-element results.
//! - `all_of`, `any_of`, `none_of` (and the `*2` pair forms), `count_if`,
//!   `find_if`: predicate reductions. Every element is evaluated; there is no
//!   short-circuiting.
//! - `min` / `max`: convert every element into a common type `C` with
//!   `Into<C>` and return the extremum. A tuple without a common type does
//!   not compile.
//! - `perform` / `try_perform`: apply an action to the element at a runtime
//!   index, found by a linear scan.
//!
//! ## Arity
//!
//! The pair algorithms require both tuples to have the same arity. A mismatch
//! is a compile-time error:
//!
//! ```compile_fail
//! use lockstep_core::algorithm::tuple::for_each2;
//!
//! for_each2((1, 2, 3), (4, 5), |a: i32, b: i32| {
//!     let _ = a + b;
//! });
//! ```
//!
//! Element access by reference goes through `as_refs` / `as_muts`:
//!
//! ```rust
//! use lockstep_core::algorithm::tuple::{Tuple, for_each};
//!
//! let mut t = (1, 2, 3);
//! for_each(t.as_muts(), |x: &mut i32| *x *= 10);
//! assert_eq!(t, (10, 20, 30));
//! ```

use crate::algorithm::callable::{
    BinaryMapper, BinaryPredicate, BinaryVisitor, Mapper, Predicate, Visitor,
};
use crate::error::AdaptorError;

/// A fixed-arity, heterogeneous group of values.
pub trait Tuple: Sized {
    /// The number of elements.
    const ARITY: usize;

    /// The tuple of shared references to the elements.
    type Refs<'a>: Tuple
    where
        Self: 'a;

    /// The tuple of mutable references to the elements.
    type Muts<'a>: Tuple
    where
        Self: 'a;

    /// Borrows every element.
    fn as_refs(&self) -> Self::Refs<'_>;

    /// Mutably borrows every element.
    fn as_muts(&mut self) -> Self::Muts<'_>;
}

/// Visits every element in index order.
pub trait ForEach<F>: Tuple {
    /// Calls `f` on elements `0..ARITY` and returns `f`.
    fn for_each(self, f: F) -> F;
}

/// Visits every position-matched pair of two tuples of the same arity.
pub trait ForEachPair<U, F>: Tuple {
    /// Calls `f` on `(self.i, other.i)` for `i` in `0..ARITY` and returns `f`.
    fn for_each_pair(self, other: U, f: F) -> F;
}

/// Maps every element into a new tuple.
pub trait Transform<F>: Tuple {
    /// The resulting tuple type.
    type Output;

    /// Returns the tuple whose element `i` is `f(self.i)`.
    fn transform(self, f: F) -> Self::Output;
}

/// Maps every position-matched pair into a new tuple.
pub trait TransformPairs<U, F>: Tuple {
    /// The resulting tuple type.
    type Output;

    /// Returns the tuple whose element `i` is `f(self.i, other.i)`.
    fn transform_pairs(self, other: U, f: F) -> Self::Output;
}

/// Predicate reductions over every element.
pub trait Evaluate<P>: Tuple {
    /// Evaluates `p` on every element in index order and folds each
    /// `(index, result)` into the accumulator with `g`.
    fn fold_tests<A>(self, p: P, init: A, g: impl FnMut(A, usize, bool) -> A) -> A;

    /// Returns `true` if `p` holds for every element.
    #[inline]
    fn all_of(self, p: P) -> bool {
        self.fold_tests(p, true, |acc, _, r| acc & r)
    }

    /// Returns `true` if `p` holds for at least one element.
    #[inline]
    fn any_of(self, p: P) -> bool {
        self.fold_tests(p, false, |acc, _, r| acc | r)
    }

    /// Returns `true` if `p` holds for no element.
    #[inline]
    fn none_of(self, p: P) -> bool {
        !self.any_of(p)
    }

    /// Returns the number of elements for which `p` holds.
    #[inline]
    fn count_if(self, p: P) -> usize {
        self.fold_tests(p, 0, |acc, _, r| acc + usize::from(r))
    }

    /// Returns the index of the first element for which `p` holds,
    /// or `ARITY` if there is none.
    #[inline]
    fn find_if(self, p: P) -> usize {
        self.fold_tests(p, Self::ARITY, |acc, i, r| {
            if r && acc == Self::ARITY { i } else { acc }
        })
    }
}

/// Predicate reductions over every position-matched pair.
pub trait EvaluatePairs<U, P>: Tuple {
    /// Evaluates `p` on every pair in index order and folds each
    /// `(index, result)` into the accumulator with `g`.
    fn fold_pair_tests<A>(
        self,
        other: U,
        p: P,
        init: A,
        g: impl FnMut(A, usize, bool) -> A,
    ) -> A;

    /// Returns `true` if `p` holds for every pair.
    #[inline]
    fn all_of_pairs(self, other: U, p: P) -> bool {
        self.fold_pair_tests(other, p, true, |acc, _, r| acc & r)
    }

    /// Returns `true` if `p` holds for at least one pair.
    #[inline]
    fn any_of_pairs(self, other: U, p: P) -> bool {
        self.fold_pair_tests(other, p, false, |acc, _, r| acc | r)
    }

    /// Returns `true` if `p` holds for no pair.
    #[inline]
    fn none_of_pairs(self, other: U, p: P) -> bool {
        !self.any_of_pairs(other, p)
    }
}

/// Applies an action to the element at a runtime index.
pub trait Perform<F>: Tuple {
    /// Calls `f` on element `index`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `index >= ARITY`. In release builds an
    /// out-of-range index is a no-op.
    fn perform(self, index: usize, f: F);

    /// Calls `f` on element `index`, or reports the index as out of range.
    #[inline]
    fn try_perform(self, index: usize, f: F) -> Result<(), AdaptorError> {
        if index < Self::ARITY {
            self.perform(index, f);
            Ok(())
        } else {
            Err(AdaptorError::IndexOutOfRange {
                index,
                arity: Self::ARITY,
            })
        }
    }
}

/// Minimum and maximum over elements converted into the common type `C`.
pub trait Extremum<C>: Tuple {
    /// Returns the smallest element, converted into `C`. Ties keep the
    /// earliest element.
    fn min_element(self) -> C;

    /// Returns the largest element, converted into `C`. Ties keep the
    /// earliest element.
    fn max_element(self) -> C;
}

macro_rules! impl_tuple {
    ($len:expr; $($A:ident $B:ident $n:tt),+) => {
        impl<$($A),+> Tuple for ($($A,)+) {
            const ARITY: usize = $len;

            type Refs<'a> = ($(&'a $A,)+) where Self: 'a;
            type Muts<'a> = ($(&'a mut $A,)+) where Self: 'a;

            #[inline(always)]
            fn as_refs(&self) -> Self::Refs<'_> {
                ($(&self.$n,)+)
            }

            #[inline(always)]
            fn as_muts(&mut self) -> Self::Muts<'_> {
                ($(&mut self.$n,)+)
            }
        }

        impl<F, $($A),+> ForEach<F> for ($($A,)+)
        where
            $(F: Visitor<$A>,)+
        {
            #[inline(always)]
            fn for_each(self, mut f: F) -> F {
                $(<F as Visitor<$A>>::visit(&mut f, self.$n);)+
                f
            }
        }

        impl<F, $($A,)+ $($B),+> ForEachPair<($($B,)+), F> for ($($A,)+)
        where
            $(F: BinaryVisitor<$A, $B>,)+
        {
            #[inline(always)]
            fn for_each_pair(self, other: ($($B,)+), mut f: F) -> F {
                $(<F as BinaryVisitor<$A, $B>>::visit_pair(&mut f, self.$n, other.$n);)+
                f
            }
        }

        impl<F, $($A),+> Transform<F> for ($($A,)+)
        where
            $(F: Mapper<$A>,)+
        {
            type Output = ($(<F as Mapper<$A>>::Output,)+);

            #[inline(always)]
            fn transform(self, mut f: F) -> Self::Output {
                ($(<F as Mapper<$A>>::map(&mut f, self.$n),)+)
            }
        }

        impl<F, $($A,)+ $($B),+> TransformPairs<($($B,)+), F> for ($($A,)+)
        where
            $(F: BinaryMapper<$A, $B>,)+
        {
            type Output = ($(<F as BinaryMapper<$A, $B>>::Output,)+);

            #[inline(always)]
            fn transform_pairs(self, other: ($($B,)+), mut f: F) -> Self::Output {
                ($(<F as BinaryMapper<$A, $B>>::map_pair(&mut f, self.$n, other.$n),)+)
            }
        }

        impl<P, $($A),+> Evaluate<P> for ($($A,)+)
        where
            $(P: Predicate<$A>,)+
        {
            #[inline(always)]
            fn fold_tests<Acc>(
                self,
                mut p: P,
                init: Acc,
                mut g: impl FnMut(Acc, usize, bool) -> Acc,
            ) -> Acc {
                let acc = init;
                $(let acc = g(acc, $n, <P as Predicate<$A>>::test(&mut p, self.$n));)+
                acc
            }
        }

        impl<P, $($A,)+ $($B),+> EvaluatePairs<($($B,)+), P> for ($($A,)+)
        where
            $(P: BinaryPredicate<$A, $B>,)+
        {
            #[inline(always)]
            fn fold_pair_tests<Acc>(
                self,
                other: ($($B,)+),
                mut p: P,
                init: Acc,
                mut g: impl FnMut(Acc, usize, bool) -> Acc,
            ) -> Acc {
                let acc = init;
                $(let acc = g(
                    acc,
                    $n,
                    <P as BinaryPredicate<$A, $B>>::test_pair(&mut p, self.$n, other.$n),
                );)+
                acc
            }
        }

        impl<F, $($A),+> Perform<F> for ($($A,)+)
        where
            $(F: Visitor<$A>,)+
        {
            #[inline]
            fn perform(self, index: usize, mut f: F) {
                debug_assert!(
                    index < $len,
                    "called `perform` with index {} on a tuple of arity {}",
                    index,
                    $len
                );
                $(
                    if index == $n {
                        <F as Visitor<$A>>::visit(&mut f, self.$n);
                        return;
                    }
                )+
            }
        }

        impl<C, $($A),+> Extremum<C> for ($($A,)+)
        where
            C: PartialOrd,
            $($A: Into<C>,)+
        {
            #[inline]
            fn min_element(self) -> C {
                let [first, rest @ ..]: [C; $len] = [$(self.$n.into(),)+];
                rest.into_iter().fold(first, |m, v| if v < m { v } else { m })
            }

            #[inline]
            fn max_element(self) -> C {
                let [first, rest @ ..]: [C; $len] = [$(self.$n.into(),)+];
                rest.into_iter().fold(first, |m, v| if v > m { v } else { m })
            }
        }
    };
}

impl_tuple!(1; A0 B0 0);
impl_tuple!(2; A0 B0 0, A1 B1 1);
impl_tuple!(3; A0 B0 0, A1 B1 1, A2 B2 2);
impl_tuple!(4; A0 B0 0, A1 B1 1, A2 B2 2, A3 B3 3);
impl_tuple!(5; A0 B0 0, A1 B1 1, A2 B2 2, A3 B3 3, A4 B4 4);
impl_tuple!(6; A0 B0 0, A1 B1 1, A2 B2 2, A3 B3 3, A4 B4 4, A5 B5 5);
impl_tuple!(7; A0 B0 0, A1 B1 1, A2 B2 2, A3 B3 3, A4 B4 4, A5 B5 5, A6 B6 6);
impl_tuple!(8; A0 B0 0, A1 B1 1, A2 B2 2, A3 B3 3, A4 B4 4, A5 B5 5, A6 B6 6, A7 B7 7);
impl_tuple!(9; A0 B0 0, A1 B1 1, A2 B2 2, A3 B3 3, A4 B4 4, A5 B5 5, A6 B6 6, A7 B7 7, A8 B8 8);
impl_tuple!(10; A0 B0 0, A1 B1 1, A2 B2 2, A3 B3 3, A4 B4 4, A5 B5 5, A6 B6 6, A7 B7 7, A8 B8 8, A9 B9 9);
impl_tuple!(11; A0 B0 0, A1 B1 1, A2 B2 2, A3 B3 3, A4 B4 4, A5 B5 5, A6 B6 6, A7 B7 7, A8 B8 8, A9 B9 9, A10 B10 10);
impl_tuple!(12; A0 B0 0, A1 B1 1, A2 B2 2, A3 B3 3, A4 B4 4, A5 B5 5, A6 B6 6, A7 B7 7, A8 B8 8, A9 B9 9, A10 B10 10, A11 B11 11);

/// Calls `f` on every element of `t` in index order and returns `f`.
///
/// # Examples
///
/// ```rust
/// # use lockstep_core::algorithm::tuple::for_each;
/// let mut total = 0;
/// for_each((1, 2, 3), |x: i32| total += x);
/// assert_eq!(total, 6);
/// ```
#[inline(always)]
pub fn for_each<T, F>(t: T, f: F) -> F
where
    T: ForEach<F>,
{
    t.for_each(f)
}

/// Calls `f` on every position-matched pair of `t1` and `t2` and returns `f`.
#[inline(always)]
pub fn for_each2<T, U, F>(t1: T, t2: U, f: F) -> F
where
    T: ForEachPair<U, F>,
{
    t1.for_each_pair(t2, f)
}

/// Returns the tuple of `f` applied to every element of `t`.
///
/// # Examples
///
/// ```rust
/// # use lockstep_core::algorithm::tuple::transform;
/// assert_eq!(transform((1, 2, 3), |x: i32| x * x), (1, 4, 9));
/// ```
#[inline(always)]
pub fn transform<T, F>(t: T, f: F) -> T::Output
where
    T: Transform<F>,
{
    t.transform(f)
}

/// Returns the tuple of `f` applied to every position-matched pair.
///
/// # Examples
///
/// ```rust
/// # use lockstep_core::algorithm::tuple::transform2;
/// assert_eq!(transform2((5, 7), (1, 2), |a: i32, b: i32| a - b), (4, 5));
/// ```
#[inline(always)]
pub fn transform2<T, U, F>(t1: T, t2: U, f: F) -> T::Output
where
    T: TransformPairs<U, F>,
{
    t1.transform_pairs(t2, f)
}

/// Returns `true` if `p` holds for every element of `t`.
#[inline(always)]
pub fn all_of<T, P>(t: T, p: P) -> bool
where
    T: Evaluate<P>,
{
    t.all_of(p)
}

/// Returns `true` if `p` holds for at least one element of `t`.
#[inline(always)]
pub fn any_of<T, P>(t: T, p: P) -> bool
where
    T: Evaluate<P>,
{
    t.any_of(p)
}

/// Returns `true` if `p` holds for no element of `t`.
#[inline(always)]
pub fn none_of<T, P>(t: T, p: P) -> bool
where
    T: Evaluate<P>,
{
    t.none_of(p)
}

/// Returns `true` if `p` holds for every position-matched pair.
#[inline(always)]
pub fn all_of2<T, U, P>(t1: T, t2: U, p: P) -> bool
where
    T: EvaluatePairs<U, P>,
{
    t1.all_of_pairs(t2, p)
}

/// Returns `true` if `p` holds for at least one position-matched pair.
#[inline(always)]
pub fn any_of2<T, U, P>(t1: T, t2: U, p: P) -> bool
where
    T: EvaluatePairs<U, P>,
{
    t1.any_of_pairs(t2, p)
}

/// Returns `true` if `p` holds for no position-matched pair.
#[inline(always)]
pub fn none_of2<T, U, P>(t1: T, t2: U, p: P) -> bool
where
    T: EvaluatePairs<U, P>,
{
    t1.none_of_pairs(t2, p)
}

/// Returns the number of elements of `t` for which `p` holds.
#[inline(always)]
pub fn count_if<T, P>(t: T, p: P) -> usize
where
    T: Evaluate<P>,
{
    t.count_if(p)
}

/// Returns the index of the first element of `t` for which `p` holds,
/// or the arity of `t` if there is none.
///
/// # Examples
///
/// ```rust
/// # use lockstep_core::algorithm::tuple::find_if;
/// assert_eq!(find_if((5, 7, 2, 9), |x: i32| x % 2 == 0), 2);
/// assert_eq!(find_if((5, 7, 3, 9), |x: i32| x % 2 == 0), 4);
/// ```
#[inline(always)]
pub fn find_if<T, P>(t: T, p: P) -> usize
where
    T: Evaluate<P>,
{
    t.find_if(p)
}

/// Returns the smallest element of `t` in the common type `C`.
///
/// # Examples
///
/// ```rust
/// # use lockstep_core::algorithm::tuple::min;
/// let m: f64 = min((3, 1.5, 2));
/// assert_eq!(m, 1.5);
/// assert_eq!(min::<i64>((4_i32, -7_i64)), -7);
/// ```
#[inline(always)]
pub fn min<C>(t: impl Extremum<C>) -> C {
    t.min_element()
}

/// Returns the largest element of `t` in the common type `C`.
#[inline(always)]
pub fn max<C>(t: impl Extremum<C>) -> C {
    t.max_element()
}

/// Calls `f` on the element of `t` at `index`.
///
/// # Panics
///
/// In debug builds, panics if `index` is not smaller than the arity of `t`.
#[inline(always)]
pub fn perform<T, F>(t: T, index: usize, f: F)
where
    T: Perform<F>,
{
    t.perform(index, f)
}

/// Calls `f` on the element of `t` at `index`, or returns
/// `AdaptorError::IndexOutOfRange`.
///
/// # Examples
///
/// ```rust
/// # use lockstep_core::algorithm::tuple::{Tuple, try_perform};
/// # use lockstep_core::error::AdaptorError;
/// let mut t = (1, 2, 3);
/// assert!(try_perform(t.as_muts(), 1, |x: &mut i32| *x = 20).is_ok());
/// assert_eq!(t, (1, 20, 3));
/// assert_eq!(
///     try_perform(t.as_muts(), 3, |x: &mut i32| *x = 0),
///     Err(AdaptorError::IndexOutOfRange { index: 3, arity: 3 })
/// );
/// ```
#[inline(always)]
pub fn try_perform<T, F>(t: T, index: usize, f: F) -> Result<(), AdaptorError>
where
    T: Perform<F>,
{
    t.try_perform(index, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[derive(Default)]
    struct Collect(Vec<String>);

    impl<T: std::fmt::Display> Visitor<T> for Collect {
        fn visit(&mut self, value: T) {
            self.0.push(value.to_string());
        }
    }

    struct LongRendering;

    impl<T: std::fmt::Display> Predicate<T> for LongRendering {
        fn test(&mut self, value: T) -> bool {
            value.to_string().len() > 1
        }
    }

    struct Describe;

    impl<T: std::fmt::Debug> Mapper<T> for Describe {
        type Output = String;

        fn map(&mut self, value: T) -> String {
            format!("{:?}", value)
        }
    }

    #[test]
    fn test_arity() {
        assert_eq!(<(u8,) as Tuple>::ARITY, 1);
        assert_eq!(<(u8, i32, f64) as Tuple>::ARITY, 3);
        assert_eq!(
            <(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8) as Tuple>::ARITY,
            12
        );
    }

    #[test]
    fn test_for_each_visits_in_index_order() {
        let collect = for_each((1, 'x', 2.5, "four"), Collect::default());
        assert_eq!(collect.0, ["1", "x", "2.5", "four"]);
    }

    #[test]
    fn test_for_each_returns_stateful_visitor() {
        let mut calls = 0;
        let mut sum = 0;
        for_each((1, 2, 3, 4), |x: i32| {
            calls += 1;
            sum += x;
        });
        assert_eq!(calls, 4);
        assert_eq!(sum, 10);
    }

    #[test]
    fn test_for_each_through_mutable_references() {
        let mut t = (1_i64, 2_i64, 3_i64);
        for_each(t.as_muts(), |x: &mut i64| *x = -*x);
        assert_eq!(t, (-1, -2, -3));
    }

    #[test]
    fn test_for_each2_pairs_by_position() {
        let mut pairs = Vec::new();
        for_each2((1, 2, 3), (10, 20, 30), |a: i32, b: i32| pairs.push((a, b)));
        assert_eq!(pairs, [(1, 10), (2, 20), (3, 30)]);
    }

    #[test]
    fn test_for_each2_writes_into_second_tuple() {
        let src = (1, 2, 3);
        let mut dst = (0, 0, 0);
        for_each2(src.as_refs(), dst.as_muts(), |a: &i32, b: &mut i32| {
            *b = *a * 100
        });
        assert_eq!(dst, (100, 200, 300));
    }

    #[test]
    fn test_transform_heterogeneous() {
        let out = transform((1_u8, "a", 2.0_f32), Describe);
        assert_eq!(
            out,
            ("1".to_string(), "\"a\"".to_string(), "2.0".to_string())
        );
    }

    #[test]
    fn test_transform_then_for_each_preserves_order() {
        let mapped = transform((3, 1, 2), |x: i32| x + 1);
        let mut order = Vec::new();
        for_each(mapped, |x: i32| order.push(x));
        assert_eq!(order, [4, 2, 3]);
    }

    #[test]
    fn test_transform2() {
        let d = transform2((10_isize, 20, 30), (1_isize, 5, 50), |a: isize, b: isize| a - b);
        assert_eq!(d, (9, 15, -20));
    }

    #[test]
    fn test_predicate_reductions() {
        let t = (2, 4, 5, 8);
        let even = |x: i32| x % 2 == 0;
        assert!(!all_of(t, even));
        assert!(any_of(t, even));
        assert!(!none_of(t, even));
        assert_eq!(count_if(t, even), 3);
        assert_eq!(find_if(t, even), 0);
        assert_eq!(find_if(t, |x: i32| x > 4), 2);
        assert_eq!(find_if(t, |x: i32| x > 100), 4);
    }

    #[test]
    fn test_reductions_evaluate_every_element() {
        let mut calls = 0;
        let all = all_of((1, 2, 3), |x: i32| {
            calls += 1;
            x > 10
        });
        assert!(!all);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_heterogeneous_predicate() {
        let t = (7, "ab", 3.25, 'c');
        assert_eq!(count_if(t, LongRendering), 2);
        assert_eq!(find_if(t, LongRendering), 1);
    }

    #[test]
    fn test_pair_reductions() {
        let lt = |a: i32, b: i32| a < b;
        assert!(all_of2((1, 2, 3), (2, 3, 4), lt));
        assert!(!all_of2((1, 5, 3), (2, 3, 4), lt));
        assert!(any_of2((9, 9, 3), (2, 3, 4), lt));
        assert!(none_of2((9, 9, 9), (2, 3, 4), lt));
    }

    #[test]
    fn test_min_max_common_type() {
        let m: f64 = min((3, 1.5, 2));
        assert_eq!(m, 1.5);
        let m: f64 = max((3, 1.5, 2_u8));
        assert_eq!(m, 3.0);
        let d: i64 = min((4_i32, -7_i64, 0_i16));
        assert_eq!(d, -7);
    }

    #[test]
    fn test_min_single_element() {
        let m: i32 = min((42,));
        assert_eq!(m, 42);
    }

    #[test]
    fn test_perform_applies_to_single_element() {
        let mut t = (1, 2, 3);
        perform(t.as_muts(), 2, |x: &mut i32| *x += 40);
        assert_eq!(t, (1, 2, 43));
    }

    #[test]
    fn test_perform_heterogeneous() {
        struct Record<'a>(&'a mut Vec<String>);

        impl<T: std::fmt::Display> Visitor<T> for Record<'_> {
            fn visit(&mut self, value: T) {
                self.0.push(value.to_string());
            }
        }

        let mut seen = Vec::new();
        perform((10, "mid", 'z'), 1, Record(&mut seen));
        assert_eq!(seen, ["mid"]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "called `perform` with index 3")]
    fn test_perform_out_of_range_panics_in_debug() {
        perform((1, 2, 3), 3, |_: i32| {});
    }

    #[test]
    fn test_try_perform_out_of_range() {
        let r = try_perform((1, 2), 5, |_: i32| {});
        assert_eq!(r, Err(AdaptorError::IndexOutOfRange { index: 5, arity: 2 }));
    }

    #[test]
    fn test_randomized_predicate_identities() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        for _ in 0..500 {
            let t: (i32, i32, i32, i32, i32) = (
                rng.random_range(-20..20),
                rng.random_range(-20..20),
                rng.random_range(-20..20),
                rng.random_range(-20..20),
                rng.random_range(-20..20),
            );
            let threshold: i32 = rng.random_range(-20..20);
            let p = |x: i32| x > threshold;

            assert_eq!(all_of(t, p), !any_of(t, |x: i32| x <= threshold));
            assert_eq!(none_of(t, p), !any_of(t, p));

            let found = find_if(t, p);
            assert_eq!(found, find_if(t, p));
            let values = [t.0, t.1, t.2, t.3, t.4];
            let expected = values.iter().position(|&x| x > threshold).unwrap_or(5);
            assert_eq!(found, expected);
            assert_eq!(count_if(t, p), values.iter().filter(|&&x| x > threshold).count());
        }
    }
}

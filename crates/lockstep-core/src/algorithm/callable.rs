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

//! # Element Callables
//!
//! The tuple algorithms apply one callable to elements of different types.
//! A Rust closure has a single argument type, so the algorithms are written
//! against these traits instead of `FnMut` directly:
//!
//! - a closure works whenever every element it sees has the same type,
//!   through the blanket implementations below;
//! - a heterogeneous tuple takes a (usually zero-sized) struct that implements
//!   the trait once per element type, typically with a generic `impl`.
//!
//! ```rust
//! use lockstep_core::algorithm::callable::Visitor;
//! use lockstep_core::algorithm::tuple::for_each;
//!
//! #[derive(Default)]
//! struct Render(Vec<String>);
//!
//! impl<T: std::fmt::Display> Visitor<T> for Render {
//!     fn visit(&mut self, value: T) {
//!         self.0.push(value.to_string());
//!     }
//! }
//!
//! let render = for_each((1, 2.5, "three"), Render::default());
//! assert_eq!(render.0, ["1", "2.5", "three"]);
//! ```

/// A callable invoked for its side effect on one element.
pub trait Visitor<T> {
    /// Visits `value`.
    fn visit(&mut self, value: T);
}

impl<F, T> Visitor<T> for F
where
    F: FnMut(T),
{
    #[inline(always)]
    fn visit(&mut self, value: T) {
        self(value)
    }
}

/// A callable mapping one element to a new value.
pub trait Mapper<T> {
    /// The type produced for an element of type `T`.
    type Output;

    /// Maps `value` to its output.
    fn map(&mut self, value: T) -> Self::Output;
}

impl<F, T, R> Mapper<T> for F
where
    F: FnMut(T) -> R,
{
    type Output = R;

    #[inline(always)]
    fn map(&mut self, value: T) -> R {
        self(value)
    }
}

/// A callable answering a yes/no question about one element.
pub trait Predicate<T> {
    /// Returns `true` if `value` satisfies the predicate.
    fn test(&mut self, value: T) -> bool;
}

impl<F, T> Predicate<T> for F
where
    F: FnMut(T) -> bool,
{
    #[inline(always)]
    fn test(&mut self, value: T) -> bool {
        self(value)
    }
}

/// A callable invoked on a position-matched pair of elements.
pub trait BinaryVisitor<A, B> {
    /// Visits the pair `(left, right)`.
    fn visit_pair(&mut self, left: A, right: B);
}

impl<F, A, B> BinaryVisitor<A, B> for F
where
    F: FnMut(A, B),
{
    #[inline(always)]
    fn visit_pair(&mut self, left: A, right: B) {
        self(left, right)
    }
}

/// A callable mapping a position-matched pair of elements to a new value.
pub trait BinaryMapper<A, B> {
    /// The type produced for a pair of type `(A, B)`.
    type Output;

    /// Maps the pair `(left, right)` to its output.
    fn map_pair(&mut self, left: A, right: B) -> Self::Output;
}

impl<F, A, B, R> BinaryMapper<A, B> for F
where
    F: FnMut(A, B) -> R,
{
    type Output = R;

    #[inline(always)]
    fn map_pair(&mut self, left: A, right: B) -> R {
        self(left, right)
    }
}

/// A callable answering a yes/no question about a position-matched pair.
pub trait BinaryPredicate<A, B> {
    /// Returns `true` if the pair `(left, right)` satisfies the predicate.
    fn test_pair(&mut self, left: A, right: B) -> bool;
}

impl<F, A, B> BinaryPredicate<A, B> for F
where
    F: FnMut(A, B) -> bool,
{
    #[inline(always)]
    fn test_pair(&mut self, left: A, right: B) -> bool {
        self(left, right)
    }
}

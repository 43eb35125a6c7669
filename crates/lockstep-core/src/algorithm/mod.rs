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

//! # Tuple Algorithms
//!
//! Compile-time unrolled algorithms over heterogeneous tuples, the building
//! blocks of the zip adaptor: a zip cursor is a tuple of cursors, and every
//! one of its operations is one of these algorithms applied to that tuple.
//!
//! ## Submodules
//!
//! - `callable`: the `Visitor`, `Mapper` and `Predicate` traits (plus their
//!   pair forms) that let one callable act on elements of different types.
//!   Closures implement them automatically.
//! - `tuple`: the `Tuple` trait and `for_each`, `transform`, `all_of`,
//!   `any_of`, `none_of`, `count_if`, `find_if`, `min`, `max`, `perform`, each
//!   implemented for arities 1 through 12.

pub mod callable;
pub mod tuple;

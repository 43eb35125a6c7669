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

//! # Lockstep Core
//!
//! Foundations for lockstep traversal: compile-time unrolled algorithms over
//! heterogeneous tuples, the random-access `Cursor` abstraction that adaptors
//! build on, and the small amount of shared infrastructure (errors, timing,
//! iterator bridging) used by the adaptor and benchmark crates.
//!
//! ## Modules
//!
//! - `algorithm`: `for_each`, `transform`, `all_of`/`any_of`/`none_of`,
//!   `count_if`, `find_if`, `min`/`max` and `perform` over tuples of arity
//!   1 through 12, plus binary forms over two tuples of equal arity.
//! - `cursor`: the `Cursor` trait with derived navigation and comparison.
//! - `error`: `AdaptorError` for invalid steps, step mismatches and
//!   out-of-range tuple indices.
//! - `time`: an accumulating `StopWatch`.
//! - `utils`: `CursorIter<C>`, bridging cursor pairs to `Iterator`.
//!
//! ## Purpose
//!
//! A zip of several sequences is a tuple of cursors, and every operation on
//! it is a tuple algorithm applied to that tuple. Keeping those algorithms
//! here lets the adaptor crate stay a thin layer of cursor types.

pub mod algorithm;
pub mod cursor;
pub mod error;
pub mod time;
pub mod utils;

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

//! # Lockstep Iterators
//!
//! Cursor adaptors over borrowed sequences, built on the tuple algorithms and
//! the `Cursor` trait of `lockstep_core`.
//!
//! ## Modules
//!
//! - `slice`: `SliceCursor`, the leaf cursor over `&[T]` (and `&[Cell<T>]` for
//!   writable sources).
//! - `sequence`: the `Sequence` trait, implemented for borrowed slices,
//!   vectors, arrays and every range type in this crate.
//! - `strided`: `Strided` / `StridedRange` and the `strided` constructor for
//!   traversing every `|step|`-th element, forwards or backwards.
//! - `zip`: `Zip` / `ZipRange` and the `zip` constructor for moving up to twelve
//!   sequences in lockstep, ending at the shortest.
//! - `range`: `RangeCursor` / `NumericRange` integer progressions and
//!   `FloatRangeCursor` / `FloatRange` floating-point progressions.
//!
//! ## Example
//!
//! ```rust
//! use lockstep_iter::{strided::strided, zip::zip};
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0];
//! let mut y = vec![0.0; 6];
//! for (xi, yi) in zip((strided(&x, 2), strided(&mut y, 3))) {
//!     yi.set(yi.get() + 0.5 * xi);
//! }
//! assert_eq!(y, [0.5, 0.0, 0.0, 1.5, 0.0, 0.0]);
//! ```

pub mod range;
pub mod sequence;
pub mod slice;
pub mod strided;
pub mod zip;

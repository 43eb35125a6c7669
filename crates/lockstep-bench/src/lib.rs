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

//! # Lockstep Bench
//!
//! A small timing harness for computations built on the lockstep adaptors.
//! A `Kernel` is reset, run under a `StopWatch`, and checked against a
//! precomputed answer for a configurable number of cycles; results are
//! reported through the `log` facade and returned as a `RunReport`.
//!
//! ## Modules
//!
//! - `kernel`: the `Kernel` trait.
//! - `runner`: `Runner`, `RunnerConfig`, `RunReport` and `RunnerError`.
//! - `kernels`: sort, SAXPY (zip) and strided SAXPY (zip of strided views).
//! - `data`: `random_fill` and `check_same`.

pub mod data;
pub mod kernel;
pub mod kernels;
pub mod runner;

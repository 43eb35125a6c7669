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

//! # Kernel Input Helpers
//!
//! Untimed helpers used when building kernels and checking their results.

use lockstep_iter::zip::zip;
use rand::Rng;

/// Overwrites every element of `values` with a sample drawn uniformly from
/// `[0, 1)`.
///
/// # Examples
///
/// ```rust
/// # use lockstep_bench::data::random_fill;
/// # use rand::{SeedableRng, rngs::StdRng};
/// let mut rng = StdRng::seed_from_u64(1);
/// let mut v = vec![-1.0; 16];
/// random_fill(&mut v, &mut rng);
/// assert!(v.iter().all(|x| (0.0..1.0).contains(x)));
/// ```
pub fn random_fill<R: Rng>(values: &mut [f64], rng: &mut R) {
    for v in values.iter_mut() {
        *v = rng.random::<f64>();
    }
}

/// Returns `true` if `x` and `y` have the same length and are element-wise
/// equal.
pub fn check_same<T: PartialEq>(x: &[T], y: &[T]) -> bool {
    x.len() == y.len() && zip((x, y)).into_iter().all(|(a, b)| a == b)
}

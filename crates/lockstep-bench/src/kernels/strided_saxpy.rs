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

//! `y[i * incy] += a * x[i * incx]` over two strided views moved in lockstep.

use crate::data::check_same;
use crate::kernel::Kernel;
use lockstep_iter::strided::strided;
use lockstep_iter::zip::zip;

/// Strided SAXPY over `x` and `y` with positive increments.
#[derive(Debug, Clone)]
pub struct StridedSaxpyKernel {
    a: f64,
    x: Vec<f64>,
    incx: isize,
    y: Vec<f64>,
    incy: isize,
    work: Vec<f64>,
    answer: Vec<f64>,
}

impl StridedSaxpyKernel {
    /// Creates the kernel and computes the expected result with a plain loop.
    ///
    /// # Panics
    ///
    /// Panics if `incx` or `incy` is not positive.
    pub fn new(a: f64, x: Vec<f64>, incx: isize, y: Vec<f64>, incy: isize) -> Self {
        assert!(
            incx > 0 && incy > 0,
            "Invalid stride: increments must be positive, got incx = {} and incy = {}",
            incx,
            incy
        );
        let (sx, sy) = (incx as usize, incy as usize);
        let n = x.len().div_ceil(sx).min(y.len().div_ceil(sy));

        let mut answer = y.clone();
        for i in 0..n {
            answer[i * sy] += a * x[i * sx];
        }
        Self {
            a,
            incx,
            incy,
            work: Vec::with_capacity(y.len()),
            x,
            y,
            answer,
        }
    }
}

impl Kernel for StridedSaxpyKernel {
    fn name(&self) -> &str {
        "strided saxpy"
    }

    fn reset(&mut self) {
        self.work.clone_from(&self.y);
    }

    fn run(&mut self) {
        let a = self.a;
        let xs = strided(&self.x, self.incx);
        let ys = strided(&mut self.work, self.incy);
        for (xi, yi) in zip((xs, ys)) {
            yi.set(yi.get() + a * xi);
        }
    }

    fn check(&self) -> bool {
        check_same(&self.answer, &self.work)
    }
}

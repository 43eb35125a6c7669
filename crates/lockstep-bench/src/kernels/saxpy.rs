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

//! `y += a * x` over two vectors moved in lockstep by `zip`.

use crate::data::check_same;
use crate::kernel::Kernel;
use lockstep_iter::zip::zip;

/// Computes `y[i] += a * x[i]` for every index of the shorter vector.
#[derive(Debug, Clone)]
pub struct SaxpyKernel {
    a: f64,
    x: Vec<f64>,
    y: Vec<f64>,
    work: Vec<f64>,
    answer: Vec<f64>,
}

impl SaxpyKernel {
    /// Creates the kernel and computes the expected result with a plain loop.
    pub fn new(a: f64, x: Vec<f64>, y: Vec<f64>) -> Self {
        let mut answer = y.clone();
        for (ans, xi) in answer.iter_mut().zip(&x) {
            *ans += a * xi;
        }
        Self {
            a,
            work: Vec::with_capacity(y.len()),
            x,
            y,
            answer,
        }
    }

    /// Returns the number of updated elements.
    pub fn len(&self) -> usize {
        self.x.len().min(self.y.len())
    }

    /// Returns `true` if no element is updated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Kernel for SaxpyKernel {
    fn name(&self) -> &str {
        "saxpy"
    }

    fn reset(&mut self) {
        self.work.clone_from(&self.y);
    }

    fn run(&mut self) {
        let a = self.a;
        for (xi, yi) in zip((&self.x, &mut self.work)) {
            yi.set(yi.get() + a * xi);
        }
    }

    fn check(&self) -> bool {
        check_same(&self.answer, &self.work)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saxpy_values() {
        let mut k = SaxpyKernel::new(2.0, vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0]);
        k.reset();
        k.run();
        assert_eq!(k.work, [12.0, 24.0, 36.0]);
        assert!(k.check());
    }

    #[test]
    fn test_repeated_cycles_stay_correct() {
        let mut k = SaxpyKernel::new(0.5, vec![4.0; 8], vec![1.0; 8]);
        for _ in 0..3 {
            k.reset();
            k.run();
            assert!(k.check());
        }
    }

    #[test]
    fn test_shorter_x_leaves_tail_untouched() {
        let mut k = SaxpyKernel::new(1.0, vec![1.0, 1.0], vec![0.0; 4]);
        assert_eq!(k.len(), 2);
        k.reset();
        k.run();
        assert_eq!(k.work, [1.0, 1.0, 0.0, 0.0]);
        assert!(k.check());
    }
}

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

//! Sorting a copy of the input, checked against a pre-sorted answer.

use crate::data::check_same;
use crate::kernel::Kernel;
use std::cmp::Ordering;

#[inline]
fn sort_values<T: PartialOrd>(values: &mut [T]) {
    values.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
}

/// Sorts a fresh copy of its input on every run.
#[derive(Debug, Clone)]
pub struct SortKernel<T> {
    input: Vec<T>,
    work: Vec<T>,
    answer: Vec<T>,
}

impl<T> SortKernel<T>
where
    T: PartialOrd + Clone,
{
    /// Creates the kernel and computes the expected result.
    pub fn new(input: Vec<T>) -> Self {
        let mut answer = input.clone();
        sort_values(&mut answer);
        Self {
            work: Vec::with_capacity(input.len()),
            input,
            answer,
        }
    }
}

impl<T> Kernel for SortKernel<T>
where
    T: PartialOrd + Clone,
{
    fn name(&self) -> &str {
        "sort"
    }

    fn reset(&mut self) {
        self.work.clone_from(&self.input);
    }

    fn run(&mut self) {
        sort_values(&mut self.work);
    }

    fn check(&self) -> bool {
        check_same(&self.answer, &self.work)
    }
}

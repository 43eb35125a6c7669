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

//! The unit of work timed by the `Runner`.

/// A repeatable, self-checking computation.
///
/// The runner calls `reset`, then times `run`, then calls `check`. Only `run`
/// is measured, so `reset` is the place to restore inputs that `run`
/// overwrites.
pub trait Kernel {
    /// Returns a short, human-readable name used in log output.
    fn name(&self) -> &str;

    /// Restores the kernel's working state before a timed run.
    fn reset(&mut self);

    /// Performs the timed computation.
    fn run(&mut self);

    /// Returns `true` if the last run produced the expected result.
    fn check(&self) -> bool;
}

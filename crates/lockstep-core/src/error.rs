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

//! # Adaptor Configuration Errors
//!
//! Precondition violations that can be detected cheaply when an adaptor is
//! built or two adaptors are compared. The panicking constructors (`new`)
//! assert these conditions; the fallible variants (`try_new`,
//! `checked_distance_to`, `try_perform`) surface them as `AdaptorError`
//! so a caller can validate input instead of aborting.
//!
//! An `AdaptorError` never signals the end of a traversal. Exhaustion is
//! reported through the cursor contract (`equals`) and through `Iterator::next`
//! returning `None`.

/// The error type for invalid adaptor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdaptorError {
    /// A strided adaptor or numeric range was configured with a step of zero.
    ZeroStep,
    /// Two strided adaptors with different steps were compared or subtracted.
    StepMismatch {
        /// The step of the left-hand adaptor.
        left: isize,
        /// The step of the right-hand adaptor.
        right: isize,
    },
    /// A runtime tuple index was not smaller than the tuple's arity.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The arity of the tuple.
        arity: usize,
    },
}

impl std::fmt::Display for AdaptorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroStep => write!(f, "Invalid step: the step must be non-zero"),
            Self::StepMismatch { left, right } => write!(
                f,
                "Step mismatch: cannot relate adaptors with steps {} and {}",
                left, right
            ),
            Self::IndexOutOfRange { index, arity } => write!(
                f,
                "Index out of range: index {} is not valid for a tuple of arity {}",
                index, arity
            ),
        }
    }
}

impl std::error::Error for AdaptorError {}

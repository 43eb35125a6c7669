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

//! # Stop Watch
//!
//! An accumulating wall-clock timer built on `std::time::Instant`. Time is
//! only counted while the watch is running; successive start/stop intervals
//! add up until the watch is reset.
//!
//! ## Highlights
//!
//! - `start` on a running watch and `stop` on a stopped one are no-ops.
//! - `elapsed` includes the interval still in progress when running.
//! - `restart` is `reset` followed by `start`.
//!
//! ## Usage
//!
//! ```rust
//! use lockstep_core::time::stopwatch::StopWatch;
//!
//! let mut watch = StopWatch::new();
//! watch.start();
//! let _work: u64 = (0..1_000u64).sum();
//! watch.stop();
//! assert!(!watch.is_running());
//! assert!(watch.elapsed_seconds() >= 0.0);
//! ```

use std::time::{Duration, Instant};

/// Accumulates elapsed wall-clock time across start/stop intervals.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopWatch {
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl StopWatch {
    /// Creates a stopped watch with no accumulated time.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the watch is currently counting.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Starts counting. Has no effect if the watch is already running.
    #[inline]
    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    /// Stops counting and adds the current interval to the total.
    #[inline]
    pub fn stop(&mut self) {
        if let Some(t0) = self.started_at.take() {
            self.accumulated += t0.elapsed();
        }
    }

    /// Stops the watch and clears the accumulated time.
    #[inline]
    pub fn reset(&mut self) {
        self.started_at = None;
        self.accumulated = Duration::ZERO;
    }

    /// Clears the accumulated time and starts counting from now.
    #[inline]
    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    /// Returns the accumulated time, including the running interval.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(t0) => self.accumulated + t0.elapsed(),
            None => self.accumulated,
        }
    }

    /// Returns `elapsed()` in seconds.
    #[inline]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_new_is_stopped_and_zero() {
        let w = StopWatch::new();
        assert!(!w.is_running());
        assert_eq!(w.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_accumulates_across_intervals() {
        let mut w = StopWatch::new();
        w.start();
        sleep(Duration::from_millis(5));
        w.stop();
        let first = w.elapsed();
        assert!(first >= Duration::from_millis(5));

        // Time while stopped does not count.
        sleep(Duration::from_millis(5));
        assert_eq!(w.elapsed(), first);

        w.start();
        sleep(Duration::from_millis(5));
        w.stop();
        assert!(w.elapsed() >= first + Duration::from_millis(5));
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut w = StopWatch::new();
        w.start();
        sleep(Duration::from_millis(5));
        w.start();
        w.stop();
        assert!(w.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn test_elapsed_while_running_grows() {
        let mut w = StopWatch::new();
        w.start();
        let a = w.elapsed();
        sleep(Duration::from_millis(2));
        let b = w.elapsed();
        assert!(w.is_running());
        assert!(b > a);
    }

    #[test]
    fn test_reset_and_restart() {
        let mut w = StopWatch::new();
        w.start();
        sleep(Duration::from_millis(2));
        w.reset();
        assert!(!w.is_running());
        assert_eq!(w.elapsed(), Duration::ZERO);

        w.restart();
        assert!(w.is_running());
        w.stop();
        assert!(w.elapsed_seconds() < 1.0);
    }
}

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

//! # Timed Kernel Runner
//!
//! Repeats a `Kernel` a configured number of cycles, timing only the `run`
//! phase with a `StopWatch`, and reports per-cycle times and correctness.
//!
//! ## Highlights
//!
//! - Each cycle: `reset` (untimed), `run` (timed), `check` (untimed).
//! - Every cycle is logged at `info`; a failed check is logged at `warn`.
//! - The average time is logged at `info` when all cycles have finished.
//! - A configuration with zero cycles is rejected with
//!   `RunnerError::ZeroCycles` before the kernel is touched.
//!
//! ## Usage
//!
//! ```rust
//! use lockstep_bench::kernel::Kernel;
//! use lockstep_bench::runner::{Runner, RunnerConfig};
//!
//! struct Square { input: Vec<u64>, output: Vec<u64> }
//!
//! impl Kernel for Square {
//!     fn name(&self) -> &str { "square" }
//!     fn reset(&mut self) { self.output.clear(); }
//!     fn run(&mut self) { self.output.extend(self.input.iter().map(|x| x * x)); }
//!     fn check(&self) -> bool { self.output == [1, 4, 9] }
//! }
//!
//! let mut k = Square { input: vec![1, 2, 3], output: Vec::new() };
//! let report = Runner::execute(&RunnerConfig::default().with_cycles(3), &mut k).unwrap();
//! assert_eq!(report.times().len(), 3);
//! assert!(report.all_correct());
//! ```

use crate::kernel::Kernel;
use lockstep_core::time::stopwatch::StopWatch;

/// Settings for `Runner::execute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    cycles: usize,
}

impl RunnerConfig {
    /// The number of cycles used by `RunnerConfig::default()`.
    pub const DEFAULT_CYCLES: usize = 10;

    /// Creates a configuration running `cycles` timed cycles.
    #[inline]
    pub fn new(cycles: usize) -> Self {
        Self { cycles }
    }

    /// Returns a copy running `cycles` timed cycles.
    #[inline]
    pub fn with_cycles(self, cycles: usize) -> Self {
        Self { cycles }
    }

    /// Returns the number of timed cycles.
    #[inline]
    pub fn cycles(&self) -> usize {
        self.cycles
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CYCLES)
    }
}

impl std::fmt::Display for RunnerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RunnerConfig(cycles: {})", self.cycles)
    }
}

/// The error type for `Runner::execute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerError {
    /// The configuration asked for zero cycles.
    ZeroCycles,
}

impl std::fmt::Display for RunnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroCycles => write!(
                f,
                "Invalid runner configuration: the number of cycles must be positive"
            ),
        }
    }
}

impl std::error::Error for RunnerError {}

/// Per-cycle measurements of one `Runner::execute` call.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    name: String,
    times: Vec<f64>,
    correct: Vec<bool>,
}

impl RunReport {
    /// Returns the name of the kernel that was run.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the timed duration of every cycle, in seconds.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the check result of every cycle.
    #[inline]
    pub fn correct(&self) -> &[bool] {
        &self.correct
    }

    /// Returns the mean cycle time in seconds.
    #[inline]
    pub fn average_seconds(&self) -> f64 {
        if self.times.is_empty() {
            return 0.0;
        }
        self.times.iter().sum::<f64>() / self.times.len() as f64
    }

    /// Returns `true` if every cycle passed its check.
    #[inline]
    pub fn all_correct(&self) -> bool {
        self.correct.iter().all(|&c| c)
    }
}

/// Drives kernels through timed cycles.
#[derive(Debug, Clone, Copy, Default)]
pub struct Runner;

impl Runner {
    /// Runs `kernel` for `config.cycles()` cycles and reports the results.
    pub fn execute<K>(config: &RunnerConfig, kernel: &mut K) -> Result<RunReport, RunnerError>
    where
        K: Kernel + ?Sized,
    {
        if config.cycles == 0 {
            return Err(RunnerError::ZeroCycles);
        }

        let mut watch = StopWatch::new();
        let mut times = Vec::with_capacity(config.cycles);
        let mut correct = Vec::with_capacity(config.cycles);

        for cycle in 0..config.cycles {
            kernel.reset();

            watch.restart();
            kernel.run();
            watch.stop();

            let ok = kernel.check();
            let secs = watch.elapsed_seconds();
            times.push(secs);
            correct.push(ok);

            log::info!(
                "{}: cycle {:>3}  time (sec) = {:.6e}  correct = {}",
                kernel.name(),
                cycle,
                secs,
                ok
            );
            if !ok {
                log::warn!("{}: cycle {} failed its check", kernel.name(), cycle);
            }
        }

        let report = RunReport {
            name: kernel.name().to_string(),
            times,
            correct,
        };
        log::info!(
            "{}: average (sec) = {:.6e}",
            report.name,
            report.average_seconds()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Probe {
        resets: usize,
        runs: usize,
        fail_on: Option<usize>,
    }

    impl Kernel for Probe {
        fn name(&self) -> &str {
            "probe"
        }

        fn reset(&mut self) {
            self.resets += 1;
        }

        fn run(&mut self) {
            self.runs += 1;
        }

        fn check(&self) -> bool {
            self.fail_on != Some(self.runs)
        }
    }

    #[test]
    fn test_default_config() {
        assert_eq!(RunnerConfig::default().cycles(), 10);
        assert_eq!(RunnerConfig::default().with_cycles(3).cycles(), 3);
        assert_eq!(
            RunnerConfig::new(4).to_string(),
            "RunnerConfig(cycles: 4)"
        );
    }

    #[test]
    fn test_execute_runs_every_cycle() {
        let mut k = Probe::default();
        let report = Runner::execute(&RunnerConfig::new(5), &mut k).unwrap();
        assert_eq!(k.resets, 5);
        assert_eq!(k.runs, 5);
        assert_eq!(report.name(), "probe");
        assert_eq!(report.times().len(), 5);
        assert!(report.times().iter().all(|&t| t >= 0.0));
        assert!(report.all_correct());
    }

    #[test]
    fn test_execute_records_failed_check() {
        let mut k = Probe {
            fail_on: Some(2),
            ..Probe::default()
        };
        let report = Runner::execute(&RunnerConfig::new(3), &mut k).unwrap();
        assert_eq!(report.correct(), [true, false, true]);
        assert!(!report.all_correct());
    }

    #[test]
    fn test_zero_cycles_rejected() {
        let mut k = Probe::default();
        let err = Runner::execute(&RunnerConfig::new(0), &mut k).unwrap_err();
        assert_eq!(err, RunnerError::ZeroCycles);
        assert_eq!(k.resets, 0);
        assert!(err.to_string().contains("cycles must be positive"));
    }

    #[test]
    fn test_average() {
        let report = RunReport {
            name: "x".to_string(),
            times: vec![1.0, 2.0, 3.0],
            correct: vec![true; 3],
        };
        assert_eq!(report.average_seconds(), 2.0);
    }

    #[test]
    fn test_dyn_kernel() {
        let mut k = Probe::default();
        let k: &mut dyn Kernel = &mut k;
        assert!(Runner::execute(&RunnerConfig::new(1), k).is_ok());
    }
}

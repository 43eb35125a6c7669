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

use lockstep_bench::data::random_fill;
use lockstep_bench::kernel::Kernel;
use lockstep_bench::kernels::{
    saxpy::SaxpyKernel, sort::SortKernel, strided_saxpy::StridedSaxpyKernel,
};
use lockstep_bench::runner::{Runner, RunnerConfig};
use rand::{SeedableRng, rngs::StdRng};
use std::process::ExitCode;

const SORT_SIZE: usize = 1_000_000;
const SAXPY_SIZE: usize = 10_000_000;
const STRIDED_SIZE: usize = 1_000_000;
const INCX: isize = 2;
const INCY: isize = 3;
const ALPHA: f64 = 5.0;

fn random_vec(len: usize, rng: &mut StdRng) -> Vec<f64> {
    let mut v = vec![0.0; len];
    random_fill(&mut v, rng);
    v
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RunnerConfig::default();
    log::info!("{}", config);

    let mut rng = StdRng::from_os_rng();
    let mut kernels: Vec<Box<dyn Kernel>> = vec![
        Box::new(SortKernel::new(random_vec(SORT_SIZE, &mut rng))),
        Box::new(SaxpyKernel::new(
            ALPHA,
            random_vec(SAXPY_SIZE, &mut rng),
            random_vec(SAXPY_SIZE, &mut rng),
        )),
        Box::new(StridedSaxpyKernel::new(
            ALPHA,
            random_vec(STRIDED_SIZE * INCX as usize, &mut rng),
            INCX,
            random_vec(STRIDED_SIZE * INCY as usize, &mut rng),
            INCY,
        )),
    ];

    let mut all_correct = true;
    for kernel in kernels.iter_mut() {
        match Runner::execute(&config, kernel.as_mut()) {
            Ok(report) => all_correct &= report.all_correct(),
            Err(e) => {
                log::error!("{}: {}", kernel.name(), e);
                return ExitCode::FAILURE;
            }
        }
    }

    if all_correct {
        ExitCode::SUCCESS
    } else {
        log::warn!("at least one kernel produced an incorrect result");
        ExitCode::FAILURE
    }
}

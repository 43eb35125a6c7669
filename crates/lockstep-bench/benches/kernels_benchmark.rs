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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lockstep_bench::data::random_fill;
use lockstep_bench::kernel::Kernel;
use lockstep_bench::kernels::{
    saxpy::SaxpyKernel, sort::SortKernel, strided_saxpy::StridedSaxpyKernel,
};
use lockstep_core::time::stopwatch::StopWatch;
use rand::{SeedableRng, rngs::StdRng};
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 100_000, 1_000_000];

fn random_vec(len: usize, rng: &mut StdRng) -> Vec<f64> {
    let mut v = vec![0.0; len];
    random_fill(&mut v, rng);
    v
}

/// Times only `run`; `reset` happens outside the stop watch.
fn bench_kernel<K: Kernel>(c: &mut Criterion, group_name: &str, size: usize, kernel: &mut K) {
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(size as u64));
    group.bench_function(BenchmarkId::from_parameter(size), |b| {
        b.iter_custom(|iters| {
            let mut watch = StopWatch::new();
            for _ in 0..iters {
                kernel.reset();
                watch.start();
                kernel.run();
                watch.stop();
                black_box(&*kernel);
            }
            watch.elapsed()
        })
    });
    group.finish();

    assert!(kernel.check(), "{} produced an incorrect result", kernel.name());
}

fn bench_kernels(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2022);

    for &n in SIZES.iter() {
        let mut sort = SortKernel::new(random_vec(n, &mut rng));
        bench_kernel(c, "sort", n, &mut sort);

        let mut saxpy = SaxpyKernel::new(5.0, random_vec(n, &mut rng), random_vec(n, &mut rng));
        bench_kernel(c, "saxpy", n, &mut saxpy);

        let mut strided =
            StridedSaxpyKernel::new(5.0, random_vec(2 * n, &mut rng), 2, random_vec(3 * n, &mut rng), 3);
        bench_kernel(c, "strided_saxpy", n, &mut strided);
    }
}

criterion_group!(benches, bench_kernels);
criterion_main!(benches);

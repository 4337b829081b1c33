// Copyright (c) 2025 Coinjar Contributors.
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

use coinjar_engine::monitor::no_op::NoOperationMonitor;
use coinjar_engine::solver::PartitionSolver;
use coinjar_model::jar::CoinJar;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

/// Worst case: an odd total forces full exhaustion of all 2^n leaves.
fn odd_total_jar(num_coins: usize) -> CoinJar<i64> {
    let mut coins = vec![2i64; num_coins - 1];
    coins.push(1);
    CoinJar::new(coins).expect("bench jar is well-formed")
}

fn random_jar(num_coins: usize, seed: u64) -> CoinJar<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let coins: Vec<i64> = (0..num_coins).map(|_| rng.random_range(2..=25)).collect();
    CoinJar::new(coins).expect("bench jar is well-formed")
}

fn bench_exhaustive_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive_search");

    for num_coins in [12usize, 16, 20, 24] {
        let jar = odd_total_jar(num_coins);
        let mut solver = PartitionSolver::preallocated(num_coins);

        group.throughput(Throughput::Elements(1u64 << num_coins));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_coins),
            &num_coins,
            |b, _| {
                b.iter(|| {
                    let outcome = solver.solve(black_box(&jar), NoOperationMonitor::new());
                    black_box(outcome)
                })
            },
        );
    }
    group.finish();
}

fn bench_random_jars(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_jars");

    for num_coins in [10usize, 14, 18] {
        let jar = random_jar(num_coins, 0xC01);
        let mut solver = PartitionSolver::preallocated(num_coins);

        group.bench_with_input(
            BenchmarkId::from_parameter(num_coins),
            &num_coins,
            |b, _| {
                b.iter(|| {
                    let outcome = solver.solve(black_box(&jar), NoOperationMonitor::new());
                    black_box(outcome)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_exhaustive_search, bench_random_jars);
criterion_main!(benches);

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

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use disks_model::state::DiskState;
use disks_sort::strategy::SortStrategy;
use std::hint::black_box;

const LIGHT_COUNTS: [usize; 4] = [8, 64, 256, 1024];

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorter_benchmark");

    for light_count in LIGHT_COUNTS {
        let before = DiskState::alternating(light_count);
        group.throughput(Throughput::Elements(before.total_count() as u64));

        for strategy in SortStrategy::ALL {
            group.bench_with_input(
                BenchmarkId::new(strategy.as_str(), light_count),
                &before,
                |b, before| {
                    b.iter(|| {
                        let sorted = strategy.sort(black_box(before));
                        if !sorted.after().is_sorted() {
                            panic!(
                                "Benchmark configuration error: {} left the row unsorted.",
                                strategy
                            );
                        }
                        black_box(sorted.swap_count())
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);

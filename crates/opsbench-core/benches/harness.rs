//! Criterion benchmarks for the timing harness itself: loop overhead for a
//! no-op closure and full-suite cost at reduced iteration counts.

use criterion::{criterion_group, criterion_main, Criterion};
use opsbench_core::timing::{measure, measure_with_warmup};
use std::hint::black_box;

fn harness_overhead(c: &mut Criterion) {
    c.bench_function("measure_noop_1000", |b| {
        b.iter(|| black_box(measure(|| {}, 1_000)))
    });

    c.bench_function("measure_noop_no_warmup_1000", |b| {
        b.iter(|| black_box(measure_with_warmup(|| {}, 1_000, 0)))
    });

    c.bench_function("measure_int_add_1000", |b| {
        b.iter(|| {
            black_box(measure(
                || {
                    black_box(black_box(123_i64) + black_box(456_i64));
                },
                1_000,
            ))
        })
    });
}

criterion_group!(benches, harness_overhead);
criterion_main!(benches);

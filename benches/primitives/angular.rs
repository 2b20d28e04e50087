//! Benchmarks for angular selection.

use std::hint::black_box;

use amusia::angular::{angular, angular_normalized, select_from};
use amusia::pitch::arpeggios;
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

pub fn bench_angular(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives/angular");

    for &size in BLOCK_SIZES {
        // Raw angle - two fmod reductions per step
        group.bench_with_input(BenchmarkId::new("angular", size), &size, |b, &size| {
            b.iter(|| {
                let mut sum = 0.0;
                for i in 0..size as i64 {
                    sum += angular(black_box(i), black_box(3.0));
                }
                sum
            })
        });

        // Large step counters stay as cheap as small ones
        group.bench_with_input(BenchmarkId::new("angular_large_i", size), &size, |b, &size| {
            b.iter(|| {
                let mut sum = 0.0;
                for i in 0..size as i64 {
                    sum += angular_normalized(black_box(1_000_000_000 + i), black_box(7.0));
                }
                sum
            })
        });

        // Selection from a chord table
        group.bench_with_input(BenchmarkId::new("select_from", size), &size, |b, &size| {
            b.iter(|| {
                let mut sum = 0;
                for i in 0..size as i64 {
                    sum += *select_from(black_box(i), 4.0, arpeggios::MAJOR_NINE).unwrap();
                }
                sum
            })
        });
    }

    group.finish();
}

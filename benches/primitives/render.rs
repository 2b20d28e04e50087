//! Benchmarks for rendering notes into a buffer and mixing buffers.

use std::hint::black_box;

use amusia::render::{RenderConfig, WaveformBuffer};
use amusia::voice::{sine, square, VoiceExt};
use criterion::{BatchSize, BenchmarkId, Criterion};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

fn config() -> RenderConfig {
    RenderConfig::with_sample_rate(SAMPLE_RATE)
}

fn fresh() -> WaveformBuffer {
    WaveformBuffer::new(config()).unwrap()
}

fn rendered(seconds: f64) -> WaveformBuffer {
    let mut wave = fresh();
    wave.add_note(330.0, 0.5, seconds, &sine().split(square()))
        .unwrap();
    wave
}

pub fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives/render");

    for &size in BLOCK_SIZES {
        let duration = size as f64 / SAMPLE_RATE as f64;

        // One note of `size` samples into a fresh buffer
        group.bench_with_input(BenchmarkId::new("add_note", size), &size, |b, _| {
            b.iter_batched(
                fresh,
                |mut wave| {
                    wave.add_note(440.0, 0.5, black_box(duration), &sine())
                        .unwrap();
                    wave
                },
                BatchSize::SmallInput,
            )
        });

        // Rests go through the same path with the silent voice
        group.bench_with_input(BenchmarkId::new("add_rest", size), &size, |b, _| {
            b.iter_batched(
                fresh,
                |mut wave| {
                    wave.add_rest(black_box(duration)).unwrap();
                    wave
                },
                BatchSize::SmallInput,
            )
        });

        let a = rendered(duration);
        let other = rendered(duration * 2.0);

        // Pairwise mix, truncating the longer buffer
        group.bench_with_input(BenchmarkId::new("mix", size), &size, |b, _| {
            b.iter_batched(
                || a.clone(),
                |mut wave| {
                    wave.mix(black_box(&other), 0.5).unwrap();
                    wave
                },
                BatchSize::SmallInput,
            )
        });

        // Four-way mixdown
        group.bench_with_input(BenchmarkId::new("mix_all_4", size), &size, |b, _| {
            b.iter(|| WaveformBuffer::mix_all(black_box(&[&a, &other, &a, &other])).unwrap())
        });
    }

    group.finish();
}

//! Benchmarks for evaluating voices sample by sample.

use std::hint::black_box;

use amusia::voice::{
    circular, granularize, sawtooth, sine, square, Voice, VoiceExt, Waveform, ZAPPY_3_2,
};
use criterion::{BenchmarkId, Criterion};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

fn evaluate<V: Voice + ?Sized>(voice: &V, samples: usize) -> f64 {
    let rate = SAMPLE_RATE as f64;
    let mut sum = 0.0;
    for s in 0..samples {
        sum += voice.sample(black_box(440.0), s as f64 / rate);
    }
    sum
}

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives/voices");

    for &size in BLOCK_SIZES {
        // Base waveforms - one transcendental each
        for waveform in [Waveform::Sine, Waveform::Square, Waveform::Sawtooth, Waveform::Circular] {
            let name = format!("{waveform:?}").to_lowercase();
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, &size| {
                b.iter(|| evaluate(&waveform, size))
            });
        }

        // Combinator chain - static dispatch
        let chain = sine().split(sawtooth()).multiply(circular()).cube();
        group.bench_with_input(BenchmarkId::new("split_multiply_cube", size), &size, |b, &size| {
            b.iter(|| evaluate(&chain, size))
        });

        // Same chain behind an Arc - one virtual call per sample
        let shared = sine().split(sawtooth()).multiply(circular()).cube().shared();
        group.bench_with_input(BenchmarkId::new("shared_chain", size), &size, |b, &size| {
            b.iter(|| evaluate(&*shared, size))
        });

        // Quantized square/sine split
        let crushed = granularize(square().split(sine()), 8).unwrap();
        group.bench_with_input(BenchmarkId::new("granularize_8", size), &size, |b, &size| {
            b.iter(|| evaluate(&crushed, size))
        });

        // Zappy - fractional power inside a sine
        group.bench_with_input(BenchmarkId::new("zappy_3_2", size), &size, |b, &size| {
            b.iter(|| evaluate(&ZAPPY_3_2, size))
        });
    }

    group.finish();
}

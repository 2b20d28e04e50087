//! Benchmarks for rendering a sequenced passage.

use std::hint::black_box;

use amusia::angular::{angular_normalized, select_from};
use amusia::pitch::{arpeggios, frequency, notes, NoteList};
use amusia::render::RenderConfig;
use amusia::sequencing::{chain, BoxedSequence, Sequence, SequenceExt, Session};
use amusia::voice::{circular, square, Voice};
use amusia::Result;
use criterion::{BatchSize, BenchmarkId, Criterion};

use crate::SAMPLE_RATE;

fn phrase<V>(shape: &[i32], root: i32, count: usize, k: f64, voice: V) -> BoxedSequence<Session>
where
    V: Voice + 'static,
{
    let chord = NoteList::from(shape)
        .translate(root)
        .extend(2)
        .push(root + 36);

    Box::new(move |session: &mut Session| -> Result<()> {
        for _ in 0..count {
            let i = session.advance();
            let note = *select_from(i, k + 1.0, chord.as_slice())?;
            let amplitude = angular_normalized(i, k + 4.0) * 0.3 + 0.3;
            session
                .wave
                .add_note(frequency(note), amplitude, 1.0 / 12.0, &voice)?;
        }
        Ok(())
    })
}

fn passage<V: Voice + Copy + 'static>(k: f64, voice: V) -> impl Sequence<Session> {
    chain(vec![
        phrase(arpeggios::MINOR_SEVEN, notes::A, 8, k, voice),
        phrase(arpeggios::MINOR, notes::D, 8, k, voice),
        phrase(arpeggios::MAJOR, notes::G, 8, k, voice),
        phrase(arpeggios::MAJOR, notes::C, 8, k, voice),
    ])
}

pub fn bench_song(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/song");
    group.sample_size(20);

    let config = RenderConfig::with_sample_rate(SAMPLE_RATE);

    // 32 notes of 1/12 s ≈ 2.7 s of audio per pass
    for &passes in &[1usize, 4] {
        let circle = passage(3.0, circular()).times(passes);
        group.bench_with_input(BenchmarkId::new("circular", passes), &passes, |b, _| {
            b.iter_batched(
                || Session::new(config).unwrap(),
                |mut session| {
                    circle.run(black_box(&mut session)).unwrap();
                    session
                },
                BatchSize::LargeInput,
            )
        });

        let layered = passage(7.0, square()).times(passes);
        group.bench_with_input(BenchmarkId::new("two_tracks_mixed", passes), &passes, |b, _| {
            b.iter(|| {
                let mut low = Session::new(config).unwrap();
                let mut high = Session::new(config).unwrap();
                circle.run(&mut low).unwrap();
                layered.run(&mut high).unwrap();
                low.wave.mix(&high.wave, 0.5).unwrap();
                low
            })
        });
    }

    group.finish();
}

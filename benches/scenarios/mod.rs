//! Real-world scenario benchmarks.
//!
//! These render whole sequenced passages the way a piece is composed:
//! angular selection over an arpeggio, one note per session step.

mod song;

pub use song::bench_song;

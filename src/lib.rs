//! Deterministic procedural composition.
//!
//! A piece is built from four parts:
//!
//! - [`angular`] picks notes, voices and loudness from a step counter, the
//!   same way on every run.
//! - [`pitch`] turns scale-degree offsets into frequencies and builds chords,
//!   scales and arpeggios.
//! - [`voice`] is an algebra of pure `(frequency, time) → sample` functions.
//! - [`render`] turns note events into a sample buffer and mixes buffers.
//!
//! [`sequencing`] composes rendering steps into passages and songs.
//!
//! ```
//! use amusia::pitch::{arpeggios, frequency};
//! use amusia::render::{RenderConfig, WaveformBuffer};
//! use amusia::voice::{sine, VoiceExt};
//! use amusia::angular::select_from;
//!
//! let mut wave = WaveformBuffer::new(RenderConfig::with_sample_rate(8_000))?;
//! let voice = sine().split(amusia::voice::sawtooth());
//! for step in 0..8 {
//!     let note = select_from(step, 4.0, arpeggios::MAJOR)?;
//!     wave.add_note(frequency(*note), 0.5, 0.125, &voice)?;
//! }
//! assert_eq!(wave.len(), 8_000);
//! # Ok::<(), amusia::AmusiaError>(())
//! ```

pub mod angular; // Deterministic pseudo-chaotic selection
pub mod error;
pub mod pitch; // Notes, tunings, scales and arpeggios
pub mod render; // Waveform buffer, mixing and export
pub mod sequencing; // Composing passages out of rendering steps
pub mod voice; // Waveform algebra

pub use error::{AmusiaError, Result};

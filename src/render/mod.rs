//! Sample-accurate rendering of note events into a waveform buffer.

pub mod buffer;
pub mod config;
pub mod event;
pub mod export;

pub use buffer::WaveformBuffer;
pub use config::RenderConfig;
pub use event::NoteEvent;
#[cfg(feature = "wav")]
pub use export::WavSink;
pub use export::{to_pcm16, PcmExport, SampleSink};

use crate::voice::{Voice, Waveform};

/// One note on the timeline: what to play, how loud and for how long.
///
/// Events are transient; they exist to be handed to
/// [`WaveformBuffer::render`](super::WaveformBuffer::render).
#[derive(Debug, Clone, Copy)]
pub struct NoteEvent<V> {
    /// Hz, non-negative
    pub frequency: f64,
    /// Linear gain in [0, 1]
    pub amplitude: f64,
    /// Seconds, positive
    pub duration: f64,
    pub voice: V,
}

impl<V: Voice> NoteEvent<V> {
    pub fn new(frequency: f64, amplitude: f64, duration: f64, voice: V) -> Self {
        Self {
            frequency,
            amplitude,
            duration,
            voice,
        }
    }
}

impl NoteEvent<Waveform> {
    /// Silence that still occupies `duration` seconds of the timeline.
    pub fn rest(duration: f64) -> Self {
        Self::new(0.0, 0.0, duration, Waveform::Silent)
    }
}

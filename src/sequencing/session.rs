use crate::error::Result;
use crate::render::{RenderConfig, WaveformBuffer};

/// The usual context a composition runs against: a buffer to render into and
/// a step counter that note-emitting sequences advance as they go.
///
/// The step counter is the `i` fed to the angular generator, so two sessions
/// that run the same sequences produce the same samples.
#[derive(Debug, Clone)]
pub struct Session {
    pub wave: WaveformBuffer,
    pub step: i64,
}

impl Session {
    pub fn new(config: RenderConfig) -> Result<Self> {
        Ok(Self {
            wave: WaveformBuffer::new(config)?,
            step: 0,
        })
    }

    /// Returns the current step and moves the counter forward.
    pub fn advance(&mut self) -> i64 {
        let step = self.step;
        self.step += 1;
        step
    }

    pub fn into_wave(self) -> WaveformBuffer {
        self.wave
    }
}

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{AmusiaError, Result};

/// Fixed properties of a waveform buffer, chosen once at construction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Samples per second (e.g., 48000)
    pub sample_rate: u32,
    /// Interleaved channel count; only mono is supported
    pub channels: u16,
}

impl RenderConfig {
    pub const DEFAULT_SAMPLE_RATE: u32 = 48_000;

    pub fn with_sample_rate(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(AmusiaError::InvalidSampleRate(self.sample_rate));
        }
        if self.channels != 1 {
            return Err(AmusiaError::UnsupportedChannels(self.channels));
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sample_rate: Self::DEFAULT_SAMPLE_RATE,
            channels: 1,
        }
    }
}

//! Error types for amusia

use thiserror::Error;

/// Every way a composition or render call can be misconfigured.
///
/// Apart from `Wav`, every variant points at a bad value handed in by the
/// caller; the core itself does no I/O.
#[derive(Debug, Error)]
pub enum AmusiaError {
    #[error("Sample rate must be positive, got {0}")]
    InvalidSampleRate(u32),
    #[error("Only mono rendering is supported, got {0} channels")]
    UnsupportedChannels(u16),
    #[error("Duration must be finite and positive, got {0} seconds")]
    InvalidDuration(f64),
    #[error("Amplitude must lie in [0, 1], got {0}")]
    InvalidAmplitude(f64),
    #[error("Frequency must be finite and non-negative, got {0} Hz")]
    InvalidFrequency(f64),
    #[error("Mix weight must lie in [0, 1], got {0}")]
    InvalidWeight(f64),
    #[error("Switching interval must be finite and positive, got {0} seconds")]
    InvalidInterval(f64),
    #[error("Granularize needs at least one level")]
    ZeroLevels,
    #[error("Cannot select from an empty range")]
    EmptySelection,
    #[error("Note list is empty")]
    EmptyNoteList,
    #[error("Sample rate mismatch: expected {expected} Hz, got {actual} Hz")]
    SampleRateMismatch { expected: u32, actual: u32 },
    #[cfg(feature = "wav")]
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}

pub type Result<T> = std::result::Result<T, AmusiaError>;

//! Composing notes into passages, verses and songs.

/// The `Sequence` trait with `chain` and `repeat`.
pub mod sequence;
/// Buffer plus step counter, the usual sequence context.
pub mod session;

pub use sequence::{chain, repeat, BoxedSequence, Chain, Repeat, Sequence, SequenceExt};
pub use session::Session;

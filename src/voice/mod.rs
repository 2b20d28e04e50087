//! The voice algebra.
//!
//! A voice is a pure function from `(frequency, time)` to a sample. Base
//! waveforms, combinators and timbres all implement [`Voice`], and every
//! combinator returns another [`Voice`], so anything can be layered on
//! anything. [`VoiceExt`] adds the fluent form of each combinator.

/// Split, mix, multiply, granularize and exponentiate.
pub mod combinators;
/// Fluent combinators (`.split()`, `.cube()`, etc.).
pub mod extensions;
/// The `Voice` trait and the `xform` lifting helper.
pub mod node;
/// Zappy, organ, clarinet and named presets.
pub mod timbres;
/// Base waveforms.
pub mod waveform;

pub use combinators::{
    cube, exponentiate, granularize, mix, multiply, signed_pow, split, Exponentiate,
    Granularize, Mix, Multiply, Split,
};
pub use extensions::VoiceExt;
pub use node::{phase, voice_fn, xform, SharedVoice, Voice, VoiceFn, XForm};
pub use timbres::{
    clarinet, organ, sine_cubed, sine_split_sawtooth, sine_x_sawtooth, square_split_sawtooth,
    zappy, Clarinet, Organ, Zappy, ZAPPY_1_2, ZAPPY_3_2,
};
pub use waveform::{
    circular, cosine, mushy, rock_organ, sawtooth, silent, sine, square, triangle, Waveform,
};

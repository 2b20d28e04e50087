use std::sync::Arc;

use super::combinators::{
    exponentiate, granularize, mix, multiply, split, Exponentiate, Granularize, Mix, Multiply,
    Split,
};
use super::node::{SharedVoice, Voice};
use crate::error::Result;

/// Fluent combinators (`.split()`, `.multiply()`, etc.) for every voice.
pub trait VoiceExt: Voice + Sized {
    fn split<B: Voice>(self, negative: B) -> Split<Self, B> {
        split(self, negative)
    }

    fn mix<B: Voice>(self, other: B, interval: f64) -> Result<Mix<Self, B>> {
        mix(self, other, interval)
    }

    fn multiply<B: Voice>(self, other: B) -> Multiply<Self, B> {
        multiply(self, other)
    }

    fn granularize(self, levels: u32) -> Result<Granularize<Self>> {
        granularize(self, levels)
    }

    fn exponentiate(self, exponent: f64) -> Exponentiate<Self> {
        exponentiate(self, exponent)
    }

    fn cube(self) -> Exponentiate<Self> {
        exponentiate(self, 3.0)
    }

    /// Erase the concrete type so the voice can be stored and shared.
    fn shared(self) -> SharedVoice
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<T: Voice> VoiceExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voice::{sawtooth, sine, square, ZAPPY_1_2};

    #[test]
    fn fluent_matches_free_functions() {
        let fluent = sine().split(sawtooth()).multiply(square()).cube();
        let free = exponentiate(multiply(split(sine(), sawtooth()), square()), 3.0);
        for i in 0..300 {
            let t = i as f64 / 44_100.0;
            assert_eq!(fluent.sample(261.63, t), free.sample(261.63, t));
        }
    }

    #[test]
    fn shared_voices_compose() {
        let zap = ZAPPY_1_2.shared();
        let layered = zap.clone().multiply(zap.clone()).granularize(16).unwrap();
        let expected = ZAPPY_1_2.sample(98.0, 0.5);
        let sample = layered.sample(98.0, 0.5);
        assert!((sample - (expected * expected)).abs() <= 2.0 / 16.0 + 1e-12);
    }

    #[test]
    fn fallible_steps_propagate() {
        assert!(sine().mix(square(), 0.0).is_err());
        assert!(sine().granularize(0).is_err());
        assert!(sine().mix(square(), 0.25).is_ok());
    }
}

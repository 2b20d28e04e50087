use super::node::Voice;
use super::waveform::Waveform;
use crate::error::{AmusiaError, Result};

/*
Voice Combinators
=================

Every combinator takes voices by value and returns a new voice, so the algebra
is closed: anything built here can be fed into another combinator.

  Split        a where a reference sine is positive, else b
               → hard phase-gated switch between two timbres

  Mix          b during the first half of every `interval` seconds, else a
               → time-gated switch (it alternates, it does not blend)

  Multiply     a × b
               → amplitude / ring modulation

  Granularize  output snapped down onto `levels` steps across [-1, 1]
               → stepped, bit-crushed timbres

  Exponentiate sign(v) × |v|^e
               → e > 1 thins the wave toward its peaks, e < 1 fattens it

Exponent Policy
---------------

`powf` of a negative base and a fractional exponent is NaN. Every
exponentiating voice in this crate (Exponentiate, Cube, the Circular waveform
and the Zappy timbre) instead mirrors the sign:

    signed_pow(v, e) = sign(v) × |v|^e

For odd integer exponents this is the same as plain `powf`. For even integer
exponents it differs (the result keeps the sign of `v`), which keeps the
output a symmetric wave rather than a rectified one.

Example usage:
  let buzz = sine().split(sawtooth());
  let tremolo = sine().multiply(voice_fn(|_, t| (t * 6.0).sin()));
  let crushed = square().split(sine()).granularize(8)?;
*/

/// Sign-mirrored power: `sign(value) × |value|^exponent`.
#[inline]
pub fn signed_pow(value: f64, exponent: f64) -> f64 {
    let magnitude = value.abs().powf(exponent);
    if value.is_sign_negative() {
        -magnitude
    } else {
        magnitude
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Split<A, B> {
    pub positive: A,
    pub negative: B,
}

impl<A: Voice, B: Voice> Voice for Split<A, B> {
    #[inline]
    fn sample(&self, frequency: f64, time: f64) -> f64 {
        if Waveform::Sine.sample(frequency, time) > 0.0 {
            self.positive.sample(frequency, time)
        } else {
            self.negative.sample(frequency, time)
        }
    }
}

/// `a` while a sine at the same pitch is positive, `b` otherwise.
pub fn split<A: Voice, B: Voice>(a: A, b: B) -> Split<A, B> {
    Split {
        positive: a,
        negative: b,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Mix<A, B> {
    pub a: A,
    pub b: B,
    interval: f64,
}

impl<A, B> Mix<A, B> {
    pub fn interval(&self) -> f64 {
        self.interval
    }
}

impl<A: Voice, B: Voice> Voice for Mix<A, B> {
    #[inline]
    fn sample(&self, frequency: f64, time: f64) -> f64 {
        if time % self.interval > self.interval * 0.5 {
            self.a.sample(frequency, time)
        } else {
            self.b.sample(frequency, time)
        }
    }
}

/// Alternate between `b` (first half of each interval) and `a` (second half).
pub fn mix<A: Voice, B: Voice>(a: A, b: B, interval: f64) -> Result<Mix<A, B>> {
    if !interval.is_finite() || interval <= 0.0 {
        return Err(AmusiaError::InvalidInterval(interval));
    }
    Ok(Mix { a, b, interval })
}

#[derive(Debug, Clone, Copy)]
pub struct Multiply<A, B> {
    pub a: A,
    pub b: B,
}

impl<A: Voice, B: Voice> Voice for Multiply<A, B> {
    #[inline]
    fn sample(&self, frequency: f64, time: f64) -> f64 {
        self.a.sample(frequency, time) * self.b.sample(frequency, time)
    }
}

pub fn multiply<A: Voice, B: Voice>(a: A, b: B) -> Multiply<A, B> {
    Multiply { a, b }
}

#[derive(Debug, Clone, Copy)]
pub struct Granularize<V> {
    pub voice: V,
    step: f64,
}

impl<V> Granularize<V> {
    /// Height of one quantization step.
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl<V: Voice> Voice for Granularize<V> {
    #[inline]
    fn sample(&self, frequency: f64, time: f64) -> f64 {
        let shifted = self.voice.sample(frequency, time) + 1.0;
        (shifted / self.step).floor() * self.step - 1.0
    }
}

/// Quantize `voice` onto `levels` steps across `[-1, 1]`.
pub fn granularize<V: Voice>(voice: V, levels: u32) -> Result<Granularize<V>> {
    if levels == 0 {
        return Err(AmusiaError::ZeroLevels);
    }
    Ok(Granularize {
        voice,
        step: 2.0 / levels as f64,
    })
}

#[derive(Debug, Clone, Copy)]
pub struct Exponentiate<V> {
    pub voice: V,
    pub exponent: f64,
}

impl<V: Voice> Voice for Exponentiate<V> {
    #[inline]
    fn sample(&self, frequency: f64, time: f64) -> f64 {
        signed_pow(self.voice.sample(frequency, time), self.exponent)
    }
}

pub fn exponentiate<V: Voice>(voice: V, exponent: f64) -> Exponentiate<V> {
    Exponentiate { voice, exponent }
}

pub fn cube<V: Voice>(voice: V) -> Exponentiate<V> {
    exponentiate(voice, 3.0)
}

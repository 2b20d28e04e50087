//! Parameterised timbres built from sine partials and self-modulation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::combinators::{cube, multiply, signed_pow, split, Exponentiate, Multiply, Split};
use super::node::{phase, Voice};
use super::waveform::Waveform;

/// `sin(x + sin(x^exponent))`: a chaotic FM-like buzz.
///
/// Rational exponents give the most musical results; the common ones are
/// provided as [`ZAPPY_1_2`] and [`ZAPPY_3_2`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zappy {
    pub exponent: f64,
}

impl Zappy {
    pub const fn new(exponent: f64) -> Self {
        Self { exponent }
    }
}

impl Voice for Zappy {
    #[inline]
    fn sample(&self, frequency: f64, time: f64) -> f64 {
        let x = phase(frequency, time);
        (x + signed_pow(x, self.exponent).sin()).sin()
    }
}

pub fn zappy(exponent: f64) -> Zappy {
    Zappy::new(exponent)
}

pub const ZAPPY_1_2: Zappy = Zappy::new(1.0 / 2.0);
pub const ZAPPY_3_2: Zappy = Zappy::new(3.0 / 2.0);

/// `((divisor − 1)·sin x + sin(multiplier·x)) / divisor`: a fundamental plus
/// one partial at `1 / divisor` of the level.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Organ {
    pub multiplier: f64,
    pub divisor: f64,
}

impl Voice for Organ {
    #[inline]
    fn sample(&self, frequency: f64, time: f64) -> f64 {
        let x = phase(frequency, time);
        ((self.divisor - 1.0) * x.sin() + (x * self.multiplier).sin()) / self.divisor
    }
}

pub fn organ(multiplier: f64, divisor: f64) -> Organ {
    Organ {
        multiplier,
        divisor,
    }
}

/// `sin(x + sin(multiplier·x))`: a sine phase-modulated by its own overtone.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clarinet {
    pub multiplier: f64,
}

impl Voice for Clarinet {
    #[inline]
    fn sample(&self, frequency: f64, time: f64) -> f64 {
        let x = phase(frequency, time);
        (x + (self.multiplier * x).sin()).sin()
    }
}

pub fn clarinet(multiplier: f64) -> Clarinet {
    Clarinet { multiplier }
}

pub fn sine_split_sawtooth() -> Split<Waveform, Waveform> {
    split(Waveform::Sine, Waveform::Sawtooth)
}

pub fn square_split_sawtooth() -> Split<Waveform, Waveform> {
    split(Waveform::Square, Waveform::Sawtooth)
}

pub fn sine_x_sawtooth() -> Multiply<Waveform, Waveform> {
    multiply(Waveform::Sine, Waveform::Sawtooth)
}

pub fn sine_cubed() -> Exponentiate<Waveform> {
    cube(Waveform::Sine)
}

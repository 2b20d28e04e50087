#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::combinators::signed_pow;
use super::node::{phase, Voice};

/*
Base Waveforms
==============

Every base waveform is a shape `f(x)` graphed over the phase angle
x = frequency × time × τ. One period of the wave is one turn of x.

  Sine       sin(x)                    pure tone, no overtones
  Cosine     cos(x)                    sine shifted a quarter turn
  Square     sign of sin(x)            hollow, odd harmonics only
  Sawtooth   (x mod 2) − 1             bright buzz; its period is 2 in x, not
                                       τ, so it sounds π times higher than the
                                       other shapes at the same frequency
  Triangle   tan(sin(x))               soft, rounded; peaks at tan(1) ≈ 1.557
  Mushy      sin(x + cos(x))           self-modulated sine, slightly reedy
  Circular   ±sqrt(|sin(x)|)           fattened sine, sign follows sin(x)
  RockOrgan  (sin 2x + sin(2x/3)) / 2  two partials, a twelfth apart
  Silent     0                         used for rests

Triangle is the one base waveform that overshoots [-1, 1]. Clamp downstream
if the codec needs a hard range.

Example usage:
  let voice = Waveform::Square;
  let sample = voice.sample(440.0, 0.001);
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Waveform {
    Sine,
    Cosine,
    Square,
    Sawtooth,
    Triangle,
    Mushy,
    Circular,
    RockOrgan,
    Silent,
}

impl Waveform {
    pub const ALL: [Waveform; 9] = [
        Waveform::Sine,
        Waveform::Cosine,
        Waveform::Square,
        Waveform::Sawtooth,
        Waveform::Triangle,
        Waveform::Mushy,
        Waveform::Circular,
        Waveform::RockOrgan,
        Waveform::Silent,
    ];

    /// The wave shape at phase angle `x`.
    #[inline]
    pub fn shape(self, x: f64) -> f64 {
        match self {
            Waveform::Sine => x.sin(),
            Waveform::Cosine => x.cos(),
            Waveform::Square => {
                if x.sin() > 0.0 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Sawtooth => x % 2.0 - 1.0,
            Waveform::Triangle => x.sin().tan(),
            Waveform::Mushy => (x + x.cos()).sin(),
            Waveform::Circular => signed_pow(x.sin(), 0.5),
            Waveform::RockOrgan => ((2.0 * x).sin() + (2.0 * x / 3.0).sin()) * 0.5,
            Waveform::Silent => 0.0,
        }
    }
}

impl Voice for Waveform {
    #[inline]
    fn sample(&self, frequency: f64, time: f64) -> f64 {
        self.shape(phase(frequency, time))
    }
}

pub fn sine() -> Waveform {
    Waveform::Sine
}

pub fn cosine() -> Waveform {
    Waveform::Cosine
}

pub fn square() -> Waveform {
    Waveform::Square
}

pub fn sawtooth() -> Waveform {
    Waveform::Sawtooth
}

pub fn triangle() -> Waveform {
    Waveform::Triangle
}

pub fn mushy() -> Waveform {
    Waveform::Mushy
}

pub fn circular() -> Waveform {
    Waveform::Circular
}

pub fn rock_organ() -> Waveform {
    Waveform::RockOrgan
}

pub fn silent() -> Waveform {
    Waveform::Silent
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, TAU};

    #[test]
    fn valid_sine() {
        let frequency = 440.0;
        let time = 12.0 / 48_000.0;
        let expected = (TAU * frequency * time).sin();
        let actual = sine().sample(frequency, time);
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn square_follows_sign_of_sine() {
        assert_eq!(square().shape(FRAC_PI_2), 1.0);
        assert_eq!(square().shape(3.0 * FRAC_PI_2), -1.0);
        // sin(0) is not positive
        assert_eq!(square().shape(0.0), -1.0);
    }

    #[test]
    fn sawtooth_ramps_over_two() {
        assert_eq!(sawtooth().shape(0.0), -1.0);
        assert_eq!(sawtooth().shape(1.0), 0.0);
        assert_eq!(sawtooth().shape(2.5), -0.5);
    }

    #[test]
    fn circular_mirrors_sign() {
        let up = circular().shape(FRAC_PI_2);
        let down = circular().shape(3.0 * FRAC_PI_2);
        assert!((up - 1.0).abs() < 1e-12);
        assert!((down + 1.0).abs() < 1e-12);

        let x = 0.3;
        assert!((circular().shape(x) - x.sin().sqrt()).abs() < 1e-12);
        assert!((circular().shape(-x) + x.sin().sqrt()).abs() < 1e-12);
    }

    #[test]
    fn silent_is_silent() {
        for i in 0..100 {
            assert_eq!(silent().sample(440.0, i as f64 * 0.01), 0.0);
        }
    }

    #[test]
    fn all_waveforms_are_finite_and_mostly_bounded() {
        for waveform in Waveform::ALL {
            for i in 0..2000 {
                let sample = waveform.sample(261.63, i as f64 / 48_000.0);
                assert!(sample.is_finite(), "{waveform:?} produced {sample}");
                // tan(sin(x)) peaks at tan(1)
                assert!(sample.abs() <= 1.0_f64.tan() + 1e-12, "{waveform:?}: {sample}");
            }
        }
    }
}

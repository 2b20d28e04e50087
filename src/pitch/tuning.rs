#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Equal Temperament
=================

Equal temperament splits the octave into `notes_per_octave` equal logarithmic
steps. Step `n` sits at

    ratio(n) = 2 ^ (floor(n + adjuster) / notes_per_octave)

The floor means fractional note indices snap to a step; `adjuster` shifts
where that snap happens. For integer note indices the adjuster is invisible.
The standard tuning uses 12 steps and an adjuster of 0.3764, a calibration
constant carried over from the tuning tables this library has always used.

`ratio` is dimensionless. A `Tuning` also carries a reference pitch, and
`frequency` anchors the ratio there:

    frequency(n) = reference_frequency × 2 ^ ((step(n) − step(reference_note)) / notes_per_octave)

With the standard reference (note 9 = A = 440 Hz) note 0 is middle C.

Example usage:
  let a = Tuning::STANDARD.frequency(notes::A);        // 440.0
  let c5 = Tuning::STANDARD.frequency(octave(notes::C, 1)); // ≈ 523.25
*/

/// Dimensionless equal-temperament ratio for note `n`.
#[inline]
pub fn equal_temperament(n: f64, notes_per_octave: f64, adjuster: f64) -> f64 {
    2.0_f64.powf((n + adjuster).floor() / notes_per_octave)
}

/// Frequency in Hz of `note` in the standard tuning.
///
/// This is anchored so that note 9 is 440 Hz. For the unanchored value
/// `2^(floor(n + 0.3764) / 12)` use [`Tuning::ratio`] on [`Tuning::STANDARD`].
#[inline]
pub fn frequency(note: i32) -> f64 {
    Tuning::STANDARD.frequency(note)
}

/// Shift `note` by whole octaves of twelve notes.
#[inline]
pub fn octave(note: i32, octave_augment: i32) -> i32 {
    octave_in(note, octave_augment, 12)
}

/// Shift `note` by whole octaves of `notes_per_octave` notes.
#[inline]
pub fn octave_in(note: i32, octave_augment: i32, notes_per_octave: i32) -> i32 {
    note + octave_augment * notes_per_octave
}

/// A tuning system: step layout plus the pitch it is anchored to.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub notes_per_octave: f64,
    pub adjuster: f64,
    /// Note index that sounds at `reference_frequency`.
    pub reference_note: i32,
    pub reference_frequency: f64,
}

impl Tuning {
    /// Twelve-tone equal temperament with A = 440 Hz.
    pub const STANDARD: Tuning = Tuning {
        notes_per_octave: 12.0,
        adjuster: 0.3764,
        reference_note: 9,
        reference_frequency: 440.0,
    };

    /// Raw ratio for note `n`, before anchoring to the reference pitch.
    #[inline]
    pub fn ratio(&self, n: f64) -> f64 {
        equal_temperament(n, self.notes_per_octave, self.adjuster)
    }

    /// Frequency in Hz for `note`.
    pub fn frequency(&self, note: i32) -> f64 {
        let step = (note as f64 + self.adjuster).floor();
        let reference = (self.reference_note as f64 + self.adjuster).floor();
        self.reference_frequency * 2.0_f64.powf((step - reference) / self.notes_per_octave)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::STANDARD
    }
}

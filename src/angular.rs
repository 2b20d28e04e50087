//! Deterministic pseudo-chaotic selection.

/*
Angular Generator
=================

The generator walks the angle `i² · k` around the unit circle. For an
irrational-ish `k` the points land all over the circle with no obvious period,
yet the same `(i, k)` always lands on the same point. That makes it a good
stand-in for randomness when a piece must render identically every time.

The Math
--------

    a       = ((i mod τ) × i) mod τ
    angular = (a × k) mod τ

Multiplying `i × i` directly loses every bit of fractional precision once `i`
grows past a few million, so each product is reduced modulo τ before the next
multiplication. Angles are modular anyway, so the reduction changes nothing
mathematically.

Negative inputs use the floored remainder, so results always land in [0, τ).

Derived Helpers
---------------

  select_index(i, k, n)   floor(n × normalized)   → 0..n
  select_from(i, k, xs)   xs[select_index(..)]
  odds(i, k, p)           normalized < p

Example usage:
  // pick a chord tone for step i, then a loudness in [0.3, 0.6)
  let note = select_from(i, 4.0, chord.as_slice())?;
  let amplitude = angular_normalized(i, 7.0) * 0.3 + 0.3;
*/

use std::f64::consts::TAU;

use crate::error::{AmusiaError, Result};

/// Reduce `x` into `[0, τ)`.
#[inline]
fn wrap_turn(x: f64) -> f64 {
    let r = x % TAU;
    if r >= 0.0 {
        return r;
    }
    let r = r + TAU;
    // a tiny negative remainder can round up to exactly τ
    if r >= TAU {
        0.0
    } else {
        r
    }
}

/// Angle of step `i` for chaos parameter `k`, in `[0, τ)`.
#[inline]
pub fn angular(i: i64, k: f64) -> f64 {
    let i = i as f64;
    let a = wrap_turn((i % TAU) * i);
    wrap_turn(a * k)
}

/// [`angular`] mapped onto `[0, 1)`.
#[inline]
pub fn angular_normalized(i: i64, k: f64) -> f64 {
    angular(i, k) / TAU
}

/// Deterministic pick in `0..n`.
pub fn select_index(i: i64, k: f64, n: usize) -> Result<usize> {
    if n == 0 {
        return Err(AmusiaError::EmptySelection);
    }
    let index = (n as f64 * angular_normalized(i, k)).floor() as usize;
    // normalized < 1, but n × normalized can still round up to n for huge n
    Ok(index.min(n - 1))
}

/// Deterministic pick from a slice.
pub fn select_from<T>(i: i64, k: f64, values: &[T]) -> Result<&T> {
    let index = select_index(i, k, values.len())?;
    Ok(&values[index])
}

/// True when step `i` falls below `threshold` on the normalized circle.
#[inline]
pub fn odds(i: i64, k: f64, threshold: f64) -> bool {
    angular_normalized(i, k) < threshold
}

/// Even odds: [`odds`] with a threshold of one half.
#[inline]
pub fn coin(i: i64, k: f64) -> bool {
    odds(i, k, 0.5)
}

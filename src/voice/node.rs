use std::f64::consts::TAU;
use std::sync::Arc;

/// Core trait for waveform generators
///
/// A voice graphs a wave at `frequency` as `time` (absolute seconds) moves
/// forward, returning a sample in roughly `[-1, 1]`. Some combinators can
/// overshoot that range; the renderer does not clamp.
///
/// Voices are pure: the same `(frequency, time)` always gives the same
/// sample. That lets any voice be shared, re-evaluated out of order, or
/// rendered from several threads at once.
pub trait Voice: Send + Sync {
    fn sample(&self, frequency: f64, time: f64) -> f64;
}

/// Phase angle `frequency × time × τ` that unary wave shapes are graphed over.
#[inline]
pub fn phase(frequency: f64, time: f64) -> f64 {
    frequency * time * TAU
}

/// A unary wave shape `f(x)` lifted into a voice through [`phase`].
#[derive(Clone, Copy)]
pub struct XForm<F> {
    shape: F,
}

/// Lift a shape `f(x)` into a voice evaluated at `x = frequency × time × τ`.
///
/// ```
/// use amusia::voice::{xform, Voice};
///
/// let half_rectified = xform(|x: f64| x.sin().max(0.0));
/// assert_eq!(half_rectified.sample(440.0, 0.0), 0.0);
/// ```
pub fn xform<F>(shape: F) -> XForm<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    XForm { shape }
}

impl<F> Voice for XForm<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    #[inline]
    fn sample(&self, frequency: f64, time: f64) -> f64 {
        (self.shape)(phase(frequency, time))
    }
}

/// A closure over `(frequency, time)` used directly as a voice.
#[derive(Clone, Copy)]
pub struct VoiceFn<F> {
    f: F,
}

pub fn voice_fn<F>(f: F) -> VoiceFn<F>
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    VoiceFn { f }
}

impl<F> Voice for VoiceFn<F>
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    #[inline]
    fn sample(&self, frequency: f64, time: f64) -> f64 {
        (self.f)(frequency, time)
    }
}

impl<V: Voice + ?Sized> Voice for &V {
    #[inline]
    fn sample(&self, frequency: f64, time: f64) -> f64 {
        (**self).sample(frequency, time)
    }
}

/// Allow boxed voices to be used as voices (for dynamic dispatch)
impl<V: Voice + ?Sized> Voice for Box<V> {
    #[inline]
    fn sample(&self, frequency: f64, time: f64) -> f64 {
        (**self).sample(frequency, time)
    }
}

impl<V: Voice + ?Sized> Voice for Arc<V> {
    #[inline]
    fn sample(&self, frequency: f64, time: f64) -> f64 {
        (**self).sample(frequency, time)
    }
}

/// A reference-counted voice that many combinators can hold at once.
pub type SharedVoice = Arc<dyn Voice>;

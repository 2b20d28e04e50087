use tracing::{debug, trace};

use super::config::RenderConfig;
use super::event::NoteEvent;
use super::export::{PcmExport, SampleSink};
use crate::error::{AmusiaError, Result};
use crate::voice::{Voice, Waveform};

/*
Waveform Buffer
===============

The buffer is a growing mono sample sequence plus a duration cursor: the
number of seconds rendered so far.

Rendering a Note
----------------

    count = round(sample_rate × duration)
    for s in 0..count:
        push( voice(frequency, cursor + s / sample_rate) × amplitude )
    cursor += duration

The time handed to the voice is ABSOLUTE (seconds since the buffer was
created), not time since the note started. A sine that keeps running across
note boundaries therefore keeps its phase, and consecutive notes join without
a click.

Rests go through the same path with the silent voice and zero amplitude, so
they take up exactly the sample slots a note of the same length would.

Drift
-----

Each note rounds its own sample count, so `len` can differ from
`round(sample_rate × cursor)` by the accumulated per-note rounding (at most
half a sample per note). The cursor itself is never rounded; voice phase
follows real elapsed time.

Mixing
------

    mix(other, w):  truncate both to the shorter length, then
                    self[s] = (1 − w) × self[s] + w × other[s]

The sum is evaluated as `self + w × (other − self)`, which is the same blend
and leaves a sample untouched when both sides agree.

    mix_all([b0, b1, b2, ...]):
        start from the shortest buffer, then mix the others in, in input
        order, with weights 1/2, 1/3, 1/4, ...

Those weights keep a running mean: after k inputs every one of them
contributes 1/k. Over the shared length the result is therefore the
equal-weight average of all inputs, up to floating-point rounding, which
does depend on input order.
*/

/// Most samples a single buffer can ever address.
const MAX_SAMPLES: usize = isize::MAX as usize / std::mem::size_of::<f64>();

#[derive(Debug, Clone, PartialEq)]
pub struct WaveformBuffer {
    config: RenderConfig,
    samples: Vec<f64>,
    duration_seconds: f64,
}

impl WaveformBuffer {
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            sample_rate = config.sample_rate,
            channels = config.channels,
            "Waveform buffer created"
        );
        Ok(Self {
            config,
            samples: Vec::new(),
            duration_seconds: 0.0,
        })
    }

    /// Render `voice` at `frequency` for `duration` seconds, scaled by
    /// `amplitude`, starting at the current cursor.
    ///
    /// A duration too long to allocate is an `InvalidDuration` error, and
    /// the buffer is left as it was.
    pub fn add_note<V: Voice + ?Sized>(
        &mut self,
        frequency: f64,
        amplitude: f64,
        duration: f64,
        voice: &V,
    ) -> Result<()> {
        if !frequency.is_finite() || frequency < 0.0 {
            return Err(AmusiaError::InvalidFrequency(frequency));
        }
        if !(0.0..=1.0).contains(&amplitude) {
            return Err(AmusiaError::InvalidAmplitude(amplitude));
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(AmusiaError::InvalidDuration(duration));
        }

        let rate = self.config.sample_rate as f64;
        let exact = (rate * duration).round();
        if exact > MAX_SAMPLES as f64 {
            return Err(AmusiaError::InvalidDuration(duration));
        }
        let count = exact as usize;
        let start = self.duration_seconds;

        self.samples
            .try_reserve(count)
            .map_err(|_| AmusiaError::InvalidDuration(duration))?;
        for s in 0..count {
            let time = start + s as f64 / rate;
            self.samples.push(voice.sample(frequency, time) * amplitude);
        }
        self.duration_seconds += duration;

        trace!(frequency, amplitude, duration, samples = count, "note rendered");
        Ok(())
    }

    /// Silence for `duration` seconds.
    pub fn add_rest(&mut self, duration: f64) -> Result<()> {
        self.add_note(0.0, 0.0, duration, &Waveform::Silent)
    }

    pub fn render<V: Voice>(&mut self, event: &NoteEvent<V>) -> Result<()> {
        self.add_note(event.frequency, event.amplitude, event.duration, &event.voice)
    }

    pub fn render_all<'a, V, I>(&mut self, events: I) -> Result<()>
    where
        V: Voice + 'a,
        I: IntoIterator<Item = &'a NoteEvent<V>>,
    {
        for event in events {
            self.render(event)?;
        }
        Ok(())
    }

    /// Blend `other` into this buffer with `weight` (0 keeps self, 1 takes
    /// other), truncating to the shorter of the two.
    pub fn mix(&mut self, other: &WaveformBuffer, weight: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&weight) {
            return Err(AmusiaError::InvalidWeight(weight));
        }
        self.check_rate(other)?;

        let len = self.samples.len().min(other.samples.len());
        self.samples.truncate(len);
        for (a, &b) in self.samples.iter_mut().zip(&other.samples) {
            *a += weight * (b - *a);
        }
        self.duration_seconds = self.duration_seconds.min(other.duration_seconds);

        debug!(weight, samples = len, "Buffers mixed");
        Ok(())
    }

    /// Mix any number of buffers down to one (see module notes for the
    /// weighting). An empty input gives an empty default buffer.
    pub fn mix_all(buffers: &[&WaveformBuffer]) -> Result<WaveformBuffer> {
        let Some(shortest) = buffers
            .iter()
            .enumerate()
            .min_by_key(|(_, buffer)| buffer.len())
            .map(|(index, _)| index)
        else {
            return WaveformBuffer::new(RenderConfig::default());
        };

        let mut result = buffers[shortest].clone();
        let mut divisor = 2.0;
        for (index, buffer) in buffers.iter().enumerate() {
            if index == shortest {
                continue;
            }
            result.mix(buffer, 1.0 / divisor)?;
            divisor += 1.0;
        }

        debug!(inputs = buffers.len(), samples = result.len(), "Buffers mixed down");
        Ok(result)
    }

    /// Concatenate `other` after this buffer.
    ///
    /// `other` was rendered with its own clock starting at zero, so only
    /// voices whose phase doesn't depend on absolute time join seamlessly.
    pub fn append(&mut self, other: &WaveformBuffer) -> Result<()> {
        self.check_rate(other)?;
        self.samples.extend_from_slice(&other.samples);
        self.duration_seconds += other.duration_seconds;
        debug!(appended = other.len(), total = self.len(), "Buffer appended");
        Ok(())
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.duration_seconds = 0.0;
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Seconds rendered so far (the duration cursor).
    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    pub fn sample_rate(&self) -> u32 {
        self.config.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.config.channels
    }

    pub fn config(&self) -> RenderConfig {
        self.config
    }

    /// Copy of the samples plus format, ready for a codec.
    pub fn export(&self) -> PcmExport {
        PcmExport {
            samples: self.samples.clone(),
            sample_rate: self.config.sample_rate,
            channels: self.config.channels,
        }
    }

    pub fn into_export(self) -> PcmExport {
        PcmExport {
            samples: self.samples,
            sample_rate: self.config.sample_rate,
            channels: self.config.channels,
        }
    }

    /// Hand the rendered samples to a codec.
    pub fn write_to<S: SampleSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        sink.write_pcm(&self.samples, self.config.sample_rate, self.config.channels)
    }

    fn check_rate(&self, other: &WaveformBuffer) -> Result<()> {
        if self.config.sample_rate != other.config.sample_rate {
            return Err(AmusiaError::SampleRateMismatch {
                expected: self.config.sample_rate,
                actual: other.config.sample_rate,
            });
        }
        Ok(())
    }
}

// Purpose - hand rendered samples to codecs without the core knowing about files

#[cfg(feature = "wav")]
use std::fs::File;
#[cfg(feature = "wav")]
use std::io::{BufWriter, Seek, Write};
#[cfg(feature = "wav")]
use std::path::Path;

#[cfg(feature = "wav")]
use tracing::info;

use crate::error::Result;

/// Rendered samples plus the format needed to encode them.
#[derive(Debug, Clone, PartialEq)]
pub struct PcmExport {
    /// Mono samples, nominally in [-1, 1]
    pub samples: Vec<f64>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl PcmExport {
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Anything that can take a finished buffer: a file encoder, a network
/// stream, a test capture.
pub trait SampleSink {
    fn write_pcm(&mut self, samples: &[f64], sample_rate: u32, channels: u16) -> Result<()>;
}

/// Collects every write in memory.
impl SampleSink for Vec<PcmExport> {
    fn write_pcm(&mut self, samples: &[f64], sample_rate: u32, channels: u16) -> Result<()> {
        self.push(PcmExport {
            samples: samples.to_vec(),
            sample_rate,
            channels,
        });
        Ok(())
    }
}

/// Float sample to signed 16-bit PCM, clamped to the representable range.
#[inline]
pub fn to_pcm16(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * i16::MAX as f64).round() as i16
}

/// 16-bit PCM WAV encoder.
///
/// Each `write_pcm` call writes one complete WAV stream (header, data and
/// finalized sizes) to the underlying writer.
#[cfg(feature = "wav")]
#[derive(Debug)]
pub struct WavSink<W> {
    writer: W,
}

#[cfg(feature = "wav")]
impl WavSink<BufWriter<File>> {
    /// Create (or truncate) a WAV file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref()).map_err(hound::Error::from)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

#[cfg(feature = "wav")]
impl<W: Write + Seek> WavSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(feature = "wav")]
impl<W: Write + Seek> SampleSink for WavSink<W> {
    fn write_pcm(&mut self, samples: &[f64], sample_rate: u32, channels: u16) -> Result<()> {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::new(&mut self.writer, spec)?;
        for &sample in samples {
            writer.write_sample(to_pcm16(sample))?;
        }
        writer.finalize()?;
        info!(samples = samples.len(), sample_rate, "WAV written");
        Ok(())
    }
}

//! RIFF/WAVE container writer.
//!
//! Writes 16-bit little-endian PCM with the fixed 44-byte header layout:
//! a `RIFF` chunk wrapping a 16-byte `fmt ` sub-chunk and a `data`
//! sub-chunk. Nothing variable (timestamps, tool tags) goes into the file,
//! so equal input produces byte-identical output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::Signal;

/// Size of the fixed header in bytes.
pub const HEADER_BYTES: u32 = 44;

/// Render parameters for one output file.
///
/// # Examples
///
/// ```
/// use driftbeat::AudioSpec;
///
/// let spec = AudioSpec::stereo_cd(1.0);
/// assert_eq!(spec.total_samples(), 44100);
/// assert_eq!(spec.block_align(), 4);
/// assert_eq!(spec.byte_rate(), 176_400);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioSpec {
    /// Samples per second per channel.
    pub sample_rate: u32,
    /// Output channel count; the mono signal is broadcast to all of them.
    pub channels: u16,
    /// Bits per sample; only 16 is implemented.
    pub bits_per_sample: u16,
    /// Track length in seconds. Fractional sample counts truncate.
    pub duration_seconds: f64,
}

impl AudioSpec {
    pub const fn new(
        sample_rate: u32,
        channels: u16,
        bits_per_sample: u16,
        duration_seconds: f64,
    ) -> Self {
        Self {
            sample_rate,
            channels,
            bits_per_sample,
            duration_seconds,
        }
    }

    /// CD-quality stereo: 44.1 kHz, 2 channels, 16-bit.
    pub const fn stereo_cd(duration_seconds: f64) -> Self {
        Self::new(44100, 2, 16, duration_seconds)
    }

    /// Checks the spec before any bytes are written.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(Error::InvalidArgument("sample rate must be positive".into()));
        }
        if self.channels == 0 {
            return Err(Error::InvalidArgument(
                "at least one output channel is required".into(),
            ));
        }
        if self.bits_per_sample == 0 {
            return Err(Error::InvalidArgument("bit depth must be positive".into()));
        }
        if self.bits_per_sample != 16 {
            return Err(Error::UnsupportedFormat(self.bits_per_sample));
        }
        if !self.duration_seconds.is_finite() || self.duration_seconds < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "duration must be a non-negative number of seconds, got {}",
                self.duration_seconds
            )));
        }
        if self.total_samples() * self.block_align() as u64 > u32::MAX as u64 {
            return Err(Error::InvalidArgument(
                "duration exceeds the RIFF 32-bit size field".into(),
            ));
        }
        Ok(())
    }

    /// Number of sample frames, truncating any fractional remainder.
    pub fn total_samples(&self) -> u64 {
        (self.sample_rate as f64 * self.duration_seconds) as u64
    }

    /// Bytes per sample on one channel.
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per frame across all channels.
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Bytes per second of audio data.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    /// Size of the data chunk in bytes.
    pub fn data_size(&self) -> u32 {
        self.total_samples() as u32 * self.block_align() as u32
    }
}

/// Clamps to `[-1, 1]` and scales to 16-bit, truncating toward zero.
fn quantize(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * 32767.0) as i16
}

/// Writes a complete WAV file to `sink`.
///
/// The header is emitted first, then the signal is swept from sample 0 to
/// the last frame; each quantized value is duplicated across all channels.
/// A zero duration yields a valid header-only file.
pub fn write_wav<W: Write, S: Signal>(sink: &mut W, spec: &AudioSpec, signal: &S) -> Result<()> {
    spec.validate()?;
    let data_size = spec.data_size();

    sink.write_all(b"RIFF")?;
    sink.write_all(&(HEADER_BYTES - 8 + data_size).to_le_bytes())?;
    sink.write_all(b"WAVE")?;

    sink.write_all(b"fmt ")?;
    sink.write_all(&16u32.to_le_bytes())?; // fmt sub-chunk size
    sink.write_all(&1u16.to_le_bytes())?; // linear PCM
    sink.write_all(&spec.channels.to_le_bytes())?;
    sink.write_all(&spec.sample_rate.to_le_bytes())?;
    sink.write_all(&spec.byte_rate().to_le_bytes())?;
    sink.write_all(&spec.block_align().to_le_bytes())?;
    sink.write_all(&spec.bits_per_sample.to_le_bytes())?;

    sink.write_all(b"data")?;
    sink.write_all(&data_size.to_le_bytes())?;

    let rate = spec.sample_rate as f64;
    for i in 0..spec.total_samples() {
        let t = i as f64 / rate;
        let bytes = quantize(signal.sample(t)).to_le_bytes();
        for _ in 0..spec.channels {
            sink.write_all(&bytes)?;
        }
    }

    Ok(())
}

/// Renders a track to `path`, creating missing parent directories.
///
/// An existing file is overwritten. On error the file may be truncated or
/// partially written and should be discarded.
pub fn render_to_file<P: AsRef<Path>, S: Signal>(
    path: P,
    spec: &AudioSpec,
    signal: &S,
) -> Result<()> {
    spec.validate()?;
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let mut sink = BufWriter::new(File::create(path)?);
    write_wav(&mut sink, spec, signal)?;
    sink.flush()?;
    Ok(())
}

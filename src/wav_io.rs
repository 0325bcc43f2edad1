//! WAV reading and writing over `hound`.
//!
//! Sample values are passed through exactly as stored in the file — no
//! rescaling to [-1, 1] on read. The filtering stages operate on the
//! raw amplitude scale and the quantizer casts back to 16-bit.

use std::path::Path;

use crate::error::Result;

/// A decoded waveform: raw interleaved samples plus format info.
#[derive(Debug, Clone)]
pub struct Waveform {
    pub sample_rate: u32,
    pub channels: u16,
    /// Interleaved frames, raw sample values as stored in the file.
    pub samples: Vec<f64>,
}

impl Waveform {
    /// Number of frames (samples per channel).
    pub fn frame_count(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels as usize
        }
    }

    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            0.0
        } else {
            self.frame_count() as f64 / self.sample_rate as f64
        }
    }
}

/// Read a WAV file without rescaling sample values.
///
/// Integer PCM (8/16/24/32-bit) and 32-bit float are supported; values
/// are widened to f64 exactly as stored.
pub fn read_waveform(path: &Path) -> Result<Waveform> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    let samples: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Int => reader
            .samples::<i32>()
            .map(|s| s.map(|v| v as f64))
            .collect::<std::result::Result<_, _>>()?,
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(|v| v as f64))
            .collect::<std::result::Result<_, _>>()?,
    };

    Ok(Waveform {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        samples,
    })
}

/// Write a mono 16-bit signed PCM WAV file, creating or overwriting it.
pub fn write_waveform(path: &Path, sample_rate: u32, samples: &[i16]) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_rate_and_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");

        let samples: Vec<i16> = vec![0, 100, -100, 32767, -32768];
        write_waveform(&path, 8000, &samples).unwrap();

        let wave = read_waveform(&path).unwrap();
        assert_eq!(wave.sample_rate, 8000);
        assert_eq!(wave.channels, 1);
        let read_back: Vec<i16> = wave.samples.iter().map(|&s| s as i16).collect();
        assert_eq!(read_back, samples);
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_waveform(&dir.path().join("nope.wav"));
        assert!(result.is_err());
    }

    #[test]
    fn test_frame_count_counts_per_channel() {
        let wave = Waveform {
            sample_rate: 8000,
            channels: 2,
            samples: vec![1.0, 2.0, 3.0, 4.0],
        };
        assert_eq!(wave.frame_count(), 2);
    }
}

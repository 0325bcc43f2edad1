//! Denoising pipeline orchestration
//!
//! Runs the stages in order: read → downmix → design → filter →
//! quantize → write. Any failure aborts the run before the output
//! file is produced.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::filters::{design_bandpass, IirFilter};
use crate::error::Result;
use crate::wav_io::{self, Waveform};

/// Options controlling the bandpass denoise pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenoiseOptions {
    /// Passband lower edge in Hz
    pub low_hz: f64,
    /// Passband upper edge in Hz
    pub high_hz: f64,
    /// Butterworth prototype order (steeper rolloff, more ringing)
    pub order: usize,
}

impl Default for DenoiseOptions {
    fn default() -> Self {
        Self {
            low_hz: 800.0,
            high_hz: 1200.0,
            order: 5,
        }
    }
}

/// Summary of a completed denoise run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenoiseResult {
    pub output_path: String,
    pub sample_rate: u32,
    pub duration_secs: f64,
    pub samples: usize,
}

/// Average interleaved frames down to a single channel.
///
/// Single-channel input passes through unchanged.
pub fn downmix_mono(waveform: &Waveform) -> Vec<f64> {
    let channels = waveform.channels as usize;
    if channels <= 1 {
        return waveform.samples.clone();
    }

    waveform
        .samples
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f64>() / channels as f64)
        .collect()
}

/// Cast samples to 16-bit integers, truncating toward zero.
///
/// Out-of-range values wrap rather than clamp, matching a plain
/// fixed-width integer cast: a heavily amplified signal can fold over.
/// Callers that need saturation should scale before filtering.
pub fn quantize(signal: &[f64]) -> Vec<i16> {
    signal.iter().map(|&x| x.trunc() as i64 as i16).collect()
}

/// Run the full denoise pipeline on one file.
///
/// Reads `input`, downmixes to mono, applies the designed bandpass and
/// writes the quantized result to `output` at the source sample rate.
pub fn denoise_file(
    input: &Path,
    output: &Path,
    options: &DenoiseOptions,
) -> Result<DenoiseResult> {
    let waveform = wav_io::read_waveform(input)?;
    log::info!(
        "Loaded {}: {} Hz, {} channel(s), {} frames ({:.2}s)",
        input.display(),
        waveform.sample_rate,
        waveform.channels,
        waveform.frame_count(),
        waveform.duration_secs()
    );

    let mono = downmix_mono(&waveform);

    let coeffs = design_bandpass(
        options.low_hz,
        options.high_hz,
        waveform.sample_rate as f64,
        options.order,
    )?;
    log::debug!(
        "Designed order-{} bandpass {}-{} Hz ({} taps)",
        options.order,
        options.low_hz,
        options.high_hz,
        coeffs.b.len()
    );

    let filtered = IirFilter::new(coeffs).process(&mono);
    let quantized = quantize(&filtered);

    wav_io::write_waveform(output, waveform.sample_rate, &quantized)?;
    log::info!(
        "Wrote {} ({} samples @ {} Hz)",
        output.display(),
        quantized.len(),
        waveform.sample_rate
    );

    Ok(DenoiseResult {
        output_path: output.display().to_string(),
        sample_rate: waveform.sample_rate,
        duration_secs: quantized.len() as f64 / waveform.sample_rate as f64,
        samples: quantized.len(),
    })
}

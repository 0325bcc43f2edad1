//! Audio cleaning pipeline module
//!
//! Bandpass-based noise reduction in four stages:
//! 1. Mono downmix (average across channels)
//! 2. Butterworth bandpass design (IIR)
//! 3. Direct-form filtering
//! 4. Quantization back to 16-bit PCM

pub mod filters;
pub mod pipeline;

pub use pipeline::{denoise_file, DenoiseOptions, DenoiseResult};

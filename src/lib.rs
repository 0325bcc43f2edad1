//! Bandpass noise reduction for WAV audio.
//!
//! Reads a WAV recording, downmixes to mono, applies a Butterworth
//! bandpass filter and writes the cleaned 16-bit result, optionally
//! rendering a before/after comparison plot.

pub mod audio_clean;
pub mod error;
pub mod plot;
pub mod wav_io;

pub use audio_clean::pipeline::{denoise_file, DenoiseOptions, DenoiseResult};
pub use error::ScrubError;

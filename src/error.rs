//! Typed errors for the denoising pipeline.

/// Errors surfaced by the denoising pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ScrubError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
    #[error("Invalid filter spec: {0}")]
    InvalidFilterSpec(String),
    #[error("Plot rendering failed: {0}")]
    Plot(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScrubError>;

//! Error types shared by the synthesizer, the encoders and the CLI sink.

/// Errors surfaced by the sculpture pipeline.
///
/// Degenerate STL triangles are deliberately absent: they are encoded with a
/// zero normal instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum SculptureError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("unknown shape type: {0}")]
    UnknownShape(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("wav error: {0}")]
    Wav(#[from] hound::Error),

    #[error("format error: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SculptureError>;

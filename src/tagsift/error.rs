use thiserror::Error;

/// Errors raised by the ambient layers (config, item sources, CLI).
///
/// The filtering core never returns these: invalid tags and out-of-range
/// removals are silent no-ops.
#[derive(Error, Debug)]
pub enum SiftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Source error: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, SiftError>;

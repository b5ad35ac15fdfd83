//! Domain error types

use thiserror::Error;

/// Error when a bitmap cannot be built, encoded or decoded
#[derive(Debug, Clone, Error)]
pub enum ImageEncodeError {
    #[error("Bitmap buffer size mismatch: expected {expected} bytes for {width}x{height} RGBA, got {actual}")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Bitmap has zero width or height")]
    EmptyBitmap,

    #[error("Failed to encode PNG: {0}")]
    EncodeFailed(String),

    #[error("Failed to decode PNG: {0}")]
    DecodeFailed(String),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

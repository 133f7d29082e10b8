//! Error types for the palette-forge engine

use thiserror::Error;

/// Result type alias for palette-forge operations
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Error types for color extraction.
///
/// Extraction itself degrades rather than fails: images with no usable
/// signal fall back to the default palette, and failed sources simply
/// contribute nothing to aggregation. The variants here cover the only
/// hard failures: contract violations at construction time.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Engine configuration rejected at construction
    #[error("Invalid configuration: {parameter} = {value}")]
    InvalidConfig { parameter: String, value: String },

    /// Pixel buffer length does not match its declared dimensions
    #[error(
        "Pixel buffer mismatch: {width}x{height} with {channels} channels \
         requires {expected} bytes, got {actual}"
    )]
    BufferMismatch {
        width: u32,
        height: u32,
        channels: u8,
        expected: usize,
        actual: usize,
    },

    /// Pixel buffer declared with a zero dimension
    #[error("Invalid buffer dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Hex color string could not be parsed
    #[error("Invalid hex color: {message}")]
    InvalidHex { message: String },
}

impl ExtractionError {
    /// Create a configuration error with context
    pub fn config(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a hex parse error with context
    pub fn hex(message: impl Into<String>) -> Self {
        Self::InvalidHex {
            message: message.into(),
        }
    }
}

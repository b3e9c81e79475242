//! I/O error types
//!
//! Provides a unified error type for all image decoding operations.
//! Decoder failures from the `image` crate are mapped into `IoError`
//! variants so that callers only need to handle one error type.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// The image format is not recognized
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The input is structurally unusable (empty, too large, ...)
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// The decoder rejected the data
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The encoder rejected the raster
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library (e.g. zero-sized image)
    #[error("core error: {0}")]
    Core(#[from] letterscore_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;

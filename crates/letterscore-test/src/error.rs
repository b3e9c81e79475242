//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a raster or mask
    #[error("failed to build fixture: {0}")]
    Fixture(#[from] letterscore_core::Error),

    /// Failed to encode a fixture image
    #[error("failed to encode fixture '{name}': {message}")]
    Encode { name: String, message: String },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;

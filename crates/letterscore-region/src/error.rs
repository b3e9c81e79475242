//! Error types for letterscore-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] letterscore_core::Error),

    /// Border trace started on a paper pixel
    #[error("invalid seed position: ({x}, {y})")]
    InvalidSeed { x: i32, y: i32 },

    /// Border following did not close
    #[error("border trace failed: {0}")]
    TraceFailed(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;

//! Error types for letterscore-grade

use thiserror::Error;

/// Errors turning caller input into a drawing.
///
/// These are always returned to the caller; a drawing that cannot be read
/// is never scored.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not a decodable image
    #[error("image decode failed: {0}")]
    Image(#[from] letterscore_io::IoError),

    /// The decoded raster could not be binarized
    #[error("invalid raster: {0}")]
    Raster(#[from] letterscore_color::ColorError),
}

/// Internal failures while measuring or scoring a drawing.
///
/// The pipeline recovers from these with the policy's fallback score.
#[derive(Debug, Error)]
pub enum GradeError {
    /// Region library error
    #[error("region error: {0}")]
    Region(#[from] letterscore_region::RegionError),

    /// A descriptor field is non-finite or out of range
    #[error("malformed shape descriptor: {field} = {value}")]
    MalformedDescriptor { field: &'static str, value: f64 },

    /// The score components do not fit in a `u32`
    #[error("score overflow: base {base} plus bonuses {bonuses:?}")]
    ScoreOverflow { base: u32, bonuses: [u32; 3] },
}

/// Errors parsing a target symbol
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SymbolError {
    /// No character given
    #[error("empty symbol")]
    Empty,

    /// More than one character given
    #[error("symbol must be a single character, got {0:?}")]
    TooLong(String),

    /// Mode is not one of upper, lower, number
    #[error("unknown mode: {0:?}")]
    UnknownMode(String),
}

/// Errors loading or validating a scoring policy
#[derive(Debug, Error)]
pub enum PolicyError {
    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Policy JSON could not be read or written
    #[error("policy json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for scoring operations
pub type GradeResult<T> = Result<T, GradeError>;

/// Result type for policy operations
pub type PolicyResult<T> = Result<T, PolicyError>;

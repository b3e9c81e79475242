//! letterscore Color - Ink extraction for drawing analysis
//!
//! This crate turns a decoded drawing into the binary mask every later
//! stage works on:
//!
//! - **Color space conversion** ([`colorspace`]): RGB to luminance
//! - **Thresholding** ([`threshold`]): inverted fixed-threshold binarization

pub mod colorspace;
pub mod error;
pub mod threshold;

// Re-export core types
pub use letterscore_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

pub use colorspace::{raster_to_gray, rgb_to_gray};
pub use threshold::{DEFAULT_THRESHOLD, ThresholdOptions, normalize, threshold_to_binary_inv};

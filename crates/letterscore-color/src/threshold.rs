//! Binary thresholding
//!
//! Drawings arrive as dark strokes on light paper, so binarization here
//! is inverted: a pixel whose luminance is at or below the threshold is
//! ink (foreground), anything brighter is paper.

use crate::ColorResult;
use crate::colorspace::pixel_luminance;
use letterscore_core::{BinaryMask, Raster};
use tracing::debug;

/// Default global threshold on the 0..=255 luminance scale.
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Options for the normalizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdOptions {
    /// Highest luminance still counted as ink
    pub threshold: u8,
}

impl Default for ThresholdOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Classify every pixel of `raster` as ink (`luminance <= threshold`) or paper.
///
/// Works on gray, RGB and RGBA rasters; alpha is ignored.
pub fn threshold_to_binary_inv(raster: &Raster, threshold: u8) -> ColorResult<BinaryMask> {
    let bits: Vec<bool> = raster
        .pixels()
        .map(|p| pixel_luminance(p) <= threshold)
        .collect();
    let (width, height) = (raster.width(), raster.height());
    Ok(BinaryMask::from_bits(width, height, bits)?)
}

/// Convert a decoded drawing into its ink mask.
pub fn normalize(raster: &Raster, options: &ThresholdOptions) -> ColorResult<BinaryMask> {
    let mask = threshold_to_binary_inv(raster, options.threshold)?;
    debug!(
        width = mask.width(),
        height = mask.height(),
        threshold = options.threshold,
        ink = mask.count_foreground(),
        "normalized raster"
    );
    Ok(mask)
}

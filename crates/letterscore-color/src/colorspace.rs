//! Color space conversion
//!
//! RGB to luminance with the BT.601 weights
//! `Y = 0.299 R + 0.587 G + 0.114 B`, evaluated in 14-bit fixed point
//! with rounding so results are bit-exact across platforms.

use crate::ColorResult;
use letterscore_core::{Channels, Raster};

const SHIFT: u32 = 14;
const R_WEIGHT: u32 = 4899; // 0.299 * 2^14
const G_WEIGHT: u32 = 9617; // 0.587 * 2^14
const B_WEIGHT: u32 = 1868; // 0.114 * 2^14
const ROUND: u32 = 1 << (SHIFT - 1);

/// Convert one RGB pixel to its luminance.
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * R_WEIGHT + g as u32 * G_WEIGHT + b as u32 * B_WEIGHT + ROUND) >> SHIFT) as u8
}

/// Luminance of one pixel given as a sample slice.
///
/// Gray pixels pass through; alpha is ignored.
#[inline]
pub(crate) fn pixel_luminance(samples: &[u8]) -> u8 {
    match samples {
        [v] => *v,
        [r, g, b] | [r, g, b, _] => rgb_to_gray(*r, *g, *b),
        _ => 0,
    }
}

/// Convert a raster to a single-channel luminance raster.
///
/// Gray rasters are returned as a copy.
pub fn raster_to_gray(raster: &Raster) -> ColorResult<Raster> {
    if raster.channels() == Channels::Gray {
        return Ok(raster.clone());
    }
    let gray: Vec<u8> = raster.pixels().map(pixel_luminance).collect();
    Ok(Raster::from_raw(
        raster.width(),
        raster.height(),
        Channels::Gray,
        gray,
    )?)
}

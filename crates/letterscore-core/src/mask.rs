//! BinaryMask - Ink/paper classification of a raster
//!
//! One boolean per pixel: `true` is foreground (ink), `false` is
//! background (paper). Reads outside the image are background, which is
//! what border tracing expects.

use crate::error::{Error, Result};

/// Two-valued image with the same dimensions as its source raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl BinaryMask {
    /// Create an all-background mask.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
        })
    }

    /// Build a mask from a row-major vector of foreground flags.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `bits` has the wrong length.
    pub fn from_bits(width: u32, height: u32, bits: Vec<bool>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if bits.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: bits.len(),
            });
        }
        Ok(Self {
            width,
            height,
            bits,
        })
    }

    /// Parse a mask from rows of text, `#` for ink and anything else for paper.
    ///
    /// Handy for small hand-written fixtures.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the rows have different lengths.
    pub fn from_ascii(rows: &[&str]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as u32;
        let mut bits = Vec::with_capacity(width as usize * height as usize);
        for row in rows {
            if row.chars().count() as u32 != width {
                return Err(Error::InvalidParameter(format!(
                    "ragged mask row: expected {} columns, got {}",
                    width,
                    row.chars().count()
                )));
            }
            bits.extend(row.chars().map(|c| c == '#'));
        }
        Self::from_bits(width, height, bits)
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Whether `(x, y)` is ink. Coordinates outside the image read as paper.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.bits[self.index(x as u32, y as u32)]
    }

    /// Set one pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] outside the image.
    pub fn set(&mut self, x: u32, y: u32, ink: bool) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.bits[idx] = ink;
        Ok(())
    }

    /// Row-major foreground flags.
    #[inline]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Number of ink pixels.
    pub fn count_foreground(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Fraction of ink pixels, `count / (w * h)`, in `[0, 1]`.
    pub fn find_area_fraction(&self) -> f64 {
        self.count_foreground() as f64 / self.bits.len() as f64
    }

    /// True when no pixel is ink.
    pub fn is_blank(&self) -> bool {
        !self.bits.iter().any(|&b| b)
    }
}

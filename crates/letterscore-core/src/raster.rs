//! Raster - The decoded input image
//!
//! A `Raster` is a width x height grid of 8-bit samples, interleaved per
//! pixel. It is what the decoder hands to the normalizer.
//!
//! # Pixel layout
//!
//! - Rows are stored top to bottom with no padding
//! - Samples within a pixel are interleaved (`RGBRGB...` for RGB)
//! - Alpha, when present, is the last sample of each pixel

use crate::error::{Error, Result};

/// Samples per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Channels {
    /// Single luminance sample
    Gray = 1,
    /// Red, green, blue
    Rgb = 3,
    /// Red, green, blue, alpha
    Rgba = 4,
}

impl Channels {
    /// Get the number of samples per pixel.
    #[inline]
    pub fn count(self) -> u32 {
        self as u32
    }
}

/// Decoded 8-bit image.
///
/// # Examples
///
/// ```
/// use letterscore_core::{Channels, Raster};
///
/// let raster = Raster::new_filled(64, 48, Channels::Rgb, 255).unwrap();
/// assert_eq!(raster.width(), 64);
/// assert_eq!(raster.pixel(0, 0), Some(&[255u8, 255, 255][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    channels: Channels,
    data: Vec<u8>,
}

impl Raster {
    /// Create a new raster with every sample set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, channels: Channels) -> Result<Self> {
        Self::new_filled(width, height, channels, 0)
    }

    /// Create a new raster with every sample set to `value`.
    ///
    /// `Raster::new_filled(w, h, Channels::Rgb, 255)` is a blank white canvas.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_filled(width: u32, height: u32, channels: Channels, value: u8) -> Result<Self> {
        let len = Self::sample_len(width, height, channels)?;
        Ok(Self {
            width,
            height,
            channels,
            data: vec![value; len],
        })
    }

    /// Wrap an existing interleaved sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::BufferSizeMismatch`] if `data` does not hold exactly
    /// `width * height * channels` samples.
    pub fn from_raw(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Result<Self> {
        let expected = Self::sample_len(width, height, channels)?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    fn sample_len(width: u32, height: u32, channels: Channels) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(channels.count() as usize))
            .ok_or(Error::InvalidDimension { width, height })
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

    /// Get the samples per pixel.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw interleaved samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over pixels in row-major order, one slice per pixel.
    pub fn pixels(&self) -> std::slice::Chunks<'_, u8> {
        self.data.chunks(self.channels.count() as usize)
    }

    /// Get the samples of one pixel, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let spp = self.channels.count() as usize;
        let start = (y as usize * self.width as usize + x as usize) * spp;
        Some(&self.data[start..start + spp])
    }

    /// Set the samples of one pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] outside the image and
    /// [`Error::InvalidChannels`] if `samples` has the wrong length.
    pub fn set_pixel(&mut self, x: u32, y: u32, samples: &[u8]) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let spp = self.channels.count() as usize;
        if samples.len() != spp {
            return Err(Error::InvalidChannels(samples.len() as u32));
        }
        let start = (y as usize * self.width as usize + x as usize) * spp;
        self.data[start..start + spp].copy_from_slice(samples);
        Ok(())
    }
}

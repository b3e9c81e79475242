//! Raster decoding and encoding
//!
//! Turns uploaded image bytes into a [`Raster`] through the `image`
//! crate. Every decoded image is flattened to 3-channel RGB; an alpha
//! channel is dropped, not composited.

use crate::format::{ImageFormat, detect_format_from_bytes};
use crate::{IoError, IoResult};
use image::{DynamicImage, GrayImage, ImageReader, RgbImage, RgbaImage};
use letterscore_core::{Channels, Raster};
use std::io::Cursor;
use tracing::debug;

/// Limits applied before decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Largest accepted encoded size, in bytes
    pub max_bytes: usize,
    /// Largest accepted `width * height`, read from the header
    pub max_pixels: u64,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_bytes: 16 * 1024 * 1024,
            max_pixels: 89_478_485,
        }
    }
}

/// Decode image bytes into an RGB raster using default options.
///
/// # Errors
///
/// See [`decode_raster_with`].
pub fn decode_raster(data: &[u8]) -> IoResult<Raster> {
    decode_raster_with(data, &DecodeOptions::default())
}

/// Decode image bytes into an RGB raster.
///
/// # Errors
///
/// - [`IoError::InvalidData`] for empty input, or input over either limit
/// - [`IoError::UnsupportedFormat`] when no known signature matches
/// - [`IoError::DecodeError`] when the decoder rejects the data
pub fn decode_raster_with(data: &[u8], options: &DecodeOptions) -> IoResult<Raster> {
    if data.is_empty() {
        return Err(IoError::InvalidData("empty image data".to_string()));
    }
    if data.len() > options.max_bytes {
        return Err(IoError::InvalidData(format!(
            "image data too large: {} bytes (limit {})",
            data.len(),
            options.max_bytes
        )));
    }

    let format = detect_format_from_bytes(data)?;
    let (width, height) = ImageReader::with_format(Cursor::new(data), format.to_image_format())
        .into_dimensions()
        .map_err(|e| IoError::DecodeError(format!("{:?}: {}", format, e)))?;
    if u64::from(width) * u64::from(height) > options.max_pixels {
        return Err(IoError::InvalidData(format!(
            "image too large: {width}x{height} pixels (limit {})",
            options.max_pixels
        )));
    }

    let image = image::load_from_memory_with_format(data, format.to_image_format())
        .map_err(|e| IoError::DecodeError(format!("{:?}: {}", format, e)))?;
    debug!(?format, width, height, "decoded image");

    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    let samples = rgb.into_raw();
    Ok(Raster::from_raw(width, height, Channels::Rgb, samples)?)
}

/// Encode a raster as PNG.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if the encoder fails.
pub fn encode_png(raster: &Raster) -> IoResult<Vec<u8>> {
    let (w, h) = (raster.width(), raster.height());
    let data = raster.data().to_vec();
    let image = match raster.channels() {
        Channels::Gray => GrayImage::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
        Channels::Rgb => RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
        Channels::Rgba => RgbaImage::from_raw(w, h, data).map(DynamicImage::ImageRgba8),
    };
    let Some(image) = image else {
        return Err(IoError::EncodeError(format!("sample buffer does not fit {w}x{h}")));
    };

    let png = ImageFormat::Png.to_image_format();
    let mut buf = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buf), png)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(matches!(decode_raster(&[]), Err(IoError::InvalidData(_))));
    }

    #[test]
    fn test_size_limit() {
        let options = DecodeOptions {
            max_bytes: 4,
            ..Default::default()
        };
        let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert!(matches!(
            decode_raster_with(&data, &options),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_pixel_limit_checked_before_decoding() {
        let raster = Raster::new_filled(64, 48, Channels::Rgb, 255).unwrap();
        let png = encode_png(&raster).unwrap();
        let tight = DecodeOptions {
            max_pixels: 64 * 48 - 1,
            ..Default::default()
        };
        assert!(matches!(
            decode_raster_with(&png, &tight),
            Err(IoError::InvalidData(_))
        ));
        let exact = DecodeOptions {
            max_pixels: 64 * 48,
            ..Default::default()
        };
        assert_eq!(decode_raster_with(&png, &exact).unwrap().width(), 64);
    }

    #[test]
    fn test_truncated_png_is_decode_error() {
        let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];
        assert!(matches!(decode_raster(&data), Err(IoError::DecodeError(_))));
    }

    #[test]
    fn test_gray_png_becomes_rgb() {
        let gray = Raster::from_raw(2, 1, Channels::Gray, vec![0, 200]).unwrap();
        let png = encode_png(&gray).unwrap();
        let rgb = decode_raster(&png).unwrap();
        assert_eq!(rgb.channels(), Channels::Rgb);
        assert_eq!(rgb.pixel(1, 0), Some(&[200u8, 200, 200][..]));
    }

    #[test]
    fn test_alpha_is_dropped_not_composited() {
        let rgba = Raster::from_raw(1, 1, Channels::Rgba, vec![0, 0, 0, 0]).unwrap();
        let rgb = decode_raster(&encode_png(&rgba).unwrap()).unwrap();
        assert_eq!(rgb.pixel(0, 0), Some(&[0u8, 0, 0][..]));
    }
}

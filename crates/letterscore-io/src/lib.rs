//! letterscore-io - Image decoding for letterscore
//!
//! Turns the bytes a drawing pad uploads into a [`letterscore_core::Raster`]:
//!
//! - [`detect_format_from_bytes`] sniffs the container from its magic number
//! - [`decode_raster`] decodes PNG, JPEG, BMP, GIF, TIFF, WebP and PNM to RGB
//! - [`encode_png`] writes a raster back out, mostly for fixtures
//!
//! Undecodable input is always an [`IoError`], never an empty raster.

mod decode;
pub mod error;
pub mod format;

pub use decode::{DecodeOptions, decode_raster, decode_raster_with, encode_png};
pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format_from_bytes};

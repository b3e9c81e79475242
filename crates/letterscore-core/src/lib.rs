//! letterscore Core - Basic data structures for drawing analysis
//!
//! This crate provides the fundamental data structures used throughout
//! the letterscore workspace:
//!
//! - [`Raster`] - A decoded 8-bit image (gray, RGB or RGBA)
//! - [`BinaryMask`] - Ink/paper classification of a raster
//! - [`Box`] - Rectangle regions
//! - [`Point`] / [`Contour`] - Closed pixel polylines with area and hull
//!
//! Every value here is owned by a single scoring call; nothing is shared
//! or cached between calls.

pub mod box_;
pub mod contour;
pub mod error;
pub mod mask;
pub mod raster;

pub use box_::Box;
pub use contour::{Contour, Point};
pub use error::{Error, Result};
pub use mask::BinaryMask;
pub use raster::{Channels, Raster};

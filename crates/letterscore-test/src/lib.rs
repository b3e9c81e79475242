//! letterscore-test - Regression test framework for letterscore
//!
//! This crate provides a small regression harness and synthetic drawing
//! fixtures shared by the integration tests of every crate:
//!
//! - [`RegParams`] counts indexed checks and reports every failure at the end
//! - [`Canvas`] paints strokes, rings and dots onto a white raster
//!
//! # Usage
//!
//! ```ignore
//! use letterscore_test::{Canvas, RegParams};
//!
//! let mut rp = RegParams::new("shape");
//! let mut canvas = Canvas::new(100, 100).unwrap();
//! canvas.fill_rect(40, 10, 20, 80);
//! rp.compare_values(0.16, canvas.mask().find_area_fraction(), 1e-9);
//! assert!(rp.cleanup());
//! ```

mod canvas;
mod error;
mod params;

pub use canvas::Canvas;
pub use error::{TestError, TestResult};
pub use params::RegParams;

//! letterscore - Scoring hand-drawn letters and digits
//!
//! Gives a learner's drawing of a letter or digit a score from 0 to 95
//! together with encouraging feedback. The score measures how plausible
//! the drawing is as a character (amount of ink, compactness, proportions
//! and separate strokes) plus bonuses for a few letter classes. It does
//! not recognize which character was drawn.
//!
//! # Overview
//!
//! - Image decoding (PNG, JPEG, BMP, GIF, TIFF, WebP, PNM)
//! - Binarization of dark ink on light paper
//! - Connected components, border tracing and shape measurement
//! - Policy-driven scoring, accuracy tiers and practice tips
//!
//! # Example
//!
//! ```
//! use letterscore::grade::{Grader, Mode, TargetSymbol};
//! use letterscore::{Channels, Raster};
//!
//! let blank = Raster::new_filled(64, 64, Channels::Rgb, 255).unwrap();
//! let target = TargetSymbol::new('A', Mode::Upper);
//! let result = Grader::new().score_raster(&blank, &target).unwrap();
//! assert_eq!(result.score, 0);
//! assert!(!result.tips.is_empty());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use letterscore_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use letterscore_color as color;
pub use letterscore_grade as grade;
pub use letterscore_io as io;
pub use letterscore_region as region;

//! letterscore Region - Regions and borders of a drawing
//!
//! This crate finds what was drawn in an ink mask:
//!
//! - **Connected components** ([`conncomp`]): 8-connected ink labelling and
//!   detection of components enclosed by others
//! - **Border tracing** ([`ccbord`]): outer borders of external components
//! - **Shape description** ([`shape`]): coverage, solidity, proportions and
//!   region count of a drawing
//!
//! # Example
//!
//! ```
//! use letterscore_core::BinaryMask;
//! use letterscore_region::extract_shape;
//!
//! let mask = BinaryMask::from_ascii(&[
//!     ".....",
//!     ".###.",
//!     ".###.",
//!     ".....",
//! ]).unwrap();
//! let shape = extract_shape(&mask).unwrap().unwrap();
//! assert_eq!(shape.region_count, 1);
//! assert_eq!(shape.solidity, 1.0);
//! ```

pub mod ccbord;
pub mod conncomp;
pub mod error;
pub mod shape;

// Re-export core types
pub use letterscore_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use ccbord::{Direction, get_outer_borders, trace_outer_border};
pub use conncomp::{
    ConnectedComponent, ConnectivityType, find_connected_components, find_external_components,
    outer_background,
};
pub use shape::{ShapeDescriptor, extract_shape};

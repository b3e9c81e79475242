//! Shape description of a drawing
//!
//! Condenses an ink mask into the handful of measurements the scorer
//! looks at: how much of the canvas is inked, how convex the main stroke
//! group is, its proportions and how many separate regions were drawn.

use crate::ccbord::get_outer_borders;
use crate::error::RegionResult;
use letterscore_core::{BinaryMask, Box, Contour};
use tracing::debug;

/// Measurements of a drawing's dominant region
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    /// Fraction of all pixels that are ink, in `[0, 1]`
    pub coverage_ratio: f64,
    /// Outer border with the largest enclosed area
    pub dominant_contour: Contour,
    /// Area enclosed by the dominant contour
    pub contour_area: f64,
    /// Area of the dominant contour's convex hull
    pub hull_area: f64,
    /// `contour_area / hull_area`, or 0 when the hull is degenerate
    pub solidity: f64,
    /// Bounding box of the dominant contour
    pub bounding_box: Box,
    /// Bounding box width over height
    pub aspect_ratio: f64,
    /// Number of external regions, at least 1
    pub region_count: usize,
}

impl ShapeDescriptor {
    /// Build a descriptor from the external borders of a drawing.
    ///
    /// The dominant contour is the one with the largest area; among equal
    /// areas the first border in `borders` wins. Returns `None` when there
    /// are no borders.
    pub fn from_borders(coverage_ratio: f64, borders: &[Contour]) -> Option<Self> {
        let mut dominant: Option<(&Contour, f64)> = None;
        for border in borders {
            let area = border.area();
            if dominant.is_none_or(|(_, best)| area > best) {
                dominant = Some((border, area));
            }
        }
        let (contour, contour_area) = dominant?;

        let hull_area = contour.hull_area();
        let solidity = if hull_area > 0.0 {
            (contour_area / hull_area).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let bounding_box = contour.bounding_box()?;

        Some(Self {
            coverage_ratio,
            dominant_contour: contour.clone(),
            contour_area,
            hull_area,
            solidity,
            bounding_box,
            aspect_ratio: bounding_box.aspect_ratio(),
            region_count: borders.len(),
        })
    }
}

/// Describe the ink in `mask`.
///
/// Returns `Ok(None)` for a blank drawing.
pub fn extract_shape(mask: &BinaryMask) -> RegionResult<Option<ShapeDescriptor>> {
    if mask.is_blank() {
        debug!("blank drawing, no shape");
        return Ok(None);
    }
    let borders = get_outer_borders(mask)?;
    let descriptor = ShapeDescriptor::from_borders(mask.find_area_fraction(), &borders);
    if let Some(d) = &descriptor {
        debug!(
            coverage = d.coverage_ratio,
            solidity = d.solidity,
            aspect = d.aspect_ratio,
            regions = d.region_count,
            "extracted shape"
        );
    }
    Ok(descriptor)
}

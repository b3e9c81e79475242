//! Box - Rectangle regions
//!
//! Axis-aligned rectangles in pixel coordinates, used for the bounding
//! geometry of traced contours.

/// A rectangle region
///
/// A simple Copy type since it's small and frequently copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Box {
    /// Create a box without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create the box covering the inclusive pixel range
    /// `[x_min, x_max] x [y_min, y_max]`.
    pub fn from_extents(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        let (x0, x1) = if x_min <= x_max {
            (x_min, x_max)
        } else {
            (x_max, x_min)
        };
        let (y0, y1) = if y_min <= y_max {
            (y_min, y_max)
        } else {
            (y_max, y_min)
        };
        Self {
            x: x0,
            y: y0,
            w: x1 - x0 + 1,
            h: y1 - y0 + 1,
        }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Width over height.
    ///
    /// A zero-height box reports 1.0, so a degenerate box reads as square
    /// rather than infinitely wide.
    pub fn aspect_ratio(&self) -> f64 {
        if self.h == 0 {
            1.0
        } else {
            self.w as f64 / self.h as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extents_is_inclusive() {
        let b = Box::from_extents(2, 3, 5, 3);
        assert_eq!(b, Box::new_unchecked(2, 3, 4, 1));
        let swapped = Box::from_extents(5, 3, 2, 1);
        assert_eq!(swapped, Box::new_unchecked(2, 1, 4, 3));
        assert_eq!((b.right(), b.bottom()), (6, 4));
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(Box::new_unchecked(0, 0, 10, 40).aspect_ratio(), 0.25);
        assert_eq!(Box::new_unchecked(0, 0, 10, 0).aspect_ratio(), 1.0);
    }
}

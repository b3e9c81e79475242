//! Point and Contour - Closed pixel polylines
//!
//! A [`Contour`] is an ordered sequence of integer pixel coordinates whose
//! last point connects back to the first. All geometry on it (area, convex
//! hull, bounding box) is computed on the polygon through the pixel
//! centers, so a single pixel or a one-pixel-wide line encloses no area.

use crate::box_::Box;

/// A point in pixel coordinates (x right, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl Point {
    /// Create a new point
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Add offset to create new point
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Twice the signed area of triangle `o, a, b`; positive when `a -> b`
/// turns counter-clockwise around `o` in a y-up frame.
#[inline]
fn cross(o: Point, a: Point, b: Point) -> i64 {
    (a.x - o.x) as i64 * (b.y - o.y) as i64 - (a.y - o.y) as i64 * (b.x - o.x) as i64
}

/// Closed polyline of pixel coordinates
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    /// Create a contour from its points in traversal order.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the contour has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in traversal order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Enclosed area by the shoelace formula, always non-negative.
    ///
    /// Contours with fewer than three points have zero area.
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: i64 = (0..n)
            .map(|i| {
                let p = self.points[i];
                let q = self.points[(i + 1) % n];
                p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64
            })
            .sum();
        twice.unsigned_abs() as f64 / 2.0
    }

    /// Convex hull by Andrew's monotone chain.
    ///
    /// Collinear points are dropped; the result has at most two points when
    /// the input is collinear.
    pub fn convex_hull(&self) -> Contour {
        let mut pts = self.points.clone();
        pts.sort_unstable();
        pts.dedup();
        if pts.len() < 3 {
            return Contour::new(pts);
        }

        let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
        for &p in &pts {
            while lower.len() >= 2
                && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0
            {
                lower.pop();
            }
            lower.push(p);
        }

        let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
        for &p in pts.iter().rev() {
            while upper.len() >= 2
                && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0
            {
                upper.pop();
            }
            upper.push(p);
        }

        lower.pop();
        upper.pop();
        lower.extend(upper);
        Contour::new(lower)
    }

    /// Area of the convex hull.
    pub fn hull_area(&self) -> f64 {
        self.convex_hull().area()
    }

    /// Bounding box over the inclusive pixel extents of the points.
    ///
    /// Returns `None` for an empty contour.
    pub fn bounding_box(&self) -> Option<Box> {
        let first = self.points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Box::from_extents(min_x, min_y, max_x, max_y))
    }

    /// Drop points that sit in the middle of a straight run.
    ///
    /// A point is kept only where the step direction changes, so horizontal,
    /// vertical and diagonal runs collapse to their endpoints. Area, hull and
    /// bounding box are unchanged.
    pub fn compress_collinear(&self) -> Contour {
        let n = self.points.len();
        if n < 3 {
            return self.clone();
        }
        let step = |a: Point, b: Point| ((b.x - a.x).signum(), (b.y - a.y).signum());
        let kept: Vec<Point> = (0..n)
            .filter(|&i| {
                let prev = self.points[(i + n - 1) % n];
                let cur = self.points[i];
                let next = self.points[(i + 1) % n];
                step(prev, cur) != step(cur, next)
            })
            .map(|i| self.points[i])
            .collect();
        if kept.is_empty() {
            self.clone()
        } else {
            Contour::new(kept)
        }
    }
}

impl From<Vec<Point>> for Contour {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

//! Border tracing for connected components
//!
//! Outer borders are followed with the Suzuki-Abe rule: from the current
//! border pixel, scan its 8 neighbors counterclockwise starting just past
//! the pixel we arrived from, and step to the first ink pixel found. The
//! trace ends when it returns to the start pixel heading for the first
//! neighbor it left through.
//!
//! Traced borders pass through pixel centers. A one-pixel-wide stroke is
//! walked out and back, so its border encloses no area.

use crate::conncomp::find_external_components;
use crate::error::{RegionError, RegionResult};
use letterscore_core::{BinaryMask, Contour, Point};
use tracing::debug;

/// Direction for border traversal (8-connected, clockwise from West)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// West (-1, 0)
    West = 0,
    /// Northwest (-1, -1)
    NorthWest = 1,
    /// North (0, -1)
    North = 2,
    /// Northeast (1, -1)
    NorthEast = 3,
    /// East (1, 0)
    East = 4,
    /// Southeast (1, 1)
    SouthEast = 5,
    /// South (0, 1)
    South = 6,
    /// Southwest (-1, 1)
    SouthWest = 7,
}

impl Direction {
    /// Get the x offset for this direction
    #[inline]
    pub fn dx(self) -> i32 {
        XPOSTAB[self as usize]
    }

    /// Get the y offset for this direction
    #[inline]
    pub fn dy(self) -> i32 {
        YPOSTAB[self as usize]
    }

    /// Get direction from x,y offsets
    pub fn from_offset(dx: i32, dy: i32) -> Option<Self> {
        if dx.abs() > 1 || dy.abs() > 1 || (dx == 0 && dy == 0) {
            return None;
        }
        let idx = DIRTAB[(1 + dy) as usize][(1 + dx) as usize];
        if idx < 0 {
            None
        } else {
            Some(Self::from_index(idx as usize))
        }
    }

    /// Direction `steps` positions counterclockwise from this one
    #[inline]
    pub fn rotated_ccw(self, steps: usize) -> Self {
        Self::from_index(self as usize + 8 - steps % 8)
    }

    #[inline]
    fn from_index(idx: usize) -> Self {
        match idx % 8 {
            0 => Direction::West,
            1 => Direction::NorthWest,
            2 => Direction::North,
            3 => Direction::NorthEast,
            4 => Direction::East,
            5 => Direction::SouthEast,
            6 => Direction::South,
            _ => Direction::SouthWest,
        }
    }

    /// Get all 8 directions in clockwise order, starting at West
    pub fn all() -> [Direction; 8] {
        [
            Direction::West,
            Direction::NorthWest,
            Direction::North,
            Direction::NorthEast,
            Direction::East,
            Direction::SouthEast,
            Direction::South,
            Direction::SouthWest,
        ]
    }
}

/// X offset for each direction
const XPOSTAB: [i32; 8] = [-1, -1, 0, 1, 1, 1, 0, -1];

/// Y offset for each direction
const YPOSTAB: [i32; 8] = [0, -1, -1, -1, 0, 1, 1, 1];

/// Direction lookup table: DIRTAB[1+dy][1+dx] gives direction index
const DIRTAB: [[i32; 3]; 3] = [[1, 2, 3], [0, -1, 4], [7, 6, 5]];

#[inline]
fn moved(p: Point, dir: Direction) -> Point {
    p.offset(dir.dx(), dir.dy())
}

/// Trace the outer border of the component whose first raster pixel is
/// `start`.
///
/// `start` must be ink and its west, northwest, north and northeast
/// neighbors must be paper, which holds for the first pixel of any
/// component in raster order. An isolated pixel yields a one-point
/// contour.
pub fn trace_outer_border(mask: &BinaryMask, start: Point) -> RegionResult<Contour> {
    if !mask.get(start.x, start.y) {
        return Err(RegionError::InvalidSeed {
            x: start.x,
            y: start.y,
        });
    }

    let Some(first) = Direction::all()
        .into_iter()
        .map(|d| moved(start, d))
        .find(|p| mask.get(p.x, p.y))
    else {
        return Ok(Contour::new(vec![start]));
    };

    // A border pixel is entered at most once from each neighbor
    let limit = 8 * mask.pixel_count() + 8;
    let mut points = Vec::new();
    let (mut prev, mut cur) = (first, start);
    loop {
        let back = Direction::from_offset(prev.x - cur.x, prev.y - cur.y).ok_or_else(|| {
            RegionError::TraceFailed(format!("non-adjacent step at ({}, {})", cur.x, cur.y))
        })?;
        // `prev` is ink, so the full turn always finds a neighbor
        let next = (1..=8)
            .map(|k| moved(cur, back.rotated_ccw(k)))
            .find(|p| mask.get(p.x, p.y))
            .ok_or_else(|| {
                RegionError::TraceFailed(format!("lost the border at ({}, {})", cur.x, cur.y))
            })?;
        points.push(cur);
        if next == start && cur == first {
            break;
        }
        if points.len() > limit {
            return Err(RegionError::TraceFailed(format!(
                "border from ({}, {}) did not close",
                start.x, start.y
            )));
        }
        prev = cur;
        cur = next;
    }

    Ok(Contour::new(points))
}

/// Get the outer borders of all external components.
///
/// Borders are returned in raster order of each component's first pixel,
/// with straight runs compressed to their endpoints.
pub fn get_outer_borders(mask: &BinaryMask) -> RegionResult<Vec<Contour>> {
    let components = find_external_components(mask)?;
    let mut borders = Vec::with_capacity(components.len());
    for c in &components {
        borders.push(trace_outer_border(mask, c.seed)?.compress_collinear());
    }
    debug!(count = borders.len(), "traced outer borders");
    Ok(borders)
}

//! Connected component analysis
//!
//! Ink is grouped into 8-connected components; paper is 4-connected, so
//! two strokes touching only at a corner form one region while the paper
//! on either side of a diagonal stroke stays separated.
//!
//! A component is *external* when it touches the paper that reaches the
//! image edge. Components sitting inside a hole of another component
//! (a dot drawn inside an "O") are not external.

use crate::error::RegionResult;
use letterscore_core::{BinaryMask, Box, Point};
use std::collections::VecDeque;

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

impl ConnectivityType {
    fn offsets(self) -> &'static [(i32, i32)] {
        const FOUR: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        const EIGHT: [(i32, i32); 8] = [
            (-1, 0),
            (1, 0),
            (0, -1),
            (0, 1),
            (-1, -1),
            (1, -1),
            (-1, 1),
            (1, 1),
        ];
        match self {
            ConnectivityType::FourWay => &FOUR,
            ConnectivityType::EightWay => &EIGHT,
        }
    }
}

/// A connected component in a mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponent {
    /// Label, 1-based, in raster discovery order
    pub label: u32,
    /// Number of pixels in this component
    pub pixel_count: u32,
    /// Bounding box of this component
    pub bounds: Box,
    /// First pixel of the component in raster order
    pub seed: Point,
}

/// Label image plus the components it refers to
#[derive(Debug, Clone)]
struct ComponentLabels {
    /// Row-major labels, 0 for pixels outside every component
    labels: Vec<u32>,
    /// Components indexed by `label - 1`
    components: Vec<ConnectedComponent>,
}

/// Label the connected components of the pixels equal to `ink`.
///
/// Components are numbered in the raster order of their first pixel.
fn label_value(mask: &BinaryMask, ink: bool, connectivity: ConnectivityType) -> ComponentLabels {
    let (w, h) = (mask.width() as i32, mask.height() as i32);
    let bits = mask.bits();
    let mut labels = vec![0u32; bits.len()];
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for y in 0..h {
        for x in 0..w {
            let idx = (y * w + x) as usize;
            if bits[idx] != ink || labels[idx] != 0 {
                continue;
            }
            let label = components.len() as u32 + 1;
            labels[idx] = label;
            queue.push_back((x, y));

            let mut count = 0u32;
            let (mut min_x, mut min_y, mut max_x, mut max_y) = (x, y, x, y);
            while let Some((cx, cy)) = queue.pop_front() {
                count += 1;
                min_x = min_x.min(cx);
                min_y = min_y.min(cy);
                max_x = max_x.max(cx);
                max_y = max_y.max(cy);
                for &(dx, dy) in connectivity.offsets() {
                    let (nx, ny) = (cx + dx, cy + dy);
                    if nx < 0 || ny < 0 || nx >= w || ny >= h {
                        continue;
                    }
                    let nidx = (ny * w + nx) as usize;
                    if bits[nidx] == ink && labels[nidx] == 0 {
                        labels[nidx] = label;
                        queue.push_back((nx, ny));
                    }
                }
            }

            components.push(ConnectedComponent {
                label,
                pixel_count: count,
                bounds: Box::from_extents(min_x, min_y, max_x, max_y),
                seed: Point::new(x, y),
            });
        }
    }

    ComponentLabels { labels, components }
}

/// Find all connected ink components of a mask
///
/// Returns the components in raster order of their first pixel.
pub fn find_connected_components(
    mask: &BinaryMask,
    connectivity: ConnectivityType,
) -> RegionResult<Vec<ConnectedComponent>> {
    Ok(label_value(mask, true, connectivity).components)
}

/// Mark the paper pixels 4-connected to the image edge.
pub fn outer_background(mask: &BinaryMask) -> Vec<bool> {
    let (w, h) = (mask.width() as i32, mask.height() as i32);
    let paper = label_value(mask, false, ConnectivityType::FourWay);
    let mut touches_edge = vec![false; paper.components.len() + 1];
    for c in &paper.components {
        let b = c.bounds;
        touches_edge[c.label as usize] =
            b.x == 0 || b.y == 0 || b.right() == w || b.bottom() == h;
    }
    paper
        .labels
        .iter()
        .map(|&l| l != 0 && touches_edge[l as usize])
        .collect()
}

/// Find the 8-connected ink components that are not enclosed by another
/// component, in raster order of their first pixel.
pub fn find_external_components(mask: &BinaryMask) -> RegionResult<Vec<ConnectedComponent>> {
    let (w, h) = (mask.width() as i32, mask.height() as i32);
    let ink = label_value(mask, true, ConnectivityType::EightWay);
    let outer = outer_background(mask);

    let mut external = vec![false; ink.components.len() + 1];
    for y in 0..h {
        for x in 0..w {
            let label = ink.labels[(y * w + x) as usize];
            if label == 0 || external[label as usize] {
                continue;
            }
            let on_outer = |&(dx, dy): &(i32, i32)| {
                let (nx, ny) = (x + dx, y + dy);
                nx < 0 || ny < 0 || nx >= w || ny >= h || outer[(ny * w + nx) as usize]
            };
            external[label as usize] = ConnectivityType::FourWay.offsets().iter().any(on_outer);
        }
    }

    Ok(ink
        .components
        .into_iter()
        .filter(|c| external[c.label as usize])
        .collect())
}

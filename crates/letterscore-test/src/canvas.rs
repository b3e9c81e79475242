//! Synthetic drawings
//!
//! A [`Canvas`] is a white RGB raster that tests paint strokes onto, the
//! same way a child's drawing arrives from the drawing pad: dark ink on
//! light paper. Alongside the pixels it records which pixels were painted
//! with dark ink, so region tests can get the expected mask without going
//! through the normalizer.

use crate::error::{TestError, TestResult};
use letterscore_core::{BinaryMask, Channels, Raster};

/// Gray level at or below which painted pixels count as ink in [`Canvas::mask`].
const INK_LEVEL: u8 = 127;

/// White canvas with a brush.
#[derive(Debug, Clone)]
pub struct Canvas {
    raster: Raster,
    mask: BinaryMask,
    ink: u8,
}

impl Canvas {
    /// Create a white `width` x `height` canvas with black ink.
    pub fn new(width: u32, height: u32) -> TestResult<Self> {
        Ok(Self {
            raster: Raster::new_filled(width, height, Channels::Rgb, 255)?,
            mask: BinaryMask::new(width, height)?,
            ink: 0,
        })
    }

    /// Change the gray level used by subsequent strokes.
    pub fn with_ink(&mut self, gray: u8) -> &mut Self {
        self.ink = gray;
        self
    }

    /// Canvas width.
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    /// Canvas height.
    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    fn paint(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        let v = self.ink;
        if self.raster.set_pixel(x, y, &[v, v, v]).is_ok() {
            let _ = self.mask.set(x, y, v <= INK_LEVEL);
        }
    }

    /// Fill the rectangle with top-left `(x, y)` and size `w` x `h`.
    /// Parts outside the canvas are clipped.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32) -> &mut Self {
        for py in y..y + h {
            for px in x..x + w {
                self.paint(px, py);
            }
        }
        self
    }

    /// Draw a rectangular ring: the outline of `w` x `h` with the given
    /// stroke thickness, leaving the inside white.
    pub fn ring(&mut self, x: i32, y: i32, w: i32, h: i32, thickness: i32) -> &mut Self {
        for py in y..y + h {
            for px in x..x + w {
                let inside = px >= x + thickness
                    && px < x + w - thickness
                    && py >= y + thickness
                    && py < y + h - thickness;
                if !inside {
                    self.paint(px, py);
                }
            }
        }
        self
    }

    /// Fill a disc of radius `r` centered at `(cx, cy)`.
    pub fn disc(&mut self, cx: i32, cy: i32, r: i32) -> &mut Self {
        for py in cy - r..=cy + r {
            for px in cx - r..=cx + r {
                let (dx, dy) = (px - cx, py - cy);
                if dx * dx + dy * dy <= r * r {
                    self.paint(px, py);
                }
            }
        }
        self
    }

    /// Draw a straight stroke from `(x0, y0)` to `(x1, y1)` with a square
    /// brush of side `thickness`.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, thickness: i32) -> &mut Self {
        let half = thickness / 2;
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let (mut x, mut y) = (x0, y0);
        let mut err = dx + dy;
        loop {
            self.fill_rect(x - half, y - half, thickness, thickness);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
        self
    }

    /// Scatter `strokes` random line segments, reproducible from `seed`.
    pub fn scribble(&mut self, seed: u32, strokes: usize, thickness: i32) -> &mut Self {
        let mut rng = SimpleRng::new(seed);
        let (w, h) = (self.width() as f64, self.height() as f64);
        for _ in 0..strokes {
            let x0 = (rng.next_f64() * w) as i32;
            let y0 = (rng.next_f64() * h) as i32;
            let x1 = (rng.next_f64() * w) as i32;
            let y1 = (rng.next_f64() * h) as i32;
            self.line(x0, y0, x1, y1, thickness);
        }
        self
    }

    /// The painted raster.
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Pixels painted with dark ink.
    pub fn mask(&self) -> &BinaryMask {
        &self.mask
    }

    /// Encode the canvas as PNG bytes, as a drawing pad would upload it.
    pub fn to_png(&self) -> TestResult<Vec<u8>> {
        letterscore_io::encode_png(&self.raster).map_err(|e| TestError::Encode {
            name: format!("canvas {}x{}", self.width(), self.height()),
            message: e.to_string(),
        })
    }
}

/// Simple linear congruential generator for reproducible randomness
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    fn next(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    fn next_f64(&mut self) -> f64 {
        (self.next() >> 11) as f64 / (1u64 << 53) as f64
    }
}

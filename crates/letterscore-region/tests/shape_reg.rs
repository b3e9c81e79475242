//! Shape descriptor regression test
//!
//! Measures typical letter-like drawings and checks coverage, solidity,
//! proportions and region count.

use letterscore_color::{ThresholdOptions, normalize};
use letterscore_core::Box;
use letterscore_region::extract_shape;
use letterscore_test::{Canvas, RegParams};

#[test]
fn shape_reg() {
    let mut rp = RegParams::new("shape");

    // --- Test 1: vertical bar ---
    let mut canvas = Canvas::new(100, 100).unwrap();
    canvas.fill_rect(45, 10, 10, 80);
    let d = extract_shape(canvas.mask()).unwrap().unwrap();
    rp.compare_values(0.08, d.coverage_ratio, 1e-12);
    rp.compare_values(9.0 * 79.0, d.contour_area, 0.0);
    rp.compare_values(1.0, d.solidity, 1e-12);
    rp.compare_values(0.125, d.aspect_ratio, 1e-12);
    rp.compare_values(1.0, d.region_count as f64, 0.0);

    // --- Test 2: square ring with a dot inside ---
    let mut canvas = Canvas::new(100, 100).unwrap();
    canvas.ring(20, 20, 60, 60, 6).disc(50, 50, 3);
    let d = extract_shape(canvas.mask()).unwrap().unwrap();
    rp.compare_values(1.0, d.region_count as f64, 0.0);
    rp.compare_values(1.0, d.aspect_ratio, 1e-12);
    rp.compare_values(1.0, d.solidity, 1e-12);
    let ring_box = Box::new_unchecked(20, 20, 60, 60);
    rp.check("ring box", d.bounding_box == ring_box);

    // --- Test 3: two strokes, the larger dominates ---
    let mut canvas = Canvas::new(100, 100).unwrap();
    canvas.fill_rect(10, 10, 10, 10).fill_rect(50, 50, 20, 20);
    let d = extract_shape(canvas.mask()).unwrap().unwrap();
    rp.compare_values(2.0, d.region_count as f64, 0.0);
    let larger = Box::new_unchecked(50, 50, 20, 20);
    rp.check("larger stroke wins", d.bounding_box == larger);

    // --- Test 4: equal strokes, the first in raster order dominates ---
    let mut canvas = Canvas::new(100, 100).unwrap();
    canvas.fill_rect(10, 60, 10, 10).fill_rect(60, 10, 10, 10);
    let d = extract_shape(canvas.mask()).unwrap().unwrap();
    rp.check("tie goes to upper stroke", d.bounding_box.x == 60);

    // --- Test 5: L shape is far from convex ---
    let mut canvas = Canvas::new(100, 100).unwrap();
    canvas.fill_rect(20, 10, 10, 80).fill_rect(20, 80, 60, 10);
    let d = extract_shape(canvas.mask()).unwrap().unwrap();
    rp.compare_values(1161.0, d.contour_area, 1.0);
    rp.check("L solidity", d.solidity > 0.35 && d.solidity < 0.45);
    let l_box = Box::new_unchecked(20, 10, 60, 80);
    rp.check("L box", d.bounding_box == l_box);

    // --- Test 6: single pixel and thin line have zero solidity ---
    let mut canvas = Canvas::new(20, 20).unwrap();
    canvas.fill_rect(5, 5, 1, 1);
    let d = extract_shape(canvas.mask()).unwrap().unwrap();
    rp.compare_values(0.0, d.solidity, 0.0);
    rp.compare_values(1.0, d.aspect_ratio, 0.0);
    rp.compare_values(1.0 / 400.0, d.coverage_ratio, 1e-12);

    let mut canvas = Canvas::new(100, 100).unwrap();
    canvas.line(10, 50, 90, 50, 1);
    let d = extract_shape(canvas.mask()).unwrap().unwrap();
    rp.compare_values(0.0, d.solidity, 0.0);
    rp.compare_values(81.0, d.aspect_ratio, 1e-12);

    // --- Test 7: blank drawing has no shape ---
    let canvas = Canvas::new(50, 50).unwrap();
    rp.check("blank", extract_shape(canvas.mask()).unwrap().is_none());

    // --- Test 8: normalized raster gives the same shape as the painted mask ---
    let mut canvas = Canvas::new(120, 90).unwrap();
    canvas
        .line(10, 80, 60, 10, 6)
        .line(60, 10, 110, 80, 6)
        .line(35, 50, 85, 50, 6);
    let mask = normalize(canvas.raster(), &ThresholdOptions::default()).unwrap();
    rp.check(
        "normalized matches painted",
        extract_shape(&mask).unwrap() == extract_shape(canvas.mask()).unwrap(),
    );

    // --- Test 9: random scribbles stay within range ---
    for seed in 1..=20 {
        let mut canvas = Canvas::new(80, 80).unwrap();
        canvas.scribble(seed, 1 + seed as usize % 5, 3);
        if let Some(d) = extract_shape(canvas.mask()).unwrap() {
            rp.check(
                &format!("scribble {seed} ranges"),
                (0.0..=1.0).contains(&d.coverage_ratio)
                    && (0.0..=1.0).contains(&d.solidity)
                    && d.region_count >= 1
                    && d.aspect_ratio > 0.0,
            );
        }
    }

    assert!(rp.cleanup(), "shape regression test failed");
}

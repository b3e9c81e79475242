//! Pipeline regression test
//!
//! Paints drawings, encodes them as PNG and scores the bytes end to end.

use letterscore_color::ThresholdOptions;
use letterscore_grade::{
    AccuracyTier, DecodeError, Grader, Mode, ScoringPolicy, TargetSymbol, tips_for,
};
use letterscore_io::DecodeOptions;
use letterscore_test::{Canvas, RegParams};

fn png(paint: impl FnOnce(&mut Canvas)) -> Vec<u8> {
    let mut canvas = Canvas::new(100, 100).unwrap();
    paint(&mut canvas);
    canvas.to_png().unwrap()
}

#[test]
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");
    let grader = Grader::new();

    // --- Test 1: tall bar drawn for I ---
    let bar = png(|c| {
        c.fill_rect(40, 5, 20, 90);
    });
    let target = TargetSymbol::new('I', Mode::Upper);
    let result = grader.score(&bar, &target).unwrap();
    rp.compare_values(95.0, result.score as f64, 0.0);
    rp.compare_strings("I", &result.letter);
    rp.check("bar excellent", result.accuracy == AccuracyTier::Excellent);

    // The same bar for A earns no class bonus
    let target = TargetSymbol::new('A', Mode::Upper);
    let result = grader.score(&bar, &target).unwrap();
    rp.compare_values(85.0, result.score as f64, 0.0);

    // --- Test 2: ring drawn for O ---
    let ring = png(|c| {
        c.ring(20, 20, 60, 60, 10);
    });
    let target = TargetSymbol::new('O', Mode::Upper);
    let result = grader.score(&ring, &target).unwrap();
    rp.compare_values(95.0, result.score as f64, 0.0);

    // --- Test 3: j with and without its dot ---
    let dotted = png(|c| {
        c.fill_rect(45, 40, 10, 50).disc(50, 20, 6);
    });
    let target = TargetSymbol::new('j', Mode::Lower);
    let result = grader.score(&dotted, &target).unwrap();
    rp.compare_values(90.0, result.score as f64, 0.0);
    let stem = png(|c| {
        c.fill_rect(45, 40, 10, 50);
    });
    let result = grader.score(&stem, &target).unwrap();
    rp.compare_values(65.0, result.score as f64, 0.0);
    rp.check("stem fair", result.accuracy == AccuracyTier::Fair);

    // --- Test 4: blank canvas for A ---
    let blank = png(|_| {});
    let target = TargetSymbol::new('A', Mode::Upper);
    let result = grader.score(&blank, &target).unwrap();
    rp.compare_values(0.0, result.score as f64, 0.0);
    rp.check("blank tips", result.tips == tips_for(0, 'A'));

    // --- Test 5: light ink needs a looser threshold ---
    let mut canvas = Canvas::new(100, 100).unwrap();
    canvas.with_ink(150).fill_rect(40, 5, 20, 90);
    let pale = canvas.to_png().unwrap();
    let target = TargetSymbol::new('I', Mode::Upper);
    let strict = grader.score(&pale, &target).unwrap();
    rp.compare_values(0.0, strict.score as f64, 0.0);
    let loose = Grader::new().with_threshold(ThresholdOptions { threshold: 200 });
    let result = loose.score(&pale, &target).unwrap();
    rp.compare_values(95.0, result.score as f64, 0.0);

    // --- Test 6: policy loaded from JSON ---
    let policy = ScoringPolicy::from_json(r#"{ "base": 30 }"#).unwrap();
    let tuned = Grader::with_policy(policy).unwrap();
    let result = tuned.score(&bar, &target).unwrap();
    rp.compare_values(75.0, result.score as f64, 0.0);

    // --- Test 7: unreadable input is an error, never a score ---
    let target = TargetSymbol::new('A', Mode::Upper);
    rp.check(
        "garbage rejected",
        matches!(
            grader.score(b"GIF89a-not-really", &target),
            Err(DecodeError::Image(_))
        ),
    );
    rp.check(
        "truncated rejected",
        grader.score(&bar[..bar.len() / 2], &target).is_err(),
    );
    let byte_limit = DecodeOptions {
        max_bytes: 16,
        ..Default::default()
    };
    let small = Grader::new().with_decode_options(byte_limit);
    rp.check("oversized rejected", small.score(&bar, &target).is_err());
    let pixel_limit = DecodeOptions {
        max_pixels: 100,
        ..Default::default()
    };
    let tiny = Grader::new().with_decode_options(pixel_limit);
    rp.check(
        "too many pixels rejected",
        matches!(tiny.score(&bar, &target), Err(DecodeError::Image(_))),
    );

    // --- Test 8: random scribbles stay in range ---
    for seed in 1..=30 {
        let bytes = png(|c| {
            c.scribble(seed, 1 + seed as usize % 6, 1 + seed as i32 % 4);
        });
        let result = grader.score(&bytes, &target).unwrap();
        rp.check(&format!("scribble {seed} in range"), result.score <= 95);
        rp.check(
            &format!("scribble {seed} tier"),
            result.accuracy == AccuracyTier::from_score(result.score),
        );
        rp.check(&format!("scribble {seed} tips"), !result.tips.is_empty());
    }

    // --- Test 9: one grader shared across threads ---
    let expected = grader.score(&ring, &target).unwrap();
    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| grader.score(&ring, &target).unwrap()))
            .collect();
        handles.into_iter().filter_map(|h| h.join().ok()).collect()
    });
    rp.compare_values(4.0, results.len() as f64, 0.0);
    rp.check(
        "shared results agree",
        results.iter().all(|r| *r == expected),
    );

    assert!(rp.cleanup(), "pipeline regression test failed");
}

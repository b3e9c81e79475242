//! Scorer and feedback regression test
//!
//! Scores hand-built shape descriptors for the reference scenarios and
//! sweeps the feedback mapping over the whole score range.

use letterscore_core::{Box, Contour};
use letterscore_grade::{
    AccuracyTier, Feedback, HeuristicScorer, Mode, ScoreResult, ScoringPolicy, TargetSymbol,
};
use letterscore_region::ShapeDescriptor;
use letterscore_test::RegParams;

fn descriptor(coverage: f64, solidity: f64, aspect: f64, regions: usize) -> ShapeDescriptor {
    ShapeDescriptor {
        coverage_ratio: coverage,
        dominant_contour: Contour::default(),
        contour_area: 400.0 * solidity,
        hull_area: 400.0,
        solidity,
        bounding_box: Box::new_unchecked(0, 0, 20, 20),
        aspect_ratio: aspect,
        region_count: regions,
    }
}

#[test]
fn scorer_reg() {
    let mut rp = RegParams::new("scorer");
    let policy = ScoringPolicy::default();
    let scorer = HeuristicScorer::new(&policy);

    // --- Test 1: tall I ---
    let target = TargetSymbol::new('I', Mode::Upper);
    let score = scorer.score(Some(&descriptor(0.2, 0.8, 0.3, 1)), &target);
    rp.compare_values(95.0, score as f64, 0.0);
    let result = ScoreResult::new(score, &target);
    rp.check("I excellent", result.accuracy == AccuracyTier::Excellent);

    // --- Test 2: square O ---
    let target = TargetSymbol::new('O', Mode::Upper);
    let score = scorer.score(Some(&descriptor(0.3, 0.6, 1.0, 1)), &target);
    rp.compare_values(90.0, score as f64, 0.0);
    let result = ScoreResult::new(score, &target);
    rp.check("O excellent", result.accuracy == AccuracyTier::Excellent);

    // --- Test 3: dotted i ---
    let target = TargetSymbol::new('i', Mode::Lower);
    let score = scorer.score(Some(&descriptor(0.08, 0.4, 0.8, 2)), &target);
    rp.compare_values(75.0, score as f64, 0.0);
    let result = ScoreResult::new(score, &target);
    rp.check("i good", result.accuracy == AccuracyTier::Good);
    rp.compare_strings("Good work! Keep it up! 💪😊", &result.feedback);

    // --- Test 4: blank A ---
    let target = TargetSymbol::new('A', Mode::Upper);
    let score = scorer.score(None, &target);
    rp.compare_values(0.0, score as f64, 0.0);
    let result = ScoreResult::new(score, &target);
    rp.compare_strings("Keep trying! Follow the model letter! 💡", &result.feedback);
    let first_tip = "Follow the model letter 'A' more carefully";
    rp.compare_strings(first_tip, &result.tips[0]);
    let patience = "Take your time, accuracy is important!";
    rp.check("blank tips", result.tips.iter().any(|t| t == patience));

    // --- Test 5: digits and case ---
    let score = scorer.score(
        Some(&descriptor(0.2, 0.8, 0.3, 1)),
        &TargetSymbol::new('1', Mode::Number),
    );
    rp.compare_values(95.0, score as f64, 0.0);
    let score = scorer.score(
        Some(&descriptor(0.3, 0.6, 1.0, 1)),
        &TargetSymbol::new('q', Mode::Lower),
    );
    rp.compare_values(90.0, score as f64, 0.0);

    // --- Test 6: feedback over the whole range ---
    let mut prev = AccuracyTier::NeedsPractice;
    for score in 0..=95 {
        let fb = Feedback::new(score, 'B');
        rp.check(&format!("tips for {score}"), !fb.tips.is_empty());
        rp.check(&format!("tier monotonic at {score}"), fb.accuracy >= prev);
        let again = Feedback::new(score, 'B');
        rp.check(&format!("feedback stable at {score}"), fb == again);
        prev = fb.accuracy;
    }

    assert!(rp.cleanup(), "scorer regression test failed");
}

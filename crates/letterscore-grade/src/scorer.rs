//! Heuristic scorer
//!
//! Scores how plausible a drawing is as a hand-drawn character: a base
//! score, a bonus for a sensible amount of ink, a bonus for a compact
//! stroke group and the letter-class bonuses, capped at the ceiling.
//! Nothing here recognizes which character was drawn.

use crate::classes::class_bonus;
use crate::error::{GradeError, GradeResult};
use crate::policy::ScoringPolicy;
use crate::symbol::TargetSymbol;
use letterscore_region::ShapeDescriptor;
use tracing::{debug, warn};

/// Scorer bound to a policy
#[derive(Debug, Clone, Copy)]
pub struct HeuristicScorer<'a> {
    policy: &'a ScoringPolicy,
}

impl<'a> HeuristicScorer<'a> {
    /// Create a scorer using `policy`
    pub fn new(policy: &'a ScoringPolicy) -> Self {
        Self { policy }
    }

    /// Score a drawing against `target`.
    ///
    /// A blank drawing (`None`) scores 0. A malformed descriptor scores the
    /// policy's fallback and is logged, never returned.
    pub fn score(&self, shape: Option<&ShapeDescriptor>, target: &TargetSymbol) -> u32 {
        let Some(shape) = shape else {
            debug!(symbol = %target, "blank drawing");
            return 0;
        };
        match self.try_score(shape, target) {
            Ok(score) => score,
            Err(e) => {
                warn!(error = %e, fallback = self.policy.fallback, "scoring failed");
                self.policy.fallback
            }
        }
    }

    /// Score a non-blank drawing, reporting malformed measurements.
    pub fn try_score(&self, shape: &ShapeDescriptor, target: &TargetSymbol) -> GradeResult<u32> {
        check_descriptor(shape)?;

        let coverage = self.policy.coverage_bonus(shape.coverage_ratio);
        let solidity = self.policy.solidity_bonus(shape.solidity);
        let class = class_bonus(
            &self.policy.class_rules,
            target.symbol(),
            shape.aspect_ratio,
            shape.region_count,
        );
        let bonuses = [coverage, solidity, class];
        let total = bonuses
            .iter()
            .try_fold(self.policy.base, |acc, &b| acc.checked_add(b))
            .ok_or(GradeError::ScoreOverflow {
                base: self.policy.base,
                bonuses,
            })?;
        debug!(
            symbol = %target,
            base = self.policy.base,
            coverage,
            solidity,
            class,
            total,
            "score components"
        );
        Ok(total.min(self.policy.ceiling))
    }
}

fn check_descriptor(shape: &ShapeDescriptor) -> GradeResult<()> {
    let unit = |field: &'static str, value: f64| {
        if (0.0..=1.0).contains(&value) {
            Ok(())
        } else {
            Err(GradeError::MalformedDescriptor { field, value })
        }
    };
    unit("coverage_ratio", shape.coverage_ratio)?;
    unit("solidity", shape.solidity)?;

    if !(shape.aspect_ratio.is_finite() && shape.aspect_ratio > 0.0) {
        return Err(GradeError::MalformedDescriptor {
            field: "aspect_ratio",
            value: shape.aspect_ratio,
        });
    }
    for (field, value) in [
        ("contour_area", shape.contour_area),
        ("hull_area", shape.hull_area),
    ] {
        if !(value.is_finite() && value >= 0.0) {
            return Err(GradeError::MalformedDescriptor { field, value });
        }
    }
    if shape.region_count == 0 {
        return Err(GradeError::MalformedDescriptor {
            field: "region_count",
            value: 0.0,
        });
    }
    Ok(())
}

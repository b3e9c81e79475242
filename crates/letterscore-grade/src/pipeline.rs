//! Drawing-to-score pipeline
//!
//! decode → normalize → extract shape → score → feedback.
//!
//! Input that cannot be read is a [`DecodeError`]. Failures after that
//! point are recovered with the policy's fallback score so a learner
//! always gets feedback for a readable drawing.

use crate::error::{DecodeError, PolicyResult};
use crate::feedback::{AccuracyTier, Feedback};
use crate::policy::ScoringPolicy;
use crate::scorer::HeuristicScorer;
use crate::symbol::TargetSymbol;
use letterscore_color::{ThresholdOptions, normalize};
use letterscore_core::Raster;
use letterscore_io::{DecodeOptions, decode_raster_with};
use letterscore_region::{RegionResult, ShapeDescriptor, extract_shape};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Score and feedback for one drawing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    /// Score in `0..=ceiling`
    pub score: u32,
    /// Encouraging message
    pub feedback: String,
    /// The target symbol, echoed back
    pub letter: String,
    pub accuracy: AccuracyTier,
    /// Practice tips, never empty
    pub tips: Vec<String>,
}

impl ScoreResult {
    /// Attach feedback to a score for `target`
    pub fn new(score: u32, target: &TargetSymbol) -> Self {
        let Feedback {
            message,
            accuracy,
            tips,
        } = Feedback::new(score, target.symbol());
        Self {
            score,
            feedback: message,
            letter: target.to_string(),
            accuracy,
            tips,
        }
    }
}

/// Scores drawings against target symbols.
///
/// A `Grader` holds only immutable configuration, so one instance can be
/// shared by reference across threads.
#[derive(Debug, Clone, Default)]
pub struct Grader {
    policy: ScoringPolicy,
    threshold: ThresholdOptions,
    decode: DecodeOptions,
}

impl Grader {
    /// Create a grader with the default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grader with a custom policy.
    ///
    /// # Errors
    ///
    /// Returns the policy's validation error.
    pub fn with_policy(policy: ScoringPolicy) -> PolicyResult<Self> {
        policy.validate()?;
        Ok(Self {
            policy,
            ..Self::default()
        })
    }

    /// Set the ink threshold
    pub fn with_threshold(mut self, threshold: ThresholdOptions) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the decoder limits
    pub fn with_decode_options(mut self, decode: DecodeOptions) -> Self {
        self.decode = decode;
        self
    }

    /// The scoring policy in use
    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Decode `bytes` and score the drawing against `target`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the bytes are not a readable image.
    #[instrument(skip(self, bytes), fields(symbol = %target, len = bytes.len()))]
    pub fn score(&self, bytes: &[u8], target: &TargetSymbol) -> Result<ScoreResult, DecodeError> {
        let raster = decode_raster_with(bytes, &self.decode)?;
        self.score_raster(&raster, target)
    }

    /// Score an already decoded drawing against `target`.
    #[instrument(
        skip(self, raster),
        fields(symbol = %target, width = raster.width(), height = raster.height())
    )]
    pub fn score_raster(
        &self,
        raster: &Raster,
        target: &TargetSymbol,
    ) -> Result<ScoreResult, DecodeError> {
        let mask = normalize(raster, &self.threshold)?;
        let score = self.score_shape(extract_shape(&mask), target);
        let result = ScoreResult::new(score, target);
        info!(score, accuracy = %result.accuracy, "scored drawing");
        Ok(result)
    }

    /// Score the outcome of shape extraction; a failed extraction scores
    /// the policy's fallback.
    fn score_shape(
        &self,
        extracted: RegionResult<Option<ShapeDescriptor>>,
        target: &TargetSymbol,
    ) -> u32 {
        match extracted {
            Ok(shape) => HeuristicScorer::new(&self.policy).score(shape.as_ref(), target),
            Err(e) => {
                warn!(error = %e, fallback = self.policy.fallback, "shape extraction failed");
                self.policy.fallback
            }
        }
    }
}

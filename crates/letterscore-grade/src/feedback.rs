//! Feedback for learners
//!
//! Maps a score to an encouraging message, a coarse accuracy tier and a
//! list of practice tips. The message and tier use separate thresholds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse qualitative bucket of a score, ordered from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccuracyTier {
    NeedsPractice,
    Fair,
    Good,
    Excellent,
}

impl AccuracyTier {
    /// Tier for a score
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => AccuracyTier::Excellent,
            75.. => AccuracyTier::Good,
            60.. => AccuracyTier::Fair,
            _ => AccuracyTier::NeedsPractice,
        }
    }

    /// Name used on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            AccuracyTier::NeedsPractice => "needs_practice",
            AccuracyTier::Fair => "fair",
            AccuracyTier::Good => "good",
            AccuracyTier::Excellent => "excellent",
        }
    }
}

impl fmt::Display for AccuracyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encouraging message for a score
pub fn message_for(score: u32) -> &'static str {
    match score {
        90.. => "Excellent! Perfect letter! 🌟✨",
        80.. => "Great job! Very good! 👏🎉",
        70.. => "Good work! Keep it up! 💪😊",
        60.. => "Nice try! Practice a bit more! 👍",
        50.. => "Try again! You can do better! 🎯",
        _ => "Keep trying! Follow the model letter! 💡",
    }
}

/// Practice tips for a score. Never empty.
pub fn tips_for(score: u32, symbol: char) -> Vec<String> {
    let mut tips = Vec::new();
    if score < 70 {
        tips.push(format!("Follow the model letter '{symbol}' more carefully"));
        tips.push("Try to draw slower and more precisely".to_string());
    }
    if score < 50 {
        tips.push("Look at the model letter carefully before you start".to_string());
        tips.push("Take your time, accuracy is important!".to_string());
    }
    if tips.is_empty() {
        tips.push("Keep practicing and you'll get even better!".to_string());
    }
    tips
}

/// Everything a learner is told about one drawing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub message: String,
    pub accuracy: AccuracyTier,
    pub tips: Vec<String>,
}

impl Feedback {
    /// Build the feedback for `score` on a drawing of `symbol`
    pub fn new(score: u32, symbol: char) -> Self {
        Self {
            message: message_for(score).to_string(),
            accuracy: AccuracyTier::from_score(score),
            tips: tips_for(score, symbol),
        }
    }
}

//! letterscore Grade - Scoring hand-drawn letters
//!
//! This crate turns a drawing and the symbol it was meant to be into a
//! score and feedback for the learner:
//!
//! - **Target symbols** ([`symbol`]): the character plus its practice mode
//! - **Scoring policy** ([`policy`]): base score, ceiling, bands and the
//!   letter-class table, loadable from JSON
//! - **Letter classes** ([`classes`]): per-class bonuses for tall, round,
//!   wide and dotted symbols
//! - **Heuristic scorer** ([`scorer`]): combines the measurements into a score
//! - **Feedback** ([`feedback`]): messages, accuracy tiers and tips
//! - **Pipeline** ([`pipeline`]): [`Grader`] runs everything from image bytes
//!
//! # Example
//!
//! ```no_run
//! use letterscore_grade::{Grader, TargetSymbol};
//!
//! let bytes = std::fs::read("drawing.png").unwrap();
//! let target = TargetSymbol::parse("A", "upper").unwrap();
//! let result = Grader::new().score(&bytes, &target).unwrap();
//! println!("{}: {}", result.score, result.feedback);
//! ```

pub mod classes;
pub mod error;
pub mod feedback;
pub mod pipeline;
pub mod policy;
pub mod scorer;
pub mod symbol;

// Re-export error types
pub use error::{DecodeError, GradeError, GradeResult, PolicyError, PolicyResult, SymbolError};

pub use classes::{
    ClassRule, RuleCategory, ShapeCondition, SymbolMatch, class_bonus, default_rules,
};
pub use feedback::{AccuracyTier, Feedback, message_for, tips_for};
pub use pipeline::{Grader, ScoreResult};
pub use policy::{FloorBand, RangeBand, ScoringPolicy};
pub use scorer::HeuristicScorer;
pub use symbol::{Mode, TargetSymbol};

//! Scoring policy
//!
//! Every number the scorer uses lives in one immutable [`ScoringPolicy`].
//! The default reproduces the built-in scoring; a deployment can load a
//! tuned policy from JSON once at start-up. Fields missing from the JSON
//! keep their default values.

use crate::classes::{ClassRule, ShapeCondition, default_rules};
use crate::error::{PolicyError, PolicyResult};
use serde::{Deserialize, Serialize};

/// Bonus paid when a measurement lies strictly between two bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBand {
    pub low: f64,
    pub high: f64,
    pub bonus: u32,
}

impl RangeBand {
    /// Create a band over the open interval `(low, high)`
    pub const fn new(low: f64, high: f64, bonus: u32) -> Self {
        Self { low, high, bonus }
    }

    /// Check `low < value < high`
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value > self.low && value < self.high
    }
}

/// Bonus paid when a measurement is strictly above a bound
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorBand {
    pub above: f64,
    pub bonus: u32,
}

impl FloorBand {
    /// Create a band over `(above, inf)`
    pub const fn new(above: f64, bonus: u32) -> Self {
        Self { above, bonus }
    }

    /// Check `value > above`
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value > self.above
    }
}

/// Immutable scoring configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    /// Starting score for any non-blank drawing (default: 50)
    pub base: u32,

    /// Highest score ever reported (default: 95)
    pub ceiling: u32,

    /// Score reported when measuring or scoring fails internally (default: 50)
    pub fallback: u32,

    /// Coverage bands, first match wins
    pub coverage_bands: Vec<RangeBand>,

    /// Solidity bands, first match wins
    pub solidity_bands: Vec<FloorBand>,

    /// Letter-class table
    pub class_rules: Vec<ClassRule>,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            base: 50,
            ceiling: 95,
            fallback: 50,
            coverage_bands: vec![RangeBand::new(0.1, 0.5, 20), RangeBand::new(0.05, 0.7, 10)],
            solidity_bands: vec![FloorBand::new(0.7, 15), FloorBand::new(0.5, 10)],
            class_rules: default_rules(),
        }
    }
}

impl ScoringPolicy {
    /// Create the default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting score
    pub fn with_base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }

    /// Set the score ceiling
    pub fn with_ceiling(mut self, ceiling: u32) -> Self {
        self.ceiling = ceiling;
        self
    }

    /// Set the fallback score
    pub fn with_fallback(mut self, fallback: u32) -> Self {
        self.fallback = fallback;
        self
    }

    /// Replace the letter-class table
    pub fn with_class_rules(mut self, rules: Vec<ClassRule>) -> Self {
        self.class_rules = rules;
        self
    }

    /// Validate the policy
    pub fn validate(&self) -> PolicyResult<()> {
        if self.base > 100 {
            return Err(PolicyError::InvalidParameter(format!(
                "base must not exceed 100, got {}",
                self.base
            )));
        }
        if self.ceiling > 100 {
            return Err(PolicyError::InvalidParameter(format!(
                "ceiling must not exceed 100, got {}",
                self.ceiling
            )));
        }
        if self.fallback > self.ceiling {
            return Err(PolicyError::InvalidParameter(format!(
                "fallback {} exceeds ceiling {}",
                self.fallback, self.ceiling
            )));
        }
        for band in &self.coverage_bands {
            if band.low.is_nan() || band.high.is_nan() || band.low >= band.high {
                return Err(PolicyError::InvalidParameter(format!(
                    "coverage band is inverted: ({}, {})",
                    band.low, band.high
                )));
            }
        }
        for band in &self.solidity_bands {
            if !band.above.is_finite() {
                return Err(PolicyError::InvalidParameter(format!(
                    "solidity band bound must be finite, got {}",
                    band.above
                )));
            }
        }
        let oversized = self
            .coverage_bands
            .iter()
            .map(|b| b.bonus)
            .chain(self.solidity_bands.iter().map(|b| b.bonus))
            .chain(self.class_rules.iter().map(|r| r.bonus))
            .find(|&b| b > 100);
        if let Some(bonus) = oversized {
            return Err(PolicyError::InvalidParameter(format!(
                "bonus must not exceed 100, got {bonus}"
            )));
        }
        for rule in &self.class_rules {
            if let ShapeCondition::AspectBetween { min, max } = rule.condition {
                if min.is_nan() || max.is_nan() || min >= max {
                    return Err(PolicyError::InvalidParameter(format!(
                        "class rule {:?} has an inverted aspect range: ({}, {})",
                        rule.name, min, max
                    )));
                }
            }
        }
        Ok(())
    }

    /// Parse and validate a policy from JSON
    pub fn from_json(json: &str) -> PolicyResult<Self> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Serialize the policy as pretty-printed JSON
    pub fn to_json(&self) -> PolicyResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Bonus of the first coverage band containing `coverage`
    pub fn coverage_bonus(&self, coverage: f64) -> u32 {
        self.coverage_bands
            .iter()
            .find(|b| b.contains(coverage))
            .map_or(0, |b| b.bonus)
    }

    /// Bonus of the first solidity band containing `solidity`
    pub fn solidity_bonus(&self, solidity: f64) -> u32 {
        self.solidity_bands
            .iter()
            .find(|b| b.contains(solidity))
            .map_or(0, |b| b.bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ScoringPolicy::default().validate().is_ok());
    }

    #[test]
    fn test_coverage_bands_first_match() {
        let p = ScoringPolicy::default();
        assert_eq!(p.coverage_bonus(0.2), 20);
        assert_eq!(p.coverage_bonus(0.1), 10);
        assert_eq!(p.coverage_bonus(0.5), 10);
        assert_eq!(p.coverage_bonus(0.06), 10);
        assert_eq!(p.coverage_bonus(0.05), 0);
        assert_eq!(p.coverage_bonus(0.7), 0);
        assert_eq!(p.coverage_bonus(0.9), 0);
    }

    #[test]
    fn test_solidity_bands_first_match() {
        let p = ScoringPolicy::default();
        assert_eq!(p.solidity_bonus(0.9), 15);
        assert_eq!(p.solidity_bonus(0.7), 10);
        assert_eq!(p.solidity_bonus(0.6), 10);
        assert_eq!(p.solidity_bonus(0.5), 0);
        assert_eq!(p.solidity_bonus(0.0), 0);
    }

    #[test]
    fn test_validate_rejects() {
        assert!(ScoringPolicy::new().with_ceiling(101).validate().is_err());
        assert!(ScoringPolicy::new().with_fallback(96).validate().is_err());

        let mut p = ScoringPolicy::default();
        p.coverage_bands[0] = RangeBand::new(0.5, 0.1, 20);
        assert!(p.validate().is_err());

        let mut p = ScoringPolicy::default();
        p.solidity_bands[0] = FloorBand::new(f64::NAN, 15);
        assert!(p.validate().is_err());

        let mut p = ScoringPolicy::default();
        p.class_rules[1].condition = ShapeCondition::AspectBetween { min: 1.3, max: 0.7 };
        assert!(p.validate().is_err());

        assert!(ScoringPolicy::new().with_base(101).validate().is_err());
        assert!(ScoringPolicy::new().with_base(100).validate().is_ok());

        let mut p = ScoringPolicy::default();
        p.solidity_bands[1].bonus = 101;
        assert!(p.validate().is_err());

        let mut p = ScoringPolicy::default();
        p.class_rules[3].bonus = 1000;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_json_rejects_huge_bonus() {
        let json = r#"{"coverage_bands":[{"low":0.1,"high":0.5,"bonus":4294967295}]}"#;
        assert!(matches!(
            ScoringPolicy::from_json(json),
            Err(PolicyError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_json_partial_override() {
        let p = ScoringPolicy::from_json(r#"{ "base": 40, "ceiling": 90 }"#).unwrap();
        assert_eq!(p.base, 40);
        assert_eq!(p.ceiling, 90);
        assert_eq!(p.fallback, 50);
        assert_eq!(p.class_rules, default_rules());
    }

    #[test]
    fn test_json_rejects_invalid() {
        assert!(matches!(
            ScoringPolicy::from_json(r#"{ "ceiling": 120 }"#),
            Err(PolicyError::InvalidParameter(_))
        ));
        assert!(matches!(
            ScoringPolicy::from_json("not json"),
            Err(PolicyError::Json(_))
        ));
    }

    #[test]
    fn test_json_keeps_policy() {
        let p = ScoringPolicy::default();
        let json = p.to_json().unwrap();
        assert!(json.contains("\"case_insensitive\""));
        assert_eq!(ScoringPolicy::from_json(&json).unwrap(), p);
    }
}

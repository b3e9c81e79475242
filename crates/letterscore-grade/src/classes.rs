//! Letter-class adjustments
//!
//! Some symbols have a shape the generic measurements miss: tall strokes
//! (I, L, T, 1), round bowls (O, Q, C, D, 0), wide zigzags (M, W) and
//! dotted letters (i, j). Each class is one [`ClassRule`] in an ordered
//! table.
//!
//! Rules are grouped by [`RuleCategory`]. Within a category only the first
//! rule whose symbols accept the target is consulted; its condition alone
//! decides whether the bonus is paid. Categories add up independently.

use serde::{Deserialize, Serialize};

/// Independent group of class rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    /// Overall proportions of the dominant stroke group
    Shape,
    /// Separate dot over the stem
    Dot,
}

/// Which target symbols a rule applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolMatch {
    /// Matches when the uppercase forms agree
    CaseInsensitive(Vec<char>),
    /// Matches the listed characters only
    Exact(Vec<char>),
}

impl SymbolMatch {
    /// Check whether `symbol` is accepted
    pub fn matches(&self, symbol: char) -> bool {
        match self {
            SymbolMatch::CaseInsensitive(list) => list
                .iter()
                .any(|c| c.to_uppercase().eq(symbol.to_uppercase())),
            SymbolMatch::Exact(list) => list.contains(&symbol),
        }
    }
}

/// Geometric test a drawing must pass to earn a rule's bonus
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeCondition {
    /// `aspect < max`
    AspectBelow { max: f64 },
    /// `min < aspect < max`
    AspectBetween { min: f64, max: f64 },
    /// `aspect > min`
    AspectAbove { min: f64 },
    /// `region_count > min`
    RegionsAbove { min: usize },
}

impl ShapeCondition {
    /// Evaluate against the measured aspect ratio and region count
    pub fn holds(&self, aspect_ratio: f64, region_count: usize) -> bool {
        match *self {
            ShapeCondition::AspectBelow { max } => aspect_ratio < max,
            ShapeCondition::AspectBetween { min, max } => aspect_ratio > min && aspect_ratio < max,
            ShapeCondition::AspectAbove { min } => aspect_ratio > min,
            ShapeCondition::RegionsAbove { min } => region_count > min,
        }
    }
}

/// One row of the letter-class table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRule {
    /// Short label used in logs
    pub name: String,
    pub category: RuleCategory,
    pub symbols: SymbolMatch,
    pub condition: ShapeCondition,
    /// Points added when the condition holds
    pub bonus: u32,
}

impl ClassRule {
    fn new(
        name: &str,
        category: RuleCategory,
        symbols: SymbolMatch,
        condition: ShapeCondition,
        bonus: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            category,
            symbols,
            condition,
            bonus,
        }
    }
}

/// The built-in letter-class table
pub fn default_rules() -> Vec<ClassRule> {
    vec![
        ClassRule::new(
            "tall",
            RuleCategory::Shape,
            SymbolMatch::CaseInsensitive(vec!['I', 'L', 'T', '1']),
            ShapeCondition::AspectBelow { max: 0.5 },
            10,
        ),
        ClassRule::new(
            "round",
            RuleCategory::Shape,
            SymbolMatch::CaseInsensitive(vec!['O', 'Q', 'C', 'D', '0']),
            ShapeCondition::AspectBetween { min: 0.7, max: 1.3 },
            10,
        ),
        ClassRule::new(
            "wide",
            RuleCategory::Shape,
            SymbolMatch::CaseInsensitive(vec!['M', 'W']),
            ShapeCondition::AspectAbove { min: 1.2 },
            10,
        ),
        ClassRule::new(
            "dotted",
            RuleCategory::Dot,
            SymbolMatch::Exact(vec!['i', 'j']),
            ShapeCondition::RegionsAbove { min: 1 },
            15,
        ),
    ]
}

/// Total class bonus for `symbol` given the drawing's measurements.
///
/// The sum saturates at `u32::MAX`.
pub fn class_bonus(
    rules: &[ClassRule],
    symbol: char,
    aspect_ratio: f64,
    region_count: usize,
) -> u32 {
    let mut consulted: Vec<RuleCategory> = Vec::new();
    let mut bonus = 0;
    for rule in rules {
        if consulted.contains(&rule.category) || !rule.symbols.matches(symbol) {
            continue;
        }
        consulted.push(rule.category);
        if rule.condition.holds(aspect_ratio, region_count) {
            bonus = rule.bonus.saturating_add(bonus);
        }
    }
    bonus
}

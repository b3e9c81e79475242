//! Target symbols
//!
//! The letter or digit a learner was asked to draw, together with the
//! practice mode it was chosen from. The mode does not change scoring.

use crate::error::SymbolError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Practice mode a symbol was chosen from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Capital letters
    #[default]
    Upper,
    /// Small letters
    Lower,
    /// Digits
    Number,
}

impl Mode {
    /// Name used on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Upper => "upper",
            Mode::Lower => "lower",
            Mode::Number => "number",
        }
    }
}

impl FromStr for Mode {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upper" => Ok(Mode::Upper),
            "lower" => Ok(Mode::Lower),
            "number" => Ok(Mode::Number),
            _ => Err(SymbolError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The symbol a drawing is scored against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetSymbol {
    symbol: char,
    mode: Mode,
}

impl TargetSymbol {
    /// Create a target from an already validated character
    pub fn new(symbol: char, mode: Mode) -> Self {
        Self { symbol, mode }
    }

    /// Parse a one-character symbol and a mode name.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError`] when `symbol` is not exactly one character or
    /// `mode` is not `upper`, `lower` or `number`.
    pub fn parse(symbol: &str, mode: &str) -> Result<Self, SymbolError> {
        let mut chars = symbol.chars();
        let first = chars.next().ok_or(SymbolError::Empty)?;
        if chars.next().is_some() {
            return Err(SymbolError::TooLong(symbol.to_string()));
        }
        Ok(Self::new(first, mode.parse()?))
    }

    /// The character to draw
    #[inline]
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// The practice mode
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }
}

impl fmt::Display for TargetSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let t = TargetSymbol::parse("A", "upper").unwrap();
        assert_eq!(t.symbol(), 'A');
        assert_eq!(t.mode(), Mode::Upper);
        let digit = TargetSymbol::parse("7", "number").unwrap();
        assert_eq!(digit.mode(), Mode::Number);
        assert_eq!(TargetSymbol::parse("é", "Lower").unwrap().symbol(), 'é');
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(TargetSymbol::parse("", "upper"), Err(SymbolError::Empty));
        assert_eq!(
            TargetSymbol::parse("AB", "upper"),
            Err(SymbolError::TooLong("AB".to_string()))
        );
        assert_eq!(
            TargetSymbol::parse("A", "cursive"),
            Err(SymbolError::UnknownMode("cursive".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(TargetSymbol::new('q', Mode::Lower).to_string(), "q");
        assert_eq!(Mode::Number.to_string(), "number");
    }
}

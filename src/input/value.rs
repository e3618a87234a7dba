// src/input/value.rs

use serde::Serialize;
use std::fmt;

const TRUE_WORDS: [&str; 3] = ["on", "yes", "true"];
const FALSE_WORDS: [&str; 3] = ["off", "no", "false"];

/// A coerced option or named-argument value.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum OptionValue {
    /// A bare flag or a boolean word.
    Bool(bool),
    /// A decimal integer.
    Int(i64),
    /// Any other decimal number.
    Float(f64),
    /// Everything else, lower-cased.
    Str(String),
}

impl OptionValue {
    /// Coerces a raw token.
    ///
    /// Numbers pass through untouched. Anything else is lower-cased, then
    /// `on`/`yes`/`true` and `off`/`no`/`false` become booleans.
    pub fn coerce(raw: &str) -> Self {
        if let Some(number) = parse_numeric(raw) {
            return number;
        }

        let lowered = raw.to_lowercase();
        if TRUE_WORDS.contains(&lowered.as_str()) {
            Self::Bool(true)
        } else if FALSE_WORDS.contains(&lowered.as_str()) {
            Self::Bool(false)
        } else {
            Self::Str(lowered)
        }
    }

    /// The boolean, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer, if this is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The string, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// Accepts decimal integers and floats with an optional sign and exponent.
/// `inf`, `nan` and hex literals are strings, not numbers.
fn parse_numeric(raw: &str) -> Option<OptionValue> {
    let trimmed = raw.trim();
    let body = trimmed.trim_start_matches(['+', '-']);
    if body.is_empty() || !body.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    if !body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return None;
    }

    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(OptionValue::Int(n));
    }
    trimmed.parse::<f64>().ok().map(OptionValue::Float)
}

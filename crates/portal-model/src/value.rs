//! Scalar values held in text bags and generic rows.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A loosely-typed scalar: either free text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Number(f64),
    Text(String),
}

impl ScalarValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// True for empty or whitespace-only text. Numbers are never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Truthiness used when picking the first usable imported value:
    /// empty text and zero are skipped.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Converts a JSON scalar. Nulls yield `None`; nested values are kept
    /// as their compact JSON text.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => None,
            serde_json::Value::Bool(flag) => Some(Self::Text(flag.to_string())),
            serde_json::Value::Number(n) => n.as_f64().map(Self::Number),
            serde_json::Value::String(s) => Some(Self::Text(s.clone())),
            other => Some(Self::Text(other.to_string())),
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for ScalarValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Integral values render without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_render_without_trailing_zero() {
        assert_eq!(ScalarValue::Number(10.0).to_string(), "10");
        assert_eq!(ScalarValue::Number(7.25).to_string(), "7.25");
    }

    #[test]
    fn blank_and_truthy_differ_for_zero() {
        let zero = ScalarValue::Number(0.0);
        assert!(!zero.is_blank());
        assert!(!zero.is_truthy());
        assert!(ScalarValue::text("  ").is_blank());
        assert!(ScalarValue::text("  ").is_truthy());
    }

    #[test]
    fn json_scalars_convert() {
        assert_eq!(ScalarValue::from_json(&serde_json::Value::Null), None);
        assert_eq!(
            ScalarValue::from_json(&serde_json::json!(12)),
            Some(ScalarValue::Number(12.0))
        );
        assert_eq!(
            ScalarValue::from_json(&serde_json::json!(true)),
            Some(ScalarValue::text("true"))
        );
    }
}

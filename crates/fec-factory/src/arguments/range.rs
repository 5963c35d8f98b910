//! Semantic types and range validators

use std::fmt;

/// Semantic type of an option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentType {
    Integer,
    Real,
    Text,
    /// Opaque file or folder path, never resolved here
    Path,
    Boolean,
}

impl ArgumentType {
    /// Short name used in documentation and in parse failures.
    pub fn name(&self) -> &'static str {
        match self {
            ArgumentType::Integer => "integer",
            ArgumentType::Real => "real",
            ArgumentType::Text => "text",
            ArgumentType::Path => "path",
            ArgumentType::Boolean => "boolean",
        }
    }

    /// Parse raw text as this type. The error is the name of the type.
    pub fn parse(&self, raw: &str) -> Result<Value, &'static str> {
        let raw = raw.trim();
        match self {
            ArgumentType::Integer => raw.parse().map(Value::Integer).map_err(|_| self.name()),
            ArgumentType::Real => match raw.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Value::Real(v)),
                _ => Err(self.name()),
            },
            ArgumentType::Text | ArgumentType::Path => Ok(Value::Text(raw.to_string())),
            ArgumentType::Boolean => match raw.to_ascii_lowercase().as_str() {
                "" | "true" | "yes" | "on" | "1" => Ok(Value::Boolean(true)),
                "false" | "no" | "off" | "0" => Ok(Value::Boolean(false)),
                _ => Err(self.name()),
            },
        }
    }
}

/// A parsed option value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Real(f64),
    Text(String),
    Boolean(bool),
}

/// A primitive constraint. Ranges attached to one option form a conjunction.
///
/// A range that does not apply to the value's type accepts it.
#[derive(Debug, Clone)]
pub enum Range {
    /// `>= 0`
    Positive,
    /// `!= 0`
    NonZero,
    /// Value must be one of the listed words
    Including(Vec<String>),
    /// Named predicate over integer values
    Function {
        label: &'static str,
        check: fn(i64) -> bool,
    },
}

impl Range {
    pub fn function(label: &'static str, check: fn(i64) -> bool) -> Self {
        Range::Function { label, check }
    }

    pub fn including<S: AsRef<str>>(values: &[S]) -> Self {
        Range::Including(values.iter().map(|v| v.as_ref().to_string()).collect())
    }

    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Range::Positive, Value::Integer(v)) => *v >= 0,
            (Range::Positive, Value::Real(v)) => *v >= 0.0,
            (Range::NonZero, Value::Integer(v)) => *v != 0,
            (Range::NonZero, Value::Real(v)) => *v != 0.0,
            (Range::Including(set), Value::Text(v)) => set.iter().any(|s| s == v),
            (Range::Function { check, .. }, Value::Integer(v)) => check(*v),
            _ => true,
        }
    }

    /// Rule text reported when the range rejects a value.
    pub fn rule(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Range::Positive => write!(f, "positive"),
            Range::NonZero => write!(f, "non-zero"),
            Range::Including(set) => write!(f, "one of {{{}}}", set.join(", ")),
            Range::Function { label, .. } => write!(f, "{label}"),
        }
    }
}

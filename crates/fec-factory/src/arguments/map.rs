//! Argument map: option descriptors plus the raw values given for them

use std::collections::HashMap;
use std::fmt;

use tracing::warn;

use super::key::ArgumentKey;
use super::range::{ArgumentType, Range, Value};
use crate::error::ValidationError;

/// Descriptor of one option.
#[derive(Debug, Clone)]
pub struct ArgumentInfo {
    /// Semantic type
    pub kind: ArgumentType,
    /// Conjunction of constraints
    pub ranges: Vec<Range>,
    /// One-line documentation
    pub doc: String,
    /// A value must be given before `store`
    pub required: bool,
    /// Default value rendered as text
    pub default: Option<String>,
}

impl ArgumentInfo {
    pub fn new(kind: ArgumentType, doc: &str) -> Self {
        Self {
            kind,
            ranges: Vec::new(),
            doc: doc.to_string(),
            required: false,
            default: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_ranges(mut self, ranges: impl IntoIterator<Item = Range>) -> Self {
        self.ranges.extend(ranges);
        self
    }

    pub fn with_default(mut self, default: impl ToString) -> Self {
        self.default = Some(default.to_string());
        self
    }

    /// Allowed words, if the option is restricted to a set.
    pub fn choices(&self) -> Vec<&str> {
        self.ranges
            .iter()
            .filter_map(|r| match r {
                Range::Including(set) => Some(set.iter().map(String::as_str)),
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// Check an already parsed value against every range.
    pub fn validate(&self, option: &str, value: &Value, raw: &str) -> Result<(), ValidationError> {
        match self.ranges.iter().find(|r| !r.accepts(value)) {
            Some(range) => Err(ValidationError::new(option, range.rule(), raw)),
            None => Ok(()),
        }
    }

    /// Parse `raw` with the declared type, then validate it.
    pub fn check(&self, option: &str, raw: &str) -> Result<Value, ValidationError> {
        let value = self
            .kind
            .parse(raw)
            .map_err(|ty| ValidationError::new(option, ty, raw))?;
        self.validate(option, &value, raw)?;
        Ok(value)
    }
}

/// Ordered option descriptors and the raw textual values set for them.
///
/// Descriptors keep their declaration order, so base-family options come
/// before derived ones. Values are keyed by the long option name; lookups
/// accept the long name or the short alias.
#[derive(Debug, Clone, Default)]
pub struct ArgumentMap {
    entries: Vec<(ArgumentKey, ArgumentInfo)>,
    values: HashMap<String, String>,
}

impl ArgumentMap {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------------
    // Descriptors
    // ---------------------------------------------------------------------

    /// Declare an option. A descriptor with the same long name is replaced
    /// in place.
    pub fn add(&mut self, key: ArgumentKey, info: ArgumentInfo) {
        match self.entries.iter().position(|(k, _)| k.long == key.long) {
            Some(i) => self.entries[i] = (key, info),
            None => self.entries.push((key, info)),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(k, _)| k.long == name)
            .or_else(|| self.entries.iter().position(|(k, _)| k.matches(name)))
    }

    pub fn key(&self, name: &str) -> Option<&ArgumentKey> {
        self.position(name).map(|i| &self.entries[i].0)
    }

    pub fn info(&self, name: &str) -> Option<&ArgumentInfo> {
        self.position(name).map(|i| &self.entries[i].1)
    }

    pub fn info_mut(&mut self, name: &str) -> Option<&mut ArgumentInfo> {
        self.position(name).map(move |i| &mut self.entries[i].1)
    }

    /// Attach extra ranges to a declared option.
    pub fn add_ranges(&mut self, name: &str, ranges: impl IntoIterator<Item = Range>) {
        match self.info_mut(name) {
            Some(info) => info.ranges.extend(ranges),
            None => warn!(option = name, "ranges added to an undeclared option"),
        }
    }

    /// Extend the allowed set of a declared option.
    pub fn add_options(&mut self, name: &str, values: &[&str]) {
        let Some(info) = self.info_mut(name) else {
            warn!(option = name, "choices added to an undeclared option");
            return;
        };
        if !info.ranges.iter().any(|r| matches!(r, Range::Including(_))) {
            info.ranges.push(Range::Including(Vec::new()));
        }
        for range in info.ranges.iter_mut() {
            if let Range::Including(set) = range {
                for value in values {
                    if !set.iter().any(|s| s == value) {
                        set.push(value.to_string());
                    }
                }
                break;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ArgumentKey, &ArgumentInfo)> {
        self.entries.iter().map(|(k, i)| (k, i))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every declared default satisfies its own constraints.
    pub fn check_defaults(&self) -> Result<(), ValidationError> {
        for (key, info) in &self.entries {
            if let Some(default) = &info.default {
                info.check(&key.long, default)?;
            }
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Values
    // ---------------------------------------------------------------------

    fn long_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.key(name).map(|k| k.long.as_str()).unwrap_or(name)
    }

    /// Set the raw value of an option. Short aliases resolve to the long name
    /// of the first matching descriptor.
    pub fn set(&mut self, name: &str, raw: impl Into<String>) {
        let long = self.long_name(name).to_string();
        self.values.insert(long, raw.into());
    }

    pub fn unset(&mut self, name: &str) -> Option<String> {
        let long = self.long_name(name).to_string();
        self.values.remove(&long)
    }

    /// Set every option that declares a default to exactly that default.
    pub fn set_defaults(&mut self) {
        for (key, info) in &self.entries {
            if let Some(default) = &info.default {
                self.values.insert(key.long.clone(), default.clone());
            }
        }
    }

    pub fn clear_values(&mut self) {
        self.values.clear();
    }

    pub fn exist(&self, name: &str) -> bool {
        self.raw(name).is_some()
    }

    pub fn raw(&self, name: &str) -> Option<&str> {
        self.values.get(self.long_name(name)).map(String::as_str)
    }

    fn checked(&self, name: &str, kind: ArgumentType) -> Result<Option<Value>, ValidationError> {
        let option = self.long_name(name);
        let info = self.info(name);
        let Some(raw) = self.raw(name) else {
            return match info {
                Some(info) if info.required => Err(ValidationError::missing(option)),
                _ => Ok(None),
            };
        };
        let value = kind
            .parse(raw)
            .map_err(|ty| ValidationError::new(option, ty, raw))?;
        if let Some(info) = info {
            info.validate(option, &value, raw)?;
        }
        Ok(Some(value))
    }

    /// Read an integer option. `Ok(None)` when the option was not given.
    pub fn to_int(&self, name: &str) -> Result<Option<i64>, ValidationError> {
        Ok(match self.checked(name, ArgumentType::Integer)? {
            Some(Value::Integer(v)) => Some(v),
            _ => None,
        })
    }

    /// Read an integer option that must fit a `usize`.
    pub fn to_usize(&self, name: &str) -> Result<Option<usize>, ValidationError> {
        self.to_int(name)?
            .map(|v| {
                usize::try_from(v).map_err(|_| {
                    ValidationError::new(self.long_name(name), "unsigned integer", v.to_string())
                })
            })
            .transpose()
    }

    /// Read an integer option that must fit a `u64`.
    pub fn to_u64(&self, name: &str) -> Result<Option<u64>, ValidationError> {
        self.to_int(name)?
            .map(|v| {
                u64::try_from(v).map_err(|_| {
                    ValidationError::new(self.long_name(name), "unsigned integer", v.to_string())
                })
            })
            .transpose()
    }

    pub fn to_float(&self, name: &str) -> Result<Option<f64>, ValidationError> {
        Ok(match self.checked(name, ArgumentType::Real)? {
            Some(Value::Real(v)) => Some(v),
            _ => None,
        })
    }

    pub fn to_text(&self, name: &str) -> Result<Option<String>, ValidationError> {
        Ok(match self.checked(name, ArgumentType::Text)? {
            Some(Value::Text(v)) => Some(v),
            _ => None,
        })
    }

    pub fn to_bool(&self, name: &str) -> Result<Option<bool>, ValidationError> {
        Ok(match self.checked(name, ArgumentType::Boolean)? {
            Some(Value::Boolean(v)) => Some(v),
            _ => None,
        })
    }
}

impl fmt::Display for ArgumentMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, info) in &self.entries {
            write!(f, "{key} <{}", info.kind.name())?;
            for range in &info.ranges {
                write!(f, ":{range}")?;
            }
            write!(f, ">")?;
            if info.required {
                write!(f, " {{REQUIRED}}")?;
            }
            writeln!(f)?;
            write!(f, "    {}", info.doc)?;
            if let Some(default) = &info.default {
                write!(f, " (default: {default})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

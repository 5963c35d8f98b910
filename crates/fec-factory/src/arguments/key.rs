//! Option identities

use std::fmt;

/// Identity of an option: a namespaced long name plus an optional short alias.
///
/// ```rust
/// use fec_factory::arguments::ArgumentKey;
///
/// let key = ArgumentKey::new("enc", "cw-size").with_short("N");
/// assert_eq!(key.long, "enc-cw-size");
/// assert!(key.matches("N"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArgumentKey {
    /// `prefix-name`
    pub long: String,
    /// Single-token alias such as `K` or `N`
    pub short: Option<String>,
}

impl ArgumentKey {
    pub fn new(prefix: &str, name: &str) -> Self {
        let long = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}-{name}")
        };
        Self { long, short: None }
    }

    pub fn with_short(mut self, short: &str) -> Self {
        self.short = Some(short.to_string());
        self
    }

    /// Matches either the long name or the short alias.
    pub fn matches(&self, name: &str) -> bool {
        self.long == name || self.short.as_deref() == Some(name)
    }
}

impl fmt::Display for ArgumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.short {
            Some(short) => write!(f, "--{}, -{}", self.long, short),
            None => write!(f, "--{}", self.long),
        }
    }
}

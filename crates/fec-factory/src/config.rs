//! # Configuration Files
//!
//! Option values can be kept in YAML instead of being given one by one.
//! The file holds the logging setup and a flat map of option values keyed by
//! long name (or short alias):
//!
//! ```yaml
//! log:
//!   level: debug
//!   format: compact
//!
//! arguments:
//!   enc-info-bits: 120
//!   enc-cw-size: 127
//!   enc-type: BCH
//!   fb-sigma: 0.5
//! ```
//!
//! Configuration is loaded from the first file found:
//! 1. Path given by the `FEC_FACTORY_CONFIG` environment variable
//! 2. `./fec-factory.yaml`
//!
//! Values are written into an [`ArgumentMap`] as raw text by
//! [`FactoryConfig::apply`]; they are validated later by `store`, like any
//! other value.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use thiserror::Error;
use tracing::debug;

use crate::arguments::ArgumentMap;
use crate::logging::LogConfig;

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "FEC_FACTORY_CONFIG";

/// Error type for configuration files.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Option values must be scalars
    #[error("invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Contents of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    pub log: LogConfig,
    /// Raw option values, keyed by long name or short alias
    pub arguments: BTreeMap<String, Value>,
}

impl FactoryConfig {
    /// Load from `FEC_FACTORY_CONFIG`, then `./fec-factory.yaml`.
    ///
    /// Returns the default configuration if no file is found.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        let local = Path::new("./fec-factory.yaml");
        if local.exists() {
            return Self::load_from(local);
        }
        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading configuration");
        Self::parse(&content)
    }

    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write every option value into `args` as raw text.
    ///
    /// Descriptors should already be declared so that short aliases resolve.
    /// A null value stands for a flag given without a value.
    pub fn apply(&self, args: &mut ArgumentMap) -> Result<(), ConfigError> {
        for (key, value) in &self.arguments {
            let raw = match value {
                Value::Null => String::new(),
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::String(s) => s.clone(),
                Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => {
                    return Err(ConfigError::InvalidValue {
                        key: key.clone(),
                        reason: "expected a scalar".to_string(),
                    })
                }
            };
            args.set(key, raw);
        }
        debug!(count = self.arguments.len(), "configuration values applied");
        Ok(())
    }
}

//! Factory error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type for factory operations
pub type FactoryResult<T> = Result<T, FactoryError>;

/// Result type for module and collaborator operations
pub type CodecResult<T> = Result<T, CodecError>;

/// A stored option value broke one of its declared rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid value '{value}' for option '--{option}': {rule}")]
pub struct ValidationError {
    /// Namespaced long name of the option (e.g. `enc-cw-size`)
    pub option: String,
    /// Human-readable name of the violated rule
    pub rule: String,
    /// Raw text that was rejected (empty when the option is missing)
    pub value: String,
}

impl ValidationError {
    pub fn new(option: impl Into<String>, rule: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            option: option.into(),
            rule: rule.into(),
            value: value.into(),
        }
    }

    /// A required option was not given a value.
    pub fn missing(option: impl Into<String>) -> Self {
        Self::new(option, "required", "")
    }
}

/// Errors returned by `store` and `build`.
#[derive(Error, Debug)]
pub enum FactoryError {
    /// An option value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The type tag does not name a known implementation of the family
    #[error("unsupported {family} type '{tag}'")]
    UnsupportedVariant { family: &'static str, tag: String },

    /// The constructed module rejected the validated parameters
    #[error("module construction failed: {0}")]
    Module(#[from] CodecError),
}

impl FactoryError {
    /// Name of the offending option, if this is a validation failure.
    pub fn option(&self) -> Option<&str> {
        match self {
            FactoryError::Validation(e) => Some(&e.option),
            _ => None,
        }
    }

    /// Check if this error comes from configuration rather than from data
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            FactoryError::Validation(_) | FactoryError::UnsupportedVariant { .. }
        )
    }
}

/// Errors raised by encoders, polynomial generators and frozen-bit generators.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Code dimensions are inconsistent
    #[error("invalid code dimensions: K = {k}, N = {n}")]
    InvalidDimensions { k: usize, n: usize },

    /// `N × n_frames` does not fit in a buffer length
    #[error("frame count {n_frames} overflows the buffer size for N = {n}")]
    FrameCountOverflow { n: usize, n_frames: usize },

    /// Redundancy of the code does not match the generator polynomial
    #[error("'N - K' ({redundancy}) is different from the generator polynomial degree ({degree})")]
    RedundancyMismatch { redundancy: usize, degree: usize },

    /// Codeword size does not match the one of the Galois field
    #[error("codeword size mismatch: N = {n}, Galois field has {field_n} elements")]
    FieldSizeMismatch { n: usize, field_n: usize },

    /// No BCH code exists for the requested length and correction power
    #[error("unsupported BCH code: N = {n}, t = {t}")]
    UnsupportedCode { n: usize, t: usize },

    /// Codeword size must be a power of two for this construction
    #[error("codeword size {0} is not a power of 2")]
    NotPowerOfTwo(usize),

    /// Frame buffer size mismatch
    #[error("buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// The noise level needed by the generator was never set
    #[error("noise level (sigma) is not set")]
    NoiseUnset,

    /// A frozen-bit table could not be used
    #[error("frozen bits file '{}': {reason}", path.display())]
    FrozenbitsFile { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_rule() {
        let err = ValidationError::new("enc-cw-size", "power of 2 minus 1", "100");
        let msg = err.to_string();
        assert!(msg.contains("power of 2 minus 1"));
        assert!(msg.contains("enc-cw-size"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn test_missing_is_required_rule() {
        let err = ValidationError::missing("fb-info-bits");
        assert_eq!(err.rule, "required");
        assert!(err.value.is_empty());
    }

    #[test]
    fn test_factory_error_classification() {
        let err: FactoryError = ValidationError::missing("enc-info-bits").into();
        assert_eq!(err.option(), Some("enc-info-bits"));
        assert!(err.is_configuration_error());

        let err = FactoryError::UnsupportedVariant {
            family: "Encoder BCH",
            tag: "NOPE".to_string(),
        };
        assert!(err.to_string().contains("NOPE"));
        assert!(err.option().is_none());

        let err: FactoryError = CodecError::NoiseUnset.into();
        assert!(!err.is_configuration_error());
    }
}

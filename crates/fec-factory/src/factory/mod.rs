//! Parameter objects and builders
//!
//! Each module family owns a parameter object that:
//!
//! 1. describes its options into an [`ArgumentMap`] (`get_description`),
//! 2. reads them back, applying every validator (`store`),
//! 3. reports its effective values (`get_headers`),
//! 4. builds the implementation selected by its type tag (`build`).
//!
//! Derived families embed their base family by value and always delegate to
//! it first, so base options and headers come before derived ones.
//!
//! ```text
//! FactoryParams ─┬─ EncoderParams ── BchEncoderParams
//!                └─ FrozenbitsMkParams
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fec_factory::arguments::ArgumentMap;
//! use fec_factory::factory::{BchEncoderParams, Parameters};
//! use fec_factory::module::Encoder;
//! use fec_factory::tools::BchPolynomialGenerator;
//!
//! let mut params = BchEncoderParams::default();
//! let mut args = ArgumentMap::new();
//! params.get_description(&mut args);
//!
//! args.set("K", "120");
//! args.set("N", "127");
//! params.store(&args).unwrap();
//!
//! let gf = BchPolynomialGenerator::new(127, 1).unwrap();
//! let encoder = params.build::<i32>(&gf).unwrap();
//! assert_eq!((encoder.k(), encoder.n()), (120, 127));
//! ```

pub mod encoder;
pub mod encoder_bch;
pub mod frozenbits_mk;
pub mod headers;

pub use encoder::{EncoderKind, EncoderParams};
pub use encoder_bch::{BchEncoderKind, BchEncoderParams};
pub use frozenbits_mk::{FrozenbitsKind, FrozenbitsMkParams};
pub use headers::Headers;

use crate::arguments::{ArgumentKey, ArgumentMap};
use crate::error::{FactoryError, FactoryResult};

/// Behavior shared by every parameter object.
pub trait Parameters: Send + Sync {
    /// Family display name, also the section name in [`Headers`]
    fn name(&self) -> &str;

    /// Option namespace
    fn prefix(&self) -> &str;

    /// Declare this family's options (base family first).
    fn get_description(&self, args: &mut ArgumentMap);

    /// Read and validate this family's options (base family first).
    ///
    /// Not transactional: fields stored before a failing option keep their
    /// new values.
    fn store(&mut self, args: &ArgumentMap) -> FactoryResult<()>;

    /// Append effective values as key/value pairs (base family first).
    /// `full == false` leaves out secondary entries.
    fn get_headers(&self, headers: &mut Headers, full: bool);
}

/// Closed set of implementations a family can build.
pub trait VariantTag: Sized + Copy + 'static {
    /// Family name reported in [`FactoryError::UnsupportedVariant`]
    const FAMILY: &'static str;

    /// Every variant, in documentation order
    const ALL: &'static [Self];

    /// Type tag as written in the configuration
    fn tag(self) -> &'static str;

    fn from_tag(tag: &str) -> FactoryResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.tag() == tag)
            .ok_or_else(|| FactoryError::UnsupportedVariant {
                family: Self::FAMILY,
                tag: tag.to_string(),
            })
    }

    fn tags() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.tag()).collect()
    }
}

/// Root of every family: identity and option namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryParams {
    name: String,
    prefix: String,
}

impl FactoryParams {
    pub fn new(name: &str, prefix: &str) -> Self {
        Self {
            name: name.to_string(),
            prefix: prefix.to_string(),
        }
    }

    /// Key of an option in this family's namespace
    pub fn key(&self, option: &str) -> ArgumentKey {
        ArgumentKey::new(&self.prefix, option)
    }

    /// Long name of an option in this family's namespace
    pub fn arg(&self, option: &str) -> String {
        self.key(option).long
    }
}

impl Parameters for FactoryParams {
    fn name(&self) -> &str {
        &self.name
    }

    fn prefix(&self) -> &str {
        &self.prefix
    }

    fn get_description(&self, _args: &mut ArgumentMap) {}

    fn store(&mut self, _args: &ArgumentMap) -> FactoryResult<()> {
        Ok(())
    }

    /// Opens the family section so that it is listed even without entries.
    fn get_headers(&self, headers: &mut Headers, _full: bool) {
        headers.section_mut(&self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_params_identity() {
        let p = FactoryParams::new("Encoder", "enc");
        assert_eq!(p.name(), "Encoder");
        assert_eq!(p.prefix(), "enc");
        assert_eq!(p.arg("cw-size"), "enc-cw-size");
    }

    #[test]
    fn test_root_headers_open_section() {
        let p = FactoryParams::new("Encoder", "enc");
        let mut headers = Headers::new();
        p.get_headers(&mut headers, true);
        assert_eq!(headers.families().collect::<Vec<_>>(), ["Encoder"]);
        assert_eq!(headers.get("Encoder").map(<[_]>::len), Some(0));
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(EncoderKind::from_tag("AZCW").unwrap(), EncoderKind::Azcw);
        let err = EncoderKind::from_tag("azcw").unwrap_err();
        assert!(matches!(
            err,
            FactoryError::UnsupportedVariant { family: "Encoder", ref tag } if tag == "azcw"
        ));
    }

    #[test]
    fn test_tags_cover_all_variants() {
        assert_eq!(EncoderKind::tags(), ["NO", "AZCW", "COSET"]);
        assert_eq!(BchEncoderKind::tags(), ["BCH"]);
        assert_eq!(FrozenbitsKind::tags(), ["FILE", "BEC"]);
    }
}

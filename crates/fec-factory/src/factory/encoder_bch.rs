//! BCH encoder family
//!
//! Extends [`EncoderParams`] (same `enc` namespace):
//!
//! - `enc-cw-size` must also be a power of 2 minus 1 (`N = 2^m - 1`),
//! - `enc-type` accepts `BCH`, which is the default of this family,
//! - `enc-corr-pow` (`T`) is the correction power used to derive the
//!   generator polynomial with [`BchEncoderParams::polynomial_generator`].
//!
//! The generator polynomial itself is a collaborator: it is built by the
//! caller and only read during [`BchEncoderParams::build`].

use std::str::FromStr;

use tracing::debug;

use super::{EncoderParams, Headers, Parameters, VariantTag};
use crate::arguments::{ArgumentInfo, ArgumentMap, ArgumentType, Range};
use crate::error::{FactoryError, FactoryResult};
use crate::module::BchEncoder;
use crate::tools::math::{is_power_of_2_minus_1, log2_exact};
use crate::tools::BchPolynomialGenerator;
use crate::types::Bit;

/// Implementations buildable from [`BchEncoderParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BchEncoderKind {
    Bch,
}

impl VariantTag for BchEncoderKind {
    const FAMILY: &'static str = BchEncoderParams::NAME;
    const ALL: &'static [Self] = &[BchEncoderKind::Bch];

    fn tag(self) -> &'static str {
        match self {
            BchEncoderKind::Bch => "BCH",
        }
    }
}

impl FromStr for BchEncoderKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

/// BCH encoder parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct BchEncoderParams {
    pub encoder: EncoderParams,
    /// Correction power
    pub t: usize,
}

impl BchEncoderParams {
    pub const NAME: &'static str = "Encoder BCH";
    pub const PREFIX: &'static str = EncoderParams::PREFIX;

    pub fn new(prefix: &str) -> Self {
        let mut encoder = EncoderParams::with_name(Self::NAME, prefix);
        encoder.kind = BchEncoderKind::Bch.tag().to_string();
        Self { encoder, t: 5 }
    }

    /// Galois field order `m` such that `N = 2^m - 1`, once `N` is known.
    pub fn field_order(&self) -> Option<u32> {
        match self.encoder.n_cw {
            0 => None,
            n => log2_exact(n.checked_add(1)?),
        }
    }

    /// Generator polynomial for the stored `N` and `t`.
    pub fn polynomial_generator(&self) -> FactoryResult<BchPolynomialGenerator> {
        Ok(BchPolynomialGenerator::new(self.encoder.n_cw, self.t)?)
    }

    /// Build the encoder selected by `kind`. `gf` is only read.
    pub fn build<B: Bit>(&self, gf: &BchPolynomialGenerator) -> FactoryResult<BchEncoder<B>> {
        let kind: BchEncoderKind = self.encoder.kind.parse()?;
        let enc = &self.encoder;
        debug!(
            family = self.name(),
            tag = kind.tag(),
            width = B::WIDTH,
            k = enc.k,
            n = enc.n_cw,
            "building encoder"
        );
        match kind {
            BchEncoderKind::Bch => Ok(BchEncoder::new(enc.k, enc.n_cw, gf, enc.n_frames)?),
        }
    }
}

impl Default for BchEncoderParams {
    fn default() -> Self {
        Self::new(Self::PREFIX)
    }
}

impl Parameters for BchEncoderParams {
    fn name(&self) -> &str {
        self.encoder.name()
    }

    fn prefix(&self) -> &str {
        self.encoder.prefix()
    }

    fn get_description(&self, args: &mut ArgumentMap) {
        self.encoder.get_description(args);
        let p = &self.encoder.base;

        args.add_ranges(
            &p.arg("cw-size"),
            [Range::function("power of 2 minus 1", is_power_of_2_minus_1)],
        );
        args.add_options(&p.arg("type"), &BchEncoderKind::tags());

        args.add(
            p.key("corr-pow").with_short("T"),
            ArgumentInfo::new(ArgumentType::Integer, "correction power of the BCH code.")
                .with_ranges([Range::Positive, Range::NonZero])
                .with_default(self.t),
        );
    }

    fn store(&mut self, args: &ArgumentMap) -> FactoryResult<()> {
        self.encoder.store(args)?;

        if let Some(t) = args.to_usize(&self.encoder.base.arg("corr-pow"))? {
            self.t = t;
        }

        debug!(family = self.name(), t = self.t, "BCH parameters stored");
        Ok(())
    }

    fn get_headers(&self, headers: &mut Headers, full: bool) {
        self.encoder.get_headers(headers, full);
        let family = self.name();

        headers.push(family, "Correction power (T)", self.t);
        if let Some(m) = self.field_order() {
            headers.push(family, "Galois field order (m)", m);
        }
    }
}

/// Free-function form of [`BchEncoderParams::build`].
pub fn build<B: Bit>(
    params: &BchEncoderParams,
    gf: &BchPolynomialGenerator,
) -> FactoryResult<BchEncoder<B>> {
    params.build(gf)
}

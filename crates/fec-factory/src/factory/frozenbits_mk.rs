//! Frozen-bit generator family for multi-kernel polar codes
//!
//! Options (prefix `fb` by default): `fb-info-bits`, `fb-cw-size` (both
//! required), `fb-sigma`, `fb-gen-method` in {`FILE`, `BEC`} and
//! `fb-awgn-path`. The path is never opened here; the `FILE` generator reads
//! it when frozen bits are generated.

use std::str::FromStr;

use tracing::debug;

use super::{FactoryParams, Headers, Parameters, VariantTag};
use crate::arguments::{ArgumentInfo, ArgumentMap, ArgumentType, Range};
use crate::error::{FactoryError, FactoryResult};
use crate::tools::{BecFrozenbits, FileFrozenbits, FrozenbitsGenerator};

/// Implementations buildable from [`FrozenbitsMkParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrozenbitsKind {
    File,
    Bec,
}

impl VariantTag for FrozenbitsKind {
    const FAMILY: &'static str = FrozenbitsMkParams::NAME;
    const ALL: &'static [Self] = &[FrozenbitsKind::File, FrozenbitsKind::Bec];

    fn tag(self) -> &'static str {
        match self {
            FrozenbitsKind::File => "FILE",
            FrozenbitsKind::Bec => "BEC",
        }
    }
}

impl FromStr for FrozenbitsKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

/// Frozen-bit generator parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FrozenbitsMkParams {
    pub base: FactoryParams,
    /// Generation method tag
    pub kind: String,
    pub k: usize,
    pub n_cw: usize,
    /// AWGN noise level the bits are optimized for
    pub sigma: Option<f64>,
    /// Folder or file holding the reliability orders
    pub path_fb: String,
}

impl FrozenbitsMkParams {
    pub const NAME: &'static str = "Frozen bits generator MK";
    pub const PREFIX: &'static str = "fb";
    pub const DEFAULT_PATH: &'static str = "../conf/cde/awgn_polar_mk_codes/";

    pub fn new(prefix: &str) -> Self {
        Self {
            base: FactoryParams::new(Self::NAME, prefix),
            kind: FrozenbitsKind::File.tag().to_string(),
            k: 0,
            n_cw: 0,
            sigma: None,
            path_fb: Self::DEFAULT_PATH.to_string(),
        }
    }

    /// Build the generator selected by `kind`.
    pub fn build(&self) -> FactoryResult<Box<dyn FrozenbitsGenerator>> {
        let kind: FrozenbitsKind = self.kind.parse()?;
        debug!(
            family = self.name(),
            tag = kind.tag(),
            k = self.k,
            n = self.n_cw,
            "building frozen bits generator"
        );
        Ok(match kind {
            FrozenbitsKind::File => Box::new(FileFrozenbits::new(self.k, self.n_cw, &self.path_fb)?),
            FrozenbitsKind::Bec => Box::new(BecFrozenbits::new(self.k, self.n_cw, self.sigma)?),
        })
    }
}

impl Default for FrozenbitsMkParams {
    fn default() -> Self {
        Self::new(Self::PREFIX)
    }
}

impl Parameters for FrozenbitsMkParams {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn prefix(&self) -> &str {
        self.base.prefix()
    }

    fn get_description(&self, args: &mut ArgumentMap) {
        self.base.get_description(args);
        let p = &self.base;

        let mut info_bits = ArgumentInfo::new(
            ArgumentType::Integer,
            "useful number of bit transmitted (information bits).",
        )
        .with_ranges([Range::Positive, Range::NonZero])
        .required();
        if self.k > 0 {
            info_bits = info_bits.with_default(self.k);
        }
        args.add(p.key("info-bits"), info_bits);

        let mut cw_size = ArgumentInfo::new(ArgumentType::Integer, "the codeword size.")
            .with_ranges([Range::Positive, Range::NonZero])
            .required();
        if self.n_cw > 0 {
            cw_size = cw_size.with_default(self.n_cw);
        }
        args.add(p.key("cw-size"), cw_size);

        let mut sigma = ArgumentInfo::new(
            ArgumentType::Real,
            "sigma value for the polar codes generation (adaptive frozen bits if sigma is not set).",
        )
        .with_ranges([Range::Positive, Range::NonZero]);
        if let Some(s) = self.sigma {
            sigma = sigma.with_default(s);
        }
        args.add(p.key("sigma"), sigma);

        args.add(
            p.key("gen-method"),
            ArgumentInfo::new(ArgumentType::Text, "select the frozen bits generation method.")
                .with_ranges([Range::including(&FrozenbitsKind::tags())])
                .with_default(&self.kind),
        );

        args.add(
            p.key("awgn-path"),
            ArgumentInfo::new(
                ArgumentType::Path,
                "path to a file or a directory containing the best channels to use for information bits.",
            )
            .with_default(&self.path_fb),
        );
    }

    fn store(&mut self, args: &ArgumentMap) -> FactoryResult<()> {
        self.base.store(args)?;
        let p = &self.base;

        if let Some(k) = args.to_usize(&p.arg("info-bits"))? {
            self.k = k;
        }
        if let Some(n) = args.to_usize(&p.arg("cw-size"))? {
            self.n_cw = n;
        }
        if let Some(sigma) = args.to_float(&p.arg("sigma"))? {
            self.sigma = Some(sigma);
        }
        if let Some(kind) = args.to_text(&p.arg("gen-method"))? {
            self.kind = kind;
        }
        if let Some(path) = args.to_text(&p.arg("awgn-path"))? {
            self.path_fb = path;
        }

        debug!(
            family = p.name(),
            kind = %self.kind,
            k = self.k,
            n = self.n_cw,
            sigma = ?self.sigma,
            "frozen bits parameters stored"
        );
        Ok(())
    }

    fn get_headers(&self, headers: &mut Headers, full: bool) {
        self.base.get_headers(headers, full);
        let family = self.base.name();

        headers.push(family, "Type", &self.kind);
        if self.kind == FrozenbitsKind::File.tag() {
            headers.push(family, "Path", &self.path_fb);
        }
        if full {
            if let Some(sigma) = self.sigma {
                headers.push(family, "Sigma", sigma);
            }
        }
    }
}

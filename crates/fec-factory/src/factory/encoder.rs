//! Encoder family
//!
//! Options (prefix `enc` by default):
//!
//! | Option          | Short | Type    | Constraint            | Default |
//! |-----------------|-------|---------|-----------------------|---------|
//! | `enc-info-bits` | `K`   | integer | positive, non-zero    | required|
//! | `enc-cw-size`   | `N`   | integer | positive, non-zero    | required|
//! | `enc-fra`       | `F`   | integer | positive, non-zero    | 1       |
//! | `enc-type`      |       | text    | one of NO, AZCW, COSET| NO      |
//! | `enc-seed`      | `S`   | integer | positive              | 0       |
//! | `enc-no-sys`    |       | boolean |                       | false   |

use std::str::FromStr;

use tracing::debug;

use super::{FactoryParams, Headers, Parameters, VariantTag};
use crate::arguments::{ArgumentInfo, ArgumentMap, ArgumentType, Range};
use crate::error::{FactoryError, FactoryResult};
use crate::module::{AzcwEncoder, CosetEncoder, Encoder, NoEncoder};
use crate::types::Bit;

/// Implementations buildable from [`EncoderParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderKind {
    No,
    Azcw,
    Coset,
}

impl VariantTag for EncoderKind {
    const FAMILY: &'static str = EncoderParams::NAME;
    const ALL: &'static [Self] = &[EncoderKind::No, EncoderKind::Azcw, EncoderKind::Coset];

    fn tag(self) -> &'static str {
        match self {
            EncoderKind::No => "NO",
            EncoderKind::Azcw => "AZCW",
            EncoderKind::Coset => "COSET",
        }
    }
}

impl FromStr for EncoderKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

/// Parameters shared by every encoder.
#[derive(Debug, Clone, PartialEq)]
pub struct EncoderParams {
    pub base: FactoryParams,
    /// Type tag, checked against the family at build time
    pub kind: String,
    /// Information bits per frame
    pub k: usize,
    /// Codeword size
    pub n_cw: usize,
    /// Code rate `K / N`, derived by `store`
    pub rate: f32,
    /// Inter frame level
    pub n_frames: usize,
    pub seed: u64,
    pub systematic: bool,
}

impl EncoderParams {
    pub const NAME: &'static str = "Encoder";
    pub const PREFIX: &'static str = "enc";

    pub fn new(prefix: &str) -> Self {
        Self::with_name(Self::NAME, prefix)
    }

    /// Base part of a derived family: the derived family keeps its own name.
    pub fn with_name(name: &str, prefix: &str) -> Self {
        Self {
            base: FactoryParams::new(name, prefix),
            kind: EncoderKind::No.tag().to_string(),
            k: 0,
            n_cw: 0,
            rate: 0.0,
            n_frames: 1,
            seed: 0,
            systematic: true,
        }
    }

    /// Build the encoder selected by `kind`.
    pub fn build<B: Bit>(&self) -> FactoryResult<Box<dyn Encoder<B>>> {
        let kind: EncoderKind = self.kind.parse()?;
        debug!(
            family = self.base.name(),
            tag = kind.tag(),
            width = B::WIDTH,
            k = self.k,
            n = self.n_cw,
            "building encoder"
        );
        let (k, n, n_frames) = (self.k, self.n_cw, self.n_frames);
        Ok(match kind {
            EncoderKind::No => Box::new(NoEncoder::new(k, n, n_frames)?),
            EncoderKind::Azcw => Box::new(AzcwEncoder::new(k, n, n_frames)?),
            EncoderKind::Coset => Box::new(CosetEncoder::new(k, n, self.seed, n_frames)?),
        })
    }
}

impl Default for EncoderParams {
    fn default() -> Self {
        Self::new(Self::PREFIX)
    }
}

impl Parameters for EncoderParams {
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
        args.add(p.key("info-bits").with_short("K"), info_bits);

        let mut cw_size = ArgumentInfo::new(ArgumentType::Integer, "the codeword size.")
            .with_ranges([Range::Positive, Range::NonZero])
            .required();
        if self.n_cw > 0 {
            cw_size = cw_size.with_default(self.n_cw);
        }
        args.add(p.key("cw-size").with_short("N"), cw_size);

        args.add(
            p.key("fra").with_short("F"),
            ArgumentInfo::new(
                ArgumentType::Integer,
                "set the number of inter frame level to process.",
            )
            .with_ranges([Range::Positive, Range::NonZero])
            .with_default(self.n_frames),
        );

        args.add(
            p.key("type"),
            ArgumentInfo::new(ArgumentType::Text, "type of the encoder to use in the simulation.")
                .with_ranges([Range::including(&EncoderKind::tags())])
                .with_default(&self.kind),
        );

        args.add(
            p.key("seed").with_short("S"),
            ArgumentInfo::new(
                ArgumentType::Integer,
                "seed used to initialize the pseudo random generators.",
            )
            .with_ranges([Range::Positive])
            .with_default(self.seed),
        );

        args.add(
            p.key("no-sys"),
            ArgumentInfo::new(ArgumentType::Boolean, "disable the systematic encoding.")
                .with_default(!self.systematic),
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
        if let Some(n_frames) = args.to_usize(&p.arg("fra"))? {
            self.n_frames = n_frames;
        }
        if let Some(kind) = args.to_text(&p.arg("type"))? {
            self.kind = kind;
        }
        if let Some(seed) = args.to_u64(&p.arg("seed"))? {
            self.seed = seed;
        }
        if let Some(no_sys) = args.to_bool(&p.arg("no-sys"))? {
            self.systematic = !no_sys;
        }
        if self.n_cw > 0 {
            self.rate = self.k as f32 / self.n_cw as f32;
        }

        debug!(
            family = p.name(),
            kind = %self.kind,
            k = self.k,
            n = self.n_cw,
            n_frames = self.n_frames,
            "encoder parameters stored"
        );
        Ok(())
    }

    fn get_headers(&self, headers: &mut Headers, full: bool) {
        self.base.get_headers(headers, full);
        let family = self.base.name();

        headers.push(family, "Type", &self.kind);
        if full {
            headers.push(family, "Info. bits (K)", self.k);
            headers.push(family, "Codeword size (N)", self.n_cw);
        }
        headers.push(family, "Code rate", format!("{:.6}", self.rate));
        if full {
            headers.push(family, "Inter frame level", self.n_frames);
        }
        headers.push(family, "Systematic", if self.systematic { "yes" } else { "no" });
        if self.kind == EncoderKind::Coset.tag() {
            headers.push(family, "Seed", self.seed);
        }
    }
}

/// Free-function form of [`EncoderParams::build`].
pub fn build<B: Bit>(params: &EncoderParams) -> FactoryResult<Box<dyn Encoder<B>>> {
    params.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    fn described(params: &EncoderParams) -> ArgumentMap {
        let mut args = ArgumentMap::new();
        params.get_description(&mut args);
        args
    }

    #[test]
    fn test_new_defaults() {
        let p = EncoderParams::default();
        assert_eq!(p.name(), "Encoder");
        assert_eq!(p.prefix(), "enc");
        assert_eq!(p.kind, "NO");
        assert_eq!(p.n_frames, 1);
        assert!(p.systematic);
    }

    #[test]
    fn test_description_order() {
        let args = described(&EncoderParams::default());
        let longs: Vec<_> = args.iter().map(|(k, _)| k.long.as_str()).collect();
        assert_eq!(
            longs,
            ["enc-info-bits", "enc-cw-size", "enc-fra", "enc-type", "enc-seed", "enc-no-sys"]
        );
        args.check_defaults().unwrap();
    }

    #[test]
    fn test_custom_prefix() {
        let p = EncoderParams::new("enc2");
        let mut args = described(&p);
        assert!(args.info("enc2-cw-size").is_some());
        args.set("enc2-info-bits", "4");
        args.set("enc2-cw-size", "8");
        let mut p = p;
        p.store(&args).unwrap();
        assert_eq!((p.k, p.n_cw), (4, 8));
    }

    #[test]
    fn test_store_reads_values() {
        let mut p = EncoderParams::default();
        let mut args = described(&p);
        args.set("K", "32");
        args.set("N", "64");
        args.set("F", "4");
        args.set("enc-type", "COSET");
        args.set("S", "1234");
        args.set("enc-no-sys", "");
        p.store(&args).unwrap();
        assert_eq!((p.k, p.n_cw, p.n_frames, p.seed), (32, 64, 4, 1234));
        assert_eq!(p.kind, "COSET");
        assert!(!p.systematic);
        assert_eq!(p.rate, 0.5);
    }

    #[test]
    fn test_store_without_dimensions_fails_on_required_option() {
        // K and N are required and have no default until they are set
        let mut p = EncoderParams::default();
        let mut args = described(&p);
        args.set_defaults();
        let err = p.store(&args).unwrap_err();
        assert_eq!(err.option(), Some("enc-info-bits"));
    }

    #[test]
    fn test_store_rejects_unknown_type() {
        let mut p = EncoderParams::default();
        let mut args = described(&p);
        args.set("K", "4");
        args.set("N", "8");
        args.set("enc-type", "TURBO");
        let err = p.store(&args).unwrap_err();
        assert_eq!(err.option(), Some("enc-type"));
        assert_eq!(p.kind, "NO");
    }

    #[test]
    fn test_build_each_kind() {
        let mut p = EncoderParams::default();
        p.k = 8;
        p.n_cw = 8;
        let enc = p.build::<i32>().unwrap();
        assert_eq!(enc.name(), "NO");

        p.n_cw = 16;
        p.kind = "AZCW".to_string();
        let enc = build::<i8>(&p).unwrap();
        assert_eq!((enc.name(), enc.k(), enc.n()), ("AZCW", 8, 16));

        p.kind = "COSET".to_string();
        p.n_frames = 3;
        let mut enc = p.build::<i16>().unwrap();
        let mut x_n = vec![0; 48];
        enc.encode(&[1; 24], &mut x_n).unwrap();
        assert_eq!(enc.n_frames(), 3);
    }

    #[test]
    fn test_build_unknown_kind() {
        let mut p = EncoderParams::default();
        p.k = 4;
        p.n_cw = 8;
        p.kind = "NOPE".to_string();
        match p.build::<i32>() {
            Err(FactoryError::UnsupportedVariant { family, tag }) => {
                assert_eq!(family, "Encoder");
                assert_eq!(tag, "NOPE");
            }
            other => panic!("expected UnsupportedVariant, got {:?}", other.map(|e| e.name().to_string())),
        }
    }

    #[test]
    fn test_build_propagates_module_error() {
        let mut p = EncoderParams::default();
        p.k = 4;
        p.n_cw = 8;
        let err = p.build::<i32>().map(|_| ()).unwrap_err();
        assert!(matches!(err, FactoryError::Module(_)));
        assert!(!err.is_configuration_error());
    }

    #[test]
    fn test_huge_frame_count_fails_build() {
        let mut p = EncoderParams::default();
        let mut args = described(&p);
        args.set("K", "4");
        args.set("N", "4");
        args.set("F", "4611686018427387904");
        args.set("enc-type", "NO");
        p.store(&args).unwrap();
        assert_eq!(p.n_frames, 1 << 62);

        let err = p.build::<i32>().map(|_| ()).unwrap_err();
        assert!(matches!(
            err,
            FactoryError::Module(CodecError::FrameCountOverflow { n: 4, .. })
        ));
    }

    #[test]
    fn test_headers() {
        let mut p = EncoderParams::default();
        p.k = 4;
        p.n_cw = 8;
        p.rate = 0.5;

        let mut short = Headers::new();
        p.get_headers(&mut short, false);
        let keys: Vec<_> = short.get("Encoder").unwrap().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["Type", "Code rate", "Systematic"]);

        p.kind = "COSET".to_string();
        let mut full = Headers::new();
        p.get_headers(&mut full, true);
        assert_eq!(full.value("Encoder", "Info. bits (K)"), Some("4"));
        assert_eq!(full.value("Encoder", "Code rate"), Some("0.500000"));
        assert_eq!(full.value("Encoder", "Seed"), Some("0"));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut p = EncoderParams::default();
        p.k = 4;
        let mut q = p.clone();
        assert_eq!(p, q);
        q.k = 5;
        q.kind = "AZCW".to_string();
        assert_eq!(p.k, 4);
        assert_eq!(p.kind, "NO");
    }
}

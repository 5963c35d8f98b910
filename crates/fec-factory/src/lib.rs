//! # FEC Module Factory
//!
//! Configuration and construction of forward-error-correction modules from
//! a generic map of user-supplied option values.
//!
//! ## Overview
//!
//! Every module family (encoders, BCH encoders, polar frozen-bit generators)
//! has a parameter object that:
//!
//! - **Describes** its options (types, ranges, defaults, documentation)
//! - **Stores** their values, applying every validator
//! - **Reports** its effective configuration as headers
//! - **Builds** the implementation selected by its type tag, for the bit
//!   width chosen at compile time
//!
//! ## Flow
//!
//! ```text
//! get_description → ArgumentMap ← values (CLI parser, YAML config)
//!                        ↓
//!                      store → valid parameters → build(collaborators) → module
//!                                               → get_headers → Headers
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fec_factory::prelude::*;
//!
//! let mut enc = BchEncoderParams::default();
//! let mut fb = FrozenbitsMkParams::default();
//!
//! let mut args = ArgumentMap::new();
//! enc.get_description(&mut args);
//! fb.get_description(&mut args);
//!
//! args.set("K", "120");
//! args.set("N", "127");
//! args.set("T", "1");
//! args.set("fb-info-bits", "4");
//! args.set("fb-cw-size", "8");
//! args.set("fb-gen-method", "BEC");
//! args.set("fb-sigma", "1.0");
//!
//! enc.store(&args).unwrap();
//! fb.store(&args).unwrap();
//!
//! let gf = enc.polynomial_generator().unwrap();
//! let encoder = enc.build::<B>(&gf).unwrap();
//! assert_eq!((encoder.k(), encoder.n()), (120, 127));
//!
//! let frozen = fb.build().unwrap().frozen_bits().unwrap();
//! assert_eq!(frozen.iter().filter(|&&f| f).count(), 4);
//!
//! let pipeline: [&dyn Parameters; 2] = [&enc, &fb];
//! let headers = Headers::collect(&pipeline, true);
//! assert_eq!(headers.families().count(), 2);
//! ```

pub mod arguments;
pub mod config;
pub mod error;
pub mod factory;
pub mod logging;
pub mod module;
pub mod tools;
pub mod types;

pub use error::{CodecError, FactoryError, FactoryResult, ValidationError};
pub use factory::{
    BchEncoderParams, EncoderParams, FactoryParams, FrozenbitsMkParams, Headers, Parameters,
    VariantTag,
};
pub use types::{Bit, B};

/// Prelude for common imports
pub mod prelude {
    pub use crate::arguments::{ArgumentMap, Range};
    pub use crate::config::FactoryConfig;
    pub use crate::error::{FactoryError, FactoryResult};
    pub use crate::factory::{
        BchEncoderParams, EncoderParams, FrozenbitsMkParams, Headers, Parameters, VariantTag,
    };
    pub use crate::module::Encoder;
    pub use crate::tools::{BchPolynomialGenerator, FrozenbitsGenerator};
    pub use crate::types::{Bit, B};
}

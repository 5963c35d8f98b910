//! Modules built by the factories
//!
//! - [`Encoder`] - frame-oriented encoder interface
//! - [`BchEncoder`] - systematic BCH encoder
//! - [`NoEncoder`], [`AzcwEncoder`], [`CosetEncoder`] - generic encoders

pub mod encoder;
pub mod encoder_bch;

pub use encoder::{AzcwEncoder, CosetEncoder, Encoder, NoEncoder};
pub use encoder_bch::BchEncoder;

//! Collaborators used by the builders
//!
//! These are constructed and owned by the caller; builders only borrow them
//! for the duration of one call.

pub mod bch_polynomial_generator;
pub mod frozenbits;
pub mod math;

pub use bch_polynomial_generator::BchPolynomialGenerator;
pub use frozenbits::{BecFrozenbits, FileFrozenbits, FrozenbitsGenerator};

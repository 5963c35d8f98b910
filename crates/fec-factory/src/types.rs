//! Bit representations
//!
//! Encoders carry one bit per integer element. The same code is compiled
//! for every width through the [`Bit`] trait; the width used by an
//! application is fixed once for the whole build through the [`B`] alias:
//!
//! | Feature   | `B`   |
//! |-----------|-------|
//! | `prec8`   | `i8`  |
//! | `prec16`  | `i16` |
//! | (none)    | `i32` |
//! | `prec64`  | `i64` |
//!
//! When several features are enabled the widest one wins.

use std::fmt::Debug;

/// Fixed-width integer holding a single hard bit (`0` or `1`).
pub trait Bit: Copy + Debug + Default + PartialEq + Send + Sync + 'static {
    /// Width of the representation in bits
    const WIDTH: u32;
    const ZERO: Self;
    const ONE: Self;

    fn from_bool(bit: bool) -> Self;

    /// Any non-zero value counts as a set bit.
    fn is_set(self) -> bool {
        self != Self::ZERO
    }
}

macro_rules! impl_bit {
    ($($t:ty),*) => {
        $(
            impl Bit for $t {
                const WIDTH: u32 = <$t>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn from_bool(bit: bool) -> Self {
                    bit as $t
                }
            }
        )*
    };
}

impl_bit!(i8, i16, i32, i64);

/// Bit type of this deployment
#[cfg(feature = "prec64")]
pub type B = i64;

/// Bit type of this deployment
#[cfg(all(feature = "prec16", not(feature = "prec64")))]
pub type B = i16;

/// Bit type of this deployment
#[cfg(all(feature = "prec8", not(any(feature = "prec16", feature = "prec64"))))]
pub type B = i8;

/// Bit type of this deployment
#[cfg(not(any(feature = "prec8", feature = "prec16", feature = "prec64")))]
pub type B = i32;

/// Convert a slice of booleans into bits of width `T`.
pub fn bits_from_bools<T: Bit>(bools: &[bool]) -> Vec<T> {
    bools.iter().map(|&b| T::from_bool(b)).collect()
}

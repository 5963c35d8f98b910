//! BCH encoder
//!
//! Systematic binary BCH encoder: the codeword is `[data | parity]` where the
//! parity is the remainder of `u(x)·x^(N-K)` divided by the generator
//! polynomial, computed with a linear feedback shift register. Position `i`
//! of a frame holds the coefficient of `x^(N-1-i)`.
//!
//! ## Example
//!
//! ```rust
//! use fec_factory::module::{BchEncoder, Encoder};
//! use fec_factory::tools::BchPolynomialGenerator;
//!
//! let gf = BchPolynomialGenerator::new(15, 2).unwrap();
//! let mut enc = BchEncoder::<i32>::new(7, 15, &gf, 1).unwrap();
//! let u_k = vec![1, 0, 1, 1, 0, 0, 1];
//! let mut x_n = vec![0; 15];
//! enc.encode(&u_k, &mut x_n).unwrap();
//! assert_eq!(&x_n[..7], &u_k[..]);
//! assert!(enc.is_codeword(&x_n));
//! ```

use std::marker::PhantomData;

use super::encoder::{check_dimensions, Encoder};
use crate::error::{CodecError, CodecResult};
use crate::tools::BchPolynomialGenerator;
use crate::types::Bit;

/// BCH encoder over bits of width `B`.
#[derive(Debug, Clone)]
pub struct BchEncoder<B> {
    k: usize,
    n: usize,
    n_frames: usize,
    /// Generator polynomial, LSB first, copied from the polynomial generator
    g: Vec<bool>,
    /// Shift register scratch, `N - K` bits
    reg: Vec<bool>,
    _bits: PhantomData<B>,
}

impl<B: Bit> BchEncoder<B> {
    /// The polynomial generator is only read during construction.
    pub fn new(k: usize, n: usize, gf: &BchPolynomialGenerator, n_frames: usize) -> CodecResult<Self> {
        check_dimensions(k, n, n_frames)?;
        if n != gf.n() {
            return Err(CodecError::FieldSizeMismatch { n, field_n: gf.n() });
        }
        if n - k != gf.n_rdncy() {
            return Err(CodecError::RedundancyMismatch {
                redundancy: n - k,
                degree: gf.n_rdncy(),
            });
        }
        Ok(Self {
            k,
            n,
            n_frames,
            g: gf.g().to_vec(),
            reg: vec![false; n - k],
            _bits: PhantomData,
        })
    }

    /// Number of parity bits
    pub fn n_rdncy(&self) -> usize {
        self.n - self.k
    }

    /// Generator polynomial, LSB first
    pub fn generator(&self) -> &[bool] {
        &self.g
    }

    fn parity(&mut self, u_k: &[B]) {
        let r = self.n_rdncy();
        self.reg.fill(false);
        for bit in u_k {
            let feedback = bit.is_set() ^ self.reg[r - 1];
            for j in (1..r).rev() {
                self.reg[j] = self.reg[j - 1] ^ (feedback && self.g[j]);
            }
            self.reg[0] = feedback && self.g[0];
        }
    }
}

impl<B: Bit> Encoder<B> for BchEncoder<B> {
    fn name(&self) -> &str {
        "BCH"
    }

    fn k(&self) -> usize {
        self.k
    }

    fn n(&self) -> usize {
        self.n
    }

    fn n_frames(&self) -> usize {
        self.n_frames
    }

    fn encode_frame(&mut self, u_k: &[B], x_n: &mut [B]) {
        self.parity(u_k);
        x_n[..self.k].copy_from_slice(u_k);
        let r = self.n_rdncy();
        for (j, &p) in self.reg.iter().enumerate() {
            // reg[j] is the coefficient of x^j
            x_n[self.k + r - 1 - j] = B::from_bool(p);
        }
    }

    /// Divides the frame by the generator polynomial and checks the remainder.
    fn is_codeword(&self, x_n: &[B]) -> bool {
        if x_n.len() != self.n {
            return false;
        }
        // coefficient of x^d lives at position n-1-d
        let mut rem: Vec<bool> = x_n.iter().rev().map(|b| b.is_set()).collect();
        let deg = self.g.len() - 1;
        for d in (deg..self.n).rev() {
            if rem[d] {
                for (j, &gj) in self.g.iter().enumerate() {
                    rem[d - deg + j] ^= gj;
                }
            }
        }
        rem.iter().all(|&b| !b)
    }
}

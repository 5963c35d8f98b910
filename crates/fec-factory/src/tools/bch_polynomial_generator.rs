//! BCH generator polynomial over GF(2^m)
//!
//! Builds the Galois field GF(2^m) from a primitive polynomial and derives the
//! generator polynomial of the narrow-sense binary BCH code of length
//! `n = 2^m - 1` correcting `t` errors:
//!
//! ```text
//! g(x) = LCM(m_1(x), m_3(x), ..., m_(2t-1)(x))
//! ```
//!
//! where `m_i(x)` is the minimal polynomial of `α^i`.
//!
//! ## Example
//!
//! ```rust
//! use fec_factory::tools::BchPolynomialGenerator;
//!
//! // BCH(15,7,2)
//! let gf = BchPolynomialGenerator::new(15, 2).unwrap();
//! assert_eq!(gf.m(), 4);
//! assert_eq!(gf.n_rdncy(), 8);
//! assert_eq!(gf.k(), 7);
//! ```

use crate::error::{CodecError, CodecResult};
use crate::tools::math::log2_exact;

/// Primitive polynomials for m = 2..=16, x^m term included.
const PRIMITIVE_POLYNOMIALS: [u32; 15] = [
    0x7,     // x^2 + x + 1
    0xB,     // x^3 + x + 1
    0x13,    // x^4 + x + 1
    0x25,    // x^5 + x^2 + 1
    0x43,    // x^6 + x + 1
    0x89,    // x^7 + x^3 + 1
    0x11D,   // x^8 + x^4 + x^3 + x^2 + 1
    0x211,   // x^9 + x^4 + 1
    0x409,   // x^10 + x^3 + 1
    0x805,   // x^11 + x^2 + 1
    0x1053,  // x^12 + x^6 + x^4 + x + 1
    0x201B,  // x^13 + x^4 + x^3 + x + 1
    0x4443,  // x^14 + x^10 + x^6 + x + 1
    0x8003,  // x^15 + x + 1
    0x1100B, // x^16 + x^12 + x^3 + x + 1
];

const MIN_M: u32 = 2;
const MAX_M: u32 = 16;

/// Galois field tables and BCH generator polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BchPolynomialGenerator {
    n: usize,
    m: u32,
    t: usize,
    /// α^i in polynomial basis
    alpha_to: Vec<u32>,
    /// log_α of each non-zero element; index 0 unused
    index_of: Vec<usize>,
    /// Binary generator polynomial, LSB first
    g: Vec<bool>,
}

impl BchPolynomialGenerator {
    /// Build GF(2^m) with `n = 2^m - 1` and the generator for correction power `t`.
    pub fn new(n: usize, t: usize) -> CodecResult<Self> {
        let m = n
            .checked_add(1)
            .and_then(log2_exact)
            .filter(|m| (MIN_M..=MAX_M).contains(m))
            .ok_or(CodecError::UnsupportedCode { n, t })?;
        if t == 0 || 2 * t >= n {
            return Err(CodecError::UnsupportedCode { n, t });
        }

        let (alpha_to, index_of) = Self::build_field(n, m);
        let mut gen = Self {
            n,
            m,
            t,
            alpha_to,
            index_of,
            g: Vec::new(),
        };
        gen.g = gen.build_generator();

        if gen.n_rdncy() >= n {
            return Err(CodecError::UnsupportedCode { n, t });
        }
        Ok(gen)
    }

    fn build_field(n: usize, m: u32) -> (Vec<u32>, Vec<usize>) {
        let primitive = PRIMITIVE_POLYNOMIALS[(m - MIN_M) as usize];
        let mut alpha_to = vec![0u32; n];
        let mut index_of = vec![0usize; n + 1];

        let mut element = 1u32;
        for (i, slot) in alpha_to.iter_mut().enumerate() {
            *slot = element;
            index_of[element as usize] = i;
            element <<= 1;
            if element & (1 << m) != 0 {
                element ^= primitive;
            }
        }
        (alpha_to, index_of)
    }

    fn gf_mul(&self, a: u32, b: u32) -> u32 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log = (self.index_of[a as usize] + self.index_of[b as usize]) % self.n;
        self.alpha_to[log]
    }

    /// Cyclotomic coset of `i` modulo `n`: {i, 2i, 4i, ...}.
    fn cyclotomic_coset(&self, i: usize) -> Vec<usize> {
        let mut coset = vec![i % self.n];
        let mut j = (2 * i) % self.n;
        while j != coset[0] {
            coset.push(j);
            j = (2 * j) % self.n;
        }
        coset
    }

    /// Minimal polynomial of α^i, as binary coefficients LSB first.
    fn minimal_polynomial(&self, coset: &[usize]) -> Vec<bool> {
        // product of (x + α^j) for j in the coset, over GF(2^m)
        let mut poly = vec![1u32];
        for &j in coset {
            let root = self.alpha_to[j];
            let mut next = vec![0u32; poly.len() + 1];
            for (d, &c) in poly.iter().enumerate() {
                next[d + 1] ^= c;
                next[d] ^= self.gf_mul(c, root);
            }
            poly = next;
        }
        // conjugate roots make every coefficient 0 or 1
        poly.into_iter().map(|c| c != 0).collect()
    }

    fn build_generator(&self) -> Vec<bool> {
        let mut covered = vec![false; self.n];
        let mut g = vec![true];
        for i in (1..=2 * self.t).step_by(2) {
            if covered[i % self.n] {
                continue;
            }
            let coset = self.cyclotomic_coset(i);
            for &j in &coset {
                covered[j] = true;
            }
            g = poly_mul_gf2(&g, &self.minimal_polynomial(&coset));
        }
        g
    }

    /// Codeword length `2^m - 1`
    pub fn n(&self) -> usize {
        self.n
    }

    /// Field order exponent
    pub fn m(&self) -> u32 {
        self.m
    }

    /// Correction power
    pub fn t(&self) -> usize {
        self.t
    }

    /// Degree of the generator polynomial (number of parity bits)
    pub fn n_rdncy(&self) -> usize {
        self.g.len() - 1
    }

    /// Information length `n - deg g`
    pub fn k(&self) -> usize {
        self.n - self.n_rdncy()
    }

    /// Generator polynomial coefficients, LSB first
    pub fn g(&self) -> &[bool] {
        &self.g
    }

    /// α^i in polynomial basis, for `i` in `0..n`
    pub fn alpha_to(&self) -> &[u32] {
        &self.alpha_to
    }

    /// Discrete logarithm table, indexed by field element
    pub fn index_of(&self) -> &[usize] {
        &self.index_of
    }
}

fn poly_mul_gf2(a: &[bool], b: &[bool]) -> Vec<bool> {
    let mut out = vec![false; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        if ai {
            for (j, &bj) in b.iter().enumerate() {
                out[i + j] ^= bj;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(coeffs: &[u8]) -> Vec<bool> {
        coeffs.iter().map(|&c| c == 1).collect()
    }

    #[test]
    fn test_field_tables_gf16() {
        let gf = BchPolynomialGenerator::new(15, 1).unwrap();
        // x^4 + x + 1: α^4 = α + 1
        assert_eq!(gf.alpha_to()[4], 0b0011);
        for i in 0..15 {
            assert_eq!(gf.index_of()[gf.alpha_to()[i] as usize], i);
        }
    }

    #[test]
    fn test_hamming_7_4() {
        let gf = BchPolynomialGenerator::new(7, 1).unwrap();
        // 1 + x + x^3
        assert_eq!(gf.g(), bits(&[1, 1, 0, 1]).as_slice());
        assert_eq!(gf.k(), 4);
    }

    #[test]
    fn test_bch_15_7() {
        let gf = BchPolynomialGenerator::new(15, 2).unwrap();
        // x^8 + x^7 + x^6 + x^4 + 1
        assert_eq!(gf.g(), bits(&[1, 0, 0, 0, 1, 0, 1, 1, 1]).as_slice());
        assert_eq!(gf.t(), 2);
    }

    #[test]
    fn test_bch_15_5() {
        let gf = BchPolynomialGenerator::new(15, 3).unwrap();
        // 1 + x + x^2 + x^4 + x^5 + x^8 + x^10
        assert_eq!(gf.g(), bits(&[1, 1, 1, 0, 1, 1, 0, 0, 1, 0, 1]).as_slice());
        assert_eq!(gf.k(), 5);
    }

    #[test]
    fn test_standard_dimensions() {
        for (n, t, k) in [(31, 2, 21), (63, 3, 45), (127, 1, 120), (255, 2, 239), (1023, 5, 973)] {
            let gf = BchPolynomialGenerator::new(n, t).unwrap();
            assert_eq!(gf.k(), k, "BCH({n}, t={t})");
        }
    }

    #[test]
    fn test_generator_divides_x_n_plus_1() {
        let gf = BchPolynomialGenerator::new(31, 3).unwrap();
        // x^n + 1
        let mut rem = vec![false; 32];
        rem[0] = true;
        rem[31] = true;
        let g = gf.g();
        let deg = g.len() - 1;
        for i in (deg..rem.len()).rev() {
            if rem[i] {
                for (j, &gj) in g.iter().enumerate() {
                    rem[i - deg + j] ^= gj;
                }
            }
        }
        assert!(rem.iter().all(|&b| !b));
    }

    #[test]
    fn test_rejects_invalid_length() {
        assert!(matches!(
            BchPolynomialGenerator::new(100, 2),
            Err(CodecError::UnsupportedCode { n: 100, t: 2 })
        ));
        assert!(BchPolynomialGenerator::new(1, 1).is_err());
        assert!(BchPolynomialGenerator::new((1 << 17) - 1, 1).is_err());
    }

    #[test]
    fn test_rejects_invalid_correction_power() {
        assert!(BchPolynomialGenerator::new(15, 0).is_err());
        assert!(BchPolynomialGenerator::new(15, 8).is_err());
    }
}

//! Encoder interface and the generic encoders of the base family
//!
//! Every encoder processes `n_frames` consecutive frames per call: `u_k`
//! holds `K × n_frames` information bits and `x_n` receives
//! `N × n_frames` coded bits.
//!
//! ## Example
//!
//! ```rust
//! use fec_factory::module::{AzcwEncoder, Encoder};
//!
//! let mut enc = AzcwEncoder::<i32>::new(4, 8, 2).unwrap();
//! let u_k = vec![1; 8];
//! let mut x_n = vec![1; 16];
//! enc.encode(&u_k, &mut x_n).unwrap();
//! assert!(x_n.iter().all(|&b| b == 0));
//! ```

use std::marker::PhantomData;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{CodecError, CodecResult};
use crate::types::Bit;

/// Frame-oriented FEC encoder over bits of width `B`.
pub trait Encoder<B: Bit>: Send {
    /// Encoder name
    fn name(&self) -> &str;

    /// Information bits per frame
    fn k(&self) -> usize;

    /// Codeword bits per frame
    fn n(&self) -> usize;

    /// Frames processed per call
    fn n_frames(&self) -> usize;

    /// Code rate K/N
    fn rate(&self) -> f64 {
        self.k() as f64 / self.n() as f64
    }

    /// Encode one frame. Slices have exactly `K` and `N` elements.
    fn encode_frame(&mut self, u_k: &[B], x_n: &mut [B]);

    /// `true` if a single frame of `N` bits is a codeword.
    fn is_codeword(&self, x_n: &[B]) -> bool;

    /// Encode `n_frames` frames.
    fn encode(&mut self, u_k: &[B], x_n: &mut [B]) -> CodecResult<()> {
        let (k, n) = (self.k(), self.n());
        check_len(frames_len(k, self.n_frames())?, u_k.len())?;
        check_len(frames_len(n, self.n_frames())?, x_n.len())?;
        for (u, x) in u_k.chunks_exact(k).zip(x_n.chunks_exact_mut(n)) {
            self.encode_frame(u, x);
        }
        Ok(())
    }
}

pub(crate) fn check_len(expected: usize, actual: usize) -> CodecResult<()> {
    if expected != actual {
        return Err(CodecError::BufferSizeMismatch { expected, actual });
    }
    Ok(())
}

fn frames_len(len: usize, n_frames: usize) -> CodecResult<usize> {
    len.checked_mul(n_frames)
        .ok_or(CodecError::FrameCountOverflow { n: len, n_frames })
}

pub(crate) fn check_dimensions(k: usize, n: usize, n_frames: usize) -> CodecResult<()> {
    if k == 0 || k > n || n_frames == 0 {
        return Err(CodecError::InvalidDimensions { k, n });
    }
    frames_len(n, n_frames).map(|_| ())
}

/// Uncoded transmission: `x_n = u_k`, requires `K == N`.
#[derive(Debug, Clone)]
pub struct NoEncoder<B> {
    k: usize,
    n_frames: usize,
    _bits: PhantomData<B>,
}

impl<B: Bit> NoEncoder<B> {
    pub fn new(k: usize, n: usize, n_frames: usize) -> CodecResult<Self> {
        check_dimensions(k, n, n_frames)?;
        if k != n {
            return Err(CodecError::InvalidDimensions { k, n });
        }
        Ok(Self {
            k,
            n_frames,
            _bits: PhantomData,
        })
    }
}

impl<B: Bit> Encoder<B> for NoEncoder<B> {
    fn name(&self) -> &str {
        "NO"
    }

    fn k(&self) -> usize {
        self.k
    }

    fn n(&self) -> usize {
        self.k
    }

    fn n_frames(&self) -> usize {
        self.n_frames
    }

    fn encode_frame(&mut self, u_k: &[B], x_n: &mut [B]) {
        x_n.copy_from_slice(u_k);
    }

    fn is_codeword(&self, x_n: &[B]) -> bool {
        x_n.len() == self.k
    }
}

/// All-zero codeword encoder, used to simulate linear codes without encoding.
#[derive(Debug, Clone)]
pub struct AzcwEncoder<B> {
    k: usize,
    n: usize,
    n_frames: usize,
    _bits: PhantomData<B>,
}

impl<B: Bit> AzcwEncoder<B> {
    pub fn new(k: usize, n: usize, n_frames: usize) -> CodecResult<Self> {
        check_dimensions(k, n, n_frames)?;
        Ok(Self {
            k,
            n,
            n_frames,
            _bits: PhantomData,
        })
    }
}

impl<B: Bit> Encoder<B> for AzcwEncoder<B> {
    fn name(&self) -> &str {
        "AZCW"
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

    fn encode_frame(&mut self, _u_k: &[B], x_n: &mut [B]) {
        x_n.fill(B::ZERO);
    }

    fn is_codeword(&self, x_n: &[B]) -> bool {
        x_n.len() == self.n && x_n.iter().all(|b| !b.is_set())
    }
}

/// Systematic coset encoder: information bits followed by seeded random
/// redundancy.
#[derive(Debug, Clone)]
pub struct CosetEncoder<B> {
    k: usize,
    n: usize,
    n_frames: usize,
    seed: u64,
    rng: StdRng,
    _bits: PhantomData<B>,
}

impl<B: Bit> CosetEncoder<B> {
    pub fn new(k: usize, n: usize, seed: u64, n_frames: usize) -> CodecResult<Self> {
        check_dimensions(k, n, n_frames)?;
        Ok(Self {
            k,
            n,
            n_frames,
            seed,
            rng: StdRng::seed_from_u64(seed),
            _bits: PhantomData,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the random sequence.
    pub fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }
}

impl<B: Bit> Encoder<B> for CosetEncoder<B> {
    fn name(&self) -> &str {
        "COSET"
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
        x_n[..self.k].copy_from_slice(u_k);
        for bit in &mut x_n[self.k..] {
            *bit = B::from_bool(self.rng.gen());
        }
    }

    fn is_codeword(&self, x_n: &[B]) -> bool {
        x_n.len() == self.n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_encoder_copies() {
        let mut enc = NoEncoder::<i8>::new(4, 4, 2).unwrap();
        let u_k = vec![1, 0, 1, 1, 0, 0, 1, 0];
        let mut x_n = vec![0; 8];
        enc.encode(&u_k, &mut x_n).unwrap();
        assert_eq!(x_n, u_k);
        assert_eq!(enc.rate(), 1.0);
    }

    #[test]
    fn test_no_encoder_requires_k_eq_n() {
        assert!(NoEncoder::<i32>::new(4, 8, 1).is_err());
    }

    #[test]
    fn test_azcw() {
        let mut enc = AzcwEncoder::<i64>::new(3, 6, 1).unwrap();
        let mut x_n = vec![1; 6];
        enc.encode(&[1, 1, 1], &mut x_n).unwrap();
        assert!(enc.is_codeword(&x_n));
        assert_eq!(enc.rate(), 0.5);
    }

    #[test]
    fn test_buffer_size_checked() {
        let mut enc = AzcwEncoder::<i32>::new(3, 6, 2).unwrap();
        let mut x_n = vec![0; 12];
        assert!(matches!(
            enc.encode(&[0; 3], &mut x_n),
            Err(CodecError::BufferSizeMismatch { expected: 6, actual: 3 })
        ));
        let mut short = vec![0; 6];
        assert!(enc.encode(&[0; 6], &mut short).is_err());
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(AzcwEncoder::<i32>::new(0, 6, 1).is_err());
        assert!(AzcwEncoder::<i32>::new(7, 6, 1).is_err());
        assert!(AzcwEncoder::<i32>::new(3, 6, 0).is_err());
    }

    #[test]
    fn test_frame_count_overflow_rejected() {
        let n_frames = 1usize << (usize::BITS - 2);
        assert!(matches!(
            NoEncoder::<i32>::new(4, 4, n_frames),
            Err(CodecError::FrameCountOverflow { n: 4, .. })
        ));
        assert!(CosetEncoder::<i8>::new(4, 8, 1, usize::MAX).is_err());
        assert!(NoEncoder::<i32>::new(4, 4, n_frames / 4).is_ok());
    }

    #[test]
    fn test_coset_is_systematic_and_seeded() {
        let u_k = vec![1, 0, 1, 1];
        let mut a = CosetEncoder::<i16>::new(4, 32, 42, 1).unwrap();
        let mut b = CosetEncoder::<i16>::new(4, 32, 42, 1).unwrap();
        let mut xa = vec![0; 32];
        let mut xb = vec![0; 32];
        a.encode(&u_k, &mut xa).unwrap();
        b.encode(&u_k, &mut xb).unwrap();
        assert_eq!(&xa[..4], &u_k[..]);
        assert_eq!(xa, xb);
        assert!(xa.iter().all(|&v| v == 0 || v == 1));

        a.reset();
        let mut again = vec![0; 32];
        a.encode(&u_k, &mut again).unwrap();
        assert_eq!(again, xa);
    }
}

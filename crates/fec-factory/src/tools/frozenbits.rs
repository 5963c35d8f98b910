//! Frozen-bit generators for polar codes
//!
//! A generator selects the `N - K` least reliable bit channels of a polar
//! code of length `N`; those positions are frozen (always zero).
//!
//! - [`FileFrozenbits`] reads a precomputed reliability order from disk.
//! - [`BecFrozenbits`] tracks Bhattacharyya parameters through the
//!   2×2 kernel stages, starting from the AWGN noise level `sigma`.
//!
//! ## Reliability file format
//!
//! ```text
//! # comment lines start with '#'
//! 8
//! 7 6 5 3 4 2 1 0
//! ```
//!
//! The first integer is `N`, followed by the `N` channel indices sorted from
//! most to least reliable. When the configured path is a folder, the file
//! `N{n}.pc` inside it is used.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CodecError, CodecResult};

/// Frozen-bit position generator.
pub trait FrozenbitsGenerator: Send + Sync {
    /// Generator name
    fn name(&self) -> &str;

    /// Number of information bits
    fn k(&self) -> usize;

    /// Codeword length
    fn n(&self) -> usize;

    /// Fill `frozen` (length `N`) with `true` on frozen positions.
    fn generate(&self, frozen: &mut [bool]) -> CodecResult<()>;

    /// Convenience wrapper returning a fresh mask.
    fn frozen_bits(&self) -> CodecResult<Vec<bool>> {
        let mut frozen = vec![false; self.n()];
        self.generate(&mut frozen)?;
        Ok(frozen)
    }
}

fn check_dimensions(k: usize, n: usize) -> CodecResult<()> {
    if k == 0 || k > n {
        return Err(CodecError::InvalidDimensions { k, n });
    }
    Ok(())
}

fn check_mask(n: usize, frozen: &[bool]) -> CodecResult<()> {
    if frozen.len() != n {
        return Err(CodecError::BufferSizeMismatch {
            expected: n,
            actual: frozen.len(),
        });
    }
    Ok(())
}

/// Freeze every channel outside the `k` first entries of `best_first`.
fn freeze_from_order(best_first: &[usize], k: usize, frozen: &mut [bool]) {
    frozen.fill(true);
    for &channel in &best_first[..k] {
        frozen[channel] = false;
    }
}

/// Reliability order loaded from a file at generation time.
#[derive(Debug, Clone)]
pub struct FileFrozenbits {
    k: usize,
    n: usize,
    path: PathBuf,
}

impl FileFrozenbits {
    pub fn new(k: usize, n: usize, path: impl Into<PathBuf>) -> CodecResult<Self> {
        check_dimensions(k, n)?;
        Ok(Self {
            k,
            n,
            path: path.into(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File actually read: `path` itself, or `path/N{n}.pc` for a folder.
    pub fn resolved_path(&self) -> PathBuf {
        if self.path.is_dir() {
            self.path.join(format!("N{}.pc", self.n))
        } else {
            self.path.clone()
        }
    }

    fn parse_order(&self, path: &Path, content: &str) -> CodecResult<Vec<usize>> {
        let fail = |reason: String| CodecError::FrozenbitsFile {
            path: path.to_path_buf(),
            reason,
        };

        let mut tokens = content
            .lines()
            .filter(|l| !l.trim_start().starts_with('#'))
            .flat_map(str::split_whitespace)
            .map(|t| t.parse::<usize>().map_err(|_| fail(format!("'{t}' is not an index"))));

        let n = tokens.next().ok_or_else(|| fail("empty file".to_string()))??;
        if n != self.n {
            return Err(fail(format!("file is for N = {n}, expected N = {}", self.n)));
        }

        let order = tokens.collect::<CodecResult<Vec<usize>>>()?;
        if order.len() != n {
            return Err(fail(format!("expected {n} channel indices, found {}", order.len())));
        }
        let mut seen = vec![false; n];
        for &channel in &order {
            if channel >= n {
                return Err(fail(format!("channel index {channel} out of range")));
            }
            if std::mem::replace(&mut seen[channel], true) {
                return Err(fail(format!("channel index {channel} listed twice")));
            }
        }
        Ok(order)
    }
}

impl FrozenbitsGenerator for FileFrozenbits {
    fn name(&self) -> &str {
        "FILE"
    }

    fn k(&self) -> usize {
        self.k
    }

    fn n(&self) -> usize {
        self.n
    }

    fn generate(&self, frozen: &mut [bool]) -> CodecResult<()> {
        check_mask(self.n, frozen)?;
        let path = self.resolved_path();
        let content = fs::read_to_string(&path).map_err(|e| CodecError::FrozenbitsFile {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let order = self.parse_order(&path, &content)?;
        debug!(path = %path.display(), n = self.n, k = self.k, "loaded frozen bits");
        freeze_from_order(&order, self.k, frozen);
        Ok(())
    }
}

/// Bhattacharyya-parameter construction over the 2×2 kernel.
#[derive(Debug, Clone)]
pub struct BecFrozenbits {
    k: usize,
    n: usize,
    sigma: Option<f64>,
}

impl BecFrozenbits {
    pub fn new(k: usize, n: usize, sigma: Option<f64>) -> CodecResult<Self> {
        check_dimensions(k, n)?;
        if !n.is_power_of_two() {
            return Err(CodecError::NotPowerOfTwo(n));
        }
        Ok(Self { k, n, sigma })
    }

    pub fn sigma(&self) -> Option<f64> {
        self.sigma
    }

    pub fn set_sigma(&mut self, sigma: f64) {
        self.sigma = Some(sigma);
    }

    /// Bhattacharyya parameter of every synthesized channel.
    pub fn bhattacharyya(&self) -> CodecResult<Vec<f64>> {
        let sigma = self.sigma.filter(|s| *s > 0.0).ok_or(CodecError::NoiseUnset)?;
        let n = self.n;

        // BPSK over AWGN: Z = exp(-Es/N0) with Es = 1, N0 = 2 sigma^2
        let mut z = vec![(-1.0 / (2.0 * sigma * sigma)).exp(); n];

        let mut half = 1;
        while half < n {
            let mut next = vec![0.0; n];
            for block in (0..n).step_by(2 * half) {
                for j in 0..half {
                    let (z1, z2) = (z[block + j], z[block + j + half]);
                    // worse channel
                    next[block + j] = (z1 + z2 - z1 * z2).clamp(0.0, 1.0);
                    // better channel
                    next[block + j + half] = (z1 * z2).clamp(0.0, 1.0);
                }
            }
            z = next;
            half *= 2;
        }
        Ok(z)
    }
}

impl FrozenbitsGenerator for BecFrozenbits {
    fn name(&self) -> &str {
        "BEC"
    }

    fn k(&self) -> usize {
        self.k
    }

    fn n(&self) -> usize {
        self.n
    }

    fn generate(&self, frozen: &mut [bool]) -> CodecResult<()> {
        check_mask(self.n, frozen)?;
        let z = self.bhattacharyya()?;
        let mut order: Vec<usize> = (0..self.n).collect();
        order.sort_by(|&a, &b| z[a].total_cmp(&z[b]).then(b.cmp(&a)));
        freeze_from_order(&order, self.k, frozen);
        Ok(())
    }
}

//! Hash function parameters for Euclidean LSH.
//!
//! Every table combines `m` hash functions of the p-stable family
//! (Datar et al. 2004):
//!
//! ```text
//! h(x) = floor((a · x + b) / w)
//! ```
//!
//! where `a` has i.i.d. standard normal components and `b ~ U[0, w)`.
//! The Gaussian is 2-stable, so `a · (x - y)` is distributed as
//! `||x - y||₂ · N(0, 1)` and the collision probability of one function
//! falls monotonically with Euclidean distance.
//!
//! All parameters are drawn once, from an explicit seed, when [`Settings`] is
//! built. Two settings built from the same `(dim, l, m, w, seed)` hold
//! bit-identical arrays, so fingerprints computed by either are comparable.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use tracing::debug;

use crate::error::{LshError, Result};

/// Seed used by [`Settings::new`].
pub const DEFAULT_SEED: u64 = 1;

/// User-facing configuration for building [`Settings`].
///
/// `dim` has no meaningful default and must be set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LshParams {
    /// Dimensionality of every point.
    pub dim: usize,
    /// Number of independent tables (`l`). More tables raise recall.
    pub num_tables: usize,
    /// Hash functions combined per table (`m`). More functions raise precision.
    pub num_functions: usize,
    /// Bucket width (`w`) shared by all functions.
    pub bucket_width: f64,
    /// Seed for the parameter generator.
    pub seed: u64,
}

impl Default for LshParams {
    fn default() -> Self {
        Self {
            dim: 0,
            num_tables: 10,
            num_functions: 4,
            bucket_width: 4.0,
            seed: DEFAULT_SEED,
        }
    }
}

impl LshParams {
    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<()> {
        if self.dim == 0 {
            return Err(LshError::InvalidConfiguration(
                "dim must be greater than 0".into(),
            ));
        }
        if self.num_tables == 0 {
            return Err(LshError::InvalidConfiguration(
                "number of tables (l) must be greater than 0".into(),
            ));
        }
        if self.num_functions == 0 {
            return Err(LshError::InvalidConfiguration(
                "hash functions per table (m) must be greater than 0".into(),
            ));
        }
        if !(self.bucket_width.is_finite() && self.bucket_width > 0.0) {
            return Err(LshError::InvalidConfiguration(format!(
                "bucket width (w) must be positive and finite, got {}",
                self.bucket_width
            )));
        }
        Ok(())
    }
}

/// Immutable hash parameters shared by every table of an index.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    dim: usize,
    l: usize,
    m: usize,
    w: f64,
    seed: u64,
    /// Projection vectors, `l * m` rows of `dim` values, row-major.
    a: Vec<f64>,
    /// Offsets in `[0, w)`, `l * m` values.
    b: Vec<f64>,
}

impl Settings {
    /// Generate settings with the default seed.
    pub fn new(dim: usize, l: usize, m: usize, w: f64) -> Result<Self> {
        Self::with_seed(dim, l, m, w, DEFAULT_SEED)
    }

    /// Generate settings from an explicit seed.
    ///
    /// Independently seeded settings can coexist in one process; nothing is
    /// shared between them.
    pub fn with_seed(dim: usize, l: usize, m: usize, w: f64, seed: u64) -> Result<Self> {
        Self::from_params(&LshParams {
            dim,
            num_tables: l,
            num_functions: m,
            bucket_width: w,
            seed,
        })
    }

    /// Generate settings from a parameter struct.
    pub fn from_params(params: &LshParams) -> Result<Self> {
        params.validate()?;
        let LshParams {
            dim,
            num_tables: l,
            num_functions: m,
            bucket_width: w,
            seed,
        } = *params;

        let mut rng = StdRng::seed_from_u64(seed);
        let mut a = Vec::with_capacity(l * m * dim);
        let mut b = Vec::with_capacity(l * m);

        // Draw order is part of the reproducibility contract: per function,
        // the projection components first, then its offset.
        for _ in 0..l * m {
            a.extend((0..dim).map(|_| rng.sample::<f64, _>(StandardNormal)));
            b.push(rng.random_range(0.0..w));
        }

        debug!(dim, l, m, w, seed, "generated lsh settings");

        Ok(Self {
            dim,
            l,
            m,
            w,
            seed,
            a,
            b,
        })
    }

    /// Dimensionality of points hashed with these settings.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of tables (`l`).
    pub fn num_tables(&self) -> usize {
        self.l
    }

    /// Hash functions per table (`m`).
    pub fn num_functions(&self) -> usize {
        self.m
    }

    /// Bucket width (`w`).
    pub fn bucket_width(&self) -> f64 {
        self.w
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Projection vector of function `func` in table `table`.
    ///
    /// # Panics
    ///
    /// If `table >= l` or `func >= m`.
    pub fn projection(&self, table: usize, func: usize) -> &[f64] {
        let row = self.function_index(table, func);
        &self.a[row * self.dim..(row + 1) * self.dim]
    }

    /// Offset of function `func` in table `table`.
    ///
    /// # Panics
    ///
    /// If `table >= l` or `func >= m`.
    pub fn offset(&self, table: usize, func: usize) -> f64 {
        self.b[self.function_index(table, func)]
    }

    /// Fail with `DimensionMismatch` unless `point` has `dim` coordinates.
    pub(crate) fn check_dim(&self, point: &[f64]) -> Result<()> {
        if point.len() != self.dim {
            return Err(LshError::DimensionMismatch {
                expected: self.dim,
                actual: point.len(),
            });
        }
        Ok(())
    }

    fn function_index(&self, table: usize, func: usize) -> usize {
        assert!(table < self.l, "table {table} out of range (l = {})", self.l);
        assert!(func < self.m, "function {func} out of range (m = {})", self.m);
        table * self.m + func
    }
}

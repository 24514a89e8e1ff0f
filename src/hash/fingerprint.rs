//! Per-table fingerprints.
//!
//! A fingerprint concatenates the `m` quantized projections of one table into
//! a single bucket key. Each value is rendered as exactly 16 lowercase hex
//! digits of its `f64` bit pattern, with no delimiter. The fixed width keeps
//! concatenation boundaries unambiguous: two fingerprints are equal iff every
//! one of their `m` quantized values is bit-identical.

use std::fmt::{self, Write as _};

use crate::error::Result;
use crate::hash::settings::Settings;

/// Hex digits per hash function.
pub const HEX_WIDTH: usize = 16;

/// Bucket key for one table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Build a fingerprint from already-quantized values.
    pub fn from_quantized(values: impl IntoIterator<Item = f64>) -> Self {
        let mut s = String::new();
        for v in values {
            push_hex(&mut s, v);
        }
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the quantized values back out of the key.
    pub fn quantized(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.as_bytes().chunks(HEX_WIDTH).map(|chunk| {
            // Only ever built by `push_hex`, so chunks are valid hex.
            let digits = std::str::from_utf8(chunk).unwrap_or_default();
            f64::from_bits(u64::from_str_radix(digits, 16).unwrap_or_default())
        })
    }

    /// Number of hash functions encoded.
    pub fn len(&self) -> usize {
        self.0.len() / HEX_WIDTH
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn push_hex(s: &mut String, value: f64) {
    // -0.0 and 0.0 are the same bucket.
    let value = if value == 0.0 { 0.0 } else { value };
    // Writing to a String cannot fail.
    let _ = write!(s, "{:016x}", value.to_bits());
}

fn dot(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y).map(|(a, b)| a * b).sum()
}

impl Settings {
    /// Quantized value of function `func` in table `table` for `point`.
    ///
    /// Caller guarantees `point.len() == dim`.
    fn quantize(&self, table: usize, func: usize, point: &[f64]) -> f64 {
        let proj = dot(point, self.projection(table, func)) + self.offset(table, func);
        (proj / self.bucket_width()).floor()
    }

    /// Fingerprint of `point` in table `table`.
    pub(crate) fn fingerprint(&self, table: usize, point: &[f64]) -> Fingerprint {
        let mut s = String::with_capacity(self.num_functions() * HEX_WIDTH);
        for func in 0..self.num_functions() {
            push_hex(&mut s, self.quantize(table, func, point));
        }
        Fingerprint(s)
    }

    /// Compute one fingerprint per table for `point`.
    ///
    /// Identical points always give identical fingerprints under the same
    /// settings.
    pub fn hash(&self, point: &[f64]) -> Result<Vec<Fingerprint>> {
        self.check_dim(point)?;
        Ok((0..self.num_tables())
            .map(|table| self.fingerprint(table, point))
            .collect())
    }
}

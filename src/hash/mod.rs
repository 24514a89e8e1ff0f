//! Euclidean locality sensitive hashing.
//!
//! ## The LSH Intuition
//!
//! Ordinary hash functions try to *minimize* collisions. LSH is designed so
//! that nearby points collide more often than distant ones:
//!
//! - P[h(x) = h(y)] is high when ||x - y|| is small
//! - P[h(x) = h(y)] is low when ||x - y|| is large
//!
//! A query then only looks at points in the same bucket instead of the whole
//! dataset.
//!
//! ## Amplification
//!
//! One function is a weak filter. Each table concatenates `m` functions into a
//! [`Fingerprint`] (AND: all `m` must agree), and the index keeps `l` tables
//! (OR: any table may match). If `p` is the single-function collision
//! probability at some distance, a pair becomes a candidate with probability
//!
//! ```text
//! 1 - (1 - p^m)^l
//! ```
//!
//! Raising `m` cuts false positives; raising `l` recovers recall.
//!
//! ```rust
//! use l2lsh::hash::{Index, Settings};
//!
//! let settings = Settings::new(2, 4, 2, 4.0)?;
//! let mut index = Index::new(settings);
//!
//! index.insert(1, &[0.0, 0.0])?;
//! index.insert(2, &[0.001, 0.001])?;
//! index.insert(3, &[100.0, 100.0])?;
//!
//! // Candidates still need an exact distance check by the caller.
//! let candidates: Vec<u64> = index.query(&[0.0, 0.0])?.copied().collect();
//! assert!(!candidates.contains(&3));
//! # Ok::<(), l2lsh::LshError>(())
//! ```
//!
//! ## References
//!
//! - Indyk & Motwani (1998). "Approximate nearest neighbors: towards removing
//!   the curse of dimensionality."
//! - Datar, Immorlica, Indyk & Mirrokni (2004). "Locality-sensitive hashing
//!   scheme based on p-stable distributions."

mod fingerprint;
mod index;
mod query;
mod settings;

pub use fingerprint::{Fingerprint, HEX_WIDTH};
pub use index::Index;
pub use query::Candidates;
pub use settings::{LshParams, Settings, DEFAULT_SEED};

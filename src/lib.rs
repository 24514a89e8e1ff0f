//! l2lsh: Euclidean locality sensitive hashing for candidate retrieval.
//!
//! Builds `l` hash tables over real-valued vectors so that points close in
//! Euclidean space land in the same bucket with high probability. A query
//! returns the deduplicated union of identifiers sharing a bucket with the
//! probe in any table.
//!
//! The index only produces *candidates*. It never stores the vectors and never
//! computes distances, so ranking and filtering are left to the caller.
//!
//! - [`hash::Settings`]: seeded, immutable hash parameters
//! - [`hash::Index`]: the `l` tables, with `insert` and `query`
//! - [`hash::Candidates`]: lazy, deduplicating query results
//!
//! # Critical Nuances
//!
//! ## Bucket width
//!
//! `w` should be on the order of the neighbor radius you care about. Too small
//! and true neighbors straddle bucket boundaries; too large and everything
//! shares a bucket.
//!
//! ## Reproducibility
//!
//! Parameters come from an explicit seed. An index built in one run and a
//! probe hashed in another only agree if both used the same
//! `(dim, l, m, w, seed)`.

pub mod error;
pub mod hash;

pub use error::{LshError, Result};
pub use hash::{Candidates, Fingerprint, Index, LshParams, Settings};

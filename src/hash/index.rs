//! Multi-table LSH index.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::error::Result;
use crate::hash::fingerprint::Fingerprint;
use crate::hash::query::Candidates;
use crate::hash::settings::Settings;

/// `l` hash tables mapping fingerprints to the identifiers inserted under them.
///
/// Identifiers are opaque to the index. Buckets keep insertion order and keep
/// duplicates; deduplication happens at query time.
///
/// `insert` takes `&mut self` and `query` takes `&self`, so the borrow checker
/// already rules out a query overlapping an insert. To share an index between
/// threads, wrap it in a `RwLock`.
#[derive(Debug, Clone)]
pub struct Index<K = u64> {
    settings: Settings,
    tables: Vec<HashMap<Fingerprint, Vec<K>>>,
    /// Number of successful `insert` calls.
    len: usize,
}

impl<K> Index<K>
where
    K: Eq + Hash + Clone,
{
    /// Create an empty index with one table per `settings.num_tables()`.
    pub fn new(settings: Settings) -> Self {
        let tables = (0..settings.num_tables()).map(|_| HashMap::new()).collect();
        debug!(
            dim = settings.dim(),
            tables = settings.num_tables(),
            functions = settings.num_functions(),
            "created lsh index"
        );
        Self {
            settings,
            tables,
            len: 0,
        }
    }

    /// Add `id` to the bucket matching `point` in every table.
    ///
    /// All fingerprints are computed before any table is touched, so a
    /// `DimensionMismatch` leaves the index unchanged.
    pub fn insert(&mut self, id: K, point: &[f64]) -> Result<()> {
        let fingerprints = self.settings.hash(point)?;
        for (table, fp) in self.tables.iter_mut().zip(fingerprints) {
            table.entry(fp).or_default().push(id.clone());
        }
        self.len += 1;
        trace!(inserted = self.len, "inserted point");
        Ok(())
    }

    /// Candidates sharing a bucket with `point` in at least one table.
    ///
    /// The result is lazy: buckets are walked as the iterator is consumed, and
    /// each identifier is yielded at most once, in order of first discovery
    /// (table order, then bucket order). Dropping the iterator stops the walk.
    /// No match is an empty iterator, not an error.
    pub fn query(&self, point: &[f64]) -> Result<Candidates<'_, K>> {
        let fingerprints = self.settings.hash(point)?;
        trace!(tables = self.tables.len(), "querying lsh index");
        Ok(Candidates::new(&self.tables, fingerprints))
    }

    /// Send each candidate for `point` over `tx` as it is discovered.
    ///
    /// Stops as soon as the receiving side has been dropped. Returns the
    /// number of identifiers delivered.
    pub fn query_into(
        &self,
        point: &[f64],
        tx: &crossbeam::channel::Sender<K>,
    ) -> Result<usize> {
        let mut delivered = 0;
        for id in self.query(point)? {
            if tx.send(id.clone()).is_err() {
                trace!(delivered, "candidate receiver disconnected");
                break;
            }
            delivered += 1;
        }
        Ok(delivered)
    }

    /// Identifiers stored under `fingerprint` in table `table`.
    pub fn bucket(&self, table: usize, fingerprint: &Fingerprint) -> Option<&[K]> {
        self.tables
            .get(table)?
            .get(fingerprint)
            .map(Vec::as_slice)
    }

    /// Number of distinct buckets in table `table` (0 if out of range).
    pub fn num_buckets(&self, table: usize) -> usize {
        self.tables.get(table).map_or(0, HashMap::len)
    }

    pub fn num_tables(&self) -> usize {
        self.tables.len()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Number of successful inserts, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

//! Lazy candidate iteration.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::iter::FusedIterator;
use std::slice;

use crate::hash::fingerprint::Fingerprint;

/// Deduplicated candidates for one query, produced on demand.
///
/// Walks the matching bucket of table 0, then table 1, and so on, yielding
/// every identifier not yet seen during this query. Nothing is buffered ahead
/// of the consumer: each call to `next` resumes where the last one stopped, so
/// dropping the iterator is all it takes to cancel.
#[derive(Debug)]
pub struct Candidates<'a, K> {
    tables: &'a [HashMap<Fingerprint, Vec<K>>],
    fingerprints: Vec<Fingerprint>,
    /// Next table whose bucket has not been opened yet.
    next_table: usize,
    bucket: slice::Iter<'a, K>,
    seen: HashSet<&'a K>,
}

impl<'a, K> Candidates<'a, K>
where
    K: Eq + Hash,
{
    pub(crate) fn new(
        tables: &'a [HashMap<Fingerprint, Vec<K>>],
        fingerprints: Vec<Fingerprint>,
    ) -> Self {
        Self {
            tables,
            fingerprints,
            next_table: 0,
            bucket: <&[K]>::default().iter(),
            seen: HashSet::new(),
        }
    }

    /// Number of distinct identifiers yielded so far.
    pub fn yielded(&self) -> usize {
        self.seen.len()
    }

    /// Open the next table's matching bucket. Returns false once every table
    /// has been visited.
    fn advance_table(&mut self) -> bool {
        while self.next_table < self.tables.len() {
            let t = self.next_table;
            self.next_table += 1;
            if let Some(bucket) = self.tables[t].get(&self.fingerprints[t]) {
                self.bucket = bucket.iter();
                return true;
            }
        }
        false
    }
}

impl<'a, K> Iterator for Candidates<'a, K>
where
    K: Eq + Hash,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        loop {
            for id in self.bucket.by_ref() {
                if self.seen.insert(id) {
                    return Some(id);
                }
            }
            if !self.advance_table() {
                return None;
            }
        }
    }
}

impl<K: Eq + Hash> FusedIterator for Candidates<'_, K> {}

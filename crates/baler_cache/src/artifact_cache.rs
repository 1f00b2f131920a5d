//! The in-memory invalidation cache over per-file artifacts.
//!
//! Holds previously computed artifacts keyed by normalized path and sweeps
//! out exactly those entries whose backing file changed after the last
//! known-good build. The sweep's return value doubles as the changed-files
//! signal for downstream consumers, so paths are evaluated and reported
//! even when the cache holds no entry for them.

use std::collections::{BTreeSet, HashMap};

use baler_common::NormalizedPath;

use crate::stamp::FileStamp;

/// An in-memory cache of per-file build artifacts keyed by normalized path.
///
/// The cache owns its key-to-artifact table outright; the only mutation
/// paths are [`insert`](Self::insert), [`remove`](Self::remove), and the
/// [`invalidate`](Self::invalidate) sweep, so no unrelated map methods leak
/// into the API. Every entry point normalizes its path argument through
/// [`NormalizedPath`], so insertion and invalidation keys always agree
/// regardless of host path-separator convention.
///
/// Not internally synchronized: callers serialize `get`/`insert`/
/// `invalidate` by confining the cache to a single build-coordination
/// thread.
#[derive(Debug)]
pub struct ArtifactCache<A> {
    entries: HashMap<NormalizedPath, A>,
}

impl<A> ArtifactCache<A> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Exact-match lookup by normalized path. No fuzzy matching.
    pub fn get(&self, path: &str) -> Option<&A> {
        self.entries.get(&NormalizedPath::new(path))
    }

    /// Inserts an artifact, unconditionally overwriting any previous entry.
    pub fn insert(&mut self, path: &str, artifact: A) {
        self.entries.insert(NormalizedPath::new(path), artifact);
    }

    /// Removes a single entry, returning the artifact if one was cached.
    pub fn remove(&mut self, path: &str) -> Option<A> {
        self.entries.remove(&NormalizedPath::new(path))
    }

    /// Returns `true` if an entry exists for the normalized path.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(&NormalizedPath::new(path))
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sweeps the cache against the last successful build timestamp.
    ///
    /// A stamped file counts as changed if its effective time is unknown
    /// (deleted) or strictly newer than `build_timestamp`. Changed entries
    /// are removed from the cache, and every changed path — cached or not —
    /// is reported in the returned sorted set for downstream consumers.
    /// Paths absent from `stamps` are left untouched.
    ///
    /// Never fails, and is idempotent: a second sweep with the same inputs
    /// finds nothing left to remove, though it still reports paths whose
    /// timestamp test fails again.
    pub fn invalidate(
        &mut self,
        stamps: &HashMap<String, FileStamp>,
        build_timestamp: u64,
    ) -> BTreeSet<NormalizedPath> {
        let mut changed = BTreeSet::new();
        for (path, stamp) in stamps {
            let is_changed = match stamp.effective_millis() {
                None => true,
                Some(t) => build_timestamp < t,
            };
            if is_changed {
                let key = NormalizedPath::new(path);
                self.entries.remove(&key);
                changed.insert(key);
            }
        }
        changed
    }
}

impl<A> Default for ArtifactCache<A> {
    fn default() -> Self {
        Self::new()
    }
}

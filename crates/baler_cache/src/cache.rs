//! High-level build cache orchestrator.
//!
//! The `BuildCache` type ties the persisted snapshot, the content-addressed
//! object store, and the in-memory artifact cache into a single interface
//! for build coordination: loading or creating cache state, looking up and
//! storing per-file artifacts, sweeping out stale entries, and garbage
//! collection.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use baler_common::NormalizedPath;

use crate::artifact_cache::ArtifactCache;
use crate::error::CacheError;
use crate::snapshot::{BuildSnapshot, FileRecord};
use crate::stamp::FileStamp;
use crate::store::ArtifactStore;

/// Orchestrates snapshot, object store, and in-memory cache for a build.
///
/// All reads are fail-safe: corruption or version mismatches result in
/// cache misses rather than errors. Mutation goes through `&mut self`;
/// callers serialize access by confining the cache to one coordination
/// thread.
pub struct BuildCache {
    /// Root directory for all cache files.
    cache_dir: PathBuf,

    /// The persisted snapshot of the last recorded build.
    snapshot: BuildSnapshot,

    /// Content-addressed artifact object store.
    store: ArtifactStore,

    /// In-memory artifact bytes, filled on store and on warm lookups.
    artifacts: ArtifactCache<Vec<u8>>,

    /// Baler version string for compatibility checks.
    baler_version: String,
}

impl BuildCache {
    /// Loads existing cache state or creates a fresh one.
    ///
    /// If a snapshot exists and was produced by the current Baler version,
    /// it is loaded. Otherwise a new empty snapshot is created. Fail-safe:
    /// any problem with the existing state results in starting fresh.
    pub fn load_or_create(cache_dir: &Path, baler_version: &str) -> Self {
        let snapshot = BuildSnapshot::load(cache_dir)
            .filter(|s| s.is_compatible(baler_version))
            .unwrap_or_else(|| BuildSnapshot::new(baler_version));

        Self {
            cache_dir: cache_dir.to_path_buf(),
            snapshot,
            store: ArtifactStore::new(cache_dir),
            artifacts: ArtifactCache::new(),
            baler_version: baler_version.to_string(),
        }
    }

    /// Stores the artifact bytes produced from a source file.
    ///
    /// Writes the bytes to the object store, records the file and its
    /// object key in the snapshot, and fills the in-memory cache.
    pub fn store_artifact(&mut self, path: &str, bytes: &[u8]) -> Result<String, CacheError> {
        let key = self.store.write_object(bytes, &self.baler_version)?;
        self.snapshot.files.insert(
            NormalizedPath::new(path),
            FileRecord {
                artifact_key: Some(key.clone()),
            },
        );
        self.artifacts.insert(path, bytes.to_vec());
        Ok(key)
    }

    /// Loads the artifact bytes for a source file, if cached.
    ///
    /// Checks the in-memory cache first, then the object store via the
    /// snapshot's artifact key, warming the in-memory cache on a disk hit.
    /// Returns `None` on any miss or validation failure.
    pub fn load_artifact(&mut self, path: &str) -> Option<Vec<u8>> {
        if let Some(bytes) = self.artifacts.get(path) {
            return Some(bytes.clone());
        }
        let record = self.snapshot.files.get(&NormalizedPath::new(path))?;
        let bytes = self.store.read_object(record.artifact_key.as_deref()?)?;
        self.artifacts.insert(path, bytes.clone());
        Some(bytes)
    }

    /// Records a file as tracked without attaching an artifact.
    ///
    /// Existing records (and their artifact keys) are left untouched.
    pub fn track(&mut self, path: &str) {
        self.snapshot
            .files
            .entry(NormalizedPath::new(path))
            .or_insert(FileRecord { artifact_key: None });
    }

    /// Sweeps cache state against the given build timestamp.
    ///
    /// Delegates the freshness test to [`ArtifactCache::invalidate`] and
    /// additionally drops the snapshot record of every changed path, so a
    /// subsequent save won't resurrect stale artifacts. Returns the sorted
    /// changed set for downstream consumers.
    pub fn sweep(
        &mut self,
        stamps: &HashMap<String, FileStamp>,
        build_timestamp: u64,
    ) -> BTreeSet<NormalizedPath> {
        let changed = self.artifacts.invalidate(stamps, build_timestamp);
        for path in &changed {
            self.snapshot.files.remove(path);
        }
        changed
    }

    /// Records the instant the current build state was taken.
    pub fn mark_built(&mut self, build_timestamp: u64) {
        self.snapshot.build_timestamp = build_timestamp;
    }

    /// Returns the last recorded build timestamp (zero if none).
    pub fn build_timestamp(&self) -> u64 {
        self.snapshot.build_timestamp
    }

    /// Returns a reference to the current snapshot.
    pub fn snapshot(&self) -> &BuildSnapshot {
        &self.snapshot
    }

    /// Persists the current snapshot to disk.
    pub fn save(&self) -> Result<(), CacheError> {
        self.snapshot.save(&self.cache_dir)
    }

    /// Removes stored objects no longer referenced by the snapshot.
    ///
    /// Returns the number of objects removed.
    pub fn gc(&self) -> Result<usize, CacheError> {
        let live_keys: Vec<&str> = self
            .snapshot
            .files
            .values()
            .filter_map(|record| record.artifact_key.as_deref())
            .collect();
        self.store.gc(&live_keys)
    }
}

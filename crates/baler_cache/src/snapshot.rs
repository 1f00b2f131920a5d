//! Persisted record of the last recorded build.
//!
//! The snapshot is stored as `snapshot.json` in the cache directory. It
//! records the build timestamp — the instant as of which every cached
//! artifact is guaranteed fresh — and the set of tracked files with their
//! artifact-store keys.

use std::collections::BTreeMap;
use std::path::Path;

use baler_common::NormalizedPath;
use serde::{Deserialize, Serialize};

use crate::error::CacheError;

/// Name of the snapshot file within the cache directory.
const SNAPSHOT_FILE: &str = "snapshot.json";

/// Top-level snapshot of the last recorded build.
///
/// Serialized as `snapshot.json` in the cache directory. Invariant: every
/// file recorded here was fresh as of `build_timestamp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSnapshot {
    /// Baler version that produced this snapshot. Reuse is gated on an
    /// exact match.
    pub baler_version: String,

    /// The instant (milliseconds since the Unix epoch) the last recorded
    /// build snapshot was taken. Zero means no build has been recorded.
    pub build_timestamp: u64,

    /// Tracked files keyed by normalized path relative to the project root.
    pub files: BTreeMap<NormalizedPath, FileRecord>,
}

/// Snapshot state for a single tracked file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Key of the stored artifact produced from this file, when one exists.
    /// Tracked files without compiled output carry `None`.
    pub artifact_key: Option<String>,
}

impl BuildSnapshot {
    /// Creates a new, empty snapshot for the given Baler version.
    pub fn new(baler_version: &str) -> Self {
        Self {
            baler_version: baler_version.to_string(),
            build_timestamp: 0,
            files: BTreeMap::new(),
        }
    }

    /// Loads the snapshot from the cache directory, returning `None` if
    /// the file doesn't exist or can't be parsed.
    ///
    /// Fail-safe: any problem results in `None`, and callers start fresh.
    pub fn load(cache_dir: &Path) -> Option<Self> {
        let path = cache_dir.join(SNAPSHOT_FILE);
        let content = std::fs::read_to_string(&path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Saves the snapshot to the cache directory.
    ///
    /// Creates the cache directory if it doesn't exist.
    pub fn save(&self, cache_dir: &Path) -> Result<(), CacheError> {
        std::fs::create_dir_all(cache_dir).map_err(|e| CacheError::Io {
            path: cache_dir.to_path_buf(),
            source: e,
        })?;
        let path = cache_dir.join(SNAPSHOT_FILE);
        let json = serde_json::to_string_pretty(self).map_err(|e| CacheError::Serialization {
            reason: e.to_string(),
        })?;
        std::fs::write(&path, json).map_err(|e| CacheError::Io { path, source: e })
    }

    /// Returns `true` if this snapshot was produced by a compatible Baler version.
    pub fn is_compatible(&self, current_version: &str) -> bool {
        self.baler_version == current_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snapshot_is_empty() {
        let s = BuildSnapshot::new("0.1.0");
        assert_eq!(s.baler_version, "0.1.0");
        assert_eq!(s.build_timestamp, 0);
        assert!(s.files.is_empty());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = BuildSnapshot::new("0.1.0");
        s.build_timestamp = 1_700_000_000_000;
        s.files.insert(
            NormalizedPath::new("src/main.js"),
            FileRecord {
                artifact_key: Some("abc123".to_string()),
            },
        );
        s.save(dir.path()).unwrap();

        let loaded = BuildSnapshot::load(dir.path()).unwrap();
        assert_eq!(loaded.baler_version, "0.1.0");
        assert_eq!(loaded.build_timestamp, 1_700_000_000_000);
        let record = &loaded.files[&NormalizedPath::new("src/main.js")];
        assert_eq!(record.artifact_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn load_nonexistent_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(BuildSnapshot::load(dir.path()).is_none());
    }

    #[test]
    fn load_corrupt_json_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("snapshot.json"), "not valid json {{{").unwrap();
        assert!(BuildSnapshot::load(dir.path()).is_none());
    }

    #[test]
    fn is_compatible_same_version() {
        let s = BuildSnapshot::new("0.1.0");
        assert!(s.is_compatible("0.1.0"));
        assert!(!s.is_compatible("0.2.0"));
    }

    #[test]
    fn file_keys_serialize_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = BuildSnapshot::new("0.1.0");
        s.files.insert(
            NormalizedPath::new(r"src\styles.css"),
            FileRecord { artifact_key: None },
        );
        s.save(dir.path()).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("snapshot.json")).unwrap();
        assert!(raw.contains("src/styles.css"));
        assert!(!raw.contains('\\'));
    }

    #[test]
    fn save_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deeply").join("nested").join("cache");
        BuildSnapshot::new("0.1.0").save(&nested).unwrap();
        assert!(nested.join("snapshot.json").exists());
    }
}

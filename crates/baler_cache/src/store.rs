//! Content-addressed on-disk storage for compiled artifact bytes.
//!
//! Artifacts are stored under `<cache_dir>/objects/<key>.obj`, where the
//! key is the content hash of the payload. Each object carries a binary
//! header with magic bytes, a format version, and a checksum so that
//! corruption or stale formats read back as cache misses.

use std::path::{Path, PathBuf};

use baler_common::ContentHash;
use serde::{Deserialize, Serialize};

use crate::error::CacheError;

/// Magic bytes identifying a Baler cache object.
const OBJECT_MAGIC: [u8; 4] = *b"BALE";

/// Current object format version. Increment on breaking changes to the
/// header or payload layout.
const OBJECT_FORMAT_VERSION: u32 = 1;

/// Subdirectory of the cache holding artifact objects.
const OBJECTS_SUBDIR: &str = "objects";

/// File extension for artifact objects.
const OBJECT_EXT: &str = "obj";

/// Header prepended to every stored object for validation on read-back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectHeader {
    /// Magic bytes: must be `b"BALE"`.
    pub magic: [u8; 4],

    /// Object format version.
    pub format_version: u32,

    /// Baler version that produced this object.
    pub baler_version: String,

    /// Content hash of the payload, checked against the bytes on read.
    pub checksum: ContentHash,
}

/// Content-addressed store for artifact bytes.
///
/// Writes derive the object key from the payload's content hash, so
/// identical artifacts share one object. Reads are fail-safe: a missing,
/// corrupt, or incompatible object is a miss, never an error.
pub struct ArtifactStore {
    /// Root cache directory.
    cache_dir: PathBuf,
}

impl ArtifactStore {
    /// Creates a store rooted at the given cache directory.
    pub fn new(cache_dir: &Path) -> Self {
        Self {
            cache_dir: cache_dir.to_path_buf(),
        }
    }

    /// Returns the file path for the object with the given key.
    pub fn object_path(&self, key: &str) -> PathBuf {
        self.cache_dir
            .join(OBJECTS_SUBDIR)
            .join(format!("{key}.{OBJECT_EXT}"))
    }

    /// Writes an artifact object and returns its key.
    ///
    /// The key is the hex content hash of `data`. The object is written
    /// with a header carrying magic bytes, the format version, and a
    /// checksum for later validation.
    pub fn write_object(&self, data: &[u8], baler_version: &str) -> Result<String, CacheError> {
        let dir = self.cache_dir.join(OBJECTS_SUBDIR);
        std::fs::create_dir_all(&dir).map_err(|e| CacheError::Io {
            path: dir,
            source: e,
        })?;

        let checksum = ContentHash::from_bytes(data);
        let key = checksum.to_string();
        let path = self.object_path(&key);

        let header = ObjectHeader {
            magic: OBJECT_MAGIC,
            format_version: OBJECT_FORMAT_VERSION,
            baler_version: baler_version.to_string(),
            checksum,
        };

        let header_bytes = bincode::serde::encode_to_vec(&header, bincode::config::standard())
            .map_err(|e| CacheError::Serialization {
                reason: e.to_string(),
            })?;

        // Layout: 4-byte header length (little-endian) + header + payload.
        let header_len = header_bytes.len() as u32;
        let mut output = Vec::with_capacity(4 + header_bytes.len() + data.len());
        output.extend_from_slice(&header_len.to_le_bytes());
        output.extend_from_slice(&header_bytes);
        output.extend_from_slice(data);

        std::fs::write(&path, &output).map_err(|e| CacheError::Io { path, source: e })?;

        Ok(key)
    }

    /// Reads an artifact object, validating its header.
    ///
    /// Returns `None` if the object doesn't exist, the header is invalid,
    /// the format version doesn't match, or the checksum doesn't verify.
    pub fn read_object(&self, key: &str) -> Option<Vec<u8>> {
        let raw = std::fs::read(self.object_path(key)).ok()?;

        if raw.len() < 4 {
            return None;
        }
        let header_len = u32::from_le_bytes(raw[..4].try_into().ok()?) as usize;
        if raw.len() < 4 + header_len {
            return None;
        }

        let header: ObjectHeader =
            bincode::serde::decode_from_slice(&raw[4..4 + header_len], bincode::config::standard())
                .ok()?
                .0;

        if header.magic != OBJECT_MAGIC || header.format_version != OBJECT_FORMAT_VERSION {
            return None;
        }

        let payload = &raw[4 + header_len..];
        if ContentHash::from_bytes(payload) != header.checksum {
            return None;
        }

        Some(payload.to_vec())
    }

    /// Removes objects whose key is not in `live_keys`.
    ///
    /// Returns the number of objects removed.
    pub fn gc(&self, live_keys: &[&str]) -> Result<usize, CacheError> {
        let dir = self.cache_dir.join(OBJECTS_SUBDIR);
        if !dir.exists() {
            return Ok(0);
        }

        let mut removed = 0;
        let entries = std::fs::read_dir(&dir).map_err(|e| CacheError::Io {
            path: dir.clone(),
            source: e,
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| CacheError::Io {
                path: dir.clone(),
                source: e,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(OBJECT_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if !live_keys.contains(&stem) {
                    std::fs::remove_file(&path).map_err(|e| CacheError::Io {
                        path: path.clone(),
                        source: e,
                    })?;
                    removed += 1;
                }
            }
        }

        Ok(removed)
    }
}

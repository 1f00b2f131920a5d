//! Canonical path keys with forward-slash separators.
//!
//! Cache entries, snapshot records, and changed-set elements are all keyed
//! by [`NormalizedPath`]. Normalization happens in exactly one place —
//! [`NormalizedPath::new`] — so key computation can never diverge between
//! insertion and invalidation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A path string with forward-slash separators regardless of host convention.
///
/// Only separators are rewritten: backslashes become `/`. There is no case
/// folding and no `.`/`..` resolution, so lookups are exact-match on the
/// normalized text. Two paths that differ only in separator style produce
/// the same key.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedPath(String);

impl NormalizedPath {
    /// Normalizes a path string, converting every `\` separator to `/`.
    pub fn new(path: &str) -> Self {
        Self(path.replace('\\', "/"))
    }

    /// Normalizes a filesystem path.
    ///
    /// Non-UTF-8 components are replaced lossily; cache keys are text.
    pub fn from_path(path: &Path) -> Self {
        Self::new(&path.to_string_lossy())
    }

    /// Returns the normalized path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the key, returning the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NormalizedPath({:?})", self.0)
    }
}

impl From<&str> for NormalizedPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl AsRef<str> for NormalizedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

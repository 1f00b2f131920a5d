//! Content hashing for artifact addressing and integrity checks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 128-bit XXH3 content hash.
///
/// Two byte sequences with the same `ContentHash` are assumed identical.
/// The artifact store uses the hash of an artifact's bytes as its on-disk
/// key, and stores a second hash in the artifact header as a corruption
/// check on read-back.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash([u8; 16]);

impl ContentHash {
    /// Hashes a byte slice with XXH3-128.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self(xxhash_rust::xxh3::xxh3_128(data).to_le_bytes())
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({:02x}{:02x}..)", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let a = ContentHash::from_bytes(b"console.log('hi')");
        let b = ContentHash::from_bytes(b"console.log('hi')");
        assert_eq!(a, b);
    }

    #[test]
    fn different_inputs_differ() {
        let a = ContentHash::from_bytes(b"main");
        let b = ContentHash::from_bytes(b"vendor");
        assert_ne!(a, b);
    }

    #[test]
    fn display_is_32_hex_chars() {
        let h = ContentHash::from_bytes(b"styles");
        let s = h.to_string();
        assert_eq!(s.len(), 32);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn debug_abbreviated() {
        let s = format!("{:?}", ContentHash::from_bytes(b"x"));
        assert!(s.starts_with("ContentHash("));
        assert!(s.ends_with("..)"));
    }

    #[test]
    fn serde_roundtrip() {
        let h = ContentHash::from_bytes(b"roundtrip");
        let json = serde_json::to_string(&h).unwrap();
        let back: ContentHash = serde_json::from_str(&json).unwrap();
        assert_eq!(h, back);
    }
}

//! Per-file modification evidence consumed by the invalidation sweep.
//!
//! The build orchestration layer inspects the filesystem (or receives
//! watcher events) and hands the cache a mapping from file path to
//! [`FileStamp`]. The sweep only ever looks at the effective modification
//! time; everything else in a stamp is carrier metadata.

use std::time::{SystemTime, UNIX_EPOCH};

/// Modification evidence for a single file.
///
/// Stamps arrive in two shapes depending on the producer: a raw
/// modification time, or a structured watcher record whose timestamp may
/// be absent. An absent timestamp is the "deleted or unknown" sentinel and
/// is always treated as changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStamp {
    /// A raw modification time in milliseconds since the Unix epoch.
    Millis(u64),
    /// A structured record as reported by a file watcher.
    Entry {
        /// The modification time in milliseconds, when known.
        timestamp: Option<u64>,
        /// The watcher's accuracy boundary. Carrier metadata; the sweep
        /// does not consult it.
        safe_time: Option<u64>,
    },
    /// The file no longer exists, or nothing is known about it.
    Missing,
}

impl FileStamp {
    /// Extracts the effective modification time in milliseconds.
    ///
    /// Returns `None` for the deleted/unknown cases, which invalidation
    /// treats conservatively as changed.
    pub fn effective_millis(&self) -> Option<u64> {
        match self {
            Self::Millis(t) => Some(*t),
            Self::Entry { timestamp, .. } => *timestamp,
            Self::Missing => None,
        }
    }

    /// Stamps a file from filesystem metadata.
    ///
    /// Filesystems that cannot report a modification time produce
    /// [`FileStamp::Missing`], so such files always count as changed.
    pub fn from_metadata(metadata: &std::fs::Metadata) -> Self {
        match metadata.modified() {
            Ok(mtime) => Self::Millis(unix_millis(mtime)),
            Err(_) => Self::Missing,
        }
    }
}

/// Converts a `SystemTime` to milliseconds since the Unix epoch.
///
/// Times before the epoch clamp to zero.
pub fn unix_millis(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn millis_effective_time() {
        assert_eq!(FileStamp::Millis(1_000).effective_millis(), Some(1_000));
    }

    #[test]
    fn entry_with_timestamp() {
        let stamp = FileStamp::Entry {
            timestamp: Some(2_000),
            safe_time: Some(2_500),
        };
        assert_eq!(stamp.effective_millis(), Some(2_000));
    }

    #[test]
    fn entry_without_timestamp_is_unknown() {
        let stamp = FileStamp::Entry {
            timestamp: None,
            safe_time: Some(2_500),
        };
        assert_eq!(stamp.effective_millis(), None);
    }

    #[test]
    fn missing_is_unknown() {
        assert_eq!(FileStamp::Missing.effective_millis(), None);
    }

    #[test]
    fn unix_millis_epoch_is_zero() {
        assert_eq!(unix_millis(UNIX_EPOCH), 0);
    }

    #[test]
    fn unix_millis_counts_forward() {
        let t = UNIX_EPOCH + Duration::from_millis(1_234);
        assert_eq!(unix_millis(t), 1_234);
    }

    #[test]
    fn unix_millis_before_epoch_clamps_to_zero() {
        let t = UNIX_EPOCH - Duration::from_secs(1);
        assert_eq!(unix_millis(t), 0);
    }

    #[test]
    fn from_metadata_stamps_mtime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.js");
        std::fs::write(&path, "console.log('hi')").unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        let stamp = FileStamp::from_metadata(&metadata);
        let effective = stamp.effective_millis().unwrap();
        assert!(effective > 0);
    }
}

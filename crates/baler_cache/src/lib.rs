//! Incremental build caching with timestamp-based invalidation.
//!
//! This crate holds per-file build artifacts and invalidates exactly those
//! entries whose backing file changed after the last recorded build. It
//! provides the in-memory [`ArtifactCache`], the persisted [`BuildSnapshot`],
//! the content-addressed [`ArtifactStore`], and the [`BuildCache`]
//! orchestrator that ties the three together. All on-disk reads are
//! fail-safe: corruption or version mismatches produce cache misses, never
//! errors.

#![warn(missing_docs)]

pub mod artifact_cache;
pub mod cache;
pub mod error;
pub mod snapshot;
pub mod stamp;
pub mod store;

pub use artifact_cache::ArtifactCache;
pub use cache::BuildCache;
pub use error::CacheError;
pub use snapshot::{BuildSnapshot, FileRecord};
pub use stamp::{unix_millis, FileStamp};
pub use store::ArtifactStore;

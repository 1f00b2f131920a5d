//! Shared foundational types used across the Baler build core.
//!
//! This crate provides the normalized path keys used by the cache and
//! snapshot layers, and the content hashing used for artifact addressing
//! and integrity checks.

#![warn(missing_docs)]

pub mod hash;
pub mod paths;

pub use hash::ContentHash;
pub use paths::NormalizedPath;

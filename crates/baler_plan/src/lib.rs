//! Deterministic bundle sequencing for a build.
//!
//! This crate turns the style and script entry declarations of a
//! [`ProjectConfig`](baler_config::ProjectConfig) into the ordered,
//! collision-free list of output bundle names the rest of the build keys
//! its work on. Ambiguous configurations (two entries claiming the same
//! output name) are rejected before any build work starts.

#![warn(missing_docs)]

pub mod entry_points;
pub mod error;

pub use entry_points::{
    generate_entry_points, normalize_entry_points, BundlePlan, NormalizedEntryPoint,
    DEFAULT_SCRIPTS_BUNDLE, DEFAULT_STYLES_BUNDLE,
};
pub use error::PlanError;

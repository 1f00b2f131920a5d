//! Parsing and validation of `baler.toml` project configuration files.
//!
//! This crate reads the project configuration file and produces a
//! strongly-typed [`ProjectConfig`] carrying the project metadata, the
//! declared style and script entry points, and build output settings.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::*;

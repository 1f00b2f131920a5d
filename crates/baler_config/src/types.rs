//! Configuration types deserialized from `baler.toml`.

use serde::Deserialize;

/// The top-level project configuration parsed from `baler.toml`.
///
/// Contains project metadata, the declared style and script entry points,
/// and build output settings.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Core project metadata (name, version, main entry, etc.).
    pub project: ProjectMeta,
    /// Style and script entry declarations.
    #[serde(default)]
    pub entries: EntryConfig,
    /// Build settings (output directory, cache directory).
    #[serde(default)]
    pub build: BuildConfig,
}

/// Style and script entry declarations from the `[entries]` table.
#[derive(Debug, Default, Deserialize)]
pub struct EntryConfig {
    /// Style entry declarations, in declaration order.
    #[serde(default)]
    pub styles: Vec<EntryPointSpec>,
    /// Script entry declarations, in declaration order.
    #[serde(default)]
    pub scripts: Vec<EntryPointSpec>,
}

/// Core project metadata required in every `baler.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// The project name.
    pub name: String,
    /// The project version string.
    pub version: String,
    /// A brief description of the project.
    #[serde(default)]
    pub description: String,
    /// List of project authors.
    #[serde(default)]
    pub authors: Vec<String>,
    /// Path to the application's main script entry.
    pub main: String,
    /// SPDX license identifier.
    #[serde(default)]
    pub license: Option<String>,
}

/// A single style or script entry declaration.
///
/// Uses serde's untagged enum so TOML config accepts both the shorthand
/// `styles = ["src/styles.css"]` and the full table form
/// `styles = [{ input = "src/a.css", bundle_name = "a", inject = false }]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EntryPointSpec {
    /// Shorthand: just the source path. The bundle name is defaulted and
    /// the entry is injected.
    Input(String),
    /// Full form with an explicit bundle name and inject control.
    Detailed {
        /// The source file or glob for this entry.
        input: String,
        /// Explicit output bundle name. When absent, the entry falls back
        /// to the list's default name (`"styles"` or `"scripts"`).
        #[serde(default)]
        bundle_name: Option<String>,
        /// Whether the bundle is linked into the main output. Non-injected
        /// bundles are emitted standalone (lazy-loaded) and excluded from
        /// the ordered bundle sequence.
        #[serde(default = "default_inject")]
        inject: bool,
    },
}

impl EntryPointSpec {
    /// Returns the source file or glob for this entry.
    pub fn input(&self) -> &str {
        match self {
            Self::Input(input) => input,
            Self::Detailed { input, .. } => input,
        }
    }

    /// Returns the explicit bundle name, if one was declared.
    pub fn bundle_name(&self) -> Option<&str> {
        match self {
            Self::Input(_) => None,
            Self::Detailed { bundle_name, .. } => bundle_name.as_deref(),
        }
    }

    /// Returns whether this entry is linked into the main output.
    pub fn inject(&self) -> bool {
        match self {
            Self::Input(_) => true,
            Self::Detailed { inject, .. } => *inject,
        }
    }
}

fn default_inject() -> bool {
    true
}

/// Build configuration controlling output locations.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    /// Directory that receives emitted bundles.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Directory that holds the build snapshot and cached artifacts.
    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            cache_dir: default_cache_dir(),
        }
    }
}

fn default_output_dir() -> String {
    "dist".to_string()
}

fn default_cache_dir() -> String {
    ".baler-cache".to_string()
}

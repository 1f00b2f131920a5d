//! Entry-point normalization and bundle-name sequencing.
//!
//! The sequencer is a pure function of the project configuration: it
//! resolves every style/script declaration to an explicit bundle name,
//! drops standalone (non-injected) entries, deduplicates names preserving
//! declaration order, and frames the result with the fixed infrastructure
//! bundles. Any name collision in the final sequence is a fatal
//! configuration error naming every offender.

use std::collections::{HashMap, HashSet};

use baler_config::{EntryPointSpec, ProjectConfig};
use serde::Serialize;

use crate::error::PlanError;

/// Default bundle name for style entries without an explicit name.
pub const DEFAULT_STYLES_BUNDLE: &str = "styles";

/// Default bundle name for script entries without an explicit name.
pub const DEFAULT_SCRIPTS_BUNDLE: &str = "scripts";

/// Infrastructure bundles emitted ahead of all user entries.
const PREFIX_BUNDLES: [&str; 4] = ["runtime", "polyfills-es5", "polyfills", "sw-register"];

/// Infrastructure bundles emitted after all user entries.
const SUFFIX_BUNDLES: [&str; 2] = ["vendor", "main"];

/// An entry declaration with its output bundle name resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEntryPoint {
    /// The source file or glob for this entry.
    pub input: String,
    /// The resolved output bundle name.
    pub bundle_name: String,
    /// Whether the bundle is linked into the main output.
    pub inject: bool,
}

/// Resolves every declaration to an explicit bundle name.
///
/// Declarations without a name fall back to `default_bundle_name`
/// (`"styles"` for style lists, `"scripts"` for script lists).
/// Declaration order is preserved.
pub fn normalize_entry_points(
    specs: &[EntryPointSpec],
    default_bundle_name: &str,
) -> Vec<NormalizedEntryPoint> {
    specs
        .iter()
        .map(|spec| NormalizedEntryPoint {
            input: spec.input().to_string(),
            bundle_name: spec
                .bundle_name()
                .unwrap_or(default_bundle_name)
                .to_string(),
            inject: spec.inject(),
        })
        .collect()
}

/// The ordered, collision-free list of output bundle names for a build.
///
/// Serializes transparently as a JSON array of names.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct BundlePlan {
    bundles: Vec<String>,
}

impl BundlePlan {
    /// Returns the bundle names in emission order.
    pub fn bundles(&self) -> &[String] {
        &self.bundles
    }

    /// Consumes the plan, returning the ordered names.
    pub fn into_vec(self) -> Vec<String> {
        self.bundles
    }
}

/// Computes the deterministic ordered bundle sequence for a build.
///
/// The sequence is: `runtime`, `polyfills-es5`, `polyfills`, `sw-register`,
/// then the distinct injected style bundle names in declaration order, then
/// the distinct injected script bundle names in declaration order, then
/// `vendor`, `main`.
///
/// Fails with [`PlanError::DuplicateBundleNames`] if any name appears more
/// than once in the final sequence — for example a style bundle named
/// `vendor`, or a style and a script sharing a name. Every colliding name
/// is reported, not just the first. No partial plan is returned on failure.
pub fn generate_entry_points(config: &ProjectConfig) -> Result<BundlePlan, PlanError> {
    let styles = normalize_entry_points(&config.entries.styles, DEFAULT_STYLES_BUNDLE);
    let scripts = normalize_entry_points(&config.entries.scripts, DEFAULT_SCRIPTS_BUNDLE);

    let mut bundles: Vec<String> = PREFIX_BUNDLES.iter().map(|s| s.to_string()).collect();
    bundles.extend(injected_names(&styles));
    bundles.extend(injected_names(&scripts));
    bundles.extend(SUFFIX_BUNDLES.iter().map(|s| s.to_string()));

    let duplicates = duplicate_names(&bundles);
    if !duplicates.is_empty() {
        return Err(PlanError::DuplicateBundleNames { names: duplicates });
    }

    Ok(BundlePlan { bundles })
}

/// Distinct bundle names of injected entries, preserving first-seen order.
///
/// Non-injected (standalone) entries are excluded entirely.
fn injected_names(entries: &[NormalizedEntryPoint]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for entry in entries.iter().filter(|e| e.inject) {
        if seen.insert(entry.bundle_name.as_str()) {
            names.push(entry.bundle_name.clone());
        }
    }
    names
}

/// Names appearing more than once in the sequence, in first-occurrence order.
///
/// Uses an explicit per-name frequency count so the scan stays linear on
/// large bundle lists.
fn duplicate_names(sequence: &[String]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in sequence {
        *counts.entry(name.as_str()).or_default() += 1;
    }

    let mut reported = HashSet::new();
    sequence
        .iter()
        .filter(|name| counts[name.as_str()] > 1 && reported.insert(name.as_str()))
        .cloned()
        .collect()
}

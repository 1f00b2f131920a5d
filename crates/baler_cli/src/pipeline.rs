//! Shared helpers for CLI commands.
//!
//! Contains project root resolution, recursive source discovery, and
//! source kind detection used by `plan` and `status`.

use std::path::{Path, PathBuf};

use crate::GlobalArgs;

/// Kind of source asset detected from a file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// A script asset (`.js`, `.mjs`, `.ts`).
    Script,
    /// A stylesheet asset (`.css`, `.scss`).
    Stylesheet,
}

/// Walks up from `start` looking for the nearest directory containing `baler.toml`.
///
/// Returns the directory containing `baler.toml`, or an error if none is found.
pub fn find_project_root(start: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut current = start.to_path_buf();
    loop {
        if current.join("baler.toml").exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(format!(
                "could not find baler.toml in {} or any parent directory",
                start.display()
            )
            .into());
        }
    }
}

/// Resolves the project root directory from global CLI args.
///
/// If `--config` is specified, uses that path (file → parent dir, dir →
/// itself). Otherwise walks up from the current directory looking for
/// `baler.toml`.
pub fn resolve_project_root(global: &GlobalArgs) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(ref config_path) = global.config {
        let p = PathBuf::from(config_path);
        if p.is_file() {
            Ok(p.parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".")))
        } else {
            Ok(p)
        }
    } else {
        find_project_root(&std::env::current_dir()?)
    }
}

/// Discovers source assets in the given directory (recursive).
///
/// Returns `(path, kind)` pairs for files with recognized extensions,
/// sorted by path so downstream output is deterministic.
pub fn discover_source_files(
    dir: &Path,
) -> Result<Vec<(PathBuf, SourceKind)>, Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    walk_dir(dir, &mut files)?;
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

/// Recursively walks a directory collecting source assets.
fn walk_dir(
    dir: &Path,
    files: &mut Vec<(PathBuf, SourceKind)>,
) -> Result<(), Box<dyn std::error::Error>> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            walk_dir(&path, files)?;
        } else if let Some(kind) = detect_kind(&path) {
            files.push((path, kind));
        }
    }
    Ok(())
}

/// Detects the source kind from a file's extension.
///
/// Returns `None` for unrecognized extensions.
pub fn detect_kind(path: &Path) -> Option<SourceKind> {
    match path.extension()?.to_str()? {
        "js" | "mjs" | "ts" => Some(SourceKind::Script),
        "css" | "scss" => Some(SourceKind::Stylesheet),
        _ => None,
    }
}

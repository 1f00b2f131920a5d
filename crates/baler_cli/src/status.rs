//! `baler status` — report files changed since the last recorded build.
//!
//! Stamps every discovered source file with its modification time, sweeps
//! the cache against the snapshot's build timestamp, and prints the
//! changed paths. With `--record`, the current state is then recorded as
//! the new build baseline.

use std::collections::HashMap;
use std::time::SystemTime;

use baler_cache::{unix_millis, BuildCache, FileStamp};
use baler_common::NormalizedPath;

use crate::pipeline::{discover_source_files, resolve_project_root};
use crate::{GlobalArgs, StatusArgs};

/// Runs the `baler status` command.
///
/// Prints changed paths to stdout, one per line. Returns exit code 0 when
/// the project is clean, 2 when changes are pending, so scripts can branch
/// on the result. `--record` writes a fresh snapshot and exits 0.
pub fn run(args: &StatusArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = resolve_project_root(global)?;
    let config = baler_config::load_config(&project_dir)?;
    let cache_dir = project_dir.join(&config.build.cache_dir);
    let mut cache = BuildCache::load_or_create(&cache_dir, env!("CARGO_PKG_VERSION"));

    let src_dir = project_dir.join("src");
    let discovered = if src_dir.is_dir() {
        discover_source_files(&src_dir)?
    } else {
        Vec::new()
    };

    // Stamp discovered files by mtime, keyed relative to the project root.
    let mut tracked_paths = Vec::with_capacity(discovered.len());
    let mut stamps: HashMap<String, FileStamp> = HashMap::new();
    for (path, _kind) in &discovered {
        let rel = path.strip_prefix(&project_dir).unwrap_or(path);
        let key = NormalizedPath::from_path(rel).into_string();
        let stamp = match std::fs::metadata(path) {
            Ok(metadata) => FileStamp::from_metadata(&metadata),
            Err(_) => FileStamp::Missing,
        };
        stamps.insert(key.clone(), stamp);
        tracked_paths.push(key);
    }

    // Snapshot entries that were not rediscovered stamp as deleted.
    for path in cache.snapshot().files.keys() {
        stamps
            .entry(path.as_str().to_string())
            .or_insert(FileStamp::Missing);
    }

    let build_timestamp = cache.build_timestamp();
    let changed = cache.sweep(&stamps, build_timestamp);

    if !global.quiet {
        eprintln!(
            "   Project {} v{}",
            config.project.name, config.project.version
        );
        if build_timestamp == 0 {
            eprintln!("  Snapshot none recorded");
        } else {
            eprintln!("  Snapshot recorded at {build_timestamp}");
        }
        eprintln!(
            "   Sources {} files, {} changed",
            discovered.len(),
            changed.len()
        );
        if global.verbose {
            for (path, kind) in &discovered {
                eprintln!("    {} ({kind:?})", path.display());
            }
        }
    }

    for path in &changed {
        println!("{path}");
    }

    if args.record {
        for path in &tracked_paths {
            cache.track(path);
        }
        cache.mark_built(unix_millis(SystemTime::now()));
        cache.save()?;
        if !global.quiet {
            eprintln!("  Recorded snapshot of {} files", tracked_paths.len());
        }
        return Ok(0);
    }

    Ok(if changed.is_empty() { 0 } else { 2 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn scaffold_project(dir: &Path) {
        std::fs::write(
            dir.join("baler.toml"),
            r#"
[project]
name = "app"
version = "0.1.0"
main = "src/main.js"
"#,
        )
        .unwrap();
        std::fs::create_dir_all(dir.join("src")).unwrap();
        std::fs::write(dir.join("src").join("main.js"), "// main").unwrap();
        std::fs::write(dir.join("src").join("styles.css"), "body {}").unwrap();
    }

    fn global_for(dir: &Path) -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
            config: Some(dir.to_string_lossy().into_owned()),
        }
    }

    #[test]
    fn everything_changed_without_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        scaffold_project(dir.path());

        let code = run(&StatusArgs { record: false }, &global_for(dir.path())).unwrap();
        assert_eq!(code, 2);
    }

    #[test]
    fn record_then_clean() {
        let dir = tempfile::tempdir().unwrap();
        scaffold_project(dir.path());
        let global = global_for(dir.path());

        let code = run(&StatusArgs { record: true }, &global).unwrap();
        assert_eq!(code, 0);
        assert!(dir
            .path()
            .join(".baler-cache")
            .join("snapshot.json")
            .exists());

        // Nothing touched since the recording: clean.
        let code = run(&StatusArgs { record: false }, &global).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn deleted_tracked_file_reported_changed() {
        let dir = tempfile::tempdir().unwrap();
        scaffold_project(dir.path());
        let global = global_for(dir.path());

        run(&StatusArgs { record: true }, &global).unwrap();
        std::fs::remove_file(dir.path().join("src").join("styles.css")).unwrap();

        let code = run(&StatusArgs { record: false }, &global).unwrap();
        assert_eq!(code, 2);
    }

    #[test]
    fn missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&StatusArgs { record: false }, &global_for(dir.path()));
        assert!(result.is_err());
    }
}

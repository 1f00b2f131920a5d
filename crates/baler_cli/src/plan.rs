//! `baler plan` — print the ordered bundle sequence for a project.

use baler_plan::{
    generate_entry_points, normalize_entry_points, DEFAULT_SCRIPTS_BUNDLE, DEFAULT_STYLES_BUNDLE,
};

use crate::pipeline::resolve_project_root;
use crate::{GlobalArgs, PlanArgs, ReportFormat};

/// Runs the `baler plan` command.
///
/// Loads the project configuration, computes the bundle sequence, and
/// prints it one name per line (text) or as a JSON array. A duplicate
/// bundle name is a configuration error: nothing is printed and the
/// process exits nonzero with a message naming every collision.
pub fn run(args: &PlanArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = resolve_project_root(global)?;
    let config = baler_config::load_config(&project_dir)?;

    if !global.quiet {
        eprintln!(
            "   Project {} v{}",
            config.project.name, config.project.version
        );
    }

    if global.verbose {
        for entry in normalize_entry_points(&config.entries.styles, DEFAULT_STYLES_BUNDLE) {
            eprintln!(
                "     style {} -> {} (inject: {})",
                entry.input, entry.bundle_name, entry.inject
            );
        }
        for entry in normalize_entry_points(&config.entries.scripts, DEFAULT_SCRIPTS_BUNDLE) {
            eprintln!(
                "    script {} -> {} (inject: {})",
                entry.input, entry.bundle_name, entry.inject
            );
        }
    }

    let plan = generate_entry_points(&config)?;

    match args.format {
        ReportFormat::Text => {
            for name in plan.bundles() {
                println!("{name}");
            }
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
    }

    Ok(0)
}

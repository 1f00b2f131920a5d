//! `baler init` — project scaffolding command.
//!
//! Creates a new Baler project directory with a `baler.toml` config file
//! and starter `src/main.js` and `src/styles.css` assets.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Runs the `baler init` command.
///
/// If `name` is `Some`, creates a new subdirectory with that name.
/// Otherwise initializes in the current working directory.
/// Returns exit code 0 on success.
pub fn run(name: Option<String>) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = match &name {
        Some(n) => {
            let dir = PathBuf::from(n);
            if dir.exists() {
                return Err(format!("directory '{}' already exists", n).into());
            }
            fs::create_dir_all(&dir)?;
            dir
        }
        None => std::env::current_dir()?,
    };

    let project_name = project_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("my_app");

    eprintln!("  Creating new Baler project `{project_name}`");

    fs::create_dir_all(project_dir.join("src"))?;

    write_baler_toml(&project_dir, project_name)?;
    write_main_script(&project_dir)?;
    write_styles(&project_dir)?;

    eprintln!("     Created {}", project_dir.join("baler.toml").display());
    eprintln!(
        "     Created {}",
        project_dir.join("src").join("main.js").display()
    );
    eprintln!(
        "     Created {}",
        project_dir.join("src").join("styles.css").display()
    );

    Ok(0)
}

/// Writes the template `baler.toml`.
fn write_baler_toml(root: &Path, project_name: &str) -> io::Result<()> {
    let content = format!(
        r#"[project]
name = "{project_name}"
version = "0.1.0"
main = "src/main.js"

[entries]
styles = ["src/styles.css"]
"#
    );
    fs::write(root.join("baler.toml"), content)
}

/// Writes the starter main script.
fn write_main_script(root: &Path) -> io::Result<()> {
    let content = r#"document.addEventListener('DOMContentLoaded', () => {
  console.log('hello from baler');
});
"#;
    fs::write(root.join("src").join("main.js"), content)
}

/// Writes the starter stylesheet.
fn write_styles(root: &Path) -> io::Result<()> {
    let content = r#"body {
  margin: 0;
  font-family: sans-serif;
}
"#;
    fs::write(root.join("src").join("styles.css"), content)
}

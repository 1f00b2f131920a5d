//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::Path;

/// Loads and validates a `baler.toml` configuration from a project directory.
///
/// Reads `<project_dir>/baler.toml`, parses it, and validates required fields.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let config_path = project_dir.join("baler.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `baler.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and values are usable.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project.name.is_empty() {
        return Err(ConfigError::MissingField("project.name".to_string()));
    }
    if config.project.main.is_empty() {
        return Err(ConfigError::MissingField("project.main".to_string()));
    }
    if config.build.output_dir.is_empty() {
        return Err(ConfigError::ValidationError(
            "build.output_dir must not be empty".to_string(),
        ));
    }
    if config.build.cache_dir.is_empty() {
        return Err(ConfigError::ValidationError(
            "build.cache_dir must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
[project]
name = "app"
version = "0.1.0"
main = "src/main.js"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.project.name, "app");
        assert_eq!(config.project.version, "0.1.0");
        assert_eq!(config.project.main, "src/main.js");
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[project]
name = "storefront"
version = "2.3.0"
description = "Customer-facing storefront"
authors = ["Alice", "Bob"]
main = "src/main.ts"
license = "MIT"

[entries]
styles = [
    "src/styles.css",
    { input = "src/theme.scss", bundle_name = "theme" },
]
scripts = [
    { input = "src/polyfill-extras.js", bundle_name = "extras", inject = false },
]

[build]
output_dir = "public"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.project.name, "storefront");
        assert_eq!(config.project.authors.len(), 2);
        assert_eq!(config.project.license.as_deref(), Some("MIT"));
        assert_eq!(config.entries.styles.len(), 2);
        assert_eq!(config.entries.scripts.len(), 1);
        assert!(!config.entries.scripts[0].inject());
        assert_eq!(config.build.output_dir, "public");
        assert_eq!(config.build.cache_dir, ".baler-cache");
    }

    #[test]
    fn missing_name_errors() {
        let toml = r#"
[project]
name = ""
version = "0.1.0"
main = "src/main.js"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn missing_main_errors() {
        let toml = r#"
[project]
name = "app"
version = "0.1.0"
main = ""
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn empty_output_dir_errors() {
        let toml = r#"
[project]
name = "app"
version = "0.1.0"
main = "src/main.js"

[build]
output_dir = ""
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn empty_cache_dir_errors() {
        let toml = r#"
[project]
name = "app"
version = "0.1.0"
main = "src/main.js"

[build]
cache_dir = ""
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn io_error_from_nonexistent_dir() {
        let err = load_config(Path::new("/nonexistent/dir")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}

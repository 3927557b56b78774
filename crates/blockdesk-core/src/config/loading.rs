//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.blockdesk/config.toml` (global user preferences)
//! 3. **Project config** - `./.blockdesk/config.toml` (workspace-specific overrides)

use crate::config::types::ShellConfig;
use crate::config::validation::validate_config;
use std::fs;
use std::path::PathBuf;

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &(dyn std::error::Error + 'static)) -> bool {
    if let Some(io_err) = e.downcast_ref::<std::io::Error>() {
        return io_err.kind() == std::io::ErrorKind::NotFound;
    }

    let err_str = e.to_string();
    err_str.contains("No such file or directory") || err_str.contains("cannot find the path")
}

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.blockdesk/config.toml`)
/// 3. Project config (`./.blockdesk/config.toml`)
///
/// # Errors
///
/// Returns an error if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<ShellConfig, Box<dyn std::error::Error>> {
    let mut config = ShellConfig::default();

    // Load user config (file not found is expected, parse errors fail)
    match load_user_config() {
        Ok(user_config) => config = merge_configs(config, user_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with defaults
    }

    // Load project config (file not found is expected, parse errors fail)
    match load_project_config() {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with merged config
    }

    // Validate the final configuration
    validate_config(&config)?;

    Ok(config)
}

/// Load the user configuration from ~/.blockdesk/config.toml.
fn load_user_config() -> Result<ShellConfig, Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(".blockdesk").join("config.toml");
    load_config_file(&config_path)
}

/// Load the project configuration from ./.blockdesk/config.toml.
fn load_project_config() -> Result<ShellConfig, Box<dyn std::error::Error>> {
    let config_path = std::env::current_dir()?.join(".blockdesk").join("config.toml");
    load_config_file(&config_path)
}

/// Load a configuration file from the given path.
fn load_config_file(path: &PathBuf) -> Result<ShellConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;
    let config: ShellConfig = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;
    Ok(config)
}

/// Merge two configurations, with override_config taking precedence.
///
/// The `[hardware]` table is replaced wholesale: serde fills omitted
/// keys of the override file with the built-in defaults, so there is no
/// way to distinguish an explicit default from an absent key here.
pub fn merge_configs(_base: ShellConfig, override_config: ShellConfig) -> ShellConfig {
    ShellConfig {
        hardware: override_config.hardware,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::HardwareConfig;
    use std::io::Write;

    fn write_config(dir: &std::path::Path, contents: &str) -> PathBuf {
        let path = dir.join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_config_file_parses_hardware_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
            [hardware]
            window_title = "Bench Hardware"
            window_width = 1024
            "#,
        );

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.hardware.window_title, "Bench Hardware");
        assert_eq!(config.hardware.window_width, 1024);
        assert_eq!(config.hardware.window_height, 650);
    }

    #[test]
    fn test_load_config_file_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let result = load_config_file(&path);
        assert!(result.is_err());
        assert!(is_file_not_found(result.unwrap_err().as_ref()));
    }

    #[test]
    fn test_load_config_file_malformed_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[hardware\nwindow_width = ");

        let result = load_config_file(&path);
        assert!(result.is_err());
        assert!(!is_file_not_found(result.unwrap_err().as_ref()));
    }

    #[test]
    fn test_merge_override_wins() {
        let base = ShellConfig {
            hardware: HardwareConfig {
                window_title: "User Hardware".to_string(),
                window_width: 900,
                window_height: 700,
            },
        };
        let override_config = ShellConfig {
            hardware: HardwareConfig {
                window_title: "Project Hardware".to_string(),
                window_width: 800,
                window_height: 650,
            },
        };

        let merged = merge_configs(base, override_config);
        assert_eq!(merged.hardware.window_title, "Project Hardware");
        assert_eq!(merged.hardware.window_width, 800);
    }
}

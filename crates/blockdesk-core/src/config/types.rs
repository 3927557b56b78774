//! Configuration type definitions for the Blockdesk shell.
//!
//! These types come from two sources: [`Config`] is derived from
//! environment variables and system defaults at process start, while
//! [`ShellConfig`] is deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [hardware]
//! window_title = "Blockdesk Hardware"
//! window_width = 800
//! window_height = 650
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration for the shell process.
///
/// This struct holds paths and settings that are derived from
/// environment variables and system defaults, not from config files.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory for all Blockdesk data (default: ~/.blockdesk)
    pub blockdesk_dir: PathBuf,
    /// Log level for the application
    pub log_level: String,
    /// Asset resolution mode, selected via BLOCKDESK_ENV
    pub environment: Environment,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the user-level config file under the data directory.
    pub fn config_path(&self) -> PathBuf {
        self.blockdesk_dir.join("config.toml")
    }
}

/// Selects how bundled assets and the device-router module are located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Packaged build: the router module ships one directory above the
    /// app root.
    #[default]
    Production,
    /// Local build: the router module lives in the module cache under
    /// the app root.
    Development,
}

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.blockdesk/config.toml`
/// 2. Project config: `./.blockdesk/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShellConfig {
    /// Hardware window chrome settings
    #[serde(default)]
    pub hardware: HardwareConfig,
}

/// Hardware window chrome settings.
///
/// The built-in defaults match the packaged product (800×650, fixed
/// title); the config table exists as an override for kiosk and
/// classroom deployments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HardwareConfig {
    /// Title of the hardware window.
    #[serde(default = "crate::config::defaults::default_window_title")]
    pub window_title: String,

    /// Width of the hardware window in logical pixels.
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: u32,

    /// Height of the hardware window in logical pixels.
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_config_deserializes_empty_table() {
        let config: ShellConfig = toml::from_str("").unwrap();
        assert_eq!(config.hardware, HardwareConfig::default());
    }

    #[test]
    fn test_hardware_config_partial_override() {
        let config: ShellConfig = toml::from_str(
            r#"
            [hardware]
            window_title = "Classroom Hardware"
            "#,
        )
        .unwrap();
        assert_eq!(config.hardware.window_title, "Classroom Hardware");
        assert_eq!(config.hardware.window_width, 800);
        assert_eq!(config.hardware.window_height, 650);
    }

    #[test]
    fn test_shell_config_serde_roundtrip() {
        let config = ShellConfig {
            hardware: HardwareConfig {
                window_title: "Bench".to_string(),
                window_width: 1024,
                window_height: 768,
            },
        };
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: ShellConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.hardware, config.hardware);
    }

    #[test]
    fn test_config_path_is_under_data_dir() {
        let config = Config {
            blockdesk_dir: PathBuf::from("/data/.blockdesk"),
            log_level: "info".to_string(),
            environment: Environment::Production,
        };
        assert_eq!(
            config.config_path(),
            PathBuf::from("/data/.blockdesk/config.toml")
        );
    }
}

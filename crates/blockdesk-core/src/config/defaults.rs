//! Default implementations for configuration types.
//!
//! This module contains all `Default` implementations and helper
//! functions for providing default values in serde deserialization.

use crate::config::types::{Config, Environment, HardwareConfig};

/// Returns the default hardware window title.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_window_title() -> String {
    "Blockdesk Hardware".to_string()
}

/// Returns the default hardware window width (800).
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_window_width() -> u32 {
    800
}

/// Returns the default hardware window height (650).
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_window_height() -> u32 {
    650
}

impl Default for HardwareConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let blockdesk_dir = match dirs::home_dir() {
            Some(home) => home.join(".blockdesk"),
            None => {
                eprintln!(
                    "Warning: Could not find home directory. Set HOME environment variable. \
                    Using fallback directory."
                );
                std::env::temp_dir().join(".blockdesk")
            }
        };

        Self {
            blockdesk_dir,
            log_level: std::env::var("BLOCKDESK_LOG_LEVEL").unwrap_or("info".to_string()),
            environment: parse_environment(),
        }
    }
}

/// Parse BLOCKDESK_ENV with a warning on invalid values.
fn parse_environment() -> Environment {
    let Ok(val) = std::env::var("BLOCKDESK_ENV") else {
        return Environment::Production;
    };

    match val.as_str() {
        "production" => Environment::Production,
        "development" => Environment::Development,
        _ => {
            eprintln!(
                "Warning: Invalid BLOCKDESK_ENV '{}', using production",
                val
            );
            Environment::Production
        }
    }
}

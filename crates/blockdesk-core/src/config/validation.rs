//! Configuration validation.

use crate::config::types::ShellConfig;
use crate::errors::ConfigError;

/// Validate a loaded configuration.
///
/// Runs after the hierarchy merge, so it sees the final values the
/// shell would actually use.
pub fn validate_config(config: &ShellConfig) -> Result<(), ConfigError> {
    if config.hardware.window_title.trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "hardware.window_title cannot be empty".to_string(),
        });
    }

    if config.hardware.window_width == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "hardware.window_width must be greater than 0".to_string(),
        });
    }

    if config.hardware.window_height == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "hardware.window_height must be greater than 0".to_string(),
        });
    }

    Ok(())
}

//! # Configuration System
//!
//! Hierarchical TOML configuration system for the Blockdesk shell.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.blockdesk/config.toml` (global user preferences)
//! 3. **Project config** - `./.blockdesk/config.toml` (workspace-specific overrides)
//!
//! Runtime settings that never live in config files (data directory,
//! log level, the production/development asset toggle) come from
//! [`Config`], which reads environment variables at construction.
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.blockdesk/config.toml
//! [hardware]
//! window_title = "Classroom Hardware"
//! window_width = 1024
//! window_height = 768
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use blockdesk_core::config::ShellConfig;
//!
//! // Handle config errors explicitly - don't silently fall back to defaults
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ShellConfig::load_hierarchy()?;
//!     config.validate()?;
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{Config, Environment, HardwareConfig, ShellConfig};
pub use validation::validate_config;

// Backward-compatible delegation for ShellConfig methods
impl ShellConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, Box<dyn std::error::Error>> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}

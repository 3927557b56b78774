use tracing::{error, info};

use crate::config::Environment;

pub fn log_app_startup(environment: Environment) {
    info!(
        event = "shell.app.startup_completed",
        version = env!("CARGO_PKG_VERSION"),
        environment = ?environment
    );
}

pub fn log_app_shutdown() {
    info!(event = "shell.app.shutdown_started");
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "shell.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}

use crate::errors::BlockdeskError;

#[derive(Debug, thiserror::Error)]
pub enum HardwareWindowError {
    #[error("Hardware window is already open")]
    AlreadyOpen,

    #[error("Window operation failed: {source}")]
    WindowError {
        #[from]
        source: crate::window::WindowError,
    },

    #[error("Router operation failed: {source}")]
    RouterError {
        #[from]
        source: crate::router::RouterError,
    },
}

impl BlockdeskError for HardwareWindowError {
    fn error_code(&self) -> &'static str {
        match self {
            HardwareWindowError::AlreadyOpen => "HARDWARE_WINDOW_ALREADY_OPEN",
            HardwareWindowError::WindowError { .. } => "HARDWARE_WINDOW_HOST_ERROR",
            HardwareWindowError::RouterError { .. } => "HARDWARE_WINDOW_ROUTER_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::RouterError;
    use crate::window::WindowError;

    #[test]
    fn test_already_open_display() {
        let error = HardwareWindowError::AlreadyOpen;
        assert_eq!(error.to_string(), "Hardware window is already open");
        assert_eq!(error.error_code(), "HARDWARE_WINDOW_ALREADY_OPEN");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_window_error_conversion() {
        let error = HardwareWindowError::from(WindowError::CreationFailed {
            message: "display unavailable".to_string(),
        });
        assert_eq!(error.error_code(), "HARDWARE_WINDOW_HOST_ERROR");
        assert!(error.to_string().contains("display unavailable"));
    }

    #[test]
    fn test_router_error_conversion() {
        let error = HardwareWindowError::from(RouterError::ConstructionFailed {
            message: "module missing".to_string(),
        });
        assert_eq!(error.error_code(), "HARDWARE_WINDOW_ROUTER_ERROR");
    }
}

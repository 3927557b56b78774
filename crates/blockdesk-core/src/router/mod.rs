//! Device router/server collaborator contract.
//!
//! The router is a separately packaged module that owns all actual
//! hardware communication (device discovery, serial and network I/O).
//! The shell constructs one router per hardware window, registers
//! pending room ids on it, and tears it down with the window. Its
//! internals are opaque here; only the lifecycle surface is typed.

use std::path::PathBuf;

use crate::errors::BlockdeskError;
use crate::window::HardwareWindow;

/// Configuration handed to the router on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RouterConfig {
    /// Root of the packaged device-router module.
    pub root_app_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("Router construction failed: {message}")]
    ConstructionFailed { message: String },

    #[error("Server process spawn failed: {message}")]
    ServerSpawnFailed { message: String },
}

impl BlockdeskError for RouterError {
    fn error_code(&self) -> &'static str {
        match self {
            RouterError::ConstructionFailed { .. } => "ROUTER_CONSTRUCTION_FAILED",
            RouterError::ServerSpawnFailed { .. } => "ROUTER_SERVER_SPAWN_FAILED",
        }
    }
}

/// The router's inner server-process manager.
pub trait ServerProcess {
    /// Release the server-side resource.
    fn close(&mut self);
}

/// Session router bridging the hardware window to device backends.
pub trait DeviceRouter {
    type Server: ServerProcess;

    /// Register a pending hardware session to attach to.
    fn add_room_id(&mut self, room_id: &str);

    /// Release router-held resources. Does not close the inner server;
    /// the two are torn down separately.
    fn close(&mut self);

    fn server(&mut self) -> &mut Self::Server;
}

/// Builds a router, with a freshly spawned server-process manager, for
/// a hardware window.
pub trait RouterFactory<W: HardwareWindow> {
    type Router: DeviceRouter;

    fn build(&mut self, window: &W, config: &RouterConfig) -> Result<Self::Router, RouterError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_error_codes() {
        let error = RouterError::ConstructionFailed {
            message: "module missing".to_string(),
        };
        assert_eq!(error.error_code(), "ROUTER_CONSTRUCTION_FAILED");
        assert!(!error.is_user_error());

        let error = RouterError::ServerSpawnFailed {
            message: "port in use".to_string(),
        };
        assert_eq!(error.error_code(), "ROUTER_SERVER_SPAWN_FAILED");
    }

    /// Documents the teardown contract: closing the router must leave
    /// the inner server untouched so the caller can close it separately.
    #[test]
    fn test_router_and_server_close_independently() {
        struct CountingServer {
            closes: usize,
        }
        impl ServerProcess for CountingServer {
            fn close(&mut self) {
                self.closes += 1;
            }
        }

        struct CountingRouter {
            closes: usize,
            server: CountingServer,
        }
        impl DeviceRouter for CountingRouter {
            type Server = CountingServer;
            fn add_room_id(&mut self, _room_id: &str) {}
            fn close(&mut self) {
                self.closes += 1;
            }
            fn server(&mut self) -> &mut CountingServer {
                &mut self.server
            }
        }

        let mut router = CountingRouter {
            closes: 0,
            server: CountingServer { closes: 0 },
        };

        router.close();
        assert_eq!(router.closes, 1);
        assert_eq!(router.server.closes, 0);

        router.server().close();
        assert_eq!(router.server.closes, 1);
    }
}

//! blockdesk-core: Core library for the Blockdesk desktop shell
//!
//! This library owns the lifecycle of the secondary "hardware" window
//! that bridges the block workspace to external device-control
//! hardware. It is used by the shell's main process; the GUI host, the
//! device router, and the shared room-id state are injected as trait
//! contracts.
//!
//! # Main Entry Points
//!
//! - [`hardware`] - Open, show, and tear down the hardware window
//! - [`window`] - Host GUI window contract
//! - [`router`] - Device router/server collaborator contract
//! - [`config`] - Configuration management
//! - [`assets`] - Bundled asset and router-module path resolution

pub mod assets;
pub mod config;
pub mod errors;
pub mod events;
pub mod hardware;
pub mod logging;
pub mod rooms;
pub mod router;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use assets::AssetLayout;
pub use config::{Config, Environment, HardwareConfig, ShellConfig};
pub use hardware::{CloseDisposition, CloseGate, HardwareWindowError, HardwareWindowManager};
pub use rooms::{PendingRoomIdSource, SharedRoomIds};
pub use router::{DeviceRouter, RouterConfig, RouterError, RouterFactory, ServerProcess};
pub use window::{ContentId, HardwareWindow, WindowError, WindowFactory, WindowOptions};

// Re-export logging initialization
pub use logging::init_logging;

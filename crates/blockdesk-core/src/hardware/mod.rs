//! Hardware window lifecycle management.
//!
//! Owns creation, visibility, and teardown of the secondary hardware
//! window, and coordinates the close-confirmation handshake between
//! the window's embedded page and the host process. The window and its
//! device router are a coupled pair: the router exists exactly while
//! the window does.

pub mod errors;
pub mod manager;
pub mod types;

// Re-export commonly used types
pub use errors::HardwareWindowError;
pub use manager::HardwareWindowManager;
pub use types::{CloseDisposition, CloseGate};

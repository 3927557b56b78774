//! Host GUI window contract for the hardware window.
//!
//! The shell never talks to a concrete GUI toolkit. Window creation and
//! control go through these traits, so the lifecycle manager can be
//! driven by any host framework and tested without a display server.

use std::path::PathBuf;

use blockdesk_protocol::ShellMessage;

use crate::assets::AssetLayout;
use crate::config::HardwareConfig;
use crate::errors::BlockdeskError;

/// Identifier of a window's content process.
///
/// Captured when the window is created and used to route page IPC to
/// the manager that owns the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentId(pub u32);

/// Options for creating the hardware window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// The window is created hidden; `open_window` shows it once the
    /// router is wired up.
    pub show_on_create: bool,
    pub menu_bar_visible: bool,
    /// Kept off so device polling in the page does not stall while the
    /// window is in the background.
    pub background_throttling: bool,
    /// Preload bundle injected into the window's content.
    pub preload_bundle: PathBuf,
    /// Page loaded into the window.
    pub page_url: String,
}

impl WindowOptions {
    /// Build the options for the hardware window from the merged config
    /// and the resolved asset layout.
    pub fn new(hardware: &HardwareConfig, assets: &AssetLayout) -> Self {
        Self {
            title: hardware.window_title.clone(),
            width: hardware.window_width,
            height: hardware.window_height,
            show_on_create: false,
            menu_bar_visible: false,
            background_throttling: false,
            preload_bundle: assets.preload_bundle.clone(),
            page_url: assets.page_url.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Window creation failed: {message}")]
    CreationFailed { message: String },

    #[error("Failed to deliver message to window content: {message}")]
    SendFailed { message: String },
}

impl BlockdeskError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::CreationFailed { .. } => "WINDOW_CREATION_FAILED",
            WindowError::SendFailed { .. } => "WINDOW_SEND_FAILED",
        }
    }
}

/// Handle to the live hardware window.
///
/// Show, restore, and focus are fire-and-effect calls into the host
/// framework. `request_close` goes through the host's close path, so
/// the manager's confirmation gate still applies; `destroy` does not.
pub trait HardwareWindow {
    fn show(&mut self);
    fn is_minimized(&self) -> bool;
    fn restore(&mut self);
    fn focus(&mut self);

    /// Ask the host to close the window. The host reports the attempt
    /// back to the manager as a close request before anything happens.
    fn request_close(&mut self);

    /// Destroy the native window without raising a close request.
    fn destroy(&mut self);

    fn content_id(&self) -> ContentId;

    /// Deliver a shell message to the window's embedded page.
    fn send(&mut self, message: ShellMessage) -> Result<(), WindowError>;
}

/// Creates hardware windows on the host GUI framework.
pub trait WindowFactory {
    type Window: HardwareWindow;

    fn create(&mut self, options: &WindowOptions) -> Result<Self::Window, WindowError>;
}

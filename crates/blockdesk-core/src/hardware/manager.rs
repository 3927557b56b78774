use tracing::{debug, info, warn};

use blockdesk_protocol::{PageMessage, ShellMessage};

use crate::hardware::errors::HardwareWindowError;
use crate::hardware::types::{CloseDisposition, CloseGate};
use crate::rooms::PendingRoomIdSource;
use crate::router::{DeviceRouter, RouterConfig, RouterFactory, ServerProcess};
use crate::window::{ContentId, HardwareWindow, WindowFactory, WindowOptions};

/// The live window/router pair. The two are created and destroyed
/// together; holding them in one struct makes the coupling structural.
struct LiveWindow<W, R> {
    window: W,
    router: R,
    content_id: ContentId,
}

/// Orchestrates the hardware window lifecycle.
///
/// At most one window is live per manager. A user-initiated close is
/// intercepted and relayed to the embedded page as a
/// [`ShellMessage::CloseConfirm`] round trip; only a
/// [`PageMessage::ForceClose`] answer lets the native close proceed.
/// Authoritative teardown via [`close_window`](Self::close_window)
/// bypasses the handshake entirely.
pub struct HardwareWindowManager<F, R>
where
    F: WindowFactory,
    R: RouterFactory<F::Window>,
{
    window_factory: F,
    router_factory: R,
    options: WindowOptions,
    router_config: RouterConfig,
    live: Option<LiveWindow<F::Window, R::Router>>,
    close_gate: CloseGate,
    handshake_armed: bool,
}

impl<F, R> HardwareWindowManager<F, R>
where
    F: WindowFactory,
    R: RouterFactory<F::Window>,
{
    pub fn new(
        window_factory: F,
        router_factory: R,
        options: WindowOptions,
        router_config: RouterConfig,
    ) -> Self {
        Self {
            window_factory,
            router_factory,
            options,
            router_config,
            live: None,
            close_gate: CloseGate::default(),
            handshake_armed: false,
        }
    }

    /// Open the hardware window, creating it first if none exists.
    ///
    /// Forwards the first pending room id (if any) to the router, then
    /// unconditionally shows, restores, and focuses the window.
    /// Idempotent: calling this on an already-open window just
    /// re-presents it.
    pub fn open_window(
        &mut self,
        rooms: &dyn PendingRoomIdSource,
    ) -> Result<(), HardwareWindowError> {
        if self.live.is_none() {
            self.create_window()?;
        }

        if let Some(live) = self.live.as_mut() {
            if let Some(room_id) = rooms.peek_first() {
                info!(event = "shell.hardware.room_id_forwarded", room_id = %room_id);
                live.router.add_room_id(&room_id);
            }

            live.window.show();
            if live.window.is_minimized() {
                live.window.restore();
            }
            live.window.focus();

            debug!(
                event = "shell.hardware.window_presented",
                content_id = live.content_id.0
            );
        }

        Ok(())
    }

    /// Create the window/router pair.
    ///
    /// Rejects with [`HardwareWindowError::AlreadyOpen`] while a window
    /// is live; [`open_window`](Self::open_window) is the idempotent
    /// entry point. If the router cannot be built the fresh window is
    /// destroyed again, so the window/router pairing invariant holds on
    /// the error path too.
    pub fn create_window(&mut self) -> Result<(), HardwareWindowError> {
        if self.live.is_some() {
            return Err(HardwareWindowError::AlreadyOpen);
        }

        info!(
            event = "shell.hardware.window_create_started",
            title = %self.options.title,
            width = self.options.width,
            height = self.options.height
        );

        let mut window = self.window_factory.create(&self.options)?;
        let router = match self.router_factory.build(&window, &self.router_config) {
            Ok(router) => router,
            Err(e) => {
                warn!(event = "shell.hardware.router_build_failed", error = %e);
                window.destroy();
                return Err(e.into());
            }
        };
        let content_id = window.content_id();

        self.close_gate = CloseGate::Unconfirmed;
        self.handshake_armed = true;
        self.live = Some(LiveWindow {
            window,
            router,
            content_id,
        });

        info!(
            event = "shell.hardware.window_created",
            content_id = content_id.0,
            root_app_path = %self.router_config.root_app_path.display()
        );

        Ok(())
    }

    /// Tear down the window/router pair.
    ///
    /// Authoritative: bypasses the confirmation handshake. Also bound
    /// as the handler for the window's native closed event. Safe to
    /// call when no window exists; teardown then reduces to resetting
    /// the gate and disarming the handshake.
    pub fn close_window(&mut self) {
        self.close_gate = CloseGate::Unconfirmed;
        self.handshake_armed = false;

        let Some(mut live) = self.live.take() else {
            debug!(event = "shell.hardware.close_without_window");
            return;
        };

        // Router first, then its server: the two resources are not
        // coupled inside the collaborator.
        live.router.close();
        live.router.server().close();
        live.window.destroy();

        info!(
            event = "shell.hardware.window_closed",
            content_id = live.content_id.0
        );
    }

    /// Whether `content_id` refers to the window this manager currently
    /// owns.
    ///
    /// Used by the host to route page IPC to the right manager. Returns
    /// false for every id while no window is open, including ids of
    /// previously destroyed windows.
    pub fn is_current_window(&self, content_id: ContentId) -> bool {
        self.live
            .as_ref()
            .is_some_and(|live| live.content_id == content_id)
    }

    /// Intercept a native close attempt.
    ///
    /// Until the page confirms, the attempt is cancelled and a
    /// [`ShellMessage::CloseConfirm`] round trip is started instead.
    /// Once the gate is confirmed the attempt proceeds; the host then
    /// fires the closed event, which runs
    /// [`handle_closed`](Self::handle_closed).
    pub fn handle_close_requested(&mut self) -> CloseDisposition {
        if !self.handshake_armed {
            return CloseDisposition::Proceed;
        }

        let Some(live) = self.live.as_mut() else {
            return CloseDisposition::Proceed;
        };

        if self.close_gate.is_confirmed() {
            debug!(
                event = "shell.hardware.close_allowed",
                content_id = live.content_id.0
            );
            return CloseDisposition::Proceed;
        }

        self.close_gate = CloseGate::AwaitingConfirmation;
        if let Err(e) = live.window.send(ShellMessage::CloseConfirm) {
            warn!(event = "shell.hardware.close_confirm_send_failed", error = %e);
        }

        debug!(
            event = "shell.hardware.close_prevented",
            content_id = live.content_id.0
        );
        CloseDisposition::Prevent
    }

    /// Process a message received from the hardware page.
    pub fn handle_page_message(&mut self, message: PageMessage) {
        match message {
            PageMessage::ForceClose => self.handle_force_close(),
        }
    }

    /// Host callback for the window's native closed event.
    pub fn handle_closed(&mut self) {
        self.close_window();
    }

    pub fn is_open(&self) -> bool {
        self.live.is_some()
    }

    pub fn close_gate(&self) -> CloseGate {
        self.close_gate
    }

    /// Content id of the live window, if one exists.
    pub fn content_id(&self) -> Option<ContentId> {
        self.live.as_ref().map(|live| live.content_id)
    }

    fn handle_force_close(&mut self) {
        if !self.handshake_armed {
            debug!(event = "shell.hardware.force_close_ignored");
            return;
        }

        let Some(live) = self.live.as_mut() else {
            debug!(event = "shell.hardware.force_close_without_window");
            return;
        };

        info!(
            event = "shell.hardware.force_close_received",
            content_id = live.content_id.0
        );
        self.close_gate = CloseGate::Confirmed;
        live.window.request_close();
    }
}

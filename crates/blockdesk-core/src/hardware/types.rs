/// Close-confirmation gate for the live hardware window.
///
/// Drives the Open → AwaitingConfirmation → Closed handshake. The gate
/// only advances through page messages; authoritative teardown resets
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloseGate {
    /// No close attempt has been intercepted since the window opened.
    #[default]
    Unconfirmed,
    /// A native close was cancelled; the page is deciding.
    AwaitingConfirmation,
    /// The page authorized the close; the next attempt proceeds.
    Confirmed,
}

impl CloseGate {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, CloseGate::Confirmed)
    }

    pub fn is_awaiting_confirmation(&self) -> bool {
        matches!(self, CloseGate::AwaitingConfirmation)
    }
}

/// What the host should do with an intercepted native close attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDisposition {
    /// Cancel the native close; a confirmation round trip is running.
    Prevent,
    /// Let the native close complete.
    Proceed,
}

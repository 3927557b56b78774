//! blockdesk-protocol: IPC messages for the hardware window handshake.
//!
//! Both sides of the channel depend on this crate: the shell main
//! process sends [`ShellMessage`] frames into the hardware window's
//! embedded page, and the page answers with [`PageMessage`] frames.
//! Frames are newline-delimited JSON with a `"type"` tag field.

pub mod errors;
pub mod messages;

pub use errors::ProtocolError;
pub use messages::{
    PageMessage, ShellMessage, decode_page_message, decode_shell_message, encode_page_message,
    encode_shell_message,
};

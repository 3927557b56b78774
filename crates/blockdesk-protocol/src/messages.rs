use serde::{Deserialize, Serialize};

use crate::errors::ProtocolError;

/// Shell -> hardware page messages.
///
/// Each variant maps to a JSONL frame with `"type"` as the tag field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShellMessage {
    /// Ask the embedded page to decide whether the window may close.
    ///
    /// The shell sends this after intercepting a native close attempt.
    /// The page runs its own confirmation flow (unsaved work, active
    /// device session) and answers with [`PageMessage::ForceClose`]
    /// if the close should proceed. No payload.
    #[serde(rename = "close_confirm")]
    CloseConfirm,
}

/// Hardware page -> shell messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PageMessage {
    /// Unconditionally authorize closing the hardware window.
    ///
    /// Overrides the close-confirmation gate; the shell responds by
    /// issuing the actual native close. No payload.
    #[serde(rename = "force_close")]
    ForceClose,
}

/// Encode a shell message as a newline-terminated JSON frame.
pub fn encode_shell_message(message: &ShellMessage) -> Result<String, ProtocolError> {
    let mut frame = serde_json::to_string(message)?;
    frame.push('\n');
    Ok(frame)
}

/// Encode a page message as a newline-terminated JSON frame.
pub fn encode_page_message(message: &PageMessage) -> Result<String, ProtocolError> {
    let mut frame = serde_json::to_string(message)?;
    frame.push('\n');
    Ok(frame)
}

/// Decode one frame received from the shell side of the channel.
pub fn decode_shell_message(line: &str) -> Result<ShellMessage, ProtocolError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Err(ProtocolError::EmptyFrame);
    }
    Ok(serde_json::from_str(line)?)
}

/// Decode one frame received from the page side of the channel.
pub fn decode_page_message(line: &str) -> Result<PageMessage, ProtocolError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Err(ProtocolError::EmptyFrame);
    }
    Ok(serde_json::from_str(line)?)
}

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("Empty frame")]
    EmptyFrame,

    #[error("Malformed message: {source}")]
    MalformedMessage {
        #[from]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_frame_display() {
        assert_eq!(ProtocolError::EmptyFrame.to_string(), "Empty frame");
    }

    #[test]
    fn test_malformed_message_wraps_serde_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = ProtocolError::from(source);
        assert!(error.to_string().starts_with("Malformed message:"));
    }
}

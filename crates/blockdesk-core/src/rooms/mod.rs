//! Pending hardware room identifiers.
//!
//! Room ids arrive from outside the shell (deep links, workspace
//! handoff) and sit in process-wide shared state until a hardware
//! window picks them up. The lifecycle manager only ever reads the
//! first pending entry; mutation belongs to the collaborator that
//! produced the id.

/// Read-only view of the pending room id queue.
pub trait PendingRoomIdSource {
    /// First pending room id, if any. Does not consume the entry.
    fn peek_first(&self) -> Option<String>;
}

/// Snapshot-backed source over the shared `room_ids` sequence.
#[derive(Debug, Clone, Default)]
pub struct SharedRoomIds {
    room_ids: Vec<String>,
}

impl SharedRoomIds {
    pub fn new(room_ids: Vec<String>) -> Self {
        Self { room_ids }
    }

    pub fn is_empty(&self) -> bool {
        self.room_ids.is_empty()
    }
}

impl PendingRoomIdSource for SharedRoomIds {
    fn peek_first(&self) -> Option<String> {
        self.room_ids.first().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_has_no_pending_room() {
        let rooms = SharedRoomIds::default();
        assert!(rooms.is_empty());
        assert_eq!(rooms.peek_first(), None);
    }

    #[test]
    fn test_only_first_room_id_is_consulted() {
        let rooms = SharedRoomIds::new(vec!["room-7".to_string(), "room-9".to_string()]);
        assert_eq!(rooms.peek_first(), Some("room-7".to_string()));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let rooms = SharedRoomIds::new(vec!["room-7".to_string()]);
        assert_eq!(rooms.peek_first(), Some("room-7".to_string()));
        assert_eq!(rooms.peek_first(), Some("room-7".to_string()));
    }
}

//! Room model.

use serde::{Deserialize, Serialize};

use super::Entity;

/// A bookable hotel room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier for the room.
    #[serde(default)]
    pub id: i64,
    /// Free-text description (e.g. "Sea view double").
    pub description: String,
}

impl Room {
    /// Creates a room with the given id and description.
    pub fn new(id: i64, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }
}

impl Entity for Room {
    const KIND: &'static str = "room";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_room_without_id_defaults_to_zero() {
        let room: Room = serde_json::from_str(r#"{"description": "Room A"}"#).unwrap();
        assert_eq!(room.id, 0);
        assert_eq!(room.description, "Room A");
    }

    #[test]
    fn test_set_id_replaces_identity() {
        let mut room = Room::new(0, "Room A");
        room.set_id(5);
        assert_eq!(room.id(), 5);
    }
}

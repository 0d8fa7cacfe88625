//! In-memory room registry keyed by room code.

use std::collections::HashMap;

use crate::domain::{GameError, Room, generate_room_code};

/// Mapping from room code to room state.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: HashMap<String, Room>,
}

impl RoomRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            rooms: HashMap::new(),
        }
    }

    /// Create a room.
    ///
    /// An explicit code that collides fails with
    /// [`GameError::RoomCodeExists`]; without an explicit code a fresh one
    /// is drawn and redrawn until unique.
    pub fn create(&mut self, code: Option<String>, created_at: i64) -> Result<&Room, GameError> {
        let code = match code {
            Some(code) => {
                if self.rooms.contains_key(&code) {
                    return Err(GameError::RoomCodeExists(code));
                }
                code
            }
            None => {
                let mut code = generate_room_code();
                while self.rooms.contains_key(&code) {
                    code = generate_room_code();
                }
                code
            }
        };

        let room = Room::new(code.clone(), created_at);
        Ok(self.rooms.entry(code).or_insert(room))
    }

    /// Look up a room by code.
    pub fn get(&self, code: &str) -> Option<&Room> {
        self.rooms.get(code)
    }

    /// Look up a room by code for mutation.
    pub fn get_mut(&mut self, code: &str) -> Option<&mut Room> {
        self.rooms.get_mut(code)
    }

    /// Delete a room. Returns `false` if the code was unknown.
    pub fn delete(&mut self, code: &str) -> bool {
        self.rooms.remove(code).is_some()
    }

    /// Remove every room.
    pub fn clear(&mut self) {
        self.rooms.clear();
    }

    /// Snapshot of all rooms. Insertion order is not guaranteed.
    pub fn list(&self) -> Vec<&Room> {
        self.rooms.values().collect()
    }

    /// Number of rooms currently registered.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the registry holds no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

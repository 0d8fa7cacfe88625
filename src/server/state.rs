//! Shared server state.

use tokio::sync::Mutex;

use crate::common::time::Clock;
use crate::registry::{ConnectionRegistry, RoomRegistry};

/// All mutable game state: rooms and live connections.
///
/// A single mutex guards the whole struct so that every protocol
/// transition (validate, mutate, enqueue broadcasts) runs start-to-finish
/// without interleaving. Buzz ordering and admin-by-first-join depend on
/// this serialization.
#[derive(Default)]
pub struct GameState {
    /// Room registry: code -> room state
    pub rooms: RoomRegistry,
    /// Connection registry: connection id -> channel and binding
    pub connections: ConnectionRegistry,
}

/// Shared application state
pub struct AppState {
    /// Game state behind one lock; see [`GameState`]
    pub game: Mutex<GameState>,
    /// Clock used for room creation and buzz receive timestamps
    pub clock: Box<dyn Clock>,
}

impl AppState {
    /// Create empty application state with the given clock.
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            game: Mutex::new(GameState::default()),
            clock,
        }
    }
}

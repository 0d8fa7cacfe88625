//! Room state machine: membership, admin authority and the buzz window.

use std::collections::HashMap;

use super::GameError;

/// A participant of a room. Identity is the client-chosen id; the server
/// trusts it as-is (inherent trust boundary of the protocol).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: String,
    pub name: String,
}

/// One registered buzz: who buzzed and the server receive time (millis).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuzzEntry {
    pub player_id: String,
    pub timestamp: i64,
}

/// An isolated game session identified by a short code.
#[derive(Debug, Clone)]
pub struct Room {
    /// Unique, immutable short code.
    pub code: String,
    /// Unix timestamp in milliseconds.
    pub created_at: i64,
    /// Membership by participant id. Liveness is tracked separately by the
    /// connection registry.
    pub players: HashMap<String, Participant>,
    /// First participant to ever join. Never reassigned on leave, even if
    /// the admin disconnects.
    pub admin_id: Option<String>,
    /// Whether the buzz window is currently open.
    pub buzz_enabled: bool,
    /// Buzzes in server arrival order, at most one entry per participant.
    pub buzz_list: Vec<BuzzEntry>,
}

impl Room {
    /// Create an empty room with a closed buzz window.
    pub fn new(code: String, created_at: i64) -> Self {
        Self {
            code,
            created_at,
            players: HashMap::new(),
            admin_id: None,
            buzz_enabled: false,
            buzz_list: Vec::new(),
        }
    }

    /// Insert or update a participant, idempotent by id. Rejoining with a
    /// known id updates the name instead of failing.
    ///
    /// The first joiner of an empty room becomes the admin.
    pub fn join(&mut self, player_id: String, name: String) {
        if self.players.is_empty() {
            self.admin_id = Some(player_id.clone());
        }
        self.players.insert(
            player_id.clone(),
            Participant {
                id: player_id,
                name,
            },
        );
    }

    /// Whether the given participant id holds admin authority.
    pub fn is_admin(&self, player_id: &str) -> bool {
        self.admin_id.as_deref() == Some(player_id)
    }

    /// Open the buzz window and clear previous results. Admin only.
    pub fn enable_buzz(&mut self, player_id: &str) -> Result<(), GameError> {
        if !self.is_admin(player_id) {
            return Err(GameError::Unauthorized);
        }
        self.buzz_enabled = true;
        self.buzz_list.clear();
        Ok(())
    }

    /// Close the buzz window and clear results. Admin only.
    pub fn reset_buzz(&mut self, player_id: &str) -> Result<(), GameError> {
        if !self.is_admin(player_id) {
            return Err(GameError::Unauthorized);
        }
        self.buzz_enabled = false;
        self.buzz_list.clear();
        Ok(())
    }

    /// Register a buzz at the given server receive time.
    ///
    /// Order in `buzz_list` is the authoritative race result: it reflects
    /// the order in which messages reached the server, never any
    /// client-reported time.
    pub fn buzz(&mut self, player_id: &str, timestamp: i64) -> Result<(), GameError> {
        if !self.buzz_enabled {
            return Err(GameError::BuzzNotEnabled);
        }
        if self.buzz_list.iter().any(|e| e.player_id == player_id) {
            return Err(GameError::AlreadyBuzzed);
        }
        self.buzz_list.push(BuzzEntry {
            player_id: player_id.to_string(),
            timestamp,
        });
        Ok(())
    }

    /// Remove a participant from membership. Returns `false` for unknown
    /// ids.
    ///
    /// A stale buzz entry of the departed participant stays in
    /// `buzz_list`, and the admin id is never reassigned here.
    pub fn remove_player(&mut self, player_id: &str) -> bool {
        self.players.remove(player_id).is_some()
    }
}

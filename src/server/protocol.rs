//! Wire protocol: JSON messages exchanged over the WebSocket.
//!
//! Inbound messages are discriminated by a `type` field, outbound messages
//! by a `status` field. Every outbound message except `ERROR` carries the
//! full room snapshot so clients never need to patch state incrementally.

use serde::{Deserialize, Serialize};

use crate::common::time::timestamp_to_rfc3339;
use crate::domain::{GameError, Room};

/// Inbound client message, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMsg {
    /// Join a room (idempotent by player id).
    #[serde(rename = "JOIN", rename_all = "camelCase")]
    Join {
        room_code: String,
        player_id: String,
        player_name: String,
    },
    /// Open the buzz window. Admin only.
    #[serde(rename = "ENABLE_BUZZ", rename_all = "camelCase")]
    EnableBuzz {
        room_code: String,
        player_id: String,
    },
    /// Close the buzz window and clear results. Admin only.
    #[serde(rename = "RESET_BUZZ", rename_all = "camelCase")]
    ResetBuzz {
        room_code: String,
        player_id: String,
    },
    /// Register a buzz.
    #[serde(rename = "BUZZ", rename_all = "camelCase")]
    Buzz {
        room_code: String,
        player_id: String,
    },
    /// Any `type` this server does not know. Dropped without a reply.
    #[serde(other)]
    Unknown,
}

/// Outbound server message, discriminated by `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum ServerMsg {
    /// Membership changed (join or leave).
    #[serde(rename = "STATE", rename_all = "camelCase")]
    State {
        room_code: String,
        details: RoomSnapshot,
    },
    /// The buzz window opened.
    #[serde(rename = "BUZZ_ENABLED", rename_all = "camelCase")]
    BuzzEnabled {
        room_code: String,
        details: RoomSnapshot,
    },
    /// The buzz window closed and results were cleared.
    #[serde(rename = "BUZZ_RESET", rename_all = "camelCase")]
    BuzzReset {
        room_code: String,
        details: RoomSnapshot,
    },
    /// A buzz was appended to the list.
    #[serde(rename = "BUZZ_UPDATE", rename_all = "camelCase")]
    BuzzUpdate {
        room_code: String,
        details: RoomSnapshot,
    },
    /// Request-scoped failure, sent only to the originating connection.
    #[serde(rename = "ERROR")]
    Error { code: ErrorCode, message: String },
}

impl ServerMsg {
    /// Private error reply for the originating connection.
    pub fn from_error(err: &GameError) -> Self {
        Self::Error {
            code: ErrorCode::from(err),
            message: err.to_string(),
        }
    }
}

/// Wire error codes carried by `ERROR` messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    RoomNotFound,
    RoomCodeExists,
    Unauthorized,
    BuzzNotEnabled,
    AlreadyBuzzed,
    InvalidMessage,
}

impl From<&GameError> for ErrorCode {
    fn from(err: &GameError) -> Self {
        match err {
            GameError::RoomNotFound => Self::RoomNotFound,
            GameError::RoomCodeExists(_) => Self::RoomCodeExists,
            GameError::Unauthorized => Self::Unauthorized,
            GameError::BuzzNotEnabled => Self::BuzzNotEnabled,
            GameError::AlreadyBuzzed => Self::AlreadyBuzzed,
            GameError::InvalidMessage(_) => Self::InvalidMessage,
        }
    }
}

/// Participant as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub id: String,
    pub name: String,
}

/// One buzz list entry as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuzzEntryInfo {
    pub player_id: String,
    pub timestamp: i64,
}

/// Full room snapshot broadcast with every state change and returned by
/// the HTTP API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshot {
    pub code: String,
    pub created_at: String,
    pub players: Vec<PlayerInfo>,
    pub admin_id: Option<String>,
    pub buzz_enabled: bool,
    pub buzz_list: Vec<BuzzEntryInfo>,
}

impl From<&Room> for RoomSnapshot {
    fn from(room: &Room) -> Self {
        let mut players: Vec<PlayerInfo> = room
            .players
            .values()
            .map(|p| PlayerInfo {
                id: p.id.clone(),
                name: p.name.clone(),
            })
            .collect();

        // Sort by id for consistent ordering
        players.sort_by(|a, b| a.id.cmp(&b.id));

        Self {
            code: room.code.clone(),
            created_at: timestamp_to_rfc3339(room.created_at),
            players,
            admin_id: room.admin_id.clone(),
            buzz_enabled: room.buzz_enabled,
            buzz_list: room
                .buzz_list
                .iter()
                .map(|e| BuzzEntryInfo {
                    player_id: e.player_id.clone(),
                    timestamp: e.timestamp,
                })
                .collect(),
        }
    }
}

/// Decode one inbound frame.
///
/// Undecodable payloads and known kinds with missing fields both map to
/// [`GameError::InvalidMessage`]. Unknown kinds decode successfully into
/// [`ClientMsg::Unknown`] and are ignored by the dispatcher.
pub fn decode_client_msg(text: &str) -> Result<ClientMsg, GameError> {
    serde_json::from_str(text).map_err(|e| GameError::InvalidMessage(e.to_string()))
}

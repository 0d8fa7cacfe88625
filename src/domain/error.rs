//! Error taxonomy for room and protocol operations.
//!
//! Every variant is request-scoped and non-fatal: the protocol handler
//! converts it into a private `ERROR` reply to the originating connection.

use thiserror::Error;

/// Errors produced by room transitions and message handling.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The referenced room code does not exist in the registry.
    #[error("room not found")]
    RoomNotFound,

    /// An explicitly requested room code is already taken.
    #[error("room code '{0}' already exists")]
    RoomCodeExists(String),

    /// Only the room admin may open or reset the buzz window.
    #[error("only the room admin may do this")]
    Unauthorized,

    /// A buzz arrived while the buzz window was closed.
    #[error("buzz window is not open")]
    BuzzNotEnabled,

    /// The participant already has an entry in the buzz list.
    #[error("player has already buzzed")]
    AlreadyBuzzed,

    /// The inbound payload could not be decoded or misses required fields.
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}

//! Connection registry: live connections and their room bindings.
//!
//! The registry is the sole source of truth for "who is actually online",
//! as opposed to [`Room::players`](crate::domain::Room) which records
//! membership. The two are kept in agreement by removing a participant
//! from its room whenever its binding is removed.

use std::collections::HashMap;

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::domain::{Participant, Room};

/// Identifier for one live WebSocket connection.
pub type ConnId = Uuid;

/// Outbound message channel for one connection.
///
/// Sends are fire-and-forget; the WebSocket task on the other end drains
/// the channel and pushes frames to the client.
pub type OutboundSender = mpsc::UnboundedSender<String>;

/// Association between a live connection and the (room, participant) it
/// represents. Created on successful JOIN only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub room_code: String,
    pub player_id: String,
}

struct Connection {
    sender: OutboundSender,
    binding: Option<Binding>,
}

/// Mapping from live connection to its outbound channel and binding.
#[derive(Default)]
pub struct ConnectionRegistry {
    conns: HashMap<ConnId, Connection>,
}

impl ConnectionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            conns: HashMap::new(),
        }
    }

    /// Register a freshly opened connection, not yet bound to any room.
    pub fn register(&mut self, conn_id: ConnId, sender: OutboundSender) {
        self.conns.insert(
            conn_id,
            Connection {
                sender,
                binding: None,
            },
        );
        tracing::debug!("Connection '{}' registered", conn_id);
    }

    /// Remove a connection entirely, returning its binding if it had one.
    pub fn unregister(&mut self, conn_id: ConnId) -> Option<Binding> {
        let conn = self.conns.remove(&conn_id)?;
        tracing::debug!("Connection '{}' unregistered", conn_id);
        conn.binding
    }

    /// Bind a connection to a (room, participant) pair after a successful
    /// JOIN. Rebinding replaces the previous binding.
    pub fn bind(&mut self, conn_id: ConnId, room_code: String, player_id: String) {
        if let Some(conn) = self.conns.get_mut(&conn_id) {
            conn.binding = Some(Binding {
                room_code,
                player_id,
            });
        } else {
            tracing::warn!("Cannot bind unknown connection '{}'", conn_id);
        }
    }

    /// Drop the binding of a connection, keeping the connection itself.
    pub fn unbind(&mut self, conn_id: ConnId) -> Option<Binding> {
        self.conns.get_mut(&conn_id)?.binding.take()
    }

    /// Current binding of a connection, if any.
    pub fn binding_of(&self, conn_id: ConnId) -> Option<&Binding> {
        self.conns.get(&conn_id)?.binding.as_ref()
    }

    /// Outbound channel of a connection, if it is still registered.
    pub fn sender_of(&self, conn_id: ConnId) -> Option<&OutboundSender> {
        self.conns.get(&conn_id).map(|c| &c.sender)
    }

    /// Outbound channels of every connection currently bound to the room.
    pub fn senders_for_room(&self, room_code: &str) -> Vec<&OutboundSender> {
        self.conns
            .values()
            .filter(|c| {
                c.binding
                    .as_ref()
                    .is_some_and(|b| b.room_code == room_code)
            })
            .map(|c| &c.sender)
            .collect()
    }

    /// Participants of the room that are online right now, resolved by
    /// scanning bindings and looking each id up in the room's membership.
    /// Sorted by id for consistent ordering.
    pub fn online_participants(&self, room: &Room) -> Vec<Participant> {
        let mut online: Vec<Participant> = self
            .conns
            .values()
            .filter_map(|c| c.binding.as_ref())
            .filter(|b| b.room_code == room.code)
            .filter_map(|b| room.players.get(&b.player_id).cloned())
            .collect();

        online.sort_by(|a, b| a.id.cmp(&b.id));

        online
    }

    /// Number of registered connections.
    pub fn len(&self) -> usize {
        self.conns.len()
    }

    /// Whether no connections are registered.
    pub fn is_empty(&self) -> bool {
        self.conns.is_empty()
    }
}

//! In-memory registries: rooms by code, live connections by id.
//!
//! Both registries are plain owned state; the server wraps them in a
//! single mutex so every protocol transition is serialized (see
//! [`crate::server`]).

mod connections;
mod rooms;

pub use connections::{Binding, ConnId, ConnectionRegistry, OutboundSender};
pub use rooms::RoomRegistry;

//! Real-time buzzer game server library.
//!
//! Participants join a room via a short code, the first joiner becomes the
//! room admin, the admin opens a buzz window and everyone races to buzz.
//! The server decides buzz order and keeps every connected client in sync
//! over WebSocket.

// layers
pub mod domain;
pub mod registry;
pub mod server;

// shared library
pub mod common;

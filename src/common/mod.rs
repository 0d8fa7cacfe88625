//! Shared utilities for the buzzer game server.

pub mod logger;
pub mod time;

//! Axum server wiring for the buzzer game.

mod handler;
mod http;
mod protocol;
mod runner;
mod signal;
mod state;

pub use handler::{handle_client_msg, handle_disconnect};
pub use protocol::{
    BuzzEntryInfo, ClientMsg, ErrorCode, PlayerInfo, RoomSnapshot, ServerMsg, decode_client_msg,
};
pub use runner::run_server;
pub use state::{AppState, GameState};

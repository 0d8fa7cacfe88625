//! Domain model for the buzzer game.
//!
//! A [`Room`] holds the participants, the admin identity and the buzz
//! window state. All state transitions validate before they mutate, so a
//! rejected operation leaves the room untouched.

mod code;
mod error;
mod room;

pub use code::{CODE_ALPHABET, CODE_LENGTH, generate_room_code};
pub use error::GameError;
pub use room::{BuzzEntry, Participant, Room};

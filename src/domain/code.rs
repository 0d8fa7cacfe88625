//! Room code generation.

use rand::Rng;

/// Alphabet for room codes. Visually confusable characters (I, O, 0, 1)
/// are excluded so codes can be read aloud or copied from a screen.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Fixed length of every room code.
pub const CODE_LENGTH: usize = 6;

/// Draw a random room code from the confusable-free alphabet.
///
/// Uniqueness against existing rooms is the registry's concern; callers
/// redraw on collision.
pub fn generate_room_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s for the game
//! session and into app-level [`Command`]s (save, load, quit) for the host.
//! Key repeat comes from the terminal; there is no DAS/ARR handling.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, map_key, should_quit, Command};

//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Terminal
//! key repeat is left to the caller.

pub mod map;

pub use cubetris_types as types;

pub use map::{handle_key_event, should_quit};

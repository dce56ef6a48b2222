//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Kept apart
//! from the runner so the mapping can be tested without a terminal.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};

//! Game session driver.
//!
//! Wraps the immutable board engine in a small stateful loop: a seeded RNG,
//! score and move counters, and game-over detection. Same seed, same moves,
//! same boards.

pub mod session;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use session::{Session, SessionConfig, SessionError, StepReport};

//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the complete 2048 rule set as immutable values. It has no
//! dependency on UI or I/O, which makes it:
//!
//! - **Deterministic**: the only randomness comes from a caller-supplied RNG
//! - **Immutable**: every accepted move returns a new [`Board`]; the old one stays valid
//! - **Thread-safe**: boards are plain `Send + Sync` values that are never mutated
//!
//! # Module Structure
//!
//! - [`tile`]: empty cells and validated power-of-two numbers, merging
//! - [`board`]: square grid, shape validation, slide/merge, placement, slidability
//! - [`moves`]: the `Move` value object dispatched by [`Board::apply_move`]
//! - [`error`]: the [`GameError`] taxonomy
//!
//! # Rules
//!
//! - A slide compacts every lane toward one edge and merges equal neighbours,
//!   at most once per resulting tile: `2 2 2 .` slid left becomes `4 2 . .`
//! - A slide that would change nothing is rejected with [`GameError::NoOp`]
//! - A placement puts a 2 or a 4 on an empty cell
//! - A board may carry a [`Phase`](types::Phase) forcing slides and placements to alternate
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, Move};
//! use tui_2048_core::types::{Direction, Phase};
//!
//! let board = Board::from_rows(&[[2, 2], [8, 0]]).unwrap().with_phase(Phase::Slide);
//!
//! let slid = board.apply_move(&Move::Slide(Direction::Left)).unwrap();
//! assert_eq!(slid.to_rows(), vec![vec![4, 0], vec![8, 0]]);
//! assert_eq!(slid.phase(), Phase::Placement);
//!
//! let placed = slid.apply_move(&Move::place_tile(0, 1, 2).unwrap()).unwrap();
//! assert_eq!(placed.at(0, 1).value(), 2);
//!
//! // The original values are untouched.
//! assert_eq!(board.at(0, 0).value(), 2);
//! ```

pub mod board;
pub mod error;
pub mod moves;
pub mod tile;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{lane_to_cell, Board, SlideOutcome};
pub use error::{GameError, Result};
pub use moves::Move;
pub use tile::{Number, Tile};

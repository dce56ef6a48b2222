//! Error taxonomy for board construction and transitions.
//!
//! Every failure is local and synchronous: the board a call was made on is
//! never modified, so callers can keep using it after an error.

use crate::tile::Tile;
use crate::types::{Direction, Phase};

/// Errors surfaced by tiles, board construction and board transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid tile value {value}: {reason}")]
    InvalidTile { value: u64, reason: &'static str },

    #[error("cannot merge {left} with {right}")]
    InvalidMerge { left: Tile, right: Tile },

    #[error("board shape mismatch: {detail}")]
    ShapeMismatch { detail: String },

    #[error("wrong phase: next turn must be a {expected}")]
    WrongPhase { expected: Phase },

    #[error("the board can't slide {direction}")]
    NoOp { direction: Direction },

    #[error("cell ({row}, {col}) is already occupied")]
    OccupiedCell { row: usize, col: usize },

    #[error("no empty cell left to place a tile on")]
    NoEmptyCell,
}

pub type Result<T> = std::result::Result<T, GameError>;

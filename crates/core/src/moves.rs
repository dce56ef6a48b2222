//! Moves - value objects describing one board transition

use std::fmt;

use crate::error::{GameError, Result};
use crate::tile::Number;
use crate::types::Direction;

/// A single transition: a slide, or placing a 2 or 4 on an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Slide(Direction),
    PlaceTile { row: usize, col: usize, tile: Number },
}

impl Move {
    /// Placement move, validating that `value` is a 2 or a 4.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Move;
    ///
    /// assert!(Move::place_tile(0, 1, 4).is_ok());
    /// assert!(Move::place_tile(0, 1, 8).is_err());
    /// ```
    pub fn place_tile(row: usize, col: usize, value: u32) -> Result<Self> {
        let tile = Number::new(value)?;
        if !tile.is_placeable() {
            return Err(GameError::InvalidTile {
                value: value.into(),
                reason: "only a 2 or a 4 can be placed",
            });
        }
        Ok(Move::PlaceTile { row, col, tile })
    }

    pub fn is_slide(&self) -> bool {
        matches!(self, Move::Slide(_))
    }
}

impl From<Direction> for Move {
    fn from(direction: Direction) -> Self {
        Move::Slide(direction)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Slide(direction) => write!(f, "slide {direction}"),
            Move::PlaceTile { row, col, tile } => write!(f, "place {tile} at ({row}, {col})"),
        }
    }
}

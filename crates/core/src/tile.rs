//! Tile module - the closed set of cell values
//!
//! A cell is either empty or holds a power of two that is at least 2.
//! [`Number`] keeps its value private, so an invalid tile can't be built
//! without going through [`Number::new`].

use std::fmt;

use crate::error::{GameError, Result};
use crate::types::PLACEABLE_VALUES;

/// A validated tile value: a power of two, at least 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Number(u32);

impl Number {
    /// The smallest tile, 2.
    pub const TWO: Number = Number(2);

    /// The other value a placement may use, 4.
    pub const FOUR: Number = Number(4);

    /// Validate `value` as a tile number.
    pub fn new(value: u32) -> Result<Self> {
        if value < 2 {
            return Err(GameError::InvalidTile {
                value: value.into(),
                reason: "must be at least 2",
            });
        }
        if !value.is_power_of_two() {
            return Err(GameError::InvalidTile {
                value: value.into(),
                reason: "not a power of two",
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Power of two this number is, e.g. 3 for 8.
    pub fn exponent(self) -> u32 {
        self.0.trailing_zeros()
    }

    /// Whether a placement may put this number on the board (2 or 4).
    pub fn is_placeable(self) -> bool {
        PLACEABLE_VALUES.contains(&self.0)
    }

    /// Merge two equal numbers into their sum.
    ///
    /// The sum of two equal powers of two is the next power of two, so the
    /// only failure besides inequality is running out of `u32` range.
    pub fn merge(self, other: Number) -> Result<Number> {
        if self != other {
            return Err(GameError::InvalidMerge {
                left: Tile::Number(self),
                right: Tile::Number(other),
            });
        }
        self.0
            .checked_add(other.0)
            .map(Number)
            .ok_or(GameError::InvalidTile {
                value: u64::from(self.0) * 2,
                reason: "merged value overflows",
            })
    }
}

impl TryFrom<u32> for Number {
    type Error = GameError;

    fn try_from(value: u32) -> Result<Self> {
        Number::new(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content of one board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Tile {
    #[default]
    Empty,
    Number(Number),
}

impl Tile {
    /// `Empty` for 0, a validated `Number` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Tile;
    ///
    /// assert_eq!(Tile::from_number(0).unwrap(), Tile::Empty);
    /// assert_eq!(Tile::from_number(8).unwrap().value(), 8);
    /// assert!(Tile::from_number(6).is_err());
    /// ```
    pub fn from_number(value: u32) -> Result<Self> {
        if value == 0 {
            Ok(Tile::Empty)
        } else {
            Number::new(value).map(Tile::Number)
        }
    }

    /// Numeric value, 0 for an empty cell.
    pub fn value(self) -> u32 {
        match self {
            Tile::Empty => 0,
            Tile::Number(n) => n.value(),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Tile::Empty
    }

    pub fn number(self) -> Option<Number> {
        match self {
            Tile::Empty => None,
            Tile::Number(n) => Some(n),
        }
    }

    /// Merge two equal, non-empty tiles.
    pub fn merge(self, other: Tile) -> Result<Tile> {
        match (self, other) {
            (Tile::Number(a), Tile::Number(b)) => a.merge(b).map(Tile::Number),
            (left, right) => Err(GameError::InvalidMerge { left, right }),
        }
    }
}

impl From<Number> for Tile {
    fn from(value: Number) -> Self {
        Tile::Number(value)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Empty => f.write_str("."),
            Tile::Number(n) => write!(f, "{n}"),
        }
    }
}

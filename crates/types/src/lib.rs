//! Core types module - shared data structures and constants
//!
//! This module defines the small value types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the board engine, the session driver and the terminal input layer alike.
//!
//! # Board Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 4 | Side length of a classic 2048 board |
//! | `DEFAULT_STARTING_TILES` | 2 | Random tiles placed when a session starts |
//! | `FOUR_TILE_ODDS` | 10 | A spawned tile is a 4 with probability 1 in 10 |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, Phase};
//!
//! // Parse a direction (case-insensitive, short forms accepted)
//! assert_eq!(Direction::from_str("L"), Some(Direction::Left));
//! assert_eq!(Direction::Up.as_str(), "up");
//!
//! // Phase flips on every accepted move, unless unconstrained
//! assert_eq!(Phase::Slide.flip(), Phase::Placement);
//! assert_eq!(Phase::Unconstrained.flip(), Phase::Unconstrained);
//!
//! // Parse game action
//! let action = GameAction::from_str("left").unwrap();
//! assert_eq!(action, GameAction::Slide(Direction::Left));
//! ```

use std::fmt;

/// Side length of a classic 2048 board.
pub const DEFAULT_WIDTH: usize = 4;

/// Number of random tiles placed when a session starts.
pub const DEFAULT_STARTING_TILES: usize = 2;

/// A randomly spawned tile is a 4 with probability `1 / FOUR_TILE_ODDS`, else a 2.
pub const FOUR_TILE_ODDS: u32 = 10;

/// Tile values a placement may put on the board.
pub const PLACEABLE_VALUES: [u32; 2] = [2, 4];

/// The four slide directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order slidability checks scan them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters:
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("R"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Whether sliding this way walks lanes along columns rather than rows.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Whether lanes are read starting from the far edge (bottom or right).
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turn-phase constraint carried by a board
///
/// - **Unconstrained**: either move type is accepted, and stays unconstrained
/// - **Slide**: the next move must be a slide
/// - **Placement**: the next move must place a tile
///
/// A constrained phase alternates `Slide` ↔ `Placement` on every accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Unconstrained,
    Slide,
    Placement,
}

impl Phase {
    /// The phase after one accepted move.
    pub fn flip(self) -> Self {
        match self {
            Phase::Unconstrained => Phase::Unconstrained,
            Phase::Slide => Phase::Placement,
            Phase::Placement => Phase::Slide,
        }
    }

    /// Optional-bool view: `Some(true)` when a slide is mandated,
    /// `Some(false)` when a placement is, `None` when unconstrained.
    pub fn next_turn_is_slide(self) -> Option<bool> {
        match self {
            Phase::Unconstrained => None,
            Phase::Slide => Some(true),
            Phase::Placement => Some(false),
        }
    }

    pub fn allows_slide(self) -> bool {
        self != Phase::Placement
    }

    pub fn allows_placement(self) -> bool {
        self != Phase::Slide
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Unconstrained => "any",
            Phase::Slide => "slide",
            Phase::Placement => "place",
        }
    }
}

impl From<Option<bool>> for Phase {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Phase::Unconstrained,
            Some(true) => Phase::Slide,
            Some(false) => Phase::Placement,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Actions a player can request from a running session
///
/// These are produced by the terminal key map and consumed by the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Slide every tile toward one edge
    Slide(Direction),
    /// Start a new episode
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("down"), Some(GameAction::Slide(Direction::Down)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("undo"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("restart") {
            return Some(GameAction::Restart);
        }
        Direction::from_str(s).map(GameAction::Slide)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Slide(direction) => direction.as_str(),
            GameAction::Restart => "restart",
        }
    }
}

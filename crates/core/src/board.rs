//! Board module - an immutable square grid of tiles plus a turn phase
//!
//! Cells are stored in a flat vector, row-major (`row * width + col`).
//! Every transition builds a fresh board; the receiver is never modified.
//!
//! Slides are written once, as "slide left", over lanes. The direction is
//! applied purely through [`lane_to_cell`], which maps a lane coordinate
//! `(i, j)` to a physical `(row, col)` and is used for reads and writes alike.

use std::fmt;

use rand::Rng;

use crate::error::{GameError, Result};
use crate::moves::Move;
use crate::tile::{Number, Tile};
use crate::types::{Direction, Phase, FOUR_TILE_ODDS};

/// Map lane `i`, position `j` (0 = the edge tiles slide toward) to `(row, col)`.
///
/// Up/Down transpose the axes, Down/Right reflect the position along the lane.
#[inline]
pub fn lane_to_cell(direction: Direction, width: usize, i: usize, j: usize) -> (usize, usize) {
    match direction {
        Direction::Left => (i, j),
        Direction::Right => (i, width - 1 - j),
        Direction::Up => (j, i),
        Direction::Down => (width - 1 - j, i),
    }
}

/// Result of a slide, with what the merges were worth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideOutcome {
    pub board: Board,
    /// Number of merged pairs; the tile count drops by exactly this much.
    pub merges: usize,
    /// Sum of the values created by merges.
    pub score: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    /// Flat array of tiles, row-major order (row * width + col)
    cells: Vec<Tile>,
    phase: Phase,
}

impl Board {
    /// Create an empty `width` x `width` board with no phase constraint.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            cells: vec![Tile::Empty; width * width],
            phase: Phase::Unconstrained,
        }
    }

    /// Build a board from rows of numbers, 0 meaning empty.
    ///
    /// Every row must be as long as there are rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Board;
    ///
    /// let board = Board::from_rows(&[[2, 2], [8, 0]]).unwrap();
    /// assert_eq!(board.width(), 2);
    /// assert_eq!(board.at(1, 0).value(), 8);
    ///
    /// assert!(Board::from_rows(&[vec![2, 4]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self> {
        let width = rows.len();
        let mut cells = Vec::with_capacity(width * width);
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GameError::ShapeMismatch {
                    detail: format!(
                        "row {row_index} has {} cells but the board has {width} rows",
                        row.len()
                    ),
                });
            }
            for &value in row {
                cells.push(Tile::from_number(value)?);
            }
        }
        Ok(Self {
            width,
            cells,
            phase: Phase::Unconstrained,
        })
    }

    /// Build a board from a flat sequence, filled left to right then top to bottom.
    ///
    /// The length must be a perfect square.
    pub fn from_flat(values: &[u32]) -> Result<Self> {
        let width = integer_sqrt(values.len());
        if width * width != values.len() {
            return Err(GameError::ShapeMismatch {
                detail: format!("{} values don't form a square", values.len()),
            });
        }
        let cells = values
            .iter()
            .map(|&value| Tile::from_number(value))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            width,
            cells,
            phase: Phase::Unconstrained,
        })
    }

    /// The same grid with a different phase constraint.
    #[must_use]
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `Some(true)` when a slide must come next, `Some(false)` for a placement,
    /// `None` when either is accepted.
    pub fn next_turn_is_slide(&self) -> Option<bool> {
        self.phase.next_turn_is_slide()
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Tile at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..width`.
    pub fn at(&self, row: usize, col: usize) -> Tile {
        assert!(
            row < self.width && col < self.width,
            "({row}, {col}) is outside a {0}x{0} board",
            self.width
        );
        self.cells[self.index(row, col)]
    }

    /// Tile at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.width || col >= self.width {
            return None;
        }
        Some(self.cells[self.index(row, col)])
    }

    /// Tile at lane `i`, position `j`, as seen when sliding `direction`.
    #[inline]
    pub fn at_relative(&self, direction: Direction, i: usize, j: usize) -> Tile {
        let (row, col) = lane_to_cell(direction, self.width, i, j);
        self.at(row, col)
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().copied()
    }

    /// Tile values as rows, 0 for empty cells.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        if self.width == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|tile| tile.value()).collect())
            .collect()
    }

    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|tile| tile.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells() == 0
    }

    /// Sum of every tile value on the board.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|tile| u64::from(tile.value())).sum()
    }

    /// Largest tile, or `None` on an empty board.
    pub fn max_tile(&self) -> Option<Number> {
        self.cells.iter().filter_map(|tile| tile.number()).max()
    }

    /// Whether sliding `direction` would move or merge at least one tile.
    pub fn can_slide(&self, direction: Direction) -> bool {
        for i in 0..self.width {
            for j in 1..self.width {
                let prev = self.at_relative(direction, i, j - 1);
                let tile = self.at_relative(direction, i, j);
                // A tile slides into an empty cell or onto an equal tile.
                if !tile.is_empty() && (prev.is_empty() || prev == tile) {
                    return true;
                }
            }
        }
        false
    }

    /// Whether any of the four directions can slide.
    pub fn can_slide_at_all(&self) -> bool {
        Direction::ALL
            .iter()
            .any(|&direction| self.can_slide(direction))
    }

    /// Slide every tile toward `direction`, merging equal neighbours once.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Board;
    /// use tui_2048_core::types::Direction;
    ///
    /// let board = Board::from_rows(&[[2, 2], [8, 0]]).unwrap();
    /// let slid = board.slide(Direction::Left).unwrap();
    /// assert_eq!(slid.to_rows(), vec![vec![4, 0], vec![8, 0]]);
    /// ```
    pub fn slide(&self, direction: Direction) -> Result<Board> {
        self.slide_scored(direction).map(|outcome| outcome.board)
    }

    /// Like [`Board::slide`], also reporting merges and the score they earn.
    pub fn slide_scored(&self, direction: Direction) -> Result<SlideOutcome> {
        if !self.phase.allows_slide() {
            return Err(GameError::WrongPhase {
                expected: Phase::Placement,
            });
        }
        if !self.can_slide(direction) {
            return Err(GameError::NoOp { direction });
        }

        let width = self.width;
        let mut cells = vec![Tile::Empty; width * width];
        let mut merges = 0;
        let mut score = 0u64;

        let mut write = |i: usize, j: usize, tile: Tile| {
            let (row, col) = lane_to_cell(direction, width, i, j);
            cells[row * width + col] = tile;
        };

        for i in 0..width {
            // Next position to scan
            let mut j = 0;
            // Next position to write in the result lane
            let mut new_j = 0;

            loop {
                while j < width && self.at_relative(direction, i, j).is_empty() {
                    j += 1;
                }
                if j == width {
                    break;
                }
                let first = self.at_relative(direction, i, j);

                let mut k = j + 1;
                while k < width && self.at_relative(direction, i, k).is_empty() {
                    k += 1;
                }
                if k == width {
                    write(i, new_j, first);
                    break;
                }
                let next = self.at_relative(direction, i, k);

                if first == next {
                    let merged = first.merge(next)?;
                    merges += 1;
                    score += u64::from(merged.value());
                    write(i, new_j, merged);
                    // The merged partner is consumed.
                    j = k + 1;
                } else {
                    write(i, new_j, first);
                    // `next` becomes the first tile of the following step.
                    j = k;
                }
                new_j += 1;
            }
        }

        Ok(SlideOutcome {
            board: Board {
                width,
                cells,
                phase: self.phase.flip(),
            },
            merges,
            score,
        })
    }

    /// Place a 2 or 4 on the empty cell `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    pub fn place_tile(&self, row: usize, col: usize, tile: Number) -> Result<Board> {
        if !self.phase.allows_placement() {
            return Err(GameError::WrongPhase {
                expected: Phase::Slide,
            });
        }
        if !self.at(row, col).is_empty() {
            return Err(GameError::OccupiedCell { row, col });
        }
        if !tile.is_placeable() {
            return Err(GameError::InvalidTile {
                value: tile.value().into(),
                reason: "only a 2 or a 4 can be placed",
            });
        }

        let mut cells = self.cells.clone();
        cells[self.index(row, col)] = Tile::Number(tile);
        Ok(Board {
            width: self.width,
            cells,
            phase: self.phase.flip(),
        })
    }

    /// [`Board::place_tile`] taking a raw value.
    pub fn place_value(&self, row: usize, col: usize, value: u32) -> Result<Board> {
        self.place_tile(row, col, Number::new(value)?)
    }

    /// Pick a uniformly random empty cell and a random 2 or 4 for it.
    ///
    /// The cell is chosen by reservoir sampling over a single row-major pass;
    /// the tile is a 4 with probability `1 / FOUR_TILE_ODDS`.
    pub fn random_placement<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Move> {
        if !self.phase.allows_placement() {
            return Err(GameError::WrongPhase {
                expected: Phase::Slide,
            });
        }

        let mut chosen = None;
        let mut seen = 0u32;
        for row in 0..self.width {
            for col in 0..self.width {
                if self.at(row, col).is_empty() {
                    seen += 1;
                    if rng.gen_range(0..seen) == 0 {
                        chosen = Some((row, col));
                    }
                }
            }
        }
        let (row, col) = chosen.ok_or(GameError::NoEmptyCell)?;

        let tile = if rng.gen_range(0..FOUR_TILE_ODDS) == 0 {
            Number::FOUR
        } else {
            Number::TWO
        };
        Ok(Move::PlaceTile { row, col, tile })
    }

    /// Place a random tile on a random empty cell.
    pub fn place_random_tile<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board> {
        let placement = self.random_placement(rng)?;
        self.apply_move(&placement)
    }

    /// Apply a slide or a placement.
    pub fn apply_move(&self, mv: &Move) -> Result<Board> {
        match *mv {
            Move::Slide(direction) => self.slide(direction),
            Move::PlaceTile { row, col, tile } => self.place_tile(row, col, tile),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_WIDTH)
    }
}

/// Grid with cells right-aligned to the widest one, then the phase.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell_width = self
            .cells
            .iter()
            .map(|tile| tile.to_string().len())
            .max()
            .unwrap_or(1);

        for row in 0..self.width {
            for col in 0..self.width {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>cell_width$}", self.at(row, col).to_string())?;
            }
            writeln!(f)?;
        }
        write!(f, "next: {}", self.phase)
    }
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

//! Session module - drives a single-player game on top of the board engine
//!
//! A turn is a slide followed by one random placement. The board's phase is
//! kept at `Slide` between turns, so the rule "slide, then spawn" is enforced
//! by the board itself rather than by this driver.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::core::{Board, GameError, Move};
use crate::types::{Direction, GameAction, Phase, DEFAULT_STARTING_TILES, DEFAULT_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("the game is over")]
    GameOver,
}

/// Parameters for a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: usize,
    pub seed: u64,
    pub starting_tiles: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            seed: 1,
            starting_tiles: DEFAULT_STARTING_TILES,
        }
    }
}

/// What one turn did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub direction: Direction,
    pub merges: usize,
    pub score_gained: u64,
    /// The tile spawned after the slide.
    pub placement: Move,
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    rng: StdRng,
    board: Board,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    score: u64,
    moves: u32,
    game_over: bool,
}

impl Session {
    /// Start a session, seeding the RNG and placing the starting tiles.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let board = Self::opening_board(&config, &mut rng)?;
        let game_over = !board.can_slide_at_all();
        info!(
            width = config.width,
            seed = config.seed,
            starting_tiles = config.starting_tiles,
            "session started"
        );

        Ok(Self {
            config,
            rng,
            board,
            episode_id: 0,
            score: 0,
            moves: 0,
            game_over,
        })
    }

    fn opening_board(config: &SessionConfig, rng: &mut StdRng) -> Result<Board, GameError> {
        let mut board = Board::new(config.width);
        for _ in 0..config.starting_tiles {
            board = board.place_random_tile(rng)?;
        }
        Ok(board.with_phase(Phase::Slide))
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Play one turn: slide `direction`, then spawn a random tile.
    ///
    /// A slide that changes nothing is rejected and the session is left as is.
    pub fn step(&mut self, direction: Direction) -> Result<StepReport, SessionError> {
        if self.game_over {
            return Err(SessionError::GameOver);
        }

        let outcome = self.board.slide_scored(direction)?;
        let placement = outcome.board.random_placement(&mut self.rng)?;
        let board = outcome.board.apply_move(&placement)?;

        self.board = board;
        self.score += outcome.score;
        self.moves += 1;
        self.game_over = !self.board.can_slide_at_all();

        debug!(
            %direction,
            merges = outcome.merges,
            score = self.score,
            %placement,
            "turn played"
        );
        if self.game_over {
            info!(
                score = self.score,
                moves = self.moves,
                max_tile = self.board.max_tile().map_or(0, |n| n.value()),
                "game over"
            );
        }

        Ok(StepReport {
            direction,
            merges: outcome.merges,
            score_gained: outcome.score,
            placement,
            game_over: self.game_over,
        })
    }

    /// Start a new episode, continuing the same random stream.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        self.board = Self::opening_board(&self.config, &mut self.rng)?;
        self.episode_id += 1;
        self.score = 0;
        self.moves = 0;
        self.game_over = !self.board.can_slide_at_all();
        info!(episode_id = self.episode_id, "session restarted");
        Ok(())
    }

    /// Apply a player action. Returns the turn report for slides.
    pub fn apply_action(&mut self, action: GameAction) -> Result<Option<StepReport>, SessionError> {
        match action {
            GameAction::Slide(direction) => self.step(direction).map(Some),
            GameAction::Restart => self.restart().map(|()| None),
        }
    }
}

//! Session module - orchestrates a single game
//!
//! Ties together the board, the score keeper, the 3-slot spawn pool, and
//! the Active/GameOver state machine. A placement attempt runs the whole
//! pipeline atomically: validate, place, score, detect and clear lines,
//! award bonuses, consume the slot, refill when the pool empties, and
//! re-check for game over.

use arrayvec::ArrayVec;

use crate::core::board::{Board, ClearedCell};
use crate::core::moves::any_move_available;
use crate::core::rng::{RandomSource, SimpleRng};
use crate::core::scoring::ScoreKeeper;
use crate::core::shapes::Shape;
use crate::core::snapshot::SessionSnapshot;
use crate::effects::{NullSink, PresentationSink};
use crate::store::{BestScoreStore, NullStore};
use crate::types::{SessionState, POOL_SIZE};

/// Outcome of one placement attempt - the full pipeline result
#[derive(Debug, Clone, Default)]
pub struct PlacementReport {
    /// Whether the shape was placed (false = snap back, no state change)
    pub accepted: bool,
    /// Newly occupied cells (0 when rejected)
    pub cells_placed: u32,
    /// Every cell emptied by this placement's line clears
    pub cleared_cells: ArrayVec<ClearedCell, 64>,
    /// Simultaneous lines (rows + columns) cleared
    pub lines_cleared: u32,
    /// The board became empty immediately after the clear
    pub is_perfect_clear: bool,
    /// The session transitioned to (or already was in) game over
    pub is_game_over: bool,
    /// Points added by this attempt
    pub score_delta: u32,
    /// Current score after this attempt
    pub new_total: u32,
}

/// A single game: board, scores, spawn pool, and lifecycle state
pub struct GameSession {
    board: Board,
    scores: ScoreKeeper,
    pool: [Option<Shape>; POOL_SIZE],
    state: SessionState,
    rng: Box<dyn RandomSource>,
    sink: Box<dyn PresentationSink>,
}

impl GameSession {
    /// Create a session with default collaborators (seeded RNG, no
    /// persistence, no effects)
    pub fn new(seed: u32) -> Self {
        Self::with_collaborators(
            Box::new(SimpleRng::new(seed)),
            Box::new(NullStore),
            Box::new(NullSink),
        )
    }

    /// Create a session with injected collaborators
    ///
    /// The best score is loaded from the store up front; the pool is
    /// filled with 3 draws and game over is checked immediately (a
    /// pathological initial pool can end the game before the first move).
    pub fn with_collaborators(
        rng: Box<dyn RandomSource>,
        store: Box<dyn BestScoreStore>,
        sink: Box<dyn PresentationSink>,
    ) -> Self {
        let mut session = Self {
            board: Board::new(),
            scores: ScoreKeeper::new(store),
            pool: [None; POOL_SIZE],
            state: SessionState::Active,
            rng,
            sink,
        };
        session.refill_pool();
        session.check_game_over();
        session
    }

    /// Current score for this session
    pub fn score(&self) -> u32 {
        self.scores.current()
    }

    /// Best score across sessions
    pub fn best(&self) -> u32 {
        self.scores.best()
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    /// Shapes currently offered, by slot; consumed slots read None until
    /// the whole pool is consumed and refilled
    pub fn pool(&self) -> &[Option<Shape>; POOL_SIZE] {
        &self.pool
    }

    /// Get a reference to the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get a mutable reference to the board (for tests and tooling)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Attempt to place the shape in `slot` with its anchor at (row, col)
    ///
    /// A non-fitting shape is a normal rejected outcome with no state
    /// change. Referencing a slot outside the pool or one that is already
    /// consumed is a caller bug and panics.
    pub fn attempt_placement(&mut self, slot: usize, row: i8, col: i8) -> PlacementReport {
        assert!(slot < POOL_SIZE, "pool slot {} out of range", slot);

        let mut report = PlacementReport {
            new_total: self.scores.current(),
            is_game_over: self.is_game_over(),
            ..PlacementReport::default()
        };

        // No transition out of game over except restart
        if self.is_game_over() {
            return report;
        }

        let shape = self.pool[slot].expect("placement from a consumed pool slot");

        let Some(cells_placed) = self.board.place(shape.cells(), row, col, shape.color) else {
            return report;
        };

        report.accepted = true;
        report.cells_placed = cells_placed;
        report.score_delta += self.scores.on_placement(cells_placed);

        let lines = self.board.full_lines();
        if !lines.is_empty() {
            let total = lines.total();
            if total > 1 {
                self.sink.screen_shake();
                self.sink.combo(total);
            }

            report.cleared_cells = self.board.clear_lines(&lines);
            for cell in &report.cleared_cells {
                self.sink.cell_burst(cell.row, cell.col, cell.color);
            }

            if self.board.is_empty() {
                report.is_perfect_clear = true;
                self.sink.perfect_clear();
                report.score_delta += self.scores.on_perfect_clear();
            }

            report.lines_cleared = total;
            report.score_delta += self.scores.on_lines_cleared(total);
        }

        self.pool[slot] = None;
        if self.pool.iter().all(Option::is_none) {
            self.refill_pool();
        }

        self.check_game_over();

        report.is_game_over = self.is_game_over();
        report.new_total = self.scores.current();
        report
    }

    /// Start a fresh game: empty board, score 0 (best kept), new pool
    ///
    /// The random stream continues; restarting does not reseed.
    pub fn restart(&mut self) {
        self.board.clear();
        self.scores.reset();
        self.state = SessionState::Active;
        self.pool = [None; POOL_SIZE];
        self.refill_pool();
        self.check_game_over();
    }

    /// Produce a render snapshot without reusing a buffer
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snap = SessionSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Write the current state into a reusable snapshot buffer
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.pool = self.pool;
        out.score = self.scores.current();
        out.best = self.scores.best();
        out.game_over = self.is_game_over();
    }

    /// Fill all three slots with fresh draws
    /// Only called when every slot is empty - the pool is never partially
    /// refilled.
    fn refill_pool(&mut self) {
        debug_assert!(self.pool.iter().all(Option::is_none));
        for slot in &mut self.pool {
            *slot = Some(Shape::draw(self.rng.as_mut()));
        }
    }

    /// Transition to game over when no pooled shape fits anywhere
    fn check_game_over(&mut self) {
        if !any_move_available(&self.board, &self.pool) {
            self.state = SessionState::GameOver;
        }
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("score", &self.scores.current())
            .field("best", &self.scores.best())
            .field("pool", &self.pool)
            .finish()
    }
}

//! Flat, copyable render snapshot of a session
//!
//! The UI layer renders from this instead of poking at live state.
//! `SessionSnapshot` is plain data and can be reused across frames via
//! `GameSession::snapshot_into` without allocating.

use crate::core::shapes::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, POOL_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Palette-indexed grid: 0 = empty, 1-5 = color index + 1
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    /// Shapes currently offered, by slot
    pub pool: [Option<Shape>; POOL_SIZE],
    pub score: u32,
    pub best: u32,
    pub game_over: bool,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.pool = [None; POOL_SIZE];
        self.score = 0;
        self.best = 0;
        self.game_over = false;
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            pool: [None; POOL_SIZE],
            score: 0,
            best: 0,
            game_over: false,
        }
    }
}

//! Scoring module - placement, line-clear, and perfect-clear rules
//!
//! Rules:
//! - Placement: 10 points per newly occupied cell.
//! - Line clear: base points are 100 per line, multiplied by the combo
//!   factor, which equals the number of simultaneous lines. The bonus is
//!   therefore quadratic in the line count (1 line = 100, 2 = 400,
//!   3 = 900, ...), not linear.
//! - Perfect clear: flat 5000 on top, only when the board is empty after
//!   the clear.
//!
//! The best score syncs through an injected store on every surpass, not
//! only at game end.

use crate::store::BestScoreStore;
use crate::types::{LINE_POINTS, PERFECT_BONUS, POINTS_PER_CELL};

/// Points for placing a shape covering `cells` cells
pub fn placement_points(cells: u32) -> u32 {
    cells * POINTS_PER_CELL
}

/// Points for clearing `lines` simultaneous lines (rows + columns)
pub fn line_clear_points(lines: u32) -> u32 {
    // pts = 100 * lines, combo multiplier = lines
    LINE_POINTS * lines * lines
}

/// Tracks the running score and the persisted best
pub struct ScoreKeeper {
    current: u32,
    best: u32,
    store: Box<dyn BestScoreStore>,
}

impl ScoreKeeper {
    /// Create a keeper, loading the best score from the store
    /// An unreadable store reads as "no saved best" (0).
    pub fn new(store: Box<dyn BestScoreStore>) -> Self {
        let best = store.load().unwrap_or(0);
        Self {
            current: 0,
            best,
            store,
        }
    }

    /// Current score for this session
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Best score seen across sessions
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Award placement points; returns the amount added
    pub fn on_placement(&mut self, cells: u32) -> u32 {
        self.add(placement_points(cells))
    }

    /// Award line-clear points; returns the amount added
    pub fn on_lines_cleared(&mut self, lines: u32) -> u32 {
        if lines == 0 {
            return 0;
        }
        self.add(line_clear_points(lines))
    }

    /// Award the perfect-clear bonus; returns the amount added
    /// The caller verifies the board is empty post-clear.
    pub fn on_perfect_clear(&mut self) -> u32 {
        self.add(PERFECT_BONUS)
    }

    /// Reset the current score to 0 (restart only); best is kept
    pub fn reset(&mut self) {
        self.current = 0;
    }

    fn add(&mut self, points: u32) -> u32 {
        self.current = self.current.saturating_add(points);
        self.sync_best();
        points
    }

    /// Write through the store whenever the current score surpasses the best
    fn sync_best(&mut self) {
        if self.current > self.best {
            self.best = self.current;
            // Best-effort: persistence failure never blocks scoring
            let _ = self.store.save(self.best);
        }
    }
}

impl std::fmt::Debug for ScoreKeeper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreKeeper")
            .field("current", &self.current)
            .field("best", &self.best)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, NullStore};
    use anyhow::anyhow;

    #[test]
    fn test_placement_points() {
        assert_eq!(placement_points(1), 10);
        assert_eq!(placement_points(4), 40);
        assert_eq!(placement_points(5), 50);
    }

    #[test]
    fn test_line_clear_points_quadratic() {
        assert_eq!(line_clear_points(0), 0);
        assert_eq!(line_clear_points(1), 100);
        assert_eq!(line_clear_points(2), 400);
        assert_eq!(line_clear_points(3), 900);
        assert_eq!(line_clear_points(16), 25600);
    }

    #[test]
    fn test_keeper_accumulates() {
        let mut keeper = ScoreKeeper::new(Box::new(NullStore));
        assert_eq!(keeper.on_placement(3), 30);
        assert_eq!(keeper.on_lines_cleared(2), 400);
        assert_eq!(keeper.on_perfect_clear(), 5000);
        assert_eq!(keeper.current(), 5430);
    }

    #[test]
    fn test_keeper_zero_lines_add_nothing() {
        let mut keeper = ScoreKeeper::new(Box::new(NullStore));
        assert_eq!(keeper.on_lines_cleared(0), 0);
        assert_eq!(keeper.current(), 0);
    }

    #[test]
    fn test_best_loaded_and_synced() {
        let store = MemoryStore::with_score(100);
        let handle = store.clone();
        let mut keeper = ScoreKeeper::new(Box::new(store));
        assert_eq!(keeper.best(), 100);

        // Below best: no write
        keeper.on_placement(5);
        assert_eq!(keeper.best(), 100);
        assert_eq!(handle.saved(), Some(100));

        // Surpass: best follows and is written through
        keeper.on_lines_cleared(1);
        assert_eq!(keeper.current(), 150);
        assert_eq!(keeper.best(), 150);
        assert_eq!(handle.saved(), Some(150));
    }

    #[test]
    fn test_unreadable_store_reads_as_zero() {
        let keeper = ScoreKeeper::new(Box::new(MemoryStore::new()));
        assert_eq!(keeper.best(), 0);
    }

    #[test]
    fn test_save_failure_never_corrupts_scores() {
        struct FailingStore;
        impl crate::store::BestScoreStore for FailingStore {
            fn load(&self) -> anyhow::Result<u32> {
                Err(anyhow!("unavailable"))
            }
            fn save(&mut self, _score: u32) -> anyhow::Result<()> {
                Err(anyhow!("unavailable"))
            }
        }

        let mut keeper = ScoreKeeper::new(Box::new(FailingStore));
        keeper.on_placement(4);
        assert_eq!(keeper.current(), 40);
        assert_eq!(keeper.best(), 40);
    }

    #[test]
    fn test_reset_keeps_best() {
        let mut keeper = ScoreKeeper::new(Box::new(NullStore));
        keeper.on_lines_cleared(2);
        assert_eq!(keeper.best(), 400);

        keeper.reset();
        assert_eq!(keeper.current(), 0);
        assert_eq!(keeper.best(), 400);
    }
}

//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, networking, or I/O; persistence and
//! effects reach it only through injected traits.

pub mod board;
pub mod moves;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

// Re-export commonly used types
pub use board::{Board, ClearedCell, FullLines};
pub use moves::any_move_available;
pub use rng::{RandomSource, ScriptedRandom, SimpleRng};
pub use scoring::{line_clear_points, placement_points, ScoreKeeper};
pub use session::{GameSession, PlacementReport};
pub use shapes::{shape_cells, Shape};
pub use snapshot::SessionSnapshot;

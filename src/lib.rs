//! Block Blast core - an 8x8 block-placement puzzle engine
//!
//! The player drags polyomino shapes onto an 8x8 grid; full rows and
//! columns clear, with combo and perfect-clear bonuses. This crate is the
//! board/placement/clearing engine behind that game:
//!
//! - [`core::board`]: 8x8 grid with fit checks, placement, and line clears
//! - [`core::shapes`]: the small/big polyomino catalogs and random draws
//! - [`core::scoring`]: placement, combo, and perfect-clear scoring rules
//! - [`core::moves`]: any-legal-move detection (drives game over)
//! - [`core::session`]: the Active/GameOver state machine tying it together
//!
//! Rendering, input, and animation live outside; the session reports
//! cosmetic triggers through [`effects::PresentationSink`] and persists the
//! best score through [`store::BestScoreStore`], both injected.
//!
//! # Example
//!
//! ```
//! use blockblast::core::GameSession;
//!
//! let mut session = GameSession::new(12345);
//! let slot = session
//!     .pool()
//!     .iter()
//!     .position(|s| s.is_some())
//!     .expect("fresh pool is full");
//!
//! let report = session.attempt_placement(slot, 0, 0);
//! assert!(report.accepted);
//! assert_eq!(session.score(), report.new_total);
//! ```

pub mod core;
pub mod effects;
pub mod store;
pub mod types;

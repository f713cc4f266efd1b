//! Presentation sink boundary
//!
//! The session reports cosmetic triggers (combo text, perfect-clear text,
//! particle bursts, screen shake) through this trait. Notifications are
//! fire-and-forget: the sink is never queried and nothing in the core
//! waits on an effect completing.

use crate::types::ColorTag;

/// Receiver for cosmetic effect triggers; all methods default to no-ops
pub trait PresentationSink {
    /// A placement cleared `lines` simultaneous lines (only fired for 2+)
    fn combo(&mut self, _lines: u32) {}

    /// The board became empty immediately after a clear
    fn perfect_clear(&mut self) {}

    /// A single cell was emptied by a line clear
    fn cell_burst(&mut self, _row: u8, _col: u8, _color: ColorTag) {}

    /// A multi-line clear shakes the playfield
    fn screen_shake(&mut self) {}
}

/// Sink that ignores every trigger
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {}

//! Best-score persistence boundary
//!
//! The core never touches storage directly; it talks to an injected
//! `BestScoreStore`. Load failures read as "no saved score" and save
//! failures are discarded at the call site, so persistence trouble can
//! never block or corrupt gameplay.
//!
//! The on-disk format is a single JSON object: `{"score": <integer>}`.
//! Anything else is treated as no saved score.

use std::cell::Cell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// The single persisted record
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct BestScoreRecord {
    score: u32,
}

/// Boundary trait for loading and saving the best score
pub trait BestScoreStore {
    /// Load the saved best score; errors read as "no saved score"
    fn load(&self) -> Result<u32>;

    /// Persist a new best score; best-effort, callers discard the result
    fn save(&mut self, score: u32) -> Result<()>;
}

/// File-backed store holding `{"score": N}` at a fixed path
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl BestScoreStore for JsonFileStore {
    fn load(&self) -> Result<u32> {
        let text = fs::read_to_string(&self.path)?;
        let record: BestScoreRecord = serde_json::from_str(&text)?;
        Ok(record.score)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string(&BestScoreRecord { score })?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// In-memory store for tests; clones share the same backing slot
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<Cell<Option<u32>>>,
}

impl MemoryStore {
    /// Create an empty store (loads as "no saved score")
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a saved score
    pub fn with_score(score: u32) -> Self {
        let store = Self::default();
        store.slot.set(Some(score));
        store
    }

    /// Inspect the last saved value
    pub fn saved(&self) -> Option<u32> {
        self.slot.get()
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&self) -> Result<u32> {
        self.slot.get().ok_or_else(|| anyhow!("no saved score"))
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.slot.set(Some(score));
        Ok(())
    }
}

/// Store that remembers nothing; loads as 0, saves are dropped
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl BestScoreStore for NullStore {
    fn load(&self) -> Result<u32> {
        Ok(0)
    }

    fn save(&mut self, _score: u32) -> Result<()> {
        Ok(())
    }
}

//! Best score storage
//!
//! The game talks to a [`ScoreStore`]; the binary uses [`FileScoreStore`]
//! and tests use [`MemoryScoreStore`].

use std::path::{Path, PathBuf};

use crate::highscores::BestScore;

/// Default save file name
pub const DEFAULT_SAVE_FILE: &str = "save_data.json";

/// Persistence errors
#[derive(thiserror::Error, Debug)]
pub enum PersistError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Somewhere the best score can be kept between runs
pub trait ScoreStore {
    /// A store that has never been written reads as zero
    fn load(&self) -> Result<BestScore, PersistError>;
    fn save(&mut self, record: &BestScore) -> Result<(), PersistError>;
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Result<BestScore, PersistError> {
        if !self.path.exists() {
            return Ok(BestScore::default());
        }
        let json = std::fs::read_to_string(&self.path)?;
        BestScore::from_json(&json)
    }

    fn save(&mut self, record: &BestScore) -> Result<(), PersistError> {
        let json = record.to_json()?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store that remembers every save attempt
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub stored: Option<BestScore>,
    /// Scores passed to `save`, in order (including failed attempts)
    pub saved: Vec<u64>,
    /// Every operation fails when set
    pub fail: bool,
}

impl MemoryScoreStore {
    pub fn with_best(best_score: u64) -> Self {
        Self {
            stored: Some(BestScore::new(best_score)),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn unavailable() -> PersistError {
        PersistError::Io(std::io::Error::other("store unavailable"))
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<BestScore, PersistError> {
        if self.fail {
            return Err(Self::unavailable());
        }
        Ok(self.stored.unwrap_or_default())
    }

    fn save(&mut self, record: &BestScore) -> Result<(), PersistError> {
        self.saved.push(record.best_score);
        if self.fail {
            return Err(Self::unavailable());
        }
        self.stored = Some(*record);
        Ok(())
    }
}

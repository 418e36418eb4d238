//! Best score record
//!
//! A single number survives between runs. On disk it is a small JSON object
//! (`{"best_score": 1234}`); a missing key reads as zero.

use serde::{Deserialize, Serialize};

use crate::persistence::{PersistError, ScoreStore};

/// Persisted best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BestScore {
    #[serde(default)]
    pub best_score: u64,
}

impl BestScore {
    pub fn new(best_score: u64) -> Self {
        Self { best_score }
    }

    /// Record a finished run's score. Returns true on a new best.
    pub fn submit(&mut self, score: u64) -> bool {
        if score > self.best_score {
            self.best_score = score;
            true
        } else {
            false
        }
    }

    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed with two-space indent
    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Best-effort load: any failure reads as zero
    pub fn load<S: ScoreStore + ?Sized>(store: &S) -> Self {
        match store.load() {
            Ok(record) => {
                log::info!("Loaded best score {}", record.best_score);
                record
            }
            Err(err) => {
                log::warn!("Could not load best score, starting from 0: {}", err);
                Self::default()
            }
        }
    }

    pub fn save<S: ScoreStore + ?Sized>(&self, store: &mut S) -> Result<(), PersistError> {
        store.save(self)?;
        log::info!("Best score saved ({})", self.best_score);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryScoreStore;

    #[test]
    fn test_submit_only_raises() {
        let mut best = BestScore::new(100);
        assert!(!best.submit(40));
        assert!(!best.submit(100));
        assert_eq!(best.best_score, 100);
        assert!(best.submit(101));
        assert_eq!(best.best_score, 101);
    }

    #[test]
    fn test_json_shape() {
        let json = BestScore::new(1234).to_json().unwrap();
        assert_eq!(json, "{\n  \"best_score\": 1234\n}");
        assert_eq!(BestScore::from_json(&json).unwrap().best_score, 1234);
    }

    #[test]
    fn test_missing_key_reads_zero() {
        assert_eq!(BestScore::from_json("{}").unwrap().best_score, 0);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(
            BestScore::from_json("not json"),
            Err(PersistError::Parse(_))
        ));
        assert!(BestScore::from_json("{\"best_score\": -3}").is_err());
    }

    #[test]
    fn test_load_falls_back_to_zero() {
        let store = MemoryScoreStore::failing();
        assert_eq!(BestScore::load(&store).best_score, 0);

        let store = MemoryScoreStore::with_best(77);
        assert_eq!(BestScore::load(&store).best_score, 77);
    }

    #[test]
    fn test_save_through_store() {
        let mut store = MemoryScoreStore::default();
        BestScore::new(9).save(&mut store).unwrap();
        assert_eq!(store.saved, vec![9]);
    }
}

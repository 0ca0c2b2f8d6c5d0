//! Level progression store
//!
//! Per-level best scores and the unlock frontier, persisted as a JSON file.
//! Both update paths are monotonic: a best score only rises, and unlocking
//! never re-locks. The round orchestrator never touches this mid-round; the
//! hosting glue reads it at round start and records once at round end.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::levels::LEVEL_COUNT;
use crate::sim::tick::RoundResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Progression {
    /// Best catch count per level, 0 = never completed
    best_scores: [u32; LEVEL_COUNT],
    /// Highest playable level index
    max_unlocked: usize,
}

impl Progression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best catch count recorded for a level
    pub fn best_score(&self, level_index: usize) -> u32 {
        assert!(level_index < LEVEL_COUNT, "level index out of range: {level_index}");
        self.best_scores[level_index]
    }

    pub fn all_best_scores(&self) -> [u32; LEVEL_COUNT] {
        self.best_scores
    }

    /// Record a score, keeping the higher of old and new. Returns whether
    /// the stored best rose.
    pub fn record_best_score(&mut self, level_index: usize, score: u32) -> bool {
        assert!(level_index < LEVEL_COUNT, "level index out of range: {level_index}");
        if score > self.best_scores[level_index] {
            self.best_scores[level_index] = score;
            return true;
        }
        false
    }

    /// A level counts as completed once any score is on record for it
    pub fn is_level_completed(&self, level_index: usize) -> bool {
        self.best_score(level_index) > 0
    }

    pub fn max_unlocked_level(&self) -> usize {
        self.max_unlocked
    }

    /// Raise the unlock frontier to `level_index`. Never lowers it, and
    /// never exceeds the catalog.
    pub fn unlock_level(&mut self, level_index: usize) {
        let clamped = level_index.min(LEVEL_COUNT - 1);
        if clamped > self.max_unlocked {
            self.max_unlocked = clamped;
            log::info!("unlocked level {}", clamped + 1);
        }
    }

    /// Apply one finished round: save the best score and, on a pass, unlock
    /// the next level. Called exactly once per round by the hosting glue.
    pub fn record_result(&mut self, result: &RoundResult) {
        self.record_best_score(result.level_index, result.caught_fish);
        if result.passed {
            self.unlock_level(result.level_index + 1);
        }
    }

    /// Load from a JSON file, falling back to a fresh store when the file
    /// is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(progression) => {
                    log::info!("loaded progression from {}", path.display());
                    progression
                }
                Err(err) => {
                    log::warn!("corrupt progression file {}: {err}", path.display());
                    Self::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no progression file yet, starting fresh");
                Self::new()
            }
            Err(err) => {
                log::warn!("cannot read {}: {err}", path.display());
                Self::new()
            }
        }
    }

    /// Save as JSON. The caller decides how loudly to treat a failure.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("progression saved to {}", path.display());
        Ok(())
    }
}

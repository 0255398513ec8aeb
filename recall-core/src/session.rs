//! Caller-owned session progress.
//!
//! The difficulty and scoring models read a [`PerformanceSummary`] but never
//! store one. [`SessionProgress`] is the bookkeeping a client would otherwise
//! write itself: it folds each round's result into the next summary, tracks
//! the level and accumulates points. It is a plain value with no I/O.

use tracing::debug;

use crate::config::RecallConfig;
use crate::difficulty::DifficultyModel;
use crate::performance::PerformanceSummary;
use crate::scoring::ScoringModel;
use crate::types::{HighScore, RoundConfig};

/// Level, streak and score across the rounds of one game.
#[derive(Debug, Clone, Default)]
pub struct SessionProgress {
    level: u32,
    summary: PerformanceSummary,
    total_score: u64,
    rounds_played: u32,
    difficulty: DifficultyModel,
    scoring: ScoringModel,
}

impl SessionProgress {
    /// A fresh session at level 0 with the stock tuning.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh session using the tuning from `config`.
    #[must_use]
    pub fn with_config(config: &RecallConfig) -> Self {
        Self {
            difficulty: DifficultyModel::new(config.difficulty.clone()),
            scoring: ScoringModel::new(config.scoring.clone()),
            ..Self::default()
        }
    }

    /// Current level.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Performance going into the next round.
    #[must_use]
    pub fn summary(&self) -> &PerformanceSummary {
        &self.summary
    }

    /// Points earned so far.
    #[must_use]
    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    /// Rounds recorded so far.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Configuration for the next round.
    #[must_use]
    pub fn next_round(&self) -> RoundConfig {
        self.difficulty.round_config(self.level, Some(&self.summary))
    }

    /// Record the result of a round played with `round`.
    ///
    /// A success is scored against the summary the round was played under,
    /// then extends the streak, clears failures and advances the level. A
    /// failure resets the streak and counts toward failures. Returns the
    /// points awarded.
    pub fn record_round(&mut self, round: &RoundConfig, success: bool, time_left: u32) -> u64 {
        self.rounds_played = self.rounds_played.saturating_add(1);

        let awarded = if success {
            let points = self.scoring.score_for_round(round.length, Some(&self.summary));
            self.total_score = self.total_score.saturating_add(points);
            self.summary.streak = self.summary.streak.saturating_add(1);
            self.summary.failures = 0;
            self.level = self.level.saturating_add(1);
            points
        } else {
            self.summary.streak = 0;
            self.summary.failures = self.summary.failures.saturating_add(1);
            0
        };
        self.summary.last_time_left = i64::from(time_left);

        debug!(
            success,
            awarded,
            level = self.level,
            total_score = self.total_score,
            "recorded round"
        );
        awarded
    }

    /// This session as a high-score entry.
    #[must_use]
    pub fn as_high_score(&self) -> HighScore {
        HighScore {
            score: self.total_score,
            level: self.level,
        }
    }
}

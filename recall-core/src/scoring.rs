//! Round scoring.
//!
//! Score = max(5·len, 12·len + streak_bonus + speed_bonus − failure_penalty)
//!
//! Where:
//!   streak_bonus    = min(30, 6 · streak)
//!   speed_bonus     = min(24, 2 · max(lastTimeLeft − 2, 0))
//!   failure_penalty = min(30, 5 · failures)
//!
//! The floor guarantees a reward proportional to the sequence length no
//! matter how large the penalty.

use tracing::debug;

use crate::config::ScoringConfig;
use crate::performance::{PerformanceSource, PerformanceSummary};

/// Computes round scores from a tuning configuration.
#[derive(Debug, Clone, Default)]
pub struct ScoringModel {
    config: ScoringConfig,
}

impl ScoringModel {
    /// Create a model with the given tuning.
    #[must_use]
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// The tuning in use.
    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Points for a completed round of `seq_len` digits.
    ///
    /// `performance` is read fail-soft, like [`crate::difficulty::round_config`].
    #[must_use]
    pub fn score_for_round(
        &self,
        seq_len: u32,
        performance: Option<&dyn PerformanceSource>,
    ) -> u64 {
        let c = &self.config;
        let perf = performance
            .map(PerformanceSummary::from_source)
            .unwrap_or_default();
        let len = i64::from(seq_len);

        let base = len.saturating_mul(c.points_per_digit);
        let streak_bonus = perf
            .streak
            .saturating_mul(c.streak_bonus_per_round)
            .min(c.streak_bonus_cap);
        let speed_bonus = perf
            .last_time_left
            .saturating_sub(c.speed_grace)
            .max(0)
            .saturating_mul(c.speed_bonus_per_unit)
            .min(c.speed_bonus_cap);
        let failure_penalty = perf
            .failures
            .saturating_mul(c.failure_penalty_per_failure)
            .min(c.failure_penalty_cap);

        let earned = base
            .saturating_add(streak_bonus)
            .saturating_add(speed_bonus)
            .saturating_sub(failure_penalty);
        let floor = len.saturating_mul(c.floor_points_per_digit);
        let score = u64::try_from(floor.max(earned)).unwrap_or(0);

        debug!(
            seq_len,
            base,
            streak_bonus,
            speed_bonus,
            failure_penalty,
            score,
            "scored round"
        );
        score
    }
}

/// Round score with the stock tuning.
#[must_use]
pub fn score_for_round(seq_len: u32, performance: Option<&dyn PerformanceSource>) -> u64 {
    ScoringModel::default().score_for_round(seq_len, performance)
}

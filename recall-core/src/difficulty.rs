//! Adaptive round difficulty.
//!
//! Sequence length grows with the level and the current streak and shrinks
//! after repeated failures. The time budget follows the length, tightens
//! when the previous round was answered quickly and loosens after failures:
//!
//! ```text
//! length = clamp(min(3 + level, 18) + streak_adj - failure_adj, 3, 18)
//! time   = clamp(max(6 + trunc(1.2 · length), 6 + level) + speed_adj + failure_adj, 6, 40)
//! ```
//!
//! The failure time bonus stacks: one failure grants +2, two or more grant
//! +3 in total.

use tracing::debug;

use crate::config::DifficultyConfig;
use crate::performance::{PerformanceSource, PerformanceSummary};
use crate::types::RoundConfig;

/// Computes [`RoundConfig`]s from a tuning configuration.
#[derive(Debug, Clone, Default)]
pub struct DifficultyModel {
    config: DifficultyConfig,
}

impl DifficultyModel {
    /// Create a model with the given tuning.
    #[must_use]
    pub fn new(config: DifficultyConfig) -> Self {
        Self { config }
    }

    /// The tuning in use.
    #[must_use]
    pub fn config(&self) -> &DifficultyConfig {
        &self.config
    }

    /// Length and time budget for a round at `level`.
    ///
    /// `performance` is any key-value source; missing or unconvertible
    /// values, and `None`, read as 0.
    #[must_use]
    pub fn round_config(
        &self,
        level: u32,
        performance: Option<&dyn PerformanceSource>,
    ) -> RoundConfig {
        let c = &self.config;
        let perf = performance
            .map(PerformanceSummary::from_source)
            .unwrap_or_default();
        let level = i64::from(level);

        let base_length = (i64::from(c.base_length) + level).min(i64::from(c.max_length));
        let length = bound(
            base_length + self.length_adjustment(&perf),
            c.min_length,
            c.max_length,
        );

        // Integer tenths reproduce the truncation of `length * 1.2` exactly.
        let scaled = length.saturating_mul(i64::from(c.time_tenths_per_digit)) / 10;
        let base_time = i64::from(c.base_time);
        let allowance = (base_time + scaled).max(base_time + level);
        let time = bound(
            allowance + self.time_adjustment(&perf),
            c.min_time,
            c.max_time,
        );

        let round = RoundConfig {
            length: to_u32(length, c.max_length),
            time: to_u32(time, c.max_time),
        };
        debug!(
            level,
            streak = perf.streak,
            failures = perf.failures,
            last_time_left = perf.last_time_left,
            length = round.length,
            time = round.time,
            "computed round config"
        );
        round
    }

    /// Digits added or removed relative to the level's base length.
    #[must_use]
    pub fn length_adjustment(&self, perf: &PerformanceSummary) -> i64 {
        let c = &self.config;
        let mut adjust = 0;
        if perf.streak >= c.streak_major_threshold {
            adjust += 2;
        } else if perf.streak >= c.streak_minor_threshold {
            adjust += 1;
        }
        if perf.failures >= c.failure_length_threshold {
            adjust -= 1;
        }
        adjust
    }

    /// Seconds added or removed relative to the base allowance.
    #[must_use]
    pub fn time_adjustment(&self, perf: &PerformanceSummary) -> i64 {
        let c = &self.config;
        let mut adjust = 0;
        if perf.last_time_left >= c.fast_time_left_threshold {
            adjust -= 2;
        } else if perf.last_time_left >= c.quick_time_left_threshold {
            adjust -= 1;
        }
        if perf.failures >= 1 {
            adjust += 2;
        }
        if perf.failures >= c.failure_length_threshold {
            adjust += 1;
        }
        adjust
    }
}

/// Clamp without panicking on inverted bounds; the upper bound is applied
/// first, so inverted bounds resolve to `min`.
fn bound(value: i64, min: u32, max: u32) -> i64 {
    value.min(i64::from(max)).max(i64::from(min))
}

fn to_u32(value: i64, fallback: u32) -> u32 {
    u32::try_from(value).unwrap_or(fallback)
}

/// Round configuration with the stock tuning.
#[must_use]
pub fn round_config(level: u32, performance: Option<&dyn PerformanceSource>) -> RoundConfig {
    DifficultyModel::default().round_config(level, performance)
}

//! Configuration for the recall core.
//!
//! Maps directly to `recall.toml`. Every field has a default equal to the
//! stock tuning, so an empty file (or [`RecallConfig::default`]) reproduces
//! the standard game.

use serde::{Deserialize, Serialize};

use crate::error::{RecallError, Result};
use crate::sequence::GenerationMode;
use crate::types::{DEFAULT_MAX_DIGIT, Digit};

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecallConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Sequence generation defaults.
    #[serde(default)]
    pub sequence: SequenceConfig,
    /// Round length and time budget tuning.
    #[serde(default)]
    pub difficulty: DifficultyConfig,
    /// Round scoring tuning.
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl RecallConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `RecallError::Config` if the TOML is invalid or the values
    /// fail [`RecallConfig::validate`].
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| RecallError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check that the bounds are consistent.
    ///
    /// # Errors
    /// Returns `RecallError::Config` naming the first inconsistent field.
    pub fn validate(&self) -> Result<()> {
        let d = &self.difficulty;
        if d.min_length == 0 {
            return Err(RecallError::Config(
                "difficulty.min_length must be at least 1".to_string(),
            ));
        }
        if d.min_length > d.max_length {
            return Err(RecallError::Config(format!(
                "difficulty.min_length ({}) exceeds difficulty.max_length ({})",
                d.min_length, d.max_length
            )));
        }
        if d.min_time > d.max_time {
            return Err(RecallError::Config(format!(
                "difficulty.min_time ({}) exceeds difficulty.max_time ({})",
                d.min_time, d.max_time
            )));
        }
        if d.streak_minor_threshold > d.streak_major_threshold {
            return Err(RecallError::Config(format!(
                "difficulty.streak_minor_threshold ({}) exceeds \
                 difficulty.streak_major_threshold ({})",
                d.streak_minor_threshold, d.streak_major_threshold
            )));
        }
        if d.quick_time_left_threshold > d.fast_time_left_threshold {
            return Err(RecallError::Config(format!(
                "difficulty.quick_time_left_threshold ({}) exceeds \
                 difficulty.fast_time_left_threshold ({})",
                d.quick_time_left_threshold, d.fast_time_left_threshold
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level the host should install: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Sequence generation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Largest digit produced by the random and mirror modes.
    #[serde(default = "default_max_digit")]
    pub max_digit: Digit,
    /// Mode used when the caller does not pick one.
    #[serde(default)]
    pub default_mode: GenerationMode,
    /// Fixed seed for reproducible games. `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            max_digit: DEFAULT_MAX_DIGIT,
            default_mode: GenerationMode::Random,
            seed: None,
        }
    }
}

/// Round length and time budget tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Sequence length at level 0 before adjustments.
    #[serde(default = "default_3")]
    pub base_length: u32,
    /// Shortest allowed sequence.
    #[serde(default = "default_3")]
    pub min_length: u32,
    /// Longest allowed sequence.
    #[serde(default = "default_18")]
    pub max_length: u32,
    /// Fixed part of the time allowance.
    #[serde(default = "default_6")]
    pub base_time: u32,
    /// Time granted per digit, in tenths (12 = 1.2 per digit).
    #[serde(default = "default_12")]
    pub time_tenths_per_digit: u32,
    /// Lower clamp for the time allowance.
    #[serde(default = "default_6")]
    pub min_time: u32,
    /// Upper clamp for the time allowance.
    #[serde(default = "default_40")]
    pub max_time: u32,
    /// Streak at which the sequence grows by one digit.
    #[serde(default = "default_3_i64")]
    pub streak_minor_threshold: i64,
    /// Streak at which the sequence grows by two digits.
    #[serde(default = "default_5_i64")]
    pub streak_major_threshold: i64,
    /// Failures at which the sequence shrinks by one digit and an extra
    /// second is granted.
    #[serde(default = "default_2_i64")]
    pub failure_length_threshold: i64,
    /// Time left on the previous round that removes two seconds.
    #[serde(default = "default_6_i64")]
    pub fast_time_left_threshold: i64,
    /// Time left on the previous round that removes one second.
    #[serde(default = "default_3_i64")]
    pub quick_time_left_threshold: i64,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            base_length: 3,
            min_length: 3,
            max_length: 18,
            base_time: 6,
            time_tenths_per_digit: 12,
            min_time: 6,
            max_time: 40,
            streak_minor_threshold: 3,
            streak_major_threshold: 5,
            failure_length_threshold: 2,
            fast_time_left_threshold: 6,
            quick_time_left_threshold: 3,
        }
    }
}

/// Round scoring tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Base points per digit recalled.
    #[serde(default = "default_12_i64")]
    pub points_per_digit: i64,
    /// Guaranteed minimum points per digit after penalties.
    #[serde(default = "default_5_i64")]
    pub floor_points_per_digit: i64,
    /// Bonus per round of streak.
    #[serde(default = "default_6_i64")]
    pub streak_bonus_per_round: i64,
    /// Maximum streak bonus.
    #[serde(default = "default_30_i64")]
    pub streak_bonus_cap: i64,
    /// Time left that earns no speed bonus.
    #[serde(default = "default_2_i64")]
    pub speed_grace: i64,
    /// Bonus per unit of time left beyond the grace.
    #[serde(default = "default_2_i64")]
    pub speed_bonus_per_unit: i64,
    /// Maximum speed bonus.
    #[serde(default = "default_24_i64")]
    pub speed_bonus_cap: i64,
    /// Penalty per recent failure.
    #[serde(default = "default_5_i64")]
    pub failure_penalty_per_failure: i64,
    /// Maximum failure penalty.
    #[serde(default = "default_30_i64")]
    pub failure_penalty_cap: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            points_per_digit: 12,
            floor_points_per_digit: 5,
            streak_bonus_per_round: 6,
            streak_bonus_cap: 30,
            speed_grace: 2,
            speed_bonus_per_unit: 2,
            speed_bonus_cap: 24,
            failure_penalty_per_failure: 5,
            failure_penalty_cap: 30,
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_log_level() -> String { "info".to_string() }
fn default_max_digit() -> Digit { DEFAULT_MAX_DIGIT }
fn default_3() -> u32 { 3 }
fn default_6() -> u32 { 6 }
fn default_12() -> u32 { 12 }
fn default_18() -> u32 { 18 }
fn default_40() -> u32 { 40 }
fn default_2_i64() -> i64 { 2 }
fn default_3_i64() -> i64 { 3 }
fn default_5_i64() -> i64 { 5 }
fn default_6_i64() -> i64 { 6 }
fn default_12_i64() -> i64 { 12 }
fn default_24_i64() -> i64 { 24 }
fn default_30_i64() -> i64 { 30 }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config = RecallConfig::from_toml("").expect("empty config parses");
        assert_eq!(config, RecallConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = RecallConfig::from_toml(
            r#"
            [sequence]
            default_mode = "mirror"
            seed = 42

            [difficulty]
            max_length = 12
            "#,
        )
        .expect("partial config parses");

        assert_eq!(config.sequence.default_mode, GenerationMode::Mirror);
        assert_eq!(config.sequence.seed, Some(42));
        assert_eq!(config.sequence.max_digit, 9);
        assert_eq!(config.difficulty.max_length, 12);
        assert_eq!(config.difficulty.min_length, 3);
        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = RecallConfig::from_toml(
            r#"
            [difficulty]
            min_time = 50
            "#,
        )
        .expect_err("min_time above max_time must fail");
        assert!(matches!(err, RecallError::Config(_)));
        assert!(err.to_string().contains("min_time"));
    }

    #[test]
    fn inverted_thresholds_name_both_keys() {
        let mut config = RecallConfig::default();
        config.difficulty.quick_time_left_threshold = 9;
        let message = config.validate().expect_err("quick above fast").to_string();
        assert!(message.contains("quick_time_left_threshold (9) exceeds difficulty.fast_"));
        assert!(message.ends_with("fast_time_left_threshold (6)"));

        let mut config = RecallConfig::default();
        config.difficulty.streak_minor_threshold = 7;
        let message = config.validate().expect_err("minor above major").to_string();
        assert!(message.contains("exceeds difficulty.streak_major_threshold (5)"));
    }

    #[test]
    fn zero_min_length_is_rejected() {
        let mut config = RecallConfig::default();
        config.difficulty.min_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = RecallConfig::from_toml("[difficulty\nmax_length = ").expect_err("bad toml");
        assert!(matches!(err, RecallError::Config(_)));
    }

    #[test]
    fn unknown_mode_in_toml_is_config_error() {
        let err = RecallConfig::from_toml(
            r#"
            [sequence]
            default_mode = "squares"
            "#,
        )
        .expect_err("unknown mode");
        assert!(matches!(err, RecallError::Config(_)));
    }
}

//! Core value types shared by the generation, difficulty and scoring modules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single digit shown to the player, in `[0, max_digit]`.
pub type Digit = u8;

/// An ordered digit sequence for one round.
pub type Sequence = Vec<Digit>;

/// Default upper bound (inclusive) for generated digits.
pub const DEFAULT_MAX_DIGIT: Digit = 9;

/// Length and time budget for one round.
///
/// Serializes as `{"length": .., "time": ..}` so clients can consume it
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Number of digits in the sequence.
    pub length: u32,
    /// Time allowance for the answer, in the caller's unit (seconds in the
    /// reference client).
    pub time: u32,
}

impl fmt::Display for RoundConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} digits in {}s", self.length, self.time)
    }
}

/// One entry of a high-score table.
///
/// The table itself lives with the client; the core only defines the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    /// Total points.
    pub score: u64,
    /// Level reached.
    pub level: u32,
}

//! Answer checking and the messages shown after a round.

use serde::{Deserialize, Serialize};

use crate::types::{Digit, HighScore};

/// Message shown after a correct answer.
pub const SUCCESS_MESSAGE: &str = "Correct! On to the next round.";

/// True if the answer has the same digits in the same order.
#[must_use]
pub fn check_sequence(player: &[Digit], correct: &[Digit]) -> bool {
    player == correct
}

/// Message for a finished round.
///
/// A failure message reveals the full correct sequence, space-separated.
#[must_use]
pub fn get_result_message(success: bool, sequence: &[Digit]) -> String {
    if success {
        SUCCESS_MESSAGE.to_string()
    } else {
        format!("Wrong order. Correct digits: {}", spaced(sequence))
    }
}

/// The high-score table.
///
/// Scores are stored by the client; the core always returns an empty table.
#[must_use]
pub fn get_high_scores() -> Vec<HighScore> {
    Vec::new()
}

fn spaced(sequence: &[Digit]) -> String {
    sequence
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The checked result of one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Whether the answer matched.
    pub success: bool,
    /// Message to show the player.
    pub message: String,
}

impl RoundOutcome {
    /// Check `player` against `correct` and build the message.
    #[must_use]
    pub fn evaluate(player: &[Digit], correct: &[Digit]) -> Self {
        let success = check_sequence(player, correct);
        Self {
            success,
            message: get_result_message(success, correct),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_sequences_match() {
        assert!(check_sequence(&[1, 2, 3], &[1, 2, 3]));
        assert!(check_sequence(&[], &[]));
    }

    #[test]
    fn order_matters() {
        assert!(!check_sequence(&[1, 2, 3], &[1, 3, 2]));
    }

    #[test]
    fn length_matters() {
        assert!(!check_sequence(&[1, 2], &[1, 2, 3]));
        assert!(!check_sequence(&[1, 2, 3, 4], &[1, 2, 3]));
    }

    #[test]
    fn success_message_lists_no_digits() {
        let message = get_result_message(true, &[]);
        assert!(!message.chars().any(|c| c.is_ascii_digit()));
        assert_eq!(get_result_message(true, &[7, 8]), message);
    }

    #[test]
    fn failure_message_reveals_sequence() {
        let message = get_result_message(false, &[4, 5, 6]);
        assert!(message.contains("4 5 6"));
    }

    #[test]
    fn failure_message_with_multi_digit_values() {
        assert!(get_result_message(false, &[12, 0, 3]).ends_with("12 0 3"));
    }

    #[test]
    fn high_scores_are_empty() {
        assert!(get_high_scores().is_empty());
    }

    #[test]
    fn outcome_bundles_check_and_message() {
        let outcome = RoundOutcome::evaluate(&[9, 1], &[1, 9]);
        assert!(!outcome.success);
        assert!(outcome.message.contains("1 9"));

        let outcome = RoundOutcome::evaluate(&[1, 9], &[1, 9]);
        assert!(outcome.success);
        assert_eq!(outcome.message, SUCCESS_MESSAGE);
    }
}

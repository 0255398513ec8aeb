//! # Recall Core Library
//!
//! Digit sequence generation and adaptive difficulty for memory recall games.
//!
//! A round shows the player a sequence of digits, takes their answer back and
//! scores it. This crate owns the computations behind that loop:
//!
//! - **Generation** — random, prime-digit, Fibonacci-digit and mirrored
//!   sequences ([`sequence`])
//! - **Difficulty** — round length and time budget adapted from recent
//!   performance ([`difficulty`])
//! - **Scoring** — points for a completed round ([`scoring`])
//! - **Outcome** — answer checking and result messages ([`outcome`])
//!
//! Everything except the random source is pure. Seeded generators
//! ([`SequenceGenerator::seeded`]) make whole games reproducible.
//!
//! ```
//! use recall_core::{round_config, score_for_round, SequenceGenerator, GenerationMode};
//!
//! let round = round_config(0, None);
//! assert_eq!((round.length, round.time), (3, 9));
//!
//! let mut generator = SequenceGenerator::seeded(7);
//! let digits = generator.generate(round.length as usize, 9, GenerationMode::Primes);
//! assert_eq!(digits, vec![2, 3, 5]);
//!
//! assert_eq!(score_for_round(round.length, None), 36);
//! ```

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod difficulty;
pub mod error;
pub mod outcome;
pub mod performance;
pub mod scoring;
pub mod sequence;
pub mod session;
pub mod types;

pub use config::RecallConfig;
pub use difficulty::{DifficultyModel, round_config};
pub use error::RecallError;
pub use outcome::{RoundOutcome, check_sequence, get_high_scores, get_result_message};
pub use performance::{PerfValue, PerformanceSource, PerformanceSummary};
pub use scoring::{ScoringModel, score_for_round};
pub use sequence::{GenerationMode, SequenceGenerator, generate_sequence};
pub use session::SessionProgress;
pub use types::*;

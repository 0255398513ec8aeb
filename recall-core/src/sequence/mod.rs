//! Sequence generation.
//!
//! Four strategies produce the digits a player must recall:
//!
//! - **Random** — independent uniform digits in `[0, max_digit]`
//! - **Primes** — digits of 2, 3, 5, 7, 11, 13, … ([`primes`])
//! - **Fibonacci** — digits of 2, 3, 5, 8, 13, 21, … ([`fibonacci`])
//! - **Mirror** — a random palindrome
//!
//! Only random and mirror consume the random source. A [`SequenceGenerator`]
//! owns that source, so a seeded generator replays the same game.

pub mod fibonacci;
pub mod primes;

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SequenceConfig;
use crate::error::RecallError;
use crate::types::{DEFAULT_MAX_DIGIT, Digit, Sequence};

pub use fibonacci::{FibonacciTerms, fibonacci_digits};
pub use primes::{is_prime, prime_digits, primes};

/// Generation strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Independent uniform digits.
    #[default]
    Random,
    /// Concatenated digits of the primes.
    Primes,
    /// Concatenated digits of the Fibonacci terms from 2.
    Fibonacci,
    /// Random palindrome.
    Mirror,
}

impl GenerationMode {
    /// Every mode, in menu order.
    pub const ALL: [Self; 4] = [Self::Random, Self::Primes, Self::Fibonacci, Self::Mirror];

    /// Canonical lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Primes => "primes",
            Self::Fibonacci => "fibonacci",
            Self::Mirror => "mirror",
        }
    }

    /// Lenient lookup: any unrecognised name selects [`GenerationMode::Random`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            debug!(mode = name, "unrecognised generation mode, falling back to random");
            Self::Random
        })
    }

    /// Whether this mode draws from the random source.
    #[must_use]
    pub fn uses_randomness(self) -> bool {
        matches!(self, Self::Random | Self::Mirror)
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationMode {
    type Err = RecallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| RecallError::UnknownMode(s.to_string()))
    }
}

/// Decimal digits of `n`, most significant first.
pub(crate) fn decimal_digits(n: u64) -> impl Iterator<Item = Digit> {
    n.to_string().into_bytes().into_iter().map(|b| b - b'0')
}

/// Produces digit sequences from an owned random source.
///
/// The generator also carries a default mode and `max_digit`, used by
/// [`SequenceGenerator::generate_default`].
#[derive(Debug, Clone)]
pub struct SequenceGenerator<R = StdRng> {
    rng: R,
    mode: GenerationMode,
    max_digit: Digit,
}

impl SequenceGenerator<StdRng> {
    /// Reproducible generator: the same seed yields the same sequences.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Generator honouring the configured seed, mode and `max_digit`.
    #[must_use]
    pub fn from_config(config: &SequenceConfig) -> Self {
        let generator = match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        };
        generator.with_defaults(config.default_mode, config.max_digit)
    }
}

impl<R: Rng> SequenceGenerator<R> {
    /// Wrap an existing random source. Defaults to random mode over 0–9.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            mode: GenerationMode::Random,
            max_digit: DEFAULT_MAX_DIGIT,
        }
    }

    /// Replace the mode and `max_digit` used by [`Self::generate_default`].
    #[must_use]
    pub fn with_defaults(mut self, mode: GenerationMode, max_digit: Digit) -> Self {
        self.mode = mode;
        self.max_digit = max_digit;
        self
    }

    /// Mode used by [`Self::generate_default`].
    #[must_use]
    pub fn default_mode(&self) -> GenerationMode {
        self.mode
    }

    /// Generate `length` digits with the generator's own mode and `max_digit`.
    pub fn generate_default(&mut self, length: usize) -> Sequence {
        self.generate(length, self.max_digit, self.mode)
    }

    /// Generate exactly `length` digits using `mode`.
    ///
    /// `max_digit` bounds the random and mirror modes; primes and Fibonacci
    /// always emit decimal digits.
    pub fn generate(&mut self, length: usize, max_digit: Digit, mode: GenerationMode) -> Sequence {
        debug!(length, max_digit, %mode, "generating sequence");
        match mode {
            GenerationMode::Primes => prime_digits(length),
            GenerationMode::Fibonacci => fibonacci_digits(length),
            GenerationMode::Mirror => self.mirror_digits(length, max_digit),
            GenerationMode::Random => self.random_digits(length, max_digit),
        }
    }

    /// `length` independent uniform digits in `[0, max_digit]`.
    pub fn random_digits(&mut self, length: usize, max_digit: Digit) -> Sequence {
        (0..length)
            .map(|_| self.rng.gen_range(0..=max_digit))
            .collect()
    }

    /// A palindrome of `length` digits.
    ///
    /// The first `ceil(length / 2)` digits are random; the rest mirror them.
    /// For odd lengths the last random digit is the unmirrored center.
    pub fn mirror_digits(&mut self, length: usize, max_digit: Digit) -> Sequence {
        let half = length.div_ceil(2);
        let mut digits = self.random_digits(half, max_digit);
        let mirrored: Vec<Digit> = digits[..length - half].iter().rev().copied().collect();
        digits.extend(mirrored);
        digits
    }

    /// Give back the random source.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

/// Generate `length` digits with the thread-local random source.
///
/// `mode` is matched by name; unknown names generate random digits.
#[must_use]
pub fn generate_sequence(length: usize, max_digit: Digit, mode: &str) -> Sequence {
    SequenceGenerator::with_rng(rand::thread_rng()).generate(
        length,
        max_digit,
        GenerationMode::from_name(mode),
    )
}

//! Fibonacci-digit sequences: 2, 3, 5, 8, 1, 3, 2, 1, …
//!
//! Terms follow `a, b = b, a + b` from `a = b = 1`, so the seed ones are
//! never emitted. Terms are kept as decimal digit vectors, which keeps long
//! sequences exact well past the range of any fixed-width integer.

use crate::types::{Digit, Sequence};

/// Iterator over Fibonacci terms from 2 onwards, each term as its decimal
/// digits, most significant first.
#[derive(Debug, Clone)]
pub struct FibonacciTerms {
    // Little-endian decimal digits.
    a: Vec<Digit>,
    b: Vec<Digit>,
}

impl FibonacciTerms {
    /// Start from the `1, 1` seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: vec![1],
            b: vec![1],
        }
    }
}

impl Default for FibonacciTerms {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibonacciTerms {
    type Item = Vec<Digit>;

    fn next(&mut self) -> Option<Self::Item> {
        let sum = add_decimal(&self.a, &self.b);
        self.a = std::mem::replace(&mut self.b, sum);
        Some(self.b.iter().rev().copied().collect())
    }
}

/// Add two little-endian decimal numbers.
fn add_decimal(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    let width = a.len().max(b.len());
    let mut out = Vec::with_capacity(width + 1);
    let mut carry = 0;
    for i in 0..width {
        let column = a.get(i).copied().unwrap_or(0) + b.get(i).copied().unwrap_or(0) + carry;
        out.push(column % 10);
        carry = column / 10;
    }
    if carry > 0 {
        out.push(carry);
    }
    out
}

/// The first `length` digits of the concatenated Fibonacci terms.
#[must_use]
pub fn fibonacci_digits(length: usize) -> Sequence {
    FibonacciTerms::new().flatten().take(length).collect()
}

//! Prime-digit sequences: 2, 3, 5, 7, 1, 1, 1, 3, 1, 7, …
//!
//! The decimal digits of the primes in increasing order, concatenated.

use crate::types::Sequence;

use super::decimal_digits;

/// Trial-division primality test up to √n.
#[must_use]
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut divisor: u64 = 2;
    while divisor.saturating_mul(divisor) <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Primes in increasing order, starting at 2.
#[must_use]
pub fn primes() -> impl Iterator<Item = u64> {
    (2u64..).filter(|&n| is_prime(n))
}

/// The first `length` digits of the concatenated primes.
///
/// A prime whose digits would overflow `length` is cut short.
#[must_use]
pub fn prime_digits(length: usize) -> Sequence {
    primes().flat_map(decimal_digits).take(length).collect()
}

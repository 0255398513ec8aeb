//! Recent-performance input to the difficulty and scoring models.
//!
//! Clients hand over whatever key-value shape they keep their stats in (a
//! JSON object, a map of strings, a typed struct). Extraction is fail-soft:
//! a missing key, an unconvertible value or any lookup failure reads as 0.
//!
//! Recognised keys: `streak`, `failures`, `lastTimeLeft`.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Key for consecutive successful rounds.
pub const STREAK_KEY: &str = "streak";
/// Key for recent failed attempts.
pub const FAILURES_KEY: &str = "failures";
/// Key for time remaining at the end of the previous round.
pub const LAST_TIME_LEFT_KEY: &str = "lastTimeLeft";

// ---------------------------------------------------------------------------
// Value coercion
// ---------------------------------------------------------------------------

/// A value that may convert to an integer.
///
/// Integers pass through, floats truncate toward zero, booleans are 0/1 and
/// strings are trimmed and parsed as base-10 integers. Finite values outside
/// the `i64` range saturate. NaN, infinities, non-integer strings and any
/// other value yield `None`.
pub trait PerfValue {
    /// Convert to an integer, or `None` if the value has no integer reading.
    fn coerce(&self) -> Option<i64>;
}

macro_rules! lossless_perf_value {
    ($($t:ty),*) => {$(
        impl PerfValue for $t {
            fn coerce(&self) -> Option<i64> {
                Some(i64::from(*self))
            }
        }
    )*};
}

lossless_perf_value!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! unsigned_perf_value {
    ($($t:ty),*) => {$(
        impl PerfValue for $t {
            fn coerce(&self) -> Option<i64> {
                Some(i64::try_from(*self).unwrap_or(i64::MAX))
            }
        }
    )*};
}

unsigned_perf_value!(u64, usize, u128);

macro_rules! signed_perf_value {
    ($($t:ty),*) => {$(
        impl PerfValue for $t {
            fn coerce(&self) -> Option<i64> {
                let saturated = if *self < 0 { i64::MIN } else { i64::MAX };
                Some(i64::try_from(*self).unwrap_or(saturated))
            }
        }
    )*};
}

signed_perf_value!(isize, i128);

impl PerfValue for f64 {
    #[allow(clippy::cast_possible_truncation)]
    fn coerce(&self) -> Option<i64> {
        // Float-to-int `as` saturates at the i64 bounds.
        self.is_finite().then(|| self.trunc() as i64)
    }
}

impl PerfValue for f32 {
    fn coerce(&self) -> Option<i64> {
        f64::from(*self).coerce()
    }
}

impl PerfValue for bool {
    fn coerce(&self) -> Option<i64> {
        Some(i64::from(*self))
    }
}

impl PerfValue for str {
    fn coerce(&self) -> Option<i64> {
        let text = self.trim();
        text.parse().ok().or_else(|| saturate_integer_literal(text))
    }
}

/// An integer literal too wide for `i64`, saturated to the matching bound.
fn saturate_integer_literal(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .then_some(if negative { i64::MIN } else { i64::MAX })
}

impl PerfValue for String {
    fn coerce(&self) -> Option<i64> {
        self.as_str().coerce()
    }
}

impl PerfValue for serde_json::Value {
    fn coerce(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n
                .as_i64()
                .or_else(|| n.as_u64().and_then(|u| u.coerce()))
                .or_else(|| n.as_f64().and_then(|f| f.coerce())),
            Self::String(s) => s.coerce(),
            Self::Bool(b) => b.coerce(),
            Self::Null | Self::Array(_) | Self::Object(_) => None,
        }
    }
}

impl<T: PerfValue + ?Sized> PerfValue for &T {
    fn coerce(&self) -> Option<i64> {
        (**self).coerce()
    }
}

impl<T: PerfValue> PerfValue for Option<T> {
    fn coerce(&self) -> Option<i64> {
        self.as_ref().and_then(PerfValue::coerce)
    }
}

// ---------------------------------------------------------------------------
// Key-value sources
// ---------------------------------------------------------------------------

/// Anything that can be asked for a performance value by key.
///
/// Implementations return `None` for a missing key or an unconvertible
/// value; they must not panic.
pub trait PerformanceSource {
    /// Look up `key` and coerce it to an integer.
    fn perf_value(&self, key: &str) -> Option<i64>;
}

impl<T: PerformanceSource + ?Sized> PerformanceSource for &T {
    fn perf_value(&self, key: &str) -> Option<i64> {
        (**self).perf_value(key)
    }
}

impl<T: PerformanceSource> PerformanceSource for Option<T> {
    fn perf_value(&self, key: &str) -> Option<i64> {
        self.as_ref().and_then(|source| source.perf_value(key))
    }
}

impl<K, V, S> PerformanceSource for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: PerfValue,
    S: BuildHasher,
{
    fn perf_value(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(PerfValue::coerce)
    }
}

impl<K, V> PerformanceSource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: PerfValue,
{
    fn perf_value(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(PerfValue::coerce)
    }
}

impl<K, V> PerformanceSource for [(K, V)]
where
    K: AsRef<str>,
    V: PerfValue,
{
    fn perf_value(&self, key: &str) -> Option<i64> {
        self.iter()
            .find(|(k, _)| k.as_ref() == key)
            .and_then(|(_, v)| v.coerce())
    }
}

impl<K, V> PerformanceSource for Vec<(K, V)>
where
    K: AsRef<str>,
    V: PerfValue,
{
    fn perf_value(&self, key: &str) -> Option<i64> {
        self.as_slice().perf_value(key)
    }
}

impl PerformanceSource for serde_json::Map<String, serde_json::Value> {
    fn perf_value(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(PerfValue::coerce)
    }
}

impl PerformanceSource for serde_json::Value {
    fn perf_value(&self, key: &str) -> Option<i64> {
        self.as_object().and_then(|map| map.perf_value(key))
    }
}

// ---------------------------------------------------------------------------
// PerformanceSummary
// ---------------------------------------------------------------------------

/// Recent performance, already coerced to integers.
///
/// Values are taken as given; negative inputs are not clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    /// Consecutive successful rounds.
    #[serde(default)]
    pub streak: i64,
    /// Recent failed attempts.
    #[serde(default)]
    pub failures: i64,
    /// Time remaining at the end of the previous round.
    #[serde(default)]
    pub last_time_left: i64,
}

impl PerformanceSummary {
    /// Build a summary directly from known values.
    #[must_use]
    pub fn new(streak: i64, failures: i64, last_time_left: i64) -> Self {
        Self {
            streak,
            failures,
            last_time_left,
        }
    }

    /// Extract the recognised keys from any source, defaulting each to 0.
    #[must_use]
    pub fn from_source<S: PerformanceSource + ?Sized>(source: &S) -> Self {
        Self {
            streak: read_or_zero(source, STREAK_KEY),
            failures: read_or_zero(source, FAILURES_KEY),
            last_time_left: read_or_zero(source, LAST_TIME_LEFT_KEY),
        }
    }

    /// Parse a JSON document leniently. Invalid JSON reads as all zeros.
    #[must_use]
    pub fn from_json_str(json: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(json) {
            Ok(value) => Self::from_source(&value),
            Err(e) => {
                trace!(error = %e, "performance JSON unreadable, using zeros");
                Self::default()
            }
        }
    }
}

impl PerformanceSource for PerformanceSummary {
    fn perf_value(&self, key: &str) -> Option<i64> {
        match key {
            STREAK_KEY => Some(self.streak),
            FAILURES_KEY => Some(self.failures),
            LAST_TIME_LEFT_KEY => Some(self.last_time_left),
            _ => None,
        }
    }
}

fn read_or_zero<S: PerformanceSource + ?Sized>(source: &S, key: &str) -> i64 {
    source.perf_value(key).unwrap_or_else(|| {
        trace!(key, "performance value missing or unconvertible, using 0");
        0
    })
}

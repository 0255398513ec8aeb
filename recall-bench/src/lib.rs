//! Shared fixtures for the recall benchmarks.

use recall_core::PerformanceSummary;

/// A spread of performance summaries covering every adjustment tier.
#[must_use]
pub fn performance_fixtures() -> Vec<PerformanceSummary> {
    (0..64)
        .map(|i: i64| PerformanceSummary::new(i % 7, i % 4, i % 10))
        .collect()
}

/// A mixed client payload in the shape browsers send.
#[must_use]
pub fn client_payload(i: u32) -> serde_json::Value {
    serde_json::json!({
        "streak": i % 7,
        "failures": (i % 4).to_string(),
        "lastTimeLeft": f64::from(i % 10) + 0.5,
    })
}

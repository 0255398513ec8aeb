//! Integration Tests — End-to-End Round Flows
//!
//! These tests drive the public API the way a client does: load tuning,
//! generate a sequence, check an answer, score it and feed the result into
//! the next round.

use std::collections::HashMap;
use std::io::Write;

use serde_json::json;

use recall_core::config::RecallConfig;
use recall_core::sequence::{GenerationMode, SequenceGenerator};
use recall_core::{
    PerformanceSummary, RoundConfig, RoundOutcome, SessionProgress, check_sequence,
    generate_sequence, get_high_scores, get_result_message, round_config, score_for_round,
};

// ---------------------------------------------------------------------------
// Headline behaviour
// ---------------------------------------------------------------------------

#[test]
fn documented_examples() {
    assert_eq!(generate_sequence(5, 9, "primes"), vec![2, 3, 5, 7, 1]);
    assert_eq!(generate_sequence(4, 9, "fibonacci"), vec![2, 3, 5, 8]);
    assert_eq!(round_config(0, None), RoundConfig { length: 3, time: 9 });
    assert_eq!(score_for_round(5, None), 60);
    assert!(check_sequence(&[1, 2, 3], &[1, 2, 3]));
    assert!(!check_sequence(&[1, 2, 3], &[1, 3, 2]));
    assert!(get_result_message(false, &[4, 5, 6]).contains("4 5 6"));
    assert!(get_high_scores().is_empty());
}

#[test]
fn round_config_serializes_for_clients() {
    let value = serde_json::to_value(round_config(0, None)).expect("serialize round");
    assert_eq!(value, json!({ "length": 3, "time": 9 }));
}

// ---------------------------------------------------------------------------
// Client payloads of different shapes reach the same decisions
// ---------------------------------------------------------------------------

#[test]
fn performance_shapes_agree() {
    let from_json = PerformanceSummary::from_source(&json!({
        "streak": 5,
        "failures": "1",
        "lastTimeLeft": 6.5,
    }));

    let mut map: HashMap<&str, i64> = HashMap::new();
    map.insert("streak", 5);
    map.insert("failures", 1);
    map.insert("lastTimeLeft", 6);
    let from_map = PerformanceSummary::from_source(&map);

    let from_text =
        PerformanceSummary::from_json_str(r#"{"streak":"5","failures":1,"lastTimeLeft":6}"#);

    assert_eq!(from_json, from_map);
    assert_eq!(from_map, from_text);
    assert_eq!(round_config(4, Some(&from_json)), round_config(4, Some(&from_map)));
    assert_eq!(score_for_round(9, Some(&from_json)), score_for_round(9, Some(&from_text)));
}

#[test]
fn raw_payloads_feed_rounds_directly() {
    let payload = json!({ "streak": 3, "failures": "1", "lastTimeLeft": 4.9 });
    let summary = PerformanceSummary::new(3, 1, 4);

    // Level 4: length 7 + 1 streak; time 6 + 9 - 1 + 2.
    assert_eq!(round_config(4, Some(&payload)), RoundConfig { length: 8, time: 16 });
    assert_eq!(round_config(4, Some(&payload)), round_config(4, Some(&summary)));
    // 96 + 18 + 4 - 5
    assert_eq!(score_for_round(8, Some(&payload)), 113);

    let pairs: Vec<(&str, i64)> = vec![("streak", 3), ("failures", 1), ("lastTimeLeft", 4)];
    assert_eq!(score_for_round(8, Some(&pairs)), 113);
}

#[test]
fn garbage_performance_behaves_like_none() {
    let garbage = PerformanceSummary::from_source(&json!({
        "streak": { "nested": true },
        "failures": "many",
        "lastTimeLeft": null,
    }));
    assert_eq!(round_config(7, Some(&garbage)), round_config(7, None));
    assert_eq!(score_for_round(7, Some(&garbage)), score_for_round(7, None));
}

// ---------------------------------------------------------------------------
// Full game: seeded generator + session bookkeeping
// ---------------------------------------------------------------------------

#[test]
fn seeded_game_is_reproducible() {
    fn play(seed: u64) -> (Vec<Vec<u8>>, u64) {
        let mut generator = SequenceGenerator::seeded(seed);
        let mut session = SessionProgress::new();
        let mut shown = Vec::new();

        for round_no in 0..12 {
            let round = session.next_round();
            let mode = GenerationMode::ALL[round_no % GenerationMode::ALL.len()];
            let digits = generator.generate(round.length as usize, 9, mode);
            // Every fourth answer is wrong.
            let answer = if round_no % 4 == 3 {
                digits.iter().rev().copied().collect::<Vec<_>>()
            } else {
                digits.clone()
            };
            let outcome = RoundOutcome::evaluate(&answer, &digits);
            session.record_round(&round, outcome.success, 4);
            shown.push(digits);
        }
        (shown, session.total_score())
    }

    let first = play(99);
    let second = play(99);
    assert_eq!(first, second);
    assert!(first.1 > 0);
}

#[test]
fn winning_streak_lengthens_rounds() {
    let mut generator = SequenceGenerator::seeded(1);
    let mut session = SessionProgress::new();
    let mut lengths = Vec::new();

    for _ in 0..8 {
        let round = session.next_round();
        let digits = generator.generate(round.length as usize, 9, GenerationMode::Random);
        assert_eq!(digits.len(), round.length as usize);
        let outcome = RoundOutcome::evaluate(&digits, &digits);
        assert!(outcome.success);
        session.record_round(&round, outcome.success, 0);
        lengths.push(round.length);
    }

    assert!(lengths.windows(2).all(|w| w[0] <= w[1]));
    // Level 7 plus the five-round streak bonus.
    assert_eq!(lengths.last().copied(), Some(12));
}

#[test]
fn failed_round_reveals_answer() {
    let digits = generate_sequence(6, 9, "fibonacci");
    let outcome = RoundOutcome::evaluate(&[0, 0, 0, 0, 0, 0], &digits);
    assert!(!outcome.success);
    assert!(outcome.message.contains("2 3 5 8 1 3"));
}

// ---------------------------------------------------------------------------
// Configuration file
// ---------------------------------------------------------------------------

#[test]
fn config_file_drives_session() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    writeln!(
        file,
        r#"
[sequence]
default_mode = "primes"
seed = 3

[difficulty]
max_length = 6
max_time = 12

[scoring]
points_per_digit = 10
"#
    )
    .expect("write config");

    let config = RecallConfig::from_file(file.path()).expect("load config");
    assert_eq!(config.sequence.default_mode, GenerationMode::Primes);

    let mut session = SessionProgress::with_config(&config);
    for _ in 0..10 {
        let round = session.next_round();
        session.record_round(&round, true, 0);
    }
    let round = session.next_round();
    assert_eq!(round.length, 6);
    assert!(round.time <= 12);

    let mut generator = SequenceGenerator::from_config(&config.sequence);
    assert_eq!(generator.default_mode(), GenerationMode::Primes);
    let digits = generator.generate_default(round.length as usize);
    assert_eq!(digits, vec![2, 3, 5, 7, 1, 1]);
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = RecallConfig::from_file(&dir.path().join("absent.toml")).expect_err("missing file");
    assert!(matches!(err, recall_core::RecallError::Io(_)));
}

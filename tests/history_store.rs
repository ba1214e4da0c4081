//! Session history persistence tests.
//!
//! The persisted format is an ordered JSON array of flat records with
//! exactly three fields (`timestamp`, `trials`, `thresholdNorm`); these
//! tests pin the field names, the most-recent-first ordering, and the
//! corrupt-record policy.

use std::io::Write;

use landolt::{SessionHistory, SessionResult};
use tempfile::NamedTempFile;

fn result(timestamp: i64, threshold_norm: f64) -> SessionResult {
    SessionResult {
        timestamp,
        trials: 30,
        threshold_norm,
    }
}

#[test]
fn save_load_round_trip_preserves_order_and_values() {
    let file = NamedTempFile::new().unwrap();

    let mut history = SessionHistory::new();
    history.append(result(1_700_000_000_000, 0.0842));
    history.append(result(1_700_100_000_000, 0.0731));
    history.save(file.path()).unwrap();

    let loaded = SessionHistory::load(file.path()).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.sessions()[0], result(1_700_100_000_000, 0.0731));
    assert_eq!(loaded.sessions()[1], result(1_700_000_000_000, 0.0842));
    assert_eq!(loaded.latest().unwrap().timestamp, 1_700_100_000_000);
}

#[test]
fn persisted_file_uses_contract_field_names() {
    let file = NamedTempFile::new().unwrap();

    let mut history = SessionHistory::new();
    history.append(result(1_700_000_000_000, 0.0842));
    history.save(file.path()).unwrap();

    let raw = std::fs::read_to_string(file.path()).unwrap();
    assert!(raw.contains("\"timestamp\""));
    assert!(raw.contains("\"trials\""));
    assert!(raw.contains("\"thresholdNorm\""));
}

#[test]
fn corrupt_record_is_skipped_on_load() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"timestamp": 1700100000000, "trials": 30, "thresholdNorm": 0.0731}},
            {{"timestamp": "not a number", "trials": 30, "thresholdNorm": 0.5}},
            {{"trials": 30, "thresholdNorm": 0.5}},
            {{"timestamp": 1700000000000, "trials": 30, "thresholdNorm": 0.0842}}
        ]"#
    )
    .unwrap();
    file.flush().unwrap();

    let loaded = SessionHistory::load(file.path()).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.sessions()[0].timestamp, 1_700_100_000_000);
    assert_eq!(loaded.sessions()[1].timestamp, 1_700_000_000_000);
}

#[test]
fn non_array_file_loads_as_empty_history() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "this is not json").unwrap();
    file.flush().unwrap();

    let loaded = SessionHistory::load(file.path()).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn missing_file_loads_as_empty_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let loaded = SessionHistory::load(&path).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn appended_session_survives_save_cycle() {
    let file = NamedTempFile::new().unwrap();

    let mut history = SessionHistory::new();
    history.append(result(1, 0.1));
    history.save(file.path()).unwrap();

    let mut reloaded = SessionHistory::load(file.path()).unwrap();
    reloaded.append(result(2, 0.09));
    reloaded.save(file.path()).unwrap();

    let final_state = SessionHistory::load(file.path()).unwrap();
    assert_eq!(final_state.len(), 2);
    assert_eq!(final_state.latest().unwrap().timestamp, 2);
}

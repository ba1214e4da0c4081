//! Core data model: gap directions, trial records, and session results.

use serde::{Deserialize, Serialize};

/// Orientation of the gap in the Landolt-C ring.
///
/// Chosen uniformly at random each trial, independently of the adaptive
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GapDirection {
    /// Gap at the top of the ring.
    Up,
    /// Gap on the right side of the ring.
    Right,
    /// Gap at the bottom of the ring.
    Down,
    /// Gap on the left side of the ring.
    Left,
}

impl GapDirection {
    /// All four gap directions, in presentation order.
    pub const ALL: [GapDirection; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];
}

/// One completed trial: what was shown and what the viewer answered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialOutcome {
    /// 0-based trial index within the session.
    pub index: u32,
    /// Normalized stimulus size at the time of judgment.
    pub size_norm: f64,
    /// Direction the viewer chose.
    pub judged: GapDirection,
    /// Direction that was actually presented.
    pub actual: GapDirection,
}

impl TrialOutcome {
    /// Whether the viewer identified the gap correctly.
    pub fn correct(&self) -> bool {
        self.judged == self.actual
    }
}

/// Immutable record of one completed session.
///
/// Serialized field names (`timestamp`, `trials`, `thresholdNorm`) are part
/// of the persistence contract and round-trip losslessly through JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    /// Completion time as milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Total number of trials in the session.
    pub trials: u32,
    /// Estimated threshold size as a fraction of the shorter screen
    /// dimension, in `(0, max_norm]`.
    #[serde(rename = "thresholdNorm")]
    pub threshold_norm: f64,
}

/// Tagged result of recording a response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progress {
    /// More trials remain; call `begin_trial` again.
    Continue,
    /// The trial budget is exhausted and the session produced its result.
    Completed(SessionResult),
}

impl Progress {
    /// The session result, if the session just completed.
    pub fn completed(&self) -> Option<&SessionResult> {
        match self {
            Self::Continue => None,
            Self::Completed(result) => Some(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_outcome_correctness() {
        let hit = TrialOutcome {
            index: 0,
            size_norm: 0.18,
            judged: GapDirection::Left,
            actual: GapDirection::Left,
        };
        let miss = TrialOutcome {
            judged: GapDirection::Up,
            ..hit
        };
        assert!(hit.correct());
        assert!(!miss.correct());
    }

    #[test]
    fn test_session_result_field_names() {
        let result = SessionResult {
            timestamp: 1_700_000_000_000,
            trials: 30,
            threshold_norm: 0.0842,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"timestamp\":1700000000000"));
        assert!(json.contains("\"trials\":30"));
        assert!(json.contains("\"thresholdNorm\":0.0842"));

        let back: SessionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_progress_accessor() {
        assert!(Progress::Continue.completed().is_none());
        let result = SessionResult {
            timestamp: 0,
            trials: 30,
            threshold_norm: 0.12,
        };
        assert_eq!(Progress::Completed(result).completed(), Some(&result));
    }
}

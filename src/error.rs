//! Error types for session sequencing and configuration.

/// Error returned when controller methods are called out of order.
///
/// The controller enforces a strict `begin_trial` / `record_response`
/// alternation for the lifetime of one session. A sequencing violation is
/// not recoverable for that controller instance; the caller must start a
/// new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencingError {
    /// `record_response` was called with no open trial.
    ///
    /// Every response must be preceded by exactly one `begin_trial`, which
    /// fixes the actual gap direction the response is judged against.
    ResponseWithoutTrial,

    /// `begin_trial` was called while a trial was already open.
    ///
    /// Re-rolling the direction mid-trial would let a driver discard
    /// unfavorable directions, so the open trial must be answered first.
    TrialAlreadyOpen,

    /// The session already produced its result.
    ///
    /// A controller that returned `Progress::Completed` must not be
    /// reused.
    SessionCompleted,
}

impl std::fmt::Display for SequencingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResponseWithoutTrial => {
                write!(f, "record_response called without a preceding begin_trial")
            }
            Self::TrialAlreadyOpen => {
                write!(f, "begin_trial called while a trial is already open")
            }
            Self::SessionCompleted => {
                write!(f, "session already completed - start a new controller")
            }
        }
    }
}

impl std::error::Error for SequencingError {}

/// Error returned when a staircase configuration is degenerate.
///
/// Checked once at controller construction so the step logic never has to
/// deal with undefined clamping behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `total_trials` is zero.
    NoTrials,

    /// `min_norm` is not strictly below `max_norm`, or either bound is
    /// non-positive or non-finite.
    InvalidBounds,

    /// `initial_size_norm` lies outside `[min_norm, max_norm]`.
    InitialSizeOutOfBounds,

    /// `step_down` is not in `(0, 1)` - a "harder" step must shrink.
    StepDownNotShrinking,

    /// `step_up` is not finite and greater than 1 - an "easier" step must
    /// grow.
    StepUpNotGrowing,

    /// `correct_streak_threshold` is zero.
    ZeroStreakThreshold,

    /// `gap_angle_degrees` is outside `(0, 360)`.
    InvalidGapAngle,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoTrials => write!(f, "total_trials must be > 0"),
            Self::InvalidBounds => {
                write!(f, "size bounds must satisfy 0 < min_norm < max_norm")
            }
            Self::InitialSizeOutOfBounds => {
                write!(f, "initial_size_norm must lie in [min_norm, max_norm]")
            }
            Self::StepDownNotShrinking => write!(f, "step_down must be in (0, 1)"),
            Self::StepUpNotGrowing => write!(f, "step_up must be > 1"),
            Self::ZeroStreakThreshold => {
                write!(f, "correct_streak_threshold must be > 0")
            }
            Self::InvalidGapAngle => {
                write!(f, "gap_angle_degrees must be in (0, 360)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

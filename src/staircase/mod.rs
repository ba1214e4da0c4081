//! The 3-down/1-up adaptive staircase controller.
//!
//! One controller drives one session. The driving application alternates
//! strictly between [`begin_trial`](StaircaseController::begin_trial)
//! (fetch the size and gap direction to present) and
//! [`record_response`](StaircaseController::record_response) (report the
//! viewer's answer). After three consecutive correct answers the stimulus
//! shrinks by `step_down`; after one incorrect answer it grows by
//! `step_up`; both clamped to the configured bounds. Sizes at which the
//! step direction flips are collected as reversals for the end-of-session
//! threshold estimate.

mod state;

pub use state::{StaircaseState, StepDirection};

use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::StaircaseConfig;
use crate::direction::{DirectionSource, UniformDirections};
use crate::error::{ConfigError, SequencingError};
use crate::estimator::ThresholdEstimator;
use crate::types::{GapDirection, Progress, SessionResult, TrialOutcome};

/// Drives one adaptive staircase session.
///
/// The controller owns all mutable session state and is single-threaded
/// and turn-based: one trial in flight at a time. Abandoning a session
/// (dropping the controller before the trial budget is exhausted) produces
/// no [`SessionResult`].
#[derive(Debug)]
pub struct StaircaseController<D: DirectionSource = UniformDirections> {
    config: StaircaseConfig,
    state: StaircaseState,
    directions: D,
    /// Direction presented by the open trial, if one is awaiting a response.
    open_trial: Option<GapDirection>,
    completed: bool,
}

impl StaircaseController<UniformDirections> {
    /// Create a controller with uniform random directions.
    ///
    /// Directions are seeded from `config.direction_seed` when set,
    /// otherwise from OS entropy. Fails fast on a degenerate
    /// configuration.
    pub fn new(config: StaircaseConfig) -> Result<Self, ConfigError> {
        let directions = match config.direction_seed {
            Some(seed) => UniformDirections::seeded(seed),
            None => UniformDirections::new(),
        };
        Self::with_directions(config, directions)
    }
}

impl<D: DirectionSource> StaircaseController<D> {
    /// Create a controller with a caller-supplied direction source.
    pub fn with_directions(config: StaircaseConfig, directions: D) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = StaircaseState::new(config.initial_size_norm, config.total_trials);
        Ok(Self {
            config,
            state,
            directions,
            open_trial: None,
            completed: false,
        })
    }

    /// The configuration this session runs under.
    pub fn config(&self) -> &StaircaseConfig {
        &self.config
    }

    /// Read-only view of the session state.
    pub fn state(&self) -> &StaircaseState {
        &self.state
    }

    /// Whether the session has produced its result.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Open the next trial: the size to render and the gap direction.
    ///
    /// Does not mutate adaptive state. Must be followed by exactly one
    /// [`record_response`](Self::record_response) before the next call.
    ///
    /// # Errors
    ///
    /// `TrialAlreadyOpen` if the previous trial has no recorded response
    /// yet; `SessionCompleted` if the session already finished.
    pub fn begin_trial(&mut self) -> Result<(f64, GapDirection), SequencingError> {
        if self.completed {
            return Err(SequencingError::SessionCompleted);
        }
        if self.open_trial.is_some() {
            return Err(SequencingError::TrialAlreadyOpen);
        }
        let gap = self.directions.next_direction();
        self.open_trial = Some(gap);
        Ok((self.state.size_norm(), gap))
    }

    /// Record the viewer's answer for the open trial.
    ///
    /// Correctness is derived against the direction handed out by
    /// [`begin_trial`](Self::begin_trial). A correct answer that does not
    /// complete the streak only increments the streak counter; no size
    /// change and no reversal evaluation happen.
    ///
    /// # Errors
    ///
    /// `ResponseWithoutTrial` if no trial is open; `SessionCompleted` if
    /// the session already finished.
    pub fn record_response(
        &mut self,
        judged: GapDirection,
    ) -> Result<Progress, SequencingError> {
        if self.completed {
            return Err(SequencingError::SessionCompleted);
        }
        let actual = self
            .open_trial
            .take()
            .ok_or(SequencingError::ResponseWithoutTrial)?;

        self.state.push_outcome(TrialOutcome {
            index: self.state.trial_index(),
            size_norm: self.state.size_norm(),
            judged,
            actual,
        });

        if judged == actual {
            self.state.bump_streak();
            if self.state.correct_streak() >= self.config.correct_streak_threshold {
                self.apply_step(StepDirection::Down);
                self.state.reset_streak();
            }
        } else {
            self.state.reset_streak();
            self.apply_step(StepDirection::Up);
        }

        self.state.advance_trial();

        if self.state.trial_index() >= self.config.total_trials {
            self.completed = true;
            Ok(Progress::Completed(self.finish()))
        } else {
            Ok(Progress::Continue)
        }
    }

    /// Shrink or grow the stimulus, clamped to the configured bounds, and
    /// evaluate the reversal check against the pre-step size.
    fn apply_step(&mut self, step: StepDirection) {
        let pre_step_size = self.state.size_norm();
        let stepped = match step {
            StepDirection::Down => {
                (pre_step_size * self.config.step_down).max(self.config.min_norm)
            }
            StepDirection::Up => (pre_step_size * self.config.step_up).min(self.config.max_norm),
        };
        self.state.set_size_norm(stepped);
        self.state.register_step(step, pre_step_size);
    }

    /// Build the session result from the accumulated history.
    fn finish(&self) -> SessionResult {
        let threshold_norm =
            ThresholdEstimator::estimate(self.state.reversal_sizes(), self.state.size_norm());
        SessionResult {
            timestamp: epoch_millis(),
            trials: self.config.total_trials,
            threshold_norm,
        }
    }
}

/// Current time as milliseconds since the Unix epoch.
///
/// A clock before the epoch saturates to 0 rather than failing the session
/// at its last step.
fn epoch_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

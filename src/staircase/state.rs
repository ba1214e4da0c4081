//! State owned by the staircase controller during one session.

use crate::types::TrialOutcome;

/// Direction of the most recent size step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// The stimulus shrank (got harder).
    Down,
    /// The stimulus grew (got easier).
    Up,
}

/// Mutable per-session staircase state.
///
/// Owned exclusively by [`StaircaseController`](crate::StaircaseController)
/// for the lifetime of one session and mutated only through its two
/// operations; never aliased elsewhere.
#[derive(Debug, Clone)]
pub struct StaircaseState {
    /// Current normalized stimulus size, always in `[min_norm, max_norm]`.
    size_norm: f64,

    /// Consecutive correct responses since the last size change.
    correct_streak: u32,

    /// Direction of the most recent size step, or `None` before the first
    /// step.
    last_step: Option<StepDirection>,

    /// Sizes recorded at each step-direction flip, in order.
    ///
    /// The first direction-establishing step is not itself a reversal;
    /// entries appear only from the second direction change onward, and
    /// hold the size prevailing just before the flipping step applied.
    reversal_sizes: Vec<f64>,

    /// 0-based index of the next trial.
    trial_index: u32,

    /// Per-trial log, one entry per recorded response.
    outcomes: Vec<TrialOutcome>,
}

impl StaircaseState {
    /// Create state for a fresh session starting at `initial_size_norm`.
    pub(crate) fn new(initial_size_norm: f64, total_trials: u32) -> Self {
        Self {
            size_norm: initial_size_norm,
            correct_streak: 0,
            last_step: None,
            reversal_sizes: Vec::new(),
            trial_index: 0,
            outcomes: Vec::with_capacity(total_trials as usize),
        }
    }

    /// Current normalized stimulus size.
    pub fn size_norm(&self) -> f64 {
        self.size_norm
    }

    /// Consecutive correct responses since the last size change.
    pub fn correct_streak(&self) -> u32 {
        self.correct_streak
    }

    /// Direction of the most recent size step, if any step occurred.
    pub fn last_step(&self) -> Option<StepDirection> {
        self.last_step
    }

    /// Sizes recorded at step-direction flips, in order.
    pub fn reversal_sizes(&self) -> &[f64] {
        &self.reversal_sizes
    }

    /// 0-based index of the next trial.
    pub fn trial_index(&self) -> u32 {
        self.trial_index
    }

    /// Per-trial log of every recorded response so far.
    pub fn outcomes(&self) -> &[TrialOutcome] {
        &self.outcomes
    }

    pub(crate) fn set_size_norm(&mut self, size: f64) {
        self.size_norm = size;
    }

    pub(crate) fn bump_streak(&mut self) {
        self.correct_streak += 1;
    }

    pub(crate) fn reset_streak(&mut self) {
        self.correct_streak = 0;
    }

    pub(crate) fn advance_trial(&mut self) {
        self.trial_index += 1;
    }

    pub(crate) fn push_outcome(&mut self, outcome: TrialOutcome) {
        self.outcomes.push(outcome);
    }

    /// Record a step and capture a reversal if the direction flipped.
    ///
    /// `pre_step_size` is the size that was active when the flip happened,
    /// before this step's shrink/growth applied. The first step only
    /// establishes a direction.
    pub(crate) fn register_step(&mut self, step: StepDirection, pre_step_size: f64) {
        if let Some(last) = self.last_step {
            if last != step {
                self.reversal_sizes.push(pre_step_size);
            }
        }
        self.last_step = Some(step);
    }
}

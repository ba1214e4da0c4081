//! Configuration for the adaptive staircase session.

use crate::error::ConfigError;

/// Configuration options for [`StaircaseController`](crate::StaircaseController).
///
/// All values are fixed for the lifetime of one session. Sizes are
/// normalized: a fraction of the shorter screen dimension, independent of
/// device resolution.
#[derive(Debug, Clone)]
pub struct StaircaseConfig {
    /// Number of trials in a session. Default: 30.
    pub total_trials: u32,

    /// Stimulus size at the first trial. Default: 0.18 (18% of the shorter
    /// screen dimension).
    pub initial_size_norm: f64,

    /// Smallest presentable size. Default: 0.03.
    pub min_norm: f64,

    /// Largest presentable size. Default: 0.5.
    pub max_norm: f64,

    /// Multiplicative shrink applied after a full correct streak.
    /// Default: 0.85.
    pub step_down: f64,

    /// Multiplicative growth applied after one incorrect response.
    /// Default: 1.2.
    pub step_up: f64,

    /// Consecutive correct responses required before a shrink. Default: 3
    /// (the "3-down" in 3-down/1-up, converging near 79% correct).
    pub correct_streak_threshold: u32,

    /// Angular width of the ring gap in degrees. Consumed only by the
    /// optotype geometry, not by the step logic. Default: 40.
    pub gap_angle_degrees: f64,

    /// Optional deterministic seed for the gap direction source.
    ///
    /// When set, the sequence of presented directions is reproducible,
    /// which helps with debugging and scripted tests. Default: None.
    pub direction_seed: Option<u64>,
}

impl Default for StaircaseConfig {
    fn default() -> Self {
        Self {
            total_trials: 30,
            initial_size_norm: 0.18,
            min_norm: 0.03,
            max_norm: 0.5,
            step_down: 0.85,
            step_up: 1.2,
            correct_streak_threshold: 3,
            gap_angle_degrees: 40.0,
            direction_seed: None,
        }
    }
}

impl StaircaseConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard 30-trial session.
    pub fn standard() -> Self {
        Self::default()
    }

    /// A short 12-trial session for quick checks.
    ///
    /// Too short for a reliable reversal-based estimate; the estimator
    /// will usually take its final-size fallback.
    pub fn quick() -> Self {
        Self {
            total_trials: 12,
            ..Default::default()
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the number of trials per session.
    pub fn total_trials(mut self, trials: u32) -> Self {
        assert!(trials > 0, "total_trials must be > 0");
        self.total_trials = trials;
        self
    }

    /// Set the initial stimulus size.
    pub fn initial_size_norm(mut self, size: f64) -> Self {
        assert!(
            size.is_finite() && size > 0.0,
            "initial_size_norm must be positive and finite"
        );
        self.initial_size_norm = size;
        self
    }

    /// Set the size bounds.
    pub fn size_bounds(mut self, min_norm: f64, max_norm: f64) -> Self {
        assert!(
            min_norm.is_finite() && max_norm.is_finite() && min_norm > 0.0 && min_norm < max_norm,
            "size bounds must satisfy 0 < min_norm < max_norm"
        );
        self.min_norm = min_norm;
        self.max_norm = max_norm;
        self
    }

    /// Set the shrink factor applied after a correct streak.
    pub fn step_down(mut self, factor: f64) -> Self {
        assert!(
            factor > 0.0 && factor < 1.0,
            "step_down must be in (0, 1)"
        );
        self.step_down = factor;
        self
    }

    /// Set the growth factor applied after an incorrect response.
    pub fn step_up(mut self, factor: f64) -> Self {
        assert!(
            factor.is_finite() && factor > 1.0,
            "step_up must be > 1"
        );
        self.step_up = factor;
        self
    }

    /// Set the correct-streak length that triggers a shrink.
    pub fn correct_streak_threshold(mut self, streak: u32) -> Self {
        assert!(streak > 0, "correct_streak_threshold must be > 0");
        self.correct_streak_threshold = streak;
        self
    }

    /// Set the angular width of the ring gap.
    pub fn gap_angle_degrees(mut self, degrees: f64) -> Self {
        assert!(
            degrees > 0.0 && degrees < 360.0,
            "gap_angle_degrees must be in (0, 360)"
        );
        self.gap_angle_degrees = degrees;
        self
    }

    /// Set a deterministic seed for direction selection.
    pub fn seed(mut self, seed: u64) -> Self {
        self.direction_seed = Some(seed);
        self
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Check the configuration for degenerate values.
    ///
    /// Called by the controller at construction; exposed so callers
    /// assembling a config from external input can fail early themselves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        if !self.min_norm.is_finite()
            || !self.max_norm.is_finite()
            || self.min_norm <= 0.0
            || self.min_norm >= self.max_norm
        {
            return Err(ConfigError::InvalidBounds);
        }
        if !self.initial_size_norm.is_finite()
            || self.initial_size_norm < self.min_norm
            || self.initial_size_norm > self.max_norm
        {
            return Err(ConfigError::InitialSizeOutOfBounds);
        }
        if !(self.step_down > 0.0 && self.step_down < 1.0) {
            return Err(ConfigError::StepDownNotShrinking);
        }
        if !(self.step_up.is_finite() && self.step_up > 1.0) {
            return Err(ConfigError::StepUpNotGrowing);
        }
        if self.correct_streak_threshold == 0 {
            return Err(ConfigError::ZeroStreakThreshold);
        }
        if !(self.gap_angle_degrees > 0.0 && self.gap_angle_degrees < 360.0) {
            return Err(ConfigError::InvalidGapAngle);
        }
        Ok(())
    }
}

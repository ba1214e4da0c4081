//! Numeric constants shared across the staircase and estimator.

/// Minimum number of recorded reversals for a reversal-based estimate.
///
/// With fewer reversals the staircase never settled around the threshold,
/// so the estimator falls back to the final stimulus size instead.
pub const MIN_REVERSALS_FOR_ESTIMATE: usize = 4;

/// Number of final-size copies used by the estimator's fallback branch.
///
/// The geometric mean of N copies of one value is that value, so the
/// fallback reduces to the final size; the window is kept explicit to
/// mirror the estimation policy.
pub const FALLBACK_WINDOW: usize = 10;

/// Floor applied to each size before entering the geometric mean.
///
/// Guards the log-space accumulation against zero or negative inputs.
/// Well below `min_norm` under any valid configuration.
pub const SIZE_FLOOR: f64 = 1e-5;

/// Smallest optotype diameter a renderer is asked to draw, in pixels.
///
/// Below this the gap is thinner than a device pixel and the trial would
/// measure the screen, not the viewer.
pub const MIN_DIAMETER_PX: f64 = 12.0;

/// Ring stroke width as a fraction of the optotype diameter.
pub const STROKE_RATIO: f64 = 0.18;

//! Threshold estimation from the reversal history of a finished session.
//!
//! A staircase oscillates around the perceptual threshold once it has
//! converged, so the sizes at which the step direction flipped are the
//! most informative samples. Their geometric mean is the standard reducer
//! for multiplicative staircases: steps are ratios, so averaging belongs
//! in log space.

use crate::constants::{FALLBACK_WINDOW, MIN_REVERSALS_FOR_ESTIMATE, SIZE_FLOOR};

/// Reduces a session's reversal/size history to one scalar threshold.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdEstimator;

impl ThresholdEstimator {
    /// Estimate the threshold from recorded reversal sizes.
    ///
    /// With at least [`MIN_REVERSALS_FOR_ESTIMATE`] reversals, returns the
    /// geometric mean of all of them. With fewer (a streak pattern that
    /// rarely flipped direction), falls back to [`FALLBACK_WINDOW`] copies
    /// of the final stimulus size, which reduces to the final size itself.
    pub fn estimate(reversal_sizes: &[f64], final_size_norm: f64) -> f64 {
        if reversal_sizes.len() >= MIN_REVERSALS_FOR_ESTIMATE {
            geometric_mean(reversal_sizes)
        } else {
            geometric_mean(&[final_size_norm; FALLBACK_WINDOW])
        }
    }
}

/// Geometric mean with each value floored to [`SIZE_FLOOR`].
///
/// Accumulates in log space rather than multiplying through, so long
/// sequences of small sizes cannot underflow the running product.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn geometric_mean(values: &[f64]) -> f64 {
    assert!(
        !values.is_empty(),
        "Cannot compute geometric mean of empty slice"
    );

    let log_sum: f64 = values.iter().map(|&v| v.max(SIZE_FLOOR).ln()).sum();
    (log_sum / values.len() as f64).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometric_mean_of_alternating_reversals() {
        // sqrt(0.1 * 0.2) = 0.14142...
        let threshold = geometric_mean(&[0.1, 0.2, 0.1, 0.2]);
        assert!((threshold - 0.141_421_356).abs() < 1e-4);
    }

    #[test]
    fn test_geometric_mean_of_constant_sequence() {
        let threshold = geometric_mean(&[0.12; 10]);
        assert!((threshold - 0.12).abs() < 1e-12);
    }

    #[test]
    fn test_floor_guards_degenerate_inputs() {
        // Zero and negative entries are floored, not propagated.
        let threshold = geometric_mean(&[0.0, -1.0]);
        assert!((threshold - SIZE_FLOOR).abs() < 1e-12);
        assert!(threshold > 0.0);
    }

    #[test]
    fn test_estimate_uses_reversals_at_four() {
        let reversals = [0.1, 0.2, 0.1, 0.2];
        let threshold = ThresholdEstimator::estimate(&reversals, 0.5);
        assert!((threshold - 0.141_421_356).abs() < 1e-4);
    }

    #[test]
    fn test_estimate_falls_back_below_four_reversals() {
        let threshold = ThresholdEstimator::estimate(&[0.1, 0.2, 0.1], 0.12);
        assert!((threshold - 0.12).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_fallback_with_no_reversals() {
        let threshold = ThresholdEstimator::estimate(&[], 0.0421);
        assert!((threshold - 0.0421).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "Cannot compute geometric mean of empty slice")]
    fn test_empty_slice_panics() {
        let _ = geometric_mean(&[]);
    }
}

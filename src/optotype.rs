//! Optotype arc geometry for an external renderer.
//!
//! Drawing is out of scope for this crate, but the ring's geometry is
//! pure arithmetic on the trial state, so it lives here: a renderer takes
//! an [`ArcSpec`] and strokes one arc. Angles follow the common canvas
//! convention of degrees clockwise from the 3 o'clock position.

use crate::config::StaircaseConfig;
use crate::constants::{MIN_DIAMETER_PX, STROKE_RATIO};
use crate::types::GapDirection;

/// Everything a renderer needs to stroke one Landolt-C ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    /// Outer ring diameter in pixels.
    pub diameter_px: f64,
    /// Stroke width in pixels.
    pub stroke_width_px: f64,
    /// Angle at which the visible arc starts, in degrees.
    pub start_angle_deg: f64,
    /// Angular extent of the visible arc, in degrees. The remaining
    /// `gap_angle_degrees` is the gap.
    pub sweep_angle_deg: f64,
}

impl ArcSpec {
    /// Compute the arc for one trial.
    ///
    /// `size_norm` is the controller's current size and
    /// `min_dimension_px` the shorter screen dimension in pixels. The
    /// diameter is clamped between [`MIN_DIAMETER_PX`] and
    /// `max_norm * min_dimension_px` so extreme sizes stay drawable.
    pub fn for_trial(
        size_norm: f64,
        min_dimension_px: f64,
        gap: GapDirection,
        config: &StaircaseConfig,
    ) -> Self {
        let diameter_px =
            (size_norm * min_dimension_px).clamp(MIN_DIAMETER_PX, config.max_norm * min_dimension_px);
        let gap_angle = config.gap_angle_degrees;
        let start_angle_deg = match gap {
            GapDirection::Right => -gap_angle / 2.0,
            GapDirection::Up => 90.0 - gap_angle / 2.0,
            GapDirection::Left => 180.0 - gap_angle / 2.0,
            GapDirection::Down => 270.0 - gap_angle / 2.0,
        };

        Self {
            diameter_px,
            stroke_width_px: diameter_px * STROKE_RATIO,
            start_angle_deg,
            sweep_angle_deg: 360.0 - gap_angle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_centered_on_each_direction() {
        let config = StaircaseConfig::default();
        let spec = |gap| ArcSpec::for_trial(0.18, 1000.0, gap, &config);

        assert_eq!(spec(GapDirection::Right).start_angle_deg, -20.0);
        assert_eq!(spec(GapDirection::Up).start_angle_deg, 70.0);
        assert_eq!(spec(GapDirection::Left).start_angle_deg, 160.0);
        assert_eq!(spec(GapDirection::Down).start_angle_deg, 250.0);
    }

    #[test]
    fn test_sweep_leaves_gap_angle_open() {
        let config = StaircaseConfig::default();
        let spec = ArcSpec::for_trial(0.18, 1000.0, GapDirection::Up, &config);
        assert_eq!(spec.sweep_angle_deg, 320.0);
    }

    #[test]
    fn test_diameter_and_stroke_scale_with_screen() {
        let config = StaircaseConfig::default();
        let spec = ArcSpec::for_trial(0.18, 1000.0, GapDirection::Up, &config);
        assert!((spec.diameter_px - 180.0).abs() < 1e-9);
        assert!((spec.stroke_width_px - 180.0 * 0.18).abs() < 1e-9);
    }

    #[test]
    fn test_diameter_clamped_to_drawable_range() {
        let config = StaircaseConfig::default();

        // Tiny stimulus on a small screen floors at the pixel minimum.
        let small = ArcSpec::for_trial(0.03, 300.0, GapDirection::Up, &config);
        assert_eq!(small.diameter_px, 12.0);

        // Oversized request caps at max_norm of the short side.
        let large = ArcSpec::for_trial(0.9, 1000.0, GapDirection::Up, &config);
        assert_eq!(large.diameter_px, 500.0);
    }
}

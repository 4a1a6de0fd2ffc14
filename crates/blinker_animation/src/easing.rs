//! Easing curves
//!
//! An easing maps linear progress (0.0 to 1.0) to eased progress over the
//! same range.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Timing curve applied to a sweep's linear progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant rate of change
    Linear,
    /// Slow at both extremes, fastest through the middle
    ///
    /// A half cosine: `(cos((t + 1) * PI) / 2) + 0.5`.
    #[default]
    AccelerateDecelerate,
}

impl Easing {
    /// Apply the curve to linear progress `t`
    ///
    /// Input is clamped to `[0, 1]`; the endpoints map to themselves.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::AccelerateDecelerate => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else {
                    ((t + 1.0) * PI).cos() / 2.0 + 0.5
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::AccelerateDecelerate] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
        }
    }

    #[test]
    fn test_accelerate_decelerate_is_symmetric_about_midpoint() {
        let ease = Easing::AccelerateDecelerate;
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-6);
        for i in 1..10 {
            let t = i as f32 / 20.0;
            let low = ease.apply(t);
            let high = ease.apply(1.0 - t);
            assert!((low + high - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_accelerate_decelerate_is_slow_at_the_extremes() {
        let ease = Easing::AccelerateDecelerate;
        // First and last tenth move less than linear would
        assert!(ease.apply(0.1) < 0.1);
        assert!(ease.apply(0.9) > 0.9);
        // Middle tenth moves more than linear would
        assert!(ease.apply(0.55) - ease.apply(0.45) > 0.1);
    }

    #[test]
    fn test_monotonic() {
        let ease = Easing::AccelerateDecelerate;
        let mut previous = 0.0;
        for i in 0..=100 {
            let value = ease.apply(i as f32 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }
}

use crate::consts::DEFAULT_MAX_COMPLEXITY_COEFFICIENT;
use crate::error::{AccessError, AccessResult};

/// Inflates raw travel time by intersection-driven friction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexityAdjuster {
    pub max_coefficient: f64,
}

impl Default for ComplexityAdjuster {
    fn default() -> Self {
        Self {
            max_coefficient: DEFAULT_MAX_COMPLEXITY_COEFFICIENT,
        }
    }
}

impl ComplexityAdjuster {
    pub fn new(max_coefficient: f64) -> AccessResult<Self> {
        if !max_coefficient.is_finite() || max_coefficient < 0.0 {
            return Err(AccessError::invalid(
                "max_complexity_coefficient",
                max_coefficient,
                "must be finite and >= 0",
            ));
        }
        Ok(Self { max_coefficient })
    }

    /// `base_time * (1 + alpha * intersection_density)`
    pub fn adjust(&self, base_time: f64, intersection_density: f64, alpha: f64) -> AccessResult<f64> {
        if !base_time.is_finite() || base_time <= 0.0 {
            return Err(AccessError::invalid(
                "base_travel_time",
                base_time,
                "must be finite and > 0",
            ));
        }
        if !intersection_density.is_finite() || intersection_density < 0.0 {
            return Err(AccessError::invalid(
                "intersection_density",
                intersection_density,
                "must be finite and >= 0",
            ));
        }
        if !(0.0..=self.max_coefficient).contains(&alpha) {
            return Err(AccessError::invalid(
                "complexity_coefficient",
                alpha,
                "outside configured bounds",
            ));
        }

        let adjusted = base_time * (1.0 + alpha * intersection_density);
        if !adjusted.is_finite() {
            return Err(AccessError::invalid(
                "base_travel_time",
                base_time,
                "adjusted travel time overflows",
            ));
        }
        Ok(adjusted)
    }
}

/// Adjusts with the default alpha bound of [0, 1].
#[inline]
pub fn adjust(base_time: f64, intersection_density: f64, alpha: f64) -> AccessResult<f64> {
    ComplexityAdjuster::default().adjust(base_time, intersection_density, alpha)
}

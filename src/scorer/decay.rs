use super::types::DecayParameters;
use crate::error::{AccessError, AccessResult};

/// Gaussian distance decay: `exp(-(distance / sigma)^2)`.
///
/// `distance` may be a raw distance or a complexity-adjusted travel time.
/// The weight is strictly positive in exact arithmetic, but once
/// `distance / sigma` exceeds ~27 the `f64` result underflows and `0.0` is
/// returned. Callers that need `weight > 0` must keep the ratio below that.
#[inline]
pub fn weight(distance: f64, sigma: f64) -> AccessResult<f64> {
    if !distance.is_finite() || distance < 0.0 {
        return Err(AccessError::invalid(
            "distance",
            distance,
            "must be finite and >= 0",
        ));
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(AccessError::invalid("sigma", sigma, "must be finite and > 0"));
    }

    let r = distance / sigma;
    Ok((-(r * r)).exp())
}

impl DecayParameters {
    pub fn weight(&self) -> AccessResult<f64> {
        weight(self.distance_or_time, self.scale_sigma)
    }
}

//! Data series behind the decay and complexity charts.

use crate::consts::MAX_CURVE_POINTS;
use crate::error::{AccessError, AccessResult};
use crate::scenarios::NamedRoute;
use crate::scorer::complexity::ComplexityAdjuster;
use crate::scorer::decay;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub distance: f64,
    pub weight: f64,
}

/// Samples the decay weight at `0, step, 2*step, ...` up to and including `max_distance`.
pub fn decay_curve(sigma: f64, max_distance: f64, step: f64) -> AccessResult<Vec<CurvePoint>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(AccessError::invalid("step", step, "must be finite and > 0"));
    }
    if !max_distance.is_finite() || max_distance < 0.0 {
        return Err(AccessError::invalid(
            "max_distance",
            max_distance,
            "must be finite and >= 0",
        ));
    }

    // Index-based to avoid accumulating float error on the x-axis.
    let intervals = (max_distance / step + 1e-9).floor();
    if !intervals.is_finite() || intervals >= MAX_CURVE_POINTS as f64 {
        return Err(AccessError::invalid(
            "step",
            step,
            "too small for the requested range",
        ));
    }
    let count = intervals as usize + 1;
    (0..count)
        .map(|i| {
            let distance = i as f64 * step;
            Ok(CurvePoint {
                distance,
                weight: decay::weight(distance, sigma)?,
            })
        })
        .collect()
}

pub fn write_curve_csv<W: Write>(points: &[CurvePoint], writer: W) -> AccessResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for p in points {
        wtr.serialize(p)?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteAdjustment {
    pub name: String,
    pub base_travel_time: f64,
    pub adjusted_travel_time: f64,
    pub increase_pct: f64,
}

pub fn compare_routes(
    adjuster: &ComplexityAdjuster,
    routes: &[NamedRoute],
    alpha: f64,
) -> AccessResult<Vec<RouteAdjustment>> {
    routes
        .iter()
        .map(|r| {
            let adjusted = adjuster.adjust(r.base_travel_time, r.intersection_density, alpha)?;
            Ok(RouteAdjustment {
                name: r.name.clone(),
                base_travel_time: r.base_travel_time,
                adjusted_travel_time: adjusted,
                increase_pct: (adjusted - r.base_travel_time) / r.base_travel_time * 100.0,
            })
        })
        .collect()
}

use super::catchment::CatchmentScorer;
use super::complexity::ComplexityAdjuster;
use super::decay;
use super::types::{AccessibilityResult, ProviderContribution, ProviderSite, Travel};
use crate::error::AccessResult;
use tracing::debug;

/// Resolves the travel time that feeds the decay weighter.
/// Returns the time and whether the complexity adjustment ran.
#[inline]
pub fn resolve_travel_time(adjuster: &ComplexityAdjuster, travel: &Travel) -> AccessResult<(f64, bool)> {
    match travel {
        Travel::Route(route) => {
            let t = adjuster.adjust(
                route.base_travel_time,
                route.intersection_density,
                route.complexity_coefficient,
            )?;
            Ok((t, true))
        }
        Travel::Direct { minutes } => Ok((*minutes, false)),
    }
}

/// Runs adjustment, decay and catchment scoring in sequence.
///
/// All providers are validated before anything is summed, so a single bad
/// site fails the whole evaluation.
pub fn evaluate(
    adjuster: &ComplexityAdjuster,
    catchment: &CatchmentScorer,
    sites: &[ProviderSite],
    sigma: f64,
) -> AccessResult<AccessibilityResult> {
    let mut providers = Vec::with_capacity(sites.len());
    let mut weighted = Vec::with_capacity(sites.len());

    for site in sites {
        let (travel_time, adjusted) = resolve_travel_time(adjuster, &site.travel)?;
        let decay_weight = decay::weight(travel_time, sigma)?;
        let supply_ratio = super::catchment::supply_ratio(&site.offer)?;

        providers.push(ProviderContribution {
            travel_time,
            adjusted,
            decay_weight,
            supply_ratio,
            contribution: supply_ratio * decay_weight,
        });
        weighted.push((site.offer, decay_weight));
    }

    // Empty catchments still need sigma to be sane.
    if sites.is_empty() {
        decay::weight(0.0, sigma)?;
    }

    let score = catchment.score(&weighted)?;

    debug!(
        providers = providers.len(),
        sigma,
        weekly = score.weekly_score,
        annual = score.annual_score,
        class = %score.classification,
        "evaluated catchment"
    );

    Ok(AccessibilityResult {
        providers,
        weekly_score: score.weekly_score,
        annual_score: score.annual_score,
        classification: score.classification,
    })
}

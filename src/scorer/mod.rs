pub mod catchment;
pub mod complexity;
pub mod decay;
pub mod engine;
pub mod types;

pub use self::catchment::{CatchmentScore, CatchmentScorer, Classification, ClassificationThresholds};
pub use self::complexity::ComplexityAdjuster;
pub use self::types::{
    AccessibilityResult, DecayParameters, ProviderContribution, ProviderOffer, ProviderSite,
    RouteParameters, Travel,
};
use crate::config::ModelParams;
use crate::error::AccessResult;
use typed_builder::TypedBuilder;

/// One evaluation: the providers reachable from a population point and the
/// decay scale to weigh them with.
#[derive(Debug, Clone, TypedBuilder)]
pub struct EvaluationRequest {
    #[builder(default)]
    pub sites: Vec<ProviderSite>,
    pub sigma: f64,
}

/// Stateless orchestrator. Holds only validated configuration; every call
/// to [`Scorer::evaluate`] is independent.
#[derive(Debug, Clone, Copy)]
pub struct Scorer {
    params: ModelParams,
    adjuster: ComplexityAdjuster,
    catchment: CatchmentScorer,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            params: ModelParams::default(),
            adjuster: ComplexityAdjuster::default(),
            catchment: CatchmentScorer::default(),
        }
    }
}

impl Scorer {
    pub fn new(params: ModelParams) -> AccessResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            adjuster: ComplexityAdjuster::new(params.max_complexity_coefficient)?,
            catchment: CatchmentScorer::new(params.thresholds()?),
        })
    }

    /// The configuration this scorer was validated and built from.
    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    pub fn adjuster(&self) -> &ComplexityAdjuster {
        &self.adjuster
    }

    pub fn thresholds(&self) -> &ClassificationThresholds {
        &self.catchment.thresholds
    }

    /// Builds a route using the configured complexity coefficient.
    pub fn route(&self, base_travel_time: f64, intersection_density: f64) -> RouteParameters {
        RouteParameters::new(
            base_travel_time,
            intersection_density,
            self.params.complexity_coefficient,
        )
    }

    pub fn adjust(&self, route: &RouteParameters) -> AccessResult<f64> {
        self.adjuster.adjust(
            route.base_travel_time,
            route.intersection_density,
            route.complexity_coefficient,
        )
    }

    pub fn evaluate(&self, request: &EvaluationRequest) -> AccessResult<AccessibilityResult> {
        engine::evaluate(&self.adjuster, &self.catchment, &request.sites, request.sigma)
    }

    /// Evaluates with the configured sigma.
    pub fn evaluate_sites(&self, sites: &[ProviderSite]) -> AccessResult<AccessibilityResult> {
        engine::evaluate(
            &self.adjuster,
            &self.catchment,
            sites,
            self.params.decay_sigma,
        )
    }

    pub fn score_catchment(&self, offers: &[(ProviderOffer, f64)]) -> AccessResult<CatchmentScore> {
        self.catchment.score(offers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculator_defaults() {
        let scorer = Scorer::default();
        let site = ProviderSite::new(
            ProviderOffer::new(40, 2988),
            Travel::Route(scorer.route(15.0, 1.67)),
        );
        let res = scorer.evaluate_sites(&[site]).unwrap();

        assert!((res.adjusted_travel_time().unwrap() - 18.7575).abs() < 1e-9);
        assert!((res.decay_weight().unwrap() - 0.906890).abs() < 1e-5);
        assert!((res.supply_ratio().unwrap() - 0.0133869).abs() < 1e-6);
        assert!((res.weekly_score - 0.0121404).abs() < 1e-6);
        assert_eq!(res.classification, Classification::Poor);
    }

    #[test]
    fn test_direct_distance_skips_adjustment() {
        let scorer = Scorer::default();
        let site = ProviderSite::new(ProviderOffer::new(40, 2988), Travel::direct(15.0));
        let res = scorer.evaluate_sites(&[site]).unwrap();
        assert_eq!(res.adjusted_travel_time(), Some(15.0));
        assert!(!res.providers[0].adjusted);
    }

    #[test]
    fn test_params_match_built_thresholds() {
        let params = ModelParams {
            adequate_threshold: 2.0,
            poor_threshold: 0.8,
            ..ModelParams::default()
        };
        let scorer = Scorer::new(params).unwrap();
        assert_eq!(scorer.params().adequate_threshold, 2.0);
        assert_eq!(scorer.thresholds().adequate, 2.0);
        assert_eq!(scorer.thresholds().poor, 0.8);

        let res = scorer.score_catchment(&[(ProviderOffer::new(3, 104), 1.0)]).unwrap();
        assert!((res.annual_score - 1.5).abs() < 1e-12);
        assert_eq!(res.classification, Classification::Poor);
    }

    #[test]
    fn test_empty_request_validates_sigma() {
        let scorer = Scorer::default();
        let bad = EvaluationRequest::builder().sigma(0.0).build();
        assert!(scorer.evaluate(&bad).is_err());

        let ok = EvaluationRequest::builder().sigma(60.0).build();
        let res = scorer.evaluate(&ok).unwrap();
        assert_eq!(res.classification, Classification::Desert);
        assert_eq!(res.decay_weight(), None);
    }
}

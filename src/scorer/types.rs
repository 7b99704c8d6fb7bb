use super::catchment::Classification;
use serde::{Deserialize, Serialize};

/// A route whose raw travel time is inflated by intersection density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteParameters {
    pub base_travel_time: f64,     // minutes
    pub intersection_density: f64, // per minute
    pub complexity_coefficient: f64,
}

impl RouteParameters {
    pub fn new(base_travel_time: f64, intersection_density: f64, complexity_coefficient: f64) -> Self {
        Self {
            base_travel_time,
            intersection_density,
            complexity_coefficient,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecayParameters {
    pub distance_or_time: f64,
    pub scale_sigma: f64,
}

/// Weekly appointment capacity offered to a competing population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderOffer {
    pub appointment_capacity: u32,
    pub competing_population: u32,
}

impl ProviderOffer {
    pub fn new(appointment_capacity: u32, competing_population: u32) -> Self {
        Self {
            appointment_capacity,
            competing_population,
        }
    }
}

/// How far away a provider is. Some callers know the complexity inputs,
/// others pass a fixed distance and skip the adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Travel {
    Route(RouteParameters),
    Direct { minutes: f64 },
}

impl Travel {
    pub fn direct(minutes: f64) -> Self {
        Self::Direct { minutes }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSite {
    pub offer: ProviderOffer,
    pub travel: Travel,
}

impl ProviderSite {
    pub fn new(offer: ProviderOffer, travel: Travel) -> Self {
        Self { offer, travel }
    }
}

/// Per-provider breakdown of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderContribution {
    /// Travel time fed to the decay weighter (adjusted when a route was given).
    pub travel_time: f64,
    pub adjusted: bool,
    pub decay_weight: f64,
    pub supply_ratio: f64,
    pub contribution: f64, // supply_ratio * decay_weight
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityResult {
    pub providers: Vec<ProviderContribution>,
    pub weekly_score: f64,
    pub annual_score: f64,
    pub classification: Classification,
}

impl AccessibilityResult {
    fn primary(&self) -> Option<&ProviderContribution> {
        self.providers.first()
    }

    pub fn adjusted_travel_time(&self) -> Option<f64> {
        self.primary().map(|p| p.travel_time)
    }

    pub fn decay_weight(&self) -> Option<f64> {
        self.primary().map(|p| p.decay_weight)
    }

    pub fn supply_ratio(&self) -> Option<f64> {
        self.primary().map(|p| p.supply_ratio)
    }
}

use crate::config::CalculatorDefaults;
use crate::error::{AccessError, AccessResult};
use crate::scenarios::{self, EXAMPLE_CLINICS};
use crate::scorer::{
    AccessibilityResult, Classification, EvaluationRequest, ProviderOffer, ProviderSite, Scorer,
    Travel,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Raw calculator fields exactly as typed by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculatorForm {
    pub travel_time: Option<String>,
    pub intersections: Option<String>,
    pub appointments: Option<String>,
    pub population: Option<String>,
}

/// Parses a decimal field, falling back when it is empty, unparseable or not finite.
pub fn parse_f64_or(field: &'static str, raw: Option<&str>, default: f64) -> f64 {
    let trimmed = raw.map(str::trim).unwrap_or("");
    if trimmed.is_empty() {
        return default;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            warn!("Field '{}' has unusable value '{}'; using default {}", field, trimmed, default);
            default
        }
    }
}

/// Parses a count field. Unparseable input falls back; a parsed negative
/// count is a caller error and is reported rather than replaced.
pub fn parse_count_or(field: &'static str, raw: Option<&str>, default: u32) -> AccessResult<u32> {
    let trimmed = raw.map(str::trim).unwrap_or("");
    if trimmed.is_empty() {
        return Ok(default);
    }
    match trimmed.parse::<i64>() {
        Ok(v) => u32::try_from(v).map_err(|_| {
            AccessError::invalid(field, v as f64, "count must lie in [0, u32::MAX]")
        }),
        Err(_) => {
            warn!("Field '{}' has unusable value '{}'; using default {}", field, trimmed, default);
            Ok(default)
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationView {
    pub tier: Classification,
    pub headline: String,
    pub advisory: String,
}

impl ClassificationView {
    pub fn new(scorer: &Scorer, tier: Classification) -> Self {
        Self {
            tier,
            headline: tier.headline().to_string(),
            advisory: scorer.thresholds().advisory(tier),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResult {
    pub inputs: CalculatorDefaults,
    pub alpha: f64,
    pub sigma: f64,
    pub adjusted_travel_time: f64,
    pub decay_weight: f64,
    pub supply_ratio: f64,
    pub weekly_score: f64,
    pub annual_score: f64,
    pub classification: ClassificationView,
}

/// Service: single-provider calculator.
pub fn calculate(
    scorer: &Scorer,
    form: &CalculatorForm,
    defaults: &CalculatorDefaults,
) -> AccessResult<CalculatorResult> {
    let inputs = CalculatorDefaults {
        travel_time: parse_f64_or("travel_time", form.travel_time.as_deref(), defaults.travel_time),
        intersection_density: parse_f64_or(
            "intersections",
            form.intersections.as_deref(),
            defaults.intersection_density,
        ),
        appointments: parse_count_or(
            "appointments",
            form.appointments.as_deref(),
            defaults.appointments,
        )?,
        population: parse_count_or("population", form.population.as_deref(), defaults.population)?,
    };

    let alpha = scorer.params().complexity_coefficient;
    let site = scenarios::calculator_site(&inputs, alpha);
    let result = scorer.evaluate_sites(&[site])?;
    let primary = result.providers[0];

    Ok(CalculatorResult {
        inputs,
        alpha,
        sigma: scorer.params().decay_sigma,
        adjusted_travel_time: primary.travel_time,
        decay_weight: primary.decay_weight,
        supply_ratio: primary.supply_ratio,
        weekly_score: result.weekly_score,
        annual_score: result.annual_score,
        classification: ClassificationView::new(scorer, result.classification),
    })
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClinicBreakdown {
    pub name: String,
    pub distance: f64,
    pub appointments: u32,
    pub decay_weight: f64,
    pub supply_ratio: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalkthroughResult {
    pub sigma: f64,
    pub population: u32,
    pub clinics: Vec<ClinicBreakdown>,
    pub weekly_score: f64,
    pub annual_score: f64,
    pub classification: ClassificationView,
}

/// Service: the two-clinic walkthrough at a chosen sigma.
pub fn walkthrough(scorer: &Scorer, sigma: f64) -> AccessResult<WalkthroughResult> {
    let request = EvaluationRequest::builder()
        .sites(scenarios::two_clinic_sites())
        .sigma(sigma)
        .build();
    let result = scorer.evaluate(&request)?;

    let clinics = EXAMPLE_CLINICS
        .iter()
        .zip(&result.providers)
        .map(|(c, p)| ClinicBreakdown {
            name: c.name.to_string(),
            distance: c.distance,
            appointments: c.appointments,
            decay_weight: p.decay_weight,
            supply_ratio: p.supply_ratio,
        })
        .collect();

    Ok(WalkthroughResult {
        sigma,
        population: scenarios::EXAMPLE_POPULATION,
        clinics,
        weekly_score: result.weekly_score,
        annual_score: result.annual_score,
        classification: ClassificationView::new(scorer, result.classification),
    })
}

/// Service: arbitrary catchment given as (minutes, weekly appointments, population) triples.
pub fn evaluate_catchment(
    scorer: &Scorer,
    providers: &[(f64, u32, u32)],
    sigma: f64,
) -> AccessResult<AccessibilityResult> {
    let sites = providers
        .iter()
        .map(|&(minutes, appts, pop)| {
            ProviderSite::new(ProviderOffer::new(appts, pop), Travel::direct(minutes))
        })
        .collect();
    scorer.evaluate(&EvaluationRequest::builder().sites(sites).sigma(sigma).build())
}

use crate::consts::*;
use crate::error::{AccessError, AccessResult};
use crate::scorer::ClassificationThresholds;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParams {
    /// Complexity coefficient (alpha) applied per intersection/minute
    #[arg(long, default_value_t = DEFAULT_COMPLEXITY_COEFFICIENT)]
    pub complexity_coefficient: f64,

    /// Upper bound accepted for the complexity coefficient
    #[arg(long, default_value_t = DEFAULT_MAX_COMPLEXITY_COEFFICIENT)]
    pub max_complexity_coefficient: f64,

    /// Gaussian decay scale in minutes
    #[arg(long, default_value_t = DEFAULT_DECAY_SIGMA)]
    pub decay_sigma: f64,

    /// Annual score at or above which access is adequate
    #[arg(long, default_value_t = DEFAULT_ADEQUATE_THRESHOLD)]
    pub adequate_threshold: f64,

    /// Annual score at or above which access is poor (below: desert)
    #[arg(long, default_value_t = DEFAULT_POOR_THRESHOLD)]
    pub poor_threshold: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            complexity_coefficient: DEFAULT_COMPLEXITY_COEFFICIENT,
            max_complexity_coefficient: DEFAULT_MAX_COMPLEXITY_COEFFICIENT,
            decay_sigma: DEFAULT_DECAY_SIGMA,
            adequate_threshold: DEFAULT_ADEQUATE_THRESHOLD,
            poor_threshold: DEFAULT_POOR_THRESHOLD,
        }
    }
}

impl ModelParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> AccessResult<Self> {
        let content = fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&content)?;
        Ok(params)
    }

    pub fn thresholds(&self) -> AccessResult<ClassificationThresholds> {
        ClassificationThresholds::new(self.adequate_threshold, self.poor_threshold)
    }

    pub fn validate(&self) -> AccessResult<()> {
        let max = self.max_complexity_coefficient;
        if !max.is_finite() || max < 0.0 {
            return Err(AccessError::invalid(
                "max_complexity_coefficient",
                max,
                "must be finite and >= 0",
            ));
        }
        if !(0.0..=max).contains(&self.complexity_coefficient) {
            return Err(AccessError::invalid(
                "complexity_coefficient",
                self.complexity_coefficient,
                "outside configured bounds",
            ));
        }
        if !self.decay_sigma.is_finite() || self.decay_sigma <= 0.0 {
            return Err(AccessError::invalid(
                "decay_sigma",
                self.decay_sigma,
                "must be finite and > 0",
            ));
        }
        self.thresholds()?;
        Ok(())
    }

    /// Copies only the values the user typed on the command line over `self`.
    pub fn merge_from_cli(&mut self, cli: &ModelParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }

        update_if_present!(complexity_coefficient, "complexity_coefficient");
        update_if_present!(max_complexity_coefficient, "max_complexity_coefficient");
        update_if_present!(decay_sigma, "decay_sigma");
        update_if_present!(adequate_threshold, "adequate_threshold");
        update_if_present!(poor_threshold, "poor_threshold");
    }
}

/// Fallbacks used by the calculator form when a field is empty or unparseable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculatorDefaults {
    pub travel_time: f64,
    pub intersection_density: f64,
    pub appointments: u32,
    pub population: u32,
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        Self {
            travel_time: DEFAULT_TRAVEL_TIME,
            intersection_density: DEFAULT_INTERSECTION_DENSITY,
            appointments: DEFAULT_APPOINTMENTS,
            population: DEFAULT_POPULATION,
        }
    }
}

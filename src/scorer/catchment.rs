use super::types::ProviderOffer;
use crate::consts::{DEFAULT_ADEQUATE_THRESHOLD, DEFAULT_POOR_THRESHOLD, WEEKS_PER_YEAR};
use crate::error::{AccessError, AccessResult};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Adequate,
    Poor,
    Desert,
}

impl Classification {
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Adequate => "ADEQUATE ACCESS",
            Self::Poor => "POOR ACCESS",
            Self::Desert => "GP DESERT",
        }
    }
}

/// Annual-score lower bounds (inclusive) for each tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationThresholds {
    pub adequate: f64,
    pub poor: f64,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            adequate: DEFAULT_ADEQUATE_THRESHOLD,
            poor: DEFAULT_POOR_THRESHOLD,
        }
    }
}

impl ClassificationThresholds {
    pub fn new(adequate: f64, poor: f64) -> AccessResult<Self> {
        if !poor.is_finite() || poor < 0.0 {
            return Err(AccessError::invalid("poor_threshold", poor, "must be finite and >= 0"));
        }
        if !adequate.is_finite() || adequate <= poor {
            return Err(AccessError::invalid(
                "adequate_threshold",
                adequate,
                "must be finite and above the poor threshold",
            ));
        }
        Ok(Self { adequate, poor })
    }

    pub fn classify(&self, annual_score: f64) -> Classification {
        if annual_score >= self.adequate {
            Classification::Adequate
        } else if annual_score >= self.poor {
            Classification::Poor
        } else {
            Classification::Desert
        }
    }

    pub fn advisory(&self, class: Classification) -> String {
        match class {
            Classification::Adequate => String::new(),
            Classification::Poor => {
                format!("Below adequate threshold of {}", threshold_label(self.adequate))
            }
            Classification::Desert => {
                format!("Critical shortage - less than {}", threshold_label(self.poor))
            }
        }
    }
}

// Whole numbers keep one decimal ("1.0"); anything else prints in full.
fn threshold_label(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatchmentScore {
    pub weekly_score: f64,
    pub annual_score: f64,
    pub classification: Classification,
}

#[inline]
pub fn supply_ratio(offer: &ProviderOffer) -> AccessResult<f64> {
    if offer.competing_population == 0 {
        return Err(AccessError::invalid(
            "competing_population",
            0.0,
            "must be > 0",
        ));
    }
    Ok(offer.appointment_capacity as f64 / offer.competing_population as f64)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CatchmentScorer {
    pub thresholds: ClassificationThresholds,
}

impl CatchmentScorer {
    pub fn new(thresholds: ClassificationThresholds) -> Self {
        Self { thresholds }
    }

    /// Sums `ratio * weight` over the reachable providers and annualizes it.
    /// No partial result is produced if any entry is invalid.
    pub fn score(&self, offers: &[(ProviderOffer, f64)]) -> AccessResult<CatchmentScore> {
        let mut weekly_score = 0.0;
        for (offer, weight) in offers {
            if !weight.is_finite() || !(0.0..=1.0).contains(weight) {
                return Err(AccessError::invalid("decay_weight", *weight, "must lie in [0, 1]"));
            }
            weekly_score += supply_ratio(offer)? * weight;
        }

        let annual_score = weekly_score * WEEKS_PER_YEAR;
        Ok(CatchmentScore {
            weekly_score,
            annual_score,
            classification: self.thresholds.classify(annual_score),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catchment_is_desert() {
        let s = CatchmentScorer::default().score(&[]).unwrap();
        assert_eq!(s.weekly_score, 0.0);
        assert_eq!(s.annual_score, 0.0);
        assert_eq!(s.classification, Classification::Desert);
    }

    #[test]
    fn test_zero_population_fails() {
        let offers = [(ProviderOffer::new(40, 0), 1.0)];
        let err = CatchmentScorer::default().score(&offers).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_single_provider() {
        // one appointment per person per week at half weight -> 26/year each
        let offers = [(ProviderOffer::new(52, 52), 0.5)];
        let s = CatchmentScorer::default().score(&offers).unwrap();
        assert!((s.weekly_score - 0.5).abs() < 1e-12);
        assert!((s.annual_score - 26.0).abs() < 1e-12);
        assert_eq!(s.classification, Classification::Adequate);
    }

    #[test]
    fn test_advisory_text() {
        let t = ClassificationThresholds::default();
        assert_eq!(t.advisory(Classification::Adequate), "");
        assert_eq!(
            t.advisory(Classification::Poor),
            "Below adequate threshold of 1.0"
        );
        assert_eq!(
            t.advisory(Classification::Desert),
            "Critical shortage - less than 0.5"
        );
    }

    #[test]
    fn test_advisory_uses_configured_thresholds() {
        let t = ClassificationThresholds::new(1.37, 0.25).unwrap();
        assert_eq!(
            t.advisory(Classification::Poor),
            "Below adequate threshold of 1.37"
        );
        assert_eq!(
            t.advisory(Classification::Desert),
            "Critical shortage - less than 0.25"
        );

        let whole = ClassificationThresholds::new(2.0, 1.0).unwrap();
        assert_eq!(
            whole.advisory(Classification::Poor),
            "Below adequate threshold of 2.0"
        );
        assert_eq!(
            whole.advisory(Classification::Desert),
            "Critical shortage - less than 1.0"
        );
    }

    #[test]
    fn test_threshold_validation() {
        assert!(ClassificationThresholds::new(1.0, 0.5).is_ok());
        assert!(ClassificationThresholds::new(0.5, 0.5).is_err());
        assert!(ClassificationThresholds::new(1.0, -0.1).is_err());
    }
}

use crate::config::CalculatorDefaults;
use crate::scorer::{ProviderOffer, ProviderSite, RouteParameters, Travel};
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Named sample routes shown on the complexity slide.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownRoute {
    Rural,
    Urban,
}

impl KnownRoute {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rural => "Rural Route",
            Self::Urban => "Urban Route",
        }
    }

    // (base minutes, intersections per minute)
    pub fn profile(&self) -> (f64, f64) {
        match self {
            Self::Rural => (20.0, 0.2),
            Self::Urban => (20.0, 1.5),
        }
    }

    pub fn to_named(&self) -> NamedRoute {
        let (base_travel_time, intersection_density) = self.profile();
        NamedRoute {
            name: self.label().to_string(),
            base_travel_time,
            intersection_density,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedRoute {
    pub name: String,
    pub base_travel_time: f64,
    pub intersection_density: f64,
}

pub fn get_all_routes() -> Vec<NamedRoute> {
    KnownRoute::iter().map(|r| r.to_named()).collect()
}

/// A clinic in the walkthrough: fixed distance and weekly appointments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Clinic {
    pub name: &'static str,
    pub distance: f64,
    pub appointments: u32,
}

pub const EXAMPLE_POPULATION: u32 = 2988;

pub const EXAMPLE_CLINICS: [Clinic; 2] = [
    Clinic {
        name: "Clinic A",
        distance: 15.0,
        appointments: 40,
    },
    Clinic {
        name: "Clinic B",
        distance: 45.0,
        appointments: 25,
    },
];

/// The two-clinic walkthrough. Both clinics compete for the same population.
pub fn two_clinic_sites() -> Vec<ProviderSite> {
    EXAMPLE_CLINICS
        .iter()
        .map(|c| {
            ProviderSite::new(
                ProviderOffer::new(c.appointments, EXAMPLE_POPULATION),
                Travel::direct(c.distance),
            )
        })
        .collect()
}

/// The calculator's starting state: one provider over a complex route.
pub fn calculator_site(defaults: &CalculatorDefaults, alpha: f64) -> ProviderSite {
    ProviderSite::new(
        ProviderOffer::new(defaults.appointments, defaults.population),
        Travel::Route(RouteParameters::new(
            defaults.travel_time,
            defaults.intersection_density,
            alpha,
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_route_lookup() {
        assert_eq!(KnownRoute::from_str("urban").unwrap(), KnownRoute::Urban);
        assert_eq!(get_all_routes().len(), 2);
    }

    #[test]
    fn test_two_clinic_sites() {
        let sites = two_clinic_sites();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[1].offer.appointment_capacity, 25);
        assert_eq!(sites[1].travel, Travel::direct(45.0));
    }
}

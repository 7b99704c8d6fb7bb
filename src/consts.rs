/// Appointment capacities are weekly figures; scores are reported per year.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Default complexity coefficient (alpha).
pub const DEFAULT_COMPLEXITY_COEFFICIENT: f64 = 0.15;

/// Upper bound accepted for alpha unless configured otherwise.
pub const DEFAULT_MAX_COMPLEXITY_COEFFICIENT: f64 = 1.0;

/// Default Gaussian decay scale in minutes.
pub const DEFAULT_DECAY_SIGMA: f64 = 60.0;

/// Annual appointments per person at or above which access is adequate.
pub const DEFAULT_ADEQUATE_THRESHOLD: f64 = 1.0;

/// Annual appointments per person at or above which access is poor rather than a desert.
pub const DEFAULT_POOR_THRESHOLD: f64 = 0.5;

// Calculator field fallbacks
pub const DEFAULT_TRAVEL_TIME: f64 = 15.0;
pub const DEFAULT_INTERSECTION_DENSITY: f64 = 1.67;
pub const DEFAULT_APPOINTMENTS: u32 = 40;
pub const DEFAULT_POPULATION: u32 = 2988;

/// Decay chart sampling range (minutes).
pub const DEFAULT_CURVE_MAX_DISTANCE: f64 = 120.0;
pub const DEFAULT_CURVE_STEP: f64 = 2.0;

/// Upper bound on the number of samples in one decay curve.
pub const MAX_CURVE_POINTS: usize = 100_000;

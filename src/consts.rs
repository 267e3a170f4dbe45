// Units: distances in AU, times in years, masses in solar masses scaled so
// that G = 1. The planetary velocity data is tabulated in AU/day.

use std::f64::consts::PI;

pub const SOLAR_MASS: f64 = 4.0 * PI * PI;
pub const DAYS_PER_YEAR: f64 = 365.24;

pub const BODY_COUNT: usize = 5;
pub const PAIR_COUNT: usize = BODY_COUNT * (BODY_COUNT - 1) / 2;

/// Step length the driver uses.
pub const TIME_STEP: f64 = 0.01;

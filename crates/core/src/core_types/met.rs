//! Hourly meteorological records consumed by the dispersion engine

use crate::core_types::stability::StabilityClass;
use serde::{Deserialize, Serialize};

/// Height at which met-record wind speeds are measured (m)
pub const WIND_REFERENCE_HEIGHT: f64 = 10.0;

/// One simulated hour of meteorology
///
/// `hours` is an averaging divisor rather than a count: each record's
/// contribution is divided by it before accumulation, so a sequence of `n`
/// records each weighted `n` yields the `n`-hour mean field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetHour {
    /// Averaging weight (hours)
    pub hours: f64,
    /// Wind speed at [`WIND_REFERENCE_HEIGHT`] (m/s)
    pub wind_speed: f64,
    /// Direction the wind blows from, radians clockwise from north
    pub wind_direction: f64,
    /// Pasquill-Gifford stability class
    pub stability: StabilityClass,
}

impl MetHour {
    #[must_use]
    pub fn new(hours: f64, wind_speed: f64, wind_direction: f64, stability: StabilityClass) -> Self {
        Self {
            hours,
            wind_speed,
            wind_direction,
            stability,
        }
    }

    /// Build a record from a wind direction given in degrees
    #[must_use]
    pub fn from_degrees(
        hours: f64,
        wind_speed: f64,
        wind_direction_deg: f64,
        stability: StabilityClass,
    ) -> Self {
        Self::new(
            hours,
            wind_speed,
            wind_direction_deg * std::f64::consts::PI / 180.0,
            stability,
        )
    }

    /// Wind direction in degrees
    #[must_use]
    pub fn wind_direction_degrees(&self) -> f64 {
        self.wind_direction.to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_degrees_converts_to_radians() {
        let hour = MetHour::from_degrees(1.0, 5.0, 180.0, StabilityClass::C);
        assert_relative_eq!(hour.wind_direction, std::f64::consts::PI, epsilon = 1e-12);
        assert_relative_eq!(hour.wind_direction_degrees(), 180.0, epsilon = 1e-9);
    }
}

//! Synthetic meteorology for long-run averages
//!
//! Draws uniformly distributed hours for "what does a year of mixed weather
//! look like" exploration. The random source is always supplied by the
//! caller, so a seeded RNG reproduces a run exactly.

use crate::core_types::met::MetHour;
use crate::core_types::stability::StabilityClass;
use crate::simulation::config::SimulationConfig;
use rand::Rng;
use tracing::debug;

/// Fastest random wind drawn (m/s at 10 m); draws are whole numbers from 1
const MAX_RANDOM_WIND_SPEED: u32 = 50;

/// Builds met sequences from a configured "user" hour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetGenerator {
    /// Single-hour wind speed at 10 m (m/s)
    pub wind_speed: f64,
    /// Single-hour wind direction (degrees, blowing from)
    pub wind_direction: f64,
    /// Single-hour stability class
    pub stability: StabilityClass,
}

impl MetGenerator {
    /// Generator seeded with the config's single-hour wind
    #[must_use]
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            wind_speed: config.wind_speed,
            wind_direction: config.wind_direction,
            stability: config.stability,
        }
    }

    /// Generate `hours` met records
    ///
    /// For `hours <= 1` this is the configured hour with weight 1. Otherwise
    /// every record gets a random direction (whole degrees 0-359), a random
    /// speed (whole m/s 1-50) and a random class, each weighted `hours` so
    /// the accumulated field is the mean over the period.
    ///
    /// # Example
    /// ```
    /// use plume_sim_core::weather::MetGenerator;
    /// use plume_sim_core::SimulationConfig;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let generator = MetGenerator::from_config(&SimulationConfig::default());
    /// let met = generator.generate(24, &mut StdRng::seed_from_u64(7));
    /// assert_eq!(met.len(), 24);
    /// assert!(met.iter().all(|h| h.hours == 24.0));
    /// ```
    pub fn generate<R: Rng + ?Sized>(&self, hours: u32, rng: &mut R) -> Vec<MetHour> {
        if hours <= 1 {
            return vec![MetHour::from_degrees(
                1.0,
                self.wind_speed,
                self.wind_direction,
                self.stability,
            )];
        }

        let weight = f64::from(hours);
        let met: Vec<MetHour> = (0..hours)
            .map(|_| {
                let direction = rng.random_range(0..360u32);
                let speed = rng.random_range(0..MAX_RANDOM_WIND_SPEED) + 1;
                let stability = StabilityClass::ALL[rng.random_range(0..StabilityClass::ALL.len())];
                MetHour::from_degrees(weight, f64::from(speed), f64::from(direction), stability)
            })
            .collect();

        debug!("Generated {} random met hours", met.len());
        met
    }
}

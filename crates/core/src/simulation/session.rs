//! Interactive dispersion session
//!
//! Owns a [`SimulationConfig`] and the output grids, and reruns the model
//! whenever a parameter changes. Grids are reused between runs and cleared
//! first, so every result reflects only the latest parameters.

use crate::core_types::source::Source;
use crate::core_types::stability::{Roughness, StabilityClass};
use crate::error::SimulationError;
use crate::simulation::config::{GridQuality, SimulationConfig};
use crate::simulation::engine::{disperse, DispersionOutput};
use crate::weather::MetGenerator;
use rand::Rng;
use tracing::info;

/// A configuration plus its most recent result
#[derive(Debug, Clone)]
pub struct DispersionSession {
    config: SimulationConfig,
    output: DispersionOutput,
}

impl DispersionSession {
    /// Create a session and run the configured single hour
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidGrid`] if either extent is invalid.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        info!(
            "Creating dispersion session: quality {:?}, roughness {}",
            config.quality, config.roughness
        );
        let output = DispersionOutput::for_config(&config);
        let mut session = Self { config, output };
        session.run_single_hour()?;
        Ok(session)
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Latest plan and slice grids
    #[must_use]
    pub fn output(&self) -> &DispersionOutput {
        &self.output
    }

    /// Replace the stack parameters and rerun
    ///
    /// # Errors
    /// Propagates engine errors (none for a validated session).
    pub fn set_source(&mut self, source: Source) -> Result<(), SimulationError> {
        self.config.source = source;
        self.run_single_hour()
    }

    /// Change the single-hour wind and rerun
    ///
    /// # Errors
    /// Propagates engine errors (none for a validated session).
    pub fn set_wind(&mut self, speed: f64, direction_deg: f64) -> Result<(), SimulationError> {
        self.config.wind_speed = speed;
        self.config.wind_direction = direction_deg;
        self.run_single_hour()
    }

    /// Change the single-hour stability class and rerun
    ///
    /// # Errors
    /// Propagates engine errors (none for a validated session).
    pub fn set_stability(&mut self, stability: StabilityClass) -> Result<(), SimulationError> {
        self.config.stability = stability;
        self.run_single_hour()
    }

    /// Change the wind-profile regime and rerun
    ///
    /// # Errors
    /// Propagates engine errors (none for a validated session).
    pub fn set_roughness(&mut self, roughness: Roughness) -> Result<(), SimulationError> {
        self.config.roughness = roughness;
        self.run_single_hour()
    }

    /// Switch grid preset, reallocate both grids and rerun
    ///
    /// # Errors
    /// Propagates engine errors (none for a validated session).
    pub fn set_quality(&mut self, quality: GridQuality) -> Result<(), SimulationError> {
        self.config = self.config.clone().with_quality(quality);
        self.output = DispersionOutput::for_config(&self.config);
        self.run_single_hour()
    }

    /// Clear the grids and average over `hours` generated met records
    ///
    /// `hours <= 1` reruns the configured single hour.
    ///
    /// # Errors
    /// Propagates engine errors (none for a validated session).
    pub fn simulate<R: Rng + ?Sized>(
        &mut self,
        hours: u32,
        rng: &mut R,
    ) -> Result<(), SimulationError> {
        let met = MetGenerator::from_config(&self.config).generate(hours, rng);
        self.output.clear();
        disperse(&self.config, &met, &mut self.output)
    }

    fn run_single_hour(&mut self) -> Result<(), SimulationError> {
        let hour = self.config.single_hour();
        self.output.clear();
        disperse(&self.config, &[hour], &mut self.output)
    }
}

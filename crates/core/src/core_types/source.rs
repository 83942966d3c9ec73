//! Elevated point source (stack) parameters

use crate::core_types::units::Celsius;
use crate::core_types::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// Stack geometry and emission parameters for a single point source
///
/// Held fixed for the duration of one dispersion run; edits between runs
/// trigger a fresh run (see [`crate::simulation::DispersionSession`]).
///
/// # Example
/// ```
/// use plume_sim_core::{Source, Vec2};
/// use plume_sim_core::core_types::Celsius;
///
/// let stack = Source::default()
///     .with_position(Vec2::new(-2.0, -3.0))
///     .with_exit_temperature(Celsius::new(100.0));
/// assert_eq!(stack.elevation, 50.0);
/// assert_eq!(*stack.exit_temperature, 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Stack location in grid coordinates (m)
    pub position: Vec2,
    /// Physical stack height (m)
    pub elevation: f64,
    /// Stack tip inner diameter (m)
    pub diameter: f64,
    /// Gas exit velocity at the stack tip (m/s)
    pub velocity: f64,
    /// Gas exit temperature; may be below ambient
    pub exit_temperature: Celsius,
    /// Pollutant mass emission rate (g/s)
    pub emission_rate: f64,
}

impl Default for Source {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            elevation: 50.0,
            diameter: 0.5,
            velocity: 10.0,
            exit_temperature: Celsius::new(60.0),
            emission_rate: 1.0,
        }
    }
}

impl Source {
    /// Create a source from its full parameter set
    #[must_use]
    pub fn new(
        position: Vec2,
        elevation: f64,
        diameter: f64,
        velocity: f64,
        exit_temperature: Celsius,
        emission_rate: f64,
    ) -> Self {
        Self {
            position,
            elevation,
            diameter,
            velocity,
            exit_temperature,
            emission_rate,
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn with_diameter(mut self, diameter: f64) -> Self {
        self.diameter = diameter;
        self
    }

    pub fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_exit_temperature(mut self, exit_temperature: Celsius) -> Self {
        self.exit_temperature = exit_temperature;
        self
    }

    pub fn with_emission_rate(mut self, emission_rate: f64) -> Self {
        self.emission_rate = emission_rate;
        self
    }
}

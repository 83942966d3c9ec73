//! Running the dispersion model
//!
//! - [`config`]: grid presets and the explicit run configuration
//! - [`engine`]: accumulation of met hours into the plan and slice grids
//! - [`session`]: a configuration that reruns itself on every edit

pub mod config;
pub mod engine;
pub mod session;

pub use config::{GridQuality, SimulationConfig};
pub use engine::{disperse, run_simulation, DispersionOutput, HourlyPlume, LOW_WIND_CUTOFF};
pub use session::DispersionSession;

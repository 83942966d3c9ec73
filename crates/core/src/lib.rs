//! Plume Dispersion Core Library
//!
//! A Gaussian plume model for a single continuous point source. Given stack
//! parameters and a sequence of hourly meteorology it produces two
//! concentration grids: a ground-level plan view and a vertical slice along
//! the plume centreline.
//!
//! ## Model
//!
//! - Pasquill-Gifford dispersion coefficients (stability classes A-F)
//! - Power-law wind profile with urban and rural exponents
//! - Briggs plume rise (buoyancy or momentum dominated)
//! - Gaussian kernel with total ground reflection
//! - Hour-weighted averaging across met records

// Core types and utilities
pub mod core_types;
pub mod error;

pub mod grid;
pub mod physics;
pub mod simulation;
pub mod weather;

// Re-export core types
pub use core_types::{MetHour, Roughness, Source, StabilityClass, Vec2};
pub use error::SimulationError;

// Re-export grid and simulation types
pub use grid::{ConcentrationField, GridExtent};
pub use simulation::{
    disperse, run_simulation, DispersionOutput, DispersionSession, GridQuality, SimulationConfig,
};

//! Core types and utilities

pub mod met;
pub mod source;
pub mod stability;
pub mod units;
pub mod vec2;

pub use met::{MetHour, WIND_REFERENCE_HEIGHT};
pub use source::Source;
pub use stability::{Roughness, StabilityClass};
pub use units::{Celsius, Kelvin};
pub use vec2::Vec2;

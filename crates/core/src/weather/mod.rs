//! Meteorological input generation

pub mod met_generator;

pub use met_generator::MetGenerator;

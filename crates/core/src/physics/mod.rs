//! Physics of a continuous point-source plume
//!
//! # Scientific References
//!
//! - Pasquill, F. (1961). "The estimation of the dispersion of windborne material."
//!   Meteorological Magazine, 90, 33-49.
//! - Turner, D.B. (1970). "Workbook of Atmospheric Dispersion Estimates."
//!   US EPA, AP-26.
//! - Briggs, G.A. (1975). "Plume rise predictions." Lectures on Air Pollution
//!   and Environmental Impact Analyses, AMS, 59-111.

pub mod dispersion_coefficients;
pub mod gaussian_plume;
pub mod plume_frame;
pub mod plume_rise;
pub mod wind_profile;

pub use dispersion_coefficients::{sigma_y, sigma_z};
pub use gaussian_plume::concentration;
pub use plume_frame::{to_plume_frame, PlumeCoordinates, WindRotation};
pub use plume_rise::{calculate_plume_rise, PlumeRegime, PlumeRise};
pub use wind_profile::{extrapolate, profile_exponent};

//! Gaussian plume concentration with ground reflection
//!
//! ```text
//! C = Q / (2π u σy σz) × [exp(−(z − H)² / 2σz²) + exp(−(z + H)² / 2σz²)] × exp(−y² / 2σy²)
//! ```
//!
//! The second exponential is the image source below ground that makes the
//! surface a perfect reflector.

use crate::core_types::stability::StabilityClass;
use crate::physics::dispersion_coefficients::{sigma_y, sigma_z};
use std::f64::consts::PI;

/// Concentration (g/m³) at a receptor in plume coordinates
///
/// # Arguments
/// * `x_km` - Distance downwind along the plume centreline (km)
/// * `y` - Crosswind offset from the centreline (m)
/// * `z` - Receptor height (m)
/// * `wind_speed` - Wind speed at the stack tip (m/s)
/// * `emission_rate` - Pollutant mass emission rate (g/s)
/// * `effective_height` - Stack height plus plume rise (m)
/// * `class` - Stability class selecting σy and σz
///
/// # Returns
/// Exactly `0.0` for receptors at or upwind of the source, and `0.0` whenever
/// the formula is not finite (undefined spread, zero wind). Never NaN.
#[must_use]
pub fn concentration(
    x_km: f64,
    y: f64,
    z: f64,
    wind_speed: f64,
    emission_rate: f64,
    effective_height: f64,
    class: StabilityClass,
) -> f64 {
    if x_km <= 0.0 {
        return 0.0;
    }

    let sz = sigma_z(class, x_km);
    let sy = sigma_y(class, x_km);

    let sz2 = 2.0 * sz * sz;
    let sy2 = 2.0 * sy * sy;

    let h = effective_height;
    let c1 = emission_rate / (2.0 * PI * wind_speed * sy * sz);
    let c2 = (-(z - h) * (z - h) / sz2).exp();
    let c3 = (-(z + h) * (z + h) / sz2).exp();
    let c4 = (-y * y / sy2).exp();

    let conc = c1 * (c2 + c3) * c4;
    if conc.is_finite() {
        conc
    } else {
        0.0
    }
}

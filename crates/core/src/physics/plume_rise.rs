//! Briggs Plume Rise Model
//!
//! Computes the final rise of a stack plume above the stack tip and the
//! downwind distance at which that rise is reached.
//!
//! # Scientific References
//!
//! - Briggs, G.A. (1969). "Plume Rise", USAEC Critical Review Series, TID-25075
//! - Briggs, G.A. (1975). "Plume rise predictions", in Lectures on Air Pollution
//!   and Environmental Impact Analyses, AMS, 59-111
//! - U.S. EPA (1995). ISC3 user's guide Vol. II, Section 1.1.4
//!
//! # Model Overview
//!
//! ```text
//! Fb = g × vs × ds² × (Ts − Ta) / (4 Ts)     buoyancy flux (m⁴/s³)
//! Fm = vs² × ds² × Ta / (4 Ts)               momentum flux (m⁴/s²)
//! ```
//!
//! A crossover temperature excess ΔT decides whether buoyancy or momentum
//! dominates. Stable air (E, F) uses the stability parameter
//! `s = g × η / Ta`; unstable and neutral air (A-D) splits again at
//! `Fb = 55`.
//!
//! Nothing here guards against a zero wind speed: the resulting infinities
//! propagate and are masked by the concentration kernel.

use crate::core_types::stability::StabilityClass;
use crate::core_types::units::Kelvin;

/// Gravitational acceleration used by the Briggs equations (m/s²)
pub const GRAVITY: f64 = 9.80616;

/// Ambient air temperature assumed by the engine (20°C)
pub const AMBIENT_TEMPERATURE: Kelvin = Kelvin::new(293.15);

/// Buoyancy flux separating the low- and high-flux unstable formulas (m⁴/s³)
const BUOYANCY_FLUX_SPLIT: f64 = 55.0;

// Decimal fractions as used in the published fits
const ONE_THIRD: f64 = 0.333333333333;
const TWO_THIRDS: f64 = 0.666666666667;

/// Which term controls the rise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlumeRegime {
    /// Temperature excess exceeds the crossover value
    Buoyant,
    /// Jet momentum dominates; rise is complete at the stack
    Momentum,
}

/// Result of the plume rise calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlumeRise {
    /// Final plume rise above the stack tip (m)
    pub rise: f64,
    /// Downwind distance to final rise (m)
    pub distance_to_final_rise: f64,
    /// Governing regime
    pub regime: PlumeRegime,
}

impl PlumeRise {
    fn buoyant(rise: f64, distance_to_final_rise: f64) -> Self {
        Self {
            rise,
            distance_to_final_rise,
            regime: PlumeRegime::Buoyant,
        }
    }

    fn momentum(rise: f64) -> Self {
        Self {
            rise,
            distance_to_final_rise: 0.0,
            regime: PlumeRegime::Momentum,
        }
    }
}

/// Stable-air temperature gradient proxy η (K/m) for classes E and F
fn stable_eta(class: StabilityClass) -> f64 {
    if class == StabilityClass::E {
        0.020
    } else {
        0.035
    }
}

/// Calculate Briggs plume rise
///
/// # Arguments
/// * `wind_speed` - Wind speed at the stack tip (m/s)
/// * `exit_velocity` - Stack gas exit velocity (m/s)
/// * `diameter` - Stack tip diameter (m)
/// * `stack_temperature` - Stack gas exit temperature
/// * `ambient_temperature` - Ambient air temperature
/// * `class` - Pasquill-Gifford stability class
///
/// # Example
/// ```
/// use plume_sim_core::physics::plume_rise::calculate_plume_rise;
/// use plume_sim_core::core_types::Kelvin;
/// use plume_sim_core::StabilityClass;
///
/// let pr = calculate_plume_rise(6.0, 20.0, 5.0, Kelvin::new(400.0), Kelvin::new(280.0), StabilityClass::D);
/// assert!((pr.rise - 223.352113600373).abs() < 1e-8);
/// assert!((pr.distance_to_final_rise - 1264.03488113008).abs() < 1e-8);
/// ```
#[must_use]
pub fn calculate_plume_rise(
    wind_speed: f64,
    exit_velocity: f64,
    diameter: f64,
    stack_temperature: Kelvin,
    ambient_temperature: Kelvin,
    class: StabilityClass,
) -> PlumeRise {
    let us = wind_speed;
    let vs = exit_velocity;
    let ds = diameter;
    let ts = *stack_temperature;
    let ta = *ambient_temperature;
    let excess = stack_temperature - ambient_temperature;

    let fb = GRAVITY * vs * ds * ds * excess / (4.0 * ts);
    let fm = vs * vs * ds * ds * ta / (4.0 * ts);

    // Momentum-only rise, shared by every momentum-dominated branch
    let jet_rise = 3.0 * ds * vs / us;

    if class.is_stable() {
        let s = GRAVITY * stable_eta(class) / ta;
        let crossover = 0.019582 * ts * vs * s.sqrt();
        if excess >= crossover {
            PlumeRise::buoyant(
                2.6 * (fb / (us * s)).powf(ONE_THIRD),
                2.0715 * us / s.sqrt(),
            )
        } else {
            let stable_rise = 1.5 * (fm / (us * s.sqrt())).powf(ONE_THIRD);
            PlumeRise::momentum(jet_rise.min(stable_rise))
        }
    } else if fb < BUOYANCY_FLUX_SPLIT {
        let crossover = 0.0297 * ts * vs.powf(ONE_THIRD) / ds.powf(TWO_THIRDS);
        if excess >= crossover {
            PlumeRise::buoyant(21.425 * fb.powf(0.75) / us, 49.0 * fb.powf(0.625))
        } else {
            PlumeRise::momentum(jet_rise)
        }
    } else {
        let crossover = 0.00575 * ts * vs.powf(TWO_THIRDS) / ds.powf(ONE_THIRD);
        if excess >= crossover {
            PlumeRise::buoyant(38.71 * fb.powf(0.6) / us, 119.0 * fb.powf(0.4))
        } else {
            PlumeRise::momentum(jet_rise)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn kelvin(v: f64) -> Kelvin {
        Kelvin::new(v)
    }

    #[test]
    fn test_neutral_high_flux_reference() {
        let pr = calculate_plume_rise(6.0, 20.0, 5.0, kelvin(400.0), kelvin(280.0), StabilityClass::D);
        assert_eq!(pr.regime, PlumeRegime::Buoyant);
        assert_relative_eq!(pr.rise, 223.352113600373, max_relative = 1e-8);
        assert_relative_eq!(pr.distance_to_final_rise, 1264.03488113008, max_relative = 1e-8);
    }

    #[test]
    fn test_unstable_low_flux_buoyant() {
        // Fb = g·10·0.25·40/(4·333.15) ≈ 0.736 < 55
        let ts = kelvin(333.15);
        let pr = calculate_plume_rise(5.0, 10.0, 0.5, ts, AMBIENT_TEMPERATURE, StabilityClass::C);
        let fb = GRAVITY * 10.0 * 0.25 * 40.0 / (4.0 * 333.15);
        assert_eq!(pr.regime, PlumeRegime::Buoyant);
        assert_relative_eq!(pr.rise, 21.425 * fb.powf(0.75) / 5.0, max_relative = 1e-12);
        assert_relative_eq!(pr.distance_to_final_rise, 49.0 * fb.powf(0.625), max_relative = 1e-12);
    }

    #[test]
    fn test_cold_plume_is_momentum_dominated() {
        // Exit temperature below ambient: negative buoyancy flux, jet rise only
        let ts = kelvin(280.0);
        let pr = calculate_plume_rise(4.0, 15.0, 2.0, ts, AMBIENT_TEMPERATURE, StabilityClass::B);
        assert_eq!(pr.regime, PlumeRegime::Momentum);
        assert_eq!(pr.distance_to_final_rise, 0.0);
        assert_relative_eq!(pr.rise, 3.0 * 2.0 * 15.0 / 4.0, max_relative = 1e-12);
    }

    #[test]
    fn test_stable_buoyant_branch() {
        let ta = AMBIENT_TEMPERATURE;
        let pr = calculate_plume_rise(3.0, 10.0, 2.0, kelvin(450.0), ta, StabilityClass::F);
        let s = GRAVITY * 0.035 / *ta;
        assert_eq!(pr.regime, PlumeRegime::Buoyant);
        assert_relative_eq!(pr.distance_to_final_rise, 2.0715 * 3.0 / s.sqrt(), max_relative = 1e-12);
        let fb = GRAVITY * 10.0 * 4.0 * (450.0 - *ta) / (4.0 * 450.0);
        assert_relative_eq!(pr.rise, 2.6 * (fb / (3.0 * s)).powf(ONE_THIRD), max_relative = 1e-12);
    }

    #[test]
    fn test_stable_momentum_takes_smaller_rise() {
        let ta = AMBIENT_TEMPERATURE;
        let pr = calculate_plume_rise(2.0, 60.0, 1.0, kelvin(300.0), ta, StabilityClass::E);
        assert_eq!(pr.regime, PlumeRegime::Momentum);
        assert_eq!(pr.distance_to_final_rise, 0.0);
        let s = GRAVITY * 0.020 / *ta;
        let fm = 60.0 * 60.0 * 1.0 * *ta / (4.0 * 300.0);
        let stable_rise = 1.5 * (fm / (2.0 * s.sqrt())).powf(ONE_THIRD);
        assert_relative_eq!(pr.rise, stable_rise, max_relative = 1e-12);
        // jet rise 3·ds·vs/us = 90 m is the looser bound here
        assert!(pr.rise < 90.0, "stable bound should bind: {}", pr.rise);
    }

    #[test]
    fn test_zero_wind_is_not_finite() {
        let pr = calculate_plume_rise(0.0, 10.0, 0.5, kelvin(373.15), AMBIENT_TEMPERATURE, StabilityClass::A);
        assert!(!pr.rise.is_finite());
    }
}

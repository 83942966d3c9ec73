//! Power-law wind profile
//!
//! Extrapolates a measured wind speed to another height:
//!
//! ```text
//! u(z) = u_ref × (z / z_ref)^p
//! ```
//!
//! The exponent `p` depends on surface roughness and stability class
//! (U.S. EPA ISC3 user's guide, Vol. II, Table 1-4).

use crate::core_types::stability::{Roughness, StabilityClass};

/// Wind profile exponent `p` for a roughness regime and stability class
#[must_use]
pub const fn profile_exponent(roughness: Roughness, class: StabilityClass) -> f64 {
    match roughness {
        Roughness::Urban => match class {
            StabilityClass::A | StabilityClass::B => 0.15,
            StabilityClass::C => 0.20,
            StabilityClass::D => 0.25,
            StabilityClass::E | StabilityClass::F => 0.30,
        },
        Roughness::Rural => match class {
            StabilityClass::A | StabilityClass::B => 0.07,
            StabilityClass::C => 0.10,
            StabilityClass::D => 0.15,
            StabilityClass::E => 0.35,
            StabilityClass::F => 0.55,
        },
    }
}

/// Wind speed (m/s) at `height` given `speed_at_ref` measured at `ref_height`
///
/// No bounds checking: non-positive heights give NaN or infinities.
///
/// # Example
/// ```
/// use plume_sim_core::physics::wind_profile::extrapolate;
/// use plume_sim_core::{Roughness, StabilityClass};
///
/// let u = extrapolate(3.5, 100.0, 10.0, StabilityClass::D, Roughness::Rural);
/// assert!((u - 4.94388140618).abs() < 1e-8);
/// ```
#[must_use]
pub fn extrapolate(
    speed_at_ref: f64,
    height: f64,
    ref_height: f64,
    class: StabilityClass,
    roughness: Roughness,
) -> f64 {
    let p = profile_exponent(roughness, class);
    speed_at_ref * (height / ref_height).powf(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_extrapolations() {
        assert_abs_diff_eq!(
            extrapolate(3.5, 100.0, 10.0, StabilityClass::D, Roughness::Rural),
            4.94388140618,
            epsilon = 1e-8
        );
        assert_abs_diff_eq!(
            extrapolate(10.0, 50.0, 45.0, StabilityClass::A, Roughness::Urban),
            10.159296222811,
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_same_height_is_identity() {
        for class in StabilityClass::ALL {
            for roughness in [Roughness::Urban, Roughness::Rural] {
                assert_abs_diff_eq!(
                    extrapolate(7.0, 10.0, 10.0, class, roughness),
                    7.0,
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_stable_rural_air_has_strongest_shear() {
        let exponents: Vec<f64> = StabilityClass::ALL
            .into_iter()
            .map(|c| profile_exponent(Roughness::Rural, c))
            .collect();
        assert!(exponents.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(profile_exponent(Roughness::Rural, StabilityClass::F), 0.55);
    }

    #[test]
    fn test_non_positive_height_is_not_finite() {
        let u = extrapolate(5.0, -10.0, 10.0, StabilityClass::C, Roughness::Urban);
        assert!(!u.is_finite());
    }
}

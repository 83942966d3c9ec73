//! Pasquill-Gifford Plume Dispersion Coefficients
//!
//! Horizontal (σy) and vertical (σz) standard deviations of a Gaussian plume
//! as functions of downwind distance, one curve per stability class.
//!
//! # Scientific References
//!
//! - Pasquill, F. (1961). "The estimation of the dispersion of windborne material"
//!   Meteorological Magazine, 90, 33-49
//! - Gifford, F.A. (1961). "Use of routine meteorological observations for estimating
//!   atmospheric dispersion", Nuclear Safety, 2(4), 47-51
//! - U.S. EPA (1995). "User's Guide for the Industrial Source Complex (ISC3)
//!   Dispersion Models", Vol. II, Table 1-1 and 1-2 (curve fits used here)
//!
//! # Model Overview
//!
//! ```text
//! σy = 465.11628 × x × tan(0.017453293 × (c − d × ln x))
//! σz = a × x^b            (a, b piecewise in x)
//! ```
//!
//! with `x` in kilometres and σ in metres. Both curves are undefined for
//! `x <= 0`; they return NaN there rather than panicking, and the plume kernel
//! turns any non-finite result into a zero contribution.

use crate::core_types::stability::StabilityClass;

/// Vertical spread ceiling for unstable classes, standing in for the mixing layer (m)
pub const SIGMA_Z_CAP: f64 = 5000.0;

/// `σy` curve constants `(c, d)` per class
const fn sigma_y_constants(class: StabilityClass) -> (f64, f64) {
    match class {
        StabilityClass::A => (24.1670, 2.5334),
        StabilityClass::B => (18.3330, 1.8096),
        StabilityClass::C => (12.5000, 1.0857),
        StabilityClass::D => (8.3330, 0.72382),
        StabilityClass::E => (6.2500, 0.54287),
        StabilityClass::F => (4.1667, 0.36191),
    }
}

/// One distance band of the σz fit: applies while `x <= upper_km`
struct SigmaZBand {
    upper_km: f64,
    a: f64,
    b: f64,
}

const fn band(upper_km: f64, a: f64, b: f64) -> SigmaZBand {
    SigmaZBand { upper_km, a, b }
}

// Class A beyond 3.11 km is pinned at the cap, not extrapolated.
const SIGMA_Z_A: &[SigmaZBand] = &[
    band(0.10, 122.800, 0.94470),
    band(0.15, 158.080, 1.05420),
    band(0.20, 170.220, 1.09320),
    band(0.25, 179.520, 1.12620),
    band(0.30, 217.410, 1.26440),
    band(0.40, 258.890, 1.40940),
    band(0.50, 346.750, 1.72830),
    band(3.11, 453.850, 2.11660),
];

const SIGMA_Z_B: &[SigmaZBand] = &[
    band(0.20, 90.673, 0.93198),
    band(0.40, 98.483, 0.98332),
    band(f64::INFINITY, 109.300, 1.09710),
];

const SIGMA_Z_C: &[SigmaZBand] = &[band(f64::INFINITY, 61.141, 0.91465)];

const SIGMA_Z_D: &[SigmaZBand] = &[
    band(0.30, 34.459, 0.86974),
    band(1.00, 32.093, 0.81066),
    band(3.00, 32.093, 0.64403),
    band(10.00, 33.504, 0.60486),
    band(30.00, 36.650, 0.56589),
    band(f64::INFINITY, 44.053, 0.51179),
];

const SIGMA_Z_E: &[SigmaZBand] = &[
    band(0.10, 24.260, 0.83660),
    band(0.30, 23.331, 0.81956),
    band(1.00, 21.628, 0.75660),
    band(2.00, 21.628, 0.63077),
    band(4.00, 22.534, 0.57154),
    band(10.00, 24.703, 0.50527),
    band(20.00, 26.970, 0.46713),
    band(40.00, 35.420, 0.37615),
    band(f64::INFINITY, 47.618, 0.29592),
];

const SIGMA_Z_F: &[SigmaZBand] = &[
    band(0.20, 15.209, 0.81558),
    band(0.70, 14.457, 0.78407),
    band(1.00, 13.953, 0.68465),
    band(2.00, 13.953, 0.63227),
    band(3.00, 14.823, 0.54503),
    band(7.00, 16.187, 0.46490),
    band(15.00, 17.836, 0.41507),
    band(30.00, 22.651, 0.32681),
    band(60.00, 27.074, 0.27436),
    band(f64::INFINITY, 34.219, 0.21716),
];

fn sigma_z_bands(class: StabilityClass) -> &'static [SigmaZBand] {
    match class {
        StabilityClass::A => SIGMA_Z_A,
        StabilityClass::B => SIGMA_Z_B,
        StabilityClass::C => SIGMA_Z_C,
        StabilityClass::D => SIGMA_Z_D,
        StabilityClass::E => SIGMA_Z_E,
        StabilityClass::F => SIGMA_Z_F,
    }
}

/// Horizontal plume spread σy (m) at `x_km` kilometres downwind
///
/// Returns NaN for `x_km <= 0` (logarithm undefined).
///
/// # Example
/// ```
/// use plume_sim_core::physics::dispersion_coefficients::sigma_y;
/// use plume_sim_core::StabilityClass;
///
/// let sy = sigma_y(StabilityClass::D, 0.5);
/// assert!((sy - 36.146193496038).abs() < 1e-8);
/// assert!(sigma_y(StabilityClass::D, -0.1).is_nan());
/// ```
#[must_use]
pub fn sigma_y(class: StabilityClass, x_km: f64) -> f64 {
    if x_km <= 0.0 {
        return f64::NAN;
    }
    let (c, d) = sigma_y_constants(class);
    let theta = 0.017453293 * (c - d * x_km.ln());
    465.11628 * x_km * theta.tan()
}

/// Vertical plume spread σz (m) at `x_km` kilometres downwind
///
/// Classes A-C saturate at [`SIGMA_Z_CAP`]; D-F are uncapped.
/// Returns NaN for `x_km <= 0`.
#[must_use]
pub fn sigma_z(class: StabilityClass, x_km: f64) -> f64 {
    if x_km <= 0.0 || x_km.is_nan() {
        return f64::NAN;
    }

    // Falling off the end of the table only happens for class A past 3.11 km.
    let sz = sigma_z_bands(class)
        .iter()
        .find(|band| x_km <= band.upper_km)
        .map_or(SIGMA_Z_CAP, |band| band.a * x_km.powf(band.b));

    match class {
        StabilityClass::A | StabilityClass::B | StabilityClass::C => sz.min(SIGMA_Z_CAP),
        StabilityClass::D | StabilityClass::E | StabilityClass::F => sz,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-8;

    #[test]
    fn test_sigma_y_reference_values() {
        let cases = [
            (StabilityClass::D, 0.5, 36.146193496038),
            (StabilityClass::A, 0.997, 208.157523627706),
            (StabilityClass::B, 0.012345, 2.835970876943),
            (StabilityClass::C, 27.85, 2025.69610345891),
            (StabilityClass::E, 0.445, 24.275915684479),
            (StabilityClass::F, 7.5558, 210.931775211803),
        ];
        for (class, x, expected) in cases {
            assert_abs_diff_eq!(sigma_y(class, x), expected, epsilon = TOL);
        }
    }

    #[test]
    fn test_sigma_z_reference_values() {
        let cases = [
            (StabilityClass::D, 0.5, 18.296892641654),
            (StabilityClass::A, 0.05, 7.246283645973),
            (StabilityClass::A, 0.27, 41.523682287423),
            (StabilityClass::A, 2.86, 4196.204889704382),
            (StabilityClass::A, 54.0, 5000.0),
            (StabilityClass::B, 0.05, 5.558326444834),
            (StabilityClass::B, 0.27, 27.177523893054),
            (StabilityClass::B, 2.86, 346.177898273921),
            (StabilityClass::B, 54.0, 5000.0),
            (StabilityClass::C, 0.05, 3.947711911749),
            (StabilityClass::C, 0.27, 18.459902569036),
            (StabilityClass::C, 2.86, 159.86291574317),
            (StabilityClass::C, 54.0, 2348.910612301645),
            (StabilityClass::D, 0.05, 2.545334368597),
            (StabilityClass::D, 0.27, 11.034101898944),
            (StabilityClass::D, 2.86, 63.142784897226),
            (StabilityClass::D, 54.0, 339.310493995667),
            (StabilityClass::E, 0.05, 1.979015073784),
            (StabilityClass::E, 0.27, 7.978143439122),
            (StabilityClass::E, 2.86, 41.083717338729),
            (StabilityClass::E, 54.0, 155.031915174584),
            (StabilityClass::F, 0.05, 1.321315762922),
            (StabilityClass::F, 0.27, 5.178781257565),
            (StabilityClass::F, 2.86, 26.28265822759),
            (StabilityClass::F, 54.0, 80.882017663045),
        ];
        for (class, x, expected) in cases {
            assert_abs_diff_eq!(sigma_z(class, x), expected, epsilon = TOL);
        }
    }

    #[test]
    fn test_non_positive_distance_is_nan() {
        for class in StabilityClass::ALL {
            for x in [0.0, -0.00578, -3.0] {
                assert!(sigma_y(class, x).is_nan(), "sigma_y({class}, {x})");
                assert!(sigma_z(class, x).is_nan(), "sigma_z({class}, {x})");
            }
        }
    }

    #[test]
    fn test_cap_applies_only_to_unstable_classes() {
        // Class B passes 5000 m near 33 km; D-F stay far below but must not be clamped
        assert_eq!(sigma_z(StabilityClass::B, 100.0), SIGMA_Z_CAP);
        assert_eq!(sigma_z(StabilityClass::A, 3.2), SIGMA_Z_CAP);
        let d_far = sigma_z(StabilityClass::D, 1.0e6);
        assert!(d_far > SIGMA_Z_CAP, "class D is uncapped: {d_far}");
    }

    #[test]
    fn test_band_edges_are_inclusive() {
        // x exactly on a breakpoint uses the lower band
        let at_edge = sigma_z(StabilityClass::D, 0.30);
        assert_abs_diff_eq!(at_edge, 34.459 * 0.30_f64.powf(0.86974), epsilon = 1e-12);
    }
}

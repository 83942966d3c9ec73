//! Rotation of receptor positions into plume-aligned coordinates

use crate::core_types::vec2::Vec2;

/// Sine and cosine of the wind direction, computed once per met hour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindRotation {
    pub sin: f64,
    pub cos: f64,
}

impl WindRotation {
    /// Rotation for a meteorological wind direction (radians, direction wind blows from)
    #[must_use]
    pub fn from_direction(wind_direction: f64) -> Self {
        let (sin, cos) = wind_direction.sin_cos();
        Self { sin, cos }
    }
}

/// Receptor position relative to the plume centreline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlumeCoordinates {
    /// Distance along the plume axis (km); negative upwind of the source
    pub downwind_km: f64,
    /// Perpendicular offset from the plume axis (m)
    pub crosswind: f64,
}

/// Transform a receptor into plume coordinates
///
/// ```text
/// downwind  = −(Δx sin φ + Δy cos φ) / 1000
/// crosswind =   Δx cos φ − Δy sin φ
/// ```
///
/// # Example
/// ```
/// use plume_sim_core::physics::plume_frame::{to_plume_frame, WindRotation};
/// use plume_sim_core::Vec2;
///
/// let rot = WindRotation::from_direction(200.0_f64.to_radians());
/// let p = to_plume_frame(Vec2::new(10.0, 10.0), Vec2::new(-2.0, -3.0), rot);
/// assert!((p.downwind_km - 0.01632024579).abs() < 1e-8);
/// assert!((p.crosswind + 6.8300495861972).abs() < 1e-8);
/// ```
#[must_use]
pub fn to_plume_frame(receptor: Vec2, source: Vec2, rotation: WindRotation) -> PlumeCoordinates {
    let d = receptor - source;
    PlumeCoordinates {
        downwind_km: -(d.x * rotation.sin + d.y * rotation.cos) / 1000.0,
        crosswind: d.x * rotation.cos - d.y * rotation.sin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_rotation() {
        let rot = WindRotation::from_direction(200.0 * std::f64::consts::PI / 180.0);
        let p = to_plume_frame(Vec2::new(10.0, 10.0), Vec2::new(-2.0, -3.0), rot);
        assert_abs_diff_eq!(p.downwind_km, 0.01632024579, epsilon = 1e-8);
        assert_abs_diff_eq!(p.crosswind, -6.8300495861972, epsilon = 1e-8);
    }

    #[test]
    fn test_northerly_wind_carries_plume_south() {
        // Wind from the north (0 rad): receptors south of the stack are downwind
        let rot = WindRotation::from_direction(0.0);
        let south = to_plume_frame(Vec2::new(0.0, -500.0), Vec2::zeros(), rot);
        assert_abs_diff_eq!(south.downwind_km, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(south.crosswind, 0.0, epsilon = 1e-12);

        let north = to_plume_frame(Vec2::new(0.0, 500.0), Vec2::zeros(), rot);
        assert!(north.downwind_km < 0.0);
    }

    #[test]
    fn test_rotation_preserves_distance() {
        let rot = WindRotation::from_direction(1.234);
        let p = to_plume_frame(Vec2::new(300.0, -400.0), Vec2::zeros(), rot);
        let r = ((p.downwind_km * 1000.0).powi(2) + p.crosswind.powi(2)).sqrt();
        assert_abs_diff_eq!(r, 500.0, epsilon = 1e-9);
    }
}

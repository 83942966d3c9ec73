//! Vector type alias for horizontal positions.

use nalgebra::Vector2;

/// 2D vector type for easting/northing positions and displacements.
///
/// This is a simple alias for `nalgebra::Vector2<f64>`, used for the stack
/// location and receptor-minus-source offsets in the plume-frame transform.
pub type Vec2 = Vector2<f64>;

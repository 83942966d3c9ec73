//! Receptor grid extents
//!
//! A [`GridExtent`] describes a regular rectangular mesh of receptors. For the
//! plan view the axes are easting/northing; for the vertical slice the x axis
//! is distance along the plume and the y axis is height above ground.

use crate::error::SimulationError;
use serde::{Deserialize, Serialize};

/// Slack allowed when a step almost divides an extent (`0.3 / 0.1` etc.)
const STEP_COUNT_SLACK: f64 = 1e-9;

/// Regular receptor mesh `(xmin..=xmax) × (ymin..=ymax)` in metres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridExtent {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    /// Column spacing (m)
    pub xstep: f64,
    /// Row spacing (m)
    pub ystep: f64,
}

impl GridExtent {
    /// Create a validated extent
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidGrid`] when a value is not finite, a
    /// step is not positive, or a maximum lies below its minimum.
    pub fn new(
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        xstep: f64,
        ystep: f64,
    ) -> Result<Self, SimulationError> {
        let extent = Self {
            xmin,
            xmax,
            ymin,
            ymax,
            xstep,
            ystep,
        };
        extent.validate("grid")?;
        Ok(extent)
    }

    /// Check the extent describes at least one receptor
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidGrid`] tagged with `name`.
    pub fn validate(&self, name: &'static str) -> Result<(), SimulationError> {
        let invalid = |reason: String| Err(SimulationError::InvalidGrid { name, reason });

        let values = [
            self.xmin, self.xmax, self.ymin, self.ymax, self.xstep, self.ystep,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return invalid(format!("extent values must be finite, got {self:?}"));
        }
        if self.xstep <= 0.0 || self.ystep <= 0.0 {
            return invalid(format!(
                "steps must be positive, got xstep={} ystep={}",
                self.xstep, self.ystep
            ));
        }
        if self.xmax < self.xmin || self.ymax < self.ymin {
            return invalid(format!(
                "maximum below minimum: x {}..{} y {}..{}",
                self.xmin, self.xmax, self.ymin, self.ymax
            ));
        }
        Ok(())
    }

    /// Number of columns, `(xmax − xmin) / xstep + 1`
    ///
    /// A step that does not divide the extent is truncated: the last column
    /// falls short of `xmax` rather than past it.
    #[must_use]
    pub fn cols(&self) -> usize {
        steps_in(self.xmax - self.xmin, self.xstep) + 1
    }

    /// Number of rows, `(ymax − ymin) / ystep + 1`
    #[must_use]
    pub fn rows(&self) -> usize {
        steps_in(self.ymax - self.ymin, self.ystep) + 1
    }

    /// `(cols, rows)`
    #[must_use]
    pub fn dims(&self) -> (usize, usize) {
        (self.cols(), self.rows())
    }

    /// Receptor x coordinate of column `col`
    #[inline]
    #[must_use]
    pub fn x_at(&self, col: usize) -> f64 {
        self.xmin + col as f64 * self.xstep
    }

    /// Receptor y coordinate (or height) of grid line `index`, counted from `ymin`
    ///
    /// Field rows run the other way: row 0 holds the line at the top of the
    /// extent, see [`GridExtent::row_of`].
    #[inline]
    #[must_use]
    pub fn y_at(&self, index: usize) -> f64 {
        self.ymin + index as f64 * self.ystep
    }

    /// Field row holding grid line `index` (row 0 = maximum y)
    #[inline]
    #[must_use]
    pub fn row_of(&self, index: usize) -> usize {
        self.rows() - 1 - index
    }

    /// Column at the middle of the x extent, `((xmax − xmin) / 2) / xstep` truncated
    #[must_use]
    pub fn centre_col(&self) -> usize {
        steps_in((self.xmax - self.xmin) / 2.0, self.xstep)
    }
}

fn steps_in(span: f64, step: f64) -> usize {
    (span / step + STEP_COUNT_SLACK).floor() as usize
}

//! Run configuration
//!
//! [`SimulationConfig`] is the explicit replacement for mutable session state:
//! everything a run needs besides the met sequence lives here, and edits
//! produce a new config for the next run.

use crate::core_types::met::MetHour;
use crate::core_types::source::Source;
use crate::core_types::stability::{Roughness, StabilityClass};
use crate::error::SimulationError;
use crate::grid::GridExtent;
use serde::{Deserialize, Serialize};

/// Half-width of the default plan and slice extents (m)
pub const DOMAIN_HALF_WIDTH: f64 = 2500.0;

/// Top of the default vertical slice (m)
pub const SLICE_TOP: f64 = 1000.0;

/// Quality preset determining receptor spacing
///
/// The slice grid uses half the plan step vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GridQuality {
    /// 50 m receptors
    Low,
    /// 25 m receptors
    Medium,
    /// 10 m receptors
    #[default]
    High,
}

impl GridQuality {
    /// Receptor spacing in meters for this preset
    #[must_use]
    pub const fn step(&self) -> f64 {
        match self {
            Self::Low => 50.0,
            Self::Medium => 25.0,
            Self::High => 10.0,
        }
    }
}

/// Plan-view extent `(−2500..2500)²` at `step`
#[must_use]
pub fn default_plan_extent(step: f64) -> GridExtent {
    GridExtent {
        xmin: -DOMAIN_HALF_WIDTH,
        xmax: DOMAIN_HALF_WIDTH,
        ymin: -DOMAIN_HALF_WIDTH,
        ymax: DOMAIN_HALF_WIDTH,
        xstep: step,
        ystep: step,
    }
}

/// Slice extent `(−2500..2500) × (0..1000)` at `(step, step / 2)`
#[must_use]
pub fn default_slice_extent(step: f64) -> GridExtent {
    GridExtent {
        xmin: -DOMAIN_HALF_WIDTH,
        xmax: DOMAIN_HALF_WIDTH,
        ymin: 0.0,
        ymax: SLICE_TOP,
        xstep: step,
        ystep: step / 2.0,
    }
}

/// Configuration for a dispersion run
///
/// The wind fields describe the single "user" hour used for one-hour runs;
/// multi-hour runs draw their own met records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Stack parameters
    pub source: Source,
    /// Wind-profile regime
    pub roughness: Roughness,
    /// Preset the extents were built from
    pub quality: GridQuality,
    /// Ground-level receptor grid
    pub plan_extent: GridExtent,
    /// Vertical along-plume receptor grid
    pub slice_extent: GridExtent,
    /// Wind speed at 10 m (m/s)
    pub wind_speed: f64,
    /// Direction the wind blows from (degrees)
    pub wind_direction: f64,
    /// Stability class of the single hour
    pub stability: StabilityClass,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let quality = GridQuality::default();
        Self {
            source: Source::default(),
            roughness: Roughness::Urban,
            quality,
            plan_extent: default_plan_extent(quality.step()),
            slice_extent: default_slice_extent(quality.step()),
            wind_speed: 5.0,
            wind_direction: 235.0,
            stability: StabilityClass::C,
        }
    }
}

impl SimulationConfig {
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    pub fn with_roughness(mut self, roughness: Roughness) -> Self {
        self.roughness = roughness;
        self
    }

    /// Switch preset and rebuild both extents at its step
    pub fn with_quality(mut self, quality: GridQuality) -> Self {
        self.quality = quality;
        self.plan_extent = default_plan_extent(quality.step());
        self.slice_extent = default_slice_extent(quality.step());
        self
    }

    /// Rebuild both default extents at an arbitrary step
    pub fn with_grid_step(mut self, step: f64) -> Self {
        self.plan_extent = default_plan_extent(step);
        self.slice_extent = default_slice_extent(step);
        self
    }

    pub fn with_plan_extent(mut self, extent: GridExtent) -> Self {
        self.plan_extent = extent;
        self
    }

    pub fn with_slice_extent(mut self, extent: GridExtent) -> Self {
        self.slice_extent = extent;
        self
    }

    /// Wind speed (m/s at 10 m) and direction (degrees, blowing from)
    pub fn with_wind(mut self, speed: f64, direction_deg: f64) -> Self {
        self.wind_speed = speed;
        self.wind_direction = direction_deg;
        self
    }

    pub fn with_stability(mut self, stability: StabilityClass) -> Self {
        self.stability = stability;
        self
    }

    /// The configured single met hour, weight 1
    #[must_use]
    pub fn single_hour(&self) -> MetHour {
        MetHour::from_degrees(1.0, self.wind_speed, self.wind_direction, self.stability)
    }

    /// Check both extents
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidGrid`] naming the offending grid.
    pub fn validate(&self) -> Result<(), SimulationError> {
        self.plan_extent.validate("plan")?;
        self.slice_extent.validate("slice")
    }
}

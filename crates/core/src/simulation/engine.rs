//! Dispersion engine
//!
//! Integrates the Gaussian plume over a sequence of met hours into two
//! receptor grids:
//!
//! 1. Wind at the stack tip from the 10 m measurement (power law)
//! 2. Briggs plume rise and distance to final rise
//! 3. Effective height `H = stack height + rise`
//! 4. Hours with stack-tip wind at or below 0.5 m/s contribute nothing
//! 5. Plan grid: every ground-level receptor rotated into plume coordinates,
//!    shifted back by the distance to final rise
//! 6. Slice grid: the plume centreline at every height and downwind offset
//!
//! Each hour adds `concentration / hours` to every cell, so heterogeneous
//! weights average correctly without a separate normalisation pass. Rows are
//! evaluated in parallel; each cell is written by exactly one task per hour
//! and hours are applied in order, so results are deterministic.

use crate::core_types::met::{MetHour, WIND_REFERENCE_HEIGHT};
use crate::core_types::source::Source;
use crate::core_types::stability::Roughness;
use crate::core_types::vec2::Vec2;
use crate::error::SimulationError;
use crate::grid::{shared_max, ConcentrationField, GridExtent};
use crate::physics::gaussian_plume::concentration;
use crate::physics::plume_frame::{to_plume_frame, WindRotation};
use crate::physics::plume_rise::{calculate_plume_rise, PlumeRise, AMBIENT_TEMPERATURE};
use crate::physics::wind_profile::extrapolate;
use crate::simulation::config::SimulationConfig;
use rayon::prelude::*;
use tracing::{debug, info};

/// Stack-tip wind speed at or below which an hour is skipped (m/s)
pub const LOW_WIND_CUTOFF: f64 = 0.5;

/// Plume parameters derived for one met hour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyPlume {
    /// Wind speed extrapolated to the stack tip (m/s)
    pub wind_speed: f64,
    /// Briggs rise and distance to final rise
    pub rise: PlumeRise,
    /// Stack height plus plume rise (m)
    pub effective_height: f64,
}

impl HourlyPlume {
    /// Derive stack-tip wind, plume rise and effective height for `hour`
    #[must_use]
    pub fn new(source: &Source, roughness: Roughness, hour: &MetHour) -> Self {
        let wind_speed = extrapolate(
            hour.wind_speed,
            source.elevation,
            WIND_REFERENCE_HEIGHT,
            hour.stability,
            roughness,
        );
        let rise = calculate_plume_rise(
            wind_speed,
            source.velocity,
            source.diameter,
            source.exit_temperature.to_kelvin(),
            AMBIENT_TEMPERATURE,
            hour.stability,
        );
        Self {
            wind_speed,
            rise,
            effective_height: source.elevation + rise.rise,
        }
    }

    /// Whether the low-wind cutoff suppresses this hour
    #[must_use]
    pub fn is_calm(&self) -> bool {
        self.wind_speed <= LOW_WIND_CUTOFF
    }
}

/// The two accumulated concentration grids of a run
#[derive(Debug, Clone, PartialEq)]
pub struct DispersionOutput {
    /// Ground-level plan view
    pub plan: ConcentrationField,
    /// Vertical slice along the plume centreline
    pub slice: ConcentrationField,
}

impl DispersionOutput {
    /// Zeroed fields sized for the configured extents
    #[must_use]
    pub fn for_config(config: &SimulationConfig) -> Self {
        Self {
            plan: ConcentrationField::for_extent(&config.plan_extent),
            slice: ConcentrationField::for_extent(&config.slice_extent),
        }
    }

    /// Largest value across both grids, the common scale for rendering
    #[must_use]
    pub fn shared_max(&self) -> f64 {
        shared_max(&[&self.plan, &self.slice])
    }

    /// Zero both grids
    pub fn clear(&mut self) {
        self.plan.clear();
        self.slice.clear();
    }
}

/// Run the engine on freshly zeroed grids
///
/// # Errors
/// Returns an error if an extent is invalid, `met` is empty, or a record has
/// a non-positive or non-finite `hours` weight.
///
/// # Example
/// ```
/// use plume_sim_core::{run_simulation, SimulationConfig, StabilityClass};
///
/// let config = SimulationConfig::default()
///     .with_grid_step(50.0)
///     .with_wind(6.0, 270.0)
///     .with_stability(StabilityClass::D);
/// let output = run_simulation(&config, &[config.single_hour()]).unwrap();
/// assert_eq!(output.plan.dims(), (101, 101));
/// assert!(output.shared_max() > 0.0);
/// ```
pub fn run_simulation(
    config: &SimulationConfig,
    met: &[MetHour],
) -> Result<DispersionOutput, SimulationError> {
    config.validate()?;
    let mut output = DispersionOutput::for_config(config);
    disperse(config, met, &mut output)?;
    Ok(output)
}

/// Accumulate the contribution of every hour in `met` into `output`
///
/// `output` is added to, not overwritten; callers wanting a fresh run pass
/// zeroed fields. Its dimensions must match the configured extents.
///
/// # Errors
/// Returns an error for invalid extents, mismatched field dimensions, an empty
/// met sequence, or an unusable `hours` weight. Nothing is written on error.
pub fn disperse(
    config: &SimulationConfig,
    met: &[MetHour],
    output: &mut DispersionOutput,
) -> Result<(), SimulationError> {
    config.validate()?;
    check_dims("plan", &config.plan_extent, &output.plan)?;
    check_dims("slice", &config.slice_extent, &output.slice)?;
    validate_met(met)?;

    info!(
        "Dispersing {} met hour(s): plan {}x{}, slice {}x{}",
        met.len(),
        output.plan.cols(),
        output.plan.rows(),
        output.slice.cols(),
        output.slice.rows()
    );

    let source = &config.source;
    let mut skipped = 0usize;

    for (index, hour) in met.iter().enumerate() {
        let plume = HourlyPlume::new(source, config.roughness, hour);

        if plume.is_calm() {
            debug!(
                "Hour {}: stack-tip wind {:.3} m/s at or below cutoff, skipped",
                index, plume.wind_speed
            );
            skipped += 1;
            continue;
        }

        debug!(
            "Hour {}: class {}, u={:.3} m/s, rise={:.2} m ({:?}), Xf={:.1} m, H={:.2} m",
            index,
            hour.stability,
            plume.wind_speed,
            plume.rise.rise,
            plume.rise.regime,
            plume.rise.distance_to_final_rise,
            plume.effective_height
        );

        accumulate_plan(&config.plan_extent, &mut output.plan, source, hour, &plume);
        accumulate_slice(&config.slice_extent, &mut output.slice, source, hour, &plume);
    }

    info!(
        "Dispersion complete: {} hour(s) contributed, {} calm hour(s) skipped",
        met.len() - skipped,
        skipped
    );
    Ok(())
}

/// Ground-level receptors in the plan view
fn accumulate_plan(
    extent: &GridExtent,
    field: &mut ConcentrationField,
    source: &Source,
    hour: &MetHour,
    plume: &HourlyPlume,
) {
    let cols = field.cols();
    let rotation = WindRotation::from_direction(hour.wind_direction);
    let rise_offset_km = plume.rise.distance_to_final_rise / 1000.0;

    field
        .as_mut_slice()
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(row, cells)| {
            let y = extent.y_at(extent.row_of(row));
            for (col, cell) in cells.iter_mut().enumerate() {
                let receptor = Vec2::new(extent.x_at(col), y);
                let frame = to_plume_frame(receptor, source.position, rotation);
                let c = concentration(
                    frame.downwind_km - rise_offset_km,
                    frame.crosswind,
                    0.0,
                    plume.wind_speed,
                    source.emission_rate,
                    plume.effective_height,
                    hour.stability,
                );
                *cell += c / hour.hours;
            }
        });
}

/// Plume centreline at every height, columns measured downwind from the centre column
fn accumulate_slice(
    extent: &GridExtent,
    field: &mut ConcentrationField,
    source: &Source,
    hour: &MetHour,
    plume: &HourlyPlume,
) {
    let cols = field.cols();
    let centre = extent.centre_col().min(cols);
    let xf = plume.rise.distance_to_final_rise;

    field
        .as_mut_slice()
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(row, cells)| {
            let z = extent.y_at(extent.row_of(row));
            for (step, cell) in cells[centre..].iter_mut().enumerate() {
                let downwind = step as f64 * extent.xstep;
                let c = concentration(
                    (downwind - xf) / 1000.0,
                    0.0,
                    z,
                    plume.wind_speed,
                    source.emission_rate,
                    plume.effective_height,
                    hour.stability,
                );
                *cell += c / hour.hours;
            }
        });
}

fn check_dims(
    name: &'static str,
    extent: &GridExtent,
    field: &ConcentrationField,
) -> Result<(), SimulationError> {
    let expected = extent.dims();
    let actual = field.dims();
    if expected == actual {
        Ok(())
    } else {
        Err(SimulationError::FieldMismatch {
            name,
            expected,
            actual,
        })
    }
}

fn validate_met(met: &[MetHour]) -> Result<(), SimulationError> {
    if met.is_empty() {
        return Err(SimulationError::EmptyMet);
    }
    match met
        .iter()
        .enumerate()
        .find(|(_, hour)| !(hour.hours.is_finite() && hour.hours > 0.0))
    {
        Some((index, hour)) => Err(SimulationError::InvalidMetHours {
            index,
            hours: hour.hours,
        }),
        None => Ok(()),
    }
}

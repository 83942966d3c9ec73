use clap::Parser;
use plume_sim_core::core_types::Celsius;
use plume_sim_core::{
    DispersionSession, GridExtent, GridQuality, Roughness, SimulationConfig, Source,
    StabilityClass, Vec2,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

/// Gaussian plume dispersion demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "plume-sim-demo")]
#[command(about = "Point-source plume dispersion demo", long_about = None)]
struct Args {
    /// Wind speed at 10 m in m/s
    #[arg(short, long, default_value_t = 5.0)]
    wind_speed: f64,

    /// Direction the wind blows from in degrees (0=North, 90=East)
    #[arg(long, default_value_t = 235.0)]
    wind_direction: f64,

    /// Pasquill-Gifford stability class (A-F)
    #[arg(short, long, default_value = "C")]
    stability: StabilityClass,

    /// Wind profile regime (urban, rural)
    #[arg(long, default_value = "urban")]
    roughness: Roughness,

    /// Grid quality (low=50 m, medium=25 m, high=10 m)
    #[arg(short, long, default_value = "high")]
    quality: String,

    /// Hours of random weather to average (1 = single configured hour)
    #[arg(long, default_value_t = 1)]
    hours: u32,

    /// Seed for random weather
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Stack height in meters
    #[arg(long, default_value_t = 50.0)]
    stack_height: f64,

    /// Stack diameter in meters
    #[arg(long, default_value_t = 0.5)]
    stack_diameter: f64,

    /// Exit velocity in m/s
    #[arg(long, default_value_t = 10.0)]
    exit_velocity: f64,

    /// Exit temperature in °C
    #[arg(short, long, default_value_t = 60.0)]
    temperature: f64,

    /// Emission rate in g/s
    #[arg(short, long, default_value_t = 1.0)]
    emission_rate: f64,

    /// Number of downwind centreline samples to print
    #[arg(long, default_value_t = 10)]
    samples: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("=== Plume Dispersion Demo ===\n");

    let quality = match args.quality.to_lowercase().as_str() {
        "low" => GridQuality::Low,
        "medium" => GridQuality::Medium,
        "high" => GridQuality::High,
        other => {
            println!("Unknown quality '{}', using high", other);
            GridQuality::High
        }
    };

    let exit_temp = match exit_temperature(args.temperature) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let source = Source::new(
        Vec2::zeros(),
        args.stack_height,
        args.stack_diameter,
        args.exit_velocity,
        exit_temp,
        args.emission_rate,
    );

    let config = SimulationConfig::default()
        .with_source(source)
        .with_roughness(args.roughness)
        .with_quality(quality)
        .with_wind(args.wind_speed, args.wind_direction)
        .with_stability(args.stability);

    println!(
        "Stack: {:.1} m high, {:.2} m diameter, {:.1} m/s exit at {}, {:.3} g/s",
        config.source.elevation,
        config.source.diameter,
        config.source.velocity,
        config.source.exit_temperature,
        config.source.emission_rate
    );
    println!(
        "Grid: {:?} ({} m), roughness {}",
        config.quality,
        config.quality.step(),
        config.roughness
    );

    let mut session = match DispersionSession::new(config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Failed to run simulation: {e}");
            std::process::exit(1);
        }
    };

    if args.hours > 1 {
        println!("Averaging {} hours of random weather (seed {})", args.hours, args.seed);
        let mut rng = StdRng::seed_from_u64(args.seed);
        if let Err(e) = session.simulate(args.hours, &mut rng) {
            eprintln!("Failed to run simulation: {e}");
            std::process::exit(1);
        }
    } else {
        println!(
            "Wind: {:.1} m/s from {:.0}°, class {}",
            args.wind_speed, args.wind_direction, args.stability
        );
    }

    let config = session.config();
    let output = session.output();

    println!("\n=== Results ===");
    println!(
        "Plan grid: {}x{}, slice grid: {}x{}",
        output.plan.cols(),
        output.plan.rows(),
        output.slice.cols(),
        output.slice.rows()
    );
    println!("Shared maximum: {:.4e} g/m³", output.shared_max());

    report_peak("Ground-level peak", &output.plan, &config.plan_extent, "y");
    report_peak("Slice peak", &output.slice, &config.slice_extent, "z");

    if args.hours <= 1 && args.samples > 0 {
        print_centreline(&output.slice, &config.slice_extent, args.samples);
    }
}

/// Reject temperatures `Celsius::new` would panic on
fn exit_temperature(value: f64) -> Result<Celsius, String> {
    if value.is_nan() || value < -273.15 {
        Err(format!(
            "Exit temperature {} °C is not at or above absolute zero (-273.15 °C)",
            value
        ))
    } else {
        Ok(Celsius::new(value))
    }
}

fn report_peak(
    label: &str,
    field: &plume_sim_core::ConcentrationField,
    extent: &GridExtent,
    axis: &str,
) {
    match field.peak() {
        Some(peak) if peak.value > 0.0 => {
            let x = extent.x_at(peak.col);
            let v = extent.y_at(extent.row_of(peak.row));
            println!(
                "{}: {:.4e} g/m³ at x={:.0} m, {}={:.0} m",
                label, peak.value, x, axis, v
            );
        }
        _ => println!("{}: none (calm or no receptors downwind)", label),
    }
}

fn print_centreline(slice: &plume_sim_core::ConcentrationField, extent: &GridExtent, samples: usize) {
    let centre = extent.centre_col();
    let available = slice.cols().saturating_sub(centre);
    if available == 0 {
        return;
    }
    let ground_row = extent.row_of(0);
    let stride = (available / samples).max(1);

    println!("\nDownwind(m) | Ground-level C (g/m³)");
    println!("------------|----------------------");
    for step in (0..available).step_by(stride).take(samples) {
        let downwind = step as f64 * extent.xstep;
        println!(
            "{:11.0} | {:20.4e}",
            downwind,
            slice.get(centre + step, ground_row)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_temperature_below_absolute_zero_is_an_error() {
        assert!(exit_temperature(-300.0).is_err());
        assert!(exit_temperature(f64::NAN).is_err());
        assert_eq!(*exit_temperature(-273.15).unwrap(), -273.15);
        assert_eq!(*exit_temperature(60.0).unwrap(), 60.0);
    }
}

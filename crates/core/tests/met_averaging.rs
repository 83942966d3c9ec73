//! Multi-hour averaging behaviour of the engine and session
use approx::assert_relative_eq;
use plume_sim_core::weather::MetGenerator;
use plume_sim_core::{
    run_simulation, DispersionSession, GridQuality, MetHour, SimulationConfig, StabilityClass,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn coarse() -> SimulationConfig {
    SimulationConfig::default().with_quality(GridQuality::Low)
}

#[test]
fn test_identical_hours_average_to_single_hour() {
    let config = coarse();
    let single = run_simulation(&config, &[config.single_hour()]).unwrap();

    let mut hour = config.single_hour();
    hour.hours = 3.0;
    let averaged = run_simulation(&config, &[hour, hour, hour]).unwrap();

    for (a, b) in single.plan.as_slice().iter().zip(averaged.plan.as_slice()) {
        assert_relative_eq!(*a, *b, max_relative = 1e-12);
    }
}

#[test]
fn test_opposite_winds_split_the_field() {
    let config = coarse();
    let east = MetHour::from_degrees(2.0, 6.0, 90.0, StabilityClass::D);
    let west = MetHour::from_degrees(2.0, 6.0, 270.0, StabilityClass::D);
    let output = run_simulation(&config, &[east, west]).unwrap();

    // Mirror-image plumes: the field is symmetric about x = 0
    let cols = output.plan.cols();
    let row = output.plan.rows() / 2;
    for col in 0..cols / 2 {
        assert_relative_eq!(
            output.plan.get(col, row),
            output.plan.get(cols - 1 - col, row),
            max_relative = 1e-9,
            epsilon = 1e-20
        );
    }
}

#[test]
fn test_session_matches_engine_on_generated_met() {
    let config = coarse();
    let met = MetGenerator::from_config(&config).generate(24, &mut StdRng::seed_from_u64(5));
    let expected = run_simulation(&config, &met).unwrap();

    let mut session = DispersionSession::new(config).unwrap();
    session.simulate(24, &mut StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(session.output(), &expected);
}

#[test]
fn test_logging_does_not_change_results() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();

    let config = coarse();
    let output = run_simulation(&config, &[config.single_hour()]).unwrap();
    assert!(output.shared_max() > 0.0);
}

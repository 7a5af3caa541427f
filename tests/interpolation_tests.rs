/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/


use approx::assert_relative_eq;
use frensie_rs::interpolation::{
    Axis, InterpolationPolicy, InterpolationType, Lin, LinLin, LinLog, Log, LogLin, LogLog,
};
use rstest::rstest;

fn check_round_trip<P: InterpolationPolicy>(value: f64) {
    assert_relative_eq!(
        P::recover_processed_indep_var(P::process_indep_var(value)),
        value,
        max_relative = 1e-14
    );
    assert_relative_eq!(
        P::recover_processed_dep_var(P::process_dep_var(value)),
        value,
        max_relative = 1e-14
    );
}

#[rstest]
#[case(1e-12)]
#[case(1e-3)]
#[case(1.0)]
#[case(42.5)]
#[case(1e9)]
fn test_process_recover_round_trip(#[case] value: f64) {
    check_round_trip::<LinLin>(value);
    check_round_trip::<LinLog>(value);
    check_round_trip::<LogLin>(value);
    check_round_trip::<LogLog>(value);
}

#[rstest]
#[case(-3.5)]
#[case(0.0)]
#[case(7.25)]
fn test_linear_axis_is_identity(#[case] value: f64) {
    assert_eq!(Lin::process(value), value);
    assert_eq!(Lin::recover(value), value);
}

#[rstest]
#[case(0.5, 2.0)]
#[case(1.0, 1.0)]
#[case(2.0, 0.5)]
fn test_log_log_reproduces_power_laws(#[case] exponent: f64, #[case] x: f64) {
    let y = |x: f64| 3.0 * x.powf(exponent);

    let value = LogLog::interpolate_between(0.1, 10.0, x, y(0.1), y(10.0));

    assert_relative_eq!(value, y(x), max_relative = 1e-12);
}

#[rstest]
#[case(InterpolationType::LinLin, false, false)]
#[case(InterpolationType::LinLog, false, true)]
#[case(InterpolationType::LogLin, true, false)]
#[case(InterpolationType::LogLog, true, true)]
fn test_policy_tags(
    #[case] interpolation: InterpolationType,
    #[case] dep_log: bool,
    #[case] indep_log: bool,
) {
    assert_eq!(interpolation.is_dep_axis_log(), dep_log);
    assert_eq!(interpolation.is_indep_axis_log(), indep_log);
    assert_eq!(interpolation.name().parse::<InterpolationType>(), Ok(interpolation));
}

#[test]
fn test_interpolation_hits_end_points() {
    assert_relative_eq!(LogLin::interpolate_between(1.0, 3.0, 1.0, 2.0, 8.0), 2.0, max_relative = 1e-14);
    assert_relative_eq!(LogLin::interpolate_between(1.0, 3.0, 3.0, 2.0, 8.0), 8.0, max_relative = 1e-14);
    assert_relative_eq!(LinLog::interpolate_between(1.0, 4.0, 2.0, 0.0, 2.0), 1.0, max_relative = 1e-14);
}

#[test]
fn test_log_axis_range() {
    assert!(Log::is_in_valid_range(f64::MIN_POSITIVE));
    assert!(!Log::is_in_valid_range(0.0));
    assert!(!Log::is_in_valid_range(f64::NAN));
    assert_eq!(Log::process(0.0), f64::NEG_INFINITY);
}

#[test]
fn test_interpolation_type_serde() {
    let json = serde_json::to_string(&InterpolationType::LinLog).unwrap();
    let parsed: InterpolationType = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, InterpolationType::LinLog);
}

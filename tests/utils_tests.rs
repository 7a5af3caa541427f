/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/


use approx::assert_relative_eq;
use frensie_rs::utils::{
    atomic_momentum_to_mec, constants, ev_to_mev, kev_to_mev, lower_bound_index,
    mec_to_atomic_momentum, mev_to_ev, mev_to_kev, upper_bound_index, Pair, Quad, Trip,
};

#[test]
fn test_unit_conversions() {
    // Test MeV ↔ eV conversions
    let mev_value = 0.511;
    let ev_value = mev_to_ev(mev_value);
    let converted_back = ev_to_mev(ev_value);

    assert_relative_eq!(converted_back, mev_value, epsilon = 1e-12);
    assert_relative_eq!(ev_value, 511_000.0, epsilon = 1e-6);

    // Test MeV ↔ keV conversions
    assert_relative_eq!(kev_to_mev(mev_to_kev(2.5)), 2.5, epsilon = 1e-12);
    assert_relative_eq!(mev_to_kev(1.0), constants::MEV_TO_KEV);

    // Test atomic units ↔ m_e c conversions
    let momentum = 137.0359;
    assert_relative_eq!(atomic_momentum_to_mec(momentum), 1.0, epsilon = 1e-6);
    assert_relative_eq!(
        mec_to_atomic_momentum(atomic_momentum_to_mec(3.2)),
        3.2,
        epsilon = 1e-12
    );
}

#[test]
fn test_constants() {
    assert_relative_eq!(
        constants::FINE_STRUCTURE_CONSTANT * constants::INVERSE_FINE_STRUCTURE_CONSTANT,
        1.0,
        epsilon = 1e-15
    );
    assert_relative_eq!(constants::ELECTRON_REST_MASS_ENERGY, 0.511, epsilon = 1e-3);
}

#[test]
fn test_record_display() {
    assert_eq!(Pair::new(1, 2.5).to_string(), "{1, 2.5}");
    assert_eq!(Trip::new(1, 'a', "b").to_string(), "{1, a, b}");
    assert_eq!(Quad::new(0.5, 3u32, 1usize, 1e-3).to_string(), "{0.5, 3, 1, 0.001}");
}

#[test]
fn test_searches_on_record_tables() {
    let table = vec![
        Quad::new(0.25, 1u32, 0usize, 1e-3),
        Quad::new(0.5, 2, 1, 1e-4),
        Quad::new(1.0, 3, 2, 1e-5),
    ];

    assert_eq!(upper_bound_index(&table, 0.0, |r| r.first), 0);
    assert_eq!(upper_bound_index(&table, 0.3, |r| r.first), 1);
    assert_eq!(upper_bound_index(&table, 1.0, |r| r.first), 2);

    assert_eq!(lower_bound_index(&table, 0.3, |r| r.first), 0);
    assert_eq!(lower_bound_index(&table, 0.5, |r| r.first), 1);
    assert_eq!(lower_bound_index(&table, 1.0, |r| r.first), 1);
}

/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/


use std::collections::HashMap;
use std::sync::Arc;

use approx::assert_relative_eq;
use frensie_rs::photon::{
    calculate_compton_line_energy, ComptonProfile, DopplerBroadenedEnergySampler,
    PhotonDataDopplerBroadening, PhotonDataError, ShellOccupancyTable,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Gaussian-like half profile tabulated on [0, 5] m_e c
fn half_profile(width: f64) -> ComptonProfile {
    let momentum: Vec<f64> = (0..=50).map(|i| 0.1 * i as f64).collect();
    let profile: Vec<f64> = momentum
        .iter()
        .map(|p| (-(p * p) / (2.0 * width * width)).exp())
        .collect();

    ComptonProfile::from_half_profile(&momentum, &profile).unwrap()
}

fn carbon_like() -> PhotonDataDopplerBroadening {
    let table = ShellOccupancyTable::from_occupancies(&[
        (1, 2.0, 2.9e-4),
        (3, 2.0, 1.6e-5),
        (5, 2.0, 1.1e-5),
    ])
    .unwrap();
    let profiles = vec![half_profile(1.0), half_profile(0.3), half_profile(0.2)];
    let kinetic = HashMap::from([(1, 4.4e-4), (3, 2.9e-5), (5, 2.0e-5)]);

    PhotonDataDopplerBroadening::new(table, profiles, kinetic).unwrap()
}

#[test]
fn test_compton_profile_round_trip() {
    let data = carbon_like();

    for index in 0..data.number_of_compton_profiles() {
        for i in 0..=100 {
            let cdf = i as f64 / 100.0;
            let momentum = data.compton_profile_momentum(index, cdf);

            assert_relative_eq!(
                data.compton_profile_cdf(index, momentum),
                cdf,
                epsilon = 1e-10
            );
        }
    }
}

#[test]
fn test_compton_profile_is_symmetric() {
    let data = carbon_like();

    assert_relative_eq!(data.compton_profile_cdf(1, 0.0), 0.5, epsilon = 1e-12);
    assert_relative_eq!(
        data.compton_profile_cdf(1, -0.35),
        1.0 - data.compton_profile_cdf(1, 0.35),
        epsilon = 1e-12
    );
    assert_eq!(data.compton_profile_cdf(1, -10.0), 0.0);
    assert_eq!(data.compton_profile_cdf(1, 10.0), 1.0);
}

#[test]
fn test_shell_selection_follows_occupancy() {
    let data = carbon_like();

    assert_eq!(data.incoherent_scattering_vacancy_shell_data(0.0).shell, 1);
    assert_eq!(data.incoherent_scattering_vacancy_shell_data(0.5).shell, 3);

    let outer = data.incoherent_scattering_vacancy_shell_data(1.0);
    assert_eq!(outer.shell, 5);
    assert_eq!(outer.compton_profile_index, 2);
    assert_eq!(outer.binding_energy, 1.1e-5);
}

#[test]
fn test_shell_energies() {
    let data = carbon_like();

    assert_eq!(data.shell_kinetic_energy(3).unwrap(), 2.9e-5);
    assert_eq!(data.shell_binding_energy(1).unwrap(), 2.9e-4);
    assert_eq!(data.min_binding_energy(), 1.1e-5);
    assert!(matches!(
        data.shell_kinetic_energy(7),
        Err(PhotonDataError::UnknownShell(7))
    ));
}

#[test]
fn test_sampler_statistics() {
    let sampler = DopplerBroadenedEnergySampler::new(Arc::new(carbon_like()));
    let mut rng = StdRng::seed_from_u64(12345);

    let incoming_energy = 0.1;
    let mu = 0.0;
    let line = calculate_compton_line_energy(incoming_energy, mu);

    let mut counts = HashMap::new();
    let mut above = 0;
    let samples = 20_000;

    for _ in 0..samples {
        let sample = sampler.sample(&mut rng, incoming_energy, mu);

        assert!(sample.outgoing_energy > 0.0);
        assert!(sample.outgoing_energy <= incoming_energy);
        assert_eq!(sample.trials, 1);

        *counts.entry(sample.shell.unwrap()).or_insert(0usize) += 1;
        if sample.outgoing_energy > line {
            above += 1;
        }
    }

    // Equal occupancies
    for shell in [1, 3, 5] {
        let fraction = counts[&shell] as f64 / samples as f64;
        assert!((fraction - 1.0 / 3.0).abs() < 0.02, "shell {} fraction {}", shell, fraction);
    }

    // Truncation at the maximum momentum favours energies below the line
    let fraction_above = above as f64 / samples as f64;
    assert!(fraction_above > 0.1 && fraction_above < 0.45, "fraction above {}", fraction_above);
}

#[test]
fn test_sampler_is_reproducible() {
    let sampler = DopplerBroadenedEnergySampler::new(Arc::new(carbon_like()));

    let first: Vec<_> = {
        let mut rng = StdRng::seed_from_u64(99);
        (0..50).map(|_| sampler.sample(&mut rng, 0.5, 0.3)).collect()
    };
    let second: Vec<_> = {
        let mut rng = StdRng::seed_from_u64(99);
        (0..50).map(|_| sampler.sample(&mut rng, 0.5, 0.3)).collect()
    };

    assert_eq!(first, second);
}

/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/


//! Example Doppler broadening of incoherent scattering
//!
//! This example builds Doppler broadening data for a two-shell atom and
//! samples outgoing photon energies around the Compton line.

use std::collections::HashMap;
use std::sync::Arc;

use frensie_rs::photon::{
    calculate_compton_line_energy, ComptonProfile, DopplerBroadenedEnergySampler,
    PhotonDataDopplerBroadening, ShellOccupancyTable,
};
use frensie_rs::utils::atomic_momentum_to_mec;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Half profile of a hydrogen-like shell on an atomic-unit momentum grid
fn hydrogenic_profile(z_eff: f64) -> anyhow::Result<ComptonProfile> {
    let momentum_au: Vec<f64> = (0..=60).map(|i| 0.5 * i as f64).collect();
    let profile: Vec<f64> = momentum_au
        .iter()
        .map(|q| {
            let x = q / z_eff;
            1.0 / (1.0 + x * x).powi(3)
        })
        .collect();
    let momentum: Vec<f64> = momentum_au.iter().map(|&q| atomic_momentum_to_mec(q)).collect();

    Ok(ComptonProfile::from_half_profile(&momentum, &profile)?)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let table = ShellOccupancyTable::from_occupancies(&[(1, 2.0, 5.4e-4), (3, 4.0, 2.4e-5)])?;
    let profiles = vec![hydrogenic_profile(7.7)?, hydrogenic_profile(2.2)?];
    let kinetic_energies = HashMap::from([(1, 7.9e-4), (3, 4.6e-5)]);

    let data = Arc::new(PhotonDataDopplerBroadening::new(
        table,
        profiles,
        kinetic_energies,
    )?);
    let sampler = DopplerBroadenedEnergySampler::new(Arc::clone(&data));

    let mut rng = StdRng::seed_from_u64(2025);
    let incoming_energy = 0.06;

    for &mu in &[0.9, 0.0, -0.9] {
        let line = calculate_compton_line_energy(incoming_energy, mu);

        let samples: Vec<_> = (0..10_000)
            .map(|_| sampler.sample(&mut rng, incoming_energy, mu))
            .collect();
        let mean = samples.iter().map(|s| s.outgoing_energy).sum::<f64>() / samples.len() as f64;
        let spread = (samples
            .iter()
            .map(|s| (s.outgoing_energy - mean).powi(2))
            .sum::<f64>()
            / samples.len() as f64)
            .sqrt();
        let broadened = samples.iter().filter(|s| s.doppler_broadened).count();

        println!(
            "mu = {:>5.2}: Compton line {:.5} MeV, mean {:.5} MeV, spread {:.2e} MeV, {} broadened",
            mu, line, mean, spread, broadened
        );
    }

    for shell in [1, 3] {
        println!(
            "Shell {}: binding energy {:e} MeV, kinetic energy {:e} MeV",
            shell,
            data.shell_binding_energy(shell)?,
            data.shell_kinetic_energy(shell)?
        );
    }

    Ok(())
}

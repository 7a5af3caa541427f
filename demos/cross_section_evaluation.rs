/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/


//! Example cross-section evaluation
//!
//! This example builds a few reactions of a made-up element over one shared
//! energy grid and prints their cross sections.

use frensie_rs::config::ReactionConfig;
use frensie_rs::interpolation::InterpolationType;
use frensie_rs::reaction::{strip_leading_zeros, ReactionFactory};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Shared energy grid in MeV
    let energy_grid = vec![1e-5, 1e-4, 1e-3, 1e-2, 1e-1, 1.0, 10.0, 100.0];

    let factory = ReactionFactory::new(
        ReactionConfig::raw(InterpolationType::LogLog).with_hash_grid_bins(4),
        energy_grid.clone(),
    )?;

    // Elastic scattering is tabulated on the whole grid
    let elastic = factory.create_reaction(
        vec![1.2e3, 9.0e2, 4.1e2, 1.1e2, 9.5, 0.42, 2.1e-2, 4.0e-4],
        0,
    )?;

    // Pair production starts above 2 m_e c^2, the table carries leading zeros
    let pair_table = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.3e-2, 6.5e-2];
    let (zeros, pair_cross_section) = strip_leading_zeros(&pair_table, false);
    let pair_production = factory.create_reaction(pair_cross_section, zeros)?;

    println!(
        "Pair production threshold: {:e} MeV",
        pair_production.threshold_energy()
    );
    println!("{:>12} {:>14} {:>14}", "Energy", "Elastic", "Pair");

    for &energy in &[2e-5, 5e-4, 3e-2, 0.5, 20.0, 100.0] {
        println!(
            "{:>12.3e} {:>14.6e} {:>14.6e}",
            energy,
            elastic.cross_section(energy),
            pair_production.cross_section(energy)
        );
    }

    // Many energies at once
    let energies: Vec<f64> = (0..=40).map(|i| 1e-5 * 10f64.powf(i as f64 / 5.0)).collect();
    let totals: Vec<f64> = elastic
        .cross_sections(&energies)
        .iter()
        .zip(pair_production.cross_sections(&energies))
        .map(|(a, b)| a + b)
        .collect();

    println!(
        "Total cross section ranges from {:.3e} to {:.3e} barns",
        totals.iter().cloned().fold(f64::INFINITY, f64::min),
        totals.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    );

    Ok(())
}

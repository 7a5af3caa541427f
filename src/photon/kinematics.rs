/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Photon scattering kinematics
//!
//! Energies are in MeV, momenta in units of `m_e c` and `mu` is the cosine
//! of the photon scattering angle.

use crate::utils::constants::ELECTRON_REST_MASS_ENERGY;

/// Largest mismatch allowed between the requested momentum projection and
/// the projection recomputed from a Doppler-broadened energy
pub const DOPPLER_ROOT_TOLERANCE: f64 = 1e-6;

/// Outcome of a Doppler-broadened energy calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DopplerBroadenedEnergy {
    /// Outgoing photon energy in MeV, zero when not energetically possible
    pub energy: f64,
    /// Whether an admissible outgoing energy exists
    pub energetically_possible: bool,
}

impl DopplerBroadenedEnergy {
    fn impossible() -> Self {
        Self {
            energy: 0.0,
            energetically_possible: false,
        }
    }
}

/// Calculate the Compton line energy
///
/// # Arguments
///
/// * `incoming_energy` - Incoming photon energy in MeV
/// * `scattering_angle_cosine` - Cosine of the scattering angle
///
/// # Returns
///
/// Outgoing photon energy for scattering off a free electron at rest
pub fn calculate_compton_line_energy(incoming_energy: f64, scattering_angle_cosine: f64) -> f64 {
    debug_assert!(incoming_energy > 0.0);
    debug_assert!((-1.0..=1.0).contains(&scattering_angle_cosine));

    incoming_energy
        / (1.0 + incoming_energy / ELECTRON_REST_MASS_ENERGY * (1.0 - scattering_angle_cosine))
}

/// Calculate the electron momentum projection
///
/// # Arguments
///
/// * `incoming_energy` - Incoming photon energy in MeV
/// * `outgoing_energy` - Outgoing photon energy in MeV
/// * `scattering_angle_cosine` - Cosine of the scattering angle
///
/// # Returns
///
/// Projection of the target electron momentum on the scattering vector, in
/// units of `m_e c`. Forward scattering without energy loss has no
/// scattering vector and returns zero.
pub fn calculate_electron_momentum_projection(
    incoming_energy: f64,
    outgoing_energy: f64,
    scattering_angle_cosine: f64,
) -> f64 {
    debug_assert!(incoming_energy > 0.0);
    debug_assert!(outgoing_energy >= 0.0);
    debug_assert!((-1.0..=1.0).contains(&scattering_angle_cosine));

    let numerator = outgoing_energy - incoming_energy
        + incoming_energy * outgoing_energy * (1.0 - scattering_angle_cosine)
            / ELECTRON_REST_MASS_ENERGY;

    let denominator = (incoming_energy * incoming_energy + outgoing_energy * outgoing_energy
        - 2.0 * incoming_energy * outgoing_energy * scattering_angle_cosine)
        .max(0.0)
        .sqrt();

    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Calculate the maximum electron momentum projection
///
/// This is the projection reached when the outgoing photon carries the
/// incoming energy minus the binding energy of the shell.
///
/// # Arguments
///
/// * `incoming_energy` - Incoming photon energy in MeV
/// * `binding_energy` - Binding energy of the shell in MeV
/// * `scattering_angle_cosine` - Cosine of the scattering angle
pub fn calculate_max_electron_momentum_projection(
    incoming_energy: f64,
    binding_energy: f64,
    scattering_angle_cosine: f64,
) -> f64 {
    debug_assert!(incoming_energy > 0.0);
    debug_assert!(binding_energy >= 0.0);
    debug_assert!(incoming_energy >= binding_energy);
    debug_assert!((-1.0..=1.0).contains(&scattering_angle_cosine));

    let arg =
        incoming_energy * (incoming_energy - binding_energy) * (1.0 - scattering_angle_cosine);

    let denominator =
        ELECTRON_REST_MASS_ENERGY * (2.0 * arg + binding_energy * binding_energy).sqrt();

    let pz_max = if denominator == 0.0 {
        0.0
    } else {
        (arg - binding_energy * ELECTRON_REST_MASS_ENERGY) / denominator
    };

    debug_assert!(pz_max >= -1.0);

    pz_max
}

/// Calculate the Doppler-broadened outgoing photon energy
///
/// Inverting the momentum projection for the outgoing energy gives a
/// quadratic in `x = E1 / E0`. Squaring introduces a spurious root, so each
/// root is checked against the requested projection before it is accepted.
///
/// # Arguments
///
/// * `electron_momentum_projection` - Momentum projection in units of `m_e c`
/// * `incoming_energy` - Incoming photon energy in MeV
/// * `scattering_angle_cosine` - Cosine of the scattering angle
///
/// # Returns
///
/// The outgoing energy, or an energetically impossible result with zero
/// energy when no admissible root in `[0, E0)` reproduces the projection.
pub fn calculate_doppler_broadened_energy(
    electron_momentum_projection: f64,
    incoming_energy: f64,
    scattering_angle_cosine: f64,
) -> DopplerBroadenedEnergy {
    debug_assert!(incoming_energy > 0.0);
    debug_assert!((-1.0..=1.0).contains(&scattering_angle_cosine));

    let pz_sqr = electron_momentum_projection * electron_momentum_projection;
    let compton_ratio =
        1.0 + incoming_energy / ELECTRON_REST_MASS_ENERGY * (1.0 - scattering_angle_cosine);

    let a = pz_sqr - compton_ratio * compton_ratio;
    let b = -2.0 * (pz_sqr * scattering_angle_cosine - compton_ratio);
    let c = pz_sqr - 1.0;

    let discriminant = b * b - 4.0 * a * c;

    if a == 0.0 || discriminant < 0.0 {
        return DopplerBroadenedEnergy::impossible();
    }

    let sqrt_discriminant = discriminant.sqrt();

    [
        (-b + sqrt_discriminant) / (2.0 * a),
        (-b - sqrt_discriminant) / (2.0 * a),
    ]
    .into_iter()
    .map(|ratio| ratio * incoming_energy)
    .find(|&energy| {
        (0.0..incoming_energy).contains(&energy)
            && (calculate_electron_momentum_projection(
                incoming_energy,
                energy,
                scattering_angle_cosine,
            ) - electron_momentum_projection)
                .abs()
                <= DOPPLER_ROOT_TOLERANCE
    })
    .map(|energy| DopplerBroadenedEnergy {
        energy,
        energetically_possible: true,
    })
    .unwrap_or_else(DopplerBroadenedEnergy::impossible)
}

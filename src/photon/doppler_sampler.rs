/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Doppler-broadened incoherent scattering energies
//!
//! The outgoing energy of an incoherently scattered photon is sampled in
//! three steps: choose the shell left with a vacancy, sample the electron
//! momentum projection from that shell's Compton profile, then convert the
//! projection into an outgoing energy. Shells with a binding energy above
//! the incoming energy are redrawn and the momentum is sampled from the
//! profile truncated at the largest projection the shell allows.

use std::sync::Arc;

use log::{debug, warn};
use rand::Rng;

use super::doppler_data::PhotonDataDopplerBroadening;
use super::kinematics::{
    calculate_compton_line_energy, calculate_doppler_broadened_energy,
    calculate_max_electron_momentum_projection,
};

/// Result of one Doppler broadening sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DopplerSample {
    /// Outgoing photon energy in MeV, always positive
    pub outgoing_energy: f64,
    /// Shell left with a vacancy, `None` when no shell could be reached
    pub shell: Option<u32>,
    /// Sampled electron momentum projection in units of `m_e c`
    pub electron_momentum_projection: f64,
    /// Number of shell draws
    pub trials: u32,
    /// Whether the outgoing energy is Doppler broadened or the Compton line
    pub doppler_broadened: bool,
}

/// Samples Doppler-broadened outgoing photon energies
#[derive(Debug, Clone)]
pub struct DopplerBroadenedEnergySampler {
    data: Arc<PhotonDataDopplerBroadening>,
}

impl DopplerBroadenedEnergySampler {
    /// Create a sampler over shared Doppler broadening data
    pub fn new(data: Arc<PhotonDataDopplerBroadening>) -> Self {
        Self { data }
    }

    /// The Doppler broadening data
    pub fn data(&self) -> &Arc<PhotonDataDopplerBroadening> {
        &self.data
    }

    /// Sample an outgoing photon energy
    ///
    /// # Arguments
    ///
    /// * `rng` - Random number source
    /// * `incoming_energy` - Incoming photon energy in MeV
    /// * `scattering_angle_cosine` - Cosine of the sampled scattering angle
    ///
    /// # Returns
    ///
    /// The sample. When the sampled momentum cannot be reached the outgoing
    /// energy falls back to the Compton line energy.
    pub fn sample<R: Rng>(
        &self,
        rng: &mut R,
        incoming_energy: f64,
        scattering_angle_cosine: f64,
    ) -> DopplerSample {
        debug_assert!(incoming_energy > 0.0);
        debug_assert!((-1.0..=1.0).contains(&scattering_angle_cosine));

        let compton_line = calculate_compton_line_energy(incoming_energy, scattering_angle_cosine);

        if incoming_energy < self.data.min_binding_energy() {
            warn!(
                "Incoming energy {} MeV is below every shell binding energy, \
                 using the Compton line",
                incoming_energy
            );

            return DopplerSample {
                outgoing_energy: compton_line,
                shell: None,
                electron_momentum_projection: 0.0,
                trials: 0,
                doppler_broadened: false,
            };
        }

        let mut trials = 0;
        let shell_data = loop {
            trials += 1;

            let shell_data = self
                .data
                .incoherent_scattering_vacancy_shell_data(rng.gen::<f64>());

            if incoming_energy >= shell_data.binding_energy {
                break shell_data;
            }

            debug!(
                "Shell {} binding energy {} MeV exceeds incoming energy {} MeV, redrawing",
                shell_data.shell, shell_data.binding_energy, incoming_energy
            );
        };

        let max_momentum = calculate_max_electron_momentum_projection(
            incoming_energy,
            shell_data.binding_energy,
            scattering_angle_cosine,
        );

        let electron_momentum_projection = self.data.sample_compton_profile_momentum(
            shell_data.compton_profile_index,
            rng.gen::<f64>(),
            max_momentum,
        );

        let result = calculate_doppler_broadened_energy(
            electron_momentum_projection,
            incoming_energy,
            scattering_angle_cosine,
        );

        let (outgoing_energy, doppler_broadened) = if result.energetically_possible {
            // Zero energies are not transportable
            if result.energy == 0.0 {
                (f64::MIN_POSITIVE, true)
            } else {
                (result.energy, true)
            }
        } else {
            (compton_line, false)
        };

        DopplerSample {
            outgoing_energy,
            shell: Some(shell_data.shell),
            electron_momentum_projection,
            trials,
            doppler_broadened,
        }
    }
}

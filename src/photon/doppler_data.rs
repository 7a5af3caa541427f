/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Doppler broadening data of one element

use std::collections::HashMap;

use log::debug;

use super::compton_profile::ComptonProfile;
use super::errors::{PhotonDataError, Result};
use super::shell_occupancy::{ShellOccupancyTable, VacancyShellData};

/// Shell occupancies, Compton profiles and shell kinetic energies
///
/// Immutable after construction; share it between threads with an `Arc`.
#[derive(Debug, Clone)]
pub struct PhotonDataDopplerBroadening {
    occupancy_table: ShellOccupancyTable,
    compton_profiles: Vec<ComptonProfile>,
    shell_kinetic_energies: HashMap<u32, f64>,
}

impl PhotonDataDopplerBroadening {
    /// Create the data set
    ///
    /// # Arguments
    ///
    /// * `occupancy_table` - Shell selection table
    /// * `compton_profiles` - Profiles indexed by the table's profile indices
    /// * `shell_kinetic_energies` - Mean electron kinetic energy per shell in MeV
    ///
    /// # Returns
    ///
    /// The data set, or an error when a shell refers to a missing profile or
    /// a kinetic energy is invalid
    pub fn new(
        occupancy_table: ShellOccupancyTable,
        compton_profiles: Vec<ComptonProfile>,
        shell_kinetic_energies: HashMap<u32, f64>,
    ) -> Result<Self> {
        let count = compton_profiles.len();

        if let Some(record) = occupancy_table
            .records()
            .iter()
            .find(|record| record.third >= count)
        {
            return Err(PhotonDataError::ProfileIndexOutOfRange {
                index: record.third,
                count,
            });
        }

        if let Some((shell, energy)) = shell_kinetic_energies
            .iter()
            .find(|&(_, &energy)| !(energy.is_finite() && energy >= 0.0))
        {
            return Err(PhotonDataError::InvalidOccupancy(format!(
                "shell {} has kinetic energy {}",
                shell, energy
            )));
        }

        debug!(
            "Doppler broadening data: {} shells, {} Compton profiles",
            occupancy_table.len(),
            count
        );

        Ok(Self {
            occupancy_table,
            compton_profiles,
            shell_kinetic_energies,
        })
    }

    /// The shell selection table
    pub fn occupancy_table(&self) -> &ShellOccupancyTable {
        &self.occupancy_table
    }

    /// Data of the shell selected by a CDF value in `[0, 1]`
    pub fn incoherent_scattering_vacancy_shell_data(&self, cdf: f64) -> VacancyShellData {
        self.occupancy_table.vacancy_shell_data(cdf)
    }

    /// Evaluate the CDF of a Compton profile at a momentum
    pub fn compton_profile_cdf(&self, compton_profile_index: usize, momentum: f64) -> f64 {
        debug_assert!(compton_profile_index < self.compton_profiles.len());

        self.compton_profiles[compton_profile_index].evaluate_cdf(momentum)
    }

    /// Find the momentum at which a Compton profile's CDF reaches `cdf`
    pub fn compton_profile_momentum(&self, compton_profile_index: usize, cdf: f64) -> f64 {
        debug_assert!(compton_profile_index < self.compton_profiles.len());

        self.compton_profiles[compton_profile_index].sample_momentum(cdf)
    }

    /// Sample a momentum from a Compton profile truncated at `max_momentum`
    pub fn sample_compton_profile_momentum(
        &self,
        compton_profile_index: usize,
        random_number: f64,
        max_momentum: f64,
    ) -> f64 {
        debug_assert!(compton_profile_index < self.compton_profiles.len());

        self.compton_profiles[compton_profile_index].sample_truncated(random_number, max_momentum)
    }

    /// A Compton profile
    pub fn compton_profile(&self, compton_profile_index: usize) -> Result<&ComptonProfile> {
        self.compton_profiles
            .get(compton_profile_index)
            .ok_or(PhotonDataError::ProfileIndexOutOfRange {
                index: compton_profile_index,
                count: self.compton_profiles.len(),
            })
    }

    /// Number of Compton profiles
    pub fn number_of_compton_profiles(&self) -> usize {
        self.compton_profiles.len()
    }

    /// Mean kinetic energy of the electrons of a shell, in MeV
    pub fn shell_kinetic_energy(&self, shell: u32) -> Result<f64> {
        self.shell_kinetic_energies
            .get(&shell)
            .copied()
            .ok_or(PhotonDataError::UnknownShell(shell))
    }

    /// Binding energy of an occupied shell, in MeV
    pub fn shell_binding_energy(&self, shell: u32) -> Result<f64> {
        self.occupancy_table
            .find_shell(shell)
            .map(|record| record.fourth)
            .ok_or(PhotonDataError::UnknownShell(shell))
    }

    /// Smallest binding energy of any occupied shell, in MeV
    pub fn min_binding_energy(&self) -> f64 {
        self.occupancy_table.min_binding_energy()
    }
}

/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Photon data and kinematics for incoherent scattering
//!
//! This module provides the Compton kinematics, the Doppler broadening
//! tables (shell occupancies and Compton profiles) and the sampler that
//! turns them into Doppler-broadened outgoing energies.

pub mod compton_profile;
pub mod doppler_data;
pub mod doppler_sampler;
pub mod errors;
pub mod kinematics;
pub mod shell_occupancy;

pub use compton_profile::{ComptonProfile, ComptonProfileRecord};
pub use doppler_data::PhotonDataDopplerBroadening;
pub use doppler_sampler::{DopplerBroadenedEnergySampler, DopplerSample};
pub use errors::{PhotonDataError, Result};
pub use kinematics::{
    calculate_compton_line_energy, calculate_doppler_broadened_energy,
    calculate_electron_momentum_projection, calculate_max_electron_momentum_projection,
    DopplerBroadenedEnergy, DOPPLER_ROOT_TOLERANCE,
};
pub use shell_occupancy::{ShellOccupancyRecord, ShellOccupancyTable, VacancyShellData};

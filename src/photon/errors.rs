/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Error types for photon data tables

use thiserror::Error;

use crate::utils::UtilsError;

/// Result type for photon data operations
pub type Result<T> = std::result::Result<T, PhotonDataError>;

/// Errors raised when building or querying photon data tables
#[derive(Error, Debug)]
pub enum PhotonDataError {
    #[error("Table error: {0}")]
    Table(#[from] UtilsError),

    #[error("Invalid Compton profile: {0}")]
    InvalidProfile(String),

    #[error("Invalid CDF: {0}")]
    InvalidCdf(String),

    #[error("Invalid shell occupancy: {0}")]
    InvalidOccupancy(String),

    #[error("Unknown shell: {0}")]
    UnknownShell(u32),

    #[error("Compton profile index {index} out of range for {count} profiles")]
    ProfileIndexOutOfRange { index: usize, count: usize },
}

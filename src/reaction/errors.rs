/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Error types for reaction construction

use thiserror::Error;

/// Result type for reaction operations
pub type Result<T> = std::result::Result<T, ReactionError>;

/// Errors raised when reaction data is malformed
#[derive(Error, Debug)]
pub enum ReactionError {
    /// The energy grid cannot be searched
    #[error("Grid error: {0}")]
    Grid(#[from] crate::grid::GridError),

    /// The energy grid holds values the interpolation policy cannot process
    #[error("Invalid energy grid: {0}")]
    InvalidEnergyGrid(String),

    /// The threshold index lies outside the energy grid
    #[error("Invalid threshold index: {0}")]
    InvalidThreshold(String),

    /// The cross section does not line up with the energy grid
    #[error("Cross section length mismatch: {0}")]
    LengthMismatch(String),

    /// A cross section value is negative, NaN or infinite
    #[error("Invalid cross section: {0}")]
    InvalidCrossSection(String),

    /// The grid searcher was built over a different grid
    #[error("Grid searcher mismatch: {0}")]
    SearcherMismatch(String),

    /// The reaction configuration is unusable
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

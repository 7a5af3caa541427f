/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Error types for grid construction

use thiserror::Error;

/// Result type for grid operations
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised when a grid or its search structure is malformed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// The grid has too few points to define a bin
    #[error("Grid must contain at least 2 points, found {0}")]
    TooFewPoints(usize),

    /// A grid value is NaN or infinite
    #[error("Grid value at index {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },

    /// The grid is not strictly ascending
    #[error("Grid must be strictly ascending (index {index}: {previous} >= {value})")]
    NotAscending {
        index: usize,
        previous: f64,
        value: f64,
    },

    /// A grid value cannot be log-hashed
    #[error("Grid must be strictly positive for log hashing (index {index}: {value})")]
    NonPositive { index: usize, value: f64 },

    /// The number of hash bins is not usable with this grid
    #[error("Hash bin count must be in [1, {grid_size}), found {hash_bins}")]
    InvalidHashBinCount { hash_bins: usize, grid_size: usize },

    /// The search bounds are outside of the grid or empty
    #[error("Invalid search bounds: {0}")]
    InvalidBounds(String),
}

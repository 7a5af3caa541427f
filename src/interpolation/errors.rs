/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Error types for the interpolation module

use thiserror::Error;

/// Errors that can occur when handling interpolation policies
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    /// The interpolation type name is not recognized
    #[error("Unknown interpolation type: {0}")]
    UnknownType(String),
}

/// Result type for interpolation operations
pub type Result<T> = std::result::Result<T, InterpolationError>;

/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Error types for the utils module

use thiserror::Error;

/// Errors that can occur in the utils module
#[derive(Error, Debug)]
pub enum UtilsError {
    /// A table had too few entries for the requested operation
    #[error("Table too short: {0}")]
    TableTooShort(String),

    /// A table column that must be sorted was not
    #[error("Unsorted table: {0}")]
    Unsorted(String),

    /// A table value outside its allowed range
    #[error("Invalid table value: {0}")]
    InvalidValue(String),
}

/// A specialized Result type for utils operations
pub type Result<T> = std::result::Result<T, UtilsError>;

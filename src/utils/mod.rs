/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Utility functions shared by the collision kernel
//!
//! This module provides physical constants, unit conversions, the small
//! fixed-arity record types used by the data tables and the bound searches
//! performed over them.

pub mod constants;
pub mod conversions;
pub mod errors;
pub mod search;
pub mod tuple;

pub use conversions::{
    atomic_momentum_to_mec, ev_to_mev, kev_to_mev, mec_to_atomic_momentum, mev_to_ev, mev_to_kev,
};
pub use errors::{Result, UtilsError};
pub use search::{check_ascending_column, lower_bound_index, upper_bound_index};
pub use tuple::{Pair, Quad, Trip};

/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! # frensie-rs
//!
//! The collision kernel of a Monte Carlo particle transport code.
//!
//! This crate evaluates reaction cross sections from tabulated data over a
//! shared, hashed energy grid and provides the photon kinematics and
//! Compton-profile tables used to sample Doppler-broadened incoherent
//! scattering.
//!
//! Data file parsing, particle banks, estimators and the transport loop are
//! left to the caller. Every table is immutable once built and can be shared
//! between threads with an `Arc`.

pub mod config;
pub mod grid;
pub mod interpolation;
pub mod photon;
pub mod reaction;
pub mod utils;

pub use config::ReactionConfig;
pub use grid::{GridSearcher, HashedGridSearcher};
pub use interpolation::{InterpolationPolicy, InterpolationType};
pub use reaction::{AtomicReaction, GenericAtomicReaction, ReactionFactory};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_information() {
        assert!(!VERSION.is_empty());
        assert!(!AUTHORS.is_empty());
    }
}

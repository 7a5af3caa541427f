/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Generic atomic reactions
//!
//! Every reaction type (elastic, incoherent, photoelectric, pair production,
//! ...) evaluates its cross section the same way: locate the energy in the
//! shared grid, then interpolate the tabulated cross section in that bin.
//! [`GenericAtomicReaction`] implements this once, specialized at compile
//! time on the interpolation policy and on whether the table is stored raw
//! or already processed. [`AtomicReaction`] is the object-safe view of a
//! reaction used when the policy is only known at run time.

pub mod errors;
pub mod factory;
pub mod generic;
pub mod representation;

use rayon::prelude::*;

use crate::interpolation::InterpolationType;

pub use errors::{ReactionError, Result};
pub use factory::{create_reaction, strip_leading_zeros, ReactionFactory};
pub use generic::{GenericAtomicReaction, ProcessedAtomicReaction, RawAtomicReaction};
pub use representation::{CrossSectionRepresentation, Processed, Raw};

/// Cross-section queries answered by every reaction
///
/// Energies are always passed unprocessed, whatever the storage of the
/// underlying table.
pub trait AtomicReaction: Send + Sync {
    /// Cross section at `energy`
    ///
    /// The energy must be within the energy grid (see
    /// [`is_energy_within_energy_grid`](Self::is_energy_within_energy_grid)).
    fn cross_section(&self, energy: f64) -> f64;

    /// Cross section at `energy` using a bin index the caller already knows
    ///
    /// `energy_grid[bin_index] <= energy <= energy_grid[bin_index + 1]` must
    /// hold. The index is trusted and only checked in debug builds.
    fn cross_section_in_bin(&self, energy: f64, bin_index: usize) -> f64;

    /// Check if an energy is within the energy grid
    fn is_energy_within_energy_grid(&self, energy: f64) -> bool;

    /// Lowest energy with a tabulated cross section
    fn threshold_energy(&self) -> f64;

    /// Highest energy of the grid
    fn max_energy(&self) -> f64;

    /// Interpolation policy of the table
    fn interpolation_type(&self) -> InterpolationType;

    /// Whether the table is stored in processed space
    fn is_processed(&self) -> bool;

    /// Evaluate the cross section at many energies in parallel
    ///
    /// Energies outside of the energy grid evaluate to zero.
    fn cross_sections(&self, energies: &[f64]) -> Vec<f64> {
        energies
            .par_iter()
            .map(|&energy| {
                if self.is_energy_within_energy_grid(energy) {
                    self.cross_section(energy)
                } else {
                    0.0
                }
            })
            .collect()
    }
}

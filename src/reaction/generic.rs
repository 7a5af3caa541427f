/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Cross-section evaluation shared by every atomic reaction

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::errors::{ReactionError, Result};
use super::representation::{CrossSectionRepresentation, Processed, Raw};
use super::AtomicReaction;
use crate::grid::{GridError, GridSearcher, LinearHashedGridSearcher, LogHashedGridSearcher};
use crate::interpolation::{Axis, InterpolationPolicy, InterpolationType};

/// Reaction over a raw table, located with a log-hashed searcher
pub type RawAtomicReaction<P> = GenericAtomicReaction<P, Raw, LogHashedGridSearcher>;

/// Reaction over a processed table, located with a linear-hashed searcher
pub type ProcessedAtomicReaction<P> = GenericAtomicReaction<P, Processed, LinearHashedGridSearcher>;

/// An atomic reaction with a tabulated cross section
///
/// The cross section is tabulated from `energy_grid[threshold_index]` up to
/// the end of the grid, so `cross_section[i]` belongs to
/// `energy_grid[threshold_index + i]`. Below the threshold the cross section
/// is zero.
///
/// The energy grid and the searcher are shared with the other reactions of
/// the same element; the reaction itself is immutable after construction.
pub struct GenericAtomicReaction<P, R, G = LogHashedGridSearcher>
where
    P: InterpolationPolicy,
    R: CrossSectionRepresentation,
    G: GridSearcher,
{
    energy_grid: Arc<[f64]>,
    cross_section: Arc<[f64]>,
    threshold_index: usize,
    grid_searcher: Arc<G>,
    _policy: PhantomData<(P, R)>,
}

impl<P, R, G> GenericAtomicReaction<P, R, G>
where
    P: InterpolationPolicy,
    R: CrossSectionRepresentation,
    G: GridSearcher,
{
    /// Create a reaction
    ///
    /// # Arguments
    ///
    /// * `energy_grid` - Shared energy grid, stored the way `R` describes
    /// * `cross_section` - Cross section from the threshold to the end of the grid
    /// * `threshold_index` - Grid index of the first tabulated cross section
    /// * `grid_searcher` - Searcher built over `energy_grid`
    ///
    /// # Returns
    ///
    /// The reaction, or the first inconsistency found in the data
    pub fn new(
        energy_grid: Arc<[f64]>,
        cross_section: impl Into<Arc<[f64]>>,
        threshold_index: usize,
        grid_searcher: Arc<G>,
    ) -> Result<Self> {
        let cross_section = cross_section.into();
        let grid_size = energy_grid.len();

        if grid_size < 2 {
            return Err(GridError::TooFewPoints(grid_size).into());
        }

        let searcher_grid = grid_searcher.grid();
        if !Arc::ptr_eq(searcher_grid, &energy_grid) && searcher_grid[..] != energy_grid[..] {
            return Err(ReactionError::SearcherMismatch(format!(
                "searcher grid has {} points, reaction grid has {} points",
                searcher_grid.len(),
                grid_size
            )));
        }

        if let Some((index, &energy)) = energy_grid.iter().enumerate().find(|&(_, &stored)| {
            let energy = R::to_raw::<P::Indep>(stored);
            !energy.is_finite() || !P::is_indep_var_in_valid_range(energy)
        }) {
            return Err(ReactionError::InvalidEnergyGrid(format!(
                "energy {} at index {} is not valid for {} interpolation",
                energy,
                index,
                P::name()
            )));
        }

        if threshold_index >= grid_size {
            return Err(ReactionError::InvalidThreshold(format!(
                "threshold index {} must be less than {}",
                threshold_index, grid_size
            )));
        }

        if cross_section.len() != grid_size - threshold_index {
            return Err(ReactionError::LengthMismatch(format!(
                "expected {} cross section values above threshold index {}, found {}",
                grid_size - threshold_index,
                threshold_index,
                cross_section.len()
            )));
        }

        if let Some((index, &value)) = cross_section.iter().enumerate().find(|&(_, &stored)| {
            let value = R::to_raw::<P::Dep>(stored);
            !(value.is_finite() && value >= 0.0)
        }) {
            return Err(ReactionError::InvalidCrossSection(format!(
                "value {} at index {} is not a finite non-negative cross section",
                value, index
            )));
        }

        Ok(Self {
            energy_grid,
            cross_section,
            threshold_index,
            grid_searcher,
            _policy: PhantomData,
        })
    }

    /// Index of the first grid point with a tabulated cross section
    pub fn threshold_energy_index(&self) -> usize {
        self.threshold_index
    }

    /// The shared energy grid, as stored
    pub fn energy_grid(&self) -> &Arc<[f64]> {
        &self.energy_grid
    }

    /// The tabulated cross section, as stored
    pub fn tabulated_cross_section(&self) -> &[f64] {
        &self.cross_section
    }

    /// The shared grid searcher
    pub fn grid_searcher(&self) -> &Arc<G> {
        &self.grid_searcher
    }

    #[inline]
    fn stored_energy(energy: f64) -> f64 {
        R::from_raw::<P::Indep>(energy)
    }
}

impl<P, R, G> AtomicReaction for GenericAtomicReaction<P, R, G>
where
    P: InterpolationPolicy,
    R: CrossSectionRepresentation,
    G: GridSearcher,
{
    fn cross_section(&self, energy: f64) -> f64 {
        debug_assert!(self.is_energy_within_energy_grid(energy));

        let bin_index = self
            .grid_searcher
            .find_lower_bin_index(Self::stored_energy(energy));

        self.cross_section_in_bin(energy, bin_index)
    }

    fn cross_section_in_bin(&self, energy: f64, bin_index: usize) -> f64 {
        debug_assert!(bin_index + 1 < self.energy_grid.len());
        debug_assert!({
            let stored = Self::stored_energy(energy);
            stored >= self.energy_grid[bin_index] && stored <= self.energy_grid[bin_index + 1]
        });

        if bin_index < self.threshold_index {
            return 0.0;
        }

        let cs_index = bin_index - self.threshold_index;

        let processed_energy = P::process_indep_var(energy);
        let processed_lower_energy = R::to_processed::<P::Indep>(self.energy_grid[bin_index]);
        let processed_upper_energy = R::to_processed::<P::Indep>(self.energy_grid[bin_index + 1]);

        let lower_cs = R::to_raw::<P::Dep>(self.cross_section[cs_index]);
        let upper_cs = R::to_raw::<P::Dep>(self.cross_section[cs_index + 1]);

        // Grid points return the tabulated value
        if processed_energy == processed_lower_energy {
            return lower_cs;
        }
        if processed_energy == processed_upper_energy {
            return upper_cs;
        }

        let processed_bin_width = processed_upper_energy - processed_lower_energy;

        // A zero end point has no log; interpolate linearly in this bin only
        if lower_cs == 0.0 || upper_cs == 0.0 {
            return lower_cs
                + (upper_cs - lower_cs) / processed_bin_width
                    * (processed_energy - processed_lower_energy);
        }

        let processed_lower_cs = R::to_processed::<P::Dep>(self.cross_section[cs_index]);
        let processed_upper_cs = R::to_processed::<P::Dep>(self.cross_section[cs_index + 1]);
        let processed_slope = (processed_upper_cs - processed_lower_cs) / processed_bin_width;

        P::interpolate(
            processed_lower_energy,
            processed_energy,
            processed_lower_cs,
            processed_slope,
        )
    }

    fn is_energy_within_energy_grid(&self, energy: f64) -> bool {
        <P::Indep as Axis>::is_in_valid_range(energy)
            && self
                .grid_searcher
                .is_value_within_bounds(Self::stored_energy(energy))
    }

    fn threshold_energy(&self) -> f64 {
        R::to_raw::<P::Indep>(self.energy_grid[self.threshold_index])
    }

    fn max_energy(&self) -> f64 {
        R::to_raw::<P::Indep>(self.energy_grid[self.energy_grid.len() - 1])
    }

    fn interpolation_type(&self) -> InterpolationType {
        P::interpolation_type()
    }

    fn is_processed(&self) -> bool {
        R::PROCESSED
    }
}

impl<P, R, G> Clone for GenericAtomicReaction<P, R, G>
where
    P: InterpolationPolicy,
    R: CrossSectionRepresentation,
    G: GridSearcher,
{
    fn clone(&self) -> Self {
        Self {
            energy_grid: Arc::clone(&self.energy_grid),
            cross_section: Arc::clone(&self.cross_section),
            threshold_index: self.threshold_index,
            grid_searcher: Arc::clone(&self.grid_searcher),
            _policy: PhantomData,
        }
    }
}

impl<P, R, G> fmt::Debug for GenericAtomicReaction<P, R, G>
where
    P: InterpolationPolicy,
    R: CrossSectionRepresentation,
    G: GridSearcher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericAtomicReaction")
            .field("interpolation", &P::name())
            .field("processed", &R::PROCESSED)
            .field("grid_size", &self.energy_grid.len())
            .field("threshold_index", &self.threshold_index)
            .finish()
    }
}

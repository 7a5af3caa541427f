/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Run-time reaction construction
//!
//! Data files announce the interpolation policy of each table as data, so
//! the policy is only known at run time. [`ReactionFactory`] owns the energy
//! grid and the grid searcher shared by all reactions of one element and
//! builds boxed [`AtomicReaction`]s from it.

use std::sync::Arc;

use log::debug;

use super::errors::Result;
use super::generic::{ProcessedAtomicReaction, RawAtomicReaction};
use super::AtomicReaction;
use crate::config::ReactionConfig;
use crate::grid::{LinearHashedGridSearcher, LogHashedGridSearcher};
use crate::interpolation::{InterpolationPolicy, InterpolationType, LinLin, LinLog, LogLin, LogLog};

#[derive(Debug, Clone)]
enum SharedSearcher {
    Log(Arc<LogHashedGridSearcher>),
    Linear(Arc<LinearHashedGridSearcher>),
}

/// Builds reactions over one shared energy grid
#[derive(Debug, Clone)]
pub struct ReactionFactory {
    config: ReactionConfig,
    energy_grid: Arc<[f64]>,
    searcher: SharedSearcher,
}

impl ReactionFactory {
    /// Create a factory and its grid searcher
    ///
    /// # Arguments
    ///
    /// * `config` - Interpolation policy, storage and hash bin count
    /// * `energy_grid` - Energy grid, processed when `config.processed` is set
    ///
    /// # Returns
    ///
    /// The factory or the reason the grid cannot be searched
    pub fn new(config: ReactionConfig, energy_grid: impl Into<Arc<[f64]>>) -> Result<Self> {
        config.validate()?;
        let energy_grid = energy_grid.into();

        let hash_bins = config
            .hash_grid_bins
            .min(energy_grid.len().saturating_sub(1));

        // Processed grids may hold logs, which can be negative
        let searcher = if config.processed {
            SharedSearcher::Linear(Arc::new(LinearHashedGridSearcher::new(
                Arc::clone(&energy_grid),
                hash_bins,
            )?))
        } else {
            SharedSearcher::Log(Arc::new(LogHashedGridSearcher::new(
                Arc::clone(&energy_grid),
                hash_bins,
            )?))
        };

        debug!(
            "Reaction factory: {} grid points, {} tables, {} hash bins",
            energy_grid.len(),
            if config.processed { "processed" } else { "raw" },
            hash_bins
        );

        Ok(Self {
            config,
            energy_grid,
            searcher,
        })
    }

    /// The settings reactions are built with
    pub fn config(&self) -> &ReactionConfig {
        &self.config
    }

    /// The shared energy grid
    pub fn energy_grid(&self) -> &Arc<[f64]> {
        &self.energy_grid
    }

    /// Hash bins of the shared searcher, after clamping to the grid
    pub fn hash_bins(&self) -> usize {
        match &self.searcher {
            SharedSearcher::Log(searcher) => searcher.hash_bins(),
            SharedSearcher::Linear(searcher) => searcher.hash_bins(),
        }
    }

    /// Build a reaction from a cross section tabulated from `threshold_index`
    pub fn create_reaction(
        &self,
        cross_section: Vec<f64>,
        threshold_index: usize,
    ) -> Result<Box<dyn AtomicReaction>> {
        match self.config.interpolation {
            InterpolationType::LinLin => self.build::<LinLin>(cross_section, threshold_index),
            InterpolationType::LinLog => self.build::<LinLog>(cross_section, threshold_index),
            InterpolationType::LogLin => self.build::<LogLin>(cross_section, threshold_index),
            InterpolationType::LogLog => self.build::<LogLog>(cross_section, threshold_index),
        }
    }

    /// Build a reaction after dropping the leading zeros of its cross section
    ///
    /// Tables often carry zeros below the physical threshold. Those are
    /// folded into the threshold index instead.
    pub fn create_reaction_without_leading_zeros(
        &self,
        cross_section: &[f64],
        threshold_index: usize,
    ) -> Result<Box<dyn AtomicReaction>> {
        let (zeros, stripped) = strip_leading_zeros(cross_section, self.config.processed);
        self.create_reaction(stripped, threshold_index + zeros)
    }

    fn build<P: InterpolationPolicy>(
        &self,
        cross_section: Vec<f64>,
        threshold_index: usize,
    ) -> Result<Box<dyn AtomicReaction>> {
        let grid = Arc::clone(&self.energy_grid);

        let reaction: Box<dyn AtomicReaction> = match &self.searcher {
            SharedSearcher::Log(searcher) => Box::new(RawAtomicReaction::<P>::new(
                grid,
                cross_section,
                threshold_index,
                Arc::clone(searcher),
            )?),
            SharedSearcher::Linear(searcher) => Box::new(ProcessedAtomicReaction::<P>::new(
                grid,
                cross_section,
                threshold_index,
                Arc::clone(searcher),
            )?),
        };

        Ok(reaction)
    }
}

/// Build a single reaction, with a searcher of its own
///
/// # Arguments
///
/// * `config` - Interpolation policy, storage and hash bin count
/// * `energy_grid` - Energy grid, processed when `config.processed` is set
/// * `cross_section` - Cross section from the threshold to the end of the grid
/// * `threshold_index` - Grid index of the first tabulated cross section
pub fn create_reaction(
    config: &ReactionConfig,
    energy_grid: impl Into<Arc<[f64]>>,
    cross_section: Vec<f64>,
    threshold_index: usize,
) -> Result<Box<dyn AtomicReaction>> {
    ReactionFactory::new(config.clone(), energy_grid)?
        .create_reaction(cross_section, threshold_index)
}

/// Remove the leading zeros of a cross section
///
/// A processed log cross section stores zeros as `-inf`, so `processed`
/// tables treat any non-finite negative value as zero too.
///
/// # Returns
///
/// The number of values removed, to be added to the threshold index, and
/// the remaining cross section. At least two values are always kept so the
/// reaction still has a bin to interpolate in.
pub fn strip_leading_zeros(cross_section: &[f64], processed: bool) -> (usize, Vec<f64>) {
    let is_zero = |value: f64| value == 0.0 || (processed && value == f64::NEG_INFINITY);

    let zeros = cross_section
        .iter()
        .take_while(|&&value| is_zero(value))
        .count()
        .min(cross_section.len().saturating_sub(2));

    (zeros, cross_section[zeros..].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reaction::ReactionError;
    use approx::assert_relative_eq;

    fn grid() -> Vec<f64> {
        vec![1e-3, 1e-2, 1e-1, 1.0]
    }

    #[test]
    fn test_factory_dispatch() {
        for interpolation in InterpolationType::ALL {
            let factory = ReactionFactory::new(ReactionConfig::raw(interpolation), grid()).unwrap();
            let reaction = factory
                .create_reaction(vec![10.0, 5.0, 2.0, 1.0], 0)
                .unwrap();

            assert_eq!(reaction.interpolation_type(), interpolation);
            assert!(!reaction.is_processed());
            assert_eq!(reaction.cross_section(1e-2), 5.0);
        }
    }

    #[test]
    fn test_processed_factory() {
        let processed_grid: Vec<f64> = grid().iter().map(|e| e.ln()).collect();
        let factory =
            ReactionFactory::new(ReactionConfig::processed(InterpolationType::LogLog), processed_grid)
                .unwrap();
        let reaction = factory
            .create_reaction([10.0f64, 5.0, 2.0, 1.0].iter().map(|s| s.ln()).collect(), 0)
            .unwrap();

        assert!(reaction.is_processed());
        let energy = (1e-3f64 * 1e-2).sqrt();
        assert_relative_eq!(
            reaction.cross_section(energy),
            50.0f64.sqrt(),
            max_relative = 1e-10
        );
    }

    #[test]
    fn test_hash_bins_clamped_to_grid() {
        let config = ReactionConfig::raw(InterpolationType::LinLin).with_hash_grid_bins(1000);
        let reaction = create_reaction(&config, grid(), vec![1.0, 2.0, 3.0, 4.0], 0).unwrap();

        assert_relative_eq!(reaction.cross_section(0.55), 3.5, epsilon = 1e-12);

        let factory = ReactionFactory::new(config.clone(), grid()).unwrap();
        assert_eq!(factory.hash_bins(), 3);
        assert_eq!(factory.config().hash_grid_bins, 1000);

        let factory = ReactionFactory::new(config.with_hash_grid_bins(2), grid()).unwrap();
        assert_eq!(factory.hash_bins(), 2);
    }

    #[test]
    fn test_invalid_grid() {
        let result = ReactionFactory::new(ReactionConfig::default(), vec![1.0]);
        assert!(matches!(result, Err(ReactionError::Grid(_))));

        let result = ReactionFactory::new(ReactionConfig::default(), vec![0.0, 1.0, 2.0]);
        assert!(matches!(result, Err(ReactionError::Grid(_))));
    }

    #[test]
    fn test_strip_leading_zeros() {
        assert_eq!(
            strip_leading_zeros(&[0.0, 0.0, 1.0, 2.0], false),
            (2, vec![1.0, 2.0])
        );
        assert_eq!(strip_leading_zeros(&[1.0, 2.0], false), (0, vec![1.0, 2.0]));
        assert_eq!(strip_leading_zeros(&[0.0, 0.0, 0.0], false), (1, vec![0.0, 0.0]));
        assert_eq!(
            strip_leading_zeros(&[f64::NEG_INFINITY, 0.5, 0.7], true),
            (1, vec![0.5, 0.7])
        );
        assert_eq!(
            strip_leading_zeros(&[f64::NEG_INFINITY, 0.5, 0.7], false),
            (0, vec![f64::NEG_INFINITY, 0.5, 0.7])
        );
    }

    #[test]
    fn test_create_without_leading_zeros() {
        let factory = ReactionFactory::new(ReactionConfig::default(), grid()).unwrap();
        let reaction = factory
            .create_reaction_without_leading_zeros(&[0.0, 0.0, 4.0, 1.0], 0)
            .unwrap();

        assert_eq!(reaction.threshold_energy(), 0.1);
        assert_eq!(reaction.cross_section(0.05), 0.0);
        assert_eq!(reaction.cross_section(0.1), 4.0);
    }
}

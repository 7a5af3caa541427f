/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Hash-based grid searcher
//!
//! The searchable range `[min, max]` is mapped into a hash space (the values
//! themselves, or their logarithms) and split into `hash_bins` uniform bins.
//! For each of the `hash_bins + 1` bin edges the lower-bound grid index is
//! found once with a full binary search and cached. A query computes its hash
//! bin directly and only has to binary search the grid points between the
//! cached indices of that bin's edges.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use log::debug;

use super::errors::{GridError, Result};
use super::GridSearcher;
use crate::interpolation::{Axis, Lin, Log};

/// Searcher whose hash bins are uniform in the grid values
pub type LinearHashedGridSearcher = HashedGridSearcher<Lin>;

/// Searcher whose hash bins are uniform in the logarithm of the grid values
pub type LogHashedGridSearcher = HashedGridSearcher<Log>;

/// Hash-based searcher over a shared, immutable, ascending grid
///
/// The type parameter selects the hash space. Grids spanning many decades
/// (raw energy grids) should use [`Log`]; grids that are already
/// log-transformed, or that may contain non-positive values, use [`Lin`].
pub struct HashedGridSearcher<S: Axis = Log> {
    grid: Arc<[f64]>,
    hash_grid: Vec<usize>,
    min_value: f64,
    max_value: f64,
    processed_min: f64,
    processed_length: f64,
    _space: PhantomData<S>,
}

impl<S: Axis> HashedGridSearcher<S> {
    /// Create a searcher over the whole grid
    ///
    /// # Arguments
    ///
    /// * `grid` - Strictly ascending grid (strictly positive for log hashing)
    /// * `hash_bins` - Number of hash bins, must be less than the grid size
    ///
    /// # Returns
    ///
    /// The searcher or the first grid invariant that is violated
    pub fn new(grid: Arc<[f64]>, hash_bins: usize) -> Result<Self> {
        let (min_value, max_value) = match (grid.first(), grid.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return Err(GridError::TooFewPoints(grid.len())),
        };

        Self::with_bounds(grid, min_value, max_value, hash_bins)
    }

    /// Create a searcher that only covers `[min_value, max_value]`
    ///
    /// # Arguments
    ///
    /// * `grid` - Strictly ascending grid (strictly positive for log hashing)
    /// * `min_value` - Lower search bound, `grid[0] <= min_value`
    /// * `max_value` - Upper search bound, `max_value <= grid[N-1]`
    /// * `hash_bins` - Number of hash bins, must be less than the grid size
    pub fn with_bounds(
        grid: Arc<[f64]>,
        min_value: f64,
        max_value: f64,
        hash_bins: usize,
    ) -> Result<Self> {
        validate_grid::<S>(&grid)?;

        if hash_bins == 0 || hash_bins >= grid.len() {
            return Err(GridError::InvalidHashBinCount {
                hash_bins,
                grid_size: grid.len(),
            });
        }

        let first = grid[0];
        let last = grid[grid.len() - 1];

        if !(min_value >= first && max_value <= last && min_value < max_value) {
            return Err(GridError::InvalidBounds(format!(
                "bounds [{}, {}] must be a non-empty range within the grid [{}, {}]",
                min_value, max_value, first, last
            )));
        }

        let processed_min = S::process(min_value);
        let processed_length = S::process(max_value) - processed_min;

        if !(processed_length > 0.0 && processed_length.is_finite()) {
            return Err(GridError::InvalidBounds(format!(
                "bounds [{}, {}] do not span a usable {} hash range",
                min_value,
                max_value,
                S::NAME
            )));
        }

        let last_bin = grid.len() - 2;
        let mut hash_grid = Vec::with_capacity(hash_bins + 1);

        for i in 0..=hash_bins {
            let anchor = if i == 0 {
                min_value
            } else if i == hash_bins {
                max_value
            } else {
                S::recover(processed_min + processed_length * i as f64 / hash_bins as f64)
            };

            // The last anchor would otherwise point one past the last bin
            let index = grid
                .partition_point(|&value| value <= anchor)
                .saturating_sub(1)
                .min(last_bin);

            hash_grid.push(index);
        }

        debug!(
            "Built {}-hashed grid searcher: {} grid points, {} hash bins over [{:e}, {:e}]",
            S::NAME,
            grid.len(),
            hash_bins,
            min_value,
            max_value
        );

        Ok(Self {
            grid,
            hash_grid,
            min_value,
            max_value,
            processed_min,
            processed_length,
            _space: PhantomData,
        })
    }

    /// Lower search bound
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    /// Upper search bound
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Number of hash bins
    pub fn hash_bins(&self) -> usize {
        self.hash_grid.len() - 1
    }

    /// The cached lower-bound grid index of every hash bin edge
    pub fn hash_grid(&self) -> &[usize] {
        &self.hash_grid
    }

    fn hash_index(&self, value: f64) -> usize {
        let hash_bins = self.hash_bins();
        let position =
            (S::process(value) - self.processed_min) / self.processed_length * hash_bins as f64;

        // Negative positions and NaN saturate to 0
        (position.floor() as usize).min(hash_bins - 1)
    }
}

impl<S: Axis> GridSearcher for HashedGridSearcher<S> {
    fn grid(&self) -> &Arc<[f64]> {
        &self.grid
    }

    fn is_value_within_bounds(&self, value: f64) -> bool {
        // The hash transform is monotonic, so the bounds can be compared
        // unprocessed. NaN fails both comparisons.
        value >= self.min_value && value <= self.max_value
    }

    fn find_lower_bin_index(&self, value: f64) -> usize {
        debug_assert!(
            self.is_value_within_bounds(value),
            "value {} is outside of the searchable range [{}, {}]",
            value,
            self.min_value,
            self.max_value
        );

        let hash_index = self.hash_index(value);

        // Widen by one point on each side to absorb rounding in the hash
        let lower = self.hash_grid[hash_index].saturating_sub(1);
        let upper = (self.hash_grid[hash_index + 1] + 1).min(self.grid.len() - 2);

        let count = self.grid[lower..=upper].partition_point(|&point| point <= value);

        lower + count.saturating_sub(1)
    }
}

impl<S: Axis> fmt::Debug for HashedGridSearcher<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedGridSearcher")
            .field("hash_space", &S::NAME)
            .field("grid_size", &self.grid.len())
            .field("hash_bins", &self.hash_bins())
            .field("min_value", &self.min_value)
            .field("max_value", &self.max_value)
            .finish()
    }
}

/// Check that a grid can be searched in the hash space `S`
///
/// The grid must hold at least two finite, strictly ascending values, all of
/// which must be valid inputs to the hash transform.
pub fn validate_grid<S: Axis>(grid: &[f64]) -> Result<()> {
    if grid.len() < 2 {
        return Err(GridError::TooFewPoints(grid.len()));
    }

    for (index, &value) in grid.iter().enumerate() {
        if !value.is_finite() {
            return Err(GridError::NonFinite { index, value });
        }

        if !S::is_in_valid_range(value) {
            return Err(GridError::NonPositive { index, value });
        }

        if index > 0 && grid[index - 1] >= value {
            return Err(GridError::NotAscending {
                index,
                previous: grid[index - 1],
                value,
            });
        }
    }

    Ok(())
}

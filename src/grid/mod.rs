/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Energy grid searching
//!
//! Reactions for one element share a single, often very large, energy grid.
//! Every cross-section evaluation starts by locating the query energy in that
//! grid, so the search has to be cheap. [`HashedGridSearcher`] caches the
//! grid location of uniformly spaced anchor points so that each query only
//! needs a binary search over a handful of grid points.

pub mod errors;
pub mod hashed;

use std::sync::Arc;

pub use errors::{GridError, Result};
pub use hashed::{HashedGridSearcher, LinearHashedGridSearcher, LogHashedGridSearcher};

/// Locates values in an ascending grid
pub trait GridSearcher: Send + Sync {
    /// The grid that is searched
    fn grid(&self) -> &Arc<[f64]>;

    /// Check if a value lies within the searchable bounds
    ///
    /// This never panics, whatever the value.
    fn is_value_within_bounds(&self, value: f64) -> bool;

    /// Find the index of the lower boundary of the grid bin holding `value`
    ///
    /// The value must be within bounds. The returned index `i` satisfies
    /// `grid[i] <= value < grid[i + 1]`, except that the last grid point
    /// maps to the last bin.
    fn find_lower_bin_index(&self, value: f64) -> usize;
}

/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Bound searches over sorted tables
//!
//! The data tables in this crate are slices of records sorted on one of their
//! fields. These helpers locate a value in such a table through a key
//! accessor, so the same search serves the momentum and the CDF columns of a
//! Compton profile or the CDF column of a shell occupancy table.

use super::errors::{Result, UtilsError};

/// Find the lower boundary of the bin that contains `value`
///
/// # Arguments
///
/// * `table` - Records sorted in ascending order of `key`
/// * `value` - The value to locate
/// * `key` - Accessor for the sorted field of a record
///
/// # Returns
///
/// The index `i` such that `key(table[i]) <= value < key(table[i + 1])`.
/// A value equal to the last key maps to the last bin (`table.len() - 2`).
/// Values below the first key map to bin 0.
///
/// The table must contain at least two records.
pub fn lower_bound_index<T, F>(table: &[T], value: f64, key: F) -> usize
where
    F: Fn(&T) -> f64,
{
    debug_assert!(table.len() > 1, "a bin search needs at least two records");

    let count = table.partition_point(|record| key(record) <= value);

    count.saturating_sub(1).min(table.len() - 2)
}

/// Find the upper boundary of the bin that contains `value`
///
/// # Arguments
///
/// * `table` - Records sorted in ascending order of `key`
/// * `value` - The value to locate
/// * `key` - Accessor for the sorted field of a record
///
/// # Returns
///
/// The index of the first record whose key is greater than or equal to
/// `value`. Values above the last key map to the last record.
pub fn upper_bound_index<T, F>(table: &[T], value: f64, key: F) -> usize
where
    F: Fn(&T) -> f64,
{
    debug_assert!(!table.is_empty(), "cannot search an empty table");

    table
        .partition_point(|record| key(record) < value)
        .min(table.len() - 1)
}

/// Check that a table column is finite and ascending
///
/// # Arguments
///
/// * `table` - The table to check
/// * `min_len` - Minimum number of records
/// * `column` - Name of the column, used in error messages
/// * `key` - Accessor for the column
///
/// Equal neighbouring values are allowed, so the check applies to CDF
/// columns with flat segments as well as to grids.
pub fn check_ascending_column<T, F>(table: &[T], min_len: usize, column: &str, key: F) -> Result<()>
where
    F: Fn(&T) -> f64,
{
    if table.len() < min_len {
        return Err(UtilsError::TableTooShort(format!(
            "{} column needs at least {} values, found {}",
            column,
            min_len,
            table.len()
        )));
    }

    if let Some(index) = table.iter().position(|record| !key(record).is_finite()) {
        return Err(UtilsError::InvalidValue(format!(
            "{} value {} at index {} is not finite",
            column,
            key(&table[index]),
            index
        )));
    }

    if let Some(index) = table.windows(2).position(|pair| key(&pair[1]) < key(&pair[0])) {
        return Err(UtilsError::Unsorted(format!(
            "{} column must be ascending, {} follows {} at index {}",
            column,
            key(&table[index + 1]),
            key(&table[index]),
            index + 1
        )));
    }

    Ok(())
}

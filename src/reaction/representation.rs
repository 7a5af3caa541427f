/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Raw and processed table storage
//!
//! Evaluated libraries such as EPDL ship physical cross sections. ACE tables
//! ship the grid and cross sections already transformed into the
//! interpolation policy's processed space (e.g. natural logs for LogLog), so
//! that evaluation is a plain linear interpolation. The two storage schemes
//! are marker types so the reaction evaluator specializes at compile time.
//!
//! For a processed table with a log dependent axis, a physical zero cross
//! section is stored as `-inf`.

use crate::interpolation::Axis;

/// How the values of a table relate to their physical values
///
/// The axis type parameter is the transform of the axis the stored value
/// belongs to.
pub trait CrossSectionRepresentation: Send + Sync + 'static {
    /// Whether values are stored in processed space
    const PROCESSED: bool;

    /// Convert a stored value into the axis' processed space
    fn to_processed<A: Axis>(stored: f64) -> f64;

    /// Convert a stored value into its physical value
    fn to_raw<A: Axis>(stored: f64) -> f64;

    /// Convert a physical value into its stored form
    fn from_raw<A: Axis>(raw: f64) -> f64;
}

/// Tables hold physical values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Raw;

/// Tables hold values already transformed by the interpolation policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Processed;

impl CrossSectionRepresentation for Raw {
    const PROCESSED: bool = false;

    #[inline]
    fn to_processed<A: Axis>(stored: f64) -> f64 {
        A::process(stored)
    }

    #[inline]
    fn to_raw<A: Axis>(stored: f64) -> f64 {
        stored
    }

    #[inline]
    fn from_raw<A: Axis>(raw: f64) -> f64 {
        raw
    }
}

impl CrossSectionRepresentation for Processed {
    const PROCESSED: bool = true;

    #[inline]
    fn to_processed<A: Axis>(stored: f64) -> f64 {
        stored
    }

    #[inline]
    fn to_raw<A: Axis>(stored: f64) -> f64 {
        A::recover(stored)
    }

    #[inline]
    fn from_raw<A: Axis>(raw: f64) -> f64 {
        A::process(raw)
    }
}

/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Interpolation policies
//!
//! Tabulated physics data is interpolated linearly in a *processed* space:
//! each axis is either left alone (`Lin`) or log-transformed (`Log`). A
//! policy pairs a dependent axis with an independent axis and is named
//! `<dependent><independent>`, so [`LogLin`] interpolates `ln(y)` linearly in
//! `x` while [`LinLog`] interpolates `y` linearly in `ln(x)`.
//!
//! Policies are zero-sized types used as generic parameters, so the choice of
//! policy is resolved at compile time. [`InterpolationType`] is the runtime
//! tag used when the policy comes from configuration data.

pub mod errors;
pub mod policy;

pub use errors::{InterpolationError, Result};
pub use policy::{
    Axis, InterpolationPolicy, InterpolationType, Lin, LinLin, LinLog, Log, LogLin, LogLog,
};

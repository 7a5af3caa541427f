/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Axis transforms and the four two-axis interpolation policies

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::InterpolationError;

/// A transform applied to one axis of a table before linear interpolation
pub trait Axis: Send + Sync + 'static {
    /// Short name of the axis transform ("Lin" or "Log")
    const NAME: &'static str;

    /// Map a value into processed space
    fn process(value: f64) -> f64;

    /// Map a processed value back to its original space
    fn recover(processed_value: f64) -> f64;

    /// Check whether a value can be processed (NaN and inf are not checked)
    fn is_in_valid_range(value: f64) -> bool;
}

/// Identity axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lin;

/// Natural-log axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Log;

impl Axis for Lin {
    const NAME: &'static str = "Lin";

    #[inline]
    fn process(value: f64) -> f64 {
        value
    }

    #[inline]
    fn recover(processed_value: f64) -> f64 {
        processed_value
    }

    #[inline]
    fn is_in_valid_range(_value: f64) -> bool {
        true
    }
}

impl Axis for Log {
    const NAME: &'static str = "Log";

    #[inline]
    fn process(value: f64) -> f64 {
        value.ln()
    }

    #[inline]
    fn recover(processed_value: f64) -> f64 {
        processed_value.exp()
    }

    #[inline]
    fn is_in_valid_range(value: f64) -> bool {
        value > 0.0
    }
}

/// Runtime tag for the interpolation policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterpolationType {
    LinLin,
    LinLog,
    LogLin,
    LogLog,
}

impl InterpolationType {
    /// All interpolation types
    pub const ALL: [InterpolationType; 4] = [
        InterpolationType::LinLin,
        InterpolationType::LinLog,
        InterpolationType::LogLin,
        InterpolationType::LogLog,
    ];

    /// The name of the policy
    pub fn name(&self) -> &'static str {
        match self {
            InterpolationType::LinLin => "LinLin",
            InterpolationType::LinLog => "LinLog",
            InterpolationType::LogLin => "LogLin",
            InterpolationType::LogLog => "LogLog",
        }
    }

    /// Whether the dependent axis is log-transformed
    pub fn is_dep_axis_log(&self) -> bool {
        matches!(self, InterpolationType::LogLin | InterpolationType::LogLog)
    }

    /// Whether the independent axis is log-transformed
    pub fn is_indep_axis_log(&self) -> bool {
        matches!(self, InterpolationType::LinLog | InterpolationType::LogLog)
    }
}

impl fmt::Display for InterpolationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InterpolationType {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linlin" | "lin-lin" => Ok(InterpolationType::LinLin),
            "linlog" | "lin-log" => Ok(InterpolationType::LinLog),
            "loglin" | "log-lin" => Ok(InterpolationType::LogLin),
            "loglog" | "log-log" => Ok(InterpolationType::LogLog),
            _ => Err(InterpolationError::UnknownType(s.to_string())),
        }
    }
}

/// A two-axis interpolation policy
///
/// Everything is derived from the two axis transforms. The processed
/// interpolation is a straight line in processed space:
///
/// `y' = y0' + slope' * (x' - x0')`
///
/// where primes denote processed values.
pub trait InterpolationPolicy: Send + Sync + 'static {
    /// Transform of the dependent (y) axis
    type Dep: Axis;

    /// Transform of the independent (x) axis
    type Indep: Axis;

    /// The runtime tag of this policy
    fn interpolation_type() -> InterpolationType;

    /// The name of the policy
    fn name() -> &'static str {
        Self::interpolation_type().name()
    }

    /// Process the independent value
    #[inline]
    fn process_indep_var(indep_var: f64) -> f64 {
        Self::Indep::process(indep_var)
    }

    /// Process the dependent value
    #[inline]
    fn process_dep_var(dep_var: f64) -> f64 {
        Self::Dep::process(dep_var)
    }

    /// Recover the processed independent value
    #[inline]
    fn recover_processed_indep_var(processed_indep_var: f64) -> f64 {
        Self::Indep::recover(processed_indep_var)
    }

    /// Recover the processed dependent value
    #[inline]
    fn recover_processed_dep_var(processed_dep_var: f64) -> f64 {
        Self::Dep::recover(processed_dep_var)
    }

    /// Test if the independent value is in a valid range
    fn is_indep_var_in_valid_range(indep_var: f64) -> bool {
        Self::Indep::is_in_valid_range(indep_var)
    }

    /// Test if the dependent value is in a valid range
    fn is_dep_var_in_valid_range(dep_var: f64) -> bool {
        Self::Dep::is_in_valid_range(dep_var)
    }

    /// Interpolate from a processed lower point and processed slope
    ///
    /// # Arguments
    ///
    /// * `processed_indep_var_0` - Processed independent value of the lower point
    /// * `processed_indep_var` - Processed independent value to evaluate at
    /// * `processed_dep_var_0` - Processed dependent value of the lower point
    /// * `processed_slope` - Slope between the two bracketing points in processed space
    ///
    /// # Returns
    ///
    /// The unprocessed dependent value
    #[inline]
    fn interpolate(
        processed_indep_var_0: f64,
        processed_indep_var: f64,
        processed_dep_var_0: f64,
        processed_slope: f64,
    ) -> f64 {
        Self::recover_processed_dep_var(Self::interpolate_and_process(
            processed_indep_var_0,
            processed_indep_var,
            processed_dep_var_0,
            processed_slope,
        ))
    }

    /// Interpolate from a processed lower point and slope, returning the
    /// processed dependent value
    #[inline]
    fn interpolate_and_process(
        processed_indep_var_0: f64,
        processed_indep_var: f64,
        processed_dep_var_0: f64,
        processed_slope: f64,
    ) -> f64 {
        processed_dep_var_0 + processed_slope * (processed_indep_var - processed_indep_var_0)
    }

    /// Interpolate between two unprocessed points
    ///
    /// # Arguments
    ///
    /// * `indep_var_0` - Independent value of the lower point
    /// * `indep_var_1` - Independent value of the upper point
    /// * `indep_var` - Independent value to evaluate at
    /// * `dep_var_0` - Dependent value of the lower point
    /// * `dep_var_1` - Dependent value of the upper point
    ///
    /// # Returns
    ///
    /// The unprocessed dependent value at `indep_var`
    fn interpolate_between(
        indep_var_0: f64,
        indep_var_1: f64,
        indep_var: f64,
        dep_var_0: f64,
        dep_var_1: f64,
    ) -> f64 {
        debug_assert!(indep_var_0 < indep_var_1);
        debug_assert!(indep_var >= indep_var_0 && indep_var <= indep_var_1);

        let processed_indep_var_0 = Self::process_indep_var(indep_var_0);
        let processed_dep_var_0 = Self::process_dep_var(dep_var_0);
        let processed_slope = (Self::process_dep_var(dep_var_1) - processed_dep_var_0)
            / (Self::process_indep_var(indep_var_1) - processed_indep_var_0);

        Self::interpolate(
            processed_indep_var_0,
            Self::process_indep_var(indep_var),
            processed_dep_var_0,
            processed_slope,
        )
    }
}

/// Linear in y, linear in x
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinLin;

/// Linear in y, log in x
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinLog;

/// Log in y, linear in x
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogLin;

/// Log in y, log in x
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogLog;

impl InterpolationPolicy for LinLin {
    type Dep = Lin;
    type Indep = Lin;

    fn interpolation_type() -> InterpolationType {
        InterpolationType::LinLin
    }
}

impl InterpolationPolicy for LinLog {
    type Dep = Lin;
    type Indep = Log;

    fn interpolation_type() -> InterpolationType {
        InterpolationType::LinLog
    }
}

impl InterpolationPolicy for LogLin {
    type Dep = Log;
    type Indep = Lin;

    fn interpolation_type() -> InterpolationType {
        InterpolationType::LogLin
    }
}

impl InterpolationPolicy for LogLog {
    type Dep = Log;
    type Indep = Log;

    fn interpolation_type() -> InterpolationType {
        InterpolationType::LogLog
    }
}

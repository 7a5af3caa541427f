/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Small fixed-arity records
//!
//! The tabulated data is stored as arrays of two, three or four field
//! records, e.g. `(cdf, shell, compton_profile_index, binding_energy)` or
//! `(momentum, cdf, pdf, slope)`. Records have no identity beyond their
//! values and are copied freely.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A two field record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair<T1, T2> {
    pub first: T1,
    pub second: T2,
}

/// A three field record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trip<T1, T2, T3> {
    pub first: T1,
    pub second: T2,
    pub third: T3,
}

/// A four field record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quad<T1, T2, T3, T4> {
    pub first: T1,
    pub second: T2,
    pub third: T3,
    pub fourth: T4,
}

impl<T1, T2> Pair<T1, T2> {
    /// Create a new pair
    pub fn new(first: T1, second: T2) -> Self {
        Self { first, second }
    }
}

impl<T1, T2, T3> Trip<T1, T2, T3> {
    /// Create a new trip
    pub fn new(first: T1, second: T2, third: T3) -> Self {
        Self {
            first,
            second,
            third,
        }
    }
}

impl<T1, T2, T3, T4> Quad<T1, T2, T3, T4> {
    /// Create a new quad
    pub fn new(first: T1, second: T2, third: T3, fourth: T4) -> Self {
        Self {
            first,
            second,
            third,
            fourth,
        }
    }
}

impl<T1: fmt::Display, T2: fmt::Display> fmt::Display for Pair<T1, T2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.first, self.second)
    }
}

impl<T1: fmt::Display, T2: fmt::Display, T3: fmt::Display> fmt::Display for Trip<T1, T2, T3> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}}}", self.first, self.second, self.third)
    }
}

impl<T1, T2, T3, T4> fmt::Display for Quad<T1, T2, T3, T4>
where
    T1: fmt::Display,
    T2: fmt::Display,
    T3: fmt::Display,
    T4: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}, {}, {}, {}}}",
            self.first, self.second, self.third, self.fourth
        )
    }
}

impl<T1, T2> From<(T1, T2)> for Pair<T1, T2> {
    fn from((first, second): (T1, T2)) -> Self {
        Self::new(first, second)
    }
}

impl<T1, T2, T3> From<(T1, T2, T3)> for Trip<T1, T2, T3> {
    fn from((first, second, third): (T1, T2, T3)) -> Self {
        Self::new(first, second, third)
    }
}

impl<T1, T2, T3, T4> From<(T1, T2, T3, T4)> for Quad<T1, T2, T3, T4> {
    fn from((first, second, third, fourth): (T1, T2, T3, T4)) -> Self {
        Self::new(first, second, third, fourth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_equality() {
        let a = Quad::new(0.5, 1u32, 0usize, 1.0e-3);
        let b = Quad::from((0.5, 1u32, 0usize, 1.0e-3));
        assert_eq!(a, b);

        let c = Quad::new(0.5, 2u32, 0usize, 1.0e-3);
        assert_ne!(a, c);
    }

    #[test]
    fn test_tuple_display() {
        assert_eq!(Pair::new(1, 2.5).to_string(), "{1, 2.5}");
        assert_eq!(Trip::new(1, 2, 3).to_string(), "{1, 2, 3}");
        assert_eq!(Quad::new(0.25, 1, 2, 0.5).to_string(), "{0.25, 1, 2, 0.5}");
    }
}

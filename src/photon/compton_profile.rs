/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Compton profile tables
//!
//! A Compton profile is the distribution of the projection of a bound
//! electron's momentum on the photon scattering vector. Profiles are stored
//! as piecewise-linear PDFs: each record holds the momentum, the CDF and PDF
//! at that momentum, and the slope of the PDF up to the next record. With a
//! linear PDF the CDF inside a bin is a quadratic, so the forward evaluation
//! and the inverse used for sampling are both closed form.

use log::debug;

use super::errors::{PhotonDataError, Result};
use crate::utils::{check_ascending_column, lower_bound_index, Quad};

/// Largest deviation from one allowed for the last CDF value of a table
pub const CDF_NORMALIZATION_TOLERANCE: f64 = 1e-10;

/// A `(momentum, cdf, pdf, slope)` record of a Compton profile
pub type ComptonProfileRecord = Quad<f64, f64, f64, f64>;

/// A tabulated Compton profile
#[derive(Debug, Clone, PartialEq)]
pub struct ComptonProfile {
    records: Vec<ComptonProfileRecord>,
}

impl ComptonProfile {
    /// Build a profile from tabulated momentum and profile values
    ///
    /// The profile does not need to be normalized. The CDF is integrated
    /// with the trapezoid rule and both the PDF and the CDF are divided by
    /// the total area.
    ///
    /// # Arguments
    ///
    /// * `momentum` - Strictly ascending momentum grid in units of `m_e c`
    /// * `profile` - Non-negative profile values on the momentum grid
    pub fn from_tabulated(momentum: &[f64], profile: &[f64]) -> Result<Self> {
        if momentum.len() != profile.len() {
            return Err(PhotonDataError::InvalidProfile(format!(
                "{} momentum values but {} profile values",
                momentum.len(),
                profile.len()
            )));
        }

        check_ascending_column(momentum, 2, "momentum", |p| *p)?;
        check_strictly_ascending(momentum)?;

        let invalid = profile
            .iter()
            .position(|&value| !(value.is_finite() && value >= 0.0));

        if let Some(index) = invalid {
            return Err(PhotonDataError::InvalidProfile(format!(
                "profile value {} at index {} must be finite and non-negative",
                profile[index], index
            )));
        }

        let mut cdf = Vec::with_capacity(momentum.len());
        cdf.push(0.0);
        for i in 1..momentum.len() {
            let area = 0.5 * (profile[i] + profile[i - 1]) * (momentum[i] - momentum[i - 1]);
            cdf.push(cdf[i - 1] + area);
        }

        let norm = cdf[cdf.len() - 1];
        if !(norm > 0.0 && norm.is_finite()) {
            return Err(PhotonDataError::InvalidProfile(format!(
                "profile must have a positive finite area, found {}",
                norm
            )));
        }

        let pdf: Vec<f64> = profile.iter().map(|value| value / norm).collect();

        let mut records: Vec<ComptonProfileRecord> = momentum
            .iter()
            .zip(cdf.iter())
            .zip(pdf.iter())
            .map(|((&p, &c), &f)| Quad::new(p, c / norm, f, 0.0))
            .collect();

        for i in 0..records.len() - 1 {
            records[i].fourth = (records[i + 1].third - records[i].third)
                / (records[i + 1].first - records[i].first);
        }

        // Pin the end of the CDF against rounding
        let last = records.len() - 1;
        records[last].second = 1.0;

        debug!(
            "Compton profile: {} points over [{}, {}]",
            records.len(),
            records[0].first,
            records[last].first
        );

        Ok(Self { records })
    }

    /// Build a full profile from a half profile tabulated for `p >= 0`
    ///
    /// The profile is mirrored onto negative momenta. The first momentum
    /// must be zero.
    pub fn from_half_profile(momentum: &[f64], profile: &[f64]) -> Result<Self> {
        if momentum.first() != Some(&0.0) {
            return Err(PhotonDataError::InvalidProfile(
                "half profiles must start at zero momentum".to_string(),
            ));
        }
        if momentum.len() != profile.len() {
            return Err(PhotonDataError::InvalidProfile(format!(
                "{} momentum values but {} profile values",
                momentum.len(),
                profile.len()
            )));
        }

        let full_momentum: Vec<f64> = momentum[1..]
            .iter()
            .rev()
            .map(|p| -p)
            .chain(momentum.iter().copied())
            .collect();
        let full_profile: Vec<f64> = profile[1..]
            .iter()
            .rev()
            .chain(profile.iter())
            .copied()
            .collect();

        Self::from_tabulated(&full_momentum, &full_profile)
    }

    /// Build a profile from precomputed records
    ///
    /// The records are validated: strictly ascending momentum, ascending
    /// CDF from 0 to 1 and non-negative finite PDF values.
    pub fn from_records(records: Vec<ComptonProfileRecord>) -> Result<Self> {
        check_ascending_column(&records, 2, "momentum", |r| r.first)?;
        check_strictly_ascending(&records.iter().map(|r| r.first).collect::<Vec<_>>())?;
        check_ascending_column(&records, 2, "cdf", |r| r.second)?;

        let first_cdf = records[0].second;
        let last_cdf = records[records.len() - 1].second;
        if first_cdf != 0.0 || (last_cdf - 1.0).abs() > CDF_NORMALIZATION_TOLERANCE {
            return Err(PhotonDataError::InvalidCdf(format!(
                "profile CDF must run from 0 to 1, found [{}, {}]",
                first_cdf, last_cdf
            )));
        }

        if let Some(record) = records
            .iter()
            .find(|r| !(r.third.is_finite() && r.third >= 0.0 && r.fourth.is_finite()))
        {
            return Err(PhotonDataError::InvalidProfile(format!(
                "record {} has an invalid pdf or slope",
                record
            )));
        }

        Ok(Self { records })
    }

    /// The `(momentum, cdf, pdf, slope)` records
    pub fn records(&self) -> &[ComptonProfileRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Profiles always hold at least two records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lowest tabulated momentum
    pub fn lower_momentum_bound(&self) -> f64 {
        self.records[0].first
    }

    /// Highest tabulated momentum
    pub fn upper_momentum_bound(&self) -> f64 {
        self.records[self.records.len() - 1].first
    }

    /// Evaluate the CDF at a momentum
    ///
    /// Momenta below the table give 0 and momenta above it give 1.
    pub fn evaluate_cdf(&self, momentum: f64) -> f64 {
        if momentum <= self.lower_momentum_bound() {
            return 0.0;
        }
        if momentum >= self.upper_momentum_bound() {
            return 1.0;
        }

        let record = &self.records[lower_bound_index(&self.records, momentum, |r| r.first)];
        let delta = momentum - record.first;

        (record.second + record.third * delta + 0.5 * record.fourth * delta * delta).clamp(0.0, 1.0)
    }

    /// Evaluate the normalized profile at a momentum
    ///
    /// Momenta outside of the table give 0.
    pub fn evaluate_pdf(&self, momentum: f64) -> f64 {
        if momentum < self.lower_momentum_bound() || momentum > self.upper_momentum_bound() {
            return 0.0;
        }

        let record = &self.records[lower_bound_index(&self.records, momentum, |r| r.first)];

        (record.third + record.fourth * (momentum - record.first)).max(0.0)
    }

    /// Find the momentum at which the CDF reaches `cdf`
    ///
    /// This is the exact inverse of [`evaluate_cdf`](Self::evaluate_cdf).
    /// The quadratic is solved in the rationalized form
    /// `2 dc / (pdf + sqrt(pdf^2 + 2 slope dc))`, which stays accurate for
    /// small slopes and reduces to `dc / pdf` when the slope is zero.
    pub fn sample_momentum(&self, cdf: f64) -> f64 {
        debug_assert!((0.0..=1.0).contains(&cdf));

        let index = lower_bound_index(&self.records, cdf, |r| r.second);
        let record = &self.records[index];
        let next_momentum = self.records[index + 1].first;

        let delta_cdf = cdf - record.second;
        if delta_cdf <= 0.0 {
            return record.first;
        }

        let discriminant = (record.third * record.third + 2.0 * record.fourth * delta_cdf).max(0.0);
        let denominator = record.third + discriminant.sqrt();

        if denominator <= 0.0 {
            return record.first;
        }

        (record.first + 2.0 * delta_cdf / denominator).min(next_momentum)
    }

    /// Sample a momentum from the profile truncated at `max_momentum`
    ///
    /// # Arguments
    ///
    /// * `random_number` - Uniform random number in `[0, 1]`
    /// * `max_momentum` - Largest momentum that may be sampled
    pub fn sample_truncated(&self, random_number: f64, max_momentum: f64) -> f64 {
        if max_momentum >= self.upper_momentum_bound() {
            return self.sample_momentum(random_number);
        }

        let max_cdf = self.evaluate_cdf(max_momentum);

        self.sample_momentum(random_number * max_cdf).min(max_momentum)
    }
}

fn check_strictly_ascending(values: &[f64]) -> Result<()> {
    match values.windows(2).position(|pair| pair[1] <= pair[0]) {
        Some(index) => Err(PhotonDataError::InvalidProfile(format!(
            "momentum must be strictly ascending, {} follows {} at index {}",
            values[index + 1],
            values[index],
            index + 1
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle_profile() -> ComptonProfile {
        ComptonProfile::from_tabulated(&[-1.0, 0.0, 1.0], &[0.0, 2.0, 0.0]).unwrap()
    }

    #[test]
    fn test_from_tabulated() {
        let profile = triangle_profile();
        let records = profile.records();

        assert_eq!(records.len(), 3);
        assert_relative_eq!(records[1].second, 0.5);
        assert_relative_eq!(records[1].third, 1.0);
        assert_relative_eq!(records[0].fourth, 1.0);
        assert_relative_eq!(records[1].fourth, -1.0);
        assert_eq!(records[2].fourth, 0.0);
        assert_eq!(records[2].second, 1.0);
    }

    #[test]
    fn test_evaluate_cdf() {
        let profile = triangle_profile();

        assert_eq!(profile.evaluate_cdf(-2.0), 0.0);
        assert_eq!(profile.evaluate_cdf(2.0), 1.0);
        assert_relative_eq!(profile.evaluate_cdf(-0.5), 0.125);
        assert_relative_eq!(profile.evaluate_cdf(0.0), 0.5);
        assert_relative_eq!(profile.evaluate_cdf(0.5), 0.875);
    }

    #[test]
    fn test_evaluate_pdf() {
        let profile = triangle_profile();

        assert_relative_eq!(profile.evaluate_pdf(-0.5), 0.5);
        assert_relative_eq!(profile.evaluate_pdf(0.0), 1.0);
        assert_eq!(profile.evaluate_pdf(1.5), 0.0);
    }

    #[test]
    fn test_sample_momentum_inverts_cdf() {
        let profile = triangle_profile();

        for cdf in [0.0, 0.01, 0.125, 0.3, 0.5, 0.7, 0.875, 0.99, 1.0] {
            let momentum = profile.sample_momentum(cdf);
            assert_relative_eq!(profile.evaluate_cdf(momentum), cdf, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_flat_profile() {
        let profile = ComptonProfile::from_tabulated(&[-1.0, 1.0], &[3.0, 3.0]).unwrap();

        assert_relative_eq!(profile.sample_momentum(0.25), -0.5, epsilon = 1e-12);
        assert_relative_eq!(profile.evaluate_cdf(0.5), 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_truncated() {
        let profile = triangle_profile();

        assert_relative_eq!(profile.sample_truncated(1.0, 0.0), 0.0, epsilon = 1e-12);
        assert!(profile.sample_truncated(0.999, -0.5) <= -0.5);
        assert_relative_eq!(
            profile.sample_truncated(0.5, 5.0),
            profile.sample_momentum(0.5)
        );
    }

    #[test]
    fn test_half_profile() {
        let profile = ComptonProfile::from_half_profile(&[0.0, 1.0], &[2.0, 0.0]).unwrap();

        assert_eq!(profile, triangle_profile());
        assert!(ComptonProfile::from_half_profile(&[0.5, 1.0], &[2.0, 0.0]).is_err());
    }

    #[test]
    fn test_from_records() {
        let profile = ComptonProfile::from_records(triangle_profile().records().to_vec()).unwrap();
        assert_eq!(profile, triangle_profile());

        let bad_cdf = vec![Quad::new(0.0, 0.0, 1.0, 0.0), Quad::new(1.0, 0.5, 1.0, 0.0)];
        assert!(matches!(
            ComptonProfile::from_records(bad_cdf),
            Err(PhotonDataError::InvalidCdf(_))
        ));
    }

    #[test]
    fn test_invalid_tabulation() {
        assert!(ComptonProfile::from_tabulated(&[0.0], &[1.0]).is_err());
        assert!(ComptonProfile::from_tabulated(&[0.0, 1.0], &[1.0]).is_err());
        assert!(ComptonProfile::from_tabulated(&[0.0, 0.0], &[1.0, 1.0]).is_err());
        assert!(ComptonProfile::from_tabulated(&[0.0, 1.0], &[-1.0, 1.0]).is_err());
        assert!(ComptonProfile::from_tabulated(&[0.0, 1.0], &[0.0, 0.0]).is_err());
    }
}

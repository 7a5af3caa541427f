/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Shell occupancy tables
//!
//! Incoherent scattering picks the shell that is left with a vacancy in
//! proportion to the shell occupancies. The table stores the discrete CDF of
//! the occupancies together with the data needed once a shell is chosen.

use log::debug;

use super::compton_profile::CDF_NORMALIZATION_TOLERANCE;
use super::errors::{PhotonDataError, Result};
use crate::utils::{upper_bound_index, Quad};

/// A `(cdf, shell, compton_profile_index, binding_energy)` record
pub type ShellOccupancyRecord = Quad<f64, u32, usize, f64>;

/// Data of the shell chosen for an incoherent scattering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VacancyShellData {
    /// Shell identifier
    pub shell: u32,
    /// Index of the shell's Compton profile
    pub compton_profile_index: usize,
    /// Binding energy of the shell in MeV
    pub binding_energy: f64,
}

/// Discrete CDF over the shells of an atom
#[derive(Debug, Clone, PartialEq)]
pub struct ShellOccupancyTable {
    records: Vec<ShellOccupancyRecord>,
}

impl ShellOccupancyTable {
    /// Build the table from shell occupancies
    ///
    /// # Arguments
    ///
    /// * `shells` - `(shell, occupancy, binding_energy)` per shell. The
    ///   position of a shell in this slice is the index of its Compton
    ///   profile.
    ///
    /// Shells with zero occupancy can never be chosen and are left out of
    /// the CDF.
    pub fn from_occupancies(shells: &[(u32, f64, f64)]) -> Result<Self> {
        let invalid = shells.iter().find(|&&(_, occupancy, binding_energy)| {
            !(occupancy.is_finite() && occupancy >= 0.0)
                || !(binding_energy.is_finite() && binding_energy >= 0.0)
        });

        if let Some(&(shell, occupancy, binding_energy)) = invalid {
            return Err(PhotonDataError::InvalidOccupancy(format!(
                "shell {} has occupancy {} and binding energy {}",
                shell, occupancy, binding_energy
            )));
        }

        let total: f64 = shells.iter().map(|&(_, occupancy, _)| occupancy).sum();
        if total <= 0.0 {
            return Err(PhotonDataError::InvalidOccupancy(
                "at least one shell must be occupied".to_string(),
            ));
        }

        let mut cumulative = 0.0;
        let mut records: Vec<ShellOccupancyRecord> = shells
            .iter()
            .enumerate()
            .filter(|&(_, &(_, occupancy, _))| occupancy > 0.0)
            .map(|(index, &(shell, occupancy, binding_energy))| {
                cumulative += occupancy;
                Quad::new(cumulative / total, shell, index, binding_energy)
            })
            .collect();

        if let Some(last) = records.last_mut() {
            last.first = 1.0;
        }

        debug!("Shell occupancy table: {} occupied shells", records.len());

        Ok(Self { records })
    }

    /// Build the table from precomputed records
    ///
    /// The CDF column must be strictly ascending, positive and end at 1.
    pub fn from_records(records: Vec<ShellOccupancyRecord>) -> Result<Self> {
        let last_cdf = match records.last() {
            Some(record) => record.first,
            None => {
                return Err(PhotonDataError::InvalidCdf(
                    "shell occupancy table is empty".to_string(),
                ))
            }
        };

        let ascending = records[0].first > 0.0
            && records.windows(2).all(|pair| pair[1].first > pair[0].first);

        if !ascending || (last_cdf - 1.0).abs() > CDF_NORMALIZATION_TOLERANCE {
            return Err(PhotonDataError::InvalidCdf(
                "shell CDF must be strictly ascending in (0, 1] and end at 1".to_string(),
            ));
        }

        if let Some(record) = records
            .iter()
            .find(|r| !(r.fourth.is_finite() && r.fourth >= 0.0))
        {
            return Err(PhotonDataError::InvalidOccupancy(format!(
                "shell {} has binding energy {}",
                record.second, record.fourth
            )));
        }

        Ok(Self { records })
    }

    /// The `(cdf, shell, compton_profile_index, binding_energy)` records
    pub fn records(&self) -> &[ShellOccupancyRecord] {
        &self.records
    }

    /// Number of occupied shells
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Tables always hold at least one shell
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find the shell for a CDF value in `[0, 1]`
    pub fn vacancy_shell_data(&self, cdf: f64) -> VacancyShellData {
        debug_assert!((0.0..=1.0).contains(&cdf));

        let record = &self.records[upper_bound_index(&self.records, cdf, |r| r.first)];

        VacancyShellData {
            shell: record.second,
            compton_profile_index: record.third,
            binding_energy: record.fourth,
        }
    }

    /// Look up the record of a shell
    pub fn find_shell(&self, shell: u32) -> Option<&ShellOccupancyRecord> {
        self.records.iter().find(|record| record.second == shell)
    }

    /// Smallest binding energy of any occupied shell
    pub fn min_binding_energy(&self) -> f64 {
        self.records
            .iter()
            .map(|record| record.fourth)
            .fold(f64::INFINITY, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn neon_like() -> ShellOccupancyTable {
        ShellOccupancyTable::from_occupancies(&[
            (1, 2.0, 8.7e-4),
            (3, 2.0, 4.9e-5),
            (5, 6.0, 2.2e-5),
        ])
        .unwrap()
    }

    #[test]
    fn test_discrete_cdf() {
        let table = neon_like();
        let records = table.records();

        assert_relative_eq!(records[0].first, 0.2);
        assert_relative_eq!(records[1].first, 0.4);
        assert_eq!(records[2].first, 1.0);
        assert_eq!(records[2].third, 2);
    }

    #[test]
    fn test_vacancy_shell_data() {
        let table = neon_like();

        assert_eq!(table.vacancy_shell_data(0.0).shell, 1);
        assert_eq!(table.vacancy_shell_data(0.2).shell, 1);
        assert_eq!(table.vacancy_shell_data(0.21).shell, 3);

        let data = table.vacancy_shell_data(1.0);
        assert_eq!(data.shell, 5);
        assert_eq!(data.compton_profile_index, 2);
        assert_eq!(data.binding_energy, 2.2e-5);
    }

    #[test]
    fn test_unoccupied_shells_are_skipped() {
        let table =
            ShellOccupancyTable::from_occupancies(&[(1, 0.0, 1e-3), (2, 1.0, 1e-4)]).unwrap();

        assert_eq!(table.len(), 1);
        let data = table.vacancy_shell_data(0.0);
        assert_eq!(data.shell, 2);
        assert_eq!(data.compton_profile_index, 1);
    }

    #[test]
    fn test_min_binding_energy() {
        assert_eq!(neon_like().min_binding_energy(), 2.2e-5);
        assert!(neon_like().find_shell(3).is_some());
        assert!(neon_like().find_shell(4).is_none());
    }

    #[test]
    fn test_invalid_tables() {
        assert!(ShellOccupancyTable::from_occupancies(&[]).is_err());
        assert!(ShellOccupancyTable::from_occupancies(&[(1, 0.0, 1e-3)]).is_err());
        assert!(ShellOccupancyTable::from_occupancies(&[(1, -1.0, 1e-3)]).is_err());
        assert!(ShellOccupancyTable::from_records(vec![]).is_err());
        assert!(
            ShellOccupancyTable::from_records(vec![Quad::new(0.5, 1, 0, 1e-3)]).is_err()
        );
        assert!(ShellOccupancyTable::from_records(vec![
            Quad::new(0.5, 1, 0, 1e-3),
            Quad::new(1.0, 2, 1, 1e-4),
        ])
        .is_ok());
    }
}

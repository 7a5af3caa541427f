/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Unit conversion utilities

use super::constants;

/// Convert energy from MeV to eV
pub fn mev_to_ev(mev: f64) -> f64 {
    mev * constants::MEV_TO_EV
}

/// Convert energy from eV to MeV
pub fn ev_to_mev(ev: f64) -> f64 {
    ev / constants::MEV_TO_EV
}

/// Convert energy from MeV to keV
pub fn mev_to_kev(mev: f64) -> f64 {
    mev * constants::MEV_TO_KEV
}

/// Convert energy from keV to MeV
pub fn kev_to_mev(kev: f64) -> f64 {
    kev / constants::MEV_TO_KEV
}

/// Convert an electron momentum from atomic units to units of m_e*c
///
/// Compton profile tables are usually published on an atomic-unit momentum
/// grid; the kinematics work in units of m_e*c.
pub fn atomic_momentum_to_mec(momentum: f64) -> f64 {
    momentum * constants::FINE_STRUCTURE_CONSTANT
}

/// Convert an electron momentum from units of m_e*c to atomic units
pub fn mec_to_atomic_momentum(momentum: f64) -> f64 {
    momentum * constants::INVERSE_FINE_STRUCTURE_CONSTANT
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_conversions() {
        let mev = 0.662;
        let ev = mev_to_ev(mev);
        assert_relative_eq!(ev_to_mev(ev), mev, epsilon = 1e-12);

        let kev = mev_to_kev(mev);
        assert_relative_eq!(kev, 662.0, epsilon = 1e-9);
        assert_relative_eq!(kev_to_mev(kev), mev, epsilon = 1e-12);
    }

    #[test]
    fn test_momentum_conversions() {
        let q = 100.0;
        let pz = atomic_momentum_to_mec(q);
        assert_relative_eq!(pz, 0.72973525698, epsilon = 1e-12);
        assert_relative_eq!(mec_to_atomic_momentum(pz), q, epsilon = 1e-9);
    }
}

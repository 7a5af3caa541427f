/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Physical constants used in the collision kernel

/// Electron rest mass energy in MeV (2010 CODATA)
pub const ELECTRON_REST_MASS_ENERGY: f64 = 0.510998910;

/// Fine structure constant (2010 CODATA)
pub const FINE_STRUCTURE_CONSTANT: f64 = 7.2973525698e-3;

/// Inverse of the fine structure constant
pub const INVERSE_FINE_STRUCTURE_CONSTANT: f64 = 1.0 / FINE_STRUCTURE_CONSTANT;

/// Conversion from MeV to eV
pub const MEV_TO_EV: f64 = 1.0e6;

/// Conversion from MeV to keV
pub const MEV_TO_KEV: f64 = 1.0e3;

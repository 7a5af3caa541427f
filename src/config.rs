/*
MIT License with FRENSIE Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FRENSIE
Copyright (c) FRENSIE Project, University of Wisconsin-Madison.
All rights reserved.
*/

//! Reaction construction settings
//!
//! A [`ReactionConfig`] carries the choices the data-loading side makes when
//! it assembles reactions: which interpolation policy the table uses, whether
//! the table has already been processed into that policy's space, and how
//! many hash bins the shared grid searcher gets.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::interpolation::InterpolationType;

/// Default number of hash bins for a grid searcher
pub const DEFAULT_HASH_GRID_BINS: usize = 100;

/// Errors raised while loading or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Settings used to build reactions over one energy grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionConfig {
    /// Interpolation policy of the tabulated cross sections
    pub interpolation: InterpolationType,
    /// Whether grid and cross sections are stored in processed space
    pub processed: bool,
    /// Number of hash bins of the shared grid searcher
    pub hash_grid_bins: usize,
}

impl Default for ReactionConfig {
    fn default() -> Self {
        Self {
            interpolation: InterpolationType::LogLog,
            processed: false,
            hash_grid_bins: DEFAULT_HASH_GRID_BINS,
        }
    }
}

impl ReactionConfig {
    /// Create a configuration for raw tables
    pub fn raw(interpolation: InterpolationType) -> Self {
        Self {
            interpolation,
            ..Self::default()
        }
    }

    /// Create a configuration for processed tables
    pub fn processed(interpolation: InterpolationType) -> Self {
        Self {
            interpolation,
            processed: true,
            ..Self::default()
        }
    }

    /// Set the number of hash bins
    pub fn with_hash_grid_bins(mut self, hash_grid_bins: usize) -> Self {
        self.hash_grid_bins = hash_grid_bins;
        self
    }

    /// Parse and validate a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serialize the configuration to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the configuration for values that cannot build a reaction
    pub fn validate(&self) -> Result<()> {
        if self.hash_grid_bins == 0 {
            return Err(ConfigError::Invalid(
                "hash_grid_bins must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReactionConfig::default();
        assert_eq!(config.interpolation, InterpolationType::LogLog);
        assert!(!config.processed);
        assert_eq!(config.hash_grid_bins, DEFAULT_HASH_GRID_BINS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ReactionConfig::from_json_str(r#"{ "interpolation": "LinLog" }"#).unwrap();
        assert_eq!(config.interpolation, InterpolationType::LinLog);
        assert!(!config.processed);
        assert_eq!(config.hash_grid_bins, DEFAULT_HASH_GRID_BINS);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            ReactionConfig::from_json_str(r#"{ "hash_grid_bins": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ReactionConfig::from_json_str(r#"{ "interpolation": "Histogram" }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = ReactionConfig::processed(InterpolationType::LogLin).with_hash_grid_bins(250);
        let json = config.to_json_string().unwrap();
        assert_eq!(ReactionConfig::from_json_str(&json).unwrap(), config);
    }
}

//! Run configuration with documented defaults
//!
//! The defaults describe the reference scenario: a California-sized region
//! with 50-300 mm rainfall events arriving at 0.2 per year, simulated for
//! ten years from a fixed seed.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::RegionBounds;

/// Complete configuration for a simulation run.
///
/// Loadable from a TOML file; any omitted field falls back to the reference
/// scenario value. Scalar validity (bound ordering, positive rate) is checked
/// when the config is turned into simulator inputs, not at parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Mean number of flood events per year (Poisson intensity)
    pub flood_rate_per_year: f64,

    /// Exposure period to simulate, in years
    pub years: f64,

    /// Seed for the random source; the same seed reproduces the same run
    pub seed: u64,

    pub region: RegionConfig,
    pub rainfall: RainfallConfig,
}

/// Geographic rectangle to sample event locations from, in degrees
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    pub min_longitude: f64,
    pub max_longitude: f64,
    pub min_latitude: f64,
    pub max_latitude: f64,
}

/// Per-event rainfall range in millimetres
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RainfallConfig {
    pub min_mm: f64,
    pub max_mm: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            flood_rate_per_year: 0.2,
            years: 10.0,
            seed: 42,
            region: RegionConfig::default(),
            rainfall: RainfallConfig::default(),
        }
    }
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            min_longitude: -125.0,
            max_longitude: -114.0,
            min_latitude: 32.0,
            max_latitude: 42.0,
        }
    }
}

impl Default for RainfallConfig {
    fn default() -> Self {
        Self { min_mm: 50.0, max_mm: 300.0 }
    }
}

impl SimulationConfig {
    /// Parse a configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config = toml::from_str(toml_str)?;
        Ok(config)
    }

    /// Load a configuration from a TOML file on disk
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Validate the region section into typed bounds
    pub fn region_bounds(&self) -> Result<RegionBounds> {
        RegionBounds::new(
            self.region.min_longitude,
            self.region.max_longitude,
            self.region.min_latitude,
            self.region.max_latitude,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::HazardError;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        let bounds = config.region_bounds().unwrap();
        assert_eq!(bounds.min_longitude(), -125.0);
        assert_eq!(bounds.max_latitude(), 42.0);
        assert_eq!(config.flood_rate_per_year, 0.2);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
            flood_rate_per_year = 1.5
            years = 25.0
            seed = 7

            [region]
            min_longitude = -95.0
            max_longitude = -74.0
            min_latitude = 41.0
            max_latitude = 56.0

            [rainfall]
            min_mm = 20.0
            max_mm = 120.0
        "#;
        let config = SimulationConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.flood_rate_per_year, 1.5);
        assert_eq!(config.years, 25.0);
        assert_eq!(config.seed, 7);
        assert_eq!(config.region.min_longitude, -95.0);
        assert_eq!(config.rainfall.max_mm, 120.0);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config = SimulationConfig::from_toml("years = 3.0").unwrap();
        assert_eq!(config.years, 3.0);
        assert_eq!(config.flood_rate_per_year, 0.2);
        assert_eq!(config.rainfall.min_mm, 50.0);
    }

    #[test]
    fn test_inverted_region_rejected_on_validation() {
        let toml_str = r#"
            [region]
            min_longitude = -74.0
            max_longitude = -95.0
        "#;
        let config = SimulationConfig::from_toml(toml_str).unwrap();
        let err = config.region_bounds().unwrap_err();
        assert!(matches!(err, HazardError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = SimulationConfig::from_toml("years = [not a number").unwrap_err();
        assert!(matches!(err, HazardError::ConfigError(_)));
    }
}

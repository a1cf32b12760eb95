//! Core type definitions used throughout the codebase

use geo_types::{Coord, Rect};
use serde::{Deserialize, Serialize};

use crate::core::error::{HazardError, Result};

/// Rectangular geographic region in degrees.
///
/// Both axes must satisfy min <= max; this is checked once at construction
/// and the bounds are immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBounds {
    rect: Rect<f64>,
}

impl RegionBounds {
    pub fn new(
        min_longitude: f64,
        max_longitude: f64,
        min_latitude: f64,
        max_latitude: f64,
    ) -> Result<Self> {
        if !min_longitude.is_finite()
            || !max_longitude.is_finite()
            || !min_latitude.is_finite()
            || !max_latitude.is_finite()
        {
            return Err(HazardError::InvalidConfiguration(
                "region bounds must be finite".to_string(),
            ));
        }
        if min_longitude > max_longitude {
            return Err(HazardError::InvalidConfiguration(format!(
                "longitude bounds are inverted: {} > {}",
                min_longitude, max_longitude
            )));
        }
        if min_latitude > max_latitude {
            return Err(HazardError::InvalidConfiguration(format!(
                "latitude bounds are inverted: {} > {}",
                min_latitude, max_latitude
            )));
        }
        Ok(Self {
            rect: Rect::new(
                Coord { x: min_longitude, y: min_latitude },
                Coord { x: max_longitude, y: max_latitude },
            ),
        })
    }

    pub fn min_longitude(&self) -> f64 {
        self.rect.min().x
    }

    pub fn max_longitude(&self) -> f64 {
        self.rect.max().x
    }

    pub fn min_latitude(&self) -> f64 {
        self.rect.min().y
    }

    pub fn max_latitude(&self) -> f64 {
        self.rect.max().y
    }

    /// Width of the region in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// Height of the region in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    pub fn contains(&self, longitude: f64, latitude: f64) -> bool {
        longitude >= self.min_longitude()
            && longitude <= self.max_longitude()
            && latitude >= self.min_latitude()
            && latitude <= self.max_latitude()
    }
}

/// A single simulated flood event.
///
/// Produced by the simulator and never mutated afterwards. Events within one
/// simulation are an unordered bag: `occurrence_time_yr` is a sampled
/// inter-arrival time kept as data, not a position on a shared timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloodEvent {
    pub longitude: f64,
    pub latitude: f64,
    pub rainfall_mm: f64,
    pub flood_depth_m: f64,
    pub occurrence_time_yr: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_accessors() {
        let bounds = RegionBounds::new(-125.0, -114.0, 32.0, 42.0).unwrap();
        assert_eq!(bounds.min_longitude(), -125.0);
        assert_eq!(bounds.max_longitude(), -114.0);
        assert_eq!(bounds.min_latitude(), 32.0);
        assert_eq!(bounds.max_latitude(), 42.0);
        assert_eq!(bounds.width(), 11.0);
        assert_eq!(bounds.height(), 10.0);
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = RegionBounds::new(-125.0, -114.0, 32.0, 42.0).unwrap();
        assert!(bounds.contains(-120.0, 37.0));
        assert!(bounds.contains(-125.0, 32.0));
        assert!(bounds.contains(-114.0, 42.0));
        assert!(!bounds.contains(-113.0, 37.0));
        assert!(!bounds.contains(-120.0, 43.0));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = RegionBounds::new(-114.0, -125.0, 32.0, 42.0).unwrap_err();
        assert!(matches!(err, HazardError::InvalidConfiguration(_)));

        let err = RegionBounds::new(-125.0, -114.0, 42.0, 32.0).unwrap_err();
        assert!(matches!(err, HazardError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_degenerate_bounds_allowed() {
        // A point region is a valid (if odd) configuration
        let bounds = RegionBounds::new(-120.0, -120.0, 37.0, 37.0).unwrap();
        assert!(bounds.contains(-120.0, 37.0));
        assert_eq!(bounds.width(), 0.0);
    }

    #[test]
    fn test_event_serde_round_trip() {
        let event = FloodEvent {
            longitude: -120.5,
            latitude: 37.25,
            rainfall_mm: 180.0,
            flood_depth_m: 1.2,
            occurrence_time_yr: 3.4,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: FloodEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}

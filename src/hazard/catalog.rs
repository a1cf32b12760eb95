//! Simulation output and serialization

use std::time::Duration;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::types::FloodEvent;

/// Complete output of one simulation run: the events plus run statistics.
///
/// Plain data for downstream consumers (printers, map renderers); the events
/// keep the order they were generated in, which carries no meaning.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventCatalog {
    pub events: Vec<FloodEvent>,
    pub statistics: CatalogStats,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogStats {
    pub event_count: u32,
    pub years_simulated: f64,
    pub mean_rainfall_mm: f64,
    pub max_flood_depth_m: f64,
    pub simulation_time_ms: u64,
}

impl EventCatalog {
    pub fn new(events: Vec<FloodEvent>, years: f64, elapsed: Duration) -> Self {
        let event_count = events.len() as u32;
        let mean_rainfall_mm = if events.is_empty() {
            0.0
        } else {
            events.iter().map(|e| e.rainfall_mm).sum::<f64>() / events.len() as f64
        };
        let max_flood_depth_m = events
            .iter()
            .map(|e| OrderedFloat(e.flood_depth_m))
            .max()
            .map(|d| d.0)
            .unwrap_or(0.0);

        Self {
            events,
            statistics: CatalogStats {
                event_count,
                years_simulated: years,
                mean_rainfall_mm,
                max_flood_depth_m,
                simulation_time_ms: elapsed.as_millis() as u64,
            },
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn summary(&self) -> String {
        format!(
            "{} flood events over {} years in {}ms\nmean rainfall {:.1} mm, max depth {:.2} m",
            self.statistics.event_count,
            self.statistics.years_simulated,
            self.statistics.simulation_time_ms,
            self.statistics.mean_rainfall_mm,
            self.statistics.max_flood_depth_m,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(rainfall_mm: f64, flood_depth_m: f64) -> FloodEvent {
        FloodEvent {
            longitude: -120.0,
            latitude: 37.0,
            rainfall_mm,
            flood_depth_m,
            occurrence_time_yr: 1.0,
        }
    }

    #[test]
    fn test_stats_over_events() {
        let catalog = EventCatalog::new(
            vec![event(100.0, 0.5), event(200.0, 1.5), event(300.0, 1.0)],
            10.0,
            Duration::from_millis(12),
        );
        assert_eq!(catalog.statistics.event_count, 3);
        assert_eq!(catalog.statistics.mean_rainfall_mm, 200.0);
        assert_eq!(catalog.statistics.max_flood_depth_m, 1.5);
        assert_eq!(catalog.statistics.years_simulated, 10.0);
        assert_eq!(catalog.statistics.simulation_time_ms, 12);
    }

    #[test]
    fn test_empty_catalog_stats() {
        let catalog = EventCatalog::new(Vec::new(), 5.0, Duration::ZERO);
        assert_eq!(catalog.statistics.event_count, 0);
        assert_eq!(catalog.statistics.mean_rainfall_mm, 0.0);
        assert_eq!(catalog.statistics.max_flood_depth_m, 0.0);
    }

    #[test]
    fn test_summary_mentions_count_and_years() {
        let catalog =
            EventCatalog::new(vec![event(150.0, 0.8)], 10.0, Duration::from_millis(1));
        let summary = catalog.summary();
        assert!(summary.contains("1 flood events"));
        assert!(summary.contains("10 years"));
    }
}

//! Terrain capabilities queried during event generation
//!
//! The simulator only ever asks two questions about a location: how high is
//! it, and how far is it from the nearest river. Both are modelled as
//! single-method traits so callers can back them with real terrain datasets,
//! caches, or fixtures. Lookups are expected to return finite values; the
//! simulator performs no checking or recovery on their output.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::error::{HazardError, Result};
use crate::core::types::RegionBounds;

/// Ground elevation in metres at a coordinate
pub trait ElevationModel {
    fn elevation_m(&self, longitude: f64, latitude: f64) -> f64;
}

/// Distance in kilometres from a coordinate to the nearest river
pub trait RiverProximity {
    fn distance_km(&self, longitude: f64, latitude: f64) -> f64;
}

/// Adapter that lets a plain `Fn(lon, lat) -> value` closure serve as either
/// terrain capability
pub struct LookupFn<F>(pub F);

impl<F> ElevationModel for LookupFn<F>
where
    F: Fn(f64, f64) -> f64,
{
    fn elevation_m(&self, longitude: f64, latitude: f64) -> f64 {
        (self.0)(longitude, latitude)
    }
}

impl<F> RiverProximity for LookupFn<F>
where
    F: Fn(f64, f64) -> f64,
{
    fn distance_km(&self, longitude: f64, latitude: f64) -> f64 {
        (self.0)(longitude, latitude)
    }
}

/// Terrain that answers every query with the same value.
///
/// Useful for fixed scenarios and tests where the depth formula's inputs
/// need to be exact.
#[derive(Debug, Clone, Copy)]
pub struct FlatTerrain {
    pub elevation: f64,
    pub distance: f64,
}

impl ElevationModel for FlatTerrain {
    fn elevation_m(&self, _longitude: f64, _latitude: f64) -> f64 {
        self.elevation
    }
}

impl RiverProximity for FlatTerrain {
    fn distance_km(&self, _longitude: f64, _latitude: f64) -> f64 {
        self.distance
    }
}

/// Row-major raster of values covering a region, nearest-cell lookup.
///
/// One grid holds one quantity; build separate grids for elevation and river
/// proximity. Queries outside the region snap to the nearest edge cell.
#[derive(Debug, Clone)]
pub struct TerrainGrid {
    bounds: RegionBounds,
    width: usize,
    height: usize,
    cells: Vec<f64>,
}

impl TerrainGrid {
    pub fn from_cells(
        bounds: RegionBounds,
        width: usize,
        height: usize,
        cells: Vec<f64>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(HazardError::InvalidConfiguration(format!(
                "terrain grid must have positive dimensions, got {}x{}",
                width, height
            )));
        }
        if cells.len() != width * height {
            return Err(HazardError::InvalidConfiguration(format!(
                "terrain grid expects {} cells for {}x{}, got {}",
                width * height,
                width,
                height,
                cells.len()
            )));
        }
        Ok(Self { bounds, width, height, cells })
    }

    /// Fill a grid with uniform random values in [min_value, max_value].
    ///
    /// Stands in for a real dataset when none is available; the draw comes
    /// from the caller's seeded generator so runs stay reproducible.
    pub fn synthetic(
        bounds: RegionBounds,
        width: usize,
        height: usize,
        min_value: f64,
        max_value: f64,
        rng: &mut ChaCha8Rng,
    ) -> Result<Self> {
        if !min_value.is_finite() || !max_value.is_finite() || min_value > max_value {
            return Err(HazardError::InvalidConfiguration(format!(
                "synthetic terrain range [{}, {}] is invalid",
                min_value, max_value
            )));
        }
        let cells = (0..width * height)
            .map(|_| rng.gen_range(min_value..=max_value))
            .collect();
        Self::from_cells(bounds, width, height, cells)
    }

    pub fn value_at(&self, longitude: f64, latitude: f64) -> f64 {
        let fx = (longitude - self.bounds.min_longitude()) / self.bounds.width();
        let fy = (latitude - self.bounds.min_latitude()) / self.bounds.height();
        let ix = clamp_index(fx, self.width);
        let iy = clamp_index(fy, self.height);
        self.cells[iy * self.width + ix]
    }
}

/// Map a [0, 1) fraction across the region onto a cell index, snapping
/// out-of-range and degenerate (zero-extent region) queries to the edges.
fn clamp_index(frac: f64, cells: usize) -> usize {
    if !frac.is_finite() || frac <= 0.0 {
        return 0;
    }
    let idx = (frac * cells as f64) as usize;
    idx.min(cells - 1)
}

impl ElevationModel for TerrainGrid {
    fn elevation_m(&self, longitude: f64, latitude: f64) -> f64 {
        self.value_at(longitude, latitude)
    }
}

impl RiverProximity for TerrainGrid {
    fn distance_km(&self, longitude: f64, latitude: f64) -> f64 {
        self.value_at(longitude, latitude)
    }
}

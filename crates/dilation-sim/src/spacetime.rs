//! Spacetime well height field.
//!
//! A softened potential sampled over a square grid in the orbital plane. The
//! renderer displaces its grid mesh by these heights; nothing here touches
//! the mesh itself.

use serde::Serialize;

use dilation_core::config::PhysicsConfig;
use dilation_core::constants::{WELL_GRID_SIZE, WELL_GRID_STEP, WELL_MAX_SEGMENTS};
use dilation_core::error::{ConfigError, SimError, SimResult};

/// Well depth at distance `r` from the center: `-k / (r + softening)` with
/// `k = mass·G/c² · well_scale`.
pub fn well_depth(mass: f64, r: f64, config: &PhysicsConfig) -> f64 {
    let k = mass * config.gravitational_constant
        / (config.speed_of_light * config.speed_of_light)
        * config.well_scale;
    -k / (r + config.well_softening)
}

/// Heights of a `(segments + 1)²` vertex grid, row-major, centered on the
/// origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellGrid {
    pub size: f64,
    pub step: f64,
    pub segments: usize,
    pub heights: Vec<f64>,
}

impl WellGrid {
    /// Sample the default 10 × 10 grid at 0.1 spacing.
    pub fn sample_default(mass: f64, config: &PhysicsConfig) -> SimResult<Self> {
        Self::sample(mass, WELL_GRID_SIZE, WELL_GRID_STEP, config)
    }

    /// Sample a `size` × `size` grid at `step` spacing. Grids finer than
    /// `WELL_MAX_SEGMENTS` segments per side are rejected.
    pub fn sample(mass: f64, size: f64, step: f64, config: &PhysicsConfig) -> SimResult<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimError::InvalidMass(mass));
        }
        for (field, value) in [("grid size", size), ("grid step", step)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value }.into());
            }
        }

        let segments_f = (size / step).round();
        let too_large = ConfigError::TooLarge {
            field: "grid segments",
            value: segments_f,
            max: WELL_MAX_SEGMENTS,
        };
        if !segments_f.is_finite() || segments_f > WELL_MAX_SEGMENTS as f64 {
            return Err(too_large.into());
        }
        let segments = segments_f as usize;
        let per_row = segments.checked_add(1).ok_or_else(|| too_large.clone())?;
        let vertex_count = per_row.checked_mul(per_row).ok_or(too_large)?;
        let half = size / 2.0;
        let mut heights = Vec::with_capacity(vertex_count);
        for row in 0..per_row {
            let z = -half + row as f64 * step;
            for col in 0..per_row {
                let x = -half + col as f64 * step;
                heights.push(well_depth(mass, x.hypot(z), config));
            }
        }

        Ok(Self {
            size,
            step,
            segments,
            heights,
        })
    }

    pub fn vertices_per_row(&self) -> usize {
        self.segments + 1
    }

    pub fn height_at(&self, row: usize, col: usize) -> Option<f64> {
        let per_row = self.vertices_per_row();
        if row >= per_row || col >= per_row {
            return None;
        }
        self.heights.get(row * per_row + col).copied()
    }

    /// Height of the center vertex, the deepest point of the well.
    pub fn center_depth(&self) -> f64 {
        let center = self.vertices_per_row() / 2;
        self.height_at(center, center).unwrap_or_default()
    }
}

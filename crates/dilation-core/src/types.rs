//! Plain-data types exchanged with collaborators.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// 3D position in scene units. The orbital plane is y = 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance from the central body at the origin.
    pub fn length(&self) -> f64 {
        DVec3::from(*self).length()
    }
}

impl From<DVec3> for Position {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Position> for DVec3 {
    fn from(p: Position) -> Self {
        DVec3::new(p.x, p.y, p.z)
    }
}

/// Initial satellite description handed to the model at construction.
///
/// Seeds fix the satellite count and order. The model moves each one onto
/// its orbit-time-zero ring slot; clocks always start at zero with rate 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SatelliteSeed {
    pub position: Position,
}

impl SatelliteSeed {
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Position::new(x, y, z),
        }
    }
}

/// Proper-time state of one satellite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SatelliteClock {
    /// Accumulated proper time.
    pub clock: f64,
    /// Multiplier on proper-time accumulation.
    pub clock_rate: f64,
}

impl Default for SatelliteClock {
    fn default() -> Self {
        Self {
            clock: 0.0,
            clock_rate: 1.0,
        }
    }
}

/// Read-only copy of one satellite, as handed to the rendering side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SatelliteView {
    pub index: usize,
    pub position: Position,
    pub clock: f64,
    pub clock_rate: f64,
}

/// Evenly spaced seeds on a circle in the orbital plane.
pub fn ring_seeds(count: usize, radius: f64) -> Vec<SatelliteSeed> {
    (0..count)
        .map(|i| {
            let theta = i as f64 / count as f64 * std::f64::consts::TAU;
            SatelliteSeed::at(radius * theta.cos(), 0.0, radius * theta.sin())
        })
        .collect()
}

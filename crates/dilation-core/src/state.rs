//! Simulation snapshot: the state the rendering side reads each frame.

use serde::{Deserialize, Serialize};

use crate::types::{Position, SatelliteClock};

/// Copy of the model's visible state after an update.
///
/// The first four fields are the worker's update payload; `simulation_time`
/// and `clocks` let a worker-mode UI show drift as well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSnapshot {
    pub positions: Vec<Position>,
    /// Earth rotation angle (radians).
    pub rotation: f64,
    /// Expansion factor (>= 1.0).
    pub expansion: f64,
    /// Displayed universe age (years).
    pub universe_age: f64,
    #[serde(default)]
    pub simulation_time: f64,
    #[serde(default)]
    pub clocks: Vec<SatelliteClock>,
}

//! Snapshot builder: copies model state into a `SimulationSnapshot`.

use hecs::World;

use dilation_core::state::SimulationSnapshot;
use dilation_core::types::{Position, SatelliteClock, SatelliteView};

use crate::components::{OrbitPosition, SatelliteSlot};

/// Scalar state that lives on the engine rather than in the world.
#[derive(Debug, Clone, Copy)]
pub struct GlobalState {
    pub rotation: f64,
    pub expansion: f64,
    pub universe_age: f64,
    pub simulation_time: f64,
}

/// Copies of every satellite, ordered by slot.
pub fn satellite_views(world: &World) -> Vec<SatelliteView> {
    let mut query = world.query::<(&SatelliteSlot, &OrbitPosition, &SatelliteClock)>();
    let mut views: Vec<SatelliteView> = query
        .iter()
        .map(|(_entity, (slot, pos, clock))| SatelliteView {
            index: slot.index,
            position: Position::from(pos.0),
            clock: clock.clock,
            clock_rate: clock.clock_rate,
        })
        .collect();
    views.sort_by_key(|v| v.index);
    views
}

pub fn build_snapshot(world: &World, global: GlobalState) -> SimulationSnapshot {
    let views = satellite_views(world);
    SimulationSnapshot {
        positions: views.iter().map(|v| v.position).collect(),
        rotation: global.rotation,
        expansion: global.expansion,
        universe_age: global.universe_age,
        simulation_time: global.simulation_time,
        clocks: views
            .iter()
            .map(|v| SatelliteClock {
                clock: v.clock,
                clock_rate: v.clock_rate,
            })
            .collect(),
    }
}

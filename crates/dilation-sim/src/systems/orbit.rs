//! Circular orbit placement.
//!
//! Slot `i` of `n` sits at angle `2π·i/n + orbit_time · angular_rate` on a
//! circle of `orbit_radius` in the y = 0 plane.

use glam::DVec3;
use hecs::World;

use dilation_core::config::PhysicsConfig;

use crate::components::{OrbitPosition, SatelliteSlot};

/// Position of slot `index` out of `count` at the given orbit time.
pub fn slot_position(index: usize, count: usize, orbit_time: f64, config: &PhysicsConfig) -> DVec3 {
    let theta = index as f64 / count as f64 * std::f64::consts::TAU
        + orbit_time * config.orbit_angular_rate;
    DVec3::new(
        config.orbit_radius * theta.cos(),
        0.0,
        config.orbit_radius * theta.sin(),
    )
}

/// Move every satellite to its slot position.
pub fn run(world: &mut World, count: usize, orbit_time: f64, config: &PhysicsConfig) {
    for (_entity, (slot, pos)) in world.query_mut::<(&SatelliteSlot, &mut OrbitPosition)>() {
        pos.0 = slot_position(slot.index, count, orbit_time, config);
    }
}

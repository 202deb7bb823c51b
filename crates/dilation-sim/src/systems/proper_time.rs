//! Proper-time integration.
//!
//! Each step a satellite clock advances by `rate · (1 + delta) · dt`, where
//! `delta` is the fractional rate offset against the receiver on the surface.

use glam::DVec3;
use hecs::World;

use dilation_core::config::PhysicsConfig;
use dilation_core::types::SatelliteClock;

use crate::components::OrbitPosition;

/// Fractional clock-rate offset of a satellite at `position` relative to the
/// receiver, under gravitating `mass`.
///
/// Positive means the satellite clock gains: the potential difference term
/// `(Φ_sat − Φ_rx)/c²` minus the velocity term `v²/2c²`.
pub fn calculate_delta(position: DVec3, mass: f64, config: &PhysicsConfig) -> f64 {
    let gm = config.gravitational_constant * mass;
    let c2 = config.speed_of_light * config.speed_of_light;

    let r = position.length();
    let phi_sat = -gm / r;
    let phi_receiver = -gm / config.earth_radius;
    let v = config.base_satellite_speed / config.velocity_scale;

    (phi_sat - phi_receiver) / c2 - (v * v) / (2.0 * c2)
}

/// Clock rate that cancels `delta` to first order.
pub fn corrected_rate(delta: f64) -> f64 {
    1.0 - delta
}

/// Advance every satellite clock by one step of coordinate time `dt`.
pub fn run(world: &mut World, mass: f64, dt: f64, config: &PhysicsConfig) {
    for (_entity, (pos, clock)) in world.query_mut::<(&OrbitPosition, &mut SatelliteClock)>() {
        let delta = calculate_delta(pos.0, mass, config);
        let dtau = (1.0 + delta) * dt;
        clock.clock += clock.clock_rate * dtau;
    }
}

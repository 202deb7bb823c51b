//! Expansion factor growth.

use dilation_core::config::PhysicsConfig;

/// Grow `factor` by `expansion_rate · dt`, clamped to the configured cap.
pub fn advance(factor: f64, dt: f64, config: &PhysicsConfig) -> f64 {
    let grown = factor + config.expansion_rate * dt;
    match config.max_expansion_factor {
        Some(cap) => grown.min(cap),
        None => grown,
    }
}

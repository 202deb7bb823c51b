//! ECS components attached to satellite entities.
//!
//! A satellite entity carries `SatelliteSlot`, `OrbitPosition` and a
//! `dilation_core::types::SatelliteClock`.

use glam::DVec3;

/// Stable slot of a satellite on the ring. Fixes its angular offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SatelliteSlot {
    pub index: usize,
}

/// Position owned by the model. Renderers receive copies only.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitPosition(pub DVec3);

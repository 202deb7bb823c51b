//! Headless time-dilation simulation.
//!
//! Owns a hecs world of satellites, converts wall time into fixed physics
//! steps, and produces `SimulationSnapshot`s for whatever renders them.

pub mod clock;
pub mod components;
pub mod engine;
pub mod spacetime;
pub mod systems;

pub use clock::SimulationClock;
pub use dilation_core as core;
pub use engine::OrbitalDilationModel;

//! Per-step systems.
//!
//! Systems are plain functions over the world (or over scalar state). They
//! own nothing; the engine calls them in order once per physics step.

pub mod expansion;
pub mod orbit;
pub mod proper_time;
pub mod snapshot;

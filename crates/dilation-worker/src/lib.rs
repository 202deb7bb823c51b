//! Isolated execution context for the dilation model.
//!
//! The worker owns its own model on a dedicated thread and talks only by
//! message passing. `Driver` hides whether the model runs here or there.

pub mod driver;
pub mod host;
pub mod state;
pub mod worker;

pub use dilation_core as core;
pub use driver::{Driver, ExecutionMode};
pub use host::WorkerHost;
pub use worker::PhysicsWorker;

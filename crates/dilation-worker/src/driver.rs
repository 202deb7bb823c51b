//! One API over both execution contexts.
//!
//! `Driver` runs the model either in the caller's context or on a
//! `PhysicsWorker`. Both take the same inputs and return the same
//! snapshots. If the worker cannot start, the driver falls back to
//! in-context execution.

use tracing::warn;

use dilation_core::config::PhysicsConfig;
use dilation_core::error::{SimError, SimResult};
use dilation_core::messages::{WorkerReply, WorkerRequest};
use dilation_core::state::SimulationSnapshot;
use dilation_core::types::SatelliteSeed;
use dilation_sim::OrbitalDilationModel;

use crate::worker::PhysicsWorker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    InContext,
    Worker,
}

pub enum Driver {
    InContext(Box<OrbitalDilationModel>),
    Worker(PhysicsWorker),
}

impl Driver {
    /// Run the model on the calling thread.
    pub fn in_context(satellites: &[SatelliteSeed], config: PhysicsConfig) -> SimResult<Self> {
        Ok(Driver::InContext(Box::new(OrbitalDilationModel::new(
            satellites, config,
        )?)))
    }

    /// Run the model on a worker thread. Ownership of all simulation state
    /// moves to the worker; only plain seeds cross the channel.
    pub fn worker(satellites: &[SatelliteSeed], config: PhysicsConfig) -> SimResult<Self> {
        config.validate()?;
        let worker = PhysicsWorker::spawn(config)?;
        Self::init_worker(worker, satellites)
    }

    /// Start in `mode`, falling back to in-context if the worker fails to
    /// start.
    pub fn start(
        mode: ExecutionMode,
        satellites: &[SatelliteSeed],
        config: PhysicsConfig,
    ) -> SimResult<Self> {
        match mode {
            ExecutionMode::InContext => Self::in_context(satellites, config),
            ExecutionMode::Worker => Self::start_with(satellites, config, PhysicsWorker::spawn),
        }
    }

    pub(crate) fn start_with(
        satellites: &[SatelliteSeed],
        config: PhysicsConfig,
        spawn: impl FnOnce(PhysicsConfig) -> SimResult<PhysicsWorker>,
    ) -> SimResult<Self> {
        config.validate()?;
        match spawn(config.clone()) {
            Ok(worker) => Self::init_worker(worker, satellites),
            Err(SimError::WorkerSpawn(err)) => {
                warn!(%err, "physics worker unavailable, running in-context");
                Self::in_context(satellites, config)
            }
            Err(err) => Err(err),
        }
    }

    fn init_worker(worker: PhysicsWorker, satellites: &[SatelliteSeed]) -> SimResult<Self> {
        worker.post(WorkerRequest::Init {
            satellites: satellites.to_vec(),
        })?;
        Ok(Driver::Worker(worker))
    }

    pub fn mode(&self) -> ExecutionMode {
        match self {
            Driver::InContext(_) => ExecutionMode::InContext,
            Driver::Worker(_) => ExecutionMode::Worker,
        }
    }

    /// Advance to `now_ms` under `mass` and return the resulting snapshot.
    pub fn update(&mut self, now_ms: f64, mass: f64) -> SimResult<SimulationSnapshot> {
        match self {
            Driver::InContext(model) => {
                model.update(now_ms, mass)?;
                Ok(model.snapshot())
            }
            Driver::Worker(worker) => {
                worker.post(WorkerRequest::Update {
                    timestamp: now_ms,
                    mass,
                })?;
                match worker.recv()? {
                    WorkerReply::Update(snapshot) => Ok(snapshot),
                    WorkerReply::Error { message } => Err(SimError::WorkerFault(message)),
                }
            }
        }
    }

    pub fn set_paused(&mut self, paused: bool) -> SimResult<()> {
        match self {
            Driver::InContext(model) => {
                model.set_paused(paused);
                Ok(())
            }
            Driver::Worker(worker) => worker.post(WorkerRequest::Pause { paused }),
        }
    }

    pub fn reset(&mut self) -> SimResult<()> {
        match self {
            Driver::InContext(model) => {
                model.reset();
                Ok(())
            }
            Driver::Worker(worker) => worker.post(WorkerRequest::Reset),
        }
    }
}

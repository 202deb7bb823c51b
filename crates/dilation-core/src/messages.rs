//! Worker message protocol.
//!
//! Inbound and outbound messages are tagged unions serialized as
//! `{ "type": ..., "payload": ... }`. Each variant has a fixed payload shape,
//! so anything malformed is rejected at deserialization.

use serde::{Deserialize, Serialize};

use crate::state::SimulationSnapshot;
use crate::types::SatelliteSeed;

/// Messages sent to the physics worker. Processed strictly in arrival order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum WorkerRequest {
    /// Build a fresh model from plain satellite data.
    Init { satellites: Vec<SatelliteSeed> },
    /// Advance to `timestamp` (ms) under `mass` (kg) and reply with a snapshot.
    Update { timestamp: f64, mass: f64 },
    /// Pause or resume. No reply.
    Pause { paused: bool },
    /// Return to time zero. No reply.
    Reset,
}

impl WorkerRequest {
    /// Short name used in logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            WorkerRequest::Init { .. } => "init",
            WorkerRequest::Update { .. } => "update",
            WorkerRequest::Pause { .. } => "pause",
            WorkerRequest::Reset => "reset",
        }
    }
}

/// Messages sent back from the physics worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum WorkerReply {
    /// State after an `update` request.
    Update(SimulationSnapshot),
    /// A request could not be handled. The worker keeps running.
    Error { message: String },
}

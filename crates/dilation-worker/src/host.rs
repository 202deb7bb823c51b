//! Message handler run inside the worker context.
//!
//! `WorkerHost` owns the worker's model and applies one request at a time.
//! Only `update` produces a state reply; `pause` and `reset` are silent.

use tracing::{debug, error};

use dilation_core::config::PhysicsConfig;
use dilation_core::error::{SimError, SimResult};
use dilation_core::messages::{WorkerReply, WorkerRequest};
use dilation_sim::OrbitalDilationModel;

#[derive(Default)]
pub struct WorkerHost {
    config: PhysicsConfig,
    model: Option<OrbitalDilationModel>,
}

impl WorkerHost {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            model: None,
        }
    }

    /// Apply one request. Returns the reply to post back, if any.
    pub fn handle(&mut self, request: WorkerRequest) -> Option<WorkerReply> {
        debug!(kind = request.kind(), "worker message");
        match self.apply(request) {
            Ok(reply) => reply,
            Err(err) => {
                error!(%err, "worker request failed");
                Some(WorkerReply::Error {
                    message: err.to_string(),
                })
            }
        }
    }

    /// Decode a JSON request, apply it, and encode the reply. Malformed input
    /// yields an error reply rather than an `Err`.
    pub fn handle_json(&mut self, json: &str) -> SimResult<Option<String>> {
        let reply = match serde_json::from_str::<WorkerRequest>(json) {
            Ok(request) => self.handle(request),
            Err(err) => {
                error!(%err, "rejected malformed worker message");
                Some(WorkerReply::Error {
                    message: SimError::from(err).to_string(),
                })
            }
        };
        reply
            .map(|r| serde_json::to_string(&r))
            .transpose()
            .map_err(SimError::from)
    }

    pub fn model(&self) -> Option<&OrbitalDilationModel> {
        self.model.as_ref()
    }

    fn apply(&mut self, request: WorkerRequest) -> SimResult<Option<WorkerReply>> {
        match request {
            WorkerRequest::Init { satellites } => {
                self.model = Some(OrbitalDilationModel::new(&satellites, self.config.clone())?);
                Ok(None)
            }
            WorkerRequest::Update { timestamp, mass } => {
                let model = self
                    .model
                    .as_mut()
                    .ok_or(SimError::NotInitialized("update"))?;
                model.update(timestamp, mass)?;
                Ok(Some(WorkerReply::Update(model.snapshot())))
            }
            WorkerRequest::Pause { paused } => {
                if let Some(model) = self.model.as_mut() {
                    model.set_paused(paused);
                }
                Ok(None)
            }
            WorkerRequest::Reset => {
                if let Some(model) = self.model.as_mut() {
                    model.reset();
                }
                Ok(None)
            }
        }
    }
}

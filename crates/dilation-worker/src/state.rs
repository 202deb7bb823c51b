//! Commands sent from the owning side to the worker thread.

use dilation_core::messages::WorkerRequest;

#[derive(Debug)]
pub enum WorkerCommand {
    /// A protocol message to hand to the worker's model.
    Message(WorkerRequest),
    /// Stop the worker thread.
    Shutdown,
}

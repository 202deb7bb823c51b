//! Physics worker thread.
//!
//! The model is created inside the thread so its state is never shared.
//! Requests arrive on an `mpsc` channel and are handled strictly in arrival
//! order; replies go back on a second channel.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::info;

use dilation_core::config::PhysicsConfig;
use dilation_core::error::{SimError, SimResult};
use dilation_core::messages::{WorkerReply, WorkerRequest};

use crate::host::WorkerHost;
use crate::state::WorkerCommand;

pub struct PhysicsWorker {
    command_tx: mpsc::Sender<WorkerCommand>,
    reply_rx: mpsc::Receiver<WorkerReply>,
    thread: Option<JoinHandle<()>>,
}

impl PhysicsWorker {
    /// Spawn the worker thread. It idles until an `init` request arrives.
    pub fn spawn(config: PhysicsConfig) -> SimResult<Self> {
        let (command_tx, command_rx) = mpsc::channel::<WorkerCommand>();
        let (reply_tx, reply_rx) = mpsc::channel::<WorkerReply>();

        let thread = std::thread::Builder::new()
            .name("dilation-physics".into())
            .spawn(move || run_worker(WorkerHost::new(config), command_rx, reply_tx))?;

        Ok(Self {
            command_tx,
            reply_rx,
            thread: Some(thread),
        })
    }

    /// Post a request. Fire-and-forget; replies are read separately.
    pub fn post(&self, request: WorkerRequest) -> SimResult<()> {
        self.command_tx
            .send(WorkerCommand::Message(request))
            .map_err(|_| SimError::ChannelClosed)
    }

    /// Block until the next reply.
    pub fn recv(&self) -> SimResult<WorkerReply> {
        self.reply_rx.recv().map_err(|_| SimError::ChannelClosed)
    }

    /// Wait up to `timeout` for the next reply.
    pub fn recv_timeout(&self, timeout: Duration) -> SimResult<Option<WorkerReply>> {
        match self.reply_rx.recv_timeout(timeout) {
            Ok(reply) => Ok(Some(reply)),
            Err(mpsc::RecvTimeoutError::Timeout) => Ok(None),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(SimError::ChannelClosed),
        }
    }

    /// Next reply if one is already waiting.
    pub fn try_recv(&self) -> Option<WorkerReply> {
        self.reply_rx.try_recv().ok()
    }

    /// Stop the thread and wait for it to exit.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        let _ = self.command_tx.send(WorkerCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for PhysicsWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The worker loop. Runs until Shutdown or either channel disconnects.
fn run_worker(
    mut host: WorkerHost,
    command_rx: mpsc::Receiver<WorkerCommand>,
    reply_tx: mpsc::Sender<WorkerReply>,
) {
    info!("physics worker started");
    while let Ok(command) = command_rx.recv() {
        match command {
            WorkerCommand::Message(request) => {
                if let Some(reply) = host.handle(request) {
                    if reply_tx.send(reply).is_err() {
                        break;
                    }
                }
            }
            WorkerCommand::Shutdown => break,
        }
    }
    info!("physics worker stopped");
}

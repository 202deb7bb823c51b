//! Error types for the dilation simulation.

use thiserror::Error;

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

/// A configuration value that would make the model produce NaN or nonsense.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} of {value} exceeds the limit of {max}")]
    TooLarge {
        field: &'static str,
        value: f64,
        max: usize,
    },

    #[error("max_expansion_factor must be at least 1.0, got {0}")]
    CapBelowOne(f64),
}

/// Errors that can occur while driving the simulation.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f64),

    #[error("timestamp must be finite, got {0}")]
    InvalidTimestamp(f64),

    #[error("clock rate must be finite and non-negative, got {0}")]
    InvalidClockRate(f64),

    #[error("no satellite at index {index} (count {count})")]
    UnknownSatellite { index: usize, count: usize },

    #[error("worker received {0} before init")]
    NotInitialized(&'static str),

    #[error("worker channel closed")]
    ChannelClosed,

    #[error("worker failed to start: {0}")]
    WorkerSpawn(#[from] std::io::Error),

    #[error("worker replied with error: {0}")]
    WorkerFault(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

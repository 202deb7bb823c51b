//! Core types and definitions for the dilation simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! constants, configuration, errors, plain-data types, snapshots and the
//! worker message protocol. It has no dependency on any runtime framework.

pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod state;
pub mod types;

pub use config::PhysicsConfig;
pub use error::{ConfigError, SimError, SimResult};

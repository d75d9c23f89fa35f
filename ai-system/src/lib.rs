//! Facade for the AI system configuration crates.
//!
//! Depend on this crate to pull in configuration validation and logging
//! setup behind feature flags.

#![warn(missing_docs, clippy::pedantic)]

/// Re-export shared primitives for convenience.
pub use agent_primitives as primitives;

/// Configuration coercion and validation (enabled by `config` feature).
#[cfg(feature = "config")]
pub use agent_config as config;

/// Logging bootstrap (enabled by `telemetry` feature).
#[cfg(feature = "telemetry")]
pub use agent_telemetry as telemetry;

//! Observability utilities for the AI system.

#![warn(missing_docs, clippy::pedantic)]

pub mod tracing_support;

pub use tracing_support::{TelemetryError, TracingConfig, init_tracing};

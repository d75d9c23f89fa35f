//! Configuration contract for the AI system.
//!
//! [`coerce`] turns raw environment strings into typed values with defaults
//! and clamping, [`validation`] checks an assembled [`AppConfig`] and fails on
//! the first violated invariant, and [`loader`] composes the two for callers
//! that read from the environment.

#![warn(missing_docs, clippy::pedantic)]

pub mod coerce;
pub mod loader;
pub mod schema;
pub mod validation;

mod error;

pub use coerce::{Bounds, parse_boolean, parse_number};
pub use error::{ConfigResult, ConfigValidationError};
pub use loader::{EnvSource, ProcessEnv, load_app_config, load_validated_config};
pub use schema::{AppConfig, DecisionConfig, MemoryConfig, ModelConfig};
pub use validation::{Validate, validate_config};

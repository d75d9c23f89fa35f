//! Structured tracing helpers.

use std::env;

use agent_primitives::ErrorCode;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter `{directive}`: {reason}")]
    InvalidDirective {
        /// Offending directive.
        directive: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("tracing subscriber already initialized: {reason}")]
    AlreadyInitialized {
        /// Message reported by `tracing-subscriber`.
        reason: String,
    },
}

impl ErrorCode for TelemetryError {
    fn code(&self) -> &'static str {
        "TELEMETRY_ERROR"
    }
}

/// Subscriber settings.
#[derive(Clone, Debug)]
pub struct TracingConfig {
    default_directive: String,
    with_target: bool,
}

impl TracingConfig {
    /// Creates settings that fall back to `directive` when `RUST_LOG` is unset.
    #[must_use]
    pub fn new(directive: impl Into<String>) -> Self {
        Self {
            default_directive: directive.into(),
            with_target: false,
        }
    }

    /// `debug` when `verbose` is set, `info` otherwise.
    #[must_use]
    pub fn verbose(verbose: bool) -> Self {
        Self::new(if verbose { "debug" } else { "info" })
    }

    /// Includes event targets in the formatted output.
    #[must_use]
    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    /// Returns the fallback directive.
    #[must_use]
    pub fn default_directive(&self) -> &str {
        &self.default_directive
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::verbose(false)
    }
}

/// Installs a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over the configured default directive.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the directive is invalid or a subscriber
/// has already been installed.
pub fn init_tracing(config: &TracingConfig) -> Result<(), TelemetryError> {
    let from_env = env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(from_env.as_deref(), &config.default_directive)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .try_init()
        .map_err(|err| TelemetryError::AlreadyInitialized {
            reason: err.to_string(),
        })?;

    debug!(default = %config.default_directive, "tracing initialized");
    Ok(())
}

fn build_filter(from_env: Option<&str>, default: &str) -> Result<EnvFilter, TelemetryError> {
    let directive = from_env
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(default);

    EnvFilter::try_new(directive).map_err(|err| TelemetryError::InvalidDirective {
        directive: directive.to_owned(),
        reason: err.to_string(),
    })
}

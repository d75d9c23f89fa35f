//! Assembles an [`AppConfig`] from environment-style string variables.

use std::collections::HashMap;
use std::env;

use tracing::debug;

use crate::coerce::{Bounds, Number, parse_boolean, parse_number};
use crate::error::ConfigResult;
use crate::schema::{AppConfig, DecisionConfig, MemoryConfig, ModelConfig};

/// Model API key.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Model identifier.
pub const OPENAI_MODEL_ENV: &str = "OPENAI_MODEL";
/// Model API base URL.
pub const OPENAI_API_BASE_URL_ENV: &str = "OPENAI_API_BASE_URL";
/// Completion token limit.
pub const MAX_TOKENS_ENV: &str = "AI_MAX_TOKENS";
/// Sampling temperature.
pub const TEMPERATURE_ENV: &str = "AI_TEMPERATURE";
/// Embedding vector width.
pub const VECTOR_DIMENSIONS_ENV: &str = "MEMORY_VECTOR_DIMENSIONS";
/// Long-term memory limit.
pub const MAX_MEMORIES_ENV: &str = "MEMORY_MAX_MEMORIES";
/// Recall similarity threshold.
pub const SIMILARITY_THRESHOLD_ENV: &str = "MEMORY_SIMILARITY_THRESHOLD";
/// Short-term memory capacity.
pub const SHORT_TERM_CAPACITY_ENV: &str = "MEMORY_SHORT_TERM_CAPACITY";
/// Decision confidence threshold.
pub const CONFIDENCE_THRESHOLD_ENV: &str = "DECISION_CONFIDENCE_THRESHOLD";
/// Retry budget per decision step.
pub const MAX_RETRIES_ENV: &str = "DECISION_MAX_RETRIES";
/// Reasoning step limit.
pub const MAX_REASONING_STEPS_ENV: &str = "DECISION_MAX_REASONING_STEPS";
/// Verbose logging flag.
pub const DEBUG_ENV: &str = "AI_DEBUG";

/// Source of raw string variables.
pub trait EnvSource {
    /// Returns the raw value of `key`, or `None` when unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads variables from the process environment.
///
/// Values that are not valid unicode are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Builds an [`AppConfig`] from `source`, applying defaults and clamping.
///
/// Never fails; pass the result to [`validate_config`](crate::validate_config)
/// or use [`load_validated_config`].
#[must_use]
pub fn load_app_config(source: &impl EnvSource) -> AppConfig {
    let model_defaults = ModelConfig::default();
    let memory_defaults = MemoryConfig::default();
    let decision_defaults = DecisionConfig::default();

    let model = ModelConfig {
        api_key: string_var(source, OPENAI_API_KEY_ENV).unwrap_or_default(),
        model: string_var(source, OPENAI_MODEL_ENV).unwrap_or(model_defaults.model),
        api_base_url: string_var(source, OPENAI_API_BASE_URL_ENV)
            .unwrap_or(model_defaults.api_base_url),
        max_tokens: number_var(
            source,
            MAX_TOKENS_ENV,
            model_defaults.max_tokens,
            Bounds::at_least(1),
        ),
        temperature: number_var(
            source,
            TEMPERATURE_ENV,
            model_defaults.temperature,
            Bounds::between(0.0, 2.0),
        ),
    };

    let memory = MemoryConfig {
        vector_dimensions: number_var(
            source,
            VECTOR_DIMENSIONS_ENV,
            memory_defaults.vector_dimensions,
            Bounds::at_least(1),
        ),
        max_memories: number_var(
            source,
            MAX_MEMORIES_ENV,
            memory_defaults.max_memories,
            Bounds::at_least(1),
        ),
        similarity_threshold: number_var(
            source,
            SIMILARITY_THRESHOLD_ENV,
            memory_defaults.similarity_threshold,
            Bounds::between(0.0, 1.0),
        ),
        short_term_capacity: number_var(
            source,
            SHORT_TERM_CAPACITY_ENV,
            memory_defaults.short_term_capacity,
            Bounds::at_least(1),
        ),
    };

    let decision = DecisionConfig {
        confidence_threshold: number_var(
            source,
            CONFIDENCE_THRESHOLD_ENV,
            decision_defaults.confidence_threshold,
            Bounds::between(0.0, 1.0),
        ),
        max_retries: number_var(
            source,
            MAX_RETRIES_ENV,
            decision_defaults.max_retries,
            Bounds::at_least(0),
        ),
        max_reasoning_steps: number_var(
            source,
            MAX_REASONING_STEPS_ENV,
            decision_defaults.max_reasoning_steps,
            Bounds::at_least(1),
        ),
    };

    let config = AppConfig::new(model, memory, decision);
    debug!(?config, "assembled configuration from environment");
    config
}

/// Builds an [`AppConfig`] from `source` and validates it.
///
/// # Errors
///
/// Returns the first [`ConfigValidationError`](crate::ConfigValidationError),
/// typically [`MissingApiKey`](crate::ConfigValidationError::MissingApiKey)
/// when `OPENAI_API_KEY` is unset.
pub fn load_validated_config(source: &impl EnvSource) -> ConfigResult<AppConfig> {
    load_app_config(source).validated()
}

/// Returns whether verbose logging was requested through `AI_DEBUG`.
#[must_use]
pub fn debug_enabled(source: &impl EnvSource) -> bool {
    parse_boolean(source.var(DEBUG_ENV).as_deref(), false)
}

fn string_var(source: &impl EnvSource, key: &str) -> Option<String> {
    source
        .var(key)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn number_var<T: Number>(source: &impl EnvSource, key: &str, default: T, bounds: Bounds<T>) -> T {
    parse_number(source.var(key).as_deref(), default, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigValidationError;

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn empty_source_yields_defaults() {
        let config = load_app_config(&source(&[]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn empty_source_fails_on_api_key() {
        assert_eq!(
            load_validated_config(&source(&[])).unwrap_err(),
            ConfigValidationError::MissingApiKey
        );
    }

    #[test]
    fn api_key_alone_is_enough() {
        let config = load_validated_config(&source(&[(OPENAI_API_KEY_ENV, "sk-test")]))
            .expect("valid");
        assert_eq!(config.model.api_key, "sk-test");
    }

    #[test]
    fn out_of_range_numbers_are_clamped() {
        let config = load_app_config(&source(&[
            (TEMPERATURE_ENV, "3.5"),
            (MAX_TOKENS_ENV, "-20"),
            (SIMILARITY_THRESHOLD_ENV, "-1"),
            (MAX_RETRIES_ENV, "-4"),
        ]));
        assert_eq!(config.model.temperature, 2.0);
        assert_eq!(config.model.max_tokens, 1);
        assert_eq!(config.memory.similarity_threshold, 0.0);
        assert_eq!(config.decision.max_retries, 0);
    }

    #[test]
    fn garbage_numbers_fall_back_to_defaults() {
        let config = load_app_config(&source(&[
            (VECTOR_DIMENSIONS_ENV, "wide"),
            (CONFIDENCE_THRESHOLD_ENV, ""),
        ]));
        assert_eq!(config.memory.vector_dimensions, 1536);
        assert_eq!(config.decision.confidence_threshold, 0.7);
    }

    #[test]
    fn blank_strings_count_as_unset() {
        let config = load_app_config(&source(&[
            (OPENAI_MODEL_ENV, "  "),
            (OPENAI_API_KEY_ENV, " k "),
        ]));
        assert_eq!(config.model.model, crate::schema::DEFAULT_MODEL);
        assert_eq!(config.model.api_key, "k");
    }

    #[test]
    fn debug_flag_uses_truthy_tokens() {
        assert!(!debug_enabled(&source(&[])));
        assert!(debug_enabled(&source(&[(DEBUG_ENV, "Yes")])));
        assert!(!debug_enabled(&source(&[(DEBUG_ENV, "on")])));
    }
}

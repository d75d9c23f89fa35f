//! Strongly typed configuration schemas for the AI system.
//!
//! Integer fields are signed so that out-of-range values survive
//! deserialization and are reported by [`validate_config`](crate::validate_config)
//! instead of failing to parse.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default chat model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4";
/// Default base URL of the model API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";

/// Language model client settings.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelConfig {
    /// Secret API key. Never serialized and redacted from `Debug` output.
    #[serde(skip_serializing)]
    pub api_key: String,
    /// Model identifier, e.g. `gpt-4`.
    pub model: String,
    /// Base URL of the model API.
    pub api_base_url: String,
    /// Maximum number of tokens requested per completion.
    pub max_tokens: i64,
    /// Sampling temperature in `[0, 2]`.
    pub temperature: f64,
}

impl ModelConfig {
    /// Creates a configuration with the supplied API key and default settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Overrides the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// Returns true when an API key has been supplied.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_owned(),
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            max_tokens: 2000,
            temperature: 0.7,
        }
    }
}

impl fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.has_api_key() {
            "<redacted>"
        } else {
            "<unset>"
        };
        f.debug_struct("ModelConfig")
            .field("api_key", &api_key)
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

/// Memory subsystem sizing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemoryConfig {
    /// Embedding vector width.
    pub vector_dimensions: i64,
    /// Upper bound on retained long-term memories.
    pub max_memories: i64,
    /// Minimum similarity for a memory to be recalled, in `[0, 1]`.
    pub similarity_threshold: f64,
    /// Number of entries kept in short-term memory.
    pub short_term_capacity: i64,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            vector_dimensions: 1536,
            max_memories: 1000,
            similarity_threshold: 0.7,
            short_term_capacity: 10,
        }
    }
}

/// Decision engine limits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecisionConfig {
    /// Minimum confidence required to act on a decision, in `[0, 1]`.
    pub confidence_threshold: f64,
    /// Retries allowed after a failed step. Zero disables retrying.
    pub max_retries: i64,
    /// Upper bound on reasoning steps per decision.
    pub max_reasoning_steps: i64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.7,
            max_retries: 3,
            max_reasoning_steps: 5,
        }
    }
}

/// Complete configuration handed to the AI system.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Model client settings.
    pub model: ModelConfig,
    /// Memory subsystem settings.
    pub memory: MemoryConfig,
    /// Decision engine settings.
    pub decision: DecisionConfig,
}

impl AppConfig {
    /// Assembles a configuration from its three sections.
    #[must_use]
    pub fn new(model: ModelConfig, memory: MemoryConfig, decision: DecisionConfig) -> Self {
        Self {
            model,
            memory,
            decision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_api_key() {
        let config = ModelConfig::new("sk-very-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-very-secret"));
        assert!(rendered.contains("<redacted>"));
        assert!(format!("{:?}", ModelConfig::default()).contains("<unset>"));
    }

    #[test]
    fn deserializes_camel_case_keys() {
        let json = r#"{
            "model": {
                "apiKey": "k",
                "model": "m",
                "apiBaseUrl": "http://x",
                "maxTokens": 100,
                "temperature": 0.5
            },
            "memory": {
                "vectorDimensions": 128,
                "maxMemories": 10,
                "similarityThreshold": 0.5,
                "shortTermCapacity": 5
            },
            "decision": {
                "confidenceThreshold": 0.5,
                "maxRetries": 0,
                "maxReasoningSteps": 1
            }
        }"#;

        let config: AppConfig = serde_json::from_str(json).expect("parse");
        assert_eq!(config.model.api_key, "k");
        assert_eq!(config.model.api_base_url, "http://x");
        assert_eq!(config.memory.short_term_capacity, 5);
        assert_eq!(config.decision.max_retries, 0);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "model": { "apiKey": "k" } }"#).expect("parse");
        assert_eq!(config.model.model, DEFAULT_MODEL);
        assert_eq!(config.memory, MemoryConfig::default());
        assert_eq!(config.decision, DecisionConfig::default());
    }

    #[test]
    fn serialization_omits_api_key() {
        let value = serde_json::to_value(ModelConfig::new("secret")).expect("serialize");
        assert!(value.get("apiKey").is_none());
        assert_eq!(value["apiBaseUrl"], DEFAULT_API_BASE_URL);
    }
}

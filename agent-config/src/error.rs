//! Error types for configuration validation.

use agent_primitives::ErrorCode;
use thiserror::Error;

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigValidationError>;

/// First violation found while validating an [`AppConfig`](crate::AppConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    /// The model API key is empty.
    #[error("model config is missing an api key")]
    MissingApiKey,

    /// The model identifier is empty.
    #[error("model config is missing a model name")]
    MissingModel,

    /// The model API base URL is empty.
    #[error("model config is missing an api base url")]
    MissingApiBaseUrl,

    /// `maxTokens` is zero or negative.
    #[error("model maxTokens must be greater than 0 (got {value})")]
    InvalidMaxTokens {
        /// Rejected value.
        value: i64,
    },

    /// `temperature` is outside `[0, 2]`.
    #[error("model temperature must be between 0 and 2 (got {value})")]
    InvalidTemperature {
        /// Rejected value.
        value: f64,
    },

    /// `vectorDimensions` is zero or negative.
    #[error("memory vectorDimensions must be greater than 0 (got {value})")]
    InvalidVectorDimensions {
        /// Rejected value.
        value: i64,
    },

    /// `maxMemories` is zero or negative.
    #[error("memory maxMemories must be greater than 0 (got {value})")]
    InvalidMaxMemories {
        /// Rejected value.
        value: i64,
    },

    /// `similarityThreshold` is outside `[0, 1]`.
    #[error("memory similarityThreshold must be between 0 and 1 (got {value})")]
    InvalidSimilarityThreshold {
        /// Rejected value.
        value: f64,
    },

    /// `shortTermCapacity` is zero or negative.
    #[error("memory shortTermCapacity must be greater than 0 (got {value})")]
    InvalidShortTermCapacity {
        /// Rejected value.
        value: i64,
    },

    /// `confidenceThreshold` is outside `[0, 1]`.
    #[error("decision confidenceThreshold must be between 0 and 1 (got {value})")]
    InvalidConfidenceThreshold {
        /// Rejected value.
        value: f64,
    },

    /// `maxRetries` is negative.
    #[error("decision maxRetries must not be negative (got {value})")]
    InvalidMaxRetries {
        /// Rejected value.
        value: i64,
    },

    /// `maxReasoningSteps` is zero or negative.
    #[error("decision maxReasoningSteps must be greater than 0 (got {value})")]
    InvalidMaxReasoningSteps {
        /// Rejected value.
        value: i64,
    },
}

impl ConfigValidationError {
    /// Code attached to every validation failure.
    pub const CODE: &'static str = "CONFIG_VALIDATION_ERROR";

    /// Returns [`Self::CODE`].
    #[must_use]
    pub const fn code(&self) -> &'static str {
        Self::CODE
    }

    /// Returns the dotted path of the offending field, e.g. `model.apiKey`.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "model.apiKey",
            Self::MissingModel => "model.model",
            Self::MissingApiBaseUrl => "model.apiBaseUrl",
            Self::InvalidMaxTokens { .. } => "model.maxTokens",
            Self::InvalidTemperature { .. } => "model.temperature",
            Self::InvalidVectorDimensions { .. } => "memory.vectorDimensions",
            Self::InvalidMaxMemories { .. } => "memory.maxMemories",
            Self::InvalidSimilarityThreshold { .. } => "memory.similarityThreshold",
            Self::InvalidShortTermCapacity { .. } => "memory.shortTermCapacity",
            Self::InvalidConfidenceThreshold { .. } => "decision.confidenceThreshold",
            Self::InvalidMaxRetries { .. } => "decision.maxRetries",
            Self::InvalidMaxReasoningSteps { .. } => "decision.maxReasoningSteps",
        }
    }
}

impl ErrorCode for ConfigValidationError {
    fn code(&self) -> &'static str {
        Self::CODE
    }
}

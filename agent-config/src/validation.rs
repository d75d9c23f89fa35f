//! Fail-fast validation of assembled configuration.
//!
//! Sections are checked in the order model, memory, decision and the first
//! violation is returned. Nothing is normalized: on success the caller gets
//! back exactly what it passed in.

use tracing::debug;

use crate::error::{ConfigResult, ConfigValidationError};
use crate::schema::{AppConfig, DecisionConfig, MemoryConfig, ModelConfig};

const TEMPERATURE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=2.0;
const UNIT_RANGE: std::ops::RangeInclusive<f64> = 0.0..=1.0;

/// Configuration sections that can check their own invariants.
pub trait Validate {
    /// Returns the first violated invariant, if any.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigValidationError`] describing the first invalid field.
    fn validate(&self) -> ConfigResult<()>;
}

impl Validate for ModelConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.api_key.is_empty() {
            return Err(ConfigValidationError::MissingApiKey);
        }
        if self.model.is_empty() {
            return Err(ConfigValidationError::MissingModel);
        }
        if self.api_base_url.is_empty() {
            return Err(ConfigValidationError::MissingApiBaseUrl);
        }
        if self.max_tokens <= 0 {
            return Err(ConfigValidationError::InvalidMaxTokens {
                value: self.max_tokens,
            });
        }
        if !TEMPERATURE_RANGE.contains(&self.temperature) {
            return Err(ConfigValidationError::InvalidTemperature {
                value: self.temperature,
            });
        }
        Ok(())
    }
}

impl Validate for MemoryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.vector_dimensions <= 0 {
            return Err(ConfigValidationError::InvalidVectorDimensions {
                value: self.vector_dimensions,
            });
        }
        if self.max_memories <= 0 {
            return Err(ConfigValidationError::InvalidMaxMemories {
                value: self.max_memories,
            });
        }
        if !UNIT_RANGE.contains(&self.similarity_threshold) {
            return Err(ConfigValidationError::InvalidSimilarityThreshold {
                value: self.similarity_threshold,
            });
        }
        if self.short_term_capacity <= 0 {
            return Err(ConfigValidationError::InvalidShortTermCapacity {
                value: self.short_term_capacity,
            });
        }
        Ok(())
    }
}

impl Validate for DecisionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !UNIT_RANGE.contains(&self.confidence_threshold) {
            return Err(ConfigValidationError::InvalidConfidenceThreshold {
                value: self.confidence_threshold,
            });
        }
        if self.max_retries < 0 {
            return Err(ConfigValidationError::InvalidMaxRetries {
                value: self.max_retries,
            });
        }
        if self.max_reasoning_steps <= 0 {
            return Err(ConfigValidationError::InvalidMaxReasoningSteps {
                value: self.max_reasoning_steps,
            });
        }
        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.model.validate()?;
        self.memory.validate()?;
        self.decision.validate()
    }
}

impl AppConfig {
    /// Validates the configuration and hands it back unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigValidationError`] encountered.
    pub fn validated(self) -> ConfigResult<Self> {
        validate_config(&self)?;
        Ok(self)
    }
}

/// Validates `config`, returning the same reference on success.
///
/// # Errors
///
/// Returns the first [`ConfigValidationError`] found in model, memory, decision order.
pub fn validate_config(config: &AppConfig) -> ConfigResult<&AppConfig> {
    match config.validate() {
        Ok(()) => Ok(config),
        Err(err) => {
            debug!(code = err.code(), field = err.field(), %err, "configuration rejected");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> AppConfig {
        AppConfig {
            model: ModelConfig {
                api_key: "k".into(),
                model: "m".into(),
                api_base_url: "http://x".into(),
                max_tokens: 100,
                temperature: 0.5,
            },
            memory: MemoryConfig {
                vector_dimensions: 128,
                max_memories: 10,
                similarity_threshold: 0.5,
                short_term_capacity: 5,
            },
            decision: DecisionConfig {
                confidence_threshold: 0.5,
                max_retries: 0,
                max_reasoning_steps: 1,
            },
        }
    }

    #[test]
    fn valid_config_is_returned_by_reference() {
        let config = valid();
        let validated = validate_config(&config).expect("valid");
        assert!(std::ptr::eq(validated, &config));
    }

    #[test]
    fn owned_validation_returns_unmodified_value() {
        let config = valid();
        assert_eq!(config.clone().validated().expect("valid"), config);
    }

    #[test]
    fn each_model_field_has_its_own_error() {
        let mut config = valid();
        config.model.model.clear();
        assert_eq!(
            validate_config(&config).unwrap_err(),
            ConfigValidationError::MissingModel
        );

        let mut config = valid();
        config.model.api_base_url.clear();
        assert_eq!(
            validate_config(&config).unwrap_err(),
            ConfigValidationError::MissingApiBaseUrl
        );

        let mut config = valid();
        config.model.max_tokens = 0;
        assert_eq!(
            validate_config(&config).unwrap_err(),
            ConfigValidationError::InvalidMaxTokens { value: 0 }
        );
    }

    #[test]
    fn temperature_bounds_are_inclusive() {
        let mut config = valid();
        for ok in [0.0, 2.0] {
            config.model.temperature = ok;
            assert!(validate_config(&config).is_ok(), "{ok} should pass");
        }
        for bad in [-0.1, 2.5, f64::NAN] {
            config.model.temperature = bad;
            assert!(matches!(
                validate_config(&config),
                Err(ConfigValidationError::InvalidTemperature { .. })
            ));
        }
    }

    #[test]
    fn memory_checks() {
        let mut config = valid();
        config.memory.vector_dimensions = -1;
        assert!(matches!(
            config.memory.validate(),
            Err(ConfigValidationError::InvalidVectorDimensions { value: -1 })
        ));

        let mut config = valid();
        config.memory.max_memories = 0;
        assert!(matches!(
            config.memory.validate(),
            Err(ConfigValidationError::InvalidMaxMemories { value: 0 })
        ));

        let mut config = valid();
        config.memory.similarity_threshold = 1.0;
        assert!(config.memory.validate().is_ok());
        config.memory.similarity_threshold = 1.01;
        assert!(matches!(
            config.memory.validate(),
            Err(ConfigValidationError::InvalidSimilarityThreshold { .. })
        ));

        let mut config = valid();
        config.memory.short_term_capacity = 0;
        assert!(matches!(
            config.memory.validate(),
            Err(ConfigValidationError::InvalidShortTermCapacity { value: 0 })
        ));
    }

    #[test]
    fn decision_checks() {
        let mut config = valid();
        config.decision.confidence_threshold = -0.5;
        assert!(matches!(
            config.decision.validate(),
            Err(ConfigValidationError::InvalidConfidenceThreshold { .. })
        ));

        let mut config = valid();
        config.decision.max_retries = -1;
        assert_eq!(
            config.decision.validate(),
            Err(ConfigValidationError::InvalidMaxRetries { value: -1 })
        );

        let mut config = valid();
        config.decision.max_reasoning_steps = 0;
        assert_eq!(
            config.decision.validate(),
            Err(ConfigValidationError::InvalidMaxReasoningSteps { value: 0 })
        );
    }

    #[test]
    fn memory_is_checked_before_decision() {
        let mut config = valid();
        config.memory.max_memories = 0;
        config.decision.max_reasoning_steps = 0;
        assert_eq!(
            validate_config(&config).unwrap_err().field(),
            "memory.maxMemories"
        );
    }
}

// SPDX-FileCopyrightText: 2026 Beamline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as non-empty model identifiers and a usable scorer
//! ceiling.

use crate::diagnostic::ConfigError;
use crate::model::BeamlineConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &BeamlineConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Validate routing model identifiers are non-empty
    for (key, model) in [
        ("routing.simple_model", &config.routing.simple_model),
        ("routing.medium_model", &config.routing.medium_model),
        ("routing.complex_model", &config.routing.complex_model),
    ] {
        if model.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("{key} must not be empty"),
            });
        }
    }

    // Validate scorer ceiling is usable as a divisor
    if config.scorer.score_ceiling == 0 {
        errors.push(ConfigError::Validation {
            message: "scorer.score_ceiling must be at least 1".to_string(),
        });
    }

    // Validate OpenAI settings
    if config.openai.base_url.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "openai.base_url must not be empty".to_string(),
        });
    }

    if config.openai.classifier_model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "openai.classifier_model must not be empty".to_string(),
        });
    }

    if !(0.0..=2.0).contains(&config.openai.temperature) {
        errors.push(ConfigError::Validation {
            message: format!(
                "openai.temperature must be between 0.0 and 2.0, got {}",
                config.openai.temperature
            ),
        });
    }

    // Validate log level is a known tracing directive
    let level = config.agent.log_level.to_lowercase();
    if !["trace", "debug", "info", "warn", "error"].contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level must be one of trace/debug/info/warn/error, got `{}`",
                config.agent.log_level
            ),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

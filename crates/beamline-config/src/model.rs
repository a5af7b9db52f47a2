// SPDX-FileCopyrightText: 2026 Beamline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Beamline router.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Beamline configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BeamlineConfig {
    /// Process identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Complexity-tier to model routing settings.
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Relevance scorer settings.
    #[serde(default)]
    pub scorer: ScorerConfig,

    /// OpenAI-compatible completion-service settings.
    #[serde(default)]
    pub openai: OpenAiConfig,
}

/// Process identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name used in log output.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "beamline".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Model routing configuration.
///
/// One model identifier per complexity tier. The router treats this as a
/// fixed three-entry table; unknown tiers fall back to the medium model.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Model identifier for simple specifications (cheapest tier).
    #[serde(default = "default_simple_model")]
    pub simple_model: String,

    /// Model identifier for medium specifications (mid tier).
    #[serde(default = "default_medium_model")]
    pub medium_model: String,

    /// Model identifier for complex specifications (most capable tier).
    #[serde(default = "default_complex_model")]
    pub complex_model: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            simple_model: default_simple_model(),
            medium_model: default_medium_model(),
            complex_model: default_complex_model(),
        }
    }
}

fn default_simple_model() -> String {
    "gpt-5-nano".to_string()
}

fn default_medium_model() -> String {
    "gpt-5-mini".to_string()
}

fn default_complex_model() -> String {
    "claude-sonnet-4".to_string()
}

/// Relevance scorer configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScorerConfig {
    /// Raw-score ceiling used to normalize to a percentage. Dense matches
    /// can sum well above the ceiling and saturate at 99.
    #[serde(default = "default_score_ceiling")]
    pub score_ceiling: u32,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            score_ceiling: default_score_ceiling(),
        }
    }
}

fn default_score_ceiling() -> u32 {
    120
}

/// OpenAI-compatible completion-service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpenAiConfig {
    /// API key. `None` disables the delegating classifier.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the chat-completions endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model used for complexity classification.
    #[serde(default = "default_classifier_model")]
    pub classifier_model: String,

    /// Sampling temperature for classification calls.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate per classification call.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            classifier_model: default_classifier_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_classifier_model() -> String {
    "gpt-5-nano".to_string()
}

fn default_temperature() -> f32 {
    0.1
}

fn default_max_tokens() -> u32 {
    512
}

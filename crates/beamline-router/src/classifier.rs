// SPDX-FileCopyrightText: 2026 Beamline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Specification complexity classification.
//!
//! Two interchangeable strategies behind [`SpecClassifier`]:
//! - [`HeuristicClassifier`]: fixed keyword sets, no network, no cost
//! - [`LlmClassifier`]: delegates to an external completion service and
//!   parses its JSON verdict
//!
//! Classification is total: every failure path collapses into a MEDIUM
//! result with an `error` annotation, never an `Err` to the caller.

use std::sync::{Arc, LazyLock};
use std::time::Instant;

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{debug, warn};

use beamline_config::OpenAiConfig;
use beamline_core::{CompletionProvider, CompletionRequest, TokenUsage};

/// Ordinal complexity tiers for incoming specifications.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplexityTier {
    /// Standard wavelength, clear power figure, known application.
    Simple,
    /// Multiple simultaneous parameters, noise figures, combinations.
    /// Also the fallback for missing or unrecognized classifications.
    #[default]
    Medium,
    /// THz range, system integration, custom or multi-component setups.
    Complex,
}

impl ComplexityTier {
    /// Parses a tier label, defaulting to Medium for anything
    /// unrecognized. Invalid input is recovered, not rejected.
    pub fn from_label(label: &str) -> Self {
        label.trim().parse().unwrap_or_default()
    }
}

/// Result of classifying one specification.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    /// The classified complexity tier.
    pub tier: ComplexityTier,
    /// Human-readable rationale.
    pub reasoning: String,
    /// Extracted key parameter strings (wavelengths, powers, markers).
    pub key_parameters: Vec<String>,
    /// Model identifier attributed to the classification.
    pub model_id: String,
    /// Token counts for the classification call.
    pub usage: TokenUsage,
    /// Wall-clock latency of the classification.
    pub latency_ms: u64,
    /// Set when the external call failed and the MEDIUM fallback was
    /// substituted.
    pub error: Option<String>,
}

/// Strategy interface for complexity classification.
///
/// Implementations are total: they always return a [`Classification`],
/// surfacing failures through its `error` field.
#[async_trait]
pub trait SpecClassifier: Send + Sync {
    /// Classifies a specification's complexity.
    async fn classify(&self, spec_text: &str) -> Classification;
}

/// Keywords indicating complex multi-component or system-level requests.
/// Checked before the medium set; the overlap ("tunable" appears in
/// both) resolves in favor of COMPLEX.
const COMPLEX_KEYWORDS: &[&str] = &[
    "terahertz",
    "thz",
    "system",
    "integration",
    "production line",
    "multi-component",
    "custom",
    "rs-232",
    "manufacturing",
    "quality control",
    "tunable",
];

/// Keywords indicating medium-complexity multi-parameter requests.
const MEDIUM_KEYWORDS: &[&str] = &[
    "multiline",
    "multi-line",
    "multiple",
    "combination",
    "noise",
    "rms",
    "super-resolution",
    "compact",
    "combiner",
    "tunable",
];

/// Model id attributed to classification calls, real or emulated.
const CLASSIFIER_MODEL: &str = "gpt-5-nano";

static WAVELENGTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{3,4})\s*nm").unwrap());
static POWER_MW_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*mw").unwrap());
static POWER_W_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*w\b").unwrap());

/// Keyword-driven classifier with zero cost and no external calls.
///
/// Reports plausible fixed usage and latency constants per tier so the
/// downstream cost accounting exercises the same paths as a live call.
#[derive(Debug, Clone, Default)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    /// Creates a heuristic classifier.
    pub fn new() -> Self {
        Self
    }

    /// Synchronous classification core.
    pub fn classify_text(&self, spec_text: &str) -> Classification {
        let spec = spec_text.to_lowercase();

        if COMPLEX_KEYWORDS.iter().any(|kw| spec.contains(kw)) {
            return Classification {
                tier: ComplexityTier::Complex,
                reasoning: "Multi-component setup with system integration detected. \
                            Requires deep technical analysis and creative solution development."
                    .to_string(),
                key_parameters: extract_parameters(&spec, ComplexityTier::Complex),
                model_id: CLASSIFIER_MODEL.to_string(),
                usage: TokenUsage::new(847, 95),
                latency_ms: 320,
                error: None,
            };
        }

        if MEDIUM_KEYWORDS.iter().any(|kw| spec.contains(kw)) {
            return Classification {
                tier: ComplexityTier::Medium,
                reasoning: "Multiple simultaneous parameters and specific requirements detected. \
                            Extended matching with parameter comparison required."
                    .to_string(),
                key_parameters: extract_parameters(&spec, ComplexityTier::Medium),
                model_id: CLASSIFIER_MODEL.to_string(),
                usage: TokenUsage::new(623, 82),
                latency_ms: 280,
                error: None,
            };
        }

        Classification {
            tier: ComplexityTier::Simple,
            reasoning: "Standard wavelength with clear power specification. \
                        Direct catalog lookup sufficient."
                .to_string(),
            key_parameters: extract_parameters(&spec, ComplexityTier::Simple),
            model_id: CLASSIFIER_MODEL.to_string(),
            usage: TokenUsage::new(512, 68),
            latency_ms: 210,
            error: None,
        }
    }
}

#[async_trait]
impl SpecClassifier for HeuristicClassifier {
    async fn classify(&self, spec_text: &str) -> Classification {
        self.classify_text(spec_text)
    }
}

/// Best-effort parameter extraction from lowercased spec text.
fn extract_parameters(spec: &str, tier: ComplexityTier) -> Vec<String> {
    let mut params = Vec::new();

    for capture in WAVELENGTH_RE.captures_iter(spec) {
        params.push(format!("{} nm", &capture[1]));
    }

    for capture in POWER_MW_RE.captures_iter(spec) {
        params.push(format!("{} mW", &capture[1]));
    }

    for capture in POWER_W_RE.captures_iter(spec) {
        params.push(format!("{} W", &capture[1]));
    }

    if spec.contains("noise") || spec.contains("rms") {
        params.push("Noise/RMS".to_string());
    }

    if tier == ComplexityTier::Complex {
        if spec.contains("thz") || spec.contains("terahertz") {
            params.push("THz range".to_string());
        }
        if spec.contains("integration") || spec.contains("rs-232") {
            params.push("System integration".to_string());
        }
    }

    if params.is_empty() {
        params = vec!["Wavelength".to_string(), "Power".to_string()];
    }

    params
}

/// Instruction prompt for the delegating classifier.
const CLASSIFIER_SYSTEM_PROMPT: &str = "\
You are a technical classifier for laser and photonics requests.
Analyze the customer specification and classify the complexity:

SIMPLE: Standard wavelengths (405-1064nm), clear power specification, standard application
-> Simple catalog lookup is sufficient

MEDIUM: Multiple parameters simultaneously, specific noise requirements,
combination of multiple wavelengths
-> Extended matching and parameter comparison needed

COMPLEX: Unusual wavelengths, THz range, physical calculations,
custom solutions, system integration, multi-component setup
-> Deep technical analysis and creative proposal needed

Respond ONLY with a JSON object:
{\"complexity\": \"SIMPLE|MEDIUM|COMPLEX\", \"reasoning\": \"brief explanation\", \"key_parameters\": [\"param1\", \"param2\"]}";

/// The JSON verdict shape the completion service is instructed to
/// return. Every key is optional; missing keys default.
#[derive(Debug, Deserialize)]
struct ClassifierVerdict {
    complexity: Option<String>,
    reasoning: Option<String>,
    key_parameters: Option<Vec<String>>,
}

/// Classifier that delegates to an external completion service.
///
/// Transport failures, non-2xx responses, and malformed JSON all
/// collapse into a MEDIUM fallback with zero usage and an `error`
/// annotation -- the failure never reaches the caller as an `Err`.
pub struct LlmClassifier {
    provider: Arc<dyn CompletionProvider>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl LlmClassifier {
    /// Creates a delegating classifier over the given provider.
    pub fn new(provider: Arc<dyn CompletionProvider>, config: &OpenAiConfig) -> Self {
        Self {
            provider,
            model: config.classifier_model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    fn fallback(&self, error: String, latency_ms: u64) -> Classification {
        warn!(error = %error, "classification fell back to MEDIUM");
        Classification {
            tier: ComplexityTier::Medium,
            reasoning: format!("Fallback classification (API error: {error})"),
            key_parameters: Vec::new(),
            model_id: self.model.clone(),
            usage: TokenUsage::default(),
            latency_ms,
            error: Some(error),
        }
    }
}

#[async_trait]
impl SpecClassifier for LlmClassifier {
    async fn classify(&self, spec_text: &str) -> Classification {
        let start = Instant::now();

        let request = CompletionRequest {
            model: self.model.clone(),
            system: CLASSIFIER_SYSTEM_PROMPT.to_string(),
            user: format!("Customer specification:\n{spec_text}"),
            json_output: true,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = match self.provider.complete(request).await {
            Ok(response) => response,
            Err(e) => {
                return self.fallback(e.to_string(), start.elapsed().as_millis() as u64);
            }
        };

        let latency_ms = start.elapsed().as_millis() as u64;

        let verdict: ClassifierVerdict = match serde_json::from_str(&response.text) {
            Ok(verdict) => verdict,
            Err(e) => {
                return self.fallback(format!("malformed verdict JSON: {e}"), latency_ms);
            }
        };

        let tier = verdict
            .complexity
            .as_deref()
            .map(ComplexityTier::from_label)
            .unwrap_or_default();

        debug!(tier = %tier, latency_ms, "external classification complete");

        Classification {
            tier,
            reasoning: verdict
                .reasoning
                .unwrap_or_else(|| "Classification complete".to_string()),
            key_parameters: verdict.key_parameters.unwrap_or_default(),
            model_id: self.model.clone(),
            usage: response.usage,
            latency_ms,
            error: None,
        }
    }
}

// SPDX-FileCopyrightText: 2026 Beamline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Complexity-tier to model routing.

use serde::Serialize;
use tracing::info;

use beamline_config::RoutingConfig;
use beamline_cost::pricing;

use crate::classifier::{Classification, ComplexityTier};

/// Routing outcome for one classified specification.
#[derive(Debug, Clone, Serialize)]
pub struct RoutingDecision {
    /// Identifier of the selected model.
    pub model_id: String,
    /// Display label for the selected model.
    pub model_label: String,
    /// The tier the decision was made for.
    pub tier: ComplexityTier,
    /// Why this model was selected.
    pub rationale: &'static str,
    /// USD cost of the classification call that produced the tier.
    pub classifier_cost_usd: f64,
    /// Latency of the classification call, ms.
    pub classifier_latency_ms: u64,
}

const SIMPLE_RATIONALE: &str = "Standard request with clear parameters detected. \
     GPT-5 Nano is sufficient for direct catalog lookup, \
     the fastest and cheapest model.";

const MEDIUM_RATIONALE: &str = "Medium complexity with multiple parameters. \
     GPT-5 Mini provides enhanced analysis capabilities at moderate cost.";

const COMPLEX_RATIONALE: &str = "High complexity with system integration / unusual specs. \
     Claude Sonnet 4 deployed for deep technical analysis and \
     creative solution development.";

/// Maps a model identifier to its display label.
///
/// Unknown identifiers display as themselves, so operator-overridden
/// routing tables still render something meaningful.
pub fn display_name(model_id: &str) -> String {
    match model_id {
        "gpt-5-nano" => "GPT-5 Nano".to_string(),
        "gpt-5-mini" => "GPT-5 Mini".to_string(),
        "claude-sonnet-4" => "Claude Sonnet 4".to_string(),
        other => other.to_string(),
    }
}

/// Routes classified specifications to the configured model per tier.
///
/// Routing is total and deterministic: every tier has exactly one
/// configured model, so there is no failure path.
#[derive(Debug, Clone)]
pub struct ModelRouter {
    routing: RoutingConfig,
}

impl ModelRouter {
    /// Creates a router over the given routing table.
    pub fn new(routing: RoutingConfig) -> Self {
        Self { routing }
    }

    /// Selects the model for a classification and prices the
    /// classification call that produced it.
    pub fn route(&self, classification: &Classification) -> RoutingDecision {
        let (model_id, rationale) = match classification.tier {
            ComplexityTier::Simple => (&self.routing.simple_model, SIMPLE_RATIONALE),
            ComplexityTier::Medium => (&self.routing.medium_model, MEDIUM_RATIONALE),
            ComplexityTier::Complex => (&self.routing.complex_model, COMPLEX_RATIONALE),
        };

        let classifier_cost_usd =
            pricing::cost(&classification.model_id, &classification.usage);

        info!(
            tier = %classification.tier,
            model = %model_id,
            classifier_cost_usd,
            "routed specification"
        );

        RoutingDecision {
            model_id: model_id.clone(),
            model_label: display_name(model_id),
            tier: classification.tier,
            rationale,
            classifier_cost_usd,
            classifier_latency_ms: classification.latency_ms,
        }
    }
}

impl Default for ModelRouter {
    fn default() -> Self {
        Self::new(RoutingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beamline_core::TokenUsage;

    fn classification(tier: ComplexityTier) -> Classification {
        Classification {
            tier,
            reasoning: "test".to_string(),
            key_parameters: vec![],
            model_id: "gpt-5-nano".to_string(),
            usage: TokenUsage::new(847, 95),
            latency_ms: 320,
            error: None,
        }
    }

    #[test]
    fn simple_routes_to_nano() {
        let decision = ModelRouter::default().route(&classification(ComplexityTier::Simple));
        assert_eq!(decision.model_id, "gpt-5-nano");
        assert_eq!(decision.model_label, "GPT-5 Nano");
        assert!(decision.rationale.contains("direct catalog lookup"));
    }

    #[test]
    fn medium_routes_to_mini() {
        let decision = ModelRouter::default().route(&classification(ComplexityTier::Medium));
        assert_eq!(decision.model_id, "gpt-5-mini");
        assert_eq!(decision.model_label, "GPT-5 Mini");
    }

    #[test]
    fn complex_routes_to_sonnet() {
        let decision = ModelRouter::default().route(&classification(ComplexityTier::Complex));
        assert_eq!(decision.model_id, "claude-sonnet-4");
        assert_eq!(decision.model_label, "Claude Sonnet 4");
        assert!(decision.rationale.contains("deep technical analysis"));
    }

    #[test]
    fn classifier_cost_priced_from_classification_model() {
        let decision = ModelRouter::default().route(&classification(ComplexityTier::Simple));
        // 847 input + 95 output at gpt-5-nano rates.
        let expected = (847.0 / 1e6) * 0.05 + (95.0 / 1e6) * 0.40;
        assert!((decision.classifier_cost_usd - expected).abs() < 1e-15);
        assert_eq!(decision.classifier_latency_ms, 320);
    }

    #[test]
    fn overridden_routing_table_is_honored() {
        let router = ModelRouter::new(RoutingConfig {
            simple_model: "gpt-5-mini".to_string(),
            medium_model: "gpt-5".to_string(),
            complex_model: "gpt-5.2".to_string(),
        });

        let decision = router.route(&classification(ComplexityTier::Medium));
        assert_eq!(decision.model_id, "gpt-5");
        // No display label registered; the id stands in.
        assert_eq!(decision.model_label, "gpt-5");
    }

    #[test]
    fn every_tier_routes() {
        let router = ModelRouter::default();
        for tier in [
            ComplexityTier::Simple,
            ComplexityTier::Medium,
            ComplexityTier::Complex,
        ] {
            let decision = router.route(&classification(tier));
            assert_eq!(decision.tier, tier);
            assert!(!decision.model_id.is_empty());
        }
    }
}

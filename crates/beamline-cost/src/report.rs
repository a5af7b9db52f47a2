// SPDX-FileCopyrightText: 2026 Beamline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cost comparison and savings reporting.
//!
//! Builds the figures a presentation layer renders: per-model cost
//! comparison over the same token counts, and an end-to-end savings
//! summary across the classifier and proposal-generation call legs.

use serde::Serialize;

use beamline_core::TokenUsage;

use crate::pricing::{self, MODEL_PRICING, Savings};

/// One call leg of the pipeline: which model ran and what it consumed.
#[derive(Debug, Clone, Serialize)]
pub struct CallLeg {
    /// Model identifier.
    pub model_id: String,
    /// Token counts for the leg.
    pub usage: TokenUsage,
}

impl CallLeg {
    /// Creates a call leg.
    pub fn new(model_id: impl Into<String>, usage: TokenUsage) -> Self {
        Self {
            model_id: model_id.into(),
            usage,
        }
    }

    /// USD cost of this leg.
    pub fn cost(&self) -> f64 {
        pricing::cost(&self.model_id, &self.usage)
    }
}

/// One row of the cost comparison table.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    /// Model identifier.
    pub model_id: &'static str,
    /// Display label.
    pub label: &'static str,
    /// UI color tag.
    pub color: &'static str,
    /// Input-side cost, USD.
    pub input_cost: f64,
    /// Output-side cost, USD.
    pub output_cost: f64,
    /// Combined cost, USD.
    pub total_cost: f64,
}

/// End-to-end cost and savings summary.
#[derive(Debug, Clone, Serialize)]
pub struct SavingsSummary {
    /// Cost of the classification leg, USD.
    pub classifier_cost: f64,
    /// Cost of the proposal-generation leg, USD.
    pub generation_cost: f64,
    /// Sum of both legs, USD.
    pub actual_total_cost: f64,
    /// Combined token counts across both legs.
    pub total_usage: TokenUsage,
    /// Savings versus the most expensive model.
    pub savings: Savings,
}

/// Formats a USD amount for display.
///
/// Sub-millidollar amounts keep six decimals so classifier-sized calls
/// do not render as $0.0000.
pub fn format_cost(cost_usd: f64) -> String {
    if cost_usd < 0.001 {
        format!("${cost_usd:.6}")
    } else {
        format!("${cost_usd:.4}")
    }
}

/// Builds the cost comparison across every model in the pricing table,
/// computed over the same token counts.
pub fn comparison_table(usage: &TokenUsage) -> Vec<ComparisonRow> {
    MODEL_PRICING
        .iter()
        .map(|entry| {
            let input_cost = (usage.input_tokens as f64 / 1_000_000.0) * entry.input_per_mtok;
            let output_cost = (usage.output_tokens as f64 / 1_000_000.0) * entry.output_per_mtok;
            ComparisonRow {
                model_id: entry.model_id,
                label: entry.label,
                color: entry.color,
                input_cost,
                output_cost,
                total_cost: input_cost + output_cost,
            }
        })
        .collect()
}

/// Builds the savings summary across the classifier and generation legs.
pub fn savings_summary(classifier: &CallLeg, generation: &CallLeg) -> SavingsSummary {
    let classifier_cost = classifier.cost();
    let generation_cost = generation.cost();
    let actual_total_cost = classifier_cost + generation_cost;
    let total_usage = classifier.usage.combined(&generation.usage);

    SavingsSummary {
        classifier_cost,
        generation_cost,
        actual_total_cost,
        total_usage,
        savings: pricing::savings(actual_total_cost, &total_usage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_cost_switches_precision() {
        assert_eq!(format_cost(0.0000874), "$0.000087");
        assert_eq!(format_cost(0.0234), "$0.0234");
        assert_eq!(format_cost(1.5), "$1.5000");
    }

    #[test]
    fn comparison_table_covers_all_models() {
        let rows = comparison_table(&TokenUsage::new(1_000_000, 1_000_000));
        assert_eq!(rows.len(), MODEL_PRICING.len());

        let nano = rows.iter().find(|r| r.model_id == "gpt-5-nano").unwrap();
        assert!((nano.input_cost - 0.05).abs() < 1e-12);
        assert!((nano.output_cost - 0.40).abs() < 1e-12);
        assert!((nano.total_cost - 0.45).abs() < 1e-12);
    }

    #[test]
    fn comparison_table_keeps_display_order() {
        let rows = comparison_table(&TokenUsage::default());
        let ids: Vec<_> = rows.iter().map(|r| r.model_id).collect();
        assert_eq!(
            ids,
            vec!["gpt-5-nano", "gpt-5-mini", "gpt-5", "gpt-5.2", "claude-sonnet-4"]
        );
    }

    #[test]
    fn savings_summary_aggregates_legs() {
        let classifier = CallLeg::new("gpt-5-nano", TokenUsage::new(847, 95));
        let generation = CallLeg::new("gpt-5-mini", TokenUsage::new(2000, 900));

        let summary = savings_summary(&classifier, &generation);

        assert_eq!(summary.total_usage.input_tokens, 2847);
        assert_eq!(summary.total_usage.output_tokens, 995);
        assert!(
            (summary.actual_total_cost
                - (summary.classifier_cost + summary.generation_cost))
                .abs()
                < 1e-15
        );
        // Routed spend is far below the reference model.
        assert!(summary.savings.pct > 80.0);
        assert_eq!(summary.savings.reference_model, "claude-sonnet-4");
    }

    #[test]
    fn savings_summary_with_unknown_generation_model() {
        // Untracked model prices at zero; summary still coherent.
        let classifier = CallLeg::new("gpt-5-nano", TokenUsage::new(500, 60));
        let generation = CallLeg::new("in-house-llm", TokenUsage::new(100, 10));

        let summary = savings_summary(&classifier, &generation);
        assert_eq!(summary.generation_cost, 0.0);
        assert!(summary.actual_total_cost > 0.0);
    }
}

// SPDX-FileCopyrightText: 2026 Beamline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model pricing table and cost calculation.
//!
//! Rates are USD per million tokens, February 2026. The table is fixed at
//! compile time; an unknown model id prices at zero -- untracked model,
//! no charge attributed -- rather than erroring.

use serde::Serialize;

use beamline_core::TokenUsage;

/// Per-model pricing and display metadata.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PricingEntry {
    /// Model identifier, unique within the table.
    pub model_id: &'static str,
    /// Cost per million input tokens, USD.
    pub input_per_mtok: f64,
    /// Cost per million output tokens, USD.
    pub output_per_mtok: f64,
    /// Display label.
    pub label: &'static str,
    /// UI color tag.
    pub color: &'static str,
    /// Provider tag.
    pub provider: &'static str,
}

/// All priced models, in display order.
pub static MODEL_PRICING: &[PricingEntry] = &[
    PricingEntry {
        model_id: "gpt-5-nano",
        input_per_mtok: 0.05,
        output_per_mtok: 0.40,
        label: "GPT-5 Nano (Classifier)",
        color: "#059669",
        provider: "openai",
    },
    PricingEntry {
        model_id: "gpt-5-mini",
        input_per_mtok: 0.25,
        output_per_mtok: 2.00,
        label: "GPT-5 Mini (Medium)",
        color: "#D97706",
        provider: "openai",
    },
    PricingEntry {
        model_id: "gpt-5",
        input_per_mtok: 1.25,
        output_per_mtok: 10.00,
        label: "GPT-5 (Reference)",
        color: "#009de2",
        provider: "openai",
    },
    PricingEntry {
        model_id: "gpt-5.2",
        input_per_mtok: 1.75,
        output_per_mtok: 14.00,
        label: "GPT-5.2 Thinking (Flagship)",
        color: "#EF4444",
        provider: "openai",
    },
    PricingEntry {
        model_id: "claude-sonnet-4",
        input_per_mtok: 3.00,
        output_per_mtok: 15.00,
        label: "Claude Sonnet 4 (Complex)",
        color: "#7C3AED",
        provider: "anthropic",
    },
];

/// Savings of an actual spend against the most expensive model in the
/// table, computed over the same token counts.
#[derive(Debug, Clone, Serialize)]
pub struct Savings {
    /// Percentage saved, rounded to one decimal.
    pub pct: f64,
    /// Absolute USD saved.
    pub absolute: f64,
    /// The reference (most expensive) model id.
    pub reference_model: &'static str,
    /// Display label of the reference model.
    pub reference_label: &'static str,
    /// What the reference model would have cost.
    pub reference_cost: f64,
}

/// Looks up the pricing entry for a model id. Exact match only.
pub fn entry(model_id: &str) -> Option<&'static PricingEntry> {
    MODEL_PRICING.iter().find(|e| e.model_id == model_id)
}

/// Calculates USD cost for a single call.
///
/// Formula: (input_tokens / 1M) * input rate + (output_tokens / 1M) *
/// output rate. Unknown models cost zero.
pub fn cost(model_id: &str, usage: &TokenUsage) -> f64 {
    let Some(pricing) = entry(model_id) else {
        return 0.0;
    };
    let input = (usage.input_tokens as f64 / 1_000_000.0) * pricing.input_per_mtok;
    let output = (usage.output_tokens as f64 / 1_000_000.0) * pricing.output_per_mtok;
    input + output
}

/// The model with the highest combined per-million rate.
pub fn most_expensive_model() -> &'static PricingEntry {
    MODEL_PRICING
        .iter()
        .max_by(|a, b| {
            (a.input_per_mtok + a.output_per_mtok)
                .total_cmp(&(b.input_per_mtok + b.output_per_mtok))
        })
        .expect("pricing table is non-empty")
}

/// Computes savings versus the most expensive model over the same token
/// counts.
///
/// When the reference cost is zero (zero tokens), all metrics are zero --
/// no division by zero, no phantom savings.
pub fn savings(actual_cost: f64, usage: &TokenUsage) -> Savings {
    let reference = most_expensive_model();
    let reference_cost = cost(reference.model_id, usage);

    if reference_cost == 0.0 {
        return Savings {
            pct: 0.0,
            absolute: 0.0,
            reference_model: reference.model_id,
            reference_label: reference.label,
            reference_cost: 0.0,
        };
    }

    let absolute = reference_cost - actual_cost;
    let pct = (absolute / reference_cost * 100.0 * 10.0).round() / 10.0;

    Savings {
        pct,
        absolute,
        reference_model: reference.model_id,
        reference_label: reference.label,
        reference_cost,
    }
}

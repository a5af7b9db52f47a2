// SPDX-FileCopyrightText: 2026 Beamline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Beamline workspace.

use serde::{Deserialize, Serialize};

/// Token counts for a single completion-service call.
///
/// Input tokens cover everything submitted (system prompt plus user
/// text); output tokens cover everything generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens submitted to the model.
    pub input_tokens: u64,
    /// Tokens generated by the model.
    pub output_tokens: u64,
}

impl TokenUsage {
    /// Creates a usage record from raw counts.
    pub fn new(input_tokens: u64, output_tokens: u64) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    /// Total tokens across both directions.
    pub fn total(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }

    /// Element-wise sum of two usage records.
    pub fn combined(&self, other: &TokenUsage) -> TokenUsage {
        TokenUsage {
            input_tokens: self.input_tokens + other.input_tokens,
            output_tokens: self.output_tokens + other.output_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_totals_and_combines() {
        let classifier = TokenUsage::new(847, 95);
        let generation = TokenUsage::new(1200, 600);

        assert_eq!(classifier.total(), 942);

        let combined = classifier.combined(&generation);
        assert_eq!(combined.input_tokens, 2047);
        assert_eq!(combined.output_tokens, 695);
    }

    #[test]
    fn usage_default_is_zero() {
        let usage = TokenUsage::default();
        assert_eq!(usage.total(), 0);
    }

    #[test]
    fn usage_serialization_round_trip() {
        let usage = TokenUsage::new(512, 68);
        let json = serde_json::to_string(&usage).expect("should serialize");
        let parsed: TokenUsage = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(usage, parsed);
    }
}

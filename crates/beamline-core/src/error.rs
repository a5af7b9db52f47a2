// SPDX-FileCopyrightText: 2026 Beamline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Beamline routing core.
//!
//! Core operations (scoring, classification, routing, cost arithmetic)
//! are total and never surface these errors; only the completion-service
//! boundary produces them, and the delegating classifier converts every
//! one into its MEDIUM fallback before callers see it.

use thiserror::Error;

/// The primary error type used across the Beamline workspace.
#[derive(Debug, Error)]
pub enum BeamlineError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Completion-service errors (API failure, non-2xx status, malformed response).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_prefixed() {
        let config = BeamlineError::Config("bad key".into());
        assert_eq!(config.to_string(), "configuration error: bad key");

        let provider = BeamlineError::Provider {
            message: "API returned 503".into(),
            source: None,
        };
        assert_eq!(provider.to_string(), "provider error: API returned 503");

        let internal = BeamlineError::Internal("unreachable".into());
        assert_eq!(internal.to_string(), "internal error: unreachable");
    }

    #[test]
    fn provider_error_carries_source() {
        let provider = BeamlineError::Provider {
            message: "HTTP request failed".into(),
            source: Some(Box::new(std::io::Error::other("connection reset"))),
        };
        assert!(std::error::Error::source(&provider).is_some());
    }
}

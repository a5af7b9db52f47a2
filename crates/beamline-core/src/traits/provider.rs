// SPDX-FileCopyrightText: 2026 Beamline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Completion-provider trait for external language-model services.
//!
//! Providers are selected through the routing table by model identifier,
//! never by inspecting model-id prefixes at call sites. The contract is a
//! single non-streaming `complete` operation; callers that need a timeout
//! must impose it at their own boundary.

use async_trait::async_trait;

use crate::error::BeamlineError;
use crate::types::TokenUsage;

/// A request to a completion service.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Model identifier (e.g., "gpt-5-nano").
    pub model: String,
    /// System/instruction prompt.
    pub system: String,
    /// User content.
    pub user: String,
    /// Constrain the service to return a single JSON object.
    pub json_output: bool,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

/// A response from a completion service.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Generated text (a JSON object when `json_output` was requested).
    pub text: String,
    /// Token counts reported by the service.
    pub usage: TokenUsage,
    /// Model identifier the service attributed the response to.
    pub model: String,
}

/// Adapter for external completion services.
///
/// Implementations handle transport, authentication, and retry; they
/// report every failure as [`BeamlineError::Provider`] and leave recovery
/// to the caller (the delegating classifier recovers by substituting its
/// MEDIUM fallback).
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends a completion request and returns the full response.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, BeamlineError>;
}

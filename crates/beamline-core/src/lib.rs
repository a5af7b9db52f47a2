// SPDX-FileCopyrightText: 2026 Beamline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Beamline spec-to-proposal router.
//!
//! This crate provides the foundational error type, token accounting
//! types, and the completion-provider trait used throughout the Beamline
//! workspace. The catalog, scorer, classifier, router, and cost crates
//! all build on the definitions here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::BeamlineError;
pub use traits::{CompletionProvider, CompletionRequest, CompletionResponse};
pub use types::TokenUsage;

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoProvider;

    #[async_trait::async_trait]
    impl CompletionProvider for EchoProvider {
        async fn complete(
            &self,
            request: CompletionRequest,
        ) -> Result<CompletionResponse, BeamlineError> {
            Ok(CompletionResponse {
                text: request.user,
                usage: TokenUsage::new(1, 1),
                model: request.model,
            })
        }
    }

    #[tokio::test]
    async fn provider_trait_is_object_safe() {
        let provider: Box<dyn CompletionProvider> = Box::new(EchoProvider);
        let response = provider
            .complete(CompletionRequest {
                model: "gpt-5-nano".into(),
                system: "classify".into(),
                user: "532 nm laser".into(),
                json_output: false,
                temperature: 0.1,
                max_tokens: 256,
            })
            .await
            .expect("echo provider never fails");
        assert_eq!(response.text, "532 nm laser");
        assert_eq!(response.model, "gpt-5-nano");
    }
}

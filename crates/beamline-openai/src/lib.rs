// SPDX-FileCopyrightText: 2026 Beamline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI-compatible completion provider for Beamline.
//!
//! This crate provides:
//! - [`OpenAiClient`]: HTTP client for chat-completions endpoints with
//!   bearer authentication and transient-error retry
//! - A [`CompletionProvider`] implementation adapting chat completions
//!   to the provider-neutral interface the classifier consumes

pub mod client;
pub mod types;

pub use client::OpenAiClient;
pub use types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseFormat};

use async_trait::async_trait;

use beamline_core::{BeamlineError, CompletionProvider, CompletionRequest, CompletionResponse, TokenUsage};

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, BeamlineError> {
        let chat_request = ChatCompletionRequest {
            model: request.model,
            messages: vec![
                ChatMessage::system(request.system),
                ChatMessage::user(request.user),
            ],
            response_format: request.json_output.then(ResponseFormat::json_object),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self.chat(&chat_request).await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| BeamlineError::Provider {
                message: "API response contained no choices".into(),
                source: None,
            })?;

        Ok(CompletionResponse {
            text: choice.message.content,
            usage: TokenUsage::new(response.usage.prompt_tokens, response.usage.completion_tokens),
            model: response.model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use beamline_config::OpenAiConfig;

    fn provider(base_url: &str) -> OpenAiClient {
        let config = OpenAiConfig {
            api_key: Some("test-api-key".into()),
            ..OpenAiConfig::default()
        };
        OpenAiClient::new(&config)
            .unwrap()
            .with_base_url(base_url.to_string())
    }

    fn completion_request() -> CompletionRequest {
        CompletionRequest {
            model: "gpt-5-nano".into(),
            system: "classify".into(),
            user: "532 nm laser".into(),
            json_output: true,
            temperature: 0.1,
            max_tokens: 512,
        }
    }

    #[tokio::test]
    async fn complete_maps_chat_response() {
        let server = MockServer::start().await;

        let body = serde_json::json!({
            "id": "chatcmpl-map",
            "model": "gpt-5-nano",
            "choices": [{
                "message": {"role": "assistant", "content": "{\"complexity\": \"SIMPLE\"}"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 512, "completion_tokens": 68, "total_tokens": 580}
        });

        // json_output must surface as a response_format constraint.
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "response_format": {"type": "json_object"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let result = provider(&server.uri())
            .complete(completion_request())
            .await
            .unwrap();

        assert_eq!(result.text, "{\"complexity\": \"SIMPLE\"}");
        assert_eq!(result.usage, TokenUsage::new(512, 68));
        assert_eq!(result.model, "gpt-5-nano");
    }

    #[tokio::test]
    async fn complete_errors_on_empty_choices() {
        let server = MockServer::start().await;

        let body = serde_json::json!({
            "id": "chatcmpl-empty",
            "model": "gpt-5-nano",
            "choices": [],
            "usage": {"prompt_tokens": 10, "completion_tokens": 0, "total_tokens": 10}
        });

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let result = provider(&server.uri()).complete(completion_request()).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("no choices"));
    }
}

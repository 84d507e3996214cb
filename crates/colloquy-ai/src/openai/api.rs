//! ChatModel implementation for OpenAiClient.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{AiError, AiResponse, ChatModel, Message};

use super::client::OpenAiClient;

#[async_trait]
impl ChatModel for OpenAiClient {
    async fn generate(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(messages);

        debug!(
            model = %self.config.model,
            messages = messages.len(),
            "OpenAI chat completion request"
        );

        let response = self
            .http
            .post(self.api_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                AiError::Timeout
            } else {
                AiError::ParseError(e.to_string())
            }
        })?;

        let parsed = self.parse_response(json)?;
        if parsed.usage.total_tokens() == 0 {
            warn!("No usage data in chat completion response");
        }
        Ok(parsed)
    }
}

fn transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::openai::OpenAiConfig;

    fn client_for(server: &MockServer) -> OpenAiClient {
        OpenAiClient::new(
            OpenAiConfig::new("sk-test", "gpt-3.5-turbo").with_base_url(server.base_url()),
        )
        .unwrap()
    }

    fn question() -> Vec<Message> {
        vec![
            Message::system("You are a film expert"),
            Message::user("Best Tarantino movie?"),
        ]
    }

    #[tokio::test]
    async fn posts_chat_completion_and_reads_reply() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .header("authorization", "Bearer sk-test")
                    .body_contains("Best Tarantino movie?");
                then.status(200).json_body(json!({
                    "choices": [{"message": {"role": "assistant", "content": "Pulp Fiction"}}],
                    "usage": {"prompt_tokens": 21, "completion_tokens": 3}
                }));
            })
            .await;

        let response = client_for(&server).generate(&question()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.content, "Pulp Fiction");
        assert_eq!(response.usage.input_tokens, 21);
        assert_eq!(response.usage.output_tokens, 3);
    }

    #[tokio::test]
    async fn too_many_requests_is_rate_limited() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(429).body("slow down");
            })
            .await;

        let err = client_for(&server).generate(&question()).await.unwrap_err();
        assert!(matches!(err, AiError::RateLimited));
    }

    #[tokio::test]
    async fn server_error_carries_status_and_truncated_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(500).body("x".repeat(1000));
            })
            .await;

        let err = client_for(&server).generate(&question()).await.unwrap_err();
        match err {
            AiError::ApiError(message) => {
                assert!(message.starts_with("HTTP 500"), "{message}");
                let body = message.split_once(": ").map(|(_, b)| b).unwrap_or("");
                assert_eq!(body.len(), 200);
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn reply_without_choices_is_parse_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).json_body(json!({"id": "chatcmpl-1"}));
            })
            .await;

        let err = client_for(&server).generate(&question()).await.unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));
    }

    #[tokio::test]
    async fn non_json_success_body_is_parse_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).body("<html>gateway</html>");
            })
            .await;

        let err = client_for(&server).generate(&question()).await.unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));
    }

    #[tokio::test]
    async fn slow_endpoint_times_out() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200)
                    .delay(Duration::from_secs(2))
                    .json_body(json!({"choices": []}));
            })
            .await;

        let client = OpenAiClient::new(
            OpenAiConfig::new("sk-test", "gpt-3.5-turbo")
                .with_base_url(server.base_url())
                .with_timeouts(Duration::from_secs(1), Duration::from_millis(100)),
        )
        .unwrap();

        let err = client.generate(&question()).await.unwrap_err();
        assert!(matches!(err, AiError::Timeout), "{err:?}");
    }

    #[tokio::test]
    async fn refused_connection_is_network_error() {
        let client = OpenAiClient::new(
            OpenAiConfig::new("sk-test", "gpt-3.5-turbo").with_base_url("http://127.0.0.1:1"),
        )
        .unwrap();

        let err = client.generate(&question()).await.unwrap_err();
        assert!(matches!(err, AiError::NetworkError(_)), "{err:?}");
    }
}

//! OpenAI / Azure OpenAI gateway

use super::settings::{OpenAiSettings, Target};
use super::wire::{ChatRequest, error_message, parse_reply};
use crate::providers::ProviderKind;
use async_trait::async_trait;
use roundtable_application::{CompletionRequest, GatewayError, LlmGateway};
use tracing::{debug, info};

pub struct OpenAiGateway {
    client: reqwest::Client,
    settings: OpenAiSettings,
    url: String,
}

impl OpenAiGateway {
    pub fn new(settings: OpenAiSettings) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| GatewayError::Configuration(format!("HTTP client: {}", e)))?;
        let url = settings.completions_url();

        info!(
            provider = %settings.kind(),
            model = settings.model_label(),
            "Chat completion gateway ready"
        );

        Ok(Self {
            client,
            settings,
            url,
        })
    }

    pub fn settings(&self) -> &OpenAiSettings {
        &self.settings
    }

    fn model(&self) -> Option<&str> {
        match &self.settings.target {
            Target::OpenAi { model, .. } => Some(model),
            Target::Azure { .. } => None,
        }
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let body = ChatRequest::new(self.model(), request);
        debug!(
            messages = body.messages.len(),
            "Sending chat completion to {}", self.url
        );

        let http = self.client.post(&self.url).json(&body);
        let http = match self.settings.kind() {
            ProviderKind::OpenAi => http.bearer_auth(&self.settings.api_key),
            ProviderKind::Azure => http.header("api-key", &self.settings.api_key),
        };

        let response = http.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            return Err(GatewayError::RequestFailed(format!(
                "{}: {}",
                status,
                error_message(&text)
            )));
        }

        parse_reply(&text)
    }
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::Connection(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn settings(target: Target) -> OpenAiSettings {
        OpenAiSettings {
            api_key: "test-key".to_string(),
            target,
            request_timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_openai_gateway_sends_model() {
        let gateway = OpenAiGateway::new(settings(Target::OpenAi {
            base_url: "http://localhost:9/v1/".to_string(),
            model: "gpt-4o".to_string(),
        }))
        .unwrap();

        assert_eq!(gateway.model(), Some("gpt-4o"));
        assert_eq!(gateway.url, "http://localhost:9/v1/chat/completions");
    }

    #[test]
    fn test_azure_gateway_omits_model() {
        let gateway = OpenAiGateway::new(settings(Target::Azure {
            endpoint: "https://team.openai.azure.com".to_string(),
            deployment: "gpt4o".to_string(),
            api_version: "2024-06-01".to_string(),
        }))
        .unwrap();

        assert_eq!(gateway.model(), None);
        assert_eq!(gateway.settings().kind(), ProviderKind::Azure);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_transport_error() {
        let gateway = OpenAiGateway::new(settings(Target::OpenAi {
            base_url: "http://127.0.0.1:9/v1".to_string(),
            model: "gpt-4o".to_string(),
        }))
        .unwrap();
        let request = CompletionRequest::new().user("ping");

        let err = gateway.complete(&request).await.unwrap_err();

        assert!(
            matches!(err, GatewayError::Connection(_) | GatewayError::RequestFailed(_)),
            "{:?}",
            err
        );
    }
}

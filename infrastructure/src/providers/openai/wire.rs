//! Chat-completions request and response bodies

use roundtable_application::{CompletionRequest, GatewayError};
use serde::{Deserialize, Serialize};

/// Longest `name` the API accepts on a message
const MAX_NAME_LEN: usize = 64;

#[derive(Debug, Serialize)]
pub(super) struct ChatRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<&'a str>,
    pub messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub(super) struct WireMessage<'a> {
    pub role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub content: &'a str,
}

impl<'a> ChatRequest<'a> {
    pub fn new(model: Option<&'a str>, request: &'a CompletionRequest) -> Self {
        let messages = request
            .messages()
            .iter()
            .map(|m| WireMessage {
                role: m.role.as_str(),
                name: m.name.as_deref().and_then(wire_name),
                content: &m.content,
            })
            .collect();
        Self { model, messages }
    }
}

/// Restrict a speaker name to the characters the API allows.
fn wire_name(name: &str) -> Option<String> {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .take(MAX_NAME_LEN)
        .collect();
    (!cleaned.is_empty()).then_some(cleaned)
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Extract the first choice's text from a success body.
pub(super) fn parse_reply(body: &str) -> Result<String, GatewayError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::InvalidResponse(format!("malformed body: {}", e)))?;
    response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GatewayError::InvalidResponse("no choices in response".to_string()))?
        .message
        .content
        .ok_or_else(|| GatewayError::InvalidResponse("reply has no content".to_string()))
}

/// Best-effort human message from an error body.
pub(super) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

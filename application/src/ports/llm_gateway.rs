//! LLM Gateway port
//!
//! Defines the interface for communicating with chat-completion providers.

use async_trait::async_trait;
use roundtable_domain::{ConversationHistory, Role};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Role of a single message sent to the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptRole {
    System,
    User,
    Assistant,
}

impl PromptRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptRole::System => "system",
            PromptRole::User => "user",
            PromptRole::Assistant => "assistant",
        }
    }
}

impl From<Role> for PromptRole {
    fn from(role: Role) -> Self {
        match role {
            Role::User => PromptRole::User,
            Role::Agent => PromptRole::Assistant,
            Role::System => PromptRole::System,
        }
    }
}

/// One message of a completion request.
///
/// `name` carries the speaking agent for assistant messages so the model can
/// tell the participants apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub name: Option<String>,
    pub content: String,
}

impl PromptMessage {
    pub fn new(role: PromptRole, content: impl Into<String>) -> Self {
        Self {
            role,
            name: None,
            content: content.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Ordered message list for one chat completion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionRequest {
    messages: Vec<PromptMessage>,
}

impl CompletionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn system(mut self, content: impl Into<String>) -> Self {
        self.messages
            .push(PromptMessage::new(PromptRole::System, content));
        self
    }

    pub fn user(mut self, content: impl Into<String>) -> Self {
        self.messages.push(PromptMessage::new(PromptRole::User, content));
        self
    }

    /// Append every message of the conversation, in order.
    pub fn history(mut self, history: &ConversationHistory) -> Self {
        self.messages.extend(history.iter().map(|msg| {
            let prompt = PromptMessage::new(msg.role().into(), msg.text());
            if msg.is_agent() {
                prompt.with_name(msg.author())
            } else {
                prompt
            }
        }));
        self
    }

    pub fn messages(&self) -> &[PromptMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Content of the last message, if any
    pub fn last_content(&self) -> Option<&str> {
        self.messages.last().map(|m| m.content.as_str())
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to a chat-completion
/// provider. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send the messages and return the assistant's reply text
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}

//! Chat-completion providers
//!
//! Adapters implementing the [`LlmGateway`](roundtable_application::LlmGateway)
//! port against hosted model APIs.

pub mod openai;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hosted API flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Azure,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Azure => "azure",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::OpenAi => write!(f, "OpenAI"),
            ProviderKind::Azure => write!(f, "Azure OpenAI"),
        }
    }
}

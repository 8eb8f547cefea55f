//! Provider configuration from TOML (`[provider]` section)
//!
//! API keys are never read from files; see
//! [`OpenAiSettings`](crate::providers::openai::OpenAiSettings).

use crate::providers::ProviderKind;
use serde::{Deserialize, Serialize};

/// Raw provider configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// "openai" or "azure"; detected from the environment when unset
    pub kind: Option<ProviderKind>,
    /// OpenAI model (or Azure deployment when no deployment is given)
    pub model: Option<String>,
    /// OpenAI-compatible base URL
    pub base_url: Option<String>,
    /// Azure resource endpoint
    pub endpoint: Option<String>,
    /// Azure deployment name
    pub deployment: Option<String>,
    /// Azure API version
    pub api_version: Option<String>,
    pub request_timeout_seconds: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            kind: None,
            model: None,
            base_url: None,
            endpoint: None,
            deployment: None,
            api_version: None,
            request_timeout_seconds: 120,
        }
    }
}

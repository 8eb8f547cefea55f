//! Credential and endpoint resolution
//!
//! Credentials only ever come from the environment. Endpoint details may be
//! given in the `[provider]` section and fall back to the environment.

use super::super::ProviderKind;
use crate::config::FileProviderConfig;
use roundtable_application::GatewayError;
use std::time::Duration;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_AZURE_API_VERSION: &str = "2024-06-01";

const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
const OPENAI_MODEL: &str = "OPENAI_MODEL";
const AZURE_OPENAI_KEY: &str = "AZURE_OPENAI_KEY";
const AZURE_OPENAI_ENDPOINT: &str = "AZURE_OPENAI_ENDPOINT";
const AZURE_OPENAI_DEPLOYMENT_NAME: &str = "AZURE_OPENAI_DEPLOYMENT_NAME";
const AZURE_OPENAI_MODEL: &str = "AZURE_OPENAI_MODEL";
const AZURE_OPENAI_API_VERSION: &str = "AZURE_OPENAI_API_VERSION";

/// Where requests go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    OpenAi {
        base_url: String,
        model: String,
    },
    Azure {
        endpoint: String,
        deployment: String,
        api_version: String,
    },
}

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub target: Target,
    pub request_timeout: Duration,
}

impl OpenAiSettings {
    /// Resolve settings from the process environment.
    pub fn from_env(config: &FileProviderConfig) -> Result<Self, GatewayError> {
        Self::resolve(config, |key| {
            std::env::var(key).ok().filter(|v| !v.trim().is_empty())
        })
    }

    /// Resolve settings using `lookup` for environment variables.
    ///
    /// Without an explicit `kind`, Azure wins whenever `AZURE_OPENAI_KEY` is
    /// set.
    pub fn resolve(
        config: &FileProviderConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, GatewayError> {
        let kind = config.kind.unwrap_or(if lookup(AZURE_OPENAI_KEY).is_some() {
            ProviderKind::Azure
        } else {
            ProviderKind::OpenAi
        });

        let (api_key, target) = match kind {
            ProviderKind::OpenAi => {
                let api_key = lookup(OPENAI_API_KEY).ok_or_else(|| {
                    GatewayError::Configuration(format!(
                        "no API key found, set {} or {}",
                        OPENAI_API_KEY, AZURE_OPENAI_KEY
                    ))
                })?;
                let model = config
                    .model
                    .clone()
                    .or_else(|| lookup(OPENAI_MODEL))
                    .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());
                let base_url = config
                    .base_url
                    .clone()
                    .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());
                (api_key, Target::OpenAi { base_url, model })
            }
            ProviderKind::Azure => {
                let api_key = lookup(AZURE_OPENAI_KEY).ok_or_else(|| missing(AZURE_OPENAI_KEY))?;
                let endpoint = config
                    .endpoint
                    .clone()
                    .or_else(|| lookup(AZURE_OPENAI_ENDPOINT))
                    .ok_or_else(|| missing(AZURE_OPENAI_ENDPOINT))?;
                let deployment = config
                    .deployment
                    .clone()
                    .or_else(|| lookup(AZURE_OPENAI_DEPLOYMENT_NAME))
                    .or_else(|| config.model.clone())
                    .or_else(|| lookup(AZURE_OPENAI_MODEL))
                    .ok_or_else(|| missing(AZURE_OPENAI_DEPLOYMENT_NAME))?;
                let api_version = config
                    .api_version
                    .clone()
                    .or_else(|| lookup(AZURE_OPENAI_API_VERSION))
                    .unwrap_or_else(|| DEFAULT_AZURE_API_VERSION.to_string());
                (
                    api_key,
                    Target::Azure {
                        endpoint,
                        deployment,
                        api_version,
                    },
                )
            }
        };

        Ok(Self {
            api_key,
            target,
            request_timeout: Duration::from_secs(config.request_timeout_seconds),
        })
    }

    pub fn kind(&self) -> ProviderKind {
        match self.target {
            Target::OpenAi { .. } => ProviderKind::OpenAi,
            Target::Azure { .. } => ProviderKind::Azure,
        }
    }

    /// Model or deployment name, for display
    pub fn model_label(&self) -> &str {
        match &self.target {
            Target::OpenAi { model, .. } => model,
            Target::Azure { deployment, .. } => deployment,
        }
    }

    pub fn completions_url(&self) -> String {
        match &self.target {
            Target::OpenAi { base_url, .. } => {
                format!("{}/chat/completions", base_url.trim_end_matches('/'))
            }
            Target::Azure {
                endpoint,
                deployment,
                api_version,
            } => format!(
                "{}/openai/deployments/{}/chat/completions?api-version={}",
                endpoint.trim_end_matches('/'),
                deployment,
                api_version
            ),
        }
    }
}

fn missing(var: &str) -> GatewayError {
    GatewayError::Configuration(format!("{} is not set", var))
}

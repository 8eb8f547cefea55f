//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod orchestration;
mod output;
mod provider;
mod repl;

pub use logging::FileLoggingConfig;
pub use orchestration::FileOrchestrationConfig;
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;
pub use repl::FileReplConfig;

use roundtable_application::OrchestrationConfig;
use roundtable_domain::{AgentDescriptor, AgentRegistry, DomainError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("orchestration.maximum_invocations must be greater than 0")]
    ZeroInvocations,

    #[error("{0} cannot be 0")]
    ZeroValue(&'static str),

    #[error("invalid [[agents]] roster: {0}")]
    Agents(#[from] DomainError),

    #[error("fallback agent '{0}' is not in the roster")]
    UnknownFallbackAgent(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub orchestration: FileOrchestrationConfig,
    pub provider: FileProviderConfig,
    pub logging: FileLoggingConfig,
    pub repl: FileReplConfig,
    pub output: FileOutputConfig,
    /// Replaces the built-in software team when non-empty
    pub agents: Vec<AgentDescriptor>,
}

impl FileConfig {
    /// The configured roster, or the built-in software team.
    pub fn agent_registry(&self) -> Result<AgentRegistry, ConfigValidationError> {
        if self.agents.is_empty() {
            return Ok(AgentRegistry::software_team());
        }
        Ok(AgentRegistry::new(self.agents.clone())?)
    }

    /// Check every constraint that deserialization alone cannot express.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let orchestration = &self.orchestration;
        if orchestration.maximum_invocations == 0 {
            return Err(ConfigValidationError::ZeroInvocations);
        }
        if orchestration.round_timeout_seconds == 0 {
            return Err(ConfigValidationError::ZeroValue(
                "orchestration.round_timeout_seconds",
            ));
        }
        if orchestration.result_timeout_seconds == 0 {
            return Err(ConfigValidationError::ZeroValue(
                "orchestration.result_timeout_seconds",
            ));
        }
        if orchestration.context_window == 0 {
            return Err(ConfigValidationError::ZeroValue(
                "orchestration.context_window",
            ));
        }
        if self.provider.request_timeout_seconds == 0 {
            return Err(ConfigValidationError::ZeroValue(
                "provider.request_timeout_seconds",
            ));
        }

        let registry = self.agent_registry()?;
        if !registry.contains(&orchestration.fallback_agent) {
            return Err(ConfigValidationError::UnknownFallbackAgent(
                orchestration.fallback_agent.clone(),
            ));
        }
        Ok(())
    }

    /// Validated roster and orchestration parameters.
    pub fn resolve(&self) -> Result<(AgentRegistry, OrchestrationConfig), ConfigValidationError> {
        self.validate()?;
        Ok((
            self.agent_registry()?,
            self.orchestration.to_orchestration_config(),
        ))
    }
}

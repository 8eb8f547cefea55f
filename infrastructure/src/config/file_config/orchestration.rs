//! Orchestration configuration from TOML (`[orchestration]` section)

use roundtable_application::OrchestrationConfig;
use roundtable_domain::StrategyKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw orchestration configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOrchestrationConfig {
    /// Strategy at startup: "magentic" (turn state machine) or "custom" (coordinator vote)
    pub strategy: StrategyKind,
    pub maximum_invocations: u32,
    pub fallback_agent: String,
    pub topic: String,
    pub round_timeout_seconds: u64,
    pub result_timeout_seconds: u64,
    /// Pause between coordinator-vote agent turns; 0 disables it
    pub pacing_delay_ms: u64,
    pub context_window: usize,
}

impl Default for FileOrchestrationConfig {
    fn default() -> Self {
        let defaults = OrchestrationConfig::default();
        Self {
            strategy: defaults.strategy,
            maximum_invocations: defaults.maximum_invocations,
            fallback_agent: defaults.fallback_agent,
            topic: defaults.topic,
            round_timeout_seconds: defaults.round_timeout.as_secs(),
            result_timeout_seconds: defaults.result_timeout.as_secs(),
            pacing_delay_ms: defaults.pacing_delay.as_millis() as u64,
            context_window: defaults.context_window,
        }
    }
}

impl FileOrchestrationConfig {
    pub fn to_orchestration_config(&self) -> OrchestrationConfig {
        OrchestrationConfig::default()
            .with_strategy(self.strategy)
            .with_maximum_invocations(self.maximum_invocations)
            .with_fallback_agent(&self.fallback_agent)
            .with_topic(&self.topic)
            .with_round_timeout(Duration::from_secs(self.round_timeout_seconds))
            .with_result_timeout(Duration::from_secs(self.result_timeout_seconds))
            .with_pacing_delay(Duration::from_millis(self.pacing_delay_ms))
            .with_context_window(self.context_window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip_into_application_config() {
        assert_eq!(
            FileOrchestrationConfig::default().to_orchestration_config(),
            OrchestrationConfig::default()
        );
    }

    #[test]
    fn test_partial_section() {
        let toml_str = r#"
[orchestration]
strategy = "custom"
pacing_delay_ms = 0
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let orchestration = config.orchestration.to_orchestration_config();
        assert_eq!(orchestration.strategy, StrategyKind::CoordinatorVote);
        assert!(orchestration.pacing_delay.is_zero());
        assert_eq!(orchestration.maximum_invocations, 5);
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let toml_str = r#"
[orchestration]
strategy = "round-robin"
"#;
        assert!(toml::from_str::<super::super::FileConfig>(toml_str).is_err());
    }
}

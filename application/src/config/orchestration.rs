//! Orchestration parameters - round loop control.
//!
//! [`OrchestrationConfig`] groups the static parameters shared by both round
//! strategies and the dispatcher.
//!
//! | Parameter | Coordinator vote | Turn state machine |
//! |-----------|------------------|--------------------|
//! | `strategy` | initial strategy | initial strategy |
//! | `maximum_invocations` | - | invocation ceiling |
//! | `fallback_agent` | - | used when no name is found |
//! | `topic` | - | prompts |
//! | `round_timeout` | - | discussion phase bound |
//! | `result_timeout` | - | closing summary deadline |
//! | `pacing_delay` | pause between agents | - |
//! | `context_window` | context summary size | - |

use roundtable_domain::{
    DEFAULT_CONTEXT_WINDOW, DEFAULT_FALLBACK_AGENT, DEFAULT_MAXIMUM_INVOCATIONS, StrategyKind,
};
use std::time::Duration;

/// Topic the group-chat manager steers the discussion towards
pub const DEFAULT_TOPIC: &str = "Software Development Discussion";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestrationConfig {
    /// Strategy active when the session starts
    pub strategy: StrategyKind,
    /// Invocation ceiling of one group-chat manager
    pub maximum_invocations: u32,
    /// Agent chosen when a selection reply names nobody known
    pub fallback_agent: String,
    /// Discussion topic used in manager prompts
    pub topic: String,
    /// Bound on the discussion phase of a state-machine round
    pub round_timeout: Duration,
    /// Deadline for the closing summary, measured from round start
    pub result_timeout: Duration,
    /// Pause between agent turns of a coordinator-vote round
    pub pacing_delay: Duration,
    /// Messages included in the coordinator's context summary
    pub context_window: usize,
}

impl Default for OrchestrationConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            maximum_invocations: DEFAULT_MAXIMUM_INVOCATIONS,
            fallback_agent: DEFAULT_FALLBACK_AGENT.to_string(),
            topic: DEFAULT_TOPIC.to_string(),
            round_timeout: Duration::from_secs(30),
            result_timeout: Duration::from_secs(60),
            pacing_delay: Duration::from_millis(500),
            context_window: DEFAULT_CONTEXT_WINDOW,
        }
    }
}

impl OrchestrationConfig {
    // ==================== Builder Methods ====================

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_maximum_invocations(mut self, max: u32) -> Self {
        self.maximum_invocations = max;
        self
    }

    pub fn with_fallback_agent(mut self, name: impl Into<String>) -> Self {
        self.fallback_agent = name.into();
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    pub fn with_round_timeout(mut self, timeout: Duration) -> Self {
        self.round_timeout = timeout;
        self
    }

    pub fn with_result_timeout(mut self, timeout: Duration) -> Self {
        self.result_timeout = timeout;
        self
    }

    pub fn with_pacing_delay(mut self, delay: Duration) -> Self {
        self.pacing_delay = delay;
        self
    }

    pub fn with_context_window(mut self, messages: usize) -> Self {
        self.context_window = messages;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OrchestrationConfig::default();
        assert_eq!(config.strategy, StrategyKind::TurnStateMachine);
        assert_eq!(config.maximum_invocations, 5);
        assert_eq!(config.fallback_agent, "TechLead");
        assert_eq!(config.topic, DEFAULT_TOPIC);
        assert_eq!(config.round_timeout, Duration::from_secs(30));
        assert_eq!(config.result_timeout, Duration::from_secs(60));
        assert_eq!(config.pacing_delay, Duration::from_millis(500));
        assert_eq!(config.context_window, 6);
    }

    #[test]
    fn test_builder_chain() {
        let config = OrchestrationConfig::default()
            .with_strategy(StrategyKind::CoordinatorVote)
            .with_maximum_invocations(3)
            .with_fallback_agent("QAEngineer")
            .with_pacing_delay(Duration::ZERO);
        assert_eq!(config.strategy, StrategyKind::CoordinatorVote);
        assert_eq!(config.maximum_invocations, 3);
        assert_eq!(config.fallback_agent, "QAEngineer");
        assert!(config.pacing_delay.is_zero());
    }
}

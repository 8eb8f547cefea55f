//! Progress notification port
//!
//! Defines the interface for reporting progress while a round runs.

use roundtable_domain::{StrategyKind, TerminationDecision};

/// Callback for progress updates during a round
///
/// Implementations live in the presentation layer (spinner, plain log lines).
/// Every hook defaults to a no-op.
pub trait RoundProgressNotifier: Send + Sync {
    /// Called once the dispatcher hands the input to a strategy
    fn on_round_start(&self, _strategy: StrategyKind) {}

    /// Called when the coordinator has picked the agents that will answer
    fn on_agents_selected(&self, _agents: &[&str]) {}

    /// Called before an agent is asked for its reply
    fn on_agent_thinking(&self, _agent: &str) {}

    /// Called after an agent reply has been recorded
    fn on_agent_done(&self, _agent: &str) {}

    /// Called after each termination check of the group-chat manager
    fn on_termination_check(&self, _decision: &TerminationDecision) {}

    /// Called before the closing summary is requested
    fn on_summarizing(&self) {}

    /// Called when the round has finished, successfully or not
    fn on_round_end(&self, _strategy: StrategyKind, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl RoundProgressNotifier for NoProgress {}

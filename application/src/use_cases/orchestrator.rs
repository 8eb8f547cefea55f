//! Orchestration dispatcher
//!
//! Owns the conversation for one session and hands every user message to
//! the active strategy. Switching strategy swaps the runner the dispatcher
//! points at; the next turn uses it.

use super::coordinator_vote::CoordinatorVoteRound;
use super::group_chat_round::{GroupChatRound, MANAGER_NAME};
use super::round::{RoundError, RoundOutcome, RoundRunner, RoundServices, RoundStatus};
use crate::config::OrchestrationConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, RoundProgressNotifier};
use crate::ports::response_sink::{NoResponseSink, ResponseSink};
use roundtable_domain::{AgentRegistry, ConversationHistory, StrategyKind};
use serde_json::json;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// What happened during one `process_turn`
#[derive(Debug)]
pub struct RoundReport {
    pub strategy: StrategyKind,
    pub outcome: RoundOutcome,
}

impl RoundReport {
    pub fn turns(&self) -> usize {
        self.outcome.turns
    }

    /// Text the dispatcher recorded on behalf of the manager, if any
    pub fn closing_text(&self) -> Option<&str> {
        match &self.outcome.status {
            RoundStatus::Concluded(summary) => Some(summary.text.as_str()),
            RoundStatus::TimedOut(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&RoundError> {
        self.outcome.error()
    }
}

pub struct Orchestrator {
    history: ConversationHistory,
    coordinator_vote: Arc<dyn RoundRunner>,
    turn_state_machine: Arc<dyn RoundRunner>,
    active: Arc<dyn RoundRunner>,
    sink: Arc<dyn ResponseSink>,
    progress: Arc<dyn RoundProgressNotifier>,
    logger: Arc<dyn ConversationLogger>,
}

impl Orchestrator {
    pub fn new<G: LlmGateway + ?Sized + 'static>(
        gateway: Arc<G>,
        agents: Arc<AgentRegistry>,
        config: &OrchestrationConfig,
    ) -> Self {
        let coordinator_vote: Arc<dyn RoundRunner> = Arc::new(CoordinatorVoteRound::new(
            gateway.clone(),
            agents.clone(),
            config,
        ));
        let turn_state_machine: Arc<dyn RoundRunner> =
            Arc::new(GroupChatRound::new(gateway, agents, config));
        let active = match config.strategy {
            StrategyKind::CoordinatorVote => coordinator_vote.clone(),
            StrategyKind::TurnStateMachine => turn_state_machine.clone(),
        };

        Self {
            history: ConversationHistory::new(),
            coordinator_vote,
            turn_state_machine,
            active,
            sink: Arc::new(NoResponseSink),
            progress: Arc::new(NoProgress),
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn ResponseSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn RoundProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn strategy(&self) -> StrategyKind {
        self.active.kind()
    }

    /// Switch strategy for subsequent turns.
    pub fn set_strategy(&mut self, kind: StrategyKind) {
        self.active = match kind {
            StrategyKind::CoordinatorVote => self.coordinator_vote.clone(),
            StrategyKind::TurnStateMachine => self.turn_state_machine.clone(),
        };
        info!("Strategy switched to {}", kind);
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        info!("Conversation history cleared");
    }

    pub async fn process_turn(&mut self, user_input: &str) -> RoundReport {
        self.process_turn_with_cancellation(user_input, &CancellationToken::new())
            .await
    }

    /// Record the user's message and run one round of the active strategy.
    ///
    /// A closing summary or timeout message is appended as a single message
    /// authored by the manager. A failed round appends nothing further; the
    /// turns it completed stay in the history.
    pub async fn process_turn_with_cancellation(
        &mut self,
        user_input: &str,
        cancellation: &CancellationToken,
    ) -> RoundReport {
        let strategy = self.active.kind();
        info!("Processing turn with {}", strategy);

        self.history.append_user(user_input);
        self.logger.log(ConversationEvent::new(
            "user_message",
            json!({ "text": user_input, "strategy": strategy.command() }),
        ));
        self.progress.on_round_start(strategy);

        let runner = self.active.clone();
        let services = RoundServices {
            sink: self.sink.as_ref(),
            progress: self.progress.as_ref(),
            logger: self.logger.as_ref(),
            cancellation,
        };
        let outcome = runner
            .run_round(user_input, &mut self.history, &services)
            .await;

        match &outcome.status {
            RoundStatus::Completed => {}
            RoundStatus::Concluded(summary) => {
                self.history.append_agent(MANAGER_NAME, &summary.text);
            }
            RoundStatus::TimedOut(message) => {
                warn!("Round timed out after {} turns", outcome.turns);
                self.history.append_agent(MANAGER_NAME, message);
                self.logger.log(ConversationEvent::new(
                    "round_failed",
                    json!({ "error": message, "turns": outcome.turns, "timed_out": true }),
                ));
            }
            RoundStatus::Failed(e) => {
                warn!("Round failed after {} turns: {}", outcome.turns, e);
                self.logger.log(ConversationEvent::new(
                    "round_failed",
                    json!({ "error": e.to_string(), "turns": outcome.turns, "timed_out": false }),
                ));
            }
        }
        self.progress.on_round_end(strategy, outcome.is_success());

        RoundReport { strategy, outcome }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::group_chat_round::TIMEOUT_MESSAGE;
    use crate::use_cases::test_support::{
        RecordingLogger, RecordingSink, Scripted, ScriptedGateway,
    };
    use roundtable_domain::Role;
    use std::time::Duration;

    fn orchestrator(gateway: Arc<ScriptedGateway>, strategy: StrategyKind) -> Orchestrator {
        let config = OrchestrationConfig::default()
            .with_strategy(strategy)
            .with_pacing_delay(Duration::ZERO);
        Orchestrator::new(gateway, Arc::new(AgentRegistry::software_team()), &config)
    }

    #[test]
    fn test_default_strategy_is_state_machine() {
        let gateway = Arc::new(ScriptedGateway::replies(&[]));
        let orchestrator = Orchestrator::new(
            gateway,
            Arc::new(AgentRegistry::software_team()),
            &OrchestrationConfig::default(),
        );
        assert_eq!(orchestrator.strategy(), StrategyKind::TurnStateMachine);
    }

    #[tokio::test]
    async fn test_set_strategy_applies_to_next_turn() {
        let gateway = Arc::new(ScriptedGateway::replies(&[
            "ProductManager",
            "Ship the MVP first.",
        ]));
        let mut orchestrator = orchestrator(gateway.clone(), StrategyKind::TurnStateMachine);

        orchestrator.set_strategy(StrategyKind::CoordinatorVote);
        let report = orchestrator.process_turn("What should we build next?").await;

        assert_eq!(report.strategy, StrategyKind::CoordinatorVote);
        assert_eq!(report.turns(), 1);
        assert!(report.closing_text().is_none());
        assert_eq!(orchestrator.history().len(), 2);
        assert_eq!(gateway.call_count(), 2);
    }

    #[tokio::test]
    async fn test_no_selection_leaves_only_user_message() {
        let gateway = Arc::new(ScriptedGateway::replies(&["nobody fits"]));
        let mut orchestrator = orchestrator(gateway, StrategyKind::CoordinatorVote);
        orchestrator.history.append_user("earlier");

        let report = orchestrator.process_turn("Tell me a joke").await;

        assert_eq!(report.turns(), 0);
        assert!(report.error().is_none());
        let texts: Vec<&str> = orchestrator.history().iter().map(|m| m.text()).collect();
        assert_eq!(texts, vec!["earlier", "Tell me a joke"]);
    }

    #[tokio::test]
    async fn test_state_machine_appends_summary_as_manager() {
        let gateway = Arc::new(ScriptedGateway::replies(&[
            "SecurityEngineer",
            "Rotate the keys.",
            "DevOpsEngineer",
            "Automate the rotation.",
            "True",
            "Rotate keys automatically.",
        ]));
        let sink = Arc::new(RecordingSink::default());
        let logger = Arc::new(RecordingLogger::default());
        let mut orchestrator = orchestrator(gateway, StrategyKind::TurnStateMachine)
            .with_sink(sink.clone())
            .with_logger(logger.clone());

        let report = orchestrator.process_turn("Our API keys leaked").await;

        assert_eq!(report.turns(), 2);
        assert_eq!(report.closing_text(), Some("Rotate keys automatically."));

        let history = orchestrator.history();
        assert_eq!(history.len(), 4);
        let last = history.last().unwrap();
        assert_eq!(last.role(), Role::Agent);
        assert_eq!(last.author(), MANAGER_NAME);
        assert_eq!(last.text(), "Rotate keys automatically.");

        let sequences: Vec<u64> = history.iter().map(|m| m.sequence()).collect();
        assert_eq!(sequences, vec![1, 2, 3, 4]);

        assert_eq!(sink.agents(), vec!["SecurityEngineer", "DevOpsEngineer"]);
        assert_eq!(logger.event_types()[0], "user_message");
    }

    #[tokio::test]
    async fn test_switch_to_state_machine_mid_session_still_discusses() {
        let gateway = Arc::new(ScriptedGateway::replies(&[
            "TechLead",
            "Split it by domain.",
            // state machine round
            "QAEngineer",
            "Each domain needs its own suite.",
            "UXDesigner",
            "Keep one design system.",
            "True",
            "Split by domain with shared UI and tests.",
        ]));
        let mut orchestrator = orchestrator(gateway.clone(), StrategyKind::CoordinatorVote);
        orchestrator.process_turn("Should we split the frontend?").await;

        orchestrator.set_strategy(StrategyKind::TurnStateMachine);
        let report = orchestrator.process_turn("What about testing and design?").await;

        assert_eq!(report.turns(), 2);
        assert_eq!(
            report.closing_text(),
            Some("Split by domain with shared UI and tests.")
        );
        assert_eq!(gateway.call_count(), 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_message_is_recorded() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Scripted::Text("TechLead".to_string()),
            Scripted::Slow(Duration::from_secs(120), "never".to_string()),
        ]));
        let mut orchestrator = orchestrator(gateway, StrategyKind::TurnStateMachine);

        let report = orchestrator.process_turn("Estimate the migration").await;

        assert_eq!(report.closing_text(), Some(TIMEOUT_MESSAGE));
        let last = orchestrator.history().last().unwrap();
        assert_eq!(last.author(), MANAGER_NAME);
        assert_eq!(last.text(), TIMEOUT_MESSAGE);
    }

    #[tokio::test]
    async fn test_failure_is_reported_and_session_continues() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Scripted::Fail("401 unauthorized".to_string()),
            Scripted::Text("QAEngineer".to_string()),
            Scripted::Text("Write the regression test.".to_string()),
        ]));
        let logger = Arc::new(RecordingLogger::default());
        let mut orchestrator = orchestrator(gateway, StrategyKind::CoordinatorVote)
            .with_logger(logger.clone());

        let failed = orchestrator.process_turn("Found a bug").await;
        assert!(matches!(failed.error(), Some(RoundError::Selection(_))));
        assert_eq!(orchestrator.history().len(), 1);
        assert!(logger.event_types().contains(&"round_failed"));

        let report = orchestrator.process_turn("Found a bug, retry").await;
        assert!(report.error().is_none());
        assert_eq!(report.turns(), 1);
        assert_eq!(orchestrator.history().len(), 3);
    }

    #[tokio::test]
    async fn test_cancelled_turn_keeps_user_message() {
        let gateway = Arc::new(ScriptedGateway::replies(&["TechLead"]));
        let mut orchestrator = orchestrator(gateway.clone(), StrategyKind::TurnStateMachine);
        let token = CancellationToken::new();
        token.cancel();

        let report = orchestrator
            .process_turn_with_cancellation("hello", &token)
            .await;

        assert!(report.error().is_some_and(RoundError::is_cancelled));
        assert_eq!(orchestrator.history().len(), 1);
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_clear_history_restarts_numbering() {
        let gateway = Arc::new(ScriptedGateway::replies(&["none", "none"]));
        let mut orchestrator = orchestrator(gateway, StrategyKind::CoordinatorVote);

        orchestrator.process_turn("first").await;
        orchestrator.clear_history();
        assert!(orchestrator.history().is_empty());

        orchestrator.process_turn("second").await;
        assert_eq!(orchestrator.history().last().unwrap().sequence(), 1);
    }
}

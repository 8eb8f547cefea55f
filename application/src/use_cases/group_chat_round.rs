//! Turn state machine strategy
//!
//! Runs one round under a fresh [`GroupChatManager`]:
//!
//! ```text
//! select_next_agent ──Terminate──────────────────────┐
//!        │                                           │
//!    Agent(name) → agent turn → should_terminate ─yes┤
//!        ▲                              │            ▼
//!        └──────────────no──────────────┘      filter_results
//! ```
//!
//! The discussion phase is bounded by the round timeout; the closing summary
//! must arrive before the result timeout, counted from the start of the round.

use super::agent_turn::take_turn;
use super::group_chat_manager::GroupChatManager;
use super::round::{RoundError, RoundOutcome, RoundRunner, RoundServices};
use crate::config::OrchestrationConfig;
use crate::ports::conversation_logger::ConversationEvent;
use crate::ports::llm_gateway::LlmGateway;
use async_trait::async_trait;
use roundtable_domain::{AgentRegistry, ConversationHistory, NextSpeaker, StrategyKind};
use serde_json::json;
use std::sync::Arc;
use tokio::time::{Instant, timeout};
use tracing::{info, warn};

/// Recorded in the history when a round runs out of time
pub const TIMEOUT_MESSAGE: &str =
    "Group chat timed out. The group chat manager may need more time to coordinate agents.";

/// Author of the closing summary and timeout messages
pub const MANAGER_NAME: &str = "GroupChatManager";

pub struct GroupChatRound<G: LlmGateway + ?Sized> {
    gateway: Arc<G>,
    agents: Arc<AgentRegistry>,
    config: OrchestrationConfig,
}

impl<G: LlmGateway + ?Sized> GroupChatRound<G> {
    pub fn new(gateway: Arc<G>, agents: Arc<AgentRegistry>, config: &OrchestrationConfig) -> Self {
        Self {
            gateway,
            agents,
            config: config.clone(),
        }
    }

    async fn discuss(
        &self,
        manager: &mut GroupChatManager<G>,
        history: &mut ConversationHistory,
        services: &RoundServices<'_>,
    ) -> Result<(), RoundError> {
        loop {
            let next = services
                .cancellable(manager.select_next_agent(history, &self.agents))
                .await?;
            let name = match next {
                NextSpeaker::Terminate => return Ok(()),
                NextSpeaker::Agent(name) => name,
            };
            let agent = self
                .agents
                .get(&name)
                .ok_or_else(|| RoundError::UnknownAgent(name.clone()))?;

            take_turn(self.gateway.as_ref(), agent, history, services).await?;

            let decision = services
                .cancellable(manager.should_terminate(history))
                .await?;
            services.progress.on_termination_check(&decision);
            services.logger.log(ConversationEvent::new(
                "termination_check",
                json!({
                    "terminate": decision.terminate,
                    "reason": decision.reason,
                    "invocation_count": manager.state().invocation_count(),
                }),
            ));
            if decision.terminate {
                info!("Discussion ended: {}", decision.reason);
                return Ok(());
            }
        }
    }
}

#[async_trait]
impl<G: LlmGateway + ?Sized + 'static> RoundRunner for GroupChatRound<G> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::TurnStateMachine
    }

    async fn run_round(
        &self,
        _user_input: &str,
        history: &mut ConversationHistory,
        services: &RoundServices<'_>,
    ) -> RoundOutcome {
        // The user message that opened the round is already recorded
        let round_start = history.len().saturating_sub(1);
        let mut manager =
            GroupChatManager::new(self.gateway.clone(), &self.config).starting_at(round_start);
        let started = Instant::now();
        let before = history.agent_turns();

        let discussion = timeout(
            self.config.round_timeout,
            self.discuss(&mut manager, history, services),
        )
        .await;
        let turns = history.agent_turns() - before;

        match discussion {
            Err(_) => {
                warn!(
                    "Discussion exceeded {:?} after {} turns",
                    self.config.round_timeout, turns
                );
                return RoundOutcome::timed_out(turns, TIMEOUT_MESSAGE);
            }
            Ok(Err(e)) => return RoundOutcome::failed(turns, e),
            Ok(Ok(())) => {}
        }

        services.progress.on_summarizing();
        let remaining = self.config.result_timeout.saturating_sub(started.elapsed());
        match timeout(remaining, services.cancellable(manager.filter_results(history))).await {
            Err(_) => {
                warn!("Closing summary missed the {:?} deadline", self.config.result_timeout);
                RoundOutcome::timed_out(turns, TIMEOUT_MESSAGE)
            }
            Ok(Err(e)) => RoundOutcome::failed(turns, e),
            Ok(Ok(summary)) => {
                services.logger.log(ConversationEvent::new(
                    "closing_summary",
                    json!({ "text": summary.text, "fallback": summary.fallback }),
                ));
                RoundOutcome::concluded(turns, summary)
            }
        }
    }
}

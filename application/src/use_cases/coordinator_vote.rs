//! Coordinator-vote strategy
//!
//! A coordinator model reads a short summary of the conversation and names
//! the one or two agents best suited to answer. The chosen agents then reply
//! one after another against the shared history.

use super::agent_turn::take_turn;
use super::round::{RoundError, RoundOutcome, RoundRunner, RoundServices};
use crate::config::OrchestrationConfig;
use crate::ports::conversation_logger::ConversationEvent;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use async_trait::async_trait;
use roundtable_domain::{
    AgentDescriptor, AgentRegistry, ConversationHistory, PromptTemplate, SelectionDecision,
    StrategyKind, coordinator, parse_coordinator_reply,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub struct CoordinatorVoteRound<G: LlmGateway + ?Sized> {
    gateway: Arc<G>,
    agents: Arc<AgentRegistry>,
    coordinator: AgentDescriptor,
    pacing_delay: Duration,
    context_window: usize,
}

impl<G: LlmGateway + ?Sized> CoordinatorVoteRound<G> {
    pub fn new(gateway: Arc<G>, agents: Arc<AgentRegistry>, config: &OrchestrationConfig) -> Self {
        let coordinator = coordinator(&agents);
        Self {
            gateway,
            agents,
            coordinator,
            pacing_delay: config.pacing_delay,
            context_window: config.context_window,
        }
    }

    /// Ask the coordinator which agents should answer `user_input`.
    ///
    /// The coordinator runs in a fresh context: its own instructions plus one
    /// prompt built from the recent window, never the shared history itself.
    /// Names it gives that are not registered are dropped; the result keeps
    /// registry order. The prompt asks for one or two agents but the count is
    /// not enforced: every registered name in the reply speaks.
    pub async fn select_agents(
        &self,
        user_input: &str,
        history: &ConversationHistory,
    ) -> Result<SelectionDecision, GatewayError> {
        let context = history.recent_window(self.context_window).to_string();
        let request = CompletionRequest::new()
            .system(&self.coordinator.instructions)
            .user(PromptTemplate::coordinator_selection(&context, user_input));

        let reply = self.gateway.complete(&request).await?;
        debug!(reply = %reply, "Coordinator reply");

        let candidates = parse_coordinator_reply(&reply);
        let chosen = self
            .agents
            .matching(&candidates)
            .into_iter()
            .cloned()
            .collect();
        Ok(SelectionDecision::new(chosen))
    }
}

#[async_trait]
impl<G: LlmGateway + ?Sized + 'static> RoundRunner for CoordinatorVoteRound<G> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::CoordinatorVote
    }

    async fn run_round(
        &self,
        user_input: &str,
        history: &mut ConversationHistory,
        services: &RoundServices<'_>,
    ) -> RoundOutcome {
        let decision = match services
            .cancellable(self.select_agents(user_input, history))
            .await
        {
            Ok(Ok(decision)) => decision,
            Ok(Err(e)) => return RoundOutcome::failed(0, RoundError::Selection(e)),
            Err(e) => return RoundOutcome::failed(0, e),
        };

        let names = decision.names();
        info!("Coordinator selected: [{}]", names.join(", "));
        services.progress.on_agents_selected(&names);
        services
            .logger
            .log(ConversationEvent::new("agents_selected", json!({ "agents": names })));

        for (turns, agent) in decision.chosen().iter().enumerate() {
            if turns > 0 && !self.pacing_delay.is_zero() {
                if let Err(e) = services
                    .cancellable(tokio::time::sleep(self.pacing_delay))
                    .await
                {
                    return RoundOutcome::failed(turns, e);
                }
            }
            if let Err(e) = take_turn(self.gateway.as_ref(), agent, history, services).await {
                return RoundOutcome::failed(turns, e);
            }
        }

        RoundOutcome::completed(decision.len())
    }
}

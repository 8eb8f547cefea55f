//! Group-chat manager
//!
//! Drives the turn state machine: picks one speaker at a time, decides when
//! the discussion is over and writes the closing summary. Every decision
//! recovers from a gateway failure with a fixed fallback, so the manager
//! itself never fails.
//!
//! # Invocation ceiling
//!
//! Each manager owns a [`RoundState`]. Every `select_next_agent` call and
//! every termination check that consults the model bumps the count; once it
//! exceeds the maximum, selection returns [`NextSpeaker::Terminate`] and the
//! termination check answers "yes" without calling the model.

use crate::config::OrchestrationConfig;
use crate::ports::llm_gateway::{CompletionRequest, LlmGateway};
use roundtable_domain::{
    AgentRegistry, ClosingSummary, ConversationHistory, NextSpeaker, PromptTemplate,
    REASON_INVOCATION_LIMIT, REASON_NEED_MORE, REASON_NO_RESPONSES, RoundState,
    TerminationDecision, find_agent_name, parse_termination_reply,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct GroupChatManager<G: LlmGateway + ?Sized> {
    gateway: Arc<G>,
    topic: String,
    fallback_agent: String,
    state: RoundState,
    /// Index of the message that opened the round
    round_start: usize,
}

impl<G: LlmGateway + ?Sized> GroupChatManager<G> {
    pub fn new(gateway: Arc<G>, config: &OrchestrationConfig) -> Self {
        Self {
            gateway,
            topic: config.topic.clone(),
            fallback_agent: config.fallback_agent.clone(),
            state: RoundState::new(config.maximum_invocations),
            round_start: 0,
        }
    }

    /// Count round messages from `index` on; earlier turns of the session
    /// do not satisfy the minimum-discussion gates.
    pub fn starting_at(mut self, index: usize) -> Self {
        self.round_start = index;
        self
    }

    /// Start from an existing invocation state instead of a zero count.
    pub fn with_state(mut self, state: RoundState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Pick the next speaker.
    ///
    /// Once the ceiling is exceeded no completion is requested. Otherwise the
    /// selection prompt follows the history as a system message, and the
    /// reply is searched for a registered name in selection priority. No name
    /// found, or a failed call, yields the fallback agent.
    pub async fn select_next_agent(
        &mut self,
        history: &ConversationHistory,
        agents: &AgentRegistry,
    ) -> NextSpeaker {
        let count = self.state.record_invocation();
        if self.state.is_exhausted() {
            info!(
                "Invocation limit reached ({} > {}), ending discussion",
                count,
                self.state.maximum_invocations()
            );
            return NextSpeaker::Terminate;
        }

        let request = CompletionRequest::new()
            .history(history)
            .system(PromptTemplate::manager_selection(&self.topic, agents));

        match self.gateway.complete(&request).await {
            Ok(reply) => {
                debug!(reply = %reply, "Manager selection reply");
                let priority = agents.selection_priority();
                match find_agent_name(&reply, &priority) {
                    Some(name) => {
                        info!("Manager selected {} (invocation {})", name, count);
                        NextSpeaker::Agent(name.to_string())
                    }
                    None => {
                        warn!(
                            "No known agent in selection reply, falling back to {}",
                            self.fallback_agent
                        );
                        NextSpeaker::Agent(self.fallback_agent.clone())
                    }
                }
            }
            Err(e) => {
                warn!(
                    "Agent selection failed: {}, falling back to {}",
                    e, self.fallback_agent
                );
                NextSpeaker::Agent(self.fallback_agent.clone())
            }
        }
    }

    /// Decide whether the discussion should end.
    ///
    /// | Condition | Result | Model consulted |
    /// |-----------|--------|-----------------|
    /// | count > max | terminate | no |
    /// | round has at most 1 message | continue | no |
    /// | round has fewer than 3 messages | continue | no |
    /// | otherwise | reply contains `true` | yes |
    ///
    /// Round messages are those from the opening user message on. A failed
    /// call ends the discussion.
    pub async fn should_terminate(&mut self, history: &ConversationHistory) -> TerminationDecision {
        if self.state.is_exhausted() {
            return TerminationDecision::terminate(REASON_INVOCATION_LIMIT);
        }
        let round_messages = history.len().saturating_sub(self.round_start);
        if round_messages <= 1 {
            return TerminationDecision::proceed(REASON_NO_RESPONSES);
        }
        if round_messages < 3 {
            return TerminationDecision::proceed(REASON_NEED_MORE);
        }

        self.state.record_invocation();
        let request = CompletionRequest::new()
            .history(history)
            .system(PromptTemplate::termination(&self.topic));

        match self.gateway.complete(&request).await {
            Ok(reply) => {
                debug!(reply = %reply, "Manager termination reply");
                let reason = reply.trim();
                if parse_termination_reply(reply.as_str()) {
                    TerminationDecision::terminate(reason)
                } else {
                    TerminationDecision::proceed(reason)
                }
            }
            Err(e) => {
                warn!("Termination check failed: {}", e);
                TerminationDecision::terminate(format!("termination check failed: {}", e))
            }
        }
    }

    /// Produce the closing summary over the full history.
    pub async fn filter_results(&self, history: &ConversationHistory) -> ClosingSummary {
        let request = CompletionRequest::new()
            .history(history)
            .system(PromptTemplate::closing_summary(&self.topic));

        match self.gateway.complete(&request).await {
            Ok(text) => ClosingSummary::new(text),
            Err(e) => {
                warn!("Closing summary failed: {}", e);
                ClosingSummary::fallback()
            }
        }
    }
}

//! A single agent turn, shared by both strategies.

use super::round::{RoundError, RoundServices};
use crate::ports::conversation_logger::ConversationEvent;
use crate::ports::llm_gateway::{CompletionRequest, LlmGateway};
use crate::ports::response_sink::notify_or_warn;
use roundtable_domain::{AgentDescriptor, ConversationHistory};
use serde_json::json;
use tracing::debug;

/// Ask `agent` to reply to the shared history and record the reply.
///
/// The reply is appended before the sink is notified, so observers always
/// see turns in history order.
pub(crate) async fn take_turn<G: LlmGateway + ?Sized>(
    gateway: &G,
    agent: &AgentDescriptor,
    history: &mut ConversationHistory,
    services: &RoundServices<'_>,
) -> Result<(), RoundError> {
    services.progress.on_agent_thinking(&agent.name);

    let request = CompletionRequest::new()
        .system(&agent.instructions)
        .history(history);
    let reply = services
        .cancellable(gateway.complete(&request))
        .await?
        .map_err(|source| RoundError::Agent {
            agent: agent.name.clone(),
            source,
        })?;
    debug!(agent = %agent.name, chars = reply.len(), "Agent replied");

    history.append_agent(&agent.name, &reply);
    notify_or_warn(services.sink, &agent.name, &reply);
    services.progress.on_agent_done(&agent.name);
    services.logger.log(ConversationEvent::new(
        "agent_turn",
        json!({ "agent": agent.name, "text": reply }),
    ));
    Ok(())
}

//! Round contract shared by both strategies.
//!
//! A round is everything that happens between one user message and the next
//! prompt: agent selection, agent turns and (for the state machine) the
//! closing summary. Runners never propagate errors; every failure ends up in
//! the returned [`RoundOutcome`].

use crate::ports::conversation_logger::ConversationLogger;
use crate::ports::llm_gateway::GatewayError;
use crate::ports::progress::RoundProgressNotifier;
use crate::ports::response_sink::ResponseSink;
use async_trait::async_trait;
use roundtable_domain::{ClosingSummary, ConversationHistory, StrategyKind};
use std::future::Future;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Failure that ended a round early
#[derive(Error, Debug)]
pub enum RoundError {
    #[error("Agent selection failed: {0}")]
    Selection(#[source] GatewayError),

    #[error("{agent} failed to respond: {source}")]
    Agent {
        agent: String,
        #[source]
        source: GatewayError,
    },

    #[error("Unknown agent selected: {0}")]
    UnknownAgent(String),

    #[error("Round cancelled")]
    Cancelled,
}

impl RoundError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RoundError::Cancelled)
    }
}

/// How a round ended
#[derive(Debug)]
pub enum RoundStatus {
    /// Every selected agent spoke (possibly none)
    Completed,
    /// The discussion ended and the manager produced a closing summary
    Concluded(ClosingSummary),
    /// A deadline fired; the message is recorded in the history
    TimedOut(String),
    /// The round stopped early; turns already taken stay in the history
    Failed(RoundError),
}

/// Result of one round
#[derive(Debug)]
pub struct RoundOutcome {
    /// Agent turns appended during the round
    pub turns: usize,
    pub status: RoundStatus,
}

impl RoundOutcome {
    pub fn completed(turns: usize) -> Self {
        Self {
            turns,
            status: RoundStatus::Completed,
        }
    }

    pub fn concluded(turns: usize, summary: ClosingSummary) -> Self {
        Self {
            turns,
            status: RoundStatus::Concluded(summary),
        }
    }

    pub fn timed_out(turns: usize, message: impl Into<String>) -> Self {
        Self {
            turns,
            status: RoundStatus::TimedOut(message.into()),
        }
    }

    pub fn failed(turns: usize, error: RoundError) -> Self {
        Self {
            turns,
            status: RoundStatus::Failed(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(
            self.status,
            RoundStatus::Completed | RoundStatus::Concluded(_)
        )
    }

    pub fn error(&self) -> Option<&RoundError> {
        match &self.status {
            RoundStatus::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Collaborators a runner reports to while a round is in flight
pub struct RoundServices<'a> {
    pub sink: &'a dyn ResponseSink,
    pub progress: &'a dyn RoundProgressNotifier,
    pub logger: &'a dyn ConversationLogger,
    pub cancellation: &'a CancellationToken,
}

impl RoundServices<'_> {
    /// Run `future` unless the round is cancelled first.
    pub async fn cancellable<F: Future>(&self, future: F) -> Result<F::Output, RoundError> {
        tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => Err(RoundError::Cancelled),
            output = future => Ok(output),
        }
    }
}

/// One turn-selection strategy.
///
/// The dispatcher has already appended the user's message when `run_round`
/// is called; `user_input` is passed along for prompts that quote it.
#[async_trait]
pub trait RoundRunner: Send + Sync {
    fn kind(&self) -> StrategyKind;

    async fn run_round(
        &self,
        user_input: &str,
        history: &mut ConversationHistory,
        services: &RoundServices<'_>,
    ) -> RoundOutcome;
}

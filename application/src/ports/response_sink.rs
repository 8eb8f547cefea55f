//! Response sink port
//!
//! Receives each agent reply as soon as it is recorded, so the presentation
//! layer can show it while the round continues.

use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Output unavailable: {0}")]
    Unavailable(String),
}

/// Consumer of agent replies.
///
/// Called once per completed agent turn, in the order the turns are appended
/// to the history. Failures are logged by the caller and never abort a round.
pub trait ResponseSink: Send + Sync {
    fn notify(&self, agent_name: &str, text: &str) -> Result<(), SinkError>;
}

/// Sink that drops every reply
pub struct NoResponseSink;

impl ResponseSink for NoResponseSink {
    fn notify(&self, _agent_name: &str, _text: &str) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Deliver a reply, logging instead of propagating a sink failure.
pub fn notify_or_warn(sink: &dyn ResponseSink, agent_name: &str, text: &str) {
    if let Err(e) = sink.notify(agent_name, text) {
        warn!("Response sink failed for {}: {}", agent_name, e);
    }
}

//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording conversation events
//! (user input, agent selections, agent replies, termination checks, closing
//! summaries) to a structured transcript.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures the discussion in a
//! machine-readable format (JSONL).

use serde_json::Value;

/// A structured conversation event for logging.
///
/// Each event has a type string and a JSON payload with event-specific
/// fields. The adapter stamps the time when it writes the record.
#[derive(Debug, Clone)]
pub struct ConversationEvent {
    /// Event type identifier (e.g., "user_message", "agent_turn").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging conversation events to a structured log.
///
/// `log` is synchronous and infallible; adapters swallow their own write
/// failures.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

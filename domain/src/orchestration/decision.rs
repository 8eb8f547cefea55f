//! Decision results
//!
//! Each decision point has its own result type carrying a concrete payload.

use crate::agent::descriptor::AgentDescriptor;
use std::fmt;

/// Reason reported when the invocation ceiling forces the discussion to end
pub const REASON_INVOCATION_LIMIT: &str = "invocation limit reached";
/// Reason reported while only the user has spoken
pub const REASON_NO_RESPONSES: &str = "no agent responses yet";
/// Reason reported while fewer than two agents have replied
pub const REASON_NEED_MORE: &str = "need more agent responses";

/// Closing line used when the summary could not be produced
pub const DEFAULT_CLOSING_LINE: &str = "Discussion completed.";

/// Agents chosen by the coordinator for one round, in registry order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionDecision {
    chosen: Vec<AgentDescriptor>,
}

impl SelectionDecision {
    pub fn new(chosen: Vec<AgentDescriptor>) -> Self {
        Self { chosen }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn chosen(&self) -> &[AgentDescriptor] {
        &self.chosen
    }

    pub fn names(&self) -> Vec<&str> {
        self.chosen.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }
}

/// Result of asking the group-chat manager who should speak next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextSpeaker {
    Agent(String),
    Terminate,
}

impl NextSpeaker {
    pub fn agent_name(&self) -> Option<&str> {
        match self {
            NextSpeaker::Agent(name) => Some(name),
            NextSpeaker::Terminate => None,
        }
    }

    pub fn is_terminate(&self) -> bool {
        matches!(self, NextSpeaker::Terminate)
    }
}

impl fmt::Display for NextSpeaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextSpeaker::Agent(name) => f.write_str(name),
            NextSpeaker::Terminate => f.write_str("TERMINATE"),
        }
    }
}

/// Whether the discussion should end, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminationDecision {
    pub terminate: bool,
    pub reason: String,
}

impl TerminationDecision {
    pub fn proceed(reason: impl Into<String>) -> Self {
        Self {
            terminate: false,
            reason: reason.into(),
        }
    }

    pub fn terminate(reason: impl Into<String>) -> Self {
        Self {
            terminate: true,
            reason: reason.into(),
        }
    }
}

/// Closing summary written once the discussion has ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosingSummary {
    pub text: String,
    /// True when the model could not be reached and the default line was used
    pub fallback: bool,
}

impl ClosingSummary {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fallback: false,
        }
    }

    pub fn fallback() -> Self {
        Self {
            text: DEFAULT_CLOSING_LINE.to_string(),
            fallback: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_names() {
        let decision = SelectionDecision::new(vec![
            AgentDescriptor::new("SeniorDeveloper", ""),
            AgentDescriptor::new("DevOpsEngineer", ""),
        ]);
        assert_eq!(decision.names(), vec!["SeniorDeveloper", "DevOpsEngineer"]);
        assert!(SelectionDecision::none().is_empty());
    }

    #[test]
    fn test_next_speaker_display() {
        assert_eq!(NextSpeaker::Terminate.to_string(), "TERMINATE");
        assert_eq!(NextSpeaker::Agent("QAEngineer".into()).to_string(), "QAEngineer");
        assert_eq!(NextSpeaker::Terminate.agent_name(), None);
    }

    #[test]
    fn test_closing_summary_fallback() {
        let summary = ClosingSummary::fallback();
        assert!(summary.fallback);
        assert_eq!(summary.text, DEFAULT_CLOSING_LINE);
    }
}

//! Message entity

use crate::core::string::truncate_chars;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of characters of a message shown in a context summary
pub const SUMMARY_TEXT_CAP: usize = 100;

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Agent,
    System,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Agent => "agent",
            Role::System => "system",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single turn in the conversation (Entity)
///
/// Messages are immutable once appended to a
/// [`ConversationHistory`](super::history::ConversationHistory); the history
/// assigns the sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    author: String,
    text: String,
    sequence: u64,
}

impl Message {
    pub(crate) fn new(role: Role, author: String, text: String, sequence: u64) -> Self {
        // Only agent turns carry an author
        let author = if role == Role::Agent { author } else { String::new() };
        Self {
            role,
            author,
            text,
            sequence,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Agent name for agent turns, empty for user and system messages
    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn is_agent(&self) -> bool {
        self.role == Role::Agent
    }

    /// One-line rendering used in context summaries: `"{role}: {text}"`
    /// with the text capped at [`SUMMARY_TEXT_CAP`] characters.
    pub fn summary_line(&self) -> String {
        format!("{}: {}", self.role, truncate_chars(&self.text, SUMMARY_TEXT_CAP))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_only_kept_for_agents() {
        let user = Message::new(Role::User, "someone".into(), "hi".into(), 1);
        assert_eq!(user.author(), "");

        let agent = Message::new(Role::Agent, "TechLead".into(), "hello".into(), 2);
        assert_eq!(agent.author(), "TechLead");
        assert!(agent.is_agent());
    }

    #[test]
    fn test_summary_line_truncates_long_text() {
        let text = "x".repeat(150);
        let msg = Message::new(Role::Agent, "QAEngineer".into(), text.clone(), 1);

        let line = msg.summary_line();
        assert_eq!(line, format!("agent: {}...", "x".repeat(100)));
        // Stored text is untouched
        assert_eq!(msg.text(), text);
    }

    #[test]
    fn test_summary_line_keeps_short_text() {
        let msg = Message::new(Role::User, String::new(), "What's the plan?".into(), 1);
        assert_eq!(msg.summary_line(), "user: What's the plan?");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Agent.to_string(), "agent");
        assert_eq!(Role::System.to_string(), "system");
    }
}

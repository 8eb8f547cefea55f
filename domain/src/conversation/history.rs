//! Conversation history (Entity)

use super::message::{Message, Role};
use std::fmt;

/// Number of recent messages included in a context summary
pub const DEFAULT_CONTEXT_WINDOW: usize = 6;

/// Rendered in place of a context summary when nothing has been said yet
pub const NEW_CONVERSATION_SENTINEL: &str = "This is the start of a new conversation.";

/// Ordered, append-only record of a conversation.
///
/// Insertion order is conversation order. Sequence numbers start at 1 and are
/// strictly increasing and gapless; [`clear`](Self::clear) is the only way to
/// remove messages and restarts the numbering.
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    messages: Vec<Message>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return it with its assigned sequence number.
    pub fn append(
        &mut self,
        role: Role,
        author: impl Into<String>,
        text: impl Into<String>,
    ) -> &Message {
        let sequence = self.messages.len() as u64 + 1;
        self.messages
            .push(Message::new(role, author.into(), text.into(), sequence));
        &self.messages[self.messages.len() - 1]
    }

    pub fn append_user(&mut self, text: impl Into<String>) -> &Message {
        self.append(Role::User, String::new(), text)
    }

    pub fn append_agent(&mut self, author: impl Into<String>, text: impl Into<String>) -> &Message {
        self.append(Role::Agent, author, text)
    }

    pub fn append_system(&mut self, text: impl Into<String>) -> &Message {
        self.append(Role::System, String::new(), text)
    }

    /// Full sequence in conversation order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of agent replies recorded so far
    pub fn agent_turns(&self) -> usize {
        self.messages.iter().filter(|m| m.is_agent()).count()
    }

    /// Remove every message. Owned by the caller (the `clear` command).
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// View over the last `k` messages (fewer if the history is shorter).
    pub fn recent_window(&self, k: usize) -> RecentWindow<'_> {
        let start = self.messages.len().saturating_sub(k);
        RecentWindow {
            messages: &self.messages[start..],
            history_empty: self.messages.is_empty(),
        }
    }
}

impl<'a> IntoIterator for &'a ConversationHistory {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

/// Pure projection over the tail of a [`ConversationHistory`].
///
/// Cheap to copy; [`lines`](Self::lines) can be called any number of times and
/// renders lazily. Rendering never touches the stored messages.
#[derive(Debug, Clone, Copy)]
pub struct RecentWindow<'a> {
    messages: &'a [Message],
    history_empty: bool,
}

impl<'a> RecentWindow<'a> {
    pub fn messages(&self) -> &'a [Message] {
        self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// `"{role}: {text}"` lines, text capped at 100 characters plus `...`
    pub fn lines(&self) -> impl Iterator<Item = String> + Clone + 'a {
        self.messages.iter().map(Message::summary_line)
    }
}

impl fmt::Display for RecentWindow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.history_empty {
            return f.write_str(NEW_CONVERSATION_SENTINEL);
        }
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(n: usize) -> ConversationHistory {
        let mut history = ConversationHistory::new();
        for i in 1..=n {
            if i % 2 == 1 {
                history.append_user(format!("question {}", i));
            } else {
                history.append_agent("TechLead", format!("answer {}", i));
            }
        }
        history
    }

    #[test]
    fn test_append_assigns_gapless_sequence() {
        let mut history = ConversationHistory::new();
        assert_eq!(history.append_user("a").sequence(), 1);
        assert_eq!(history.append_agent("QAEngineer", "b").sequence(), 2);
        assert_eq!(history.append_system("c").sequence(), 3);

        let sequences: Vec<u64> = history.iter().map(|m| m.sequence()).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
    }

    #[test]
    fn test_round_trip_preserves_order_and_content() {
        let mut history = ConversationHistory::new();
        let inputs = [
            (Role::User, "", "Should we use microservices?"),
            (Role::Agent, "SeniorDeveloper", "It depends on team size."),
            (Role::Agent, "DevOpsEngineer", "Operational cost goes up."),
            (Role::System, "", "note"),
        ];
        for (role, author, text) in inputs {
            history.append(role, author, text);
        }

        assert_eq!(history.len(), inputs.len());
        for (msg, (role, author, text)) in history.iter().zip(inputs) {
            assert_eq!(msg.role(), role);
            assert_eq!(msg.author(), author);
            assert_eq!(msg.text(), text);
        }
    }

    #[test]
    fn test_empty_history_renders_sentinel() {
        let history = ConversationHistory::new();
        assert_eq!(
            history.recent_window(DEFAULT_CONTEXT_WINDOW).to_string(),
            NEW_CONVERSATION_SENTINEL
        );
        assert!(history.recent_window(6).is_empty());
    }

    #[test]
    fn test_recent_window_takes_last_k_in_order() {
        let history = history_of(10);
        let window = history.recent_window(6);

        assert_eq!(window.len(), 6);
        let sequences: Vec<u64> = window.messages().iter().map(|m| m.sequence()).collect();
        assert_eq!(sequences, vec![5, 6, 7, 8, 9, 10]);

        let lines: Vec<String> = window.lines().collect();
        assert_eq!(lines[0], "user: question 5");
        assert_eq!(lines[5], "agent: answer 10");
    }

    #[test]
    fn test_recent_window_shorter_history() {
        let history = history_of(2);
        let window = history.recent_window(6);
        assert_eq!(window.len(), 2);
        assert_eq!(window.to_string(), "user: question 1\nagent: answer 2");
    }

    #[test]
    fn test_recent_window_truncates_without_mutating() {
        let mut history = history_of(9);
        let long = "y".repeat(120);
        history.append_agent("UXDesigner", long.clone());

        let window = history.recent_window(6);
        let last = window.lines().last().unwrap();
        assert_eq!(last, format!("agent: {}...", "y".repeat(100)));
        assert!(window.lines().all(|l| l.len() <= "agent: ".len() + 103));

        assert_eq!(history.last().unwrap().text(), long);
    }

    #[test]
    fn test_recent_window_is_restartable() {
        let history = history_of(4);
        let window = history.recent_window(3);
        let first: Vec<String> = window.lines().collect();
        let second: Vec<String> = window.lines().collect();
        assert_eq!(first, second);
        assert_eq!(window.to_string(), window.to_string());
    }

    #[test]
    fn test_clear_restarts_sequence() {
        let mut history = history_of(3);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.append_user("again").sequence(), 1);
    }

    #[test]
    fn test_agent_turns() {
        let history = history_of(5);
        assert_eq!(history.agent_turns(), 2);
    }
}

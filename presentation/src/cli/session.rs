//! Session commands typed at the interactive prompt
//!
//! Commands are matched after trimming and ignoring case. Any other input is
//! a message for the agents, so a question that happens to start with
//! "help me ..." still reaches them.

use roundtable_domain::StrategyKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Quit,
    Help,
    /// List the registered agents
    Agents,
    /// Empty the conversation history
    Clear,
    /// Show the active strategy
    Strategy,
    /// Switch strategy for subsequent turns
    UseStrategy(StrategyKind),
    Message(String),
}

impl SessionCommand {
    /// Interpret one input line. Blank input yields `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let command = match line.to_lowercase().as_str() {
            "quit" | "exit" => SessionCommand::Quit,
            "help" => SessionCommand::Help,
            "agents" => SessionCommand::Agents,
            "clear" => SessionCommand::Clear,
            "strategy" => SessionCommand::Strategy,
            "custom" => SessionCommand::UseStrategy(StrategyKind::CoordinatorVote),
            "magentic" => SessionCommand::UseStrategy(StrategyKind::TurnStateMachine),
            _ => SessionCommand::Message(line.to_string()),
        };
        Some(command)
    }
}

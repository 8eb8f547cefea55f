//! Console text for the interactive session and one-shot rounds

use super::sink::format_reply;
use colored::Colorize;
use roundtable_application::{MANAGER_NAME, RoundError, RoundReport, RoundStatus};
use roundtable_domain::{AgentRegistry, StrategyKind};

/// Formats session text for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn welcome(strategy: StrategyKind, agents: &AgentRegistry) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&Self::header("Roundtable - Group Chat"));
        output.push_str("\n\n");
        output.push_str(&format!(
            "{} {}\n",
            "Strategy:".cyan().bold(),
            strategy.display_name()
        ));
        output.push_str(&format!("{} {}\n", "Agents:".cyan().bold(), agents.format_list()));
        output.push_str(&format!(
            "\nType {} for commands, {} to leave.\n",
            "help".bold(),
            "quit".bold()
        ));
        output
    }

    pub fn help() -> String {
        let mut output = String::new();
        output.push_str(&format!("\n{}\n", "Commands:".cyan().bold()));
        output.push_str("  help            - Show this help\n");
        output.push_str("  agents          - List the agents in the conversation\n");
        output.push_str("  clear           - Start a new conversation\n");
        output.push_str("  strategy        - Show the active strategy\n");
        for kind in StrategyKind::all() {
            output.push_str(&format!(
                "  {:<15} - Switch to {}\n",
                kind.command(),
                kind.display_name()
            ));
        }
        output.push_str("  quit, exit      - Leave the session\n");
        output.push_str("\nAnything else is sent to the agents.\n");
        output
    }

    pub fn agents(agents: &AgentRegistry) -> String {
        let mut output = format!("\n{}\n", "Agents:".cyan().bold());
        for agent in agents {
            let marker = if agent.emoji.is_empty() { "-" } else { agent.emoji.as_str() };
            if agent.description.is_empty() {
                output.push_str(&format!("  {} {}\n", marker, agent.name.bold()));
            } else {
                output.push_str(&format!(
                    "  {} {} - {}\n",
                    marker,
                    agent.name.bold(),
                    agent.description
                ));
            }
        }
        output
    }

    pub fn strategy(strategy: StrategyKind) -> String {
        let mut output = format!(
            "\n{} {}\n  {}\n",
            "Current strategy:".cyan().bold(),
            strategy.display_name(),
            strategy.description()
        );
        let others: Vec<String> = StrategyKind::all()
            .into_iter()
            .filter(|kind| *kind != strategy)
            .map(|kind| format!("'{}' for {}", kind.command(), kind.display_name()))
            .collect();
        output.push_str(&format!("  Type {} to switch.\n", others.join(" or ")));
        output
    }

    pub fn strategy_switched(strategy: StrategyKind) -> String {
        format!(
            "{} {}\n",
            "Switched to".green(),
            strategy.display_name().bold()
        )
    }

    pub fn cleared() -> String {
        format!("{}\n", "Conversation cleared.".green())
    }

    /// What the round left for the user beyond the streamed agent replies
    pub fn report(report: &RoundReport) -> Option<String> {
        match &report.outcome.status {
            RoundStatus::Completed if report.turns() == 0 => Some(format!(
                "{}\n",
                "No agent was selected for this message.".dimmed()
            )),
            RoundStatus::Completed => None,
            RoundStatus::Concluded(summary) => Some(format_reply(MANAGER_NAME, &summary.text)),
            RoundStatus::TimedOut(message) => {
                Some(format!("\n{} {}\n", "Timed out:".yellow().bold(), message))
            }
            RoundStatus::Failed(RoundError::Cancelled) => {
                Some(format!("\n{}\n", "Round cancelled.".yellow()))
            }
            RoundStatus::Failed(e) => Some(format!(
                "\n{} {} ({} {} completed)\n",
                "Error:".red().bold(),
                e,
                report.turns(),
                if report.turns() == 1 { "turn" } else { "turns" }
            )),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(48);
        format!("{}\n{:^48}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}

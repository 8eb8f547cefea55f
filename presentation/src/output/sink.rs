//! Console response sink

use crate::progress::reporter::ProgressReporter;
use colored::{Color, Colorize};
use roundtable_application::{ResponseSink, SinkError};
use std::sync::Arc;

/// Header color for an agent; unknown names fall back to white
pub fn agent_color(agent: &str) -> Color {
    match agent {
        "ProductManager" => Color::Cyan,
        "SeniorDeveloper" => Color::Green,
        "DevOpsEngineer" => Color::Yellow,
        "QAEngineer" => Color::Magenta,
        "UXDesigner" => Color::Red,
        "TechLead" => Color::Blue,
        "DataScientist" => Color::BrightCyan,
        "SecurityEngineer" => Color::BrightRed,
        _ => Color::White,
    }
}

/// `[Agent]:` header followed by the reply
pub fn format_reply(agent: &str, text: &str) -> String {
    format!(
        "\n{}\n{}\n",
        format!("[{}]:", agent).color(agent_color(agent)).bold(),
        text.trim_end()
    )
}

/// Prints every agent reply as it is recorded
#[derive(Default)]
pub struct ConsoleResponseSink {
    progress: Option<Arc<ProgressReporter>>,
}

impl ConsoleResponseSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print through the reporter so its spinner is hidden while writing
    pub fn with_progress(mut self, progress: Arc<ProgressReporter>) -> Self {
        self.progress = Some(progress);
        self
    }
}

impl ResponseSink for ConsoleResponseSink {
    fn notify(&self, agent_name: &str, text: &str) -> Result<(), SinkError> {
        let output = format_reply(agent_name, text);
        match &self.progress {
            Some(progress) => progress.suspend(|| println!("{}", output)),
            None => println!("{}", output),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_agents_have_distinct_colors() {
        let names = [
            "ProductManager",
            "SeniorDeveloper",
            "DevOpsEngineer",
            "QAEngineer",
            "UXDesigner",
            "TechLead",
            "DataScientist",
            "SecurityEngineer",
        ];
        let colors: Vec<Color> = names.iter().map(|n| agent_color(n)).collect();
        for (i, color) in colors.iter().enumerate() {
            assert_ne!(*color, Color::White, "{}", names[i]);
            assert!(!colors[..i].contains(color), "{} reuses a color", names[i]);
        }
        assert_eq!(agent_color("Poet"), Color::White);
    }

    #[test]
    fn test_reply_has_bracketed_header() {
        colored::control::set_override(false);
        let output = format_reply("TechLead", "Ship it behind a flag.\n\n");
        assert_eq!(output, "\n[TechLead]:\nShip it behind a flag.\n");
    }
}

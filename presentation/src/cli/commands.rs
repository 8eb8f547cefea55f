//! CLI command definitions

use clap::Parser;
use roundtable_domain::StrategyKind;
use std::path::PathBuf;

/// CLI arguments for roundtable
#[derive(Parser, Debug)]
#[command(name = "roundtable")]
#[command(author, version, about = "Multi-agent group chat - a team of role agents discusses your question")]
#[command(long_about = r#"
Roundtable puts a team of role agents (product manager, developers, QA, ...)
in one conversation and decides who speaks next.

Two strategies are available:
  custom    A coordinator names the 1-2 agents best suited to answer
  magentic  A group chat manager picks speakers one at a time, then
            closes the round with a summary

Configuration files are loaded from (in priority order):
1. --config <path>                    Explicit config file
2. ./roundtable.toml                  Project-level config
3. ~/.config/roundtable/config.toml   Global config

Provider credentials come from the environment (OPENAI_API_KEY, or
AZURE_OPENAI_KEY with AZURE_OPENAI_ENDPOINT and AZURE_OPENAI_DEPLOYMENT_NAME).

Example:
  roundtable "Should we split the monolith?"
  roundtable --strategy custom "What's the deployment status?"
  roundtable
"#)]
pub struct Cli {
    /// Question for a single round (omit to start the interactive session)
    pub question: Option<String>,

    /// Orchestration strategy: custom or magentic
    #[arg(short, long, value_name = "STRATEGY")]
    pub strategy: Option<StrategyKind>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append a JSONL transcript of the conversation to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_and_strategy() {
        let cli = Cli::parse_from(["roundtable", "--strategy", "custom", "Ship it?"]);
        assert_eq!(cli.question.as_deref(), Some("Ship it?"));
        assert_eq!(cli.strategy, Some(StrategyKind::CoordinatorVote));
    }

    #[test]
    fn test_defaults_start_a_session() {
        let cli = Cli::parse_from(["roundtable"]);
        assert!(cli.question.is_none());
        assert!(cli.strategy.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::parse_from(["roundtable", "-vv", "--log-file", "chat.jsonl"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_file, Some(PathBuf::from("chat.jsonl")));
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert!(Cli::try_parse_from(["roundtable", "--strategy", "round-robin"]).is_err());
    }
}

//! REPL (Read-Eval-Print Loop) for the interactive session

use super::interrupt::CtrlCGuard;
use crate::cli::session::SessionCommand;
use crate::output::console::ConsoleFormatter;
use roundtable_application::Orchestrator;
use roundtable_domain::AgentRegistry;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

/// Interactive chat REPL
pub struct ChatRepl {
    orchestrator: Orchestrator,
    agents: Arc<AgentRegistry>,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    pub fn new(orchestrator: Orchestrator, agents: Arc<AgentRegistry>) -> Self {
        Self {
            orchestrator,
            agents,
            history_file: Self::default_history_file(),
        }
    }

    /// Override where line-editor history is kept
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.history_file = path;
        }
        self
    }

    fn default_history_file() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("roundtable").join("history.txt"))
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if rl.load_history(path).is_err() {
                debug!("No line history at {}", path.display());
            }
        }

        print!(
            "{}",
            ConsoleFormatter::welcome(self.orchestrator.strategy(), &self.agents)
        );

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let Some(command) = SessionCommand::parse(&line) else {
                        continue;
                    };
                    let _ = rl.add_history_entry(line.trim());
                    if !self.handle(command).await {
                        println!("Bye!");
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_file {
            if let Err(e) = rl.save_history(path) {
                warn!("Could not save line history to {}: {}", path.display(), e);
            }
        }

        Ok(())
    }

    /// Apply one session command. Returns false when the session should end.
    async fn handle(&mut self, command: SessionCommand) -> bool {
        match command {
            SessionCommand::Quit => return false,
            SessionCommand::Help => print!("{}", ConsoleFormatter::help()),
            SessionCommand::Agents => print!("{}", ConsoleFormatter::agents(&self.agents)),
            SessionCommand::Clear => {
                self.orchestrator.clear_history();
                print!("{}", ConsoleFormatter::cleared());
            }
            SessionCommand::Strategy => {
                print!("{}", ConsoleFormatter::strategy(self.orchestrator.strategy()))
            }
            SessionCommand::UseStrategy(kind) => {
                self.orchestrator.set_strategy(kind);
                print!("{}", ConsoleFormatter::strategy_switched(kind));
            }
            SessionCommand::Message(text) => self.process_message(&text).await,
        }
        true
    }

    async fn process_message(&mut self, text: &str) {
        let guard = CtrlCGuard::new();
        let report = self
            .orchestrator
            .process_turn_with_cancellation(text, guard.token())
            .await;
        drop(guard);

        if let Some(output) = ConsoleFormatter::report(&report) {
            print!("{}", output);
        }
        println!();
    }
}

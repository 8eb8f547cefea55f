//! Progress reporting while a round runs

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use roundtable_application::RoundProgressNotifier;
use roundtable_domain::{StrategyKind, TerminationDecision};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Shows a spinner while an agent or the manager is working
///
/// Agent replies are printed by the console sink through [`suspend`], so the
/// spinner line never interleaves with reply text.
///
/// [`suspend`]: ProgressReporter::suspend
pub struct ProgressReporter {
    multi: MultiProgress,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Hide the spinner while `f` writes to the terminal
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.multi.suspend(f)
    }

    fn start(&self, prefix: &str, message: &str) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(prefix.to_string());
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        let previous = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(pb);
        if let Some(previous) = previous {
            previous.finish_and_clear();
        }
    }

    fn stop(&self) {
        let current = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(pb) = current {
            pb.finish_and_clear();
        }
    }

    fn line(&self, text: String) {
        let _ = self.multi.println(text);
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundProgressNotifier for ProgressReporter {
    fn on_round_start(&self, strategy: StrategyKind) {
        let message = match strategy {
            StrategyKind::CoordinatorVote => "choosing who answers...",
            StrategyKind::TurnStateMachine => "choosing the first speaker...",
        };
        self.start("Coordinator", message);
    }

    fn on_agents_selected(&self, agents: &[&str]) {
        self.stop();
        if agents.is_empty() {
            self.line(format!("{} no agent selected", "->".cyan()));
        } else {
            self.line(format!("{} {}", "->".cyan(), agents.join(", ").bold()));
        }
    }

    fn on_agent_thinking(&self, agent: &str) {
        self.start(agent, "is thinking...");
    }

    fn on_agent_done(&self, _agent: &str) {
        self.stop();
    }

    fn on_termination_check(&self, decision: &TerminationDecision) {
        if decision.terminate {
            self.line(format!(
                "{} {}",
                "Manager:".dimmed(),
                format!("wrapping up ({})", decision.reason).dimmed()
            ));
        } else {
            self.start("Manager", "choosing the next speaker...");
        }
    }

    fn on_summarizing(&self) {
        self.start("Manager", "writing the closing summary...");
    }

    fn on_round_end(&self, _strategy: StrategyKind, _success: bool) {
        self.stop();
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl RoundProgressNotifier for SimpleProgress {
    fn on_round_start(&self, strategy: StrategyKind) {
        println!("{} {}", "->".cyan(), strategy.display_name().bold());
    }

    fn on_agents_selected(&self, agents: &[&str]) {
        println!("  selected: {}", agents.join(", "));
    }

    fn on_agent_thinking(&self, agent: &str) {
        println!("  {} {}", "..".dimmed(), agent);
    }

    fn on_termination_check(&self, decision: &TerminationDecision) {
        if decision.terminate {
            println!("  {} {}", "v".green(), decision.reason);
        }
    }

    fn on_summarizing(&self) {
        println!("  {} summarizing", "..".dimmed());
    }

    fn on_round_end(&self, _strategy: StrategyKind, success: bool) {
        if !success {
            println!("  {} round did not finish", "x".red());
        }
    }
}

//! Presentation layer for roundtable
//!
//! This crate contains the CLI definition, the session command parser,
//! console output, progress reporters, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, CtrlCGuard};
pub use cli::commands::Cli;
pub use cli::session::SessionCommand;
pub use output::console::ConsoleFormatter;
pub use output::set_color_enabled;
pub use output::sink::{ConsoleResponseSink, agent_color};
pub use progress::reporter::{ProgressReporter, SimpleProgress};

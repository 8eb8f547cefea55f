//! Interactive chat module
//!
//! Provides a readline-based interactive session over an [`Orchestrator`].
//!
//! [`Orchestrator`]: roundtable_application::Orchestrator

mod interrupt;
mod repl;

pub use interrupt::CtrlCGuard;
pub use repl::ChatRepl;

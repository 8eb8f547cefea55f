//! Infrastructure layer for roundtable
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the chat-completion gateway, configuration file
//! loading and the JSONL transcript logger.

pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileOrchestrationConfig,
    FileOutputConfig, FileProviderConfig, FileReplConfig,
};
pub use logging::JsonlConversationLogger;
pub use providers::{
    ProviderKind,
    openai::{OpenAiGateway, OpenAiSettings},
};

//! Application layer for roundtable
//!
//! This crate contains the orchestration use cases, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_TOPIC, OrchestrationConfig};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{CompletionRequest, GatewayError, LlmGateway, PromptMessage, PromptRole},
    progress::{NoProgress, RoundProgressNotifier},
    response_sink::{NoResponseSink, ResponseSink, SinkError},
};
pub use use_cases::coordinator_vote::CoordinatorVoteRound;
pub use use_cases::group_chat_manager::GroupChatManager;
pub use use_cases::group_chat_round::{GroupChatRound, MANAGER_NAME, TIMEOUT_MESSAGE};
pub use use_cases::orchestrator::{Orchestrator, RoundReport};
pub use use_cases::round::{RoundError, RoundOutcome, RoundRunner, RoundServices, RoundStatus};

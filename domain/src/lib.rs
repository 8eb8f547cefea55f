//! Domain layer for roundtable
//!
//! This crate contains the core conversation model and the turn-selection
//! rules. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Conversation
//!
//! An append-only [`ConversationHistory`] shared by the user and every agent.
//! Prompts see it through a bounded, truncated [`RecentWindow`].
//!
//! ## Agents
//!
//! A static [`AgentRegistry`] of role agents. Names are compared
//! case-insensitively everywhere.
//!
//! ## Orchestration
//!
//! - **Coordinator vote**: a coordinator names 1-2 agents per round
//! - **Turn state machine**: a group-chat manager picks one speaker at a time,
//!   bounded by a [`RoundState`] invocation ceiling

pub mod agent;
pub mod conversation;
pub mod core;
pub mod orchestration;
pub mod prompt;

// Re-export commonly used types
pub use agent::{
    descriptor::AgentDescriptor,
    registry::AgentRegistry,
    team::{COORDINATOR_NAME, DEFAULT_FALLBACK_AGENT, SELECTION_PRIORITY, coordinator},
};
pub use conversation::{
    history::{ConversationHistory, DEFAULT_CONTEXT_WINDOW, NEW_CONVERSATION_SENTINEL, RecentWindow},
    message::{Message, Role, SUMMARY_TEXT_CAP},
};
pub use core::{error::DomainError, string::truncate_chars};
pub use orchestration::{
    decision::{
        ClosingSummary, DEFAULT_CLOSING_LINE, NextSpeaker, REASON_INVOCATION_LIMIT,
        REASON_NEED_MORE, REASON_NO_RESPONSES, SelectionDecision, TerminationDecision,
    },
    parsing::{
        clean_selection_reply, find_agent_name, parse_coordinator_reply, parse_termination_reply,
    },
    round_state::{DEFAULT_MAXIMUM_INVOCATIONS, RoundState},
    strategy::StrategyKind,
};
pub use prompt::PromptTemplate;

//! Conversation subdomain
//!
//! The shared, append-only record of a multi-agent conversation.
//!
//! - [`message::Message`] - one immutable turn (user input, agent reply, system note)
//! - [`history::ConversationHistory`] - ordered turns plus the recent-window
//!   projection used to build prompts

pub mod history;
pub mod message;

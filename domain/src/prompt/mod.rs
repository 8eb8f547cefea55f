//! Prompt domain
//!
//! Templates for the coordinator, the group-chat manager and its closing summary.

pub mod template;

pub use template::PromptTemplate;

//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

mod agent_turn;
pub mod coordinator_vote;
pub mod group_chat_manager;
pub mod group_chat_round;
pub mod orchestrator;
pub mod round;

#[cfg(test)]
pub(crate) mod test_support;

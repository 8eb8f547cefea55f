//! Orchestration subdomain
//!
//! Decides who speaks next and when a discussion ends.
//!
//! - [`strategy::StrategyKind`] - coordinator vote or turn state machine
//! - [`decision`] - one result type per decision point
//! - [`round_state::RoundState`] - invocation counter behind the circuit breaker
//! - [`parsing`] - coercing free-text model replies into decisions

pub mod decision;
pub mod parsing;
pub mod round_state;
pub mod strategy;

//! Command-line surface: process arguments and in-session commands

pub mod commands;
pub mod session;

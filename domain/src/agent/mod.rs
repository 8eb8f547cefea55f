//! Agent subdomain
//!
//! Static catalog of the participants that can be asked to speak.
//!
//! - [`descriptor::AgentDescriptor`] - name, role instructions and capability tags
//! - [`registry::AgentRegistry`] - immutable, ordered, case-insensitive catalog
//! - [`team`] - the built-in software development team and its coordinator

pub mod descriptor;
pub mod registry;
pub mod team;

//! Application configuration
//!
//! Runtime parameters handed to the use cases. File and environment loading
//! lives in the infrastructure layer and converts into these types.

pub mod orchestration;

pub use orchestration::{DEFAULT_TOPIC, OrchestrationConfig};

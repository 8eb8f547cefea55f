//! OpenAI-compatible chat completions
//!
//! One gateway serves both the public OpenAI API and Azure OpenAI
//! deployments; they differ only in URL shape and auth header.
//!
//! | Provider | URL | Auth header |
//! |----------|-----|-------------|
//! | OpenAI | `{base_url}/chat/completions` | `Authorization: Bearer` |
//! | Azure | `{endpoint}/openai/deployments/{deployment}/chat/completions?api-version=` | `api-key` |

mod gateway;
mod settings;
mod wire;

pub use gateway::OpenAiGateway;
pub use settings::{
    DEFAULT_AZURE_API_VERSION, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL, OpenAiSettings,
    Target,
};

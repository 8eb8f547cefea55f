//! Agent descriptor value object

use crate::core::string::eq_ignore_case;
use serde::{Deserialize, Serialize};

/// Static description of one conversational participant (Value Object)
///
/// `instructions` is the role prompt sent as the system message whenever the
/// agent speaks. `expertise` is a short topic list used in selection guidance
/// (e.g. `"Deployment, infrastructure, monitoring"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentDescriptor {
    pub name: String,
    pub description: String,
    pub emoji: String,
    pub expertise: String,
    pub instructions: String,
    pub capabilities: Vec<String>,
}

impl AgentDescriptor {
    pub fn new(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    pub fn with_expertise(mut self, expertise: impl Into<String>) -> Self {
        self.expertise = expertise.into();
        self
    }

    /// Add capability tags. Tags behave as a set: duplicates are ignored and
    /// the first-seen order is kept for display.
    pub fn with_capabilities<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            let tag = tag.into();
            if !self.capabilities.contains(&tag) {
                self.capabilities.push(tag);
            }
        }
        self
    }

    /// Case-insensitive name comparison
    pub fn is_named(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name.trim())
    }

    pub fn has_capability(&self, tag: &str) -> bool {
        self.capabilities.iter().any(|c| eq_ignore_case(c, tag))
    }
}

//! Agent registry

use super::descriptor::AgentDescriptor;
use super::team::{SELECTION_PRIORITY, software_team_agents};
use crate::core::error::DomainError;
use crate::core::string::eq_ignore_case;

/// Immutable, ordered catalog of the agents taking part in a conversation.
///
/// Registry order is significant: agents chosen by the coordinator speak in
/// registry order, not in the order the coordinator named them. All name
/// lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct AgentRegistry {
    agents: Vec<AgentDescriptor>,
}

impl AgentRegistry {
    /// Build a registry, rejecting empty rosters, blank or malformed names and
    /// names that collide case-insensitively.
    ///
    /// Names may not contain whitespace or commas because the coordinator
    /// answers with a comma-separated list of names.
    pub fn new(agents: Vec<AgentDescriptor>) -> Result<Self, DomainError> {
        if agents.is_empty() {
            return Err(DomainError::NoAgents);
        }

        for (i, agent) in agents.iter().enumerate() {
            if agent.name.is_empty()
                || agent.name.contains(',')
                || agent.name.chars().any(char::is_whitespace)
            {
                return Err(DomainError::InvalidAgent(format!(
                    "agent name {:?} must be non-empty without whitespace or commas",
                    agent.name
                )));
            }
            if agents[..i].iter().any(|a| eq_ignore_case(&a.name, &agent.name)) {
                return Err(DomainError::DuplicateAgent(agent.name.clone()));
            }
        }

        Ok(Self { agents })
    }

    /// The built-in software development team
    pub fn software_team() -> Self {
        Self {
            agents: software_team_agents(),
        }
    }

    /// Look up an agent by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&AgentDescriptor> {
        self.agents.iter().find(|a| a.is_named(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AgentDescriptor> {
        self.agents.iter()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.agents.iter().map(|a| a.name.as_str()).collect()
    }

    /// Comma-separated participant list for prompts
    pub fn format_list(&self) -> String {
        self.names().join(", ")
    }

    /// Agents whose name matches any candidate, in registry order.
    ///
    /// Unknown candidates are dropped and repeated candidates collapse to a
    /// single entry.
    pub fn matching<S: AsRef<str>>(&self, candidates: &[S]) -> Vec<&AgentDescriptor> {
        self.agents
            .iter()
            .filter(|agent| candidates.iter().any(|c| agent.is_named(c.as_ref())))
            .collect()
    }

    /// Order in which names are searched for in a free-text selection reply.
    ///
    /// Built-in roles come first in their fixed priority, then any other
    /// registered agent in registry order. Spellings are the registry's own.
    pub fn selection_priority(&self) -> Vec<&str> {
        let mut order: Vec<&str> = SELECTION_PRIORITY
            .iter()
            .filter_map(|name| self.get(name).map(|a| a.name.as_str()))
            .collect();
        for agent in &self.agents {
            if !order.contains(&agent.name.as_str()) {
                order.push(agent.name.as_str());
            }
        }
        order
    }
}

impl<'a> IntoIterator for &'a AgentRegistry {
    type Item = &'a AgentDescriptor;
    type IntoIter = std::slice::Iter<'a, AgentDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}

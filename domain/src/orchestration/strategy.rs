//! Orchestration strategy selector

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Which turn-selection strategy drives a round
///
/// - `CoordinatorVote`: a coordinator model names 1-2 agents, each speaks once
///   (session command `custom`)
/// - `TurnStateMachine`: a group-chat manager picks one agent at a time until
///   it decides to stop or hits its invocation ceiling (session command
///   `magentic`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyKind {
    CoordinatorVote,
    #[default]
    TurnStateMachine,
}

impl StrategyKind {
    /// Session command that switches to this strategy
    pub fn command(&self) -> &'static str {
        match self {
            StrategyKind::CoordinatorVote => "custom",
            StrategyKind::TurnStateMachine => "magentic",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StrategyKind::CoordinatorVote => "Custom Orchestration",
            StrategyKind::TurnStateMachine => "Magentic Orchestration",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StrategyKind::CoordinatorVote => {
                "Uses a coordinator to select 1-2 agents based on context"
            }
            StrategyKind::TurnStateMachine => {
                "A group chat manager picks speakers one at a time and closes with a summary"
            }
        }
    }

    pub fn all() -> [StrategyKind; 2] {
        [StrategyKind::CoordinatorVote, StrategyKind::TurnStateMachine]
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for StrategyKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "custom" | "coordinator" | "coordinator_vote" => Ok(StrategyKind::CoordinatorVote),
            "magentic" | "group_chat" | "state_machine" | "turn_state_machine" => {
                Ok(StrategyKind::TurnStateMachine)
            }
            _ => Err(DomainError::UnknownStrategy(s.to_string())),
        }
    }
}

impl Serialize for StrategyKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.command())
    }
}

impl<'de> Deserialize<'de> for StrategyKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_turn_state_machine() {
        assert_eq!(StrategyKind::default(), StrategyKind::TurnStateMachine);
    }

    #[test]
    fn test_parse_command_aliases() {
        assert_eq!("custom".parse::<StrategyKind>().unwrap(), StrategyKind::CoordinatorVote);
        assert_eq!(
            "Coordinator-Vote".parse::<StrategyKind>().unwrap(),
            StrategyKind::CoordinatorVote
        );
        assert_eq!("MAGENTIC".parse::<StrategyKind>().unwrap(), StrategyKind::TurnStateMachine);
        assert_eq!(
            "turn_state_machine".parse::<StrategyKind>().unwrap(),
            StrategyKind::TurnStateMachine
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "round_robin".parse::<StrategyKind>().unwrap_err();
        assert_eq!(err, DomainError::UnknownStrategy("round_robin".to_string()));
    }

    #[test]
    fn test_command_roundtrip() {
        for kind in StrategyKind::all() {
            assert_eq!(kind.command().parse::<StrategyKind>().unwrap(), kind);
        }
    }
}

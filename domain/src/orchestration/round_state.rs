//! Invocation counter for the group-chat manager

/// Default ceiling on selection and termination queries per round
pub const DEFAULT_MAXIMUM_INVOCATIONS: u32 = 5;

/// Circuit-breaker state of one group-chat manager.
///
/// Selection and termination queries share a single counter. Once the count
/// exceeds the maximum, every further decision is forced to terminate without
/// consulting the model. The count never decreases; a fresh state needs a new
/// manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundState {
    invocation_count: u32,
    maximum_invocations: u32,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new(DEFAULT_MAXIMUM_INVOCATIONS)
    }
}

impl RoundState {
    pub fn new(maximum_invocations: u32) -> Self {
        Self {
            invocation_count: 0,
            maximum_invocations,
        }
    }

    /// State that has already seen `invocation_count` queries
    pub fn with_count(maximum_invocations: u32, invocation_count: u32) -> Self {
        Self {
            invocation_count,
            maximum_invocations,
        }
    }

    /// Count one selection or termination query, returning the new count
    pub fn record_invocation(&mut self) -> u32 {
        self.invocation_count = self.invocation_count.saturating_add(1);
        self.invocation_count
    }

    /// True once the count has passed the ceiling
    pub fn is_exhausted(&self) -> bool {
        self.invocation_count > self.maximum_invocations
    }

    pub fn invocation_count(&self) -> u32 {
        self.invocation_count
    }

    pub fn maximum_invocations(&self) -> u32 {
        self.maximum_invocations
    }
}

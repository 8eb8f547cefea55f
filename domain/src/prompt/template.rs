//! Prompt templates for turn selection and termination

use crate::agent::registry::AgentRegistry;

/// Templates for generating prompts at each decision point
pub struct PromptTemplate;

impl PromptTemplate {
    /// `- {expertise} → {name}` guidance lines for every agent that declares
    /// an expertise
    fn expertise_guidance(agents: &AgentRegistry) -> String {
        agents
            .iter()
            .filter(|a| !a.expertise.is_empty())
            .map(|a| format!("- {} → {}", a.expertise, a.name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// System prompt for the coordinator that names who should answer
    pub fn coordinator_system(agents: &AgentRegistry) -> String {
        format!(
            r#"You are a conversation coordinator for a software development team. Your job is to:
1. Analyze the conversation context and current user input to determine which 1-2 agents are MOST relevant
2. Consider the conversation history - avoid selecting agents who have already contributed to the same topic
3. Only select agents whose expertise directly relates to the current question or follow-up
4. For simple questions, select only 1 agent
5. For complex topics requiring multiple perspectives, select maximum 2 agents
6. Respond with ONLY the names of the selected agents, separated by commas

Context Analysis Guidelines:
- If this is a follow-up question to a previous discussion, keep the agents who can continue it
- If an agent has already provided a comprehensive answer, consider if another perspective is needed
- If the topic has shifted, select agents relevant to the new topic
- If this is a new conversation, select based on the current question only

Agent Selection Guidelines:
{}

Available agents: {}"#,
            Self::expertise_guidance(agents),
            agents.format_list()
        )
    }

    /// User prompt asking the coordinator to pick agents for the current input
    pub fn coordinator_selection(context: &str, user_input: &str) -> String {
        format!(
            r#"Conversation Context:
{}

Current User Input: "{}"

Based on the conversation history and current input, which agents should respond?
Consider:
1. The current question/topic
2. Previous agents who have already contributed (prefer agents who have not yet covered this topic)
3. Whether this is a follow-up question (keep continuity with the agents already involved) or a new topic
4. The expertise needed for the current discussion

Select 1-2 most relevant agents. Respond with ONLY the agent names, separated by commas."#,
            context, user_input
        )
    }

    /// Instruction appended after the history when the manager picks the next speaker
    pub fn manager_selection(topic: &str, agents: &AgentRegistry) -> String {
        format!(
            r#"Select the best agent to respond to: "{}"

Available agents: {}

Consider the conversation context and select the most appropriate agent:
{}

Respond with just the agent name."#,
            topic,
            agents.format_list(),
            Self::expertise_guidance(agents)
        )
    }

    /// Instruction appended after the history when the manager decides whether to stop
    pub fn termination(topic: &str) -> String {
        format!(
            r#"Should we end this discussion about "{}"?
Respond with True to end, False to continue."#,
            topic
        )
    }

    /// Instruction appended after the full history to produce the closing statement
    pub fn closing_summary(topic: &str) -> String {
        format!(
            r#"You are the mediator guiding a discussion on the topic of '{}'.
You have just concluded the discussion.
Please summarize the discussion and provide a closing statement."#,
            topic
        )
    }
}

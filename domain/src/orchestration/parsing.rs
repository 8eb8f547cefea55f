//! Decision parsing for turn selection and termination.
//!
//! These functions coerce free-form model replies into structured decisions.
//! They are pure domain logic - no I/O, just text pattern matching.
//!
//! # Functions
//!
//! | Function | Use Case | Rule |
//! |----------|----------|------|
//! | [`parse_coordinator_reply`] | Coordinator vote | Comma-separated names |
//! | [`find_agent_name`] | Group-chat manager selection | First known name found, in priority order |
//! | [`parse_termination_reply`] | Group-chat manager termination | Contains `True` |

/// Split a coordinator reply into candidate agent names.
///
/// Splits on commas, trims whitespace and drops empty tokens. Candidates are
/// not validated here; unknown names are filtered against the registry by the
/// caller.
///
/// ```
/// use roundtable_domain::orchestration::parsing::parse_coordinator_reply;
///
/// assert_eq!(
///     parse_coordinator_reply(" SeniorDeveloper,DevOpsEngineer , "),
///     vec!["SeniorDeveloper", "DevOpsEngineer"]
/// );
/// ```
pub fn parse_coordinator_reply(reply: &str) -> Vec<String> {
    reply
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strip code fences, including a `json` language tag on an opening fence,
/// from a selection reply. Text outside the fences is left untouched.
pub fn clean_selection_reply(reply: &str) -> String {
    reply
        .replace("```json", "")
        .replace("```JSON", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Pick one agent name out of a free-text selection reply.
///
/// The reply is cleaned with [`clean_selection_reply`], then each name in
/// `priority` is looked for anywhere in the text (case-insensitive); the
/// first name in priority order that appears wins, regardless of where it
/// appears in the reply.
///
/// Returns `None` when no known name is present.
pub fn find_agent_name<'a>(reply: &str, priority: &[&'a str]) -> Option<&'a str> {
    let cleaned = clean_selection_reply(reply).to_lowercase();
    priority
        .iter()
        .copied()
        .find(|name| cleaned.contains(&name.to_lowercase()))
}

/// Interpret a termination reply.
///
/// True if the reply contains `true` in any casing. This is a plain
/// substring check: a reply explaining why the answer is *not* "True" still
/// counts as true. Kept as-is because it errs towards ending the discussion.
pub fn parse_termination_reply(reply: &str) -> bool {
    reply.to_lowercase().contains("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::team::SELECTION_PRIORITY;

    // ==================== parse_coordinator_reply Tests ====================

    #[test]
    fn test_coordinator_reply_two_names() {
        assert_eq!(
            parse_coordinator_reply("SeniorDeveloper, DevOpsEngineer"),
            vec!["SeniorDeveloper", "DevOpsEngineer"]
        );
    }

    #[test]
    fn test_coordinator_reply_drops_empty_tokens() {
        assert_eq!(parse_coordinator_reply(",, TechLead ,"), vec!["TechLead"]);
        assert!(parse_coordinator_reply("").is_empty());
        assert!(parse_coordinator_reply(" , ").is_empty());
    }

    #[test]
    fn test_coordinator_reply_keeps_unknown_text() {
        // Filtering against the registry happens later
        assert_eq!(
            parse_coordinator_reply("I think the Poet"),
            vec!["I think the Poet"]
        );
    }

    // ==================== find_agent_name Tests ====================

    #[test]
    fn test_find_agent_name_plain() {
        assert_eq!(
            find_agent_name("QAEngineer", &SELECTION_PRIORITY),
            Some("QAEngineer")
        );
    }

    #[test]
    fn test_find_agent_name_in_code_fence() {
        let reply = "```json\n{\"agent\": \"SecurityEngineer\"}\n```";
        assert_eq!(
            find_agent_name(reply, &SELECTION_PRIORITY),
            Some("SecurityEngineer")
        );
    }

    #[test]
    fn test_clean_keeps_json_inside_names() {
        assert_eq!(
            clean_selection_reply("```json\njsonSchemaReviewer\n```"),
            "jsonSchemaReviewer"
        );
        let reply = "```json\n{\"agent\": \"jsonSchemaReviewer\"}\n```";
        assert_eq!(
            find_agent_name(reply, &["jsonSchemaReviewer"]),
            Some("jsonSchemaReviewer")
        );
    }

    #[test]
    fn test_find_agent_name_priority_beats_position() {
        // TechLead appears first, but DevOpsEngineer has higher priority
        let reply = "TechLead could answer, but DevOpsEngineer knows the pipeline.";
        assert_eq!(
            find_agent_name(reply, &SELECTION_PRIORITY),
            Some("DevOpsEngineer")
        );
    }

    #[test]
    fn test_find_agent_name_case_insensitive() {
        assert_eq!(
            find_agent_name("uxdesigner", &SELECTION_PRIORITY),
            Some("UXDesigner")
        );
    }

    #[test]
    fn test_find_agent_name_none() {
        assert_eq!(find_agent_name("The chef should answer", &SELECTION_PRIORITY), None);
        assert_eq!(find_agent_name("", &SELECTION_PRIORITY), None);
    }

    // ==================== parse_termination_reply Tests ====================

    #[test]
    fn test_termination_true() {
        assert!(parse_termination_reply("True"));
        assert!(parse_termination_reply("true - the discussion is complete"));
        assert!(parse_termination_reply("TRUE"));
    }

    #[test]
    fn test_termination_false() {
        assert!(!parse_termination_reply("False"));
        assert!(!parse_termination_reply("Let's continue"));
        assert!(!parse_termination_reply(""));
    }

    #[test]
    fn test_termination_negated_phrasing_still_true() {
        // Known weakness of the substring rule
        assert!(parse_termination_reply("This is not True yet, keep going."));
    }
}

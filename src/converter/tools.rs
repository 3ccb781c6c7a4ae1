//! Tool inference for converted droids
//!
//! Claude agents rarely declare tools, so the droid tool list is guessed from
//! keywords found anywhere in the agent's name, description and body.
//! Matching is plain substring containment: "bashful" counts as "bash".

use std::collections::BTreeSet;

use crate::domain::ClaudeAgent;

/// Claude tool keyword to Droid tool name. Several keywords share a target.
pub const CLAUDE_TO_DROID_TOOLS: &[(&str, &str)] = &[
    ("read", "Read"),
    ("write", "Create"),
    ("edit", "Edit"),
    ("multiedit", "Edit"),
    ("bash", "Execute"),
    ("grep", "Grep"),
    ("glob", "Glob"),
    ("list", "LS"),
    ("ls", "LS"),
    ("webfetch", "FetchUrl"),
    ("websearch", "WebSearch"),
    ("task", "Task"),
    ("todowrite", "TodoWrite"),
    ("todoread", "TodoWrite"),
    ("question", "AskUser"),
];

/// Tool names the Droid runtime accepts.
pub const VALID_DROID_TOOLS: &[&str] = &[
    "Read",
    "LS",
    "Grep",
    "Glob",
    "Create",
    "Edit",
    "ApplyPatch",
    "Execute",
    "WebSearch",
    "FetchUrl",
    "TodoWrite",
    "Task",
    "AskUser",
];

/// Infer the droid tool list for an agent.
///
/// Returns `None` when no keyword occurs at all, so the `tools` field is
/// omitted rather than written as an empty list. Otherwise returns the
/// mapped names that are valid Droid tools, deduplicated and sorted.
pub fn infer_agent_tools(agent: &ClaudeAgent) -> Option<Vec<String>> {
    let haystack = format!(
        "{} {} {}",
        agent.name,
        agent.description.as_deref().unwrap_or_default(),
        agent.body
    )
    .to_lowercase();

    let mentioned: BTreeSet<&str> = CLAUDE_TO_DROID_TOOLS
        .iter()
        .filter(|(keyword, _)| haystack.contains(keyword))
        .map(|(_, tool)| *tool)
        .collect();

    if mentioned.is_empty() {
        return None;
    }

    Some(
        mentioned
            .into_iter()
            .filter(|tool| VALID_DROID_TOOLS.contains(tool))
            .map(str::to_string)
            .collect(),
    )
}

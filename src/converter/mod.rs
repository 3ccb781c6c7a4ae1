//! Claude plugin to Factory Droid conversion
//!
//! The conversion is pure: it takes a parsed [`ClaudePlugin`] and returns a
//! [`DroidBundle`] without touching the file system, and it cannot fail.
//! Commands, agents and skills are mapped one-to-one in source order.
//!
//! - Commands lose their namespace (`workflows:plan` becomes `plan`)
//! - Agents become droids with an inferred tool list (see [`tools`])
//! - Skills are passed through for the writer to copy
//! - Every body goes through the rewrite passes in [`content`]

pub mod content;
pub mod options;
pub mod tools;

pub use content::transform_content_for_droid;
pub use options::{AgentMode, ConvertOptions, PermissionMode};
pub use tools::infer_agent_tools;

use serde_yaml::{Mapping, Value};

use crate::common::naming::{flatten_command_name, normalize_name};
use crate::domain::{
    ClaudeAgent, ClaudeCommand, ClaudePlugin, DroidAgentFile, DroidBundle, DroidCommandFile,
    DroidSkillDir,
};
use crate::universal::format_frontmatter;

/// Model value meaning "use whatever the parent session uses".
pub const INHERIT_MODEL: &str = "inherit";

/// Convert a Claude plugin into a Droid bundle.
pub fn convert_claude_to_droid(plugin: &ClaudePlugin, options: &ConvertOptions) -> DroidBundle {
    tracing::debug!(
        plugin = %plugin.manifest.name,
        agent_mode = ?options.agent_mode,
        infer_temperature = options.infer_temperature,
        permissions = ?options.permissions,
        "converting plugin"
    );

    let commands: Vec<DroidCommandFile> = plugin.commands.iter().map(convert_command).collect();
    let droids: Vec<DroidAgentFile> = plugin.agents.iter().map(convert_agent).collect();
    let skill_dirs: Vec<DroidSkillDir> = plugin
        .skills
        .iter()
        .map(|skill| DroidSkillDir {
            name: skill.name.clone(),
            source_dir: skill.source_dir.clone(),
        })
        .collect();

    tracing::info!(
        commands = commands.len(),
        droids = droids.len(),
        skills = skill_dirs.len(),
        "converted plugin"
    );

    DroidBundle {
        commands,
        droids,
        skill_dirs,
    }
}

/// Convert a single command.
///
/// `argument-hint` is only written when present and non-empty, and
/// `disable-model-invocation` only when it is `true`.
pub fn convert_command(command: &ClaudeCommand) -> DroidCommandFile {
    let name = flatten_command_name(&command.name);

    let mut frontmatter = Mapping::new();
    frontmatter.insert("description".into(), command.description.clone().into());
    if let Some(hint) = command.argument_hint.as_deref().filter(|h| !h.is_empty()) {
        frontmatter.insert("argument-hint".into(), hint.into());
    }
    if command.disable_model_invocation == Some(true) {
        frontmatter.insert("disable-model-invocation".into(), true.into());
    }

    let body = transform_content_for_droid(command.body.trim());
    tracing::debug!(source = %command.name, name = %name, "converted command");

    DroidCommandFile {
        name,
        content: format_frontmatter(&frontmatter, &body),
    }
}

/// Convert a single agent into a droid.
pub fn convert_agent(agent: &ClaudeAgent) -> DroidAgentFile {
    let name = normalize_name(&agent.name);

    let mut frontmatter = Mapping::new();
    frontmatter.insert("name".into(), name.clone().into());
    if let Some(description) = agent.description.as_deref() {
        frontmatter.insert("description".into(), description.into());
    }
    frontmatter.insert("model".into(), resolve_model(agent.model.as_deref()).into());
    if let Some(tools) = infer_agent_tools(agent) {
        let tools = tools.into_iter().map(Value::String).collect();
        frontmatter.insert("tools".into(), Value::Sequence(tools));
    }

    let body = transform_content_for_droid(&agent_body(agent));
    tracing::debug!(source = %agent.name, name = %name, "converted agent");

    DroidAgentFile {
        name,
        content: format_frontmatter(&frontmatter, &body),
    }
}

/// Resolve the droid model: absent, empty, or `inherit` all mean `inherit`.
pub fn resolve_model(model: Option<&str>) -> &str {
    match model {
        Some(model) if !model.is_empty() && model != INHERIT_MODEL => model,
        _ => INHERIT_MODEL,
    }
}

/// Build the droid body before rewriting: capabilities section first, then
/// the original body, with a placeholder when both are empty.
fn agent_body(agent: &ClaudeAgent) -> String {
    let mut body = agent.body.trim().to_string();

    if let Some(capabilities) = agent.capabilities.as_ref().filter(|c| !c.is_empty()) {
        let bullets = capabilities
            .iter()
            .map(|c| format!("- {c}"))
            .collect::<Vec<_>>()
            .join("\n");
        body = format!("## Capabilities\n{bullets}\n\n{body}")
            .trim()
            .to_string();
    }

    if body.is_empty() {
        body = format!("Instructions converted from the {} agent.", agent.name);
    }

    body
}

//! Claude plugin loading
//!
//! Reads a plugin directory laid out the way Claude Code expects:
//!
//! ```text
//! my-plugin/
//!   .claude-plugin/plugin.json
//!   commands/**/*.md
//!   agents/**/*.md
//!   skills/<name>/SKILL.md
//! ```
//!
//! Missing component directories are not errors; they just contribute
//! nothing to the plugin.

mod components;
mod manifest;

pub use components::{load_agents, load_commands, load_skills};
pub use manifest::{ComponentDirs, MANIFEST_PATH, load_manifest, resolve_component_dirs};

use std::path::Path;

use crate::domain::ClaudePlugin;
use crate::error::{Result, plugin_not_found};

/// Load a Claude plugin from its root directory.
pub fn load_claude_plugin(root: &Path) -> Result<ClaudePlugin> {
    if !root.is_dir() {
        return Err(plugin_not_found(root.display().to_string()));
    }
    let root = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());

    let manifest = load_manifest(&root)?;
    let dirs = resolve_component_dirs(&root, &manifest)?;

    let commands = load_commands(&dirs.commands)?;
    let agents = load_agents(&dirs.agents)?;
    let skills = load_skills(&dirs.skills)?;

    tracing::info!(
        plugin = %manifest.name,
        root = %root.display(),
        commands = commands.len(),
        agents = agents.len(),
        skills = skills.len(),
        "loaded plugin"
    );

    Ok(ClaudePlugin {
        root,
        manifest,
        commands,
        agents,
        skills,
    })
}

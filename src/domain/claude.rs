//! Claude plugin types
//!
//! Constructed by [`crate::plugin::load_claude_plugin`] and never mutated
//! afterwards.

use std::path::PathBuf;

use serde::Deserialize;

/// Component path override in `plugin.json`: one path or a list of paths
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ComponentPaths {
    Single(String),
    Many(Vec<String>),
}

impl ComponentPaths {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            ComponentPaths::Single(path) => vec![path.clone()],
            ComponentPaths::Many(paths) => paths.clone(),
        }
    }
}

/// Contents of `.claude-plugin/plugin.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PluginManifest {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub commands: Option<ComponentPaths>,
    #[serde(default)]
    pub agents: Option<ComponentPaths>,
    #[serde(default)]
    pub skills: Option<ComponentPaths>,
}

/// Slash command from `commands/**/*.md`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaudeCommand {
    /// Possibly namespaced name, e.g. `workflows:plan`
    pub name: String,
    pub description: String,
    pub argument_hint: Option<String>,
    pub model: Option<String>,
    pub allowed_tools: Option<Vec<String>>,
    pub disable_model_invocation: Option<bool>,
    pub body: String,
    pub source_path: PathBuf,
}

/// Subagent definition from `agents/**/*.md`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaudeAgent {
    /// Free-form name; may contain spaces and mixed case
    pub name: String,
    pub description: Option<String>,
    pub capabilities: Option<Vec<String>>,
    /// Model id, or `inherit`
    pub model: Option<String>,
    pub body: String,
    pub source_path: PathBuf,
}

/// Skill directory containing a `SKILL.md`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaudeSkill {
    pub name: String,
    pub description: Option<String>,
    pub source_dir: PathBuf,
    pub skill_path: PathBuf,
}

/// A fully parsed Claude plugin
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaudePlugin {
    pub root: PathBuf,
    pub manifest: PluginManifest,
    pub commands: Vec<ClaudeCommand>,
    pub agents: Vec<ClaudeAgent>,
    pub skills: Vec<ClaudeSkill>,
}

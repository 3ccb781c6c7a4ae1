//! Conversion options
//!
//! These are accepted for parity with the other Claude converters. None of
//! them change what the Droid conversion emits today.

use serde::Deserialize;

/// Role scoping for converted agents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AgentMode {
    Primary,
    #[default]
    Subagent,
}

/// How tool permissions are derived for converted agents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PermissionMode {
    #[default]
    None,
    Broad,
    FromCommands,
}

/// Options for [`super::convert_claude_to_droid`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub agent_mode: AgentMode,
    pub infer_temperature: bool,
    pub permissions: PermissionMode,
}

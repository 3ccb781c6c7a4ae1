//! Merging flags, environment and config file into final settings

use std::path::PathBuf;

use crate::converter::{AgentMode, ConvertOptions, PermissionMode};
use crate::error::{DroidifyError, Result};

use super::file::DroidifyConfig;

/// Values given on the command line or through `DROIDIFY_*` variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub output: Option<PathBuf>,
    pub agent_mode: Option<AgentMode>,
    /// A flag, so only `true` overrides the config file
    pub infer_temperature: bool,
    pub permissions: Option<PermissionMode>,
}

/// Resolved settings for one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output: PathBuf,
    pub options: ConvertOptions,
}

/// Merge overrides over the config file over defaults.
///
/// `home` is the fallback output root; it is only required when neither
/// layer names an output.
pub fn resolve_settings(
    overrides: Overrides,
    config: DroidifyConfig,
    home: Option<PathBuf>,
) -> Result<Settings> {
    let output = overrides
        .output
        .or(config.output)
        .or(home)
        .ok_or(DroidifyError::HomeDirectoryUnavailable)?;

    let options = ConvertOptions {
        agent_mode: overrides
            .agent_mode
            .or(config.agent_mode)
            .unwrap_or_default(),
        infer_temperature: overrides.infer_temperature
            || config.infer_temperature.unwrap_or_default(),
        permissions: overrides
            .permissions
            .or(config.permissions)
            .unwrap_or_default(),
    };

    tracing::debug!(
        output = %output.display(),
        agent_mode = ?options.agent_mode,
        infer_temperature = options.infer_temperature,
        permissions = ?options.permissions,
        "resolved settings"
    );

    Ok(Settings { output, options })
}

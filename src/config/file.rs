//! Config file (`droidify.yaml`) handling

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::converter::{AgentMode, PermissionMode};
use crate::error::{Result, config_not_found, config_parse_failed, config_read_failed};

/// Config file looked up in the plugin root when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "droidify.yaml";

/// Config file contents. Every key is optional.
///
/// ```yaml
/// output: ./out
/// agent-mode: primary
/// infer-temperature: true
/// permissions: from-commands
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct DroidifyConfig {
    pub output: Option<PathBuf>,
    pub agent_mode: Option<AgentMode>,
    pub infer_temperature: Option<bool>,
    pub permissions: Option<PermissionMode>,
}

impl DroidifyConfig {
    /// Parse config from YAML. `path` is only used for error reporting.
    pub fn from_yaml(yaml: &str, path: &Path) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| config_parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Read a config file. A relative `output` is resolved against the
    /// file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config_not_found(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| config_read_failed(path.display().to_string(), e.to_string()))?;
        let mut config = Self::from_yaml(&content, path)?;

        if let Some(dir) = path.parent() {
            config.output = config
                .output
                .map(|output| if output.is_relative() { dir.join(output) } else { output });
        }

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Load the config for a conversion.
    ///
    /// An explicit path must exist. Without one, `droidify.yaml` in the
    /// plugin root is used when present, and defaults otherwise.
    pub fn load(explicit: Option<&Path>, plugin_root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let implicit = plugin_root.join(CONFIG_FILE_NAME);
        if implicit.is_file() {
            Self::from_file(&implicit)
        } else {
            Ok(Self::default())
        }
    }
}

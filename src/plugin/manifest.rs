//! Plugin manifest (`.claude-plugin/plugin.json`) and component directories

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::domain::PluginManifest;
use crate::domain::claude::ComponentPaths;
use crate::error::{Result, file_read_failed, manifest_parse_failed};

/// Manifest location relative to the plugin root
pub const MANIFEST_PATH: &str = ".claude-plugin/plugin.json";

/// Directories that hold each kind of component
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentDirs {
    pub commands: Vec<PathBuf>,
    pub agents: Vec<PathBuf>,
    pub skills: Vec<PathBuf>,
}

/// Read the plugin manifest.
///
/// A missing manifest is not an error: the plugin is named after its root
/// directory and has no version.
pub fn load_manifest(root: &Path) -> Result<PluginManifest> {
    let path = root.join(MANIFEST_PATH);
    if !path.exists() {
        let name = root
            .file_name()
            .map_or_else(|| "plugin".to_string(), |n| n.to_string_lossy().to_string());
        tracing::debug!(
            path = %path.display(),
            name = %name,
            "no plugin manifest, using directory name"
        );
        return Ok(PluginManifest {
            name,
            ..Default::default()
        });
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?;
    serde_json::from_str(&content)
        .map_err(|e| manifest_parse_failed(path.display().to_string(), e.to_string()))
}

/// Resolve component directories: the conventional `commands/`, `agents/`
/// and `skills/` plus any extra paths declared in the manifest.
///
/// Declared paths must be relative and stay inside the plugin root.
/// Duplicates are dropped, keeping first occurrence order.
pub fn resolve_component_dirs(root: &Path, manifest: &PluginManifest) -> Result<ComponentDirs> {
    Ok(ComponentDirs {
        commands: collect_dirs(root, "commands", manifest.commands.as_ref())?,
        agents: collect_dirs(root, "agents", manifest.agents.as_ref())?,
        skills: collect_dirs(root, "skills", manifest.skills.as_ref())?,
    })
}

fn collect_dirs(
    root: &Path,
    default_dir: &str,
    declared: Option<&ComponentPaths>,
) -> Result<Vec<PathBuf>> {
    let mut dirs = vec![root.join(default_dir)];
    if let Some(declared) = declared {
        for raw in declared.to_vec() {
            dirs.push(resolve_declared_path(root, &raw)?);
        }
    }

    let mut seen = HashSet::new();
    dirs.retain(|dir| seen.insert(dir.clone()));
    Ok(dirs)
}

fn resolve_declared_path(root: &Path, raw: &str) -> Result<PathBuf> {
    let manifest_path = root.join(MANIFEST_PATH).display().to_string();
    let trimmed = raw.trim();
    let relative = Path::new(trimmed.strip_prefix("./").unwrap_or(trimmed));

    if trimmed.is_empty() || relative.as_os_str().is_empty() {
        return Err(manifest_parse_failed(manifest_path, "component path is empty"));
    }
    if relative.is_absolute()
        || relative
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)))
    {
        return Err(manifest_parse_failed(
            manifest_path,
            format!("component path must stay inside the plugin root: {trimmed}"),
        ));
    }

    Ok(root.join(relative))
}

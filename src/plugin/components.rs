//! Command, agent and skill discovery

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::common::naming::NAMESPACE_SEPARATOR;
use crate::domain::{ClaudeAgent, ClaudeCommand, ClaudeSkill};
use crate::error::{Result, file_read_failed};
use crate::universal::{Frontmatter, get_bool, get_str, get_str_list, parse_frontmatter};

const SKILL_FILE: &str = "SKILL.md";

/// Load every command under the given directories.
///
/// Commands in subdirectories are namespaced by their relative path:
/// `commands/workflows/plan.md` is `workflows:plan` unless its frontmatter
/// sets `name`.
pub fn load_commands(dirs: &[PathBuf]) -> Result<Vec<ClaudeCommand>> {
    let mut commands = Vec::new();

    for dir in dirs {
        for path in markdown_files(dir)? {
            let fm = read_frontmatter(&path)?;
            let name = get_str(&fm.data, "name").unwrap_or_else(|| namespaced_name(dir, &path));
            tracing::debug!(name = %name, path = %path.display(), "loaded command");

            commands.push(ClaudeCommand {
                name,
                description: get_str(&fm.data, "description").unwrap_or_default(),
                argument_hint: get_str(&fm.data, "argument-hint"),
                model: get_str(&fm.data, "model"),
                allowed_tools: get_str_list(&fm.data, "allowed-tools"),
                disable_model_invocation: get_bool(&fm.data, "disable-model-invocation"),
                body: fm.body,
                source_path: path,
            });
        }
    }

    Ok(commands)
}

/// Load every agent under the given directories.
pub fn load_agents(dirs: &[PathBuf]) -> Result<Vec<ClaudeAgent>> {
    let mut agents = Vec::new();

    for dir in dirs {
        for path in markdown_files(dir)? {
            let fm = read_frontmatter(&path)?;
            let name = get_str(&fm.data, "name").unwrap_or_else(|| file_stem(&path));
            tracing::debug!(name = %name, path = %path.display(), "loaded agent");

            agents.push(ClaudeAgent {
                name,
                description: get_str(&fm.data, "description"),
                capabilities: get_str_list(&fm.data, "capabilities"),
                model: get_str(&fm.data, "model"),
                body: fm.body,
                source_path: path,
            });
        }
    }

    Ok(agents)
}

/// Load every skill directory (an immediate subdirectory holding `SKILL.md`).
pub fn load_skills(dirs: &[PathBuf]) -> Result<Vec<ClaudeSkill>> {
    let mut skills = Vec::new();

    for dir in dirs {
        if !dir.is_dir() {
            continue;
        }

        let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
            .map_err(|e| file_read_failed(dir.display().to_string(), e.to_string()))?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        entries.sort();

        for source_dir in entries {
            let skill_path = source_dir.join(SKILL_FILE);
            if !skill_path.is_file() {
                tracing::debug!(path = %source_dir.display(), "no SKILL.md, skipping");
                continue;
            }

            let fm = read_frontmatter(&skill_path)?;
            let name = get_str(&fm.data, "name").unwrap_or_else(|| file_name(&source_dir));
            tracing::debug!(name = %name, path = %source_dir.display(), "loaded skill");

            skills.push(ClaudeSkill {
                name,
                description: get_str(&fm.data, "description"),
                source_dir,
                skill_path,
            });
        }
    }

    Ok(skills)
}

/// All `*.md` files below `dir`, sorted by path. A missing directory is empty.
fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        tracing::debug!(path = %dir.display(), "component directory does not exist");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry =
            entry.map_err(|e| file_read_failed(dir.display().to_string(), e.to_string()))?;
        let is_markdown = entry.path().extension().is_some_and(|ext| ext == "md");
        if entry.file_type().is_file() && is_markdown {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

fn read_frontmatter(path: &Path) -> Result<Frontmatter> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?;
    parse_frontmatter(&content, path)
}

/// `commands/workflows/plan.md` relative to `commands/` is `workflows:plan`.
fn namespaced_name(dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(dir).unwrap_or(path).with_extension("");
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect::<Vec<_>>()
        .join(NAMESPACE_SEPARATOR.to_string().as_str())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

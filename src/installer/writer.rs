//! Persisting a converted bundle
//!
//! Each command and droid becomes `<name>.md` with a trailing newline.
//! Each skill directory is copied recursively. Subdirectories are only
//! created when there is something to put in them. Skill names must be a
//! single path segment so a copy never lands outside `skills/`.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::common::fs::{copy_dir_recursive, ensure_dir, write_text};
use crate::domain::DroidBundle;
use crate::error::{Result, file_not_found, invalid_skill_name};

use super::paths::{DroidPaths, resolve_droid_paths};

/// What a write produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub root: PathBuf,
    pub command_files: Vec<PathBuf>,
    pub droid_files: Vec<PathBuf>,
    pub skill_dirs: Vec<PathBuf>,
}

impl WriteReport {
    pub fn total(&self) -> usize {
        self.command_files.len() + self.droid_files.len() + self.skill_dirs.len()
    }
}

/// Target path and content of every file a write would create, in order
///
/// Skill directories are not included since their content is copied as-is.
pub fn planned_files(output_root: &Path, bundle: &DroidBundle) -> Vec<(PathBuf, String)> {
    let paths = resolve_droid_paths(output_root);
    let commands = bundle
        .commands
        .iter()
        .map(|c| (markdown_path(&paths.commands_dir, &c.name), c.content.clone()));
    let droids = bundle
        .droids
        .iter()
        .map(|d| (markdown_path(&paths.droids_dir, &d.name), d.content.clone()));
    commands.chain(droids).collect()
}

/// Reject skill names that are not exactly one normal path segment.
///
/// Absolute names, `..`, `.` and nested names would put the copy somewhere
/// other than `skills/<name>`.
pub fn check_skill_names(bundle: &DroidBundle) -> Result<()> {
    for skill in &bundle.skill_dirs {
        let mut components = Path::new(&skill.name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => return Err(invalid_skill_name(skill.name.as_str())),
        }
    }
    Ok(())
}

/// Write a bundle under `output_root` (see [`resolve_droid_paths`]).
///
/// Nothing is written when a skill name fails [`check_skill_names`].
/// Name collisions overwrite the earlier file and are logged.
pub fn write_droid_bundle(output_root: &Path, bundle: &DroidBundle) -> Result<WriteReport> {
    check_skill_names(bundle)?;

    let paths = resolve_droid_paths(output_root);
    ensure_dir(&paths.root)?;

    let mut report = WriteReport {
        root: paths.root.clone(),
        ..Default::default()
    };

    if !bundle.commands.is_empty() {
        ensure_dir(&paths.commands_dir)?;
        let entries = bundle.commands.iter().map(|c| (c.name.as_str(), c.content.as_str()));
        report.command_files = write_markdown_files(&paths.commands_dir, entries, "command")?;
    }

    if !bundle.droids.is_empty() {
        ensure_dir(&paths.droids_dir)?;
        let entries = bundle.droids.iter().map(|d| (d.name.as_str(), d.content.as_str()));
        report.droid_files = write_markdown_files(&paths.droids_dir, entries, "droid")?;
    }

    if !bundle.skill_dirs.is_empty() {
        report.skill_dirs = copy_skills(&paths, bundle)?;
    }

    tracing::info!(
        root = %paths.root.display(),
        commands = report.command_files.len(),
        droids = report.droid_files.len(),
        skills = report.skill_dirs.len(),
        total = report.total(),
        "wrote droid bundle"
    );

    Ok(report)
}

fn write_markdown_files<'a>(
    dir: &Path,
    entries: impl Iterator<Item = (&'a str, &'a str)>,
    kind: &str,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    let mut seen = HashSet::new();

    for (name, content) in entries {
        if !seen.insert(name) {
            tracing::warn!(name = %name, kind, "duplicate name, overwriting earlier file");
        }
        let target = markdown_path(dir, name);
        write_text(&target, &format!("{content}\n"))?;
        tracing::debug!(path = %target.display(), kind, "wrote file");
        written.push(target);
    }

    Ok(written)
}

fn copy_skills(paths: &DroidPaths, bundle: &DroidBundle) -> Result<Vec<PathBuf>> {
    ensure_dir(&paths.skills_dir)?;
    let mut copied = Vec::new();

    for skill in &bundle.skill_dirs {
        if !skill.source_dir.is_dir() {
            return Err(file_not_found(skill.source_dir.display().to_string()));
        }
        let target = paths.skills_dir.join(&skill.name);
        let files = copy_dir_recursive(&skill.source_dir, &target)?;
        tracing::debug!(name = %skill.name, files, "copied skill");
        copied.push(target);
    }

    Ok(copied)
}

fn markdown_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.md"))
}

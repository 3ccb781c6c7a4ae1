//! Factory Droid bundle types
//!
//! Produced by [`crate::converter::convert_claude_to_droid`] and consumed by
//! [`crate::installer::write_droid_bundle`].

use std::path::PathBuf;

/// A command file, written as `commands/<name>.md`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroidCommandFile {
    pub name: String,
    pub content: String,
}

/// A droid file, written as `droids/<name>.md`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroidAgentFile {
    pub name: String,
    pub content: String,
}

/// A skill directory copied verbatim to `skills/<name>/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroidSkillDir {
    pub name: String,
    pub source_dir: PathBuf,
}

/// Everything a conversion produces, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DroidBundle {
    pub commands: Vec<DroidCommandFile>,
    pub droids: Vec<DroidAgentFile>,
    pub skill_dirs: Vec<DroidSkillDir>,
}

impl DroidBundle {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.droids.is_empty() && self.skill_dirs.is_empty()
    }
}

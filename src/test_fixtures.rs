//! Test fixtures shared by unit tests.
//!
//! ```ignore
//! use crate::test_fixtures::{fixture_plugin, parse_output, write_file};
//!
//! #[test]
//! fn my_test() {
//!     // In-memory plugin with one command, one agent and one skill
//!     let plugin = fixture_plugin();
//!
//!     // Files on disk, parent directories created on the way
//!     write_file(temp.path(), "commands/plan.md", "---\ndescription: Plan\n---\nBody");
//! }
//! ```

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use crate::domain::{ClaudeAgent, ClaudeCommand, ClaudePlugin, ClaudeSkill, PluginManifest};
use crate::universal::{Frontmatter, parse_frontmatter};

/// In-memory plugin rooted at `/tmp/plugin`.
///
/// Contains the `workflows:plan` command, the `Security Reviewer` agent and
/// the `existing-skill` skill.
#[must_use]
pub fn fixture_plugin() -> ClaudePlugin {
    let root = PathBuf::from("/tmp/plugin");

    ClaudePlugin {
        manifest: PluginManifest {
            name: "fixture".to_string(),
            version: Some("1.0.0".to_string()),
            ..Default::default()
        },
        agents: vec![ClaudeAgent {
            name: "Security Reviewer".to_string(),
            description: Some("Security-focused agent".to_string()),
            capabilities: Some(vec!["Threat modeling".to_string(), "OWASP".to_string()]),
            model: Some("claude-sonnet-4-20250514".to_string()),
            body: "Focus on vulnerabilities.".to_string(),
            source_path: root.join("agents/security-reviewer.md"),
        }],
        commands: vec![ClaudeCommand {
            name: "workflows:plan".to_string(),
            description: "Planning command".to_string(),
            argument_hint: Some("[FOCUS]".to_string()),
            model: Some("inherit".to_string()),
            allowed_tools: Some(vec!["Read".to_string()]),
            disable_model_invocation: None,
            body: "Plan the work.".to_string(),
            source_path: root.join("commands/workflows/plan.md"),
        }],
        skills: vec![ClaudeSkill {
            name: "existing-skill".to_string(),
            description: Some("Existing skill".to_string()),
            source_dir: root.join("skills/existing-skill"),
            skill_path: root.join("skills/existing-skill/SKILL.md"),
        }],
        root,
    }
}

/// Parse converted output back into frontmatter and body.
///
/// # Panics
///
/// Panics if the output has invalid frontmatter.
#[must_use]
pub fn parse_output(content: &str) -> Frontmatter {
    parse_frontmatter(content, Path::new("output.md")).expect("Converted output should parse")
}

/// Write `content` to `root/relative`, creating parent directories.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&path, content).expect("Failed to write fixture file");
}

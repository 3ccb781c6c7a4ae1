//! Common test utilities for droidify integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Environment variables read by the binary; cleared so the host cannot leak in
const DROIDIFY_ENV: &[&str] = &[
    "DROIDIFY_OUTPUT",
    "DROIDIFY_AGENT_MODE",
    "DROIDIFY_PERMISSIONS",
    "DROIDIFY_CONFIG",
    "RUST_LOG",
];

/// A temporary directory holding a plugin and an output root
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write a small plugin modelled on compound-engineering under `plugin/`
    ///
    /// - commands: `workflows:plan`, `workflows:work`, `changelog`
    /// - agents: `security-sentinel`, `repo-research-analyst`
    /// - skills: `existing-skill` (with a nested script)
    pub fn create_fixture_plugin(&self) -> PathBuf {
        self.write_file(
            "plugin/.claude-plugin/plugin.json",
            r#"{"name": "compound-engineering", "version": "1.0.0"}"#,
        );
        self.write_file(
            "plugin/commands/workflows/plan.md",
            "---\n\
             description: Create a plan\n\
             argument-hint: \"[feature description]\"\n\
             ---\n\
             \n\
             # Plan\n\
             \n\
             - Task repo-research-analyst(feature_description)\n\
             \n\
             When done, run /workflows:work. Ask @agent-security-sentinel for a review.\n\
             Write notes to /tmp/plan.md, never /dev/null.\n",
        );
        self.write_file(
            "plugin/commands/workflows/work.md",
            "---\n\
             description: Execute the plan\n\
             disable-model-invocation: true\n\
             ---\n\
             \n\
             Follow the plan from /workflows:plan step by step.\n",
        );
        self.write_file(
            "plugin/commands/changelog.md",
            "---\n\
             description: Write a changelog\n\
             disable-model-invocation: false\n\
             ---\n\
             \n\
             Summarize recent changes.\n",
        );
        self.write_file(
            "plugin/agents/review/security-sentinel.md",
            "---\n\
             name: security-sentinel\n\
             description: Audits code with bash and grep\n\
             capabilities:\n\
             \x20 - Threat modeling\n\
             \x20 - OWASP\n\
             model: inherit\n\
             ---\n\
             \n\
             Focus on vulnerabilities.\n",
        );
        self.write_file(
            "plugin/agents/research/repo-research-analyst.md",
            "---\n\
             description: Researches the repository\n\
             model: claude-sonnet-4-20250514\n\
             ---\n\
             \n\
             Explain the conventions you find.\n",
        );
        self.write_file(
            "plugin/skills/existing-skill/SKILL.md",
            "---\n\
             name: existing-skill\n\
             description: An existing skill\n\
             ---\n\
             \n\
             Use the script.\n",
        );
        self.write_file(
            "plugin/skills/existing-skill/scripts/run.sh",
            "#!/bin/sh\necho run\n",
        );
        self.path.join("plugin")
    }
}

/// The droidify binary with `HOME` pointed into the workspace
#[allow(deprecated)]
pub fn droidify_cmd(workspace: &Path) -> Command {
    let mut cmd = Command::cargo_bin("droidify").expect("droidify binary should be built");
    for var in DROIDIFY_ENV {
        cmd.env_remove(var);
    }
    cmd.env("HOME", workspace.join("home"));
    cmd.env("NO_COLOR", "1");
    cmd
}

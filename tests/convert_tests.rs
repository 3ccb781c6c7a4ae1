//! End-to-end tests for `droidify convert` using the real binary

mod common;

use std::path::Path;

use droidify::universal::{Frontmatter, get_bool, get_str, get_str_list, parse_frontmatter};
use predicates::prelude::*;

use common::{TestWorkspace, droidify_cmd};

fn parse(content: &str) -> Frontmatter {
    parse_frontmatter(content, Path::new("output.md")).expect("Output should parse")
}

#[test]
fn test_convert_writes_factory_layout() {
    let workspace = TestWorkspace::new();
    let plugin = workspace.create_fixture_plugin();

    droidify_cmd(&workspace.path)
        .arg("convert")
        .arg(&plugin)
        .arg("--output")
        .arg(workspace.path.join("project"))
        .assert()
        .success()
        .stdout(predicate::str::contains("compound-engineering"))
        .stdout(predicate::str::contains("Commands: 3"))
        .stdout(predicate::str::contains("Droids: 2"))
        .stdout(predicate::str::contains("Skills: 1"));

    for file in [
        "project/.factory/commands/plan.md",
        "project/.factory/commands/work.md",
        "project/.factory/commands/changelog.md",
        "project/.factory/droids/security-sentinel.md",
        "project/.factory/droids/repo-research-analyst.md",
        "project/.factory/skills/existing-skill/SKILL.md",
        "project/.factory/skills/existing-skill/scripts/run.sh",
    ] {
        assert!(workspace.file_exists(file), "{file} should exist");
    }
}

#[test]
fn test_convert_command_content() {
    let workspace = TestWorkspace::new();
    let plugin = workspace.create_fixture_plugin();

    droidify_cmd(&workspace.path)
        .arg("convert")
        .arg(&plugin)
        .arg("-o")
        .arg(workspace.path.join("project"))
        .assert()
        .success();

    let content = workspace.read_file("project/.factory/commands/plan.md");
    assert!(content.ends_with("never /dev/null.\n"));
    assert!(!content.ends_with("\n\n"));

    let parsed = parse(&content);
    assert_eq!(
        get_str(&parsed.data, "description").as_deref(),
        Some("Create a plan")
    );
    assert_eq!(
        get_str(&parsed.data, "argument-hint").as_deref(),
        Some("[feature description]")
    );
    assert!(!parsed.data.contains_key("disable-model-invocation"));
    assert!(
        parsed
            .body
            .contains("- Task repo-research-analyst: feature_description")
    );
    assert!(parsed.body.contains("When done, run /work."));
    assert!(parsed.body.contains("Ask the security-sentinel droid for a review."));
    assert!(parsed.body.contains("Write notes to /tmp/plan.md, never /dev/null."));
    assert!(!parsed.body.contains("@agent-"));

    let work = parse(&workspace.read_file("project/.factory/commands/work.md"));
    assert_eq!(get_bool(&work.data, "disable-model-invocation"), Some(true));
    assert!(work.body.contains("Follow the plan from /plan step by step."));

    let changelog = parse(&workspace.read_file("project/.factory/commands/changelog.md"));
    assert!(!changelog.data.contains_key("disable-model-invocation"));
}

#[test]
fn test_convert_droid_content() {
    let workspace = TestWorkspace::new();
    let plugin = workspace.create_fixture_plugin();

    droidify_cmd(&workspace.path)
        .arg("convert")
        .arg(&plugin)
        .arg("-o")
        .arg(workspace.path.join("project"))
        .assert()
        .success();

    let sentinel = parse(&workspace.read_file("project/.factory/droids/security-sentinel.md"));
    assert_eq!(
        get_str(&sentinel.data, "name").as_deref(),
        Some("security-sentinel")
    );
    assert_eq!(get_str(&sentinel.data, "model").as_deref(), Some("inherit"));
    assert_eq!(
        get_str_list(&sentinel.data, "tools"),
        Some(vec!["Execute".to_string(), "Grep".to_string()])
    );
    assert_eq!(
        sentinel.body,
        "## Capabilities\n- Threat modeling\n- OWASP\n\nFocus on vulnerabilities."
    );

    let analyst = parse(&workspace.read_file("project/.factory/droids/repo-research-analyst.md"));
    assert_eq!(
        get_str(&analyst.data, "model").as_deref(),
        Some("claude-sonnet-4-20250514")
    );
    assert!(!analyst.data.contains_key("tools"));
}

#[test]
fn test_convert_into_factory_dir_directly() {
    let workspace = TestWorkspace::new();
    let plugin = workspace.create_fixture_plugin();

    droidify_cmd(&workspace.path)
        .arg("convert")
        .arg(&plugin)
        .arg("-o")
        .arg(workspace.path.join("home/.factory"))
        .assert()
        .success();

    assert!(workspace.file_exists("home/.factory/commands/plan.md"));
    assert!(!workspace.file_exists("home/.factory/.factory"));
}

#[test]
fn test_convert_defaults_to_home() {
    let workspace = TestWorkspace::new();
    let plugin = workspace.create_fixture_plugin();

    droidify_cmd(&workspace.path)
        .arg("convert")
        .arg(&plugin)
        .assert()
        .success();

    assert!(workspace.file_exists("home/.factory/commands/plan.md"));
    assert!(workspace.file_exists("home/.factory/droids/security-sentinel.md"));
}

#[test]
fn test_convert_output_from_env() {
    let workspace = TestWorkspace::new();
    let plugin = workspace.create_fixture_plugin();

    droidify_cmd(&workspace.path)
        .env("DROIDIFY_OUTPUT", workspace.path.join("from-env"))
        .arg("convert")
        .arg(&plugin)
        .assert()
        .success();

    assert!(workspace.file_exists("from-env/.factory/commands/plan.md"));
}

#[test]
fn test_convert_flag_overrides_env() {
    let workspace = TestWorkspace::new();
    let plugin = workspace.create_fixture_plugin();

    droidify_cmd(&workspace.path)
        .env("DROIDIFY_OUTPUT", workspace.path.join("from-env"))
        .arg("convert")
        .arg(&plugin)
        .arg("-o")
        .arg(workspace.path.join("from-flag"))
        .assert()
        .success();

    assert!(workspace.file_exists("from-flag/.factory/commands/plan.md"));
    assert!(!workspace.file_exists("from-env"));
}

#[test]
fn test_convert_config_in_plugin_root() {
    let workspace = TestWorkspace::new();
    let plugin = workspace.create_fixture_plugin();
    workspace.write_file(
        "plugin/droidify.yaml",
        "output: ../from-config\nagent-mode: primary\npermissions: broad\n",
    );

    droidify_cmd(&workspace.path)
        .arg("convert")
        .arg(&plugin)
        .assert()
        .success();

    assert!(workspace.file_exists("from-config/.factory/commands/plan.md"));
}

#[test]
fn test_convert_explicit_config() {
    let workspace = TestWorkspace::new();
    let plugin = workspace.create_fixture_plugin();
    workspace.write_file("settings/custom.yaml", "output: out\n");

    droidify_cmd(&workspace.path)
        .arg("convert")
        .arg(&plugin)
        .arg("--config")
        .arg(workspace.path.join("settings/custom.yaml"))
        .assert()
        .success();

    assert!(workspace.file_exists("settings/out/.factory/commands/plan.md"));
}

#[test]
fn test_convert_missing_config_fails() {
    let workspace = TestWorkspace::new();
    let plugin = workspace.create_fixture_plugin();

    droidify_cmd(&workspace.path)
        .arg("convert")
        .arg(&plugin)
        .arg("--config")
        .arg(workspace.path.join("missing.yaml"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_convert_unknown_config_key_fails() {
    let workspace = TestWorkspace::new();
    let plugin = workspace.create_fixture_plugin();
    workspace.write_file("plugin/droidify.yaml", "target: opencode\n");

    droidify_cmd(&workspace.path)
        .arg("convert")
        .arg(&plugin)
        .arg("-o")
        .arg(workspace.path.join("project"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));

    assert!(!workspace.file_exists("project/.factory"));
}

#[test]
fn test_convert_dry_run_writes_nothing() {
    let workspace = TestWorkspace::new();
    let plugin = workspace.create_fixture_plugin();

    droidify_cmd(&workspace.path)
        .arg("convert")
        .arg(&plugin)
        .arg("-o")
        .arg(workspace.path.join("project"))
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("commands/plan.md"))
        .stdout(predicate::str::contains("droids/security-sentinel.md"))
        .stdout(predicate::str::contains("skills/existing-skill"))
        .stdout(predicate::str::contains("When done, run /work."));

    assert!(!workspace.file_exists("project"));
}

#[test]
fn test_convert_quiet_prints_nothing() {
    let workspace = TestWorkspace::new();
    let plugin = workspace.create_fixture_plugin();

    droidify_cmd(&workspace.path)
        .arg("convert")
        .arg(&plugin)
        .arg("-o")
        .arg(workspace.path.join("project"))
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(workspace.file_exists("project/.factory/commands/plan.md"));
}

#[test]
fn test_convert_missing_plugin_fails() {
    let workspace = TestWorkspace::new();

    droidify_cmd(&workspace.path)
        .arg("convert")
        .arg(workspace.path.join("no-such-plugin"))
        .arg("-o")
        .arg(workspace.path.join("project"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Plugin not found"));
}

#[test]
fn test_convert_invalid_frontmatter_fails() {
    let workspace = TestWorkspace::new();
    let plugin = workspace.create_fixture_plugin();
    workspace.write_file("plugin/commands/broken.md", "---\ndescription: [oops\n---\nBody");

    droidify_cmd(&workspace.path)
        .arg("convert")
        .arg(&plugin)
        .arg("-o")
        .arg(workspace.path.join("project"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid frontmatter"));
}

#[test]
fn test_convert_manifest_extra_component_dirs() {
    let workspace = TestWorkspace::new();
    let plugin = workspace.create_fixture_plugin();
    workspace.write_file(
        "plugin/.claude-plugin/plugin.json",
        r#"{"name": "compound-engineering", "commands": ["./extra"]}"#,
    );
    workspace.write_file(
        "plugin/extra/deploy.md",
        "---\ndescription: Deploy\n---\nShip it.",
    );

    droidify_cmd(&workspace.path)
        .arg("convert")
        .arg(&plugin)
        .arg("-o")
        .arg(workspace.path.join("project"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands: 4"));

    assert!(workspace.file_exists("project/.factory/commands/deploy.md"));
    assert!(workspace.file_exists("project/.factory/commands/plan.md"));
}

#[test]
fn test_convert_plugin_without_components() {
    let workspace = TestWorkspace::new();
    workspace.write_file(
        "empty-plugin/.claude-plugin/plugin.json",
        r#"{"name": "empty"}"#,
    );

    droidify_cmd(&workspace.path)
        .arg("convert")
        .arg(workspace.path.join("empty-plugin"))
        .arg("-o")
        .arg(workspace.path.join("project"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands: 0"));

    assert!(workspace.file_exists("project"));
    assert!(!workspace.file_exists("project/.factory/commands"));
}

#[test]
fn test_convert_rejects_skill_name_outside_skills_dir() {
    let workspace = TestWorkspace::new();
    let plugin = workspace.create_fixture_plugin();
    workspace.write_file(
        "plugin/skills/zz-evil/SKILL.md",
        "---\nname: ../../../escaped\n---\nEvil.",
    );

    droidify_cmd(&workspace.path)
        .arg("convert")
        .arg(&plugin)
        .arg("-o")
        .arg(workspace.path.join("project"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid skill name"));

    assert!(!workspace.file_exists("escaped"));
    assert!(!workspace.file_exists("project/.factory"));
}

#[test]
fn test_convert_reads_frontmatter_after_bom() {
    let workspace = TestWorkspace::new();
    let plugin = workspace.create_fixture_plugin();
    workspace.write_file(
        "plugin/commands/bom.md",
        "\u{feff}---\ndescription: With BOM\n---\n\nBody after BOM.",
    );

    droidify_cmd(&workspace.path)
        .arg("convert")
        .arg(&plugin)
        .arg("-o")
        .arg(workspace.path.join("project"))
        .assert()
        .success();

    let parsed = parse(&workspace.read_file("project/.factory/commands/bom.md"));
    assert_eq!(
        get_str(&parsed.data, "description").as_deref(),
        Some("With BOM")
    );
    assert_eq!(parsed.body, "Body after BOM.");
}

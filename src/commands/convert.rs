//! Convert command implementation
//!
//! 1. Load the Claude plugin
//! 2. Load config and merge it with flags and environment
//! 3. Convert to a Droid bundle
//! 4. Write the bundle, or print it for `--dry-run`

use std::io::Write;
use std::path::Path;

use console::Style;

use crate::cli::ConvertArgs;
use crate::config::{DroidifyConfig, resolve_settings};
use crate::converter::convert_claude_to_droid;
use crate::domain::{ClaudePlugin, DroidBundle};
use crate::error::Result;
use crate::installer::{
    WriteReport, check_skill_names, planned_files, resolve_droid_paths, write_droid_bundle,
};
use crate::plugin::load_claude_plugin;

/// Run convert command
pub fn run(args: ConvertArgs, quiet: bool) -> Result<()> {
    let plugin = load_claude_plugin(&args.plugin_dir)?;
    let config = DroidifyConfig::load(args.config.as_deref(), &plugin.root)?;
    let settings = resolve_settings(args.overrides(), config, dirs::home_dir())?;

    let bundle = convert_claude_to_droid(&plugin, &settings.options);
    if bundle.is_empty() {
        tracing::warn!(
            plugin = %plugin.manifest.name,
            "plugin has no commands, agents or skills"
        );
    }

    if args.dry_run {
        check_skill_names(&bundle)?;
        return print_dry_run(&mut std::io::stdout().lock(), &settings.output, &bundle);
    }

    let report = write_droid_bundle(&settings.output, &bundle)?;
    if !quiet {
        print_summary(&plugin, &report);
    }

    Ok(())
}

/// Print every file a write would produce, followed by the skills it would copy
fn print_dry_run(out: &mut impl Write, output_root: &Path, bundle: &DroidBundle) -> Result<()> {
    let header = Style::new().bold().cyan();

    for (path, content) in planned_files(output_root, bundle) {
        writeln!(out, "{}", header.apply_to(format!("==> {}", path.display())))?;
        writeln!(out, "{content}")?;
        writeln!(out)?;
    }

    let skills_dir = resolve_droid_paths(output_root).skills_dir;
    for skill in &bundle.skill_dirs {
        writeln!(
            out,
            "{} (copied from {})",
            header.apply_to(format!("==> {}", skills_dir.join(&skill.name).display())),
            skill.source_dir.display()
        )?;
    }

    Ok(())
}

fn print_summary(plugin: &ClaudePlugin, report: &WriteReport) {
    println!(
        "Converted {} to {}",
        Style::new().bold().yellow().apply_to(&plugin.manifest.name),
        Style::new().bold().apply_to(report.root.display())
    );
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Commands:"),
        report.command_files.len()
    );
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Droids:"),
        report.droid_files.len()
    );
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Skills:"),
        report.skill_dirs.len()
    );
}

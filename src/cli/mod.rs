//! CLI definitions using clap derive API
//!
//! Argument types live in one submodule per command:
//! - convert: Convert command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod convert;

pub use completions::CompletionsArgs;
pub use convert::ConvertArgs;

/// droidify - Claude plugin to Factory Droid converter
#[derive(Parser, Debug)]
#[command(
    name = "droidify",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Convert Claude Code plugins into Factory Droid bundles",
    long_about = "droidify converts a Claude Code plugin (commands, agents, skills) into a \
                  Factory Droid bundle, rewriting slash commands, Task calls and agent \
                  mentions so the converted content keeps working.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  droidify convert ./my-plugin                 \x1b[90m# Write to ~/.factory\x1b[0m\n   \
                  droidify convert ./my-plugin -o .            \x1b[90m# Write to ./.factory\x1b[0m\n   \
                  droidify convert ./my-plugin -o ~/.factory   \x1b[90m# Write into an existing .factory\x1b[0m\n   \
                  droidify convert ./my-plugin --dry-run       \x1b[90m# Print what would be written\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Suppress the summary printed after converting
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a Claude plugin into a Droid bundle
    Convert(ConvertArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

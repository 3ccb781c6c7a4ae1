use std::path::PathBuf;

use clap::Parser;

use crate::config::Overrides;
use crate::converter::{AgentMode, PermissionMode};

/// Arguments for the convert command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Convert into ~/.factory:\n    droidify convert ./compound-engineering\n\n\
                   Convert into a project:\n    droidify convert ./compound-engineering --output ./my-project\n\n\
                   Preview without writing:\n    droidify convert ./compound-engineering --dry-run\n\n\
                   Use a config file:\n    droidify convert ./compound-engineering --config droidify.yaml")]
pub struct ConvertArgs {
    /// Claude plugin directory (the one containing .claude-plugin/)
    #[arg(value_name = "PLUGIN_DIR")]
    pub plugin_dir: PathBuf,

    /// Output root; files go to <DIR>/.factory unless DIR already is a .factory directory
    /// [default: home directory]
    #[arg(long, short = 'o', value_name = "DIR", env = "DROIDIFY_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Role of converted agents
    #[arg(long, value_enum, env = "DROIDIFY_AGENT_MODE")]
    pub agent_mode: Option<AgentMode>,

    /// Infer a sampling temperature for converted agents
    #[arg(long)]
    pub infer_temperature: bool,

    /// How tool permissions are derived
    #[arg(long, value_enum, env = "DROIDIFY_PERMISSIONS")]
    pub permissions: Option<PermissionMode>,

    /// Print the files that would be written without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Config file (defaults to droidify.yaml in the plugin directory)
    #[arg(long, short = 'c', value_name = "FILE", env = "DROIDIFY_CONFIG")]
    pub config: Option<PathBuf>,
}

impl ConvertArgs {
    /// Values given on the command line or in the environment
    pub fn overrides(&self) -> Overrides {
        Overrides {
            output: self.output.clone(),
            agent_mode: self.agent_mode,
            infer_temperature: self.infer_temperature,
            permissions: self.permissions,
        }
    }
}

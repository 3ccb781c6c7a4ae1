//! Error types and handling for droidify
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped by error domain:
//! - [`plugin`]: Source plugin loading errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//!
//! The conversion core never fails; every variant here comes from I/O,
//! parsing, or configuration around it.

pub mod config;
pub mod fs;
pub mod plugin;

#[allow(unused_imports)]
pub use config::{
    not_found as config_not_found, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
#[allow(unused_imports)]
pub use fs::{
    copy_failed as directory_copy_failed, not_found as file_not_found,
    read_failed as file_read_failed, write_failed as file_write_failed,
};
#[allow(unused_imports)]
pub use plugin::{
    frontmatter_parse_failed, invalid_skill_name, manifest_parse_failed,
    not_found as plugin_not_found,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for droidify operations
#[derive(Error, Diagnostic, Debug)]
pub enum DroidifyError {
    // Plugin errors
    #[error("Plugin not found at: {path}")]
    #[diagnostic(
        code(droidify::plugin::not_found),
        help("Point droidify at a Claude plugin directory (the one containing .claude-plugin/)")
    )]
    PluginNotFound { path: String },

    #[error("Failed to parse plugin manifest: {path}")]
    #[diagnostic(
        code(droidify::plugin::manifest_parse_failed),
        help("Check that .claude-plugin/plugin.json is valid JSON with a \"name\" field")
    )]
    ManifestParseFailed { path: String, reason: String },

    #[error("Invalid frontmatter in {path}: {reason}")]
    #[diagnostic(
        code(droidify::plugin::frontmatter_parse_failed),
        help("Frontmatter must be a YAML mapping between two '---' lines")
    )]
    FrontmatterParseFailed { path: String, reason: String },

    #[error("Invalid skill name: {name:?}")]
    #[diagnostic(
        code(droidify::plugin::invalid_skill_name),
        help("A skill name becomes a directory under skills/; it must be a single path segment")
    )]
    InvalidSkillName { name: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(droidify::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(droidify::config::parse_failed),
        help("Valid keys: output, agent-mode, infer-temperature, permissions")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(droidify::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Could not determine the home directory")]
    #[diagnostic(
        code(droidify::config::no_home_dir),
        help("Pass --output or set DROIDIFY_OUTPUT")
    )]
    HomeDirectoryUnavailable,

    // CLI errors
    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(droidify::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(droidify::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(droidify::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(droidify::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to copy directory {source_dir} to {target_dir}: {reason}")]
    #[diagnostic(code(droidify::fs::copy_failed))]
    DirectoryCopyFailed {
        source_dir: String,
        target_dir: String,
        reason: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(droidify::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for DroidifyError {
    fn from(err: std::io::Error) -> Self {
        DroidifyError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DroidifyError>;

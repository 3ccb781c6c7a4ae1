//! droidify - Claude plugin to Factory Droid converter
//!
//! Converts a Claude Code plugin (slash commands, agents, skills) into a
//! Factory Droid bundle. The conversion itself is pure; loading and
//! writing live around it:
//!
//! - [`plugin`]: load a plugin directory into [`domain::ClaudePlugin`]
//! - [`converter`]: convert it into a [`domain::DroidBundle`]
//! - [`installer`]: write the bundle under a `.factory` directory
//!
//! ```no_run
//! use std::path::Path;
//!
//! use droidify::converter::{ConvertOptions, convert_claude_to_droid};
//! use droidify::installer::write_droid_bundle;
//! use droidify::plugin::load_claude_plugin;
//!
//! # fn main() -> droidify::error::Result<()> {
//! let plugin = load_claude_plugin(Path::new("./compound-engineering"))?;
//! let bundle = convert_claude_to_droid(&plugin, &ConvertOptions::default());
//! write_droid_bundle(Path::new("./project"), &bundle)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod converter;
pub mod domain;
pub mod error;
pub mod installer;
pub mod logging;
pub mod plugin;
pub mod universal;

#[cfg(test)]
mod test_fixtures;

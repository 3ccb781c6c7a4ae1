//! Domain types for both sides of a conversion
//!
//! - [`claude`]: the parsed source plugin
//! - [`droid`]: the in-memory destination bundle handed to the writer

pub mod claude;
pub mod droid;

pub use claude::{ClaudeAgent, ClaudeCommand, ClaudePlugin, ClaudeSkill, PluginManifest};
pub use droid::{DroidAgentFile, DroidBundle, DroidCommandFile, DroidSkillDir};

//! Configuration for droidify
//!
//! Settings come from four layers, highest precedence first:
//!
//! 1. Command line flags
//! 2. Environment variables (`DROIDIFY_*`, read by clap)
//! 3. A `droidify.yaml` file ([`file`])
//! 4. Built-in defaults
//!
//! [`settings`] merges the layers into the values a conversion runs with.

pub mod file;
pub mod settings;

pub use file::{CONFIG_FILE_NAME, DroidifyConfig};
pub use settings::{Overrides, Settings, resolve_settings};

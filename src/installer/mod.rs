//! Writing Droid bundles to disk
//!
//! This module handles:
//! - Resolving the `.factory` layout for an output root ([`paths`])
//! - Writing command and droid files, copying skill directories ([`writer`])

pub mod paths;
pub mod writer;

pub use paths::{DroidPaths, FACTORY_DIR, resolve_droid_paths};
pub use writer::{WriteReport, check_skill_names, planned_files, write_droid_bundle};

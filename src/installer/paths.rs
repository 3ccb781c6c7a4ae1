//! Output layout for Factory Droid

use std::path::{Path, PathBuf};

/// Directory Factory reads commands, droids and skills from
pub const FACTORY_DIR: &str = ".factory";

/// Resolved output directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroidPaths {
    pub root: PathBuf,
    pub commands_dir: PathBuf,
    pub droids_dir: PathBuf,
    pub skills_dir: PathBuf,
}

/// Resolve output directories for an output root.
///
/// An output root that already is a `.factory` directory (e.g. `~/.factory`)
/// is written into directly; anything else gets a `.factory` subdirectory.
pub fn resolve_droid_paths(output_root: &Path) -> DroidPaths {
    let base = if output_root.file_name().is_some_and(|name| name == FACTORY_DIR) {
        output_root.to_path_buf()
    } else {
        output_root.join(FACTORY_DIR)
    };

    DroidPaths {
        root: output_root.to_path_buf(),
        commands_dir: base.join("commands"),
        droids_dir: base.join("droids"),
        skills_dir: base.join("skills"),
    }
}

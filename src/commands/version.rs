//! Version command implementation

use crate::error::Result;
use crate::installer::FACTORY_DIR;
use crate::plugin::MANIFEST_PATH;

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", version_info());
    Ok(())
}

/// Version, build profile and the formats this build converts between
fn version_info() -> String {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };

    format!(
        "droidify {version}\n\
         \n\
         Build info:\n  \
           Minimum Rust version: {rust}\n  \
           Profile: {profile}\n\
         \n\
         Converts:\n  \
           From: Claude Code plugin ({MANIFEST_PATH}, commands/, agents/, skills/)\n  \
           To:   Factory Droid bundle ({FACTORY_DIR}/commands, {FACTORY_DIR}/droids, {FACTORY_DIR}/skills)\n",
        version = env!("CARGO_PKG_VERSION"),
        rust = env!("CARGO_PKG_RUST_VERSION"),
    )
}

//! Command implementations for droidify CLI

pub mod completions;
pub mod convert;
pub mod version;

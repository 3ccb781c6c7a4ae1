//! Source plugin errors

use super::DroidifyError;

/// Creates a plugin not found error
pub fn not_found(path: impl Into<String>) -> DroidifyError {
    DroidifyError::PluginNotFound { path: path.into() }
}

/// Creates a manifest parse failed error
pub fn manifest_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> DroidifyError {
    DroidifyError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a frontmatter parse failed error
pub fn frontmatter_parse_failed(
    path: impl Into<String>,
    reason: impl Into<String>,
) -> DroidifyError {
    DroidifyError::FrontmatterParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid skill name error
pub fn invalid_skill_name(name: impl Into<String>) -> DroidifyError {
    DroidifyError::InvalidSkillName { name: name.into() }
}

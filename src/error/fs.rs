//! File system errors

use super::DroidifyError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> DroidifyError {
    DroidifyError::FileNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> DroidifyError {
    DroidifyError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> DroidifyError {
    DroidifyError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a directory copy failed error
pub fn copy_failed(
    source_dir: impl Into<String>,
    target_dir: impl Into<String>,
    reason: impl Into<String>,
) -> DroidifyError {
    DroidifyError::DirectoryCopyFailed {
        source_dir: source_dir.into(),
        target_dir: target_dir.into(),
        reason: reason.into(),
    }
}

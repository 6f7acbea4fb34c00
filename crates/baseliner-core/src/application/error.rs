//! Application layer errors.
//!
//! These errors represent failures in orchestration, not in the token
//! model.  Token-model errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur while driving the build pipeline.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A referenced source file is absent.  Recoverable when the file is
    /// optional (the scale is skipped with a warning); fatal for the
    /// scale's pass when required.
    #[error("missing source file: {path}")]
    MissingSourceFile { path: PathBuf, required: bool },

    /// The external stylesheet compiler exited nonzero (or could not be
    /// spawned).  Fatal for that scale's pass only.
    #[error("stylesheet compiler failed for scale '{scale}': {reason}")]
    CompilerInvocationFailed { scale: String, reason: String },

    /// The plugin host file no longer carries the splice marker.  Fatal
    /// for the plugin-bridge step; other artifact kinds still complete.
    #[error("plugin host file does not contain the TOKENS_DATA marker")]
    MarkerNotFound,

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingSourceFile { path, required } => {
                let mut s = vec![format!("Expected file: {}", path.display())];
                if *required {
                    s.push("Create the file or remove the scale that references it".into());
                } else {
                    s.push("Optional file — the scale was skipped with a warning".into());
                }
                s
            }
            Self::CompilerInvocationFailed { .. } => vec![
                "Check that the sass binary is installed and on PATH".into(),
                "Run with -vv to see the compiler's stderr".into(),
            ],
            Self::MarkerNotFound => vec![
                "The host file must contain a `const TOKENS_DATA = { ... };` statement".into(),
                "Restore the marker (it may have been hand-edited away)".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingSourceFile { .. } => ErrorCategory::NotFound,
            Self::CompilerInvocationFailed { .. } => ErrorCategory::External,
            Self::MarkerNotFound => ErrorCategory::Validation,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}

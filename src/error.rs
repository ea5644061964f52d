use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::consts::USAGE_HINT;

/// Errors that abort the whole run before or while listing the root path
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{}", USAGE_HINT)]
    MissingArguments,

    #[error("Eval file path must not be empty")]
    EmptyEvalPath,

    #[error("Eval file path \"{}\" must be relative to each subdirectory", .path.display())]
    AbsoluteEvalPath { path: PathBuf },

    #[error("Invalid separator \"{input}\" (must be non-empty and contain no path separator)")]
    InvalidSeparator { input: String },

    #[error("'{}' is not a valid directory", .path.display())]
    InvalidRootPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// Process exit status for this error
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidRootPath { .. } => 1,
            _ => 2,
        }
    }
}

/// Per-directory failures; counted and reported, never fatal
#[derive(Debug, Error)]
pub(crate) enum RenameError {
    #[error("Warning! '{}' is not a valid file!", .path.display())]
    MissingEvalFile { path: PathBuf },

    #[error("Warning! '{}' has no readable modification time! ({source})", .path.display())]
    Timestamp {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Warning! '{}' could not be renamed! ({source})", .path.display())]
    Rename {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Warning! '{}' could not be renamed! (target already exists)", .path.display())]
    TargetExists { path: PathBuf },
}

impl RenameError {
    /// Short machine-readable status used in JSON reports
    pub(crate) fn status(&self) -> &'static str {
        match self {
            RenameError::MissingEvalFile { .. } => "missing_eval_file",
            RenameError::Timestamp { .. } => "timestamp_error",
            RenameError::Rename { .. } | RenameError::TargetExists { .. } => "rename_failed",
        }
    }

    /// The path the warning is about
    pub(crate) fn path(&self) -> &Path {
        match self {
            RenameError::MissingEvalFile { path }
            | RenameError::Timestamp { path, .. }
            | RenameError::Rename { path, .. }
            | RenameError::TargetExists { path } => path,
        }
    }
}

//! Application layer errors.
//!
//! These errors represent failures in orchestration: missing skeletons,
//! wrong arguments, external tooling, and payload or destination I/O.
//! Pure validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::{ErrorCategory, SkelError};

/// Errors that occur while instantiating a skeleton.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The symbolic skeleton name is not registered.
    #[error("skeleton '{name}' not found")]
    SkeletonNotFound {
        name: String,
        available: Vec<String>,
    },

    /// Wrong number of identifier arguments for the skeleton's mode.
    #[error("{reason}")]
    ArgumentCount {
        skeleton: String,
        expected: usize,
        actual: usize,
        reason: &'static str,
    },

    /// Adapt mode could not obtain an identifier from the destination manifest.
    #[error("cannot read module identifier from {path}: {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    /// Module initialisation command failed.
    #[error("failed to initialise module: {diagnostics}")]
    ModuleInit { diagnostics: String },

    /// Dependency resolution command failed.
    #[error("failed to resolve dependencies: {diagnostics}")]
    DependencyResolution { diagnostics: String },

    /// A payload entry could not be listed or read.
    #[error("failed to read skeleton entry {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    /// A destination directory or file could not be written.
    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// Writing one payload entry failed. `entry` is relative to the destination.
    #[error("cannot materialize {entry}: {source}")]
    EntryFailed {
        entry: String,
        source: Box<SkelError>,
    },

    /// Shared adapter state was poisoned.
    #[error("adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Build the argument-count error for a skeleton.
    pub fn argument_count(skeleton: impl Into<String>, expected: usize, actual: usize) -> Self {
        let reason = match (expected, actual) {
            (0, _) => "this skeleton takes no module identifier",
            (_, 0) => "missing module identifier",
            _ => "too many arguments",
        };
        Self::ArgumentCount {
            skeleton: skeleton.into(),
            expected,
            actual,
            reason,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SkeletonNotFound { available, .. } => {
                let mut s = vec!["Try: skel list to see available skeletons".into()];
                if !available.is_empty() {
                    s.push(format!("Available: {}", available.join(", ")));
                }
                s
            }
            Self::ArgumentCount {
                skeleton, expected, ..
            } => match expected {
                0 => vec![
                    format!("'{}' reads the module identifier from go.mod", skeleton),
                    format!("Usage: skel new {}", skeleton),
                ],
                _ => vec![
                    format!("'{}' needs exactly one module identifier", skeleton),
                    format!("Usage: skel new {} github.com/you/project", skeleton),
                ],
            },
            Self::ManifestParse { path, .. } => vec![
                format!("Check that {} exists and starts with a module line", path.display()),
                "Create one with: go mod init <identifier>".into(),
            ],
            Self::ModuleInit { .. } => vec![
                "Check that the Go toolchain is installed and on PATH".into(),
                "A go.mod may already exist in the destination".into(),
                "Use --no-module-tool to skip module tooling".into(),
            ],
            Self::DependencyResolution { .. } => vec![
                "The files were written; run `go mod tidy` manually once resolved".into(),
                "Check network access to the module proxy".into(),
            ],
            Self::ReadFailed { .. } => vec![
                "The skeleton payload appears to be corrupt".into(),
                "Check skeletons.local_path if you use custom skeletons".into(),
            ],
            Self::WriteFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were left in place".into(),
            ],
            Self::EntryFailed { source, .. } => source.suggestions(),
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SkeletonNotFound { .. } => ErrorCategory::NotFound,
            Self::ArgumentCount { .. } | Self::ManifestParse { .. } => ErrorCategory::Validation,
            Self::ModuleInit { .. } | Self::DependencyResolution { .. } => ErrorCategory::Tooling,
            Self::EntryFailed { source, .. } => source.category(),
            Self::ReadFailed { .. } | Self::WriteFailed { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}

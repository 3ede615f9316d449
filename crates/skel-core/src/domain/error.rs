// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so the orchestrator can hand the first failure back intact)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid module identifier '{value}': {reason}")]
    InvalidIdentifier { value: String, reason: &'static str },

    #[error("invalid relative path '{path}': {reason}")]
    InvalidRelativePath { path: String, reason: &'static str },

    #[error("invalid skeleton descriptor '{name}': {reason}")]
    InvalidDescriptor { name: String, reason: String },

    #[error("unknown instantiation mode '{0}'")]
    UnknownMode(String),

    // ========================================================================
    // Manifest Errors
    // ========================================================================
    #[error("malformed manifest: {reason}")]
    MalformedManifest { reason: String },

    // ========================================================================
    // Registry Constraint Violations
    // ========================================================================
    #[error("skeleton '{name}' is registered twice")]
    DuplicateSkeleton { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidIdentifier { value, .. } => vec![
                format!("'{}' cannot be used as a module identifier", value),
                "Use a slash-separated path such as github.com/you/project".into(),
                "Identifiers may not contain whitespace or empty segments".into(),
            ],
            Self::MalformedManifest { .. } => vec![
                "The first declaration in go.mod must read: module <identifier>".into(),
                "Run `go mod init <identifier>` in the destination first".into(),
            ],
            Self::DuplicateSkeleton { name } => vec![
                format!("Two skeleton directories both declare the name '{}'", name),
                "Rename one of them in its skeleton.toml".into(),
            ],
            Self::UnknownMode(_) => vec!["Valid modes are: create, adapt".into()],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidIdentifier { .. } | Self::MalformedManifest { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidDescriptor { .. }
            | Self::UnknownMode(_)
            | Self::DuplicateSkeleton { .. } => ErrorCategory::Configuration,
            Self::InvalidRelativePath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}

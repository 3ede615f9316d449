//! Domain value objects: ModuleIdentifier, InstantiationMode.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! Construction validates; once built, a value is always well-formed, so the
//! rest of the engine never re-checks identifiers or modes.

use crate::domain::error::DomainError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ── ModuleIdentifier ─────────────────────────────────────────────────────────

/// A slash-separated module identifier such as `example.com/app`.
///
/// Used for both the placeholder baked into a skeleton and the caller's
/// target identifier.
///
/// Invariants: non-empty, no whitespace, no leading or trailing `/`, no empty
/// segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModuleIdentifier(String);

impl ModuleIdentifier {
    /// Validate and wrap an identifier.
    pub fn try_new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        let reason = if value.is_empty() {
            Some("identifier cannot be empty")
        } else if value.chars().any(char::is_whitespace) {
            Some("identifier cannot contain whitespace")
        } else if value.starts_with('/') || value.ends_with('/') {
            Some("identifier cannot start or end with '/'")
        } else if value.contains("//") {
            Some("identifier cannot contain an empty path segment")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidIdentifier { value, reason }),
            None => Ok(Self(value)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The final path component, used as the default package name.
    ///
    /// `example.com/app` → `app`; `widget` → `widget`.
    pub fn root_segment(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for ModuleIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ModuleIdentifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl AsRef<str> for ModuleIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── InstantiationMode ────────────────────────────────────────────────────────

/// How a skeleton obtains its target identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstantiationMode {
    /// The caller passes the identifier; the module is initialised before the
    /// copy.
    #[default]
    Create,
    /// The identifier is read from a manifest already in the destination; no
    /// module initialisation happens.
    Adapt,
}

impl InstantiationMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Adapt => "adapt",
        }
    }

    /// Number of positional identifier arguments the caller must supply.
    pub const fn expected_arguments(self) -> usize {
        match self {
            Self::Create => 1,
            Self::Adapt => 0,
        }
    }

    /// Whether the module tool must initialise a module before the copy.
    pub const fn initializes_module(self) -> bool {
        matches!(self, Self::Create)
    }
}

impl fmt::Display for InstantiationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstantiationMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "create" | "new" => Ok(Self::Create),
            "adapt" | "existing" => Ok(Self::Adapt),
            other => Err(DomainError::UnknownMode(other.to_string())),
        }
    }
}

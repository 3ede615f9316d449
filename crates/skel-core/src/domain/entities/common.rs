use super::DomainError;
use std::fmt;
use std::path::PathBuf;

/// A `/`-separated path relative to a skeleton root.
///
/// Invariant: never empty, never absolute. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(String);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<String>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_empty() {
            return Err(DomainError::InvalidRelativePath {
                path,
                reason: "path cannot be empty",
            });
        }
        if path.starts_with('/') {
            return Err(DomainError::InvalidRelativePath {
                path,
                reason: "absolute paths not allowed",
            });
        }
        if path.split('/').any(|segment| segment == "..") {
            return Err(DomainError::InvalidRelativePath {
                path,
                reason: "parent segments not allowed",
            });
        }
        Ok(Self(path))
    }

    /// Strip `root` (and the separator after it) from a payload path.
    ///
    /// Fails when `full` is not strictly below `root`; the root itself has no
    /// relative path.
    pub fn strip_root(full: &str, root: &str) -> Result<Self, DomainError> {
        let rest = if root.is_empty() {
            Some(full)
        } else {
            full.strip_prefix(root).and_then(|r| r.strip_prefix('/'))
        };

        match rest {
            Some(rest) => Self::try_new(rest),
            None => Err(DomainError::InvalidRelativePath {
                path: full.to_string(),
                reason: "path is not below the skeleton root",
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Native path built segment by segment, for joining onto a destination.
    pub fn to_path_buf(&self) -> PathBuf {
        self.0.split('/').filter(|s| !s.is_empty()).collect()
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn strip_root_removes_prefix_and_separator() {
        let rel = RelativePath::strip_root("empty/cmd/api/main.go", "empty").unwrap();
        assert_eq!(rel.as_str(), "cmd/api/main.go");
    }

    #[test]
    fn strip_root_rejects_the_root_itself() {
        assert!(RelativePath::strip_root("empty", "empty").is_err());
        assert!(RelativePath::strip_root("empty/", "empty").is_err());
    }

    #[test]
    fn strip_root_rejects_sibling_with_shared_prefix() {
        assert!(RelativePath::strip_root("empty-extra/a.go", "empty").is_err());
    }

    #[test]
    fn strip_root_with_empty_root_keeps_path() {
        let rel = RelativePath::strip_root("a/b.go", "").unwrap();
        assert_eq!(rel.as_str(), "a/b.go");
    }

    #[test]
    fn rejects_absolute_and_parent_paths() {
        assert!(RelativePath::try_new("/etc/passwd").is_err());
        assert!(RelativePath::try_new("a/../../b").is_err());
        assert!(RelativePath::try_new("").is_err());
    }

    #[test]
    fn converts_to_native_path() {
        let rel = RelativePath::try_new("internal/http/server.go").unwrap();
        assert_eq!(
            rel.to_path_buf(),
            Path::new("internal").join("http").join("server.go")
        );
    }
}

//! Module manifest (`go.mod`) parsing.
//!
//! Only the module declaration matters to the engine: in adapt mode the
//! target identifier is whatever the destination's manifest already
//! declares.

use crate::domain::{error::DomainError, value_objects::ModuleIdentifier};

/// File name of the module manifest at the destination root.
pub const MANIFEST_FILE: &str = "go.mod";

/// Read the identifier from the manifest's first declaration line.
///
/// Blank lines and `//` comment lines before it are skipped. The declaration
/// must be `module <identifier>`; the identifier may be double-quoted and may
/// be followed by a `//` comment.
pub fn parse_module_declaration(manifest: &str) -> Result<ModuleIdentifier, DomainError> {
    let line = manifest
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !l.starts_with("//"))
        .ok_or_else(|| DomainError::MalformedManifest {
            reason: "manifest has no declarations".into(),
        })?;

    let rest = line
        .strip_prefix("module")
        .filter(|r| r.starts_with(char::is_whitespace))
        .ok_or_else(|| DomainError::MalformedManifest {
            reason: format!("first declaration is not a module declaration: '{line}'"),
        })?;

    let value = match rest.find("//") {
        Some(idx) => &rest[..idx],
        None => rest,
    }
    .trim();

    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);

    ModuleIdentifier::try_new(value).map_err(|e| DomainError::MalformedManifest {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_declaration() {
        let id = parse_module_declaration("module github.com/u/widget\n\ngo 1.22\n").unwrap();
        assert_eq!(id.as_str(), "github.com/u/widget");
    }

    #[test]
    fn skips_leading_comments_and_blank_lines() {
        let manifest = "// generated\n\n   module example.org/svc // main module\ngo 1.22\n";
        let id = parse_module_declaration(manifest).unwrap();
        assert_eq!(id.as_str(), "example.org/svc");
    }

    #[test]
    fn accepts_quoted_identifier() {
        let id = parse_module_declaration("module \"example.org/quoted\"\n").unwrap();
        assert_eq!(id.as_str(), "example.org/quoted");
    }

    #[test]
    fn rejects_empty_manifest() {
        assert!(matches!(
            parse_module_declaration("\n  \n// only a comment\n"),
            Err(DomainError::MalformedManifest { .. })
        ));
    }

    #[test]
    fn rejects_other_first_declaration() {
        assert!(matches!(
            parse_module_declaration("go 1.22\nmodule example.org/late\n"),
            Err(DomainError::MalformedManifest { .. })
        ));
    }

    #[test]
    fn rejects_missing_identifier() {
        assert!(parse_module_declaration("module\n").is_err());
        assert!(parse_module_declaration("module   \n").is_err());
        assert!(parse_module_declaration("modulex example.org/a\n").is_err());
    }
}

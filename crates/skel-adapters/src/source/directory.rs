//! Skeleton source backed by a directory on disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::trace;
use walkdir::WalkDir;

use skel_core::{
    application::{
        ApplicationError,
        ports::{SkeletonSource, SourceEntry},
    },
    error::SkelResult,
};

use super::join_payload_path;

/// Serves payload paths relative to `root`.
///
/// Symlinks and other special files are not listed. Files whose name is in
/// the ignore list never appear in listings.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    ignored_file_names: Vec<String>,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignored_file_names: Vec::new(),
        }
    }

    /// Hide every file named `name`, at any depth.
    pub fn ignoring(mut self, name: impl Into<String>) -> Self {
        self.ignored_file_names.push(name.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_failed(path: &str, reason: impl ToString) -> ApplicationError {
        ApplicationError::ReadFailed {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl SkeletonSource for DirectorySource {
    fn list(&self, dir: &str) -> SkelResult<Vec<SourceEntry>> {
        let base = join_payload_path(&self.root, dir);
        let mut entries = Vec::new();

        for walk_entry in WalkDir::new(&base)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let walk_entry = walk_entry.map_err(|e| Self::read_failed(dir, e))?;
            let name = walk_entry.file_name().to_string_lossy();
            let path = if dir.is_empty() {
                name.to_string()
            } else {
                format!("{dir}/{name}")
            };

            let file_type = walk_entry.file_type();
            if file_type.is_dir() {
                entries.push(SourceEntry::dir(path));
            } else if file_type.is_file() {
                if self.ignored_file_names.iter().any(|n| *n == name) {
                    trace!(%path, "ignoring loader file");
                    continue;
                }
                entries.push(SourceEntry::file(path));
            }
        }

        Ok(entries)
    }

    fn read(&self, path: &str) -> SkelResult<Vec<u8>> {
        let full = join_payload_path(&self.root, path);
        fs::read(&full).map_err(|e| Self::read_failed(path, e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("svc/internal/http")).unwrap();
        fs::write(root.join("svc/skeleton.toml"), "[skeleton]").unwrap();
        fs::write(root.join("svc/main.go"), "package main").unwrap();
        fs::write(root.join("svc/internal/http/server.go"), "package http").unwrap();
        temp
    }

    #[test]
    fn lists_children_in_name_order() {
        let temp = tree();
        let source = DirectorySource::new(temp.path());

        assert_eq!(
            source.list("svc").unwrap(),
            vec![
                SourceEntry::dir("svc/internal"),
                SourceEntry::file("svc/main.go"),
                SourceEntry::file("svc/skeleton.toml"),
            ]
        );
        assert_eq!(source.list("").unwrap(), vec![SourceEntry::dir("svc")]);
    }

    #[test]
    fn ignored_names_are_hidden() {
        let temp = tree();
        let source = DirectorySource::new(temp.path()).ignoring("skeleton.toml");

        let entries = source.list("svc").unwrap();
        assert!(!entries.iter().any(|e| e.path.ends_with("skeleton.toml")));
    }

    #[test]
    fn reads_nested_files() {
        let temp = tree();
        let source = DirectorySource::new(temp.path());
        assert_eq!(
            source.read("svc/internal/http/server.go").unwrap(),
            b"package http".to_vec()
        );
    }

    #[test]
    fn missing_paths_are_read_failures() {
        let temp = tree();
        let source = DirectorySource::new(temp.path());

        assert!(source.list("nope").is_err());
        assert!(source.read("svc/nope.go").is_err());
    }
}

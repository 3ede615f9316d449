//! In-memory skeleton source.
//!
//! Holds a whole payload archive in memory. The compiled-in skeletons use
//! it, and so do tests that need a source without touching disk.

use std::collections::{BTreeMap, BTreeSet};

use skel_core::{
    application::{
        ApplicationError,
        ports::{SkeletonSource, SourceEntry},
    },
    error::SkelResult,
};

use super::payload_parent;

/// Read-only payload archive keyed by `/`-separated path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: BTreeMap<String, Vec<u8>>,
    directories: BTreeSet<String>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a source from a static `(path, bytes)` table.
    pub fn from_static(entries: &[(&str, &[u8])]) -> Self {
        entries
            .iter()
            .fold(Self::new(), |source, (path, bytes)| {
                source.with_file(*path, bytes.to_vec())
            })
    }

    /// Add a file. Parent directories are created implicitly.
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        let path = path.into();
        self.add_parents(&path);
        self.files.insert(path, content.into());
        self
    }

    /// Add a directory (and its parents) with no files in it.
    pub fn with_directory(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.add_parents(&path);
        self.directories.insert(path);
        self
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    fn add_parents(&mut self, path: &str) {
        let mut parent = payload_parent(path);
        while !parent.is_empty() {
            self.directories.insert(parent.to_string());
            parent = payload_parent(parent);
        }
    }
}

impl SkeletonSource for MemorySource {
    fn list(&self, dir: &str) -> SkelResult<Vec<SourceEntry>> {
        if !dir.is_empty() && !self.directories.contains(dir) {
            return Err(ApplicationError::ReadFailed {
                path: dir.to_string(),
                reason: "no such directory in payload".into(),
            }
            .into());
        }

        let dirs = self
            .directories
            .iter()
            .filter(|d| payload_parent(d) == dir)
            .map(SourceEntry::dir);
        let files = self
            .files
            .keys()
            .filter(|f| payload_parent(f) == dir)
            .map(SourceEntry::file);

        Ok(dirs.chain(files).collect())
    }

    fn read(&self, path: &str) -> SkelResult<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::ReadFailed {
                path: path.to_string(),
                reason: "no such file in payload".into(),
            }
            .into()
        })
    }
}

//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use skel_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SkelResult,
};

/// In-memory filesystem for testing.
///
/// Writing a file whose parent directory was never created fails, the same
/// way it does on disk.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's bytes (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = self
            .inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default();
        files.sort();
        files
    }

    /// Whether `path` was created as a directory.
    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.directories.contains(path))
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> SkelResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> SkelResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let parent_missing = path
            .parent()
            .is_some_and(|p| !p.as_os_str().is_empty() && !inner.directories.contains(p));
        if parent_missing {
            return Err(ApplicationError::WriteFailed {
                path: path.to_path_buf(),
                reason: "parent directory does not exist".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> SkelResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let read_failed = |reason: &str| ApplicationError::ReadFailed {
            path: path.display().to_string(),
            reason: reason.into(),
        };
        let bytes = inner.files.get(path).ok_or_else(|| read_failed("not found"))?;
        String::from_utf8(bytes.clone()).map_err(|_| read_failed("not valid UTF-8").into())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
    }
}

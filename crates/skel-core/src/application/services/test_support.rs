//! In-memory port implementations shared by the service unit tests.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, SkeletonSource, SourceEntry},
    },
    error::SkelResult,
};

/// Payload keyed by full path; keys ending in '/' are directories.
pub struct MapSource {
    entries: BTreeMap<String, Vec<u8>>,
    pub unreadable: Option<String>,
}

impl MapSource {
    pub fn new(paths: &[(&str, &str)]) -> Self {
        Self {
            entries: paths
                .iter()
                .map(|(p, c)| (p.to_string(), c.as_bytes().to_vec()))
                .collect(),
            unreadable: None,
        }
    }
}

impl SkeletonSource for MapSource {
    fn list(&self, dir: &str) -> SkelResult<Vec<SourceEntry>> {
        let prefix = if dir.is_empty() {
            String::new()
        } else {
            format!("{dir}/")
        };
        if !dir.is_empty() && !self.entries.contains_key(&prefix) {
            return Err(ApplicationError::ReadFailed {
                path: dir.to_string(),
                reason: "no such directory".into(),
            }
            .into());
        }
        Ok(self
            .entries
            .keys()
            .filter_map(|k| {
                let rest = k.strip_prefix(&prefix)?;
                let trimmed = rest.trim_end_matches('/');
                if trimmed.is_empty() || trimmed.contains('/') {
                    return None;
                }
                let path = format!("{prefix}{trimmed}");
                Some(if k.ends_with('/') {
                    SourceEntry::dir(path)
                } else {
                    SourceEntry::file(path)
                })
            })
            .collect())
    }

    fn read(&self, path: &str) -> SkelResult<Vec<u8>> {
        if self.unreadable.as_deref() == Some(path) {
            return Err(ApplicationError::ReadFailed {
                path: path.to_string(),
                reason: "corrupt".into(),
            }
            .into());
        }
        self.entries.get(path).cloned().ok_or_else(|| {
            ApplicationError::ReadFailed {
                path: path.to_string(),
                reason: "missing".into(),
            }
            .into()
        })
    }
}

#[derive(Debug, Default)]
struct FsState {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, Vec<u8>>,
    fail_on: Option<PathBuf>,
}

/// Strict in-memory filesystem: writing a file whose parent directory was
/// never created fails.
#[derive(Debug, Clone, Default)]
pub struct RecordingFilesystem {
    state: Arc<Mutex<FsState>>,
}

impl RecordingFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_file(&self, path: impl Into<PathBuf>, content: &str) {
        let path = path.into();
        let mut state = self.state.lock().unwrap();
        let mut dir = path.parent();
        while let Some(d) = dir {
            state.dirs.insert(d.to_path_buf());
            dir = d.parent();
        }
        state.files.insert(path, content.as_bytes().to_vec());
    }

    pub fn fail_on(&self, path: impl Into<PathBuf>) {
        self.state.lock().unwrap().fail_on = Some(path.into());
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .files
            .get(path.as_ref())
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.state.lock().unwrap().dirs.contains(path.as_ref())
    }

    pub fn file_count(&self) -> usize {
        self.state.lock().unwrap().files.len()
    }

    pub fn files_under(&self, dir: impl AsRef<Path>) -> Vec<PathBuf> {
        let dir = dir.as_ref();
        self.state
            .lock()
            .unwrap()
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect()
    }
}

impl Filesystem for RecordingFilesystem {
    fn create_dir_all(&self, path: &Path) -> SkelResult<()> {
        let mut state = self.state.lock().unwrap();
        let mut dir = Some(path);
        while let Some(d) = dir {
            state.dirs.insert(d.to_path_buf());
            dir = d.parent();
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> SkelResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_on.as_deref() == Some(path) {
            return Err(ApplicationError::WriteFailed {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into());
        }
        let parent_present = path.parent().is_some_and(|p| state.dirs.contains(p));
        if !parent_present {
            return Err(ApplicationError::WriteFailed {
                path: path.to_path_buf(),
                reason: "parent directory missing".into(),
            }
            .into());
        }
        state.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> SkelResult<String> {
        self.file(path).ok_or_else(|| {
            ApplicationError::ReadFailed {
                path: path.display().to_string(),
                reason: "not found".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.dirs.contains(path) || state.files.contains_key(path)
    }
}

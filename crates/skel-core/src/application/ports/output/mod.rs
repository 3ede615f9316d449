//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `skel-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::ModuleIdentifier;
use crate::error::SkelResult;

/// One child listed by a [`SkeletonSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Full `/`-separated payload path, e.g. `rest/internal/http`.
    pub path: String,
    pub is_dir: bool,
}

impl SourceEntry {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
        }
    }

    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
        }
    }
}

/// Port for reading skeleton payloads.
///
/// Implemented by:
/// - `skel_adapters::source::MemorySource` (compiled-in payload, testing)
/// - `skel_adapters::source::DirectorySource` (skeletons on disk)
///
/// ## Design Notes
///
/// - Paths are `/`-separated and relative to the source root, whatever the
///   host platform
/// - The empty path `""` names the source root
pub trait SkeletonSource: Send + Sync {
    /// List the immediate children of directory `dir`.
    fn list(&self, dir: &str) -> SkelResult<Vec<SourceEntry>>;

    /// Read the bytes of file `path`.
    fn read(&self, path: &str) -> SkelResult<Vec<u8>>;
}

/// Port for destination filesystem operations.
///
/// Implemented by:
/// - `skel_adapters::filesystem::LocalFilesystem` (production)
/// - `skel_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if present.
    fn create_dir_all(&self, path: &Path) -> SkelResult<()>;

    /// Create or truncate `path` and write `content`.
    fn write_file(&self, path: &Path, content: &[u8]) -> SkelResult<()>;

    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> SkelResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for external module bookkeeping tools.
///
/// Implemented by:
/// - `skel_adapters::module_tool::GoModuleTool` (runs `go mod ...`)
/// - `skel_adapters::module_tool::NoopModuleTool` (skips tooling)
///
/// Both calls block until the tool exits. They run with `workdir` as the
/// current directory.
#[cfg_attr(test, mockall::automock)]
pub trait ModuleTool: Send + Sync {
    /// Create a fresh module manifest declaring `identifier`.
    fn initialize(&self, workdir: &Path, identifier: &ModuleIdentifier) -> SkelResult<()>;

    /// Reconcile the manifest with the imports of the written files.
    fn resolve_dependencies(&self, workdir: &Path) -> SkelResult<()>;
}

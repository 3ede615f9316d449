//! Filesystem-based skeleton loader.
//!
//! Discovers `skeleton.toml` manifests in a directory and turns them into a
//! [`SkeletonRegistry`] plus the [`DirectorySource`] that serves their files.
//!
//! # Directory layout expected
//!
//! ```text
//! skeletons/
//! ├── svc/
//! │   ├── skeleton.toml        ← manifest (required)
//! │   ├── cmd/
//! │   │   └── main.go
//! │   └── internal/
//! │       └── .keep
//! └── worker/
//!     ├── skeleton.toml
//!     └── main.go
//! ```
//!
//! # `skeleton.toml` format
//!
//! ```toml
//! [skeleton]
//! name        = "svc"               # optional; defaults to the directory name
//! placeholder = "example.com/svc"
//! mode        = "create"            # create | adapt; optional, default create
//! description = "Service skeleton"  # optional
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use skel_core::{
    application::SkeletonRegistry,
    domain::{DomainError, InstantiationMode, ModuleIdentifier, TemplateDescriptor},
    error::{SkelError, SkelResult},
};

use crate::source::DirectorySource;

/// Manifest file name inside each skeleton directory.
pub const SKELETON_MANIFEST: &str = "skeleton.toml";

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of a `skeleton.toml` file.
#[derive(Debug, Deserialize, Clone)]
pub struct SkeletonManifest {
    pub skeleton: SkeletonSection,
}

/// `[skeleton]` section.
#[derive(Debug, Deserialize, Clone)]
pub struct SkeletonSection {
    pub name: Option<String>,
    /// Identifier baked into the skeleton's files.
    pub placeholder: String,
    pub mode: Option<String>,
    pub description: Option<String>,
}

/// Registry and source produced by [`SkeletonLoader::load_all`].
pub struct LoadedSkeletons {
    pub registry: SkeletonRegistry,
    pub source: DirectorySource,
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads skeletons from a directory of `skeleton.toml` manifests.
///
/// Each immediate subdirectory of `skeletons_dir` that contains a valid
/// `skeleton.toml` is one skeleton. Subdirectories with a missing or invalid
/// manifest emit a `WARN` log and are skipped.
pub struct SkeletonLoader {
    skeletons_dir: PathBuf,
}

impl SkeletonLoader {
    pub fn new(skeletons_dir: impl Into<PathBuf>) -> Self {
        Self {
            skeletons_dir: skeletons_dir.into(),
        }
    }

    /// Load every valid skeleton under the directory.
    ///
    /// # Errors
    ///
    /// Returns [`SkelError::Configuration`] if the directory is missing or
    /// cannot be read.
    #[instrument(skip(self), fields(dir = %self.skeletons_dir.display()))]
    pub fn load_all(&self) -> SkelResult<LoadedSkeletons> {
        if !self.skeletons_dir.is_dir() {
            return Err(SkelError::Configuration {
                message: format!(
                    "skeleton directory not found: {}",
                    self.skeletons_dir.display()
                ),
            });
        }

        let mut registry = SkeletonRegistry::new();

        for walk_entry in WalkDir::new(&self.skeletons_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let walk_entry = walk_entry.map_err(|e| SkelError::Configuration {
                message: format!(
                    "failed to read skeleton directory '{}': {e}",
                    self.skeletons_dir.display()
                ),
            })?;

            if !walk_entry.file_type().is_dir() {
                continue;
            }

            let path = walk_entry.path();
            let loaded = self
                .load_descriptor(path)
                .and_then(|descriptor| registry.register(descriptor));

            match loaded {
                Ok(()) => debug!(dir = %path.display(), "loaded skeleton"),
                Err(e) => warn!(
                    dir = %path.display(),
                    error = %e,
                    "skipping skeleton directory due to load error"
                ),
            }
        }

        debug!(count = registry.len(), "finished loading skeletons");
        Ok(LoadedSkeletons {
            registry,
            source: DirectorySource::new(&self.skeletons_dir).ignoring(SKELETON_MANIFEST),
        })
    }

    /// Build the descriptor for one skeleton subdirectory.
    fn load_descriptor(&self, dir: &Path) -> SkelResult<TemplateDescriptor> {
        let dir_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let invalid = |reason: String| DomainError::InvalidDescriptor {
            name: dir_name.clone(),
            reason,
        };

        let manifest_path = dir.join(SKELETON_MANIFEST);
        if !manifest_path.is_file() {
            return Err(invalid(format!("missing {SKELETON_MANIFEST}")).into());
        }

        let raw = fs::read_to_string(&manifest_path)
            .map_err(|e| invalid(format!("failed to read {SKELETON_MANIFEST}: {e}")))?;
        let manifest: SkeletonManifest = toml::from_str(&raw)
            .map_err(|e| invalid(format!("failed to parse {SKELETON_MANIFEST}: {e}")))?;
        let section = manifest.skeleton;

        let placeholder = ModuleIdentifier::try_new(section.placeholder)?;
        let mode = section
            .mode
            .as_deref()
            .map(str::parse::<InstantiationMode>)
            .transpose()?
            .unwrap_or_default();

        Ok(TemplateDescriptor::new(
            section.name.unwrap_or_else(|| dir_name.clone()),
            dir_name.clone(),
            placeholder,
        )
        .with_mode(mode)
        .with_description(section.description.unwrap_or_default()))
    }
}

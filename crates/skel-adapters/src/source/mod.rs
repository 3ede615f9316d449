//! Skeleton payload sources.

mod directory;
mod memory;

pub use directory::DirectorySource;
pub use memory::MemorySource;

use std::path::{Path, PathBuf};

/// Join a `/`-separated payload path onto `base` segment by segment.
pub(crate) fn join_payload_path(base: &Path, path: &str) -> PathBuf {
    path.split('/')
        .filter(|s| !s.is_empty())
        .fold(base.to_path_buf(), |acc, segment| acc.join(segment))
}

/// Parent of a `/`-separated payload path; `""` for top-level entries.
pub(crate) fn payload_parent(path: &str) -> &str {
    path.rsplit_once('/').map_or("", |(parent, _)| parent)
}

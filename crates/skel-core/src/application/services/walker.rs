//! Skeleton tree walker.
//!
//! [`Walker`] descends the tree under a descriptor's payload root and yields
//! one [`FileEntry`] per directory and file, relative to that root.
//!
//! Ordering: pre-order depth-first, siblings in lexical order. A directory is
//! always yielded before anything beneath it, which is what lets the scaffold
//! service create directories without ever creating parents implicitly.
//!
//! The walk is lazy. Each directory is listed when it is yielded and each
//! file is read when it is yielded. The first listing or read failure is
//! returned as an `Err` item and the walker is exhausted afterwards.

use tracing::trace;

use crate::{
    application::{
        ApplicationError,
        ports::{SkeletonSource, SourceEntry},
    },
    domain::{FileEntry, RelativePath, TemplateDescriptor},
    error::SkelResult,
};

/// Path suffixes that are never copied.
///
/// `.keep` / `.gitkeep` hold otherwise-empty directories in the payload; the
/// rest are OS metadata that can sneak into a checked-out skeleton directory.
pub const SENTINEL_SUFFIXES: &[&str] = &[
    ".keep",
    ".gitkeep",
    ".DS_Store",
    "Thumbs.db",
    "desktop.ini",
];

/// Whether `path` ends with one of [`SENTINEL_SUFFIXES`].
pub fn is_sentinel(path: &str) -> bool {
    SENTINEL_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
}

/// Lazy, single-pass iterator over a skeleton tree.
pub struct Walker<'a> {
    source: &'a dyn SkeletonSource,
    root: String,
    pending: Vec<SourceEntry>,
    started: bool,
    finished: bool,
}

impl<'a> Walker<'a> {
    pub fn new(source: &'a dyn SkeletonSource, descriptor: &TemplateDescriptor) -> Self {
        Self {
            source,
            root: descriptor.root().to_string(),
            pending: Vec::new(),
            started: false,
            finished: false,
        }
    }

    /// Queue the children of `dir` so they pop in lexical order.
    fn push_children(&mut self, dir: &str) -> SkelResult<()> {
        let mut children = self.source.list(dir)?;
        children.sort_by(|a, b| a.path.cmp(&b.path));
        self.pending.extend(children.into_iter().rev());
        Ok(())
    }

    fn visit(&mut self, entry: SourceEntry) -> SkelResult<FileEntry> {
        let relative = RelativePath::strip_root(&entry.path, &self.root).map_err(|e| {
            ApplicationError::ReadFailed {
                path: entry.path.clone(),
                reason: e.to_string(),
            }
        })?;

        if entry.is_dir {
            self.push_children(&entry.path)?;
            trace!(path = %relative, "directory");
            Ok(FileEntry::directory(relative))
        } else {
            let content = self.source.read(&entry.path)?;
            trace!(path = %relative, bytes = content.len(), "file");
            Ok(FileEntry::file(relative, content))
        }
    }

    fn fail(&mut self, err: crate::error::SkelError) -> Option<SkelResult<FileEntry>> {
        self.finished = true;
        self.pending.clear();
        Some(Err(err))
    }
}

impl Iterator for Walker<'_> {
    type Item = SkelResult<FileEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if !self.started {
            self.started = true;
            let root = self.root.clone();
            if let Err(e) = self.push_children(&root) {
                return self.fail(e);
            }
        }

        while let Some(entry) = self.pending.pop() {
            if is_sentinel(&entry.path) {
                trace!(path = %entry.path, "skipping sentinel");
                continue;
            }

            return match self.visit(entry) {
                Ok(file_entry) => Some(Ok(file_entry)),
                Err(e) => self.fail(e),
            };
        }

        self.finished = true;
        None
    }
}

impl std::iter::FusedIterator for Walker<'_> {}

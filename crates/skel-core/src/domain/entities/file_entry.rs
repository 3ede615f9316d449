use crate::domain::entities::common::RelativePath;

/// One entry produced by walking a skeleton.
///
/// The walker builds these; nothing mutates them afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: RelativePath,
    kind: EntryKind,
}

/// Directory marker or file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File(Vec<u8>),
}

impl FileEntry {
    pub fn directory(path: RelativePath) -> Self {
        Self {
            path,
            kind: EntryKind::Directory,
        }
    }

    pub fn file(path: RelativePath, content: Vec<u8>) -> Self {
        Self {
            path,
            kind: EntryKind::File(content),
        }
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }

    /// File bytes, `None` for directories.
    pub fn content(&self) -> Option<&[u8]> {
        match &self.kind {
            EntryKind::File(bytes) => Some(bytes),
            EntryKind::Directory => None,
        }
    }
}

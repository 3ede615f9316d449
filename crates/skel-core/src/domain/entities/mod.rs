pub mod common;
pub mod file_entry;
pub mod skeleton;

pub use crate::domain::DomainError;
pub use common::RelativePath;
pub use file_entry::{EntryKind, FileEntry};
pub use skeleton::TemplateDescriptor;

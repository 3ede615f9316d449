//! Infrastructure adapters for skel.
//!
//! This crate implements the ports defined in `skel-core::application::ports`.
//! It contains all external dependencies and I/O operations, plus the
//! compiled-in skeleton payload.

pub mod builtin_skeletons;
pub mod filesystem;
pub mod module_tool;
pub mod skeleton_loader;
pub mod source;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use module_tool::{GoModuleTool, NoopModuleTool};
pub use skeleton_loader::{LoadedSkeletons, SkeletonLoader};
pub use source::{DirectorySource, MemorySource};

//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "instantiate a skeleton" or "list skeletons".

pub mod scaffold_service;
pub mod skeleton_service;
pub mod walker;

#[cfg(test)]
pub(crate) mod test_support;

pub use scaffold_service::{ScaffoldReport, ScaffoldRequest, ScaffoldService, Stage};
pub use skeleton_service::{SkeletonInfo, SkeletonService};
pub use walker::{SENTINEL_SUFFIXES, Walker, is_sentinel};

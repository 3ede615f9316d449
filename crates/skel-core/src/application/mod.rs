//! Application layer for skel.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, SkeletonService)
//! - **Registry**: The name → descriptor table handed to the services
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Identifier, manifest and rewrite rules live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod registry;
pub mod services;

// Re-export main services
pub use services::{
    ScaffoldReport, ScaffoldRequest, ScaffoldService,
    SkeletonInfo, // DTO for skeleton metadata
    SkeletonService, Walker,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ModuleTool, SkeletonSource, SourceEntry};

pub use error::ApplicationError;
pub use registry::SkeletonRegistry;

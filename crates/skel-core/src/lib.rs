//! skel core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for the skel
//! skeleton instantiation engine, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             skel-cli (CLI)              │
//! │       (Implements Driving Ports)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │   (ScaffoldService, SkeletonService)    │
//! │     Walker, SkeletonRegistry            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (SkeletonSource, Filesystem, ModuleTool)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      skel-adapters (Infrastructure)     │
//! │ (MemorySource, LocalFilesystem, go ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ModuleIdentifier, rewrite, manifest)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use skel_core::application::{ScaffoldRequest, ScaffoldService};
//!
//! // Adapters and the registry come from skel-adapters
//! let service = ScaffoldService::new(registry, source, filesystem, module_tool);
//!
//! let request = ScaffoldRequest::new("rest", "./widget")
//!     .with_argument("github.com/you/widget");
//! let report = service.scaffold(&request).unwrap();
//! println!("{} files written", report.files);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldReport, ScaffoldRequest, ScaffoldService, SkeletonInfo, SkeletonRegistry,
        SkeletonService,
        ports::{Filesystem, ModuleTool, SkeletonSource, SourceEntry},
    };
    pub use crate::domain::{
        FileEntry, InstantiationMode, ModuleIdentifier, RelativePath, SubstitutionRuleSet,
        TemplateDescriptor,
    };
    pub use crate::error::{SkelError, SkelResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

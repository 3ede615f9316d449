// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for skel.
//!
//! This module contains pure logic with no I/O. Reading payloads, writing
//! files, and running module tooling are handled via ports (traits) defined
//! in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, process, or network calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: Descriptors and file entries never change after
//!   construction
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod manifest;
pub mod rewrite;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    file_entry::{EntryKind, FileEntry},
    skeleton::TemplateDescriptor,
};

pub use error::{DomainError, ErrorCategory};

pub use manifest::{MANIFEST_FILE, parse_module_declaration};
pub use rewrite::{SubstitutionRule, SubstitutionRuleSet, rewrite};
pub use value_objects::{InstantiationMode, ModuleIdentifier};

pub use validation::DomainValidator;

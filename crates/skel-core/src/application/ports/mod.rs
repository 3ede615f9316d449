//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `skel-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `SkeletonSource`: Payload listing and reading
//!   - `Filesystem`: Destination writes
//!   - `ModuleTool`: External module initialisation / dependency resolution
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, ModuleTool, SkeletonSource, SourceEntry};

#[cfg(test)]
pub use output::MockModuleTool;

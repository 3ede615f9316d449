//! Built-in skeletons.
//!
//! The payload is compiled into the binary from `skeletons/`. Each skeleton
//! lives under its own top-level directory of the payload; that directory is
//! the descriptor's root.
//!
//! | Name    | Mode   | Placeholder        |
//! |---------|--------|--------------------|
//! | `empty` | create | `example.com/app`  |
//! | `rest`  | create | `example.com/rest` |
//! | `app`   | adapt  | `example.com/app`  |
//!
//! Empty directories are carried by `.keep` markers, which the walker skips.

use tracing::{debug, instrument};

use skel_core::{
    application::SkeletonRegistry,
    domain::{InstantiationMode, ModuleIdentifier, TemplateDescriptor},
    error::{Context, SkelResult},
};

use crate::source::MemorySource;

macro_rules! payload {
    ($($path:literal),* $(,)?) => {
        &[$(($path, include_bytes!(concat!("../skeletons/", $path)) as &[u8])),*]
    };
}

/// Every file of the compiled-in payload, keyed by payload path.
pub const PAYLOAD: &[(&str, &[u8])] = payload![
    "empty/main.go",
    "empty/cmd/.keep",
    "empty/internal/.keep",
    "rest/cmd/api/main.go",
    "rest/internal/config/config.go",
    "rest/internal/http/json.go",
    "rest/internal/http/server.go",
    "rest/migrations/.keep",
    "app/note.go",
    "app/cmd/api/main.go",
    "app/http/notes.go",
    "app/memory/notes.go",
];

/// Descriptors for the compiled-in skeletons.
pub fn descriptors() -> SkelResult<Vec<TemplateDescriptor>> {
    let placeholder =
        |raw: &str| ModuleIdentifier::try_new(raw).context("built-in skeleton placeholder");

    Ok(vec![
        TemplateDescriptor::new("empty", "empty", placeholder("example.com/app")?)
            .with_description("Minimal module with a main package"),
        TemplateDescriptor::new("rest", "rest", placeholder("example.com/rest")?)
            .with_description("HTTP service with config and JSON helpers"),
        TemplateDescriptor::new("app", "app", placeholder("example.com/app")?)
            .with_mode(InstantiationMode::Adapt)
            .with_description("Notes service added to an existing module"),
    ])
}

/// Registry of the compiled-in skeletons.
#[instrument]
pub fn registry() -> SkelResult<SkeletonRegistry> {
    let mut registry = SkeletonRegistry::new();
    for descriptor in descriptors()? {
        registry.register(descriptor)?;
    }
    debug!(count = registry.len(), "registered built-in skeletons");
    Ok(registry)
}

/// Source serving the compiled-in payload.
pub fn source() -> MemorySource {
    MemorySource::from_static(PAYLOAD)
}

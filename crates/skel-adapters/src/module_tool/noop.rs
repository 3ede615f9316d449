//! Module tool that does nothing.

use std::path::Path;

use tracing::debug;

use skel_core::{application::ports::ModuleTool, domain::ModuleIdentifier, error::SkelResult};

/// Skips module bookkeeping; used by `skel new --no-module-tool` and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopModuleTool;

impl ModuleTool for NoopModuleTool {
    fn initialize(&self, workdir: &Path, identifier: &ModuleIdentifier) -> SkelResult<()> {
        debug!(workdir = %workdir.display(), %identifier, "skipping module init");
        Ok(())
    }

    fn resolve_dependencies(&self, workdir: &Path) -> SkelResult<()> {
        debug!(workdir = %workdir.display(), "skipping dependency resolution");
        Ok(())
    }
}

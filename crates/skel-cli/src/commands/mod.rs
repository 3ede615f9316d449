//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod list;
pub mod new;

use tracing::debug;

use skel_adapters::{SkeletonLoader, builtin_skeletons};
use skel_core::application::{SkeletonRegistry, ports::SkeletonSource};

use crate::{config::AppConfig, error::CliResult};

/// Registry and payload source for this invocation.
///
/// `skeletons.local_path` replaces the compiled-in set entirely.
pub(crate) fn load_skeletons(
    config: &AppConfig,
) -> CliResult<(SkeletonRegistry, Box<dyn SkeletonSource>)> {
    match &config.skeletons.local_path {
        Some(dir) => {
            debug!(dir = %dir.display(), "using user skeleton directory");
            let loaded = SkeletonLoader::new(dir).load_all()?;
            Ok((loaded.registry, Box::new(loaded.source)))
        }
        None => Ok((
            builtin_skeletons::registry()?,
            Box::new(builtin_skeletons::source()),
        )),
    }
}

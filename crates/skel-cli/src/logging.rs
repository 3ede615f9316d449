//! Installs the process-wide `tracing` subscriber.
//!
//! Library crates only emit events; the level comes from
//! [`GlobalArgs::log_level`] unless `RUST_LOG` is set.

use std::io::{self, IsTerminal as _};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the selected level.
const TARGETS: [&str; 3] = ["skel", "skel_core", "skel_adapters"];

/// Call once at startup; a second call fails.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(args.log_level())));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!args.no_color && io::stderr().is_terminal())
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already set: {e}"))
}

fn directives(level: LevelFilter) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_cover_every_crate() {
        assert_eq!(
            directives(LevelFilter::DEBUG),
            "skel=debug,skel_core=debug,skel_adapters=debug"
        );
    }

    #[test]
    fn quiet_directives_are_error_only() {
        let args = crate::cli::global::args(2, true, true);
        assert!(
            directives(args.log_level())
                .split(',')
                .all(|d| d.ends_with("=error"))
        );
    }
}

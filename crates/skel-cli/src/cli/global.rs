//! Flags shared by every `skel` subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args};
use tracing::level_filters::LevelFilter;

use crate::config::AppConfig;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Log more (-v stages, -vv transitions, -vvv every entry)"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal.
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain output; also set by `NO_COLOR`.
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read settings from FILE instead of the per-user config file.
    #[arg(short = 'c', long = "config", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// Log level selected by `-q` / `-v`. `--quiet` wins.
    pub fn log_level(&self) -> LevelFilter {
        match (self.quiet, self.verbose) {
            (true, _) => LevelFilter::ERROR,
            (false, 0) => LevelFilter::WARN,
            (false, 1) => LevelFilter::INFO,
            (false, 2) => LevelFilter::DEBUG,
            (false, _) => LevelFilter::TRACE,
        }
    }

    /// Colour is off if either the flag or `output.no_color` says so.
    pub fn color(&self, config: &AppConfig) -> bool {
        !(self.no_color || config.output.no_color)
    }
}

#[cfg(test)]
pub(crate) fn args(verbose: u8, quiet: bool, no_color: bool) -> GlobalArgs {
    GlobalArgs {
        verbose,
        quiet,
        no_color,
        config: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_steps_through_levels() {
        let levels: Vec<_> = (0..=4).map(|v| args(v, false, true).log_level()).collect();
        assert_eq!(
            levels,
            [
                LevelFilter::WARN,
                LevelFilter::INFO,
                LevelFilter::DEBUG,
                LevelFilter::TRACE,
                LevelFilter::TRACE,
            ]
        );
    }

    #[test]
    fn quiet_beats_verbose() {
        assert_eq!(args(3, true, true).log_level(), LevelFilter::ERROR);
    }

    #[test]
    fn config_or_flag_disables_color() {
        let mut config = AppConfig::default();
        assert!(args(0, false, false).color(&config));
        assert!(!args(0, false, true).color(&config));

        config.output.no_color = true;
        assert!(!args(0, false, false).color(&config));
    }
}

//! `skel`: instantiate Go project skeletons.
//!
//! Exit status is 0 on success, 2 for bad input, 3 for an unknown skeleton,
//! 4 for configuration problems and 1 for tool or system failures.

use std::{io::IsTerminal as _, process::ExitCode};

use clap::Parser;
use tracing::{debug, error, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

const EXIT_USAGE: u8 = 2;
const EXIT_CONFIG: u8 = 4;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Also reached for --help and --version, which print to stdout.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = logging::init_logging(&cli.global) {
        eprintln!("skel: {e}");
        return ExitCode::FAILURE;
    }
    debug!(global = ?cli.global, "arguments parsed");

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e:#}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let verbose = cli.global.verbose > 0;
    let color = cli.global.color(&config) && std::io::stderr().is_terminal();
    let output = OutputManager::new(&cli.global, &config);

    match run(cli, config, output) {
        Ok(()) => {
            info!("done");
            ExitCode::SUCCESS
        }
        Err(e) => report(&e, verbose, color),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::New(args) => commands::new::execute(args, cli.global, config, output),
        Commands::List(args) => commands::list::execute(args, config, output),
        Commands::Config(args) => commands::config::execute(args, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Print `err` to stderr and pick the exit status.
fn report(err: &CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();
    let rendered = if color {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{rendered}");
    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn version_comes_from_the_manifest() {
        assert_eq!(
            Cli::command().get_version(),
            Some(env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn missing_skeleton_is_a_usage_error() {
        let err = Cli::try_parse_from(["skel", "new"]).unwrap_err();
        assert!(err.use_stderr());
    }
}

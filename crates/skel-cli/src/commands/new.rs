//! Implementation of the `skel new` command.
//!
//! Responsibility: pick the adapters, hand the arguments to the core
//! scaffold service, and display results. Argument-count and identifier
//! checks belong to the engine.

use std::path::Path;

use tracing::{debug, info, instrument};

use skel_adapters::{GoModuleTool, LocalFilesystem, NoopModuleTool};
use skel_core::{
    application::{ScaffoldReport, ScaffoldRequest, ScaffoldService, ports::ModuleTool},
    domain::InstantiationMode,
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::{AppConfig, ToolConfig},
    error::CliResult,
    output::OutputManager,
};

/// Execute the `skel new` command.
///
/// Dispatch sequence:
/// 1. Load the skeleton registry and payload (built-in or user directory)
/// 2. Choose the module tool (`go`, or none with `--no-module-tool`)
/// 3. Run the scaffold service
/// 4. Print a summary and next steps
#[instrument(skip_all, fields(skeleton = %args.skeleton))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let (registry, source) = super::load_skeletons(&config)?;
    let module_tool = module_tool(args.no_module_tool, &config.tools);

    let service = ScaffoldService::new(
        registry,
        source,
        Box::new(LocalFilesystem::new()),
        module_tool,
    );

    let request = ScaffoldRequest::new(args.skeleton.clone(), args.directory.clone())
        .with_arguments(args.identifiers);

    output.header(&format!(
        "Instantiating '{}' into {}...",
        request.skeleton,
        request.destination.display()
    ))?;
    info!(destination = %request.destination.display(), "instantiation requested");

    let report = service.scaffold(&request)?;

    output.success(&summary(&report))?;
    if args.no_module_tool {
        output.warning("Module tooling skipped; run `go mod tidy` before building")?;
    }

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        for step in next_steps(&report, &request.destination) {
            output.print(&format!("  {step}"))?;
        }
    }

    Ok(())
}

fn module_tool(disabled: bool, tools: &ToolConfig) -> Box<dyn ModuleTool> {
    if disabled {
        debug!("module tool disabled");
        return Box::new(NoopModuleTool);
    }
    debug!(binary = %tools.go_binary, timeout = ?tools.timeout(), "using go module tool");
    Box::new(
        GoModuleTool::new()
            .with_binary(tools.go_binary.clone())
            .with_timeout(tools.timeout()),
    )
}

fn summary(report: &ScaffoldReport) -> String {
    let verb = match report.mode {
        InstantiationMode::Create => "Created",
        InstantiationMode::Adapt => "Adapted",
    };
    format!(
        "{verb} {} from '{}' ({} files, {} directories)",
        report.identifier, report.skeleton, report.files, report.directories
    )
}

fn next_steps(report: &ScaffoldReport, destination: &Path) -> Vec<String> {
    let mut steps = Vec::new();
    if destination != Path::new(".") {
        steps.push(format!("cd {}", destination.display()));
    }
    steps.push("go build ./...".into());
    if report.mode == InstantiationMode::Adapt {
        steps.push("git diff   # review the added files".into());
    }
    steps
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use skel_core::domain::ModuleIdentifier;

    fn report(mode: InstantiationMode) -> ScaffoldReport {
        ScaffoldReport {
            skeleton: "rest".into(),
            identifier: ModuleIdentifier::try_new("github.com/u/widget").unwrap(),
            mode,
            directories: 7,
            files: 4,
        }
    }

    #[test]
    fn summary_mentions_identifier_and_counts() {
        let line = summary(&report(InstantiationMode::Create));
        assert_eq!(
            line,
            "Created github.com/u/widget from 'rest' (4 files, 7 directories)"
        );
    }

    #[test]
    fn adapt_summary_uses_adapted() {
        assert!(summary(&report(InstantiationMode::Adapt)).starts_with("Adapted"));
    }

    #[test]
    fn next_steps_skip_cd_for_current_directory() {
        let steps = next_steps(&report(InstantiationMode::Create), Path::new("."));
        assert_eq!(steps, vec!["go build ./..."]);
    }

    #[test]
    fn next_steps_cd_into_destination() {
        let steps = next_steps(&report(InstantiationMode::Adapt), Path::new("widget"));
        assert_eq!(steps[0], "cd widget");
        assert!(steps.iter().any(|s| s.starts_with("git diff")));
    }

    #[test]
    fn disabled_module_tool_never_runs_go() {
        let tools = ToolConfig::default();
        let noop = module_tool(true, &tools);
        assert!(noop.resolve_dependencies(Path::new("/nonexistent")).is_ok());
    }
}

//! Implementation of the `skel list` command.

use skel_core::application::{SkeletonInfo, SkeletonService};

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (registry, _source) = super::load_skeletons(&config)?;
    let skeletons = SkeletonService::new(registry).list();

    match args.format {
        ListFormat::Table if skeletons.is_empty() => {
            output.info("No skeletons registered")?;
        }
        ListFormat::Table => {
            output.header("Available Skeletons:")?;
            for line in table_rows(&skeletons) {
                output.print(&line)?;
            }
        }
        ListFormat::Json => {
            // Goes through `data` so quiet mode never swallows it.
            let json =
                serde_json::to_string_pretty(&skeletons).map_err(|e| CliError::Internal {
                    message: format!("failed to serialise skeleton list: {e}"),
                })?;
            output.data(&json)?;
        }
    }

    Ok(())
}

fn table_rows(skeletons: &[SkeletonInfo]) -> Vec<String> {
    let width = skeletons
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or_default();

    skeletons
        .iter()
        .map(|s| {
            let mut row = format!("  {:<width$}  {:<6}  {}", s.name, s.mode.to_string(), s.placeholder);
            if !s.description.is_empty() {
                row.push_str(&format!("  {}", s.description));
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use skel_adapters::builtin_skeletons;

    #[test]
    fn table_lists_builtins_in_name_order() {
        let skeletons = SkeletonService::new(builtin_skeletons::registry().unwrap()).list();
        let rows = table_rows(&skeletons);

        assert_eq!(rows.len(), 3);
        assert!(rows[0].trim_start().starts_with("app"));
        assert!(rows[0].contains("adapt"));
        assert!(rows[2].contains("example.com/rest"));
    }

    #[test]
    fn empty_registry_has_no_rows() {
        assert!(table_rows(&[]).is_empty());
    }
}

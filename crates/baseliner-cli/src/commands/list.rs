//! Implementation of the `baseliner list` command.

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let pipeline = super::pipeline(&config, false);
    let sources = pipeline.discover_scales()?;

    match args.format {
        ListFormat::Table => {
            if sources.is_empty() {
                output.warning(&format!(
                    "No scales found in {}",
                    config.paths.config_dir.display()
                ))?;
                return Ok(());
            }
            output.header("Available Scales:")?;
            for source in &sources {
                output.print(&format!("  {} ({})", source.name, source.path.display()))?;
            }
        }

        ListFormat::List => {
            for source in &sources {
                println!("{}", source.name);
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let entries: Vec<serde_json::Value> = sources
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "name": s.name,
                        "path": s.path.display().to_string(),
                    })
                })
                .collect();
            let json = serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
    }

    Ok(())
}

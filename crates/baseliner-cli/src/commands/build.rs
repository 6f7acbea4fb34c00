//! Implementation of the `baseliner build` command.

use chrono::Utc;
use tracing::instrument;

use crate::{
    cli::{BuildArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: BuildArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let pipeline = super::pipeline(&config, args.force_demos);
    let sources = pipeline.discover_scales()?;

    let source = sources
        .iter()
        .find(|s| s.name == args.scale)
        .ok_or_else(|| CliError::UnknownScale {
            name: args.scale.clone(),
            available: sources.iter().map(|s| s.name.clone()).collect(),
        })?;

    pipeline.build_scale(source, Utc::now())?;
    // The blob spans all scales, so it is refreshed even for a
    // single-scale build.
    pipeline.refresh_plugin_blob(&sources)?;
    output.success(&format!("Built scale '{}'", args.scale))?;
    Ok(())
}

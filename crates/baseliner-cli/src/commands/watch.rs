//! Implementation of the `baseliner watch` command.
//!
//! Runs one full pass up front, then hands the pipeline to the core watch
//! service fed by the polling watcher.  The loop ends when the watcher is
//! torn down (normally via Ctrl-C killing the process).

use std::time::Duration;

use chrono::Utc;
use tracing::instrument;

use baseliner_adapters::PollingWatcher;
use baseliner_core::prelude::{PassSummary, WatchService};

use crate::{
    cli::{GlobalArgs, WatchArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: WatchArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let pipeline = super::pipeline(&config, args.force_demos);

    // Initial pass: watch mode always starts from a fully built state.
    let sources = pipeline.discover_scales()?;
    let summary = pipeline.build_all(&sources, Utc::now());
    report_summary(&summary, &output)?;

    if args.build_only {
        return if summary.is_success() {
            Ok(())
        } else {
            Err(CliError::BuildFailed {
                failed: summary.failures.len(),
            })
        };
    }

    // Watch the inputs only: token sources and the style tree.  Generated
    // outputs are additionally filtered by the watch service itself.
    let watch_paths = vec![
        config.paths.config_dir.clone(),
        config.paths.styles_root.clone(),
    ];
    let interval = Duration::from_millis(config.watch.poll_interval_ms);
    let quiet = Duration::from_millis(config.watch.quiet_ms);

    let (_watcher, events) = PollingWatcher::spawn(&watch_paths, interval)?;
    output.info(&format!(
        "Watching {} and {} (poll every {}ms, Ctrl-C to stop)",
        config.paths.config_dir.display(),
        config.paths.styles_root.display(),
        config.watch.poll_interval_ms
    ))?;

    let mut service = WatchService::new(pipeline, quiet);
    let stats = service.run(events)?;

    output.info(&format!(
        "Watcher stopped after {} rebuild pass(es), {} event(s) skipped",
        stats.passes, stats.skipped
    ))?;
    if stats.failures > 0 {
        return Err(CliError::BuildFailed {
            failed: stats.failures,
        });
    }
    Ok(())
}

/// Print one line per completed scale and one per failure.
fn report_summary(summary: &PassSummary, output: &OutputManager) -> CliResult<()> {
    for name in &summary.completed {
        output.success(&format!("Built scale '{name}'"))?;
    }
    for (name, error) in &summary.failures {
        output.error(&format!("{name}: {error}"))?;
    }
    Ok(())
}

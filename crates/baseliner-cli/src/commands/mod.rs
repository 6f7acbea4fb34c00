//! Command handlers.
//!
//! Each submodule exposes a single `execute` function; wiring of adapters
//! into the core pipeline happens here so the handlers stay declarative.

pub mod build;
pub mod completions;
pub mod list;
pub mod watch;

use baseliner_adapters::{LocalFilesystem, SassCompiler};
use baseliner_core::prelude::{PipelineOptions, PipelineService};

use crate::config::AppConfig;

/// Assemble a production pipeline: real filesystem, external `sass` binary.
pub(crate) fn pipeline(config: &AppConfig, force_demos: bool) -> PipelineService {
    let compiler = SassCompiler::new(&config.build.sass_bin)
        .with_style(&config.build.style)
        .with_load_path(config.build.load_path.clone());

    PipelineService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(compiler),
        config.layout(),
        PipelineOptions { force_demos },
    )
}

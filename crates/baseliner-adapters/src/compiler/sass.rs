//! External `sass` CLI invocation.
//!
//! The compiler is opaque to the pipeline: SCSS path in, CSS path out.
//! The call blocks until the process exits; a nonzero exit (or a spawn
//! failure) becomes `CompilerInvocationFailed` for that scale only.

use std::path::{Path, PathBuf};
use std::process::Command;

use baseliner_core::{
    application::{ApplicationError, ports::StyleCompiler},
    error::BaselinerResult,
};
use tracing::{debug, instrument};

/// Invokes the Dart Sass CLI (`sass <src>:<dest> --style=<style>`).
#[derive(Debug, Clone)]
pub struct SassCompiler {
    binary: String,
    style: String,
    load_path: Option<PathBuf>,
}

impl SassCompiler {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            style: "compressed".into(),
            load_path: None,
        }
    }

    /// Output style passed as `--style=<style>` (default `compressed`).
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Optional `--load-path` for resolving framework imports.
    pub fn with_load_path(mut self, load_path: Option<PathBuf>) -> Self {
        self.load_path = load_path;
        self
    }
}

impl Default for SassCompiler {
    fn default() -> Self {
        Self::new("sass")
    }
}

impl StyleCompiler for SassCompiler {
    #[instrument(skip_all, fields(scale = %scale, source = %source.display()))]
    fn compile(&self, scale: &str, source: &Path, destination: &Path) -> BaselinerResult<()> {
        let mut cmd = Command::new(&self.binary);
        if let Some(load_path) = &self.load_path {
            cmd.arg(format!("--load-path={}", load_path.display()));
        }
        cmd.arg(format!("{}:{}", source.display(), destination.display()));
        cmd.arg(format!("--style={}", self.style));

        debug!(?cmd, "invoking stylesheet compiler");
        let output = cmd
            .output()
            .map_err(|e| ApplicationError::CompilerInvocationFailed {
                scale: scale.to_string(),
                reason: format!("failed to run '{}': {}", self.binary, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ApplicationError::CompilerInvocationFailed {
                scale: scale.to_string(),
                reason: format!("{} ({})", stderr.trim(), output.status),
            }
            .into());
        }
        Ok(())
    }
}

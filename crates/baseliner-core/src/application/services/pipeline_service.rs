//! Pipeline service - per-scale artifact chain.
//!
//! For one scale the chain runs strictly in dependency order:
//!
//! 1. load + normalize the token source
//! 2. emit the SCSS partials (settings map, overrides, baseline styles)
//! 3. invoke the external stylesheet compiler (blocking)
//! 4. emit the demo page (respecting user templates and non-clobbering)
//!
//! The multi-scale plugin blob is refreshed separately — any scale change
//! invalidates it, so it always spans *all* known scales.
//!
//! A failure in one scale's chain never stops the others; callers get a
//! [`PassSummary`] and decide what the exit status should be.

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        layout::{PathLayout, ScaleSource, TOKEN_SOURCE_PREFIX},
        ports::{Filesystem, StyleCompiler},
    },
    bridge,
    domain::TypeScale,
    error::{BaselinerError, BaselinerResult},
    generate::{demo, overrides, plugin, settings, styles},
};

/// Caller-selected pipeline behaviour.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Overwrite existing generated demos even without a user template.
    pub force_demos: bool,
}

/// Outcome of one full pass over a set of scales.
#[derive(Debug, Default)]
pub struct PassSummary {
    pub completed: Vec<String>,
    pub failures: Vec<(String, BaselinerError)>,
}

impl PassSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Main pipeline orchestrator for a fixed path layout.
pub struct PipelineService {
    filesystem: Box<dyn Filesystem>,
    compiler: Box<dyn StyleCompiler>,
    layout: PathLayout,
    options: PipelineOptions,
}

impl PipelineService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        compiler: Box<dyn StyleCompiler>,
        layout: PathLayout,
        options: PipelineOptions,
    ) -> Self {
        Self {
            filesystem,
            compiler,
            layout,
            options,
        }
    }

    pub fn layout(&self) -> &PathLayout {
        &self.layout
    }

    pub fn filesystem(&self) -> &dyn Filesystem {
        self.filesystem.as_ref()
    }

    /// Enumerate token-source files matching the naming convention, in
    /// name order.  A missing config directory yields no scales (the
    /// watcher may legitimately start before the first source exists).
    pub fn discover_scales(&self) -> BaselinerResult<Vec<ScaleSource>> {
        if !self.filesystem.exists(&self.layout.config_dir) {
            warn!(dir = %self.layout.config_dir.display(), "config directory does not exist");
            return Ok(Vec::new());
        }

        let mut sources: Vec<ScaleSource> = self
            .filesystem
            .list_dir(&self.layout.config_dir)?
            .into_iter()
            .filter_map(|path| {
                let name = self.layout.scale_name_of(&path)?;
                Some(ScaleSource { name, path })
            })
            .collect();
        sources.sort_by(|a, b| a.name.cmp(&b.name));

        debug!(count = sources.len(), "discovered token sources");
        Ok(sources)
    }

    /// Load and normalize one scale's token source.
    pub fn load_scale(&self, source: &ScaleSource) -> BaselinerResult<TypeScale> {
        if !self.filesystem.exists(&source.path) {
            return Err(ApplicationError::MissingSourceFile {
                path: source.path.clone(),
                required: true,
            }
            .into());
        }
        let text = self.filesystem.read_to_string(&source.path)?;
        Ok(TypeScale::parse(&source.name, &text)?)
    }

    /// Run one scale's full artifact chain.
    #[instrument(skip_all, fields(scale = %source.name))]
    pub fn build_scale(&self, source: &ScaleSource, now: DateTime<Utc>) -> BaselinerResult<()> {
        info!(source = %source.path.display(), "building scale");
        let scale = self.load_scale(source)?;
        let timestamp = now.to_rfc3339();
        let source_label = source.path.display().to_string();

        // SCSS partials
        let style_dir = self.layout.style_dir(&scale.name);
        self.filesystem.create_dir_all(&style_dir)?;
        self.filesystem.write_file(
            &self.layout.settings_partial(&scale.name),
            &settings::emit(&scale),
        )?;
        self.filesystem.write_file(
            &self.layout.overrides_partial(&scale.name),
            &overrides::emit(&scale, &source_label, &timestamp),
        )?;
        self.filesystem.write_file(
            &self.layout.styles_partial(&scale.name),
            &styles::emit(&scale, &timestamp),
        )?;

        // Compile main.scss → <css_root>/<scale>.css
        let main_scss = self.layout.main_scss(&scale.name);
        if !self.filesystem.exists(&main_scss) {
            return Err(ApplicationError::MissingSourceFile {
                path: main_scss,
                required: true,
            }
            .into());
        }
        self.filesystem.create_dir_all(&self.layout.css_root)?;
        self.compiler
            .compile(&scale.name, &main_scss, &self.layout.css_file(&scale.name))?;

        self.emit_demo(&scale)?;

        info!("scale built");
        Ok(())
    }

    /// Refresh the multi-scale plugin data blob and splice it into the
    /// host file.  Scales that fail to load are skipped with a warning —
    /// their own chains already reported the failure.
    #[instrument(skip_all)]
    pub fn refresh_plugin_blob(&self, sources: &[ScaleSource]) -> BaselinerResult<()> {
        let mut scales = Vec::with_capacity(sources.len());
        for source in sources {
            match self.load_scale(source) {
                Ok(scale) => scales.push(scale),
                Err(e) => {
                    warn!(scale = %source.name, error = %e, "skipping scale in plugin blob");
                }
            }
        }

        let host_path = &self.layout.plugin_host;
        if !self.filesystem.exists(host_path) {
            return Err(ApplicationError::MissingSourceFile {
                path: host_path.clone(),
                required: true,
            }
            .into());
        }

        let host = self.filesystem.read_to_string(host_path)?;
        let spliced = bridge::splice(&host, &plugin::emit_blob(&scales))?;
        if spliced != host {
            self.filesystem.write_file(host_path, &spliced)?;
            info!(host = %host_path.display(), scales = scales.len(), "plugin tokens updated");
        } else {
            debug!("plugin blob unchanged");
        }
        Ok(())
    }

    /// One full pass: every scale's chain, then the plugin blob.
    ///
    /// Failures are contained per scale; the blob refresh failure (if any)
    /// is reported under the synthetic name `plugin-blob`.
    pub fn build_all(&self, sources: &[ScaleSource], now: DateTime<Utc>) -> PassSummary {
        let mut summary = PassSummary::default();
        if sources.is_empty() {
            warn!(
                "no {TOKEN_SOURCE_PREFIX}*.json files found in {}",
                self.layout.config_dir.display()
            );
            return summary;
        }

        for source in sources {
            match self.build_scale(source, now) {
                Ok(()) => summary.completed.push(source.name.clone()),
                Err(e) => {
                    warn!(scale = %source.name, error = %e, "scale chain failed");
                    summary.failures.push((source.name.clone(), e));
                }
            }
        }

        if let Err(e) = self.refresh_plugin_blob(sources) {
            warn!(error = %e, "plugin blob refresh failed");
            summary.failures.push(("plugin-blob".into(), e));
        }

        summary
    }

    /// Emit the demo page for a scale.
    ///
    /// A user template wins verbatim; otherwise an existing generated demo
    /// is left alone unless `force_demos` is set.
    fn emit_demo(&self, scale: &TypeScale) -> BaselinerResult<()> {
        let template_path = self.layout.demo_template(&scale.name);
        let demo_path = self.layout.demo_file(&scale.name);

        let content = if self.filesystem.exists(&template_path) {
            self.filesystem.read_to_string(&template_path)?
        } else if self.filesystem.exists(&demo_path) && !self.options.force_demos {
            debug!(demo = %demo_path.display(), "demo exists, skipping overwrite");
            return Ok(());
        } else {
            demo::emit(scale, &self.layout.css_href(&scale.name))
        };

        self.filesystem.create_dir_all(&self.layout.demos_root)?;
        self.filesystem.write_file(&demo_path, &content)?;
        Ok(())
    }
}

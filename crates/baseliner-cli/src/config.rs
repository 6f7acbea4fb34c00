//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the [`PathLayout`]
//! derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. `--config <FILE>` (must exist — a missing explicit file is an error)
//! 2. `baseliner.toml` in the current directory
//! 3. The platform config dir (`~/.config/baseliner/config.toml` on Linux)
//! 4. Built-in defaults (always present)
//!
//! Every key is optional in the file; unset keys fall back to the default.

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use baseliner_core::prelude::PathLayout;

/// File name looked for in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "baseliner.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Directory roots the pipeline reads from and writes to.
    pub paths: PathsConfig,
    /// Stylesheet compiler settings.
    pub build: BuildConfig,
    /// Watch-mode timing.
    pub watch: WatchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub config_dir: PathBuf,
    pub styles_root: PathBuf,
    pub css_root: PathBuf,
    pub demos_root: PathBuf,
    pub plugin_host: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            config_dir: "config".into(),
            styles_root: "src".into(),
            css_root: "dist/css".into(),
            demos_root: "dist/demos".into(),
            plugin_host: "figma-plugin/ui.html".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Stylesheet compiler binary name or path.
    pub sass_bin: String,
    /// Output style passed to the compiler (`compressed` or `expanded`).
    pub style: String,
    /// Optional `--load-path` for resolving framework imports.
    pub load_path: Option<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            sass_bin: "sass".into(),
            style: "compressed".into(),
            load_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatchConfig {
    /// Poll interval of the file watcher, in milliseconds.
    pub poll_interval_ms: u64,
    /// Debounce window: events closer together than this coalesce into one
    /// rebuild pass.
    pub quiet_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
            quiet_ms: 200,
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`, or `None`
    /// to probe the default locations.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        if let Some(path) = config_file {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read config file {}", path.display()))?;
            return Self::parse(&text)
                .with_context(|| format!("invalid config file {}", path.display()));
        }

        for candidate in [PathBuf::from(LOCAL_CONFIG_FILE), Self::config_path()] {
            if candidate.exists() {
                let text = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("cannot read config file {}", candidate.display()))?;
                return Self::parse(&text)
                    .with_context(|| format!("invalid config file {}", candidate.display()));
            }
        }

        Ok(Self::default())
    }

    fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `baseliner.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "baseliner", "baseliner")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The path layout the pipeline operates on.
    pub fn layout(&self) -> PathLayout {
        PathLayout {
            config_dir: self.paths.config_dir.clone(),
            styles_root: self.paths.styles_root.clone(),
            css_root: self.paths.css_root.clone(),
            demos_root: self.paths.demos_root.clone(),
            plugin_host: self.paths.plugin_host.clone(),
        }
    }
}

//! Watch service - change-aware rebuild orchestration.
//!
//! Single-threaded and event-driven: one loop pulls [`ChangeEvent`]s from
//! a channel (fed by the polling watcher adapter in production, or by a
//! test directly), coalesces bursts, decides the minimal rebuild set, and
//! drives the pipeline.  Each pass runs to completion before the next
//! event batch is read, so no locking is needed anywhere.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::mpsc::{Receiver, RecvTimeoutError},
    time::Duration,
};

use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{layout::PathLayout, services::PipelineService},
    error::BaselinerResult,
};

/// A file-system change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub path: PathBuf,
    pub kind: ChangeKind,
}

/// Add events trigger the same rebuild as modifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Modified,
}

/// What one change event requires of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RebuildPlan {
    /// Nothing to do (no-op save, generated output, unreadable file).
    Skip,
    /// Rebuild one scale's chain, then refresh the plugin blob.
    Scale(String),
    /// Rebuild every scale's chain — non-token files are not tracked at
    /// finer granularity; simplicity over precision with this few files.
    All,
}

/// Process-wide watch state: content hashes of watched files.
///
/// Created empty at watcher start, never persisted.  Owned by the watch
/// service — no ambient globals — so the decision logic is unit-testable
/// with a fake event source.
#[derive(Debug, Default)]
pub struct OrchestratorState {
    hashes: HashMap<PathBuf, [u8; 32]>,
}

impl OrchestratorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `content` for `path`; returns false when the content hash is
    /// unchanged (a save-without-modification, absorbed as a no-op).
    pub fn note_content(&mut self, path: &Path, content: &[u8]) -> bool {
        let hash: [u8; 32] = Sha256::digest(content).into();
        match self.hashes.insert(path.to_path_buf(), hash) {
            Some(previous) => previous != hash,
            None => true,
        }
    }

    /// Decide the rebuild consequence of one event.
    ///
    /// `content` is the file's bytes at decision time, or `None` when the
    /// file could not be read (treated as a no-op, like the original
    /// unreadable-file behaviour of a mid-save race).
    pub fn plan(
        &mut self,
        layout: &PathLayout,
        event: &ChangeEvent,
        content: Option<&[u8]>,
    ) -> RebuildPlan {
        if layout.is_generated_output(&event.path) {
            return RebuildPlan::Skip;
        }
        let Some(content) = content else {
            return RebuildPlan::Skip;
        };
        if !self.note_content(&event.path, content) {
            debug!(path = %event.path.display(), "content unchanged, skipping");
            return RebuildPlan::Skip;
        }
        match layout.scale_name_of(&event.path) {
            Some(scale) => RebuildPlan::Scale(scale),
            None => RebuildPlan::All,
        }
    }
}

/// Counters reported when the watch loop ends (the event source closed).
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WatchStats {
    /// Batches that triggered at least one rebuild.
    pub passes: usize,
    /// Events absorbed without any rebuild.
    pub skipped: usize,
    /// Scale chains (or blob refreshes) that failed across all passes.
    pub failures: usize,
}

/// The watch-mode orchestrator.
pub struct WatchService {
    pipeline: PipelineService,
    state: OrchestratorState,
    quiet: Duration,
}

impl WatchService {
    /// `quiet` is the debounce window: a change is acted on only once no
    /// further events have arrived for this long, coalescing multi-write
    /// saves into one pass.
    pub fn new(pipeline: PipelineService, quiet: Duration) -> Self {
        Self {
            pipeline,
            state: OrchestratorState::new(),
            quiet,
        }
    }

    pub fn pipeline(&self) -> &PipelineService {
        &self.pipeline
    }

    /// Run the event loop until the sender side of `events` is dropped.
    ///
    /// Rebuild failures are logged and counted, never propagated — the
    /// watcher keeps watching after a failed pass.
    pub fn run(&mut self, events: Receiver<ChangeEvent>) -> BaselinerResult<WatchStats> {
        let mut stats = WatchStats::default();
        loop {
            let first = match events.recv() {
                Ok(event) => event,
                Err(_) => break, // event source closed
            };
            let mut batch = vec![first];
            loop {
                match events.recv_timeout(self.quiet) {
                    Ok(event) => batch.push(event),
                    Err(RecvTimeoutError::Timeout) => break,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            self.process_batch(batch, &mut stats);
        }
        info!(passes = stats.passes, skipped = stats.skipped, "watcher stopped");
        Ok(stats)
    }

    /// Decide and execute the minimal rebuild for one coalesced batch.
    #[instrument(skip_all, fields(events = batch.len()))]
    fn process_batch(&mut self, batch: Vec<ChangeEvent>, stats: &mut WatchStats) {
        let layout = self.pipeline.layout().clone();

        let mut rebuild_all = false;
        let mut scales: Vec<String> = Vec::new();
        for event in &batch {
            let content = self
                .pipeline
                .filesystem()
                .read_to_string(&event.path)
                .ok()
                .map(String::into_bytes);
            match self.state.plan(&layout, event, content.as_deref()) {
                RebuildPlan::Skip => stats.skipped += 1,
                RebuildPlan::All => rebuild_all = true,
                RebuildPlan::Scale(name) => {
                    if !scales.contains(&name) {
                        scales.push(name);
                    }
                }
            }
        }

        if !rebuild_all && scales.is_empty() {
            return;
        }
        stats.passes += 1;

        // Re-enumerate on every pass: an add event may have introduced a
        // brand-new scale.
        let sources = match self.pipeline.discover_scales() {
            Ok(sources) => sources,
            Err(e) => {
                warn!(error = %e, "scale discovery failed, pass abandoned");
                stats.failures += 1;
                return;
            }
        };

        let now = Utc::now();
        if rebuild_all {
            info!("non-token change, rebuilding all scales");
            let summary = self.pipeline.build_all(&sources, now);
            stats.failures += summary.failures.len();
            return;
        }

        info!(scales = ?scales, "token change, rebuilding affected scales");
        for name in &scales {
            match sources.iter().find(|s| &s.name == name) {
                Some(source) => {
                    if let Err(e) = self.pipeline.build_scale(source, now) {
                        warn!(scale = %name, error = %e, "scale chain failed");
                        stats.failures += 1;
                    }
                }
                None => warn!(scale = %name, "token source disappeared before rebuild"),
            }
        }
        // The blob is one multi-scale document: any scale change
        // invalidates it.
        if let Err(e) = self.pipeline.refresh_plugin_blob(&sources) {
            warn!(error = %e, "plugin blob refresh failed");
            stats.failures += 1;
        }
    }
}

//! Polling file watcher built on `notify`.
//!
//! Polling is deliberate: it behaves identically across filesystems that
//! do not reliably deliver native change events (network mounts, some
//! containers).  Raw notify events are mapped to the core's
//! [`ChangeEvent`] and pushed into a plain mpsc channel; the watch
//! service owns all debouncing and hash-based no-op suppression.

use std::{
    path::PathBuf,
    sync::mpsc::{self, Receiver},
    time::Duration,
};

use notify::{Config, Event, EventKind, PollWatcher, RecursiveMode, Watcher};
use tracing::{debug, warn};

use baseliner_core::{
    application::{ApplicationError, services::{ChangeEvent, ChangeKind}},
    error::BaselinerResult,
};

/// Owns the running `notify` poll watcher.  Dropping it stops the polling
/// thread, which closes the event channel and ends the watch loop.
pub struct PollingWatcher {
    _watcher: PollWatcher,
}

impl PollingWatcher {
    /// Start polling `paths` (recursively) every `interval`, delivering
    /// create/modify events on the returned channel.
    pub fn spawn(
        paths: &[PathBuf],
        interval: Duration,
    ) -> BaselinerResult<(Self, Receiver<ChangeEvent>)> {
        let (tx, rx) = mpsc::channel();

        let handler = move |result: Result<Event, notify::Error>| match result {
            Ok(event) => {
                let kind = match event.kind {
                    EventKind::Create(_) => Some(ChangeKind::Created),
                    EventKind::Modify(_) => Some(ChangeKind::Modified),
                    _ => None,
                };
                if let Some(kind) = kind {
                    for path in event.paths {
                        debug!(path = %path.display(), ?kind, "change observed");
                        // Receiver gone means the watch loop ended; nothing
                        // left to notify.
                        let _ = tx.send(ChangeEvent { path, kind });
                    }
                }
            }
            Err(e) => warn!(error = %e, "watcher error"),
        };

        let config = Config::default()
            .with_poll_interval(interval)
            .with_compare_contents(true);
        let mut watcher = PollWatcher::new(handler, config).map_err(map_notify_error)?;

        for path in paths {
            watcher
                .watch(path, RecursiveMode::Recursive)
                .map_err(map_notify_error)?;
        }

        Ok((Self { _watcher: watcher }, rx))
    }
}

fn map_notify_error(e: notify::Error) -> baseliner_core::error::BaselinerError {
    let path = e
        .paths
        .first()
        .cloned()
        .unwrap_or_else(|| PathBuf::from("<watcher>"));
    ApplicationError::FilesystemError {
        path,
        reason: format!("watcher setup failed: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn delivers_modify_events() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("typography-config-docs.json");
        std::fs::write(&file, "{}").unwrap();

        let (_watcher, rx) =
            PollingWatcher::spawn(&[dir.path().to_path_buf()], Duration::from_millis(50)).unwrap();

        // Give the first poll a chance to snapshot, then modify.
        std::thread::sleep(Duration::from_millis(200));
        std::fs::write(&file, r#"{"changed": true}"#).unwrap();

        let event = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("expected a change event");
        assert!(event.path.ends_with("typography-config-docs.json"));
    }
}

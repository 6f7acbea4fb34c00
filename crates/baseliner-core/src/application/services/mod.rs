//! Application services.

pub mod pipeline_service;
pub mod watch_service;

pub use pipeline_service::{PassSummary, PipelineOptions, PipelineService};
pub use watch_service::{ChangeEvent, ChangeKind, OrchestratorState, RebuildPlan, WatchService, WatchStats};

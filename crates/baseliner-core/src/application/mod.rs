//! Application layer for baseliner.
//!
//! This layer contains:
//! - **Services**: use-case orchestration (PipelineService, WatchService)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Layout**: the fixed path conventions of the fan-out topology
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! token-model rules itself. Those live in `crate::domain`.

pub mod error;
pub mod layout;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{PassSummary, PipelineOptions, PipelineService, WatchService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, StyleCompiler};

pub use error::ApplicationError;
pub use layout::{PathLayout, ScaleSource};

//! Baseliner Core - token pipeline in a hexagonal layout.
//!
//! This crate provides the domain and application layers for the
//! baseliner design-token build pipeline, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          baseliner-cli (CLI)            │
//! │      (Implements Driving Ports)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (PipelineService, WatchService)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │     (Driven: Filesystem, Compiler)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    baseliner-adapters (Infrastructure)  │
//! │  (LocalFilesystem, SassCompiler, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (TypeScale, TypeToken, units, fonts)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Data flow
//!
//! Token source → value normalizer → artifact generators →
//! (SCSS partials → compiler → CSS, demo page) and
//! (plugin data blob → bridge splice).  The watch service sits above all
//! of it, re-triggering the minimal chain on change.

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Pure artifact generators
pub mod generate;

// Plugin-bridge splice
pub mod bridge;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        PassSummary, PathLayout, PipelineOptions, PipelineService, ScaleSource, WatchService,
        ports::{Filesystem, StyleCompiler},
        services::{ChangeEvent, ChangeKind, OrchestratorState, RebuildPlan, WatchStats},
    };
    pub use crate::domain::{FontWeight, Scalar, TypeScale, TypeToken};
    pub use crate::error::{BaselinerError, BaselinerResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

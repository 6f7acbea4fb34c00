//! Infrastructure adapters for baseliner.
//!
//! This crate implements the ports defined in
//! `baseliner-core::application::ports`.  It contains all external
//! dependencies and I/O operations: the real filesystem, the external
//! `sass` process, and the polling file watcher — plus in-memory doubles
//! for testing the pipeline without any of them.

pub mod compiler;
pub mod filesystem;
pub mod watcher;

// Re-export commonly used adapters
pub use compiler::{FakeCompiler, SassCompiler};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use watcher::PollingWatcher;

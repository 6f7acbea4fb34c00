//! Application ports (traits) for external dependencies.
//!
//! The pipeline needs two things from the outside world: a filesystem and
//! a stylesheet compiler.  `baseliner-adapters` implements both for
//! production (`LocalFilesystem`, `SassCompiler`) and for tests
//! (`MemoryFilesystem`, `FakeCompiler`), which is what keeps the whole
//! orchestration unit-testable without touching disk or spawning `sass`.

use std::path::{Path, PathBuf};

use crate::error::BaselinerResult;

/// Port for filesystem operations.
pub trait Filesystem: Send + Sync {
    /// Read an entire file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> BaselinerResult<String>;

    /// Write content to a file, creating it if necessary.
    fn write_file(&self, path: &Path, content: &str) -> BaselinerResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> BaselinerResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// List the entries of a directory (non-recursive, unordered).
    fn list_dir(&self, path: &Path) -> BaselinerResult<Vec<PathBuf>>;
}

/// Port for the external stylesheet compiler.
///
/// The compiler is opaque: SCSS text in, CSS text (or failure) out.  The
/// invocation blocks until the compiler finishes.
pub trait StyleCompiler: Send + Sync {
    /// Compile `source` into `destination`.
    fn compile(&self, scale: &str, source: &Path, destination: &Path) -> BaselinerResult<()>;
}

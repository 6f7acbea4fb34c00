//! In-memory compiler stand-in for tests.
//!
//! "Compiles" by copying the SCSS source into the destination behind a
//! comment header, via a shared [`MemoryFilesystem`].  Records every
//! invocation so tests can assert the orchestrator rebuilt exactly the
//! scales it should have.

use std::{
    collections::HashSet,
    path::Path,
    sync::{Arc, Mutex},
};

use baseliner_core::{
    application::{ApplicationError, ports::{Filesystem, StyleCompiler}},
    error::BaselinerResult,
};

use crate::filesystem::MemoryFilesystem;

/// Test double for the external stylesheet compiler.
#[derive(Debug, Clone)]
pub struct FakeCompiler {
    filesystem: MemoryFilesystem,
    invocations: Arc<Mutex<Vec<String>>>,
    failing: Arc<Mutex<HashSet<String>>>,
}

impl FakeCompiler {
    pub fn new(filesystem: MemoryFilesystem) -> Self {
        Self {
            filesystem,
            invocations: Arc::new(Mutex::new(Vec::new())),
            failing: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Make compilation fail for one scale (simulates a sass error).
    pub fn fail_for(&self, scale: &str) {
        self.failing.lock().unwrap().insert(scale.to_string());
    }

    /// Scale names compiled so far, in invocation order.
    pub fn invocations(&self) -> Vec<String> {
        self.invocations.lock().unwrap().clone()
    }
}

impl StyleCompiler for FakeCompiler {
    fn compile(&self, scale: &str, source: &Path, destination: &Path) -> BaselinerResult<()> {
        self.invocations.lock().unwrap().push(scale.to_string());

        if self.failing.lock().unwrap().contains(scale) {
            return Err(ApplicationError::CompilerInvocationFailed {
                scale: scale.to_string(),
                reason: "simulated compiler failure".into(),
            }
            .into());
        }

        let scss = self.filesystem.read_to_string(source)?;
        if let Some(parent) = destination.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(
            destination,
            &format!("/* compiled from {} */\n{scss}", source.display()),
        )
    }
}

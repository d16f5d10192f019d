//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`; never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::Result;
use udtask_common::EndpointAuthorization;

use crate::domain::{InvocationSpec, PathKind, TaskResult};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run the invocation to completion and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or awaited. A
    /// non-zero exit is not an error at this level.
    async fn run(&self, invocation: &InvocationSpec) -> Result<Output>;
}

// ── Filesystem and Path Ports ─────────────────────────────────────────────────

/// Abstracts filesystem stat calls.
pub trait FileProbe {
    /// Stat `path`, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the path cannot be stat'ed.
    fn kind(&self, path: &Path) -> std::io::Result<PathKind>;
}

/// Abstracts executable lookup on the search path.
pub trait PathLookup {
    /// Full path of `name` on the search path, if found.
    fn which(&self, name: &str) -> Option<PathBuf>;
}

// ── Host Binding Port ─────────────────────────────────────────────────────────

/// Read-only view of the pipeline host: task inputs, variables, endpoints.
///
/// Empty values are reported as `None`.
pub trait TaskHost {
    /// Value of a task input.
    fn input(&self, name: &str) -> Option<String>;
    /// Value of a pipeline variable (or environment variable such as `JAVA_HOME`).
    fn variable(&self, name: &str) -> Option<String>;
    /// URL of a service endpoint.
    fn endpoint_url(&self, endpoint: &str) -> Option<String>;
    /// Authorization record of a service endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the record exists but cannot be parsed.
    fn endpoint_authorization(&self, endpoint: &str) -> Result<Option<EndpointAuthorization>>;
}

// ── Reporting Ports ───────────────────────────────────────────────────────────

/// The pipeline's result and issue channel.
pub trait PipelineReporter {
    /// Register a value the host must mask in all log output.
    fn set_secret(&self, value: &str);
    /// Report an error issue.
    fn error(&self, message: &str);
    /// Set the final task result.
    fn complete(&self, result: TaskResult, message: Option<&str>);
}

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait; no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

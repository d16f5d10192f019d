//! Application context: unified state passed to every command handler.
//!
//! Generic over the ports so command handlers run unchanged against the
//! production infrastructure or test fakes; the defaults are the production
//! types.

use std::path::Path;

use anyhow::Result;

use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::fs::LocalFs;
use crate::infra::host::HostBinding;
use crate::infra::lookup::WhichLookup;
use crate::output::{OutputContext, VsoReporter};

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags<'a> {
    /// Output rendering options.
    pub output: OutputFlags,
    /// YAML inputs file replacing the agent environment.
    pub inputs_file: Option<&'a Path>,
    /// Always pass `--verbose` to udclient.
    pub force_verbose: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext<
    H = HostBinding,
    F = LocalFs,
    L = WhichLookup,
    R = TokioCommandRunner,
    P = VsoReporter,
> {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Task inputs, variables and endpoints.
    pub host: H,
    /// Filesystem stat calls.
    pub fs: F,
    /// Search-path lookup.
    pub lookup: L,
    /// udclient process execution.
    pub runner: R,
    /// Pipeline result and issue channel.
    pub pipeline: P,
    /// Always pass `--verbose` to udclient.
    pub force_verbose: bool,
}

impl AppContext {
    /// Construct the production `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs file cannot be loaded.
    pub fn new(flags: &AppFlags<'_>) -> Result<Self> {
        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            host: HostBinding::select(flags.inputs_file)?,
            fs: LocalFs,
            lookup: WhichLookup,
            runner: TokioCommandRunner,
            pipeline: VsoReporter,
            force_verbose: flags.force_verbose,
        })
    }
}

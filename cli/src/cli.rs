//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, OutputFlags};
use crate::commands;
use crate::output::VsoReporter;

/// Push component versions to IBM UrbanCode Deploy from a build pipeline
#[derive(Parser)]
#[allow(clippy::struct_excessive_bools)] // independent global switches
#[command(
    name = "udtask",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Read task inputs from a YAML file instead of the agent environment
    #[arg(long, global = true, env = "UDTASK_INPUTS", value_name = "FILE")]
    pub inputs: Option<PathBuf>,

    /// Pass --verbose to every udclient invocation
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (also disabled by a non-empty NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the udclient command given in udClientCommandArgs
    Run,

    /// Create a component version, upload files, link the build, apply a status
    PushVersion,

    /// Show where udclient, its jar, and java were found
    Locate,
}

impl Command {
    /// Whether the command reports its result on the pipeline channel.
    fn reports_result(&self) -> bool {
        !matches!(self, Self::Locate)
    }
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the task fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            inputs,
            verbose,
            no_color,
            quiet,
            command,
            ..
        } = self;
        let app = match AppContext::new(&AppFlags {
            output: OutputFlags { no_color, quiet },
            inputs_file: inputs.as_deref(),
            force_verbose: verbose,
        }) {
            Ok(app) => app,
            Err(e) if command.reports_result() => return commands::finish(&VsoReporter, Err(e)),
            Err(e) => return Err(e),
        };

        match command {
            Command::Run => commands::finish(&app.pipeline, commands::run::run(&app).await),
            Command::PushVersion => {
                commands::finish(&app.pipeline, commands::push::run(&app).await)
            }
            Command::Locate => commands::locate::run(&app),
        }
    }
}

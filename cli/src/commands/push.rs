//! `udtask push-version`: create and annotate a component version.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::{CommandRunner, FileProbe, PathLookup, PipelineReporter, TaskHost};
use crate::application::services::context::{load_client_settings, load_component_context};
use crate::application::services::publish::publish_version;
use crate::application::services::udclient::UdClient;
use crate::output::TerminalReporter;

/// Push a new component version for the triggering build.
///
/// Every input and build variable is validated before the first udclient
/// process starts.
///
/// # Errors
///
/// Returns an error when configuration is incomplete, udclient cannot be
/// found, or any publish step fails.
pub async fn run<H, F, L, R, P>(app: &AppContext<H, F, L, R, P>) -> Result<()>
where
    H: TaskHost,
    F: FileProbe,
    L: PathLookup,
    R: CommandRunner,
    P: PipelineReporter,
{
    let settings = load_client_settings(&app.host, &app.fs, &app.lookup, app.force_verbose)?;
    app.pipeline.set_secret(settings.endpoint.credential.secret());
    let ctx = load_component_context(&app.host)?;

    let client = UdClient::new(&app.runner, settings);
    let reporter = TerminalReporter::new(&app.output);
    let report = publish_version(&client, &app.fs, &ctx, &reporter).await?;

    app.output.kv("component", &ctx.component_id);
    app.output.kv("version", &ctx.version_name);
    app.output.kv("steps", &report.completed.len().to_string());
    Ok(())
}

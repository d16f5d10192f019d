//! `udtask run`: run one udclient command.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::{CommandRunner, FileProbe, PathLookup, PipelineReporter, TaskHost};
use crate::application::services::context::{load_client_settings, load_command_args};
use crate::application::services::udclient::UdClient;

/// Run the command given in `udClientCommandArgs` against the configured
/// server.
///
/// # Errors
///
/// Returns an error when configuration is incomplete, udclient cannot be
/// found, or the command fails.
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
    let command = load_command_args(&app.host)?;

    let client = UdClient::new(&app.runner, settings);
    client.invoke_checked(command).await?;
    Ok(())
}

//! `udtask locate`: show how udclient would be launched.

use anyhow::Result;
use udtask_common::inputs;

use crate::app::AppContext;
use crate::application::ports::{FileProbe, PathLookup, TaskHost};
use crate::application::services::context::locate_tool;

/// Resolve udclient, its jar, and java without contacting the server.
///
/// # Errors
///
/// Returns an error when udclient or java cannot be found.
pub fn run<H, F, L, R, P>(app: &AppContext<H, F, L, R, P>) -> Result<()>
where
    H: TaskHost,
    F: FileProbe,
    L: PathLookup,
{
    let server_url = app
        .host
        .input(inputs::SERVER_ENDPOINT)
        .and_then(|endpoint| app.host.endpoint_url(&endpoint));
    let (location, runtime) = locate_tool(&app.host, &app.fs, &app.lookup, server_url.as_deref())?;

    app.output
        .kv("udclient", &location.executable.display().to_string());
    match &location.artifact {
        Some(artifact) => app.output.kv("artifact", &artifact.display().to_string()),
        None => app.output.kv("artifact", "(launcher runs directly)"),
    }
    if let Some(runtime) = &runtime {
        app.output.kv("java", &runtime.binary.display().to_string());
    }
    Ok(())
}

//! Application service: locate udclient and its packaged artifact.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use udtask_common::udclient;

use crate::application::ports::{FileProbe, PathLookup};
use crate::domain::TaskError;
use crate::domain::tool::{self, PathKind, ToolLocation};

/// Where to look for udclient.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocateRequest<'a> {
    /// The `udClientLocation` input.
    pub override_path: Option<&'a str>,
    /// Value of `udClientLocation` that means "not overridden".
    pub sentinel: Option<&'a str>,
    /// Run the launcher directly instead of resolving the packaged artifact.
    pub use_launcher: bool,
    /// Server URL, used to point at the udclient download page.
    pub server_url: Option<&'a str>,
}

/// Locate udclient and, unless the launcher is used directly, its artifact.
///
/// # Errors
///
/// Returns [`TaskError::ToolNotFound`] when the override is not accessible,
/// the PATH lookup fails, or the artifact cannot be resolved from the
/// located path.
pub fn locate_udclient(
    request: &LocateRequest<'_>,
    fs: &impl FileProbe,
    lookup: &impl PathLookup,
) -> Result<ToolLocation> {
    let path = entry_point(request, fs, lookup)?;

    if request.use_launcher {
        let executable = launcher_path(&path, fs)?;
        tracing::debug!(executable = %executable.display(), "running udclient launcher directly");
        return Ok(ToolLocation {
            executable,
            artifact: None,
        });
    }

    let artifact = resolve_artifact(&path, fs)?;
    verify_artifact(&artifact, fs)?;
    tracing::debug!(artifact = %artifact.display(), "successfully resolved udclient.jar");

    let executable = match fs.kind(&path) {
        Ok(PathKind::Directory) => path.join(tool::platform_launcher()),
        _ => path,
    };
    Ok(ToolLocation {
        executable,
        artifact: Some(artifact),
    })
}

fn entry_point(
    request: &LocateRequest<'_>,
    fs: &impl FileProbe,
    lookup: &impl PathLookup,
) -> Result<PathBuf> {
    match request.override_path.filter(|p| Some(*p) != request.sentinel) {
        Some(location) => {
            tracing::debug!(location, "udclient location specified explicitly by task");
            let path = PathBuf::from(location);
            fs.kind(&path).map_err(|e| {
                TaskError::tool_not_found(
                    format!("udclient location: {location} is not accessible: {e}"),
                    Some(path.clone()),
                )
            })?;
            Ok(path)
        }
        None => {
            let Some(path) = lookup.which(udclient::LAUNCHER) else {
                let download = request
                    .server_url
                    .map_or_else(|| "the server's /#tools page".to_string(), |u| format!("{u}/#tools"));
                return Err(TaskError::tool_not_found(
                    format!(
                        "udclient location is neither specified explicitly nor found in the PATH. \
                         Install the udclient from {download} and specify the install location \
                         in the task or add it to the PATH on the build agent machine."
                    ),
                    None,
                )
                .into());
            };
            tracing::debug!(path = %path.display(), "udclient location not specified explicitly, using PATH");
            Ok(path)
        }
    }
}

/// Map a located udclient path to its packaged artifact.
///
/// # Errors
///
/// Returns [`TaskError::ToolNotFound`] naming `path` when it cannot be
/// stat'ed or does not match a known layout.
pub fn resolve_artifact(path: &Path, fs: &impl FileProbe) -> Result<PathBuf> {
    tracing::debug!(path = %path.display(), "resolving udclient.jar");
    let kind = fs.kind(path).map_err(|e| {
        TaskError::tool_not_found(
            format!("unable to resolve udclient.jar from udClientPath: {} {e}", path.display()),
            Some(path.to_path_buf()),
        )
    })?;
    tool::artifact_for(path, kind).ok_or_else(|| {
        TaskError::tool_not_found(
            format!("unable to resolve udclient.jar from udClientPath: {}", path.display()),
            Some(path.to_path_buf()),
        )
        .into()
    })
}

fn verify_artifact(artifact: &Path, fs: &impl FileProbe) -> Result<()> {
    match fs.kind(artifact) {
        Ok(PathKind::File) => Ok(()),
        Ok(_) => Err(TaskError::tool_not_found(
            format!("resolved udclient.jar: {} is not a file.", artifact.display()),
            Some(artifact.to_path_buf()),
        )
        .into()),
        Err(e) => Err(TaskError::tool_not_found(
            format!("resolved udclient.jar: {} is not a file. {e}", artifact.display()),
            Some(artifact.to_path_buf()),
        )
        .into()),
    }
}

fn launcher_path(path: &Path, fs: &impl FileProbe) -> Result<PathBuf> {
    match fs.kind(path) {
        Ok(PathKind::File) => Ok(path.to_path_buf()),
        Ok(PathKind::Directory) => {
            let launcher = path.join(tool::platform_launcher());
            match fs.kind(&launcher) {
                Ok(PathKind::File) => Ok(launcher),
                _ => Err(TaskError::tool_not_found(
                    format!("udclient launcher: {} is not a file.", launcher.display()),
                    Some(launcher),
                )
                .into()),
            }
        }
        Ok(PathKind::Other) | Err(_) => Err(TaskError::tool_not_found(
            format!("udclient launcher: {} is not a file.", path.display()),
            Some(path.to_path_buf()),
        )
        .into()),
    }
}

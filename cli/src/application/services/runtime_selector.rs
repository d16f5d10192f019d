//! Application service: pick the java runtime that loads udclient.jar.

use std::path::PathBuf;

use anyhow::Result;
use udtask_common::udclient;

use crate::application::ports::PathLookup;
use crate::domain::TaskError;
use crate::domain::tool::{self, Runtime};

/// Select the java runtime: `JAVA_HOME` first, then the PATH.
///
/// # Errors
///
/// Returns [`TaskError::ToolNotFound`] when `JAVA_HOME` is unset and no
/// `java` is on the PATH.
pub fn select_runtime(java_home: Option<&str>, lookup: &impl PathLookup) -> Result<Runtime> {
    if let Some(home) = java_home.filter(|h| !h.is_empty()) {
        tracing::debug!(java_home = home, "using java from JAVA_HOME environment variable");
        let home = PathBuf::from(home);
        return Ok(Runtime {
            binary: tool::runtime_binary(&home),
            home: Some(home),
        });
    }

    tracing::debug!("JAVA_HOME environment variable is undefined, using java from PATH");
    let binary = lookup.which(udclient::RUNTIME).ok_or_else(|| {
        TaskError::tool_not_found(
            "java is required to run udclient.jar: set JAVA_HOME or add java to the PATH",
            None,
        )
    })?;
    tracing::debug!(java = %binary.display(), "java location");
    Ok(Runtime { binary, home: None })
}

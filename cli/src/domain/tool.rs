//! udclient on-disk layout rules.
//!
//! udclient ships as three siblings sharing a base name:
//!
//! ```text
//! udclient      shell launcher
//! udclient.cmd  windows launcher
//! udclient.jar  packaged artifact both launchers call into
//! ```
//!
//! Everything here works on path names only; callers stat the filesystem.

use std::path::{Path, PathBuf};

use udtask_common::udclient;

/// What a path turned out to be when it was stat'ed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
    Other,
}

/// Where udclient lives.
///
/// `artifact` is set only when the executable is a launcher that must be
/// bypassed by running the packaged artifact through the java runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolLocation {
    pub executable: PathBuf,
    pub artifact: Option<PathBuf>,
}

/// Java runtime used to load the packaged artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runtime {
    pub binary: PathBuf,
    /// Installation directory, when the runtime came from `JAVA_HOME`.
    pub home: Option<PathBuf>,
}

/// Map a located udclient path to its packaged artifact.
///
/// Only the final path segment and the path kind are consulted. Names are
/// compared whole, so `myudclient` is not mistaken for the `udclient`
/// launcher.
#[must_use]
pub fn artifact_for(path: &Path, kind: PathKind) -> Option<PathBuf> {
    match kind {
        PathKind::Directory => Some(path.join(udclient::ARTIFACT)),
        PathKind::File => {
            let name = path.file_name()?.to_str()?;
            if Path::new(name)
                .extension()
                .is_some_and(|ext| ext == udclient::ARTIFACT_EXTENSION)
            {
                Some(path.to_path_buf())
            } else if name == udclient::LAUNCHER {
                Some(path.with_file_name(udclient::ARTIFACT))
            } else if name == udclient::WINDOWS_LAUNCHER {
                Some(path.with_extension(udclient::ARTIFACT_EXTENSION))
            } else {
                None
            }
        }
        PathKind::Other => None,
    }
}

/// Launcher file name for the platform this task runs on.
#[must_use]
pub fn platform_launcher() -> &'static str {
    if cfg!(windows) {
        udclient::WINDOWS_LAUNCHER
    } else {
        udclient::LAUNCHER
    }
}

/// Java binary inside a runtime installation directory.
#[must_use]
pub fn runtime_binary(home: &Path) -> PathBuf {
    home.join("bin")
        .join(format!("{}{}", udclient::RUNTIME, std::env::consts::EXE_SUFFIX))
}

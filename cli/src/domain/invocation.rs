//! udclient argument vectors.
//!
//! The order is fixed: `[-jar <artifact>]`, `-weburl <url>`, the credential
//! flags, the global arguments, then the command arguments.

use std::fmt;
use std::path::PathBuf;

use udtask_common::{udclient, variables};

use crate::domain::credentials::{Credential, EndpointConfig};
use crate::domain::error::TaskError;
use crate::domain::tool::{Runtime, ToolLocation};

/// How the udclient process is started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launch {
    /// Run the located executable as-is.
    Direct { executable: PathBuf },
    /// `java -jar <artifact>`.
    Jar { runtime: Runtime, artifact: PathBuf },
}

impl Launch {
    /// Pair a located tool with the runtime that loads its artifact.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::ToolNotFound`] when the location names an
    /// artifact but no runtime was selected.
    pub fn new(location: &ToolLocation, runtime: Option<Runtime>) -> Result<Self, TaskError> {
        match (&location.artifact, runtime) {
            (None, _) => Ok(Self::Direct {
                executable: location.executable.clone(),
            }),
            (Some(artifact), Some(runtime)) => Ok(Self::Jar {
                runtime,
                artifact: artifact.clone(),
            }),
            (Some(artifact), None) => Err(TaskError::tool_not_found(
                format!(
                    "no java runtime available to run {}; set JAVA_HOME or add java to the PATH",
                    artifact.display()
                ),
                Some(artifact.clone()),
            )),
        }
    }

    #[must_use]
    pub fn program(&self) -> &PathBuf {
        match self {
            Self::Direct { executable } => executable,
            Self::Jar { runtime, .. } => &runtime.binary,
        }
    }
}

/// Arguments and settings shared by every invocation of a task run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalOptions {
    pub verbose: bool,
    pub extra_args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

/// One udclient process call.
#[derive(Clone, PartialEq, Eq)]
pub struct InvocationSpec {
    pub program: PathBuf,
    pub base_args: Vec<String>,
    pub command_args: Vec<String>,
    pub env: Vec<(String, String)>,
    pub working_dir: Option<PathBuf>,
}

impl InvocationSpec {
    /// Full argument vector handed to the process.
    #[must_use]
    pub fn args(&self) -> Vec<&str> {
        self.base_args
            .iter()
            .chain(&self.command_args)
            .map(String::as_str)
            .collect()
    }

    /// Argument vector with credential values masked, for logging.
    #[must_use]
    pub fn redacted_args(&self) -> Vec<&str> {
        let mut out = Vec::with_capacity(self.base_args.len() + self.command_args.len());
        let mut mask_next = false;
        for arg in self.args() {
            if mask_next {
                out.push("***");
                mask_next = false;
            } else {
                out.push(arg);
                mask_next = arg == udclient::PASSWORD_FLAG || arg == udclient::AUTHTOKEN_FLAG;
            }
        }
        out
    }

    /// The subcommand this invocation runs, for messages.
    #[must_use]
    pub fn command_name(&self) -> &str {
        self.command_args.first().map_or("udclient", String::as_str)
    }
}

impl fmt::Debug for InvocationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationSpec")
            .field("program", &self.program)
            .field("args", &self.redacted_args())
            .field("working_dir", &self.working_dir)
            .finish_non_exhaustive()
    }
}

/// Assemble the invocation for one udclient command.
///
/// # Errors
///
/// Returns [`TaskError::InvalidInput`] when the command is empty or an
/// argument contains a NUL byte.
pub fn build_invocation(
    launch: &Launch,
    endpoint: &EndpointConfig,
    options: &GlobalOptions,
    command: Vec<String>,
) -> Result<InvocationSpec, TaskError> {
    if command.is_empty() {
        return Err(TaskError::InvalidInput("no udclient command given".into()));
    }

    let mut base_args = Vec::new();
    let mut env = Vec::new();
    if let Launch::Jar { runtime, artifact } = launch {
        base_args.push(udclient::RUNTIME_JAR_FLAG.to_string());
        base_args.push(artifact.display().to_string());
        if let Some(home) = &runtime.home {
            env.push((variables::JAVA_HOME.to_string(), home.display().to_string()));
        }
    }

    base_args.push(udclient::WEBURL_FLAG.to_string());
    base_args.push(endpoint.url.clone());
    match &endpoint.credential {
        Credential::Basic { username, password } => {
            base_args.push(udclient::USERNAME_FLAG.to_string());
            base_args.push(username.clone());
            base_args.push(udclient::PASSWORD_FLAG.to_string());
            base_args.push(password.clone());
        }
        Credential::Token(token) => {
            base_args.push(udclient::AUTHTOKEN_FLAG.to_string());
            base_args.push(token.clone());
        }
    }

    if options.verbose {
        base_args.push(udclient::VERBOSE_FLAG.to_string());
    }
    base_args.extend(options.extra_args.iter().cloned());

    if let Some(bad) = base_args.iter().chain(&command).find(|a| a.contains('\0')) {
        return Err(TaskError::InvalidInput(format!(
            "argument contains a NUL byte: {:?}",
            bad.replace('\0', "\\0")
        )));
    }

    Ok(InvocationSpec {
        program: launch.program().clone(),
        base_args,
        command_args: command,
        env,
        working_dir: options.working_dir.clone(),
    })
}

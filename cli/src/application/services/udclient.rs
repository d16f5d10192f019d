//! Application service: run udclient commands.
//!
//! One process per call, awaited to completion. There are no retries:
//! udclient commands mutate the server and are not safe to repeat.

use std::process::Output;

use anyhow::Result;

use crate::application::ports::CommandRunner;
use crate::application::services::context::ClientSettings;
use crate::domain::{EndpointConfig, GlobalOptions, InvocationSpec, Launch, TaskError, build_invocation};

/// Exit code udclient reports on success.
pub const SUCCESS_EXIT_CODE: i32 = 0;

/// Outcome of one udclient process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    /// Set when the step failed.
    pub error_message: Option<String>,
}

impl StepResult {
    fn from_output(command: &str, output: &Output) -> Self {
        let exit_code = output.status.code();
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        // udclient writes some failures to stdout only.
        let error_message = (exit_code != Some(SUCCESS_EXIT_CODE)).then(|| {
            [stderr.trim(), stdout.trim()]
                .into_iter()
                .find(|reported| !reported.is_empty())
                .map_or_else(
                    || match exit_code {
                        Some(code) => format!("udclient {command} failed with return code: {code}"),
                        None => format!("udclient {command} was terminated by a signal"),
                    },
                    str::to_owned,
                )
        });
        Self {
            exit_code,
            stdout,
            stderr,
            error_message,
        }
    }

    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.error_message.is_none()
    }
}

/// A configured udclient: where it lives, which server it talks to, and
/// the arguments every call carries.
pub struct UdClient<'a, R: CommandRunner> {
    runner: &'a R,
    launch: Launch,
    endpoint: EndpointConfig,
    options: GlobalOptions,
}

impl<'a, R: CommandRunner> UdClient<'a, R> {
    #[must_use]
    pub fn new(runner: &'a R, settings: ClientSettings) -> Self {
        Self {
            runner,
            launch: settings.launch,
            endpoint: settings.endpoint,
            options: settings.options,
        }
    }

    /// Build the invocation for `command` without running it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::InvalidInput`] for an unusable command.
    pub fn invocation(&self, command: Vec<String>) -> Result<InvocationSpec, TaskError> {
        build_invocation(&self.launch, &self.endpoint, &self.options, command)
    }

    /// Run `command` and report how it went.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::InvalidInput`] for an unusable command and
    /// [`TaskError::ExternalProcess`] when the process cannot be started.
    pub async fn invoke(&self, command: Vec<String>) -> Result<StepResult> {
        let invocation = self.invocation(command)?;
        let name = invocation.command_name().to_string();
        tracing::info!(
            program = %invocation.program.display(),
            args = ?invocation.redacted_args(),
            "running udclient {name}"
        );

        let output = self.runner.run(&invocation).await.map_err(|e| TaskError::ExternalProcess {
            step: name.clone(),
            message: format!("{e:#}"),
        })?;

        let result = StepResult::from_output(&name, &output);
        tracing::debug!(command = %name, exit_code = ?result.exit_code, "udclient finished");
        Ok(result)
    }

    /// Run `command`, turning a non-success exit into an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::ExternalProcess`] carrying udclient's error text
    /// when the process fails.
    pub async fn invoke_checked(&self, command: Vec<String>) -> Result<StepResult> {
        let name = command.first().cloned().unwrap_or_default();
        let result = self.invoke(command).await?;
        if let Some(message) = &result.error_message {
            return Err(TaskError::ExternalProcess {
                step: name,
                message: message.clone(),
            }
            .into());
        }
        Ok(result)
    }
}

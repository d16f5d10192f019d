//! Shared fakes for service tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::Result;
use udtask_common::EndpointAuthorization;

use crate::application::ports::{
    CommandRunner, FileProbe, PathLookup, PipelineReporter, ProgressReporter, TaskHost,
};
use crate::domain::{InvocationSpec, PathKind, TaskResult};

/// Build an `ExitStatus` from a logical exit code (cross-platform).
#[cfg(unix)]
pub fn exit_status(code: i32) -> std::process::ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    std::process::ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> std::process::ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    std::process::ExitStatus::from_raw(code as u32)
}

pub fn output(code: i32, stderr: &str) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: stderr.as_bytes().to_vec(),
    }
}

// ── Host ─────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct FakeHost {
    pub inputs: HashMap<String, String>,
    pub variables: HashMap<String, String>,
    pub urls: HashMap<String, String>,
    pub auths: HashMap<String, EndpointAuthorization>,
}

impl FakeHost {
    pub fn input(mut self, name: &str, value: &str) -> Self {
        self.inputs.insert(name.into(), value.into());
        self
    }

    pub fn variable(mut self, name: &str, value: &str) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn endpoint(mut self, id: &str, url: &str, username: &str, password: &str) -> Self {
        self.urls.insert(id.into(), url.into());
        let mut auth = EndpointAuthorization::default();
        auth.parameters.insert("username".into(), username.into());
        auth.parameters.insert("password".into(), password.into());
        self.auths.insert(id.into(), auth);
        self
    }

    /// A host carrying every input and variable `push-version` requires.
    pub fn publish_ready() -> Self {
        Self::default()
            .endpoint("ud", "https://ucd:8443", "", "TOK123")
            .input("serverEndpoint", "ud")
            .input("workingDirectory", "/work/s")
            .input("udClientLocation", "/opt/udclient/udclient")
            .input("udComponentId", "app1")
            .input("udComponentVersionName", "1.0")
            .variable("build.sourcesDirectory", "/work/s")
            .variable("Build.BuildNumber", "42")
            .variable("Build.BuildId", "7")
            .variable("System.TeamFoundationCollectionUri", "https://dev.azure.com/org/")
            .variable("System.TeamProject", "proj")
            .variable("JAVA_HOME", "/jdk")
    }
}

impl TaskHost for FakeHost {
    fn input(&self, name: &str) -> Option<String> {
        self.inputs.get(name).filter(|v| !v.is_empty()).cloned()
    }

    fn variable(&self, name: &str) -> Option<String> {
        self.variables.get(name).filter(|v| !v.is_empty()).cloned()
    }

    fn endpoint_url(&self, endpoint: &str) -> Option<String> {
        self.urls.get(endpoint).cloned()
    }

    fn endpoint_authorization(&self, endpoint: &str) -> Result<Option<EndpointAuthorization>> {
        Ok(self.auths.get(endpoint).cloned())
    }
}

// ── Filesystem and lookup ────────────────────────────────────────────────────

#[derive(Default)]
pub struct FakeFs {
    pub entries: HashMap<PathBuf, PathKind>,
}

impl FakeFs {
    pub fn with(mut self, path: &str, kind: PathKind) -> Self {
        self.entries.insert(PathBuf::from(path), kind);
        self
    }

    /// The standard three-file udclient install under `dir`.
    pub fn udclient_install(self, dir: &str) -> Self {
        self.with(dir, PathKind::Directory)
            .with(&format!("{dir}/udclient"), PathKind::File)
            .with(&format!("{dir}/udclient.cmd"), PathKind::File)
            .with(&format!("{dir}/udclient.jar"), PathKind::File)
    }
}

impl FileProbe for FakeFs {
    fn kind(&self, path: &Path) -> std::io::Result<PathKind> {
        self.entries.get(path).copied().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory")
        })
    }
}

#[derive(Default)]
pub struct FakeLookup {
    pub found: HashMap<String, PathBuf>,
}

impl FakeLookup {
    pub fn with(mut self, name: &str, path: &str) -> Self {
        self.found.insert(name.into(), PathBuf::from(path));
        self
    }
}

impl PathLookup for FakeLookup {
    fn which(&self, name: &str) -> Option<PathBuf> {
        self.found.get(name).cloned()
    }
}

// ── Process runner ───────────────────────────────────────────────────────────

/// Records every invocation and answers with queued outputs (exit 0 once
/// the queue is empty).
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: RefCell<Vec<InvocationSpec>>,
    pub responses: RefCell<VecDeque<Result<Output>>>,
}

impl RecordingRunner {
    pub fn respond(self, response: Result<Output>) -> Self {
        self.responses.borrow_mut().push_back(response);
        self
    }

    pub fn commands(&self) -> Vec<Vec<String>> {
        self.calls
            .borrow()
            .iter()
            .map(|c| c.command_args.clone())
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, invocation: &InvocationSpec) -> Result<Output> {
        self.calls.borrow_mut().push(invocation.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(output(0, "")))
    }
}

// ── Reporters ────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingReporter {
    pub events: RefCell<Vec<String>>,
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.events.borrow_mut().push(format!("step: {message}"));
    }

    fn success(&self, message: &str) {
        self.events.borrow_mut().push(format!("ok: {message}"));
    }

    fn warn(&self, message: &str) {
        self.events.borrow_mut().push(format!("warn: {message}"));
    }
}

impl PipelineReporter for RecordingReporter {
    fn set_secret(&self, value: &str) {
        self.events.borrow_mut().push(format!("secret: {value}"));
    }

    fn error(&self, message: &str) {
        self.events.borrow_mut().push(format!("error: {message}"));
    }

    fn complete(&self, result: TaskResult, message: Option<&str>) {
        self.events
            .borrow_mut()
            .push(format!("complete: {result} {}", message.unwrap_or_default()));
    }
}

//! Shared fixtures: a stand-in udclient launcher and an inputs file.

#![allow(clippy::expect_used, dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub fn udtask() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("udtask"));
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("UDTASK_INPUTS");
    cmd
}

/// Records each call's arguments, one line per call, in `calls.log`.
/// `createVersion` fails with "version 1.0 already exists" when
/// `FAKE_UDCLIENT_FAIL_CREATE` is set.
#[cfg(unix)]
const FAKE_UDCLIENT: &str = r#"#!/bin/sh
echo "$@" >> "$(dirname "$0")/calls.log"
for arg in "$@"; do
  if [ "$arg" = "createVersion" ] && [ -n "$FAKE_UDCLIENT_FAIL_CREATE" ]; then
    echo "version 1.0 already exists" >&2
    exit 1
  fi
done
echo "ok"
exit 0
"#;

/// A checkout directory with a fake udclient install next to it.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    #[cfg(unix)]
    pub fn new() -> Self {
        use std::os::unix::fs::PermissionsExt as _;

        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir_all(dir.path().join("udclient")).expect("udclient dir");
        std::fs::create_dir_all(dir.path().join("s")).expect("sources dir");
        let launcher = dir.path().join("udclient").join("udclient");
        std::fs::write(&launcher, FAKE_UDCLIENT).expect("write launcher");
        std::fs::set_permissions(&launcher, std::fs::Permissions::from_mode(0o755))
            .expect("chmod launcher");
        Self { dir }
    }

    pub fn sources(&self) -> PathBuf {
        self.dir.path().join("s")
    }

    pub fn install(&self) -> PathBuf {
        self.dir.path().join("udclient")
    }

    /// Argument lines the fake udclient saw, in call order.
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.install().join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    /// Write an inputs file; `extra_inputs` is appended under `inputs:`.
    pub fn inputs_file(&self, extra_inputs: &str) -> PathBuf {
        let path = self.dir.path().join("inputs.yaml");
        let content = format!(
            "inputs:
  serverEndpoint: ud
  udClientLocation: {install}
  udClientUseLauncher: true
  workingDirectory: {sources}
  udComponentId: app1
  udComponentVersionName: \"1.0\"
{extra_inputs}
variables:
  build.sourcesDirectory: {sources}
  Build.BuildNumber: \"42\"
  Build.BuildId: \"7\"
  System.TeamFoundationCollectionUri: https://dev.azure.com/org/
  System.TeamProject: proj
endpoints:
  ud:
    url: https://ucd.example.com:8443
    auth:
      scheme: Token
      parameters:
        password: TOK123
",
            install = self.install().display(),
            sources = self.sources().display(),
        );
        std::fs::write(&path, content).expect("write inputs");
        path
    }
}

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent");
    }
    std::fs::write(path, content).expect("write file");
}

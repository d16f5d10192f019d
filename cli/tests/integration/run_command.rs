//! End-to-end `run` and `locate` against a stand-in udclient.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::support::{Workspace, udtask};

#[test]
fn test_run_passes_command_after_connection_args() {
    let ws = Workspace::new();
    let inputs = ws.inputs_file(
        "  udClientCommandArgs: |\n    getComponent\n    -component\n    app1\n  udVerbose: true\n",
    );

    udtask()
        .arg("--inputs")
        .arg(&inputs)
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"));

    assert_eq!(
        ws.calls(),
        vec![
            "-weburl https://ucd.example.com:8443 -authtoken TOK123 --verbose getComponent -component app1"
                .to_string()
        ]
    );
}

#[test]
fn test_run_without_command_args_spawns_nothing() {
    let ws = Workspace::new();
    let inputs = ws.inputs_file("");

    udtask()
        .arg("--inputs")
        .arg(&inputs)
        .arg("run")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Input required: udClientCommandArgs"));

    assert!(ws.calls().is_empty());
}

#[test]
fn test_locate_reports_launcher() {
    let ws = Workspace::new();
    let inputs = ws.inputs_file("");

    udtask()
        .arg("--inputs")
        .arg(&inputs)
        .arg("locate")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            ws.install().join("udclient").display().to_string(),
        ))
        .stdout(predicate::str::contains("(launcher runs directly)"));
}

#[test]
fn test_locate_rejects_inaccessible_location() {
    let ws = Workspace::new();
    let inputs = ws.inputs_file("");
    let content = std::fs::read_to_string(&inputs)
        .expect("read inputs")
        .replace(&ws.install().display().to_string(), "/nonexistent/udclient");
    std::fs::write(&inputs, content).expect("write inputs");

    udtask()
        .arg("--inputs")
        .arg(&inputs)
        .arg("locate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "udclient location: /nonexistent/udclient is not accessible",
        ));
}

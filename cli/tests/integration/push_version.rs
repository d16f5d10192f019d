//! End-to-end `push-version` runs against a stand-in udclient.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::support::{Workspace, udtask, write_file};

const AUTH: &str = "-weburl https://ucd.example.com:8443 -authtoken TOK123";

#[test]
fn test_push_without_upload_creates_version_and_links_build() {
    let ws = Workspace::new();
    let inputs = ws.inputs_file("");

    udtask()
        .arg("--inputs")
        .arg(&inputs)
        .arg("push-version")
        .assert()
        .success()
        .stdout(predicate::str::contains("##vso[task.setsecret]TOK123"))
        .stdout(predicate::str::contains("##vso[task.complete result=Succeeded;]"));

    assert_eq!(
        ws.calls(),
        vec![
            format!("{AUTH} createVersion -component app1 -name 1.0"),
            format!(
                "{AUTH} addVersionLink -component app1 -version 1.0 -linkName VSTS Build: 42 \
                 -link https://dev.azure.com/org/proj/_build?_a=summary&buildId=7"
            ),
        ]
    );
}

#[test]
fn test_push_uploads_file_then_applies_tag() {
    let ws = Workspace::new();
    write_file(&ws.sources().join("out").join("app.zip"), "zip");
    let inputs = ws.inputs_file("  fileToUpload: out/app.zip\n  udOptionalTag: BUILT\n");

    udtask()
        .arg("--inputs")
        .arg(&inputs)
        .arg("push-version")
        .assert()
        .success();

    let calls = ws.calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(
        calls[1],
        format!(
            "{AUTH} addVersionFiles -component app1 -version 1.0 -base {} -include app.zip",
            ws.sources().join("out").display()
        )
    );
    assert!(calls[2].contains("addVersionLink"));
    assert_eq!(
        calls[3],
        format!("{AUTH} addVersionStatus -component app1 -version 1.0 -status BUILT")
    );
}

#[test]
fn test_upload_equal_to_checkout_root_is_skipped() {
    let ws = Workspace::new();
    let inputs = ws.inputs_file(&format!("  fileToUpload: {}\n", ws.sources().display()));

    udtask()
        .arg("--inputs")
        .arg(&inputs)
        .arg("push-version")
        .assert()
        .success();

    assert!(ws.calls().iter().all(|c| !c.contains("addVersionFiles")));
}

#[test]
fn test_failed_create_version_halts_and_fails_task() {
    let ws = Workspace::new();
    let inputs = ws.inputs_file("  udOptionalTag: BUILT\n");

    udtask()
        .env("FAKE_UDCLIENT_FAIL_CREATE", "1")
        .arg("--inputs")
        .arg(&inputs)
        .arg("push-version")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "##vso[task.logissue type=error;]createVersion failed: version 1.0 already exists",
        ))
        .stdout(predicate::str::contains("##vso[task.complete result=Failed;]"))
        .stderr(predicate::str::contains("Error: createVersion failed"));

    assert_eq!(ws.calls().len(), 1);
}

#[test]
fn test_missing_upload_path_fails_after_create() {
    let ws = Workspace::new();
    let inputs = ws.inputs_file("  fileToUpload: out/missing.zip\n");

    udtask()
        .arg("--inputs")
        .arg(&inputs)
        .arg("push-version")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("result=Failed;"));

    let calls = ws.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].contains("createVersion"));
}

//! End-to-end tests driving the `intl-editor` binary.
//!
//! Tests cover:
//! - JSON summary output
//! - `--set` edits persisted through the binary
//! - Non-zero exit on fatal errors

#![cfg(test)]

use std::process::{Command, Output};

use super::helpers::{GREETING_SOURCE, Project};

/// What: Run the binary against a project with the given extra arguments.
///
/// Details:
/// - `--config` points at a missing file so no user settings leak in.
fn run(project: &Project, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_intl-editor"))
        .arg("--root")
        .arg(project.root())
        .arg("--config")
        .arg(project.root().join("no-such.conf"))
        .arg("--no-color")
        .args(extra)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run intl-editor binary")
}

#[test]
/// What: `--json` summary reports per-locale counts.
///
/// Inputs:
/// - One source message, `fr` translated, `de` empty.
///
/// Output:
/// - Exit success; JSON rows for `de` (missing 1) and `fr` (matching 1).
fn cli_summary_json() {
    let project = Project::new();
    project
        .source("app.json", GREETING_SOURCE)
        .locale("de", "{}")
        .locale("fr", r#"{"greeting": "Bonjour"}"#);

    let output = run(&project, &["--json"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["source_strings"], 1);
    assert_eq!(report["locale_files"], 2);
    assert_eq!(report["locales"][0]["locale"], "de");
    assert_eq!(report["locales"][0]["missing"], 1);
    assert_eq!(report["locales"][1]["locale"], "fr");
    assert_eq!(report["locales"][1]["matching"], 1);
}

#[test]
/// What: `--set` with `--type matching` rewrites the locale file.
fn cli_set_saves_locale() {
    let project = Project::new();
    project
        .source("app.json", GREETING_SOURCE)
        .locale("fr", r#"{"greeting": "Bonjour"}"#);

    let output = run(
        &project,
        &["--locale", "fr", "--type", "matching", "--set", "greeting=Salut"],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Saved fr (matching)"));
    assert_eq!(project.read_locale("fr"), "{\n  \"greeting\": \"Salut\"\n}");
}

#[test]
/// What: Fatal errors exit non-zero with a message on stderr.
fn cli_fatal_errors_exit_nonzero() {
    let project = Project::new();
    let output = run(&project, &[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("error:"));

    project.source("app.json", GREETING_SOURCE).locale("fr", "{}");
    let output = run(&project, &["--missing"]);
    assert!(!output.status.success());
}

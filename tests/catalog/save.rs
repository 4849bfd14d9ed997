//! Integration tests for the save cycle.
//!
//! Tests cover:
//! - `matching` and `missing` submissions persisted to disk
//! - Reloading a saved catalog
//! - Separator policies on disk
//! - Rejected submissions leave files untouched
//! - Duplicate keys and unusual locale codes

#![cfg(test)]

use intl_editor::catalog::{
    CatalogError, CatalogPaths, EditKind, LocaleEntry, Session, TrailingComma, WriterOptions,
};

use super::helpers::{GREETING_SOURCE, Project, pairs};

/// What: Open a session bound to `fr` with the given separator policy.
fn open_fr(project: &Project, trailing_comma: TrailingComma) -> Session {
    Session::open(
        CatalogPaths::under_root(project.root()),
        Some("fr".to_string()),
        WriterOptions {
            trailing_comma,
            ..WriterOptions::default()
        },
    )
    .expect("Session should open")
}

#[test]
/// What: A `matching` save updates the entry and rewrites the file indented.
///
/// Inputs:
/// - `fr = {"greeting": "Bonjour"}`, submission `greeting = Salut`.
///
/// Output:
/// - File content is exactly `{\n  "greeting": "Salut"\n}`.
fn integration_save_matching() {
    let project = Project::new();
    project
        .source("app.json", GREETING_SOURCE)
        .locale("fr", r#"{"greeting": "Bonjour"}"#);
    let mut session = open_fr(&project, TrailingComma::LastEmitted);

    let outcome = session
        .save_changes(pairs(&[
            ("locale", "fr"),
            ("type", "matching"),
            ("greeting", "Salut"),
        ]))
        .expect("save should succeed");

    assert_eq!(outcome.locale, "fr");
    assert_eq!(outcome.kind, EditKind::Matching);
    assert_eq!(outcome.report.updated, 1);
    assert_eq!(outcome.path, project.locales_dir().join("fr.json"));
    assert_eq!(project.read_locale("fr"), "{\n  \"greeting\": \"Salut\"\n}");
}

#[test]
/// What: A `missing` save appends filled fields and skips blank ones.
///
/// Details:
/// - The saved file reloads into a session where `farewell` matches.
fn integration_save_missing_and_reload() {
    let project = Project::new();
    project
        .source(
            "app.json",
            r#"[{"id": "greeting", "defaultMessage": "Hi"}, {"id": "farewell", "defaultMessage": "Bye"}, {"id": "unused", "defaultMessage": "?"}]"#,
        )
        .locale("fr", r#"{"greeting": "Bonjour"}"#);
    let mut session = open_fr(&project, TrailingComma::LastEmitted);
    assert_eq!(session.missing_string_count("fr"), 2);

    let outcome = session
        .save_changes(pairs(&[
            ("locale", "fr"),
            ("type", "missing"),
            ("farewell", "Au revoir"),
            ("unused", ""),
        ]))
        .expect("save should succeed");
    assert_eq!(outcome.report.appended, 1);
    assert_eq!(outcome.report.ignored, 1);
    assert_eq!(
        project.read_locale("fr"),
        "{\n  \"greeting\": \"Bonjour\",\n  \"farewell\": \"Au revoir\"\n}"
    );

    let reloaded = open_fr(&project, TrailingComma::LastEmitted);
    assert_eq!(
        reloaded.locale_entries("fr"),
        &[
            LocaleEntry::new("greeting", "Bonjour"),
            LocaleEntry::new("farewell", "Au revoir"),
        ]
    );
    assert_eq!(reloaded.missing_string_count("fr"), 1);
    assert_eq!(reloaded.matching_string_count("fr"), 2);
}

#[test]
/// What: Blanking the last entry shows the difference between separator policies.
///
/// Output:
/// - `LastEmitted` writes valid JSON.
/// - `LastIndexed` leaves a dangling comma.
fn integration_trailing_comma_policies() {
    let submission = pairs(&[("locale", "fr"), ("type", "matching"), ("old", "")]);
    let fixture = r#"{"greeting": "Salut", "old": "Vieux"}"#;

    let project = Project::new();
    project.source("app.json", GREETING_SOURCE).locale("fr", fixture);
    open_fr(&project, TrailingComma::LastEmitted)
        .save_changes(submission.clone())
        .expect("save should succeed");
    let written = project.read_locale("fr");
    assert_eq!(written, "{\n  \"greeting\": \"Salut\"\n}");
    assert!(serde_json::from_str::<serde_json::Value>(&written).is_ok());

    let legacy = Project::new();
    legacy.source("app.json", GREETING_SOURCE).locale("fr", fixture);
    open_fr(&legacy, TrailingComma::LastIndexed)
        .save_changes(submission)
        .expect("save should succeed");
    let written = legacy.read_locale("fr");
    assert_eq!(written, "{\n  \"greeting\": \"Salut\",\n}");
    assert!(serde_json::from_str::<serde_json::Value>(&written).is_err());
}

#[test]
/// What: Quotes and multi-line values survive a save and reload.
fn integration_escaped_values_reload() {
    let project = Project::new();
    project
        .source("app.json", GREETING_SOURCE)
        .locale("fr", r#"{"greeting": "Bonjour"}"#);
    let mut session = open_fr(&project, TrailingComma::LastEmitted);
    session
        .save_changes(pairs(&[
            ("locale", "fr"),
            ("type", "matching"),
            ("greeting", "Dites \"salut\"\r\npuis partez"),
        ]))
        .expect("save should succeed");

    let written = project.read_locale("fr");
    assert!(written.contains(r#""greeting": "Dites \"salut\"\npuis partez""#));

    let reloaded = open_fr(&project, TrailingComma::LastEmitted);
    assert_eq!(
        reloaded.locale_entries("fr")[0].value,
        "Dites \"salut\"\npuis partez"
    );
}

#[test]
/// What: Saving to a locale without a file creates it.
fn integration_save_creates_new_locale() {
    let project = Project::new();
    project.source("app.json", GREETING_SOURCE).locale("fr", "{}");
    let mut session = open_fr(&project, TrailingComma::LastEmitted);
    session
        .save_changes(pairs(&[
            ("locale", "de"),
            ("type", "missing"),
            ("greeting", "Hallo"),
        ]))
        .expect("save should succeed");
    assert_eq!(project.read_locale("de"), "{\n  \"greeting\": \"Hallo\"\n}");
    assert_eq!(session.matching_string_count("de"), 1);
}

#[test]
/// What: Malformed submissions are rejected before anything is written.
fn integration_rejected_submission_leaves_file() {
    let project = Project::new();
    project
        .source("app.json", GREETING_SOURCE)
        .locale("fr", r#"{"greeting": "Bonjour"}"#);
    let mut session = open_fr(&project, TrailingComma::LastEmitted);

    for submission in [
        pairs(&[("type", "matching"), ("greeting", "Salut")]),
        pairs(&[("locale", "fr"), ("greeting", "Salut")]),
        pairs(&[("locale", "fr"), ("type", "update"), ("greeting", "Salut")]),
        pairs(&[
            ("locale", "../fr"),
            ("type", "matching"),
            ("greeting", "Salut"),
        ]),
    ] {
        let err = session
            .save_changes(submission)
            .expect_err("submission should be rejected");
        assert!(matches!(err, CatalogError::MalformedEditBatch { .. }));
    }
    assert_eq!(project.read_locale("fr"), r#"{"greeting": "Bonjour"}"#);
    assert_eq!(session.locale_entries("fr")[0].value, "Bonjour");
}

#[test]
/// What: Duplicate keys all survive saves; `matching` rewrites only the first.
///
/// Inputs:
/// - `fr = {"greeting": "Bonjour"}`, a `missing` save adding a second `greeting`,
///   then a `matching` save for `greeting`.
///
/// Output:
/// - Both copies are written each time; only the first copy changes.
fn integration_duplicate_keys_survive_saves() {
    let project = Project::new();
    project
        .source("app.json", GREETING_SOURCE)
        .locale("fr", r#"{"greeting": "Bonjour"}"#);
    let mut session = open_fr(&project, TrailingComma::LastEmitted);

    session
        .save_changes(pairs(&[
            ("locale", "fr"),
            ("type", "missing"),
            ("greeting", "Coucou"),
        ]))
        .expect("save should succeed");
    assert_eq!(
        project.read_locale("fr"),
        "{\n  \"greeting\": \"Bonjour\",\n  \"greeting\": \"Coucou\"\n}"
    );

    session
        .save_changes(pairs(&[
            ("locale", "fr"),
            ("type", "matching"),
            ("greeting", "Salut"),
        ]))
        .expect("save should succeed");
    assert_eq!(
        project.read_locale("fr"),
        "{\n  \"greeting\": \"Salut\",\n  \"greeting\": \"Coucou\"\n}"
    );
    assert_eq!(
        session.locale_entries("fr"),
        &[
            LocaleEntry::new("greeting", "Salut"),
            LocaleEntry::new("greeting", "Coucou"),
        ]
    );
    assert_eq!(session.matching_strings().expect("bound session")[0].message, "Salut");
}

#[test]
/// What: A locale whose file name is not a plain tag can still be saved.
///
/// Inputs:
/// - Locale files `sr@latin.json` and `en.US.json`.
///
/// Output:
/// - Both locales are listed and a save rewrites `sr@latin.json`.
fn integration_save_unusual_locale_codes() {
    let project = Project::new();
    project
        .source("app.json", GREETING_SOURCE)
        .locale("sr@latin", "{}")
        .locale("en.US", r#"{"greeting": "Hi"}"#);
    let mut session = Session::open(
        CatalogPaths::under_root(project.root()),
        Some("sr@latin".to_string()),
        WriterOptions::default(),
    )
    .expect("Session should open");
    assert_eq!(session.locales(), vec!["en.US", "sr@latin"]);

    let outcome = session
        .save_changes(pairs(&[
            ("locale", "sr@latin"),
            ("type", "missing"),
            ("greeting", "Zdravo"),
        ]))
        .expect("save should succeed");
    assert_eq!(outcome.path, project.locales_dir().join("sr@latin.json"));
    assert_eq!(project.read_locale("sr@latin"), "{\n  \"greeting\": \"Zdravo\"\n}");
}

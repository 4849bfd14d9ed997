//! Integration tests for loading and reconciling catalogs from disk.
//!
//! Tests cover:
//! - Missing / matching / orphaned scenarios
//! - Count identities across every locale
//! - Fatal errors at session start
//! - Degraded loading of corrupt locale files

#![cfg(test)]

use intl_editor::catalog::{
    CatalogError, CatalogKind, CatalogPaths, LocaleEntry, Session, WriterOptions,
};

use super::helpers::{GREETING_SOURCE, Project};

/// What: Open a session over the project's default layout.
fn open(project: &Project, locale: Option<&str>) -> Result<Session, CatalogError> {
    Session::open(
        CatalogPaths::under_root(project.root()),
        locale.map(str::to_string),
        WriterOptions::default(),
    )
}

#[test]
/// What: An empty locale reports every source message as missing.
///
/// Inputs:
/// - Source `[greeting]`, locale `fr = {}`.
///
/// Output:
/// - missing 1, matching 0, `missing_strings()` is the greeting record.
fn integration_empty_locale_is_all_missing() {
    let project = Project::new();
    project.source("app.json", GREETING_SOURCE).locale("fr", "{}");

    let session = open(&project, Some("fr")).expect("Session should open");
    assert_eq!(session.missing_string_count("fr"), 1);
    assert_eq!(session.matching_string_count("fr"), 0);

    let missing = session.missing_strings().expect("bound session");
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].id, "greeting");
    assert_eq!(missing[0].default_message, "Hi");
    assert_eq!(missing[0].description, "a greeting");
}

#[test]
/// What: A translation for an id no longer in source is orphaned.
fn integration_orphaned_entry() {
    let project = Project::new();
    project
        .source("app.json", GREETING_SOURCE)
        .locale("fr", r#"{"greeting": "Bonjour", "old_key": "Ancien"}"#);

    let session = open(&project, Some("fr")).expect("Session should open");
    assert_eq!(session.orphaned_string_count("fr"), 1);
    assert_eq!(
        session.orphaned_strings().expect("bound session"),
        vec![LocaleEntry::new("old_key", "Ancien")]
    );

    let matching = session.matching_strings().expect("bound session");
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].message, "Bonjour");
    assert_eq!(matching[0].default_message, "Hi");
}

#[test]
/// What: Count identities hold for every locale of a mixed project.
///
/// Details:
/// - Source files are nested and declare a duplicate id.
/// - matching + missing == source count; orphaned == entries - matching entries.
fn integration_count_identities() {
    let project = Project::new();
    project
        .source(
            "components/Header.json",
            r#"[{"id": "a", "defaultMessage": "A"}, {"id": "b", "defaultMessage": "B"}]"#,
        )
        .source(
            "pages/Home/messages.json",
            r#"[{"id": "c", "defaultMessage": "C"}, {"id": "a", "defaultMessage": "A again"}]"#,
        )
        .locale("de", r#"{"a": "A-de", "x": "X", "c": ""}"#)
        .locale("fr", r#"{"b": "B-fr"}"#)
        .locale("ja", "{}");

    let session = open(&project, None).expect("Session should open");
    assert_eq!(session.source_file_count(), 2);
    assert_eq!(session.source_string_count(), 4);
    assert_eq!(session.locale_count(), 3);
    assert_eq!(session.locales(), vec!["de", "fr", "ja"]);

    for locale in session.locales() {
        assert_eq!(
            session.matching_string_count(locale) + session.missing_string_count(locale),
            session.source_string_count(),
            "matching + missing for {locale}"
        );
        assert_eq!(
            session.orphaned_string_count(locale),
            session.locale_string_count(locale) - session.matching_entry_count(locale),
            "orphaned for {locale}"
        );
    }
    // Both `a` records match the single `a` entry.
    assert_eq!(session.matching_string_count("de"), 3);
    assert_eq!(session.orphaned_string_count("de"), 1);
}

#[test]
/// What: Sessions need at least one source and one locale file.
fn integration_no_catalogs_found() {
    let project = Project::new();
    let err = open(&project, None).expect_err("no source files");
    assert!(matches!(
        err,
        CatalogError::NoCatalogsFound {
            kind: CatalogKind::Source,
            ..
        }
    ));
    assert!(err.to_string().contains("messages"));

    project.source("app.json", GREETING_SOURCE);
    let err = open(&project, None).expect_err("no locale files");
    assert!(matches!(
        err,
        CatalogError::NoCatalogsFound {
            kind: CatalogKind::Locale,
            ..
        }
    ));
    assert!(err.to_string().contains("locales"));
}

#[test]
/// What: A malformed source catalog aborts the load and names the file.
fn integration_bad_source_catalog() {
    let project = Project::new();
    project
        .source("bad.json", r#"{"greeting": "not an array"}"#)
        .locale("fr", "{}");
    let err = open(&project, None).expect_err("object source catalog");
    assert!(matches!(err, CatalogError::CatalogFormat { .. }));
    assert!(err.to_string().contains("bad.json"));
}

#[test]
/// What: A corrupt locale file loads as empty without blocking other locales.
fn integration_corrupt_locale_degrades() {
    let project = Project::new();
    project
        .source("app.json", GREETING_SOURCE)
        .locale("de", "{\"greeting\": ")
        .locale("fr", r#"{"greeting": "Bonjour"}"#);

    let session = open(&project, None).expect("Session should open");
    assert_eq!(session.locale_string_count("de"), 0);
    assert_eq!(session.missing_string_count("de"), 1);
    assert_eq!(session.matching_string_count("fr"), 1);
}

#[test]
/// What: Listing queries fail on an unbound session.
fn integration_unbound_listing() {
    let project = Project::new();
    project.source("app.json", GREETING_SOURCE).locale("fr", "{}");
    let session = open(&project, None).expect("Session should open");
    assert!(matches!(
        session.matching_strings(),
        Err(CatalogError::NoLocaleBound)
    ));
}

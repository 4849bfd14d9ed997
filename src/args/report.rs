//! Report printing for the command line.

use serde::Serialize;

use intl_editor::catalog::{CatalogError, Session, report};

/// What: Print a value as pretty JSON on stdout.
///
/// Details:
/// - Serialization of these plain structs cannot fail in practice; if it does,
///   the error is logged and nothing is printed.
fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => tracing::error!(error = %e, "Failed to serialize report"),
    }
}

/// JSON shape of the summary report.
#[derive(Serialize)]
struct SummaryReport<'a> {
    /// Source catalog files loaded.
    source_files: usize,
    /// Source messages loaded.
    source_strings: usize,
    /// Locale catalog files loaded.
    locale_files: usize,
    /// Per-locale rows.
    locales: &'a [report::LocaleSummary],
}

/// What: Print source totals and one row per locale.
///
/// Inputs:
/// - `session`: Loaded session.
/// - `json`: Emit JSON instead of a table.
pub fn handle_summary(session: &Session, json: bool) {
    let summaries = session.summaries();
    if json {
        print_json(&SummaryReport {
            source_files: session.source_file_count(),
            source_strings: session.source_string_count(),
            locale_files: session.locale_count(),
            locales: &summaries,
        });
        return;
    }
    println!(
        "{} source strings in {} file(s), {} locale(s)",
        session.source_string_count(),
        session.source_file_count(),
        session.locale_count()
    );
    println!();
    print!("{}", report::render_summary_table(&summaries));
}

/// What: Print translated messages of the bound locale.
///
/// # Errors
/// - `CatalogError::NoLocaleBound` without `--locale`.
pub fn handle_matching(session: &Session, json: bool) -> Result<(), CatalogError> {
    let strings = session.matching_strings()?;
    if json {
        print_json(&strings);
    } else {
        print!("{}", report::render_matching(&strings));
    }
    Ok(())
}

/// What: Print untranslated messages of the bound locale.
///
/// # Errors
/// - `CatalogError::NoLocaleBound` without `--locale`.
pub fn handle_missing(session: &Session, json: bool) -> Result<(), CatalogError> {
    let messages = session.missing_strings()?;
    if json {
        print_json(&messages);
    } else {
        print!("{}", report::render_missing(&messages));
    }
    Ok(())
}

/// What: Print orphaned translations of the bound locale.
///
/// # Errors
/// - `CatalogError::NoLocaleBound` without `--locale`.
pub fn handle_orphaned(session: &Session, json: bool) -> Result<(), CatalogError> {
    let entries = session.orphaned_strings()?;
    if json {
        print_json(&entries);
    } else {
        print!("{}", report::render_orphaned(&entries));
    }
    Ok(())
}

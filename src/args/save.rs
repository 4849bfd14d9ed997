//! Edit submission handling for the command line.

use intl_editor::catalog::edit::{LOCALE_FIELD, TYPE_FIELD, load_submission_file};
use intl_editor::catalog::{CatalogError, Session};

use crate::args::Args;
use crate::args::utils::parse_set_pair;

/// What: Assemble the flat submission described by the command line.
///
/// Inputs:
/// - `args`: Parsed arguments (`--locale`, `--type`, `--save`, `--set`).
///
/// Output:
/// - Submission pairs in the order they should be applied.
///
/// # Errors
/// - `CatalogError::Io` / `CatalogError::EditSubmission` for an unreadable or
///   malformed `--save` file.
///
/// Details:
/// - `--locale` and `--type` come first, so values inside a `--save` file win.
/// - `--set` pairs come last. A `--set` without `=` is malformed; it is
///   skipped with a warning and the rest of the batch proceeds.
pub fn build_submission(args: &Args) -> Result<Vec<(String, String)>, CatalogError> {
    let mut pairs = Vec::new();
    if let Some(locale) = &args.locale {
        pairs.push((LOCALE_FIELD.to_string(), locale.clone()));
    }
    if let Some(kind) = &args.edit_type {
        pairs.push((TYPE_FIELD.to_string(), kind.clone()));
    }
    if let Some(path) = &args.save {
        pairs.extend(load_submission_file(path)?);
    }
    for raw in &args.set {
        match parse_set_pair(raw) {
            Some(pair) => pairs.push(pair),
            None => tracing::warn!(arg = %raw, "Ignoring --set without ID=TEXT"),
        }
    }
    Ok(pairs)
}

/// What: Apply the command-line edit submission and report the outcome.
///
/// # Errors
/// - Submission assembly errors, `CatalogError::MalformedEditBatch`, or a write failure.
pub fn handle_save(session: &mut Session, args: &Args) -> Result<(), CatalogError> {
    let submission = build_submission(args)?;
    let outcome = session.save_changes(submission)?;
    tracing::info!(
        locale = %outcome.locale,
        kind = %outcome.kind,
        path = %outcome.path.display(),
        "Saved edit submission"
    );
    if args.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(text) => println!("{text}"),
            Err(e) => tracing::error!(error = %e, "Failed to serialize save outcome"),
        }
    } else {
        println!(
            "Saved {} ({}): {} updated, {} added, {} ignored -> {}",
            outcome.locale,
            outcome.kind,
            outcome.report.updated,
            outcome.report.appended,
            outcome.report.ignored,
            outcome.path.display()
        );
    }
    Ok(())
}

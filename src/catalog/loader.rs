//! Source and locale catalog loading and parsing.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::catalog::error::CatalogError;
use crate::catalog::types::{LocaleEntry, SourceMessage};

/// What: Load and concatenate every source catalog in `files`.
///
/// Inputs:
/// - `files`: Source catalog paths, in the order they should be concatenated.
///
/// Output:
/// - All message records, file by file, duplicates included.
///
/// # Errors
/// - Returns `CatalogError::Io` when a file cannot be read.
/// - Returns `CatalogError::CatalogFormat` when a file is not a JSON array of
///   records or a record lacks a string `id`.
///
/// Details:
/// - Ids are not deduplicated: two files declaring the same id yield two records.
pub fn load_source_catalog(files: &[PathBuf]) -> Result<Vec<SourceMessage>, CatalogError> {
    let mut messages = Vec::new();
    for file in files {
        let contents = fs::read_to_string(file).map_err(|e| CatalogError::io(file, e))?;
        let found = parse_source_catalog(&contents, file)?;
        tracing::debug!(
            path = %file.display(),
            count = found.len(),
            "[Loader] Loaded source catalog"
        );
        messages.extend(found);
    }
    Ok(messages)
}

/// What: Parse the text of one source catalog.
///
/// Inputs:
/// - `contents`: File content.
/// - `path`: Path used in error messages.
///
/// Output:
/// - Records in file order.
///
/// # Errors
/// - Returns `CatalogError::CatalogFormat` for invalid JSON, a non-array top
///   level, a non-object record, or a record without a string `id`.
pub fn parse_source_catalog(
    contents: &str,
    path: &Path,
) -> Result<Vec<SourceMessage>, CatalogError> {
    let format_error = |reason: String| CatalogError::CatalogFormat {
        path: path.to_path_buf(),
        reason,
    };

    let doc: Value =
        serde_json::from_str(contents).map_err(|e| format_error(format!("invalid JSON: {e}")))?;
    let Value::Array(records) = doc else {
        return Err(format_error(
            "top-level value is not an array of messages".to_string(),
        ));
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let Value::Object(mut fields) = record else {
                return Err(format_error(format!("record {index} is not an object")));
            };
            let Some(Value::String(id)) = fields.remove("id") else {
                return Err(format_error(format!("record {index} is missing a string `id`")));
            };
            Ok(SourceMessage {
                default_message: text_field(fields.remove("defaultMessage")),
                description: text_field(fields.remove("description")),
                id,
            })
        })
        .collect()
}

/// What: Read an optional source text field leniently.
///
/// Output:
/// - The string itself; `""` for absent or `null`; other scalars stringified;
///   arrays and objects (react-intl's object-form `description`) as compact JSON.
fn text_field(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    }
}

/// What: Load one locale catalog, degrading to an empty sequence on any problem.
///
/// Inputs:
/// - `file`: Path to a `<locale>.json` file.
///
/// Output:
/// - Entries in the object's key order; empty when the file is unreadable,
///   not JSON, `null`, or not an object.
///
/// Details:
/// - A broken translation file must not block work on the other locales, so
///   failures are logged instead of returned.
#[must_use]
pub fn load_locale_catalog(file: &Path) -> Vec<LocaleEntry> {
    let contents = match fs::read_to_string(file) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(
                path = %file.display(),
                error = %e,
                "[Loader] Failed to read locale file; treating as empty"
            );
            return Vec::new();
        }
    };
    parse_locale_catalog(&contents).unwrap_or_else(|| {
        tracing::warn!(
            path = %file.display(),
            "[Loader] Locale file is not a JSON object; treating as empty"
        );
        Vec::new()
    })
}

/// What: Parse locale catalog text into ordered entries.
///
/// Inputs:
/// - `contents`: Raw file content.
///
/// Output:
/// - `Some(entries)` for a JSON object, `None` otherwise.
///
/// Details:
/// - Line breaks are collapsed to spaces before parsing so that stray raw
///   newlines inside string values do not make the file unparsable.
/// - Numbers and booleans are stringified, `null` becomes an empty (deleted)
///   value, nested objects and arrays are skipped.
#[must_use]
pub fn parse_locale_catalog(contents: &str) -> Option<Vec<LocaleEntry>> {
    let normalized = normalize_line_breaks(contents);
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(&normalized) else {
        return None;
    };

    let mut entries = Vec::with_capacity(map.len());
    for (key, value) in map {
        let text = match value {
            Value::String(s) => s,
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => {
                tracing::warn!(key = %key, "[Loader] Skipping nested locale value");
                continue;
            }
        };
        entries.push(LocaleEntry::new(key, text));
    }
    Some(entries)
}

/// What: Replace every run of `\r` / `\n` characters with a single space.
#[must_use]
pub fn normalize_line_breaks(contents: &str) -> String {
    let mut out = String::with_capacity(contents.len());
    let mut in_break = false;
    for c in contents.chars() {
        if c == '\r' || c == '\n' {
            if !in_break {
                out.push(' ');
                in_break = true;
            }
        } else {
            out.push(c);
            in_break = false;
        }
    }
    out
}

/// What: Derive the locale code from a locale file path.
///
/// Inputs:
/// - `path`: e.g. `intl/locales/fr-CA.json`
///
/// Output:
/// - `Some("fr-CA")`, or `None` if the name has no `.json` suffix.
#[must_use]
pub fn locale_code_for(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let stem_len = name.len().checked_sub(".json".len())?;
    if stem_len == 0 || !name.is_char_boundary(stem_len) {
        return None;
    }
    let (stem, suffix) = name.split_at(stem_len);
    suffix
        .eq_ignore_ascii_case(".json")
        .then(|| stem.to_string())
}

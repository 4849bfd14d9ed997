//! Locale catalog serialization and persistence.
//!
//! The on-disk shape is a compatibility contract with downstream tooling, so the
//! text is assembled by hand instead of going through a JSON encoder: keys are
//! written raw, values only get `"` escaped (plus CRLF folding for multi-line
//! values), and empty values are dropped.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::error::CatalogError;
use crate::catalog::indent::{DEFAULT_INDENT_WIDTH, indent_with};
use crate::catalog::types::LocaleEntry;

/// Where the writer stops emitting `,` separators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrailingComma {
    /// No comma after the last entry actually written. Always valid JSON.
    #[default]
    LastEmitted,
    /// The comma is decided by position in the entry list, so an empty final
    /// entry leaves a dangling comma behind the previous one. Only for
    /// byte-compatibility with catalogs written by older tooling.
    LastIndexed,
}

/// Serialization knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriterOptions {
    /// Separator policy.
    pub trailing_comma: TrailingComma,
    /// Spaces per indentation level.
    pub indent_width: usize,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            trailing_comma: TrailingComma::default(),
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

/// What: Escape a translation value for the catalog file.
///
/// Inputs:
/// - `value`: Raw translation text.
///
/// Output:
/// - Text safe to place between double quotes.
///
/// Details:
/// - Values containing a line feed have every `\r\n` folded to the two
///   characters `\n` first.
/// - Then `"` becomes `\"`. Nothing else is escaped.
#[must_use]
pub fn escape_value(value: &str) -> String {
    if value.contains('\n') {
        value.replace("\r\n", "\\n").replace('"', "\\\"")
    } else {
        value.replace('"', "\\\"")
    }
}

/// What: Render entries as the compact single-line catalog text.
///
/// Inputs:
/// - `entries`: Ordered entries; empty values are skipped.
/// - `trailing_comma`: Separator policy.
///
/// Output:
/// - `{"k": "v","k2": "v2"}` with no other whitespace.
#[must_use]
pub fn serialize_compact(entries: &[LocaleEntry], trailing_comma: TrailingComma) -> String {
    let mut output = String::from("{");
    match trailing_comma {
        TrailingComma::LastEmitted => {
            let rendered: Vec<String> = entries
                .iter()
                .filter(|e| !e.value.is_empty())
                .map(|e| format!("\"{}\": \"{}\"", e.key, escape_value(&e.value)))
                .collect();
            output.push_str(&rendered.join(","));
        }
        TrailingComma::LastIndexed => {
            let last = entries.len().saturating_sub(1);
            for (i, entry) in entries.iter().enumerate() {
                if entry.value.is_empty() {
                    continue;
                }
                output.push_str(&format!(
                    "\"{}\": \"{}",
                    entry.key,
                    escape_value(&entry.value)
                ));
                output.push_str(if i == last { "\"" } else { "\"," });
            }
        }
    }
    output.push('}');
    output
}

/// What: Render entries as the final, indented file content.
#[must_use]
pub fn render_catalog(entries: &[LocaleEntry], options: &WriterOptions) -> String {
    indent_with(
        &serialize_compact(entries, options.trailing_comma),
        options.indent_width,
    )
}

/// What: Path of a locale's catalog file.
#[must_use]
pub fn locale_file_path(locales_dir: &Path, locale: &str) -> PathBuf {
    locales_dir.join(format!("{locale}.json"))
}

/// What: Overwrite `<locales_dir>/<locale>.json` with the rendered entries.
///
/// Inputs:
/// - `locales_dir`: Directory holding locale catalogs.
/// - `locale`: Locale code (already validated).
/// - `entries`: Entries to persist.
/// - `options`: Serialization knobs.
///
/// Output:
/// - Path that was written.
///
/// # Errors
/// - Returns `CatalogError::Io` if the file cannot be written.
///
/// Details:
/// - Plain truncate-and-write: no temp file, no backup, no locking. Two
///   sessions saving the same locale race and the last one wins.
pub fn write_locale_catalog(
    locales_dir: &Path,
    locale: &str,
    entries: &[LocaleEntry],
    options: &WriterOptions,
) -> Result<PathBuf, CatalogError> {
    let path = locale_file_path(locales_dir, locale);
    let content = render_catalog(entries, options);
    tracing::debug!(
        path = %path.display(),
        bytes = content.len(),
        "[Writer] Writing locale catalog"
    );
    match fs::write(&path, &content) {
        Ok(()) => {
            tracing::info!(
                path = %path.display(),
                locale = %locale,
                "[Writer] Locale catalog persisted"
            );
            Ok(path)
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "[Writer] Failed to write locale catalog"
            );
            Err(CatalogError::io(path, e))
        }
    }
}

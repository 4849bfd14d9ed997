//! Edit submissions and their application to a locale's entries.
//!
//! A submission is a flat `key -> value` mapping. Two keys are reserved:
//! `locale` names the target catalog and `type` selects how the remaining
//! pairs are applied (`matching` corrects existing translations, `missing`
//! adds new ones).

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::catalog::error::CatalogError;
use crate::catalog::types::LocaleEntry;

/// Reserved submission key naming the target locale.
pub const LOCALE_FIELD: &str = "locale";
/// Reserved submission key naming the edit type.
pub const TYPE_FIELD: &str = "type";

/// How the pairs of an edit batch are applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    /// Update the first existing entry per key; unknown keys are dropped.
    Matching,
    /// Append one entry per non-empty value; existing entries are untouched.
    Missing,
}

impl EditKind {
    /// What: Wire name of the kind, as used in the `type` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Matching => "matching",
            Self::Missing => "missing",
        }
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "matching" => Ok(Self::Matching),
            "missing" => Ok(Self::Missing),
            other => Err(CatalogError::MalformedEditBatch {
                field: TYPE_FIELD,
                reason: format!("must be `matching` or `missing`, got `{other}`"),
            }),
        }
    }
}

/// A validated edit submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditBatch {
    /// Target locale code.
    pub locale: String,
    /// How `edits` are applied.
    pub kind: EditKind,
    /// `(message id, new text)` pairs in submission order.
    pub edits: Vec<(String, String)>,
}

impl EditBatch {
    /// What: Split the reserved fields off a flat submission.
    ///
    /// Inputs:
    /// - `pairs`: Submission pairs in order; a repeated reserved key keeps its last value.
    ///
    /// Output:
    /// - The batch with `locale` and `type` removed from the edit list.
    ///
    /// # Errors
    /// - Returns `CatalogError::MalformedEditBatch` when `locale` or `type` is
    ///   absent, when `type` is not `matching`/`missing`, or when `locale` is
    ///   not a plain locale code (it becomes part of a file name).
    pub fn from_submission<I>(pairs: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut locale = None;
        let mut kind = None;
        let mut edits = Vec::new();
        for (key, value) in pairs {
            match key.as_str() {
                LOCALE_FIELD => locale = Some(value),
                TYPE_FIELD => kind = Some(value),
                _ => edits.push((key, value)),
            }
        }

        let locale = locale.ok_or_else(|| CatalogError::MalformedEditBatch {
            field: LOCALE_FIELD,
            reason: "is missing".to_string(),
        })?;
        if !is_valid_locale_code(&locale) {
            return Err(CatalogError::MalformedEditBatch {
                field: LOCALE_FIELD,
                reason: format!("`{locale}` is not a valid locale code"),
            });
        }
        let kind = kind
            .ok_or_else(|| CatalogError::MalformedEditBatch {
                field: TYPE_FIELD,
                reason: "is missing".to_string(),
            })?
            .parse()?;

        Ok(Self {
            locale,
            kind,
            edits,
        })
    }
}

/// Outcome counters of one [`apply_edits`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    /// Existing entries whose value was replaced.
    pub updated: usize,
    /// New entries appended.
    pub appended: usize,
    /// Pairs that changed nothing (unknown key, or empty value for `missing`).
    pub ignored: usize,
}

/// What: Apply edit pairs to a locale's entries in place.
///
/// Inputs:
/// - `entries`: The locale's ordered entries.
/// - `kind`: Application mode.
/// - `edits`: `(key, value)` pairs, applied in order.
///
/// Output:
/// - Counters describing what happened.
///
/// Details:
/// - `Matching`: the first entry with the key gets the new value. Setting an
///   empty value soft-deletes the entry on the next write. Unknown keys are
///   ignored, never appended.
/// - `Missing`: non-empty values are appended as new entries; empty values are
///   unfilled form fields and are skipped.
pub fn apply_edits(
    entries: &mut Vec<LocaleEntry>,
    kind: EditKind,
    edits: &[(String, String)],
) -> ApplyReport {
    let mut report = ApplyReport::default();
    for (key, value) in edits {
        match kind {
            EditKind::Matching => {
                if let Some(entry) = entries.iter_mut().find(|e| e.key == *key) {
                    entry.value.clone_from(value);
                    report.updated += 1;
                } else {
                    tracing::debug!(key = %key, "[Edit] No existing entry; dropping matching edit");
                    report.ignored += 1;
                }
            }
            EditKind::Missing => {
                if value.is_empty() {
                    report.ignored += 1;
                    continue;
                }
                entries.push(LocaleEntry::new(key.clone(), value.clone()));
                report.appended += 1;
            }
        }
    }
    report
}

/// What: Read a submission from a JSON object file, keeping key order.
///
/// Inputs:
/// - `path`: File holding `{"locale": "...", "type": "...", "<id>": "<text>", ...}`.
///
/// Output:
/// - Flat pairs ready for [`EditBatch::from_submission`].
///
/// # Errors
/// - Returns `CatalogError::Io` when the file cannot be read.
/// - Returns `CatalogError::EditSubmission` when it is not a JSON object.
pub fn load_submission_file(path: &Path) -> Result<Vec<(String, String)>, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    parse_submission_json(&contents, path)
}

/// What: Parse submission JSON text into flat pairs.
///
/// # Errors
/// - Returns `CatalogError::EditSubmission` for invalid JSON or a non-object top level.
///
/// Details:
/// - A pair whose value is not a string is malformed; it is skipped with a
///   warning and the rest of the submission is kept.
pub fn parse_submission_json(
    contents: &str,
    path: &Path,
) -> Result<Vec<(String, String)>, CatalogError> {
    let doc: Value = serde_json::from_str(contents).map_err(|e| CatalogError::EditSubmission {
        path: path.to_path_buf(),
        reason: format!("invalid JSON: {e}"),
    })?;
    let Value::Object(map) = doc else {
        return Err(CatalogError::EditSubmission {
            path: path.to_path_buf(),
            reason: "expected a flat JSON object".to_string(),
        });
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::String(s) => pairs.push((key, s)),
            other => tracing::warn!(
                key = %key,
                value = %other,
                "[Edit] Skipping non-string submission value"
            ),
        }
    }
    Ok(pairs)
}

/// What: Validate a locale code before it is used as a file name.
///
/// Inputs:
/// - `locale`: Locale code to validate
///
/// Output:
/// - `true` if `<locale>.json` names a file directly inside the locales directory
///
/// Details:
/// - Any code a loaded locale file can yield is accepted (`en-US`, `pt_BR`,
///   `sr@latin`, `en.US`), so every listed locale can be saved.
/// - Rejects empty codes, `.` and `..`, path separators, and control characters.
#[must_use]
pub fn is_valid_locale_code(locale: &str) -> bool {
    !locale.is_empty()
        && locale != "."
        && locale != ".."
        && !locale
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_control())
}

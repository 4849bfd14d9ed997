//! Editing session: the loaded catalogs plus every query and the save cycle.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::catalog::edit::{ApplyReport, EditBatch, EditKind, apply_edits};
use crate::catalog::error::{CatalogError, CatalogKind};
use crate::catalog::loader::{load_locale_catalog, load_source_catalog, locale_code_for};
use crate::catalog::reconcile;
use crate::catalog::report::LocaleSummary;
use crate::catalog::scan::list_json_files;
use crate::catalog::types::{LocaleEntry, MatchingString, SourceMessage};
use crate::catalog::writer::{WriterOptions, write_locale_catalog};

/// Where source and locale catalogs live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogPaths {
    /// Root of the source catalogs, walked recursively.
    pub messages_dir: PathBuf,
    /// Directory of `<locale>.json` files; also where saves go.
    pub locales_dir: PathBuf,
}

impl CatalogPaths {
    /// What: Conventional layout below a project root.
    ///
    /// Output:
    /// - `<root>/intl/messages` and `<root>/intl/locales`.
    #[must_use]
    pub fn under_root(root: &Path) -> Self {
        let intl = root.join("intl");
        Self {
            messages_dir: intl.join("messages"),
            locales_dir: intl.join("locales"),
        }
    }
}

/// Result of a successful [`Session::save_changes`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SaveOutcome {
    /// Locale that was edited.
    pub locale: String,
    /// How the edits were applied.
    pub kind: EditKind,
    /// File that was overwritten.
    pub path: PathBuf,
    /// What the edits did.
    pub report: ApplyReport,
}

/// One editing session over a set of catalogs.
///
/// Built once from disk; afterwards only [`Session::save_changes`] mutates it.
#[derive(Debug)]
pub struct Session {
    /// Locale the listing queries are scoped to.
    locale: Option<String>,
    /// Catalog directories.
    paths: CatalogPaths,
    /// Serialization knobs for saves.
    writer: WriterOptions,
    /// Source catalog files that were loaded.
    source_files: Vec<PathBuf>,
    /// Locale catalog files that were loaded.
    locale_files: Vec<PathBuf>,
    /// Concatenated source messages.
    source_strings: Vec<SourceMessage>,
    /// Ordered entries per locale code.
    locale_strings: BTreeMap<String, Vec<LocaleEntry>>,
}

impl Session {
    /// What: Discover and load every catalog.
    ///
    /// Inputs:
    /// - `paths`: Source and locale directories.
    /// - `locale`: Optional locale the listing queries are bound to.
    /// - `writer`: Options used when saving.
    ///
    /// Output:
    /// - A loaded session.
    ///
    /// # Errors
    /// - `CatalogError::NoCatalogsFound` when either directory has no `.json` file.
    /// - `CatalogError::CatalogFormat` / `CatalogError::Io` from source loading.
    ///
    /// Details:
    /// - Every locale file is loaded, bound or not, so per-locale counts are
    ///   available for all of them. Broken locale files load as empty.
    pub fn open(
        paths: CatalogPaths,
        locale: Option<String>,
        writer: WriterOptions,
    ) -> Result<Self, CatalogError> {
        let source_files = list_json_files(&paths.messages_dir)?;
        if source_files.is_empty() {
            return Err(CatalogError::NoCatalogsFound {
                kind: CatalogKind::Source,
                dir: paths.messages_dir,
            });
        }

        let locale_files = list_json_files(&paths.locales_dir)?;
        if locale_files.is_empty() {
            return Err(CatalogError::NoCatalogsFound {
                kind: CatalogKind::Locale,
                dir: paths.locales_dir,
            });
        }

        let source_strings = load_source_catalog(&source_files)?;

        let mut locale_strings = BTreeMap::new();
        for file in &locale_files {
            let Some(code) = locale_code_for(file) else {
                continue;
            };
            let entries = load_locale_catalog(file);
            tracing::debug!(
                path = %file.display(),
                locale = %code,
                count = entries.len(),
                "[Loader] Loaded locale catalog"
            );
            if locale_strings.insert(code.clone(), entries).is_some() {
                tracing::warn!(
                    path = %file.display(),
                    locale = %code,
                    "[Session] Duplicate locale file; later file wins"
                );
            }
        }

        tracing::info!(
            source_files = source_files.len(),
            source_strings = source_strings.len(),
            locales = locale_strings.len(),
            bound = locale.as_deref().unwrap_or("-"),
            "[Session] Catalogs loaded"
        );

        Ok(Self {
            locale,
            paths,
            writer,
            source_files,
            locale_files,
            source_strings,
            locale_strings,
        })
    }

    /// What: Build a session from already loaded collections.
    ///
    /// Details:
    /// - No discovery happens, so file counts are zero. Useful for embedding
    ///   and tests.
    #[must_use]
    pub const fn from_parts(
        paths: CatalogPaths,
        locale: Option<String>,
        writer: WriterOptions,
        source_strings: Vec<SourceMessage>,
        locale_strings: BTreeMap<String, Vec<LocaleEntry>>,
    ) -> Self {
        Self {
            locale,
            paths,
            writer,
            source_files: Vec::new(),
            locale_files: Vec::new(),
            source_strings,
            locale_strings,
        }
    }

    /// Number of source catalog files loaded.
    #[must_use]
    pub const fn source_file_count(&self) -> usize {
        self.source_files.len()
    }

    /// Number of locale catalog files loaded.
    #[must_use]
    pub const fn locale_count(&self) -> usize {
        self.locale_files.len()
    }

    /// Locale codes, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        self.locale_strings.keys().map(String::as_str).collect()
    }

    /// Total source messages, duplicates included.
    #[must_use]
    pub const fn source_string_count(&self) -> usize {
        self.source_strings.len()
    }

    /// Entries in a locale, empty ones included.
    #[must_use]
    pub fn locale_string_count(&self, locale: &str) -> usize {
        self.locale_entries(locale).len()
    }

    /// Locale the listing queries are bound to.
    #[must_use]
    pub fn bound_locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Directory saves are written to.
    #[must_use]
    pub fn locales_dir(&self) -> &Path {
        &self.paths.locales_dir
    }

    /// All source messages in load order.
    #[must_use]
    pub fn source_strings(&self) -> &[SourceMessage] {
        &self.source_strings
    }

    /// What: Entries of a locale, or an empty slice for an unknown code.
    #[must_use]
    pub fn locale_entries(&self, locale: &str) -> &[LocaleEntry] {
        self.locale_strings
            .get(locale)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Source messages translated in `locale`.
    #[must_use]
    pub fn matching_string_count(&self, locale: &str) -> usize {
        reconcile::matching_string_count(&self.source_strings, self.locale_entries(locale))
    }

    /// Source messages not translated in `locale`.
    #[must_use]
    pub fn missing_string_count(&self, locale: &str) -> usize {
        reconcile::missing_string_count(&self.source_strings, self.locale_entries(locale))
    }

    /// Entries of `locale` that some source message references.
    #[must_use]
    pub fn matching_entry_count(&self, locale: &str) -> usize {
        reconcile::matching_entry_count(&self.source_strings, self.locale_entries(locale))
    }

    /// Entries of `locale` no source message references any more.
    #[must_use]
    pub fn orphaned_string_count(&self, locale: &str) -> usize {
        reconcile::orphaned_string_count(&self.source_strings, self.locale_entries(locale))
    }

    /// What: Bound locale or `NoLocaleBound`.
    fn require_locale(&self) -> Result<&str, CatalogError> {
        self.locale.as_deref().ok_or(CatalogError::NoLocaleBound)
    }

    /// What: Translated messages of the bound locale.
    ///
    /// # Errors
    /// - Returns `CatalogError::NoLocaleBound` on an unbound session.
    pub fn matching_strings(&self) -> Result<Vec<MatchingString>, CatalogError> {
        let locale = self.require_locale()?;
        Ok(reconcile::matching_strings(
            &self.source_strings,
            self.locale_entries(locale),
        ))
    }

    /// What: Untranslated messages of the bound locale.
    ///
    /// # Errors
    /// - Returns `CatalogError::NoLocaleBound` on an unbound session.
    pub fn missing_strings(&self) -> Result<Vec<SourceMessage>, CatalogError> {
        let locale = self.require_locale()?;
        Ok(reconcile::missing_strings(
            &self.source_strings,
            self.locale_entries(locale),
        ))
    }

    /// What: Orphaned entries of the bound locale.
    ///
    /// # Errors
    /// - Returns `CatalogError::NoLocaleBound` on an unbound session.
    pub fn orphaned_strings(&self) -> Result<Vec<LocaleEntry>, CatalogError> {
        let locale = self.require_locale()?;
        Ok(reconcile::orphaned_strings(
            &self.source_strings,
            self.locale_entries(locale),
        ))
    }

    /// What: One summary row per loaded locale, sorted by code.
    #[must_use]
    pub fn summaries(&self) -> Vec<LocaleSummary> {
        self.locale_strings
            .keys()
            .map(|locale| LocaleSummary {
                locale: locale.clone(),
                entry_count: self.locale_string_count(locale),
                matching: self.matching_string_count(locale),
                missing: self.missing_string_count(locale),
                orphaned: self.orphaned_string_count(locale),
            })
            .collect()
    }

    /// What: Apply a validated batch to the in-memory entries only.
    ///
    /// Details:
    /// - A locale without a file starts from an empty sequence.
    pub fn apply(&mut self, batch: &EditBatch) -> ApplyReport {
        let entries = self.locale_strings.entry(batch.locale.clone()).or_default();
        let report = apply_edits(entries, batch.kind, &batch.edits);
        tracing::debug!(
            locale = %batch.locale,
            kind = %batch.kind,
            updated = report.updated,
            appended = report.appended,
            ignored = report.ignored,
            "[Edit] Applied edit batch"
        );
        report
    }

    /// What: Apply an edit submission and persist the edited locale.
    ///
    /// Inputs:
    /// - `submission`: Flat pairs including the reserved `locale` and `type` keys.
    ///
    /// Output:
    /// - Which locale/file was written and what changed.
    ///
    /// # Errors
    /// - `CatalogError::MalformedEditBatch` if the reserved keys are missing or invalid;
    ///   nothing is applied or written in that case.
    /// - `CatalogError::Io` if the locale file cannot be written.
    pub fn save_changes<I>(&mut self, submission: I) -> Result<SaveOutcome, CatalogError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let batch = EditBatch::from_submission(submission)?;
        let report = self.apply(&batch);
        let path = write_locale_catalog(
            &self.paths.locales_dir,
            &batch.locale,
            self.locale_entries(&batch.locale),
            &self.writer,
        )?;
        Ok(SaveOutcome {
            locale: batch.locale,
            kind: batch.kind,
            path,
            report,
        })
    }
}

//! Error taxonomy for catalog loading, querying and saving.

use std::path::PathBuf;

use thiserror::Error;

/// Which catalog directory a [`CatalogError::NoCatalogsFound`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    /// Source message catalogs (`intl/messages/`).
    Source,
    /// Translated locale catalogs (`intl/locales/`).
    Locale,
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Locale => f.write_str("locale"),
        }
    }
}

/// Fatal errors surfaced by the catalog session.
///
/// Per-entry problems (a corrupt locale file, an edit for a key that does not
/// exist) never become a `CatalogError`; they are logged and skipped.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No `.json` files were found in a required directory.
    #[error(
        "no {kind} files were found in {}; at least one {kind} file must be present",
        dir.display()
    )]
    NoCatalogsFound {
        /// Catalog kind that was empty.
        kind: CatalogKind,
        /// Directory that was scanned.
        dir: PathBuf,
    },
    /// A source catalog is not a well-formed array of message records.
    #[error("malformed source catalog {}: {reason}", path.display())]
    CatalogFormat {
        /// Offending file.
        path: PathBuf,
        /// Human-readable description of the problem.
        reason: String,
    },
    /// A locale-scoped listing was requested on a session without a locale.
    #[error("the editor session was not bound to a locale")]
    NoLocaleBound,
    /// An edit submission lacks (or has an invalid) reserved field.
    #[error("malformed edit submission: {field} {reason}")]
    MalformedEditBatch {
        /// Reserved field name (`locale` or `type`).
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
    /// An edit submission file could not be interpreted as a flat mapping.
    #[error("invalid edit submission {}: {reason}", path.display())]
    EditSubmission {
        /// Submission file.
        path: PathBuf,
        /// Human-readable description of the problem.
        reason: String,
    },
    /// Reading or writing a catalog file failed.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// What: Build an [`CatalogError::Io`] tagged with the path that failed.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

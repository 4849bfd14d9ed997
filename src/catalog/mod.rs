//! Message catalog reconciliation and editing.
//!
//! # Overview
//!
//! A project keeps two kinds of catalogs:
//! - **Source catalogs** under `intl/messages/**/*.json`: JSON arrays of
//!   `{id, defaultMessage, description}` records extracted from application code.
//! - **Locale catalogs** under `intl/locales/<locale>.json`: flat JSON objects
//!   mapping message ids to translated text.
//!
//! A [`Session`] loads both once, answers which source messages are translated
//! (matching), untranslated (missing) or no longer referenced (orphaned) per
//! locale, and applies edit submissions back to a locale file.
//!
//! # Matching policy
//!
//! Nothing is deduplicated. Duplicate source ids stay separate records, and
//! duplicate locale keys stay separate entries; reads and `matching` updates
//! always use the first entry carrying a key.
//!
//! # File format
//!
//! Locale files are written by [`writer`] with hand-built escaping (only `"`
//! is escaped, CRLF becomes `\n`), empty values dropped, and then laid out by
//! [`indent`]. See [`writer::TrailingComma`] for the legacy separator mode.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use intl_editor::catalog::{CatalogPaths, Session, WriterOptions};
//!
//! let paths = CatalogPaths::under_root(Path::new("."));
//! let mut session = Session::open(paths, Some("fr".to_string()), WriterOptions::default())?;
//! println!("{} untranslated", session.missing_string_count("fr"));
//! session.save_changes(vec![
//!     ("locale".to_string(), "fr".to_string()),
//!     ("type".to_string(), "missing".to_string()),
//!     ("app.greeting".to_string(), "Bonjour".to_string()),
//! ])?;
//! # Ok::<(), intl_editor::catalog::CatalogError>(())
//! ```

pub mod edit;
mod error;
pub mod indent;
pub mod loader;
pub mod reconcile;
pub mod report;
pub mod scan;
mod session;
mod types;
pub mod writer;

pub use edit::{ApplyReport, EditBatch, EditKind};
pub use error::{CatalogError, CatalogKind};
pub use report::LocaleSummary;
pub use session::{CatalogPaths, SaveOutcome, Session};
pub use types::{LocaleEntry, MatchingString, SourceMessage};
pub use writer::{TrailingComma, WriterOptions};

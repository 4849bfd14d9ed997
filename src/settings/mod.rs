//! Editor configuration.
//!
//! Settings come from a `key = value` file (comments start with `#`, `//` or
//! `;`). The first file found wins:
//! 1. the path given with `--config`
//! 2. `<root>/intl-editor.conf`
//! 3. `$XDG_CONFIG_HOME/intl-editor/settings.conf` (or `$HOME/.config/...`)
//!
//! Command-line flags override whatever the file sets.

mod parse;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{CatalogPaths, TrailingComma, WriterOptions};
use crate::catalog::indent::DEFAULT_INDENT_WIDTH;

pub use parse::parse_settings;

/// Name of the per-project settings file looked up under the root.
pub const PROJECT_SETTINGS_FILE: &str = "intl-editor.conf";

/// Values read from the settings file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Source catalog directory; relative paths resolve against the root.
    pub messages_dir: Option<PathBuf>,
    /// Locale catalog directory; relative paths resolve against the root.
    pub locales_dir: Option<PathBuf>,
    /// Spaces per indentation level in written catalogs.
    pub indent_width: usize,
    /// Write the dangling comma older tooling produced.
    pub legacy_trailing_comma: bool,
    /// Default log level when neither `RUST_LOG` nor a flag sets one.
    pub log_level: Option<String>,
    /// Log to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            messages_dir: None,
            locales_dir: None,
            indent_width: DEFAULT_INDENT_WIDTH,
            legacy_trailing_comma: false,
            log_level: None,
            log_file: None,
        }
    }
}

impl Settings {
    /// What: Resolve catalog directories against the project root.
    ///
    /// Inputs:
    /// - `root`: Project root.
    ///
    /// Output:
    /// - Configured directories, or the `intl/messages` / `intl/locales` defaults.
    #[must_use]
    pub fn catalog_paths(&self, root: &Path) -> CatalogPaths {
        let defaults = CatalogPaths::under_root(root);
        CatalogPaths {
            messages_dir: self
                .messages_dir
                .as_ref()
                .map_or(defaults.messages_dir, |p| root.join(p)),
            locales_dir: self
                .locales_dir
                .as_ref()
                .map_or(defaults.locales_dir, |p| root.join(p)),
        }
    }

    /// What: Writer options implied by these settings.
    #[must_use]
    pub const fn writer_options(&self) -> WriterOptions {
        WriterOptions {
            trailing_comma: if self.legacy_trailing_comma {
                TrailingComma::LastIndexed
            } else {
                TrailingComma::LastEmitted
            },
            indent_width: self.indent_width,
        }
    }
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// What: Find the settings file to read.
///
/// Inputs:
/// - `explicit`: Path from `--config`, if any.
/// - `root`: Project root.
///
/// Output:
/// - First candidate that is a file, or `None`.
///
/// Details:
/// - An explicit path is returned even if it does not exist, so the caller
///   can report it.
#[must_use]
pub fn resolve_settings_path(explicit: Option<&Path>, root: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let candidates = [
        root.join(PROJECT_SETTINGS_FILE),
        xdg_base_dir("XDG_CONFIG_HOME", &[".config"])
            .join("intl-editor")
            .join("settings.conf"),
    ];
    candidates.into_iter().find(|p| p.is_file())
}

/// What: Load settings, falling back to defaults.
///
/// Inputs:
/// - `explicit`: Path from `--config`, if any.
/// - `root`: Project root.
///
/// Output:
/// - Parsed settings and the file they came from (if any).
///
/// Details:
/// - A missing or unreadable file is not an error; defaults are used and a
///   warning is logged.
#[must_use]
pub fn load_settings(explicit: Option<&Path>, root: &Path) -> (Settings, Option<PathBuf>) {
    let mut settings = Settings::default();
    let Some(path) = resolve_settings_path(explicit, root) else {
        return (settings, None);
    };
    match fs::read_to_string(&path) {
        Ok(content) => {
            parse_settings(&content, &mut settings);
            (settings, Some(path))
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "[Config] Failed to read settings; using defaults"
            );
            (settings, None)
        }
    }
}

//! Shared utilities for argument processing.

use std::path::Path;

use intl_editor::catalog::{CatalogPaths, TrailingComma, WriterOptions};
use intl_editor::settings::Settings;

/// What: Determine the log level based on command-line arguments and settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Loaded settings.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides everything, then `--log-level`, then the settings file.
/// - Defaults to `info` when logging to a file and `warn` on stderr, so reports
///   printed to the terminal are not buried in log lines.
pub fn determine_log_level(args: &crate::args::Args, settings: &Settings) -> String {
    if args.verbose {
        return "debug".to_string();
    }
    if let Some(level) = args.log_level.as_ref().or(settings.log_level.as_ref()) {
        return level.clone();
    }
    if args.log_file.is_some() || settings.log_file.is_some() {
        "info".to_string()
    } else {
        "warn".to_string()
    }
}

/// What: Catalog directories after applying command-line overrides.
///
/// Details:
/// - Directories given on the command line are taken as-is (relative to the
///   working directory); settings-file directories resolve against `root`.
pub fn resolve_catalog_paths(
    args: &crate::args::Args,
    root: &Path,
    settings: &Settings,
) -> CatalogPaths {
    let configured = settings.catalog_paths(root);
    CatalogPaths {
        messages_dir: args
            .messages_dir
            .clone()
            .unwrap_or(configured.messages_dir),
        locales_dir: args.locales_dir.clone().unwrap_or(configured.locales_dir),
    }
}

/// What: Writer options after applying command-line overrides.
pub fn resolve_writer_options(args: &crate::args::Args, settings: &Settings) -> WriterOptions {
    let mut options = settings.writer_options();
    if args.legacy_trailing_comma {
        options.trailing_comma = TrailingComma::LastIndexed;
    }
    if let Some(width) = args.indent_width {
        options.indent_width = width;
    }
    options
}

/// What: Split a `--set ID=TEXT` argument.
///
/// Inputs:
/// - `raw`: Argument text.
///
/// Output:
/// - `Some((id, text))` split on the first `=`; `None` when there is no `=` or the id is empty.
///
/// Details:
/// - The text is kept verbatim (no trimming) so leading spaces and an empty
///   value (`--set id=`) survive; the id is trimmed.
pub fn parse_set_pair(raw: &str) -> Option<(String, String)> {
    let (id, text) = raw.split_once('=')?;
    let id = id.trim();
    if id.is_empty() {
        return None;
    }
    Some((id.to_string(), text.to_string()))
}

//! Command-line argument definition and processing.

use std::path::{Path, PathBuf};

use clap::Parser;

use intl_editor::catalog::{CatalogError, Session};
use intl_editor::settings::Settings;

/// intl-editor - reconcile react-intl message catalogs with their translations
#[derive(Parser, Debug, Default)]
#[command(name = "intl-editor")]
#[command(version)]
#[command(about = "Reconcile react-intl source messages with locale catalogs and edit translations", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Project root holding intl/messages and intl/locales (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Source catalog directory, overrides the settings file
    #[arg(long, value_name = "DIR")]
    pub messages_dir: Option<PathBuf>,

    /// Locale catalog directory, overrides the settings file
    #[arg(long, value_name = "DIR")]
    pub locales_dir: Option<PathBuf>,

    /// Locale to work on (required for --matching, --missing, --orphaned and --set)
    #[arg(short, long, value_name = "CODE")]
    pub locale: Option<String>,

    /// Print per-locale counts (default when nothing else is requested)
    #[arg(short, long)]
    pub summary: bool,

    /// List translated messages of --locale
    #[arg(short = 'm', long)]
    pub matching: bool,

    /// List untranslated messages of --locale
    #[arg(short = 'M', long)]
    pub missing: bool,

    /// List translations of --locale that no source message references
    #[arg(short = 'o', long)]
    pub orphaned: bool,

    /// Print reports as JSON
    #[arg(long)]
    pub json: bool,

    /// Apply an edit submission file (JSON object with `locale`, `type` and `id: text` pairs)
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    /// Edit one message of --locale (repeatable), e.g. --set app.title="Titre"
    #[arg(long = "set", value_name = "ID=TEXT")]
    pub set: Vec<String>,

    /// How --set edits apply: `matching` updates, `missing` adds
    #[arg(long = "type", value_name = "TYPE")]
    pub edit_type: Option<String>,

    /// Reproduce the dangling comma older catalog writers left after a deleted last entry
    #[arg(long)]
    pub legacy_trailing_comma: bool,

    /// Spaces per indentation level in written catalogs
    #[arg(long, value_name = "N")]
    pub indent_width: Option<usize>,

    /// Settings file (default: <root>/intl-editor.conf, then ~/.config/intl-editor/settings.conf)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Disable colored log output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// What: Whether any edit was requested.
    #[must_use]
    pub fn wants_save(&self) -> bool {
        self.save.is_some() || !self.set.is_empty()
    }

    /// What: Whether any listing was requested.
    #[must_use]
    pub const fn wants_listing(&self) -> bool {
        self.matching || self.missing || self.orphaned
    }
}

/// What: Run everything the command line asked for.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `root`: Project root.
/// - `settings`: Loaded settings.
///
/// Output:
/// - `Ok(())` when every requested action succeeded.
///
/// # Errors
/// - Any fatal `CatalogError` from loading, saving, or a listing that needs a locale.
///
/// Details:
/// - Edits are applied first so the reports reflect the saved state.
/// - With no action flags, the summary is printed.
pub fn process_args(args: &Args, root: &Path, settings: &Settings) -> Result<(), CatalogError> {
    use crate::args::{report, save, utils};

    let paths = utils::resolve_catalog_paths(args, root, settings);
    let writer = utils::resolve_writer_options(args, settings);
    let mut session = Session::open(paths, args.locale.clone(), writer)?;

    if args.wants_save() {
        save::handle_save(&mut session, args)?;
    }

    if args.summary || !(args.wants_save() || args.wants_listing()) {
        report::handle_summary(&session, args.json);
    }
    if args.matching {
        report::handle_matching(&session, args.json)?;
    }
    if args.missing {
        report::handle_missing(&session, args.json)?;
    }
    if args.orphaned {
        report::handle_orphaned(&session, args.json)?;
    }
    Ok(())
}

//! intl-editor binary entrypoint kept minimal. Catalog logic lives in the library.

mod args;

use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use intl_editor::settings::load_settings;

/// Log timestamps as `YYYY-MM-DD HH:MM:SS` UTC.
struct EditorTimer;

impl tracing_subscriber::fmt::time::FormatTime for EditorTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        w.write_str(&format_utc(secs))
    }
}

/// What: Render seconds since the Unix epoch as a UTC date and time.
///
/// Details:
/// - Civil date from day count (proleptic Gregorian), no leap seconds.
fn format_utc(secs: u64) -> String {
    let days = secs / 86_400;
    let sod = secs % 86_400;
    // Shift the epoch to 0000-03-01 so leap days fall at the end of a cycle year.
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z % 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + u64::from(month <= 2);
    format!(
        "{year:04}-{month:02}-{day:02} {:02}:{:02}:{:02}",
        sod / 3600,
        sod % 3600 / 60,
        sod % 60
    )
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize the tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset.
/// - `log_file`: Append logs here instead of stderr, if set.
/// - `ansi`: Color stderr output.
///
/// Details:
/// - File logging goes through a non-blocking writer whose guard lives in
///   `LOG_GUARD` until exit.
/// - If the log file cannot be opened, falls back to stderr with a warning.
fn init_logging(level: &str, log_file: Option<&PathBuf>, ansi: bool) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };

    if let Some(path) = log_file {
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter())
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .with_timer(EditorTimer)
                    .init();
                let _ = LOG_GUARD.set(guard);
                tracing::info!(path = %path.display(), "logging initialized");
                return;
            }
            Err(e) => {
                init_stderr(env_filter(), ansi);
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to open log file; using stderr"
                );
                return;
            }
        }
    }
    init_stderr(env_filter(), ansi);
}

/// What: Install a stderr subscriber.
fn init_stderr(env_filter: tracing_subscriber::EnvFilter, ansi: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(std::io::stderr)
        .with_timer(EditorTimer)
        .init();
}

fn main() -> ExitCode {
    let args = args::Args::parse();
    let root = args.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let (settings, settings_path) = load_settings(args.config.as_deref(), &root);

    let level = args::determine_log_level(&args, &settings);
    let log_file = args.log_file.as_ref().or(settings.log_file.as_ref());
    init_logging(&level, log_file, !args.no_color);

    tracing::info!(
        root = %root.display(),
        settings = ?settings_path,
        "intl-editor starting"
    );

    match args::process_args(&args, &root, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "intl-editor failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

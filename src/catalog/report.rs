//! Plain-text rendering of reconciliation results.
//!
//! JSON output goes straight through `serde_json` on the same types; this
//! module only covers the human-readable form.

use std::fmt::Write as _;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::catalog::types::{LocaleEntry, MatchingString, SourceMessage};

/// Reconciliation counts for one locale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocaleSummary {
    /// Locale code.
    pub locale: String,
    /// Entries in the locale file, deleted (empty) ones included.
    pub entry_count: usize,
    /// Source messages with a translation.
    pub matching: usize,
    /// Source messages without a translation.
    pub missing: usize,
    /// Translations no source message references.
    pub orphaned: usize,
}

/// What: Right-pad `text` with spaces to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let mut out = text.to_string();
    for _ in text.width()..width {
        out.push(' ');
    }
    out
}

/// What: Render the per-locale summary as an aligned table.
///
/// Inputs:
/// - `summaries`: Rows, already ordered.
///
/// Output:
/// - Header plus one line per locale; numbers are right-aligned.
///
/// Details:
/// - Column widths use display width so CJK or emoji locale labels align.
#[must_use]
pub fn render_summary_table(summaries: &[LocaleSummary]) -> String {
    const HEADERS: [&str; 5] = ["LOCALE", "ENTRIES", "MATCHING", "MISSING", "ORPHANED"];

    let locale_w = summaries
        .iter()
        .map(|s| s.locale.width())
        .chain(std::iter::once(HEADERS[0].width()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = write!(out, "{}", pad(HEADERS[0], locale_w));
    for header in &HEADERS[1..] {
        let _ = write!(out, "  {header}");
    }
    out.push('\n');

    for s in summaries {
        let _ = writeln!(
            out,
            "{}  {:>w1$}  {:>w2$}  {:>w3$}  {:>w4$}",
            pad(&s.locale, locale_w),
            s.entry_count,
            s.matching,
            s.missing,
            s.orphaned,
            w1 = HEADERS[1].len(),
            w2 = HEADERS[2].len(),
            w3 = HEADERS[3].len(),
            w4 = HEADERS[4].len(),
        );
    }
    out
}

/// What: Render translated messages with their source text.
#[must_use]
pub fn render_matching(strings: &[MatchingString]) -> String {
    let mut out = String::new();
    for s in strings {
        let _ = writeln!(out, "{}", s.id);
        let _ = writeln!(out, "  default: {}", s.default_message);
        let _ = writeln!(out, "  current: {}", s.message);
        if !s.description.is_empty() {
            let _ = writeln!(out, "  note:    {}", s.description);
        }
    }
    out
}

/// What: Render untranslated source messages.
#[must_use]
pub fn render_missing(messages: &[SourceMessage]) -> String {
    let mut out = String::new();
    for m in messages {
        let _ = writeln!(out, "{}", m.id);
        let _ = writeln!(out, "  default: {}", m.default_message);
        if !m.description.is_empty() {
            let _ = writeln!(out, "  note:    {}", m.description);
        }
    }
    out
}

/// What: Render orphaned entries as aligned `key  value` lines.
#[must_use]
pub fn render_orphaned(entries: &[LocaleEntry]) -> String {
    let key_w = entries.iter().map(|e| e.key.width()).max().unwrap_or(0);
    let mut out = String::new();
    for e in entries {
        let _ = writeln!(out, "{}  {}", pad(&e.key, key_w), e.value);
    }
    out
}

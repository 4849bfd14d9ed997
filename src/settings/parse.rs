//! `key = value` settings file parsing.

use std::path::PathBuf;

use crate::settings::Settings;

/// What: Check if a line should be skipped (empty or comment).
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Split a line on its first `=` into a normalized key and raw value.
///
/// Output:
/// - `Some((key, value))` with the key lowercased and `.`, `-`, space folded
///   to `_`; `None` when the line has no `=`.
fn parse_key_value(line: &str) -> Option<(String, &str)> {
    let (raw_key, raw_value) = line.trim().split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    Some((key, strip_inline_comment(raw_value.trim())))
}

/// What: Drop a trailing `# ...` or `// ...` comment from a value.
///
/// Details:
/// - A leading `#` is kept as part of the value so `#`-prefixed strings survive.
fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find("//") {
        s = &s[..i];
    }
    if let Some(i_rel) = if let Some(stripped) = s.strip_prefix('#') {
        stripped.find('#').map(|j| j + 1)
    } else {
        s.find('#')
    } {
        s = &s[..i_rel];
    }
    s.trim()
}

/// What: Interpret a settings flag value.
fn parse_bool(val: &str) -> bool {
    let lv = val.to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

/// What: Apply settings file content on top of `settings`.
///
/// Inputs:
/// - `content`: Settings file content.
/// - `settings`: Values to update in place.
///
/// Details:
/// - Unknown keys and unparsable values are ignored with a debug log; a bad
///   settings file never stops the editor.
/// - Empty values clear optional settings back to their default.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        let optional_path = || (!val.is_empty()).then(|| PathBuf::from(val));
        match key.as_str() {
            "messages_dir" | "source_dir" => settings.messages_dir = optional_path(),
            "locales_dir" | "locale_dir" => settings.locales_dir = optional_path(),
            "indent_width" | "indent" => match val.parse::<usize>() {
                Ok(v) if v <= 16 => settings.indent_width = v,
                _ => tracing::debug!(value = %val, "[Config] Ignoring invalid indent_width"),
            },
            "legacy_trailing_comma" => settings.legacy_trailing_comma = parse_bool(val),
            "log_level" => {
                settings.log_level = (!val.is_empty()).then(|| val.to_ascii_lowercase());
            }
            "log_file" => settings.log_file = optional_path(),
            other => tracing::debug!(key = %other, "[Config] Ignoring unknown setting"),
        }
    }
}

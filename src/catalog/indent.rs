//! Character-level JSON pretty-printer.
//!
//! The writer assembles catalog text by hand, so the indenter must not
//! re-parse it: it only reflows structure characters outside string literals.
//! This also means text that is not strictly valid JSON (the legacy trailing
//! comma) is laid out instead of rejected.

/// Indentation unit used when no width is configured.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Line break owed before the next emitted character.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Break {
    /// Nothing pending.
    None,
    /// Just opened a container; an immediate close keeps it on one line.
    AfterOpen,
    /// Just emitted a separator.
    AfterComma,
}

/// What: Pretty-print JSON text with the default two-space indentation.
#[must_use]
pub fn indent(json: &str) -> String {
    indent_with(json, DEFAULT_INDENT_WIDTH)
}

/// What: Pretty-print JSON text with `width` spaces per level.
///
/// Inputs:
/// - `json`: Compact or loosely formatted JSON text.
/// - `width`: Spaces per nesting level.
///
/// Output:
/// - One member per line, `": "` after keys, no trailing newline.
///
/// Details:
/// - Whitespace outside string literals is discarded and regenerated.
/// - String literals are copied verbatim, honoring backslash escapes when
///   looking for the closing quote.
/// - Empty containers stay compact (`{}`).
#[must_use]
pub fn indent_with(json: &str, width: usize) -> String {
    let unit = " ".repeat(width);
    let mut out = String::with_capacity(json.len() * 2);
    let mut depth: usize = 0;
    let mut in_string = false;
    let mut escaped = false;
    let mut pending = Break::None;

    let newline = |out: &mut String, depth: usize| {
        out.push('\n');
        for _ in 0..depth {
            out.push_str(&unit);
        }
    };

    for c in json.chars() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        if c.is_whitespace() {
            continue;
        }

        if matches!(c, '}' | ']') {
            depth = depth.saturating_sub(1);
            if pending != Break::AfterOpen {
                newline(&mut out, depth);
            }
            pending = Break::None;
            out.push(c);
            continue;
        }

        if pending != Break::None {
            newline(&mut out, depth);
            pending = Break::None;
        }
        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '{' | '[' => {
                out.push(c);
                depth += 1;
                pending = Break::AfterOpen;
            }
            ',' => {
                out.push(c);
                pending = Break::AfterComma;
            }
            ':' => out.push_str(": "),
            _ => out.push(c),
        }
    }
    out
}

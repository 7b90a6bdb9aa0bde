//! ANSI color decoration for rendered HRON text.
//!
//! Coloring is a pure post-processing step over the finished document:
//! the text is re-scanned with the same lexical classes the tokenizer
//! uses and each span is wrapped in an ANSI code. [`strip`] removes the
//! codes again, so `strip(colorize(text)) == text` for any text that
//! contains no escape sequences of its own.

const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const BRIGHT_BLACK: &str = "\x1b[90m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

fn paint(out: &mut String, code: &str, span: &str) {
    out.push_str(code);
    out.push_str(span);
    out.push_str(RESET);
}

/// Decorates HRON text with ANSI colors.
///
/// Strings are green, numbers cyan, booleans yellow, `null` dim gray,
/// field names blue, comments dim. Symbols and whitespace pass through
/// unchanged.
pub fn colorize(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];

        if c == '#' {
            let start = pos;
            while pos < chars.len() && chars[pos] != '\n' {
                pos += 1;
            }
            let span: String = chars[start..pos].iter().collect();
            paint(&mut out, DIM, &span);
            continue;
        }

        if c == '\'' || c == '"' {
            let quote = c;
            let start = pos;
            pos += 1;
            while pos < chars.len() && chars[pos] != quote {
                pos += 1;
            }
            if pos < chars.len() {
                pos += 1;
            }
            let span: String = chars[start..pos].iter().collect();
            paint(&mut out, GREEN, &span);
            continue;
        }

        if c.is_ascii_digit()
            || (c == '-' && pos + 1 < chars.len() && chars[pos + 1].is_ascii_digit())
        {
            let start = pos;
            pos += 1;
            while pos < chars.len() && (chars[pos].is_ascii_digit() || chars[pos] == '.') {
                pos += 1;
            }
            let span: String = chars[start..pos].iter().collect();
            paint(&mut out, CYAN, &span);
            continue;
        }

        if c.is_ascii_alphabetic() || c == '_' {
            let start = pos;
            while pos < chars.len() && (chars[pos].is_ascii_alphanumeric() || chars[pos] == '_') {
                pos += 1;
            }
            let span: String = chars[start..pos].iter().collect();
            let code = match span.as_str() {
                "true" | "false" => YELLOW,
                "null" => BRIGHT_BLACK,
                _ => BLUE,
            };
            paint(&mut out, code, &span);
            continue;
        }

        out.push(c);
        pos += 1;
    }

    out
}

/// Removes ANSI escape sequences of the form `ESC [ ... m`.
pub fn strip(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for skipped in chars.by_ref() {
                if skipped == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

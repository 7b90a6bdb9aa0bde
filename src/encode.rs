//! Encoding of [`HronValue`] trees into HRON text.
//!
//! Encoding runs two independent emitters over the same value. The
//! schema emitter derives the header from field names and container
//! shapes; the value emitter renders literals with layout driven by
//! [`HronOptions`]. Composition strips the shared outer brackets from
//! both sides and joins them with `: `.

use crate::color;
use crate::error::{Error, Result};
use crate::options::HronOptions;
use crate::value::Number;
use crate::HronValue;

/// Encodes a value as a complete HRON document.
pub fn encode(value: &HronValue, options: &HronOptions) -> Result<String> {
    let schema = schema_string(value, "")?;
    let rendered = render_value(value, options.indent, 0)?;
    let composed = format!("{}: {}", strip_outer(&schema), strip_outer(&rendered));
    if options.colorize {
        Ok(color::colorize(&composed))
    } else {
        Ok(composed)
    }
}

/// Derives the schema header for a value.
///
/// Array element shape is taken from the first element; an empty array
/// emits a bare `[]`. Scalars contribute only their field name. Object
/// keys must re-lex as single identifiers, since the header carries
/// them unquoted.
fn schema_string(value: &HronValue, name: &str) -> Result<String> {
    match value {
        HronValue::Object(map) => {
            let mut fields = Vec::with_capacity(map.len());
            for (key, child) in map.iter() {
                if !is_identifier(key) {
                    return Err(Error::message(format!(
                        "object key {:?} is not a valid field name",
                        key
                    )));
                }
                fields.push(schema_string(child, key)?);
            }
            Ok(format!("{}{{{}}}", name, fields.join(",")))
        }
        HronValue::Array(items) => match items.first() {
            Some(first) => Ok(format!("{}[{}]", name, schema_string(first, "")?)),
            None => Ok(format!("{}[]", name)),
        },
        _ => Ok(name.to_string()),
    }
}

/// True when `key` lexes as a single Identifier token: a name run that
/// is not one of the keyword forms.
fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    let starts_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    starts_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !matches!(key, "true" | "false" | "null")
}

/// Renders the value block alone, without a schema header.
///
/// With `indent` zero everything stays on one line; otherwise
/// multi-entry containers break across lines, one entry per line.
pub(crate) fn render_value(value: &HronValue, indent: usize, depth: usize) -> Result<String> {
    match value {
        HronValue::Null => Ok("null".to_string()),
        HronValue::Bool(b) => Ok(b.to_string()),
        HronValue::Number(Number::Float(f)) if !f.is_finite() => Ok("null".to_string()),
        HronValue::Number(n) => Ok(n.to_string()),
        HronValue::String(s) => quote(s),
        HronValue::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                parts.push(render_value(item, indent, depth + 1)?);
            }
            Ok(render_group('[', ']', &parts, indent, depth))
        }
        HronValue::Object(map) => {
            let mut parts = Vec::with_capacity(map.len());
            for (_, child) in map.iter() {
                parts.push(render_value(child, indent, depth + 1)?);
            }
            Ok(render_group('{', '}', &parts, indent, depth))
        }
    }
}

fn render_group(open: char, close: char, parts: &[String], indent: usize, depth: usize) -> String {
    if parts.is_empty() {
        return format!("{}{}", open, close);
    }
    if indent == 0 {
        return format!("{}{}{}", open, parts.join(","), close);
    }
    // A lone container child hugs its parent's brackets.
    if parts.len() == 1 && (parts[0].starts_with('{') || parts[0].starts_with('[')) {
        return format!("{}{}{}", open, parts[0], close);
    }
    let inner_pad = " ".repeat(indent * (depth + 1));
    let outer_pad = " ".repeat(indent * depth);
    let separator = format!(",\n{}", inner_pad);
    format!(
        "{}\n{}{}\n{}{}",
        open,
        inner_pad,
        parts.join(&separator),
        outer_pad,
        close
    )
}

/// Quotes a string literal. There are no escape sequences, so a string
/// holding both quote characters cannot be represented.
fn quote(s: &str) -> Result<String> {
    if !s.contains('\'') {
        Ok(format!("'{}'", s))
    } else if !s.contains('"') {
        Ok(format!("\"{}\"", s))
    } else {
        Err(Error::message(format!(
            "string contains both quote characters and cannot be encoded: {:?}",
            s
        )))
    }
}

/// Removes one outer matched bracket pair, if present, and trims.
fn strip_outer(s: &str) -> String {
    let trimmed = s.trim();
    let stripped = trimmed
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .or_else(|| {
            trimmed
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
        });
    match stripped {
        Some(inner) => inner.trim().to_string(),
        None => trimmed.to_string(),
    }
}

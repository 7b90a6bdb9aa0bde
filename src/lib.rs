//! # hron
//!
//! A codec for HRON, a compact schema-annotated hierarchical text
//! notation. An HRON document separates structure from content: a
//! schema header names every field and declares container shapes, and
//! a value block carries nothing but the data, in matching order.
//!
//! ```text
//! users[{id,name}]: [{1,'a'},{2,'b'}]
//! ```
//!
//! decodes to the same tree as the JSON
//! `{"users":[{"id":1,"name":"a"},{"id":2,"name":"b"}]}` — the field
//! names are written once, however many rows follow.
//!
//! ## Decoding
//!
//! [`from_str`] runs the full pipeline (tokenize, parse, flatten,
//! reconcile) and produces a dynamic [`HronValue`]:
//!
//! ```rust
//! use hron::from_str;
//!
//! let value = from_str("users[{id,name}]: [{1,'a'},{2,'b'}]").unwrap();
//! let users = value.get("users").unwrap().as_array().unwrap();
//! assert_eq!(users.len(), 2);
//! assert_eq!(users[0].get("id").and_then(|v| v.as_i64()), Some(1));
//! ```
//!
//! ## Encoding
//!
//! Any `Serialize` type encodes directly; [`HronValue`] itself is
//! serializable, so decoded documents round-trip:
//!
//! ```rust
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! let users = vec![
//!     User { id: 1, name: "a".to_string() },
//!     User { id: 2, name: "b".to_string() },
//! ];
//! let value = hron::hron!({ "users": (users) });
//! assert_eq!(
//!     hron::to_string_compact(&value).unwrap(),
//!     "users[{id,name}]: [{1,'a'},{2,'b'}]"
//! );
//! ```
//!
//! ## Format summary
//!
//! - Objects are `{...}`, lists are `[...]`, entries are separated by
//!   commas; trailing commas are tolerated.
//! - Strings use `'` or `"` with no escape sequences; numbers are
//!   decimal integers or floats; `true`, `false` and `null` are
//!   keywords.
//! - `#` starts a comment running to end of line.
//! - A list schema with an element shape, `users[{id,name}]`, applies
//!   that shape to every element. An empty `[]` declares a flat list.

pub mod color;
pub mod decode;
pub mod encode;
pub mod error;
pub mod flatten;
pub mod lexer;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use map::HronMap;
pub use options::HronOptions;
pub use ser::{to_value, HronValueSerializer};
pub use value::{HronValue, Number};

/// Alias used by the [`hron!`] macro.
pub use value::HronValue as Value;

use serde::Serialize;
use std::io;

/// Decodes an HRON document from a string.
///
/// # Errors
///
/// Any lexical, grammatical, or reconciliation failure; see
/// [`Error`] for the taxonomy.
///
/// # Examples
///
/// ```rust
/// let value = hron::from_str("a,b: 1,'two'").unwrap();
/// assert_eq!(value.get("a").and_then(|v| v.as_i64()), Some(1));
/// assert_eq!(value.get("b").and_then(|v| v.as_str()), Some("two"));
/// ```
pub fn from_str(input: &str) -> Result<HronValue> {
    decode::decode(input)
}

/// Decodes an HRON document, bounding container nesting at `limit`
/// levels instead of the default
/// [`DEFAULT_DEPTH_LIMIT`](parser::DEFAULT_DEPTH_LIMIT).
pub fn from_str_with_limit(input: &str, limit: usize) -> Result<HronValue> {
    decode::decode_with_limit(input, limit)
}

/// Decodes an HRON document from UTF-8 bytes.
pub fn from_slice(input: &[u8]) -> Result<HronValue> {
    let text = std::str::from_utf8(input)
        .map_err(|e| Error::message(format!("invalid UTF-8: {}", e)))?;
    from_str(text)
}

/// Decodes an HRON document from a reader.
///
/// The reader is drained before decoding begins; HRON has no framing,
/// so a document is always a complete text.
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<HronValue> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&text)
}

/// Encodes a value as HRON with the default options (two-space indent,
/// no color).
///
/// # Examples
///
/// ```rust
/// use hron::hron;
///
/// let value = hron!({"a": 1, "b": 2});
/// assert_eq!(hron::to_string(&value).unwrap(), "a,b: 1,\n  2");
/// ```
pub fn to_string<T: Serialize>(value: &T) -> Result<String> {
    to_string_with_options(value, &HronOptions::default())
}

/// Encodes a value as single-line HRON.
///
/// # Examples
///
/// ```rust
/// use hron::hron;
///
/// let value = hron!({"a": 1, "b": "two"});
/// assert_eq!(hron::to_string_compact(&value).unwrap(), "a,b: 1,'two'");
/// ```
pub fn to_string_compact<T: Serialize>(value: &T) -> Result<String> {
    to_string_with_options(value, &HronOptions::compact())
}

/// Encodes a value as HRON with explicit options.
pub fn to_string_with_options<T: Serialize>(value: &T, options: &HronOptions) -> Result<String> {
    let value = to_value(value)?;
    encode::encode(&value, options)
}

/// Encodes a value as HRON into a writer, using the default options.
pub fn to_writer<W: io::Write, T: Serialize>(writer: W, value: &T) -> Result<()> {
    to_writer_with_options(writer, value, &HronOptions::default())
}

/// Encodes a value as HRON into a writer with explicit options.
pub fn to_writer_with_options<W: io::Write, T: Serialize>(
    mut writer: W,
    value: &T,
    options: &HronOptions,
) -> Result<()> {
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_compact() {
        let value = hron!({"users": [
            {"id": 1, "name": "a"},
            {"id": 2, "name": "b"}
        ]});
        let text = to_string_compact(&value).unwrap();
        assert_eq!(from_str(&text).unwrap(), value);
    }

    #[test]
    fn test_roundtrip_pretty() {
        let value = hron!({"a": 1, "b": {"c": "x", "d": null}});
        let text = to_string(&value).unwrap();
        assert_eq!(from_str(&text).unwrap(), value);
    }

    #[test]
    fn test_from_slice() {
        let value = from_slice(b"a: 1").unwrap();
        assert_eq!(value, hron!({"a": 1}));
        assert!(from_slice(&[0xff, 0xfe]).is_err());
    }

    #[test]
    fn test_depth_limit_entry_point() {
        let mut input = String::from("a: ");
        for _ in 0..200 {
            input.push('[');
        }
        input.push('1');
        for _ in 0..200 {
            input.push(']');
        }
        assert!(matches!(
            from_str(&input),
            Err(Error::DepthLimit { limit: 128 })
        ));
        assert!(from_str_with_limit(&input, 256).is_ok());
    }

    #[test]
    fn test_serialize_struct_directly() {
        #[derive(serde::Serialize)]
        struct Point {
            x: i32,
            y: i32,
        }
        let text = to_string_compact(&Point { x: 3, y: (-4) }).unwrap();
        assert_eq!(text, "x,y: 3,-4");
    }
}

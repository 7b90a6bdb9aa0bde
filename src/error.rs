//! Error types for HRON decoding and encoding.
//!
//! Every stage of the codec fails fast: the first error aborts the whole
//! call and surfaces here as a single descriptive value. Nothing is retried
//! and no partial output is produced.
//!
//! ## Error categories
//!
//! - **Lexical**: [`Error::UnterminatedString`], [`Error::UnexpectedCharacter`]
//! - **Grammatical**: [`Error::UnexpectedToken`], [`Error::UnexpectedEndOfInput`],
//!   [`Error::DepthLimit`]
//! - **Structural** (schema/data reconciliation): [`Error::SchemaMismatch`],
//!   [`Error::ExtraValues`], [`Error::UndefinedKey`]
//! - **Ambient**: [`Error::Io`], [`Error::Message`]
//!
//! ## Examples
//!
//! ```rust
//! use hron::{from_str, Error};
//!
//! let result = from_str("name: 'unclosed");
//! assert!(matches!(result, Err(Error::UnterminatedString { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// All failures the codec can report.
///
/// Lexical errors carry character offsets into the original input;
/// structural errors identify the field and kinds involved.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A quote was opened and no matching close quote follows.
    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    /// The lexer met a character that matches no rule.
    #[error("unexpected character {character:?} at offset {offset}")]
    UnexpectedCharacter { character: char, offset: usize },

    /// The parser needed another token and the input ended.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },

    /// The parser met a token of the wrong kind or literal.
    #[error("unexpected token {found:?}, expected {expected}")]
    UnexpectedToken { expected: String, found: String },

    /// Nesting exceeded the configured maximum depth.
    #[error("nesting exceeds the maximum depth of {limit}")]
    DepthLimit { limit: usize },

    /// A data entry's composite kind disagrees with its declared schema kind.
    #[error("schema mismatch for {field:?}: declared {declared}, found {actual}")]
    SchemaMismatch {
        field: String,
        declared: &'static str,
        actual: &'static str,
    },

    /// Data entries remained after reconciliation placed everything the
    /// schema describes.
    #[error("{count} value(s) left over after reconciliation")]
    ExtraValues { count: usize },

    /// A key was required and none is defined at that position.
    #[error("undefined key under {field:?}")]
    UndefinedKey { field: String },

    /// IO error during reading or writing.
    #[error("IO error: {0}")]
    Io(String),

    /// Generic message (also carries serde `custom` errors).
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an unexpected-token error from the expected description and
    /// the offending token's literal.
    pub fn unexpected_token(expected: &str, found: &str) -> Self {
        Error::UnexpectedToken {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an unexpected-end-of-input error.
    pub fn unexpected_eof(expected: &str) -> Self {
        Error::UnexpectedEndOfInput {
            expected: expected.to_string(),
        }
    }

    /// Creates a schema-mismatch error for a field whose data kind
    /// disagrees with its declaration.
    pub fn schema_mismatch(field: &str, declared: &'static str, actual: &'static str) -> Self {
        Error::SchemaMismatch {
            field: field.to_string(),
            declared,
            actual,
        }
    }

    /// Creates an undefined-key error naming the surrounding field.
    pub fn undefined_key(field: &str) -> Self {
        Error::UndefinedKey {
            field: field.to_string(),
        }
    }

    /// Creates an I/O error from a display message.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a generic error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hron::Error;
    ///
    /// let err = Error::message("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn message<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

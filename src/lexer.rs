//! Tokenizer for HRON text.
//!
//! Splits raw input into a flat token stream, discarding whitespace and
//! `#` comments. Offsets are character indices into the input and are
//! carried on lexical errors only; the parser reports positions in
//! token terms.

use crate::error::{Error, Result};

/// The lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A bare name: `[A-Za-z_][A-Za-z0-9_]*`, excluding the keyword
    /// forms below.
    Identifier,
    /// An integer or decimal literal, optionally negative.
    Number,
    /// A quoted string, either `'...'` or `"..."`. The literal carries
    /// the content without the quotes.
    String,
    /// `true` or `false`.
    Boolean,
    /// The keyword `null`.
    Null,
    /// One of `{ } [ ] , . :`.
    Symbol,
}

/// A single lexeme with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// True for a symbol token with exactly this spelling.
    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Symbol && self.literal == symbol
    }
}

const SYMBOLS: &[char] = &['{', '}', '[', ']', ',', '.', ':'];

/// Tokenizes HRON text into a flat stream.
///
/// # Errors
///
/// Returns [`Error::UnterminatedString`] for a quote with no closing
/// partner, and [`Error::UnexpectedCharacter`] for any character no
/// rule accepts, including malformed numbers such as `1.2.3`.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];

        if c.is_whitespace() {
            pos += 1;
            continue;
        }

        // Comments run to end of line.
        if c == '#' {
            while pos < chars.len() && chars[pos] != '\n' {
                pos += 1;
            }
            continue;
        }

        if SYMBOLS.contains(&c) {
            tokens.push(Token::new(TokenKind::Symbol, c.to_string()));
            pos += 1;
            continue;
        }

        if c == '\'' || c == '"' {
            let quote = c;
            let start = pos;
            pos += 1;
            let content_start = pos;
            while pos < chars.len() && chars[pos] != quote {
                pos += 1;
            }
            if pos >= chars.len() {
                return Err(Error::UnterminatedString { offset: start });
            }
            let content: String = chars[content_start..pos].iter().collect();
            tokens.push(Token::new(TokenKind::String, content));
            pos += 1;
            continue;
        }

        if c.is_ascii_digit() || (c == '-' && pos + 1 < chars.len() && chars[pos + 1].is_ascii_digit())
        {
            let start = pos;
            if c == '-' {
                pos += 1;
            }
            let mut saw_dot = false;
            while pos < chars.len() {
                let d = chars[pos];
                if d.is_ascii_digit() {
                    pos += 1;
                } else if d == '.' && !saw_dot && pos + 1 < chars.len()
                    && chars[pos + 1].is_ascii_digit()
                {
                    saw_dot = true;
                    pos += 1;
                } else {
                    break;
                }
            }
            let lexeme: String = chars[start..pos].iter().collect();
            if lexeme.parse::<f64>().is_err() {
                return Err(Error::UnexpectedCharacter {
                    character: c,
                    offset: start,
                });
            }
            tokens.push(Token::new(TokenKind::Number, lexeme));
            continue;
        }

        if c.is_ascii_alphabetic() || c == '_' {
            let start = pos;
            while pos < chars.len() && (chars[pos].is_ascii_alphanumeric() || chars[pos] == '_') {
                pos += 1;
            }
            let lexeme: String = chars[start..pos].iter().collect();
            let kind = match lexeme.as_str() {
                "true" | "false" => TokenKind::Boolean,
                "null" => TokenKind::Null,
                _ => TokenKind::Identifier,
            };
            tokens.push(Token::new(kind, lexeme));
            continue;
        }

        return Err(Error::UnexpectedCharacter {
            character: c,
            offset: pos,
        });
    }

    Ok(tokens)
}

//! Recursive-descent parser for HRON token streams.
//!
//! A document is a schema header and a value block separated by the
//! first top-level `:`. The header names fields and declares container
//! shapes; the value block carries literals in matching order. Both
//! sides are parsed into small trees here and reconciled later.
//!
//! Grammar, informally:
//!
//! ```text
//! Document  := KeyList ':' ValueList
//! KeyList   := KeyNode (',' KeyNode)* ','?
//! KeyNode   := IDENT ('{' KeyList? '}' | '[' KeyList? ']')?
//!            | '{' KeyList? '}'
//!            | '[' KeyList? ']'
//! ValueList := ValueNode (',' ValueNode)* ','?
//! ValueNode := '{' ValueList? '}' | '[' ValueList? ']' | literal
//! ```

use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};

/// Container shape a schema node declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Object,
    List,
    Leaf,
}

impl SchemaKind {
    pub(crate) fn describe(self) -> &'static str {
        match self {
            SchemaKind::Object => "object",
            SchemaKind::List => "list",
            SchemaKind::Leaf => "leaf",
        }
    }
}

/// One node of the schema header tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    pub kind: SchemaKind,
    /// Field name. Empty for unnamed container nodes.
    pub name: String,
    pub children: Vec<SchemaNode>,
}

/// The shape of a value node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Object,
    List,
    String,
    Number,
    Boolean,
    Null,
}

impl DataKind {
    pub(crate) fn describe(self) -> &'static str {
        match self {
            DataKind::Object => "object",
            DataKind::List => "list",
            DataKind::String => "string",
            DataKind::Number => "number",
            DataKind::Boolean => "boolean",
            DataKind::Null => "null",
        }
    }

    pub(crate) fn is_composite(self) -> bool {
        matches!(self, DataKind::Object | DataKind::List)
    }
}

/// One node of the value block tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DataNode {
    pub kind: DataKind,
    /// Scalar lexeme. Empty for containers.
    pub literal: String,
    pub children: Vec<DataNode>,
}

/// A parsed document: schema header and value block side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub keys: Vec<SchemaNode>,
    pub values: Vec<DataNode>,
}

/// Default ceiling on container nesting, applied to both sides.
pub const DEFAULT_DEPTH_LIMIT: usize = 128;

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    limit: usize,
}

/// Parses a token stream into a [`Document`] with the default depth limit.
pub fn parse_document(tokens: Vec<Token>) -> Result<Document> {
    parse_document_with_limit(tokens, DEFAULT_DEPTH_LIMIT)
}

/// Parses a token stream into a [`Document`], bounding container
/// nesting at `limit` levels.
pub fn parse_document_with_limit(tokens: Vec<Token>, limit: usize) -> Result<Document> {
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        limit,
    };
    let keys = parser.parse_key_list(&[":"])?;
    parser.expect_symbol(":")?;
    let values = parser.parse_value_list(&[])?;
    if let Some(token) = parser.peek() {
        return Err(Error::unexpected_token("end of input", &token.literal));
    }
    Ok(Document { keys, values })
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect_symbol(&mut self, symbol: &str) -> Result<()> {
        match self.advance() {
            Some(token) if token.is_symbol(symbol) => Ok(()),
            Some(token) => Err(Error::unexpected_token(symbol, &token.literal)),
            None => Err(Error::unexpected_eof(symbol)),
        }
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.limit {
            return Err(Error::DepthLimit { limit: self.limit });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// True when the next token is one of the given closing symbols.
    fn at_terminator(&self, terminators: &[&str]) -> bool {
        match self.peek() {
            Some(token) => terminators.iter().any(|t| token.is_symbol(t)),
            None => terminators.is_empty(),
        }
    }

    /// Parses a comma-separated list of key nodes, stopping before any
    /// of `terminators` (or end of input when the list is empty).
    fn parse_key_list(&mut self, terminators: &[&str]) -> Result<Vec<SchemaNode>> {
        let mut nodes = Vec::new();
        if self.at_terminator(terminators) {
            return Ok(nodes);
        }
        loop {
            nodes.push(self.parse_key_node()?);
            match self.peek() {
                Some(token) if token.is_symbol(",") => {
                    self.advance();
                    // Trailing comma before a terminator.
                    if self.at_terminator(terminators) {
                        break;
                    }
                }
                _ => break,
            }
        }
        Ok(nodes)
    }

    fn parse_key_node(&mut self) -> Result<SchemaNode> {
        let token = match self.peek() {
            Some(token) => token.clone(),
            None => return Err(Error::unexpected_eof("field name or container")),
        };

        if token.is_symbol("{") || token.is_symbol("[") {
            let (kind, node_children) = self.parse_key_container()?;
            return Ok(SchemaNode {
                kind,
                name: String::new(),
                children: node_children,
            });
        }

        if token.kind != TokenKind::Identifier {
            return Err(Error::unexpected_token("field name", &token.literal));
        }
        self.advance();
        let name = token.literal;

        match self.peek() {
            Some(next) if next.is_symbol("{") || next.is_symbol("[") => {
                let (kind, children) = self.parse_key_container()?;
                Ok(SchemaNode { kind, name, children })
            }
            _ => Ok(SchemaNode {
                kind: SchemaKind::Leaf,
                name,
                children: Vec::new(),
            }),
        }
    }

    fn parse_key_container(&mut self) -> Result<(SchemaKind, Vec<SchemaNode>)> {
        let open = match self.advance() {
            Some(token) => token,
            None => return Err(Error::unexpected_eof("{ or [")),
        };
        let (kind, close) = if open.is_symbol("{") {
            (SchemaKind::Object, "}")
        } else if open.is_symbol("[") {
            (SchemaKind::List, "]")
        } else {
            return Err(Error::unexpected_token("{ or [", &open.literal));
        };
        self.enter()?;
        let children = self.parse_key_list(&[close])?;
        self.expect_symbol(close)?;
        self.leave();
        Ok((kind, children))
    }

    fn parse_value_list(&mut self, terminators: &[&str]) -> Result<Vec<DataNode>> {
        let mut nodes = Vec::new();
        if self.at_terminator(terminators) {
            return Ok(nodes);
        }
        loop {
            nodes.push(self.parse_value_node()?);
            match self.peek() {
                Some(token) if token.is_symbol(",") => {
                    self.advance();
                    if self.at_terminator(terminators) {
                        break;
                    }
                }
                _ => break,
            }
        }
        Ok(nodes)
    }

    fn parse_value_node(&mut self) -> Result<DataNode> {
        let token = match self.advance() {
            Some(token) => token,
            None => return Err(Error::unexpected_eof("value")),
        };

        if token.is_symbol("{") || token.is_symbol("[") {
            let (kind, close) = if token.is_symbol("{") {
                (DataKind::Object, "}")
            } else {
                (DataKind::List, "]")
            };
            self.enter()?;
            let children = self.parse_value_list(&[close])?;
            self.expect_symbol(close)?;
            self.leave();
            return Ok(DataNode {
                kind,
                literal: String::new(),
                children,
            });
        }

        let kind = match token.kind {
            TokenKind::String => DataKind::String,
            TokenKind::Number => DataKind::Number,
            TokenKind::Boolean => DataKind::Boolean,
            TokenKind::Null => DataKind::Null,
            _ => return Err(Error::unexpected_token("value", &token.literal)),
        };
        Ok(DataNode {
            kind,
            literal: token.literal,
            children: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse(input: &str) -> Result<Document> {
        parse_document(tokenize(input)?)
    }

    #[test]
    fn test_simple_document() {
        let doc = parse("a,b: 1,'two'").unwrap();
        assert_eq!(doc.keys.len(), 2);
        assert_eq!(doc.keys[0].name, "a");
        assert_eq!(doc.keys[0].kind, SchemaKind::Leaf);
        assert_eq!(doc.values.len(), 2);
        assert_eq!(doc.values[0].kind, DataKind::Number);
        assert_eq!(doc.values[1].kind, DataKind::String);
        assert_eq!(doc.values[1].literal, "two");
    }

    #[test]
    fn test_tabular_schema() {
        let doc = parse("users[{id,name}]: [{1,'a'},{2,'b'}]").unwrap();
        assert_eq!(doc.keys.len(), 1);
        let users = &doc.keys[0];
        assert_eq!(users.name, "users");
        assert_eq!(users.kind, SchemaKind::List);
        assert_eq!(users.children.len(), 1);
        assert_eq!(users.children[0].kind, SchemaKind::Object);
        assert_eq!(users.children[0].children.len(), 2);

        assert_eq!(doc.values.len(), 1);
        let rows = &doc.values[0];
        assert_eq!(rows.kind, DataKind::List);
        assert_eq!(rows.children.len(), 2);
        assert_eq!(rows.children[0].kind, DataKind::Object);
    }

    #[test]
    fn test_unnamed_container_key() {
        let doc = parse("{a,b}: {1,2}").unwrap();
        assert_eq!(doc.keys.len(), 1);
        assert_eq!(doc.keys[0].name, "");
        assert_eq!(doc.keys[0].kind, SchemaKind::Object);
        assert_eq!(doc.keys[0].children.len(), 2);
    }

    #[test]
    fn test_empty_containers() {
        let doc = parse("a[],b{}: [],{}").unwrap();
        assert_eq!(doc.keys[0].kind, SchemaKind::List);
        assert!(doc.keys[0].children.is_empty());
        assert_eq!(doc.keys[1].kind, SchemaKind::Object);
        assert!(doc.values[0].children.is_empty());
    }

    #[test]
    fn test_trailing_commas() {
        let doc = parse("a,b,: 1,2,").unwrap();
        assert_eq!(doc.keys.len(), 2);
        assert_eq!(doc.values.len(), 2);

        let doc = parse("users[{id,}]: [{1,},]").unwrap();
        assert_eq!(doc.keys[0].children[0].children.len(), 1);
        assert_eq!(doc.values[0].children.len(), 1);
    }

    #[test]
    fn test_missing_colon() {
        match parse("a 1") {
            Err(Error::UnexpectedToken { expected, found }) => {
                assert_eq!(expected, ":");
                assert_eq!(found, "1");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_is_error() {
        assert!(matches!(parse(""), Err(Error::UnexpectedEndOfInput { .. })));
    }

    #[test]
    fn test_unclosed_container() {
        assert!(matches!(
            parse("a: {1,2"),
            Err(Error::UnexpectedEndOfInput { .. })
        ));
    }

    #[test]
    fn test_depth_limit() {
        let mut input = String::from("a: ");
        for _ in 0..10 {
            input.push('[');
        }
        input.push('1');
        for _ in 0..10 {
            input.push(']');
        }
        let tokens = tokenize(&input).unwrap();
        match parse_document_with_limit(tokens.clone(), 4) {
            Err(Error::DepthLimit { limit }) => assert_eq!(limit, 4),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(parse_document_with_limit(tokens, 16).is_ok());
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        assert!(matches!(
            parse("a: 1 2"),
            Err(Error::UnexpectedToken { .. })
        ));
    }
}

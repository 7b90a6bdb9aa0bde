//! Pre-order flattening of parsed trees.
//!
//! The reconciler walks the schema and value sides as parallel flat
//! sequences rather than trees; nesting survives as an explicit depth
//! on each entry. Top-level nodes sit at depth 1.

use crate::parser::{DataKind, DataNode, SchemaKind, SchemaNode};

/// A schema node in document order with its nesting depth.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaEntry {
    pub name: String,
    pub kind: SchemaKind,
    pub depth: usize,
}

/// A value node in document order with its nesting depth.
#[derive(Debug, Clone, PartialEq)]
pub struct DataEntry {
    pub kind: DataKind,
    pub literal: String,
    pub depth: usize,
}

/// Flattens a schema header into pre-order entries.
pub fn flatten_schema(nodes: &[SchemaNode]) -> Vec<SchemaEntry> {
    let mut entries = Vec::new();
    for node in nodes {
        push_schema(node, 1, &mut entries);
    }
    entries
}

fn push_schema(node: &SchemaNode, depth: usize, entries: &mut Vec<SchemaEntry>) {
    entries.push(SchemaEntry {
        name: node.name.clone(),
        kind: node.kind,
        depth,
    });
    for child in &node.children {
        push_schema(child, depth + 1, entries);
    }
}

/// Flattens a value block into pre-order entries.
pub fn flatten_data(nodes: &[DataNode]) -> Vec<DataEntry> {
    let mut entries = Vec::new();
    for node in nodes {
        push_data(node, 1, &mut entries);
    }
    entries
}

fn push_data(node: &DataNode, depth: usize, entries: &mut Vec<DataEntry>) {
    entries.push(DataEntry {
        kind: node.kind,
        literal: node.literal.clone(),
        depth,
    });
    for child in &node.children {
        push_data(child, depth + 1, entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::parse_document;

    #[test]
    fn test_flatten_tabular() {
        let doc = parse_document(tokenize("users[{id,name}]: [{1,'a'}]").unwrap()).unwrap();

        let schema = flatten_schema(&doc.keys);
        let shape: Vec<(&str, SchemaKind, usize)> = schema
            .iter()
            .map(|e| (e.name.as_str(), e.kind, e.depth))
            .collect();
        assert_eq!(
            shape,
            vec![
                ("users", SchemaKind::List, 1),
                ("", SchemaKind::Object, 2),
                ("id", SchemaKind::Leaf, 3),
                ("name", SchemaKind::Leaf, 3),
            ]
        );

        let data = flatten_data(&doc.values);
        let shape: Vec<(DataKind, &str, usize)> = data
            .iter()
            .map(|e| (e.kind, e.literal.as_str(), e.depth))
            .collect();
        assert_eq!(
            shape,
            vec![
                (DataKind::List, "", 1),
                (DataKind::Object, "", 2),
                (DataKind::Number, "1", 3),
                (DataKind::String, "a", 3),
            ]
        );
    }

    #[test]
    fn test_flatten_scalars() {
        let doc = parse_document(tokenize("a,b: 1,2").unwrap()).unwrap();
        let data = flatten_data(&doc.values);
        assert_eq!(data.len(), 2);
        assert!(data.iter().all(|e| e.depth == 1));
    }
}

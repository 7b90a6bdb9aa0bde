//! Reconciliation of schema and value entries into an [`HronValue`].
//!
//! The two flattened sequences produced by [`crate::flatten`] are
//! walked together. The schema side drives: each schema entry claims a
//! span of value entries by depth, kind-checking declared containers
//! against what actually arrived. Claimed entries feed a builder that
//! assembles the final value, naming object slots by cycling through
//! the field names declared at each depth.
//!
//! Field names are pooled per depth across the whole header, so two
//! sibling objects at the same depth share one cycling sequence. Well
//! formed documents, where shapes line up, are unaffected.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::flatten::{flatten_data, flatten_schema, DataEntry, SchemaEntry};
use crate::lexer::tokenize;
use crate::parser::{parse_document, parse_document_with_limit, DataKind, SchemaKind};
use crate::value::Number;
use crate::{HronMap, HronValue};

/// Decodes HRON text with the default nesting limit.
pub fn decode(input: &str) -> Result<HronValue> {
    let document = parse_document(tokenize(input)?)?;
    reconcile(
        &flatten_schema(&document.keys),
        &flatten_data(&document.values),
    )
}

/// Decodes HRON text, bounding container nesting at `limit` levels.
pub fn decode_with_limit(input: &str, limit: usize) -> Result<HronValue> {
    let document = parse_document_with_limit(tokenize(input)?, limit)?;
    reconcile(
        &flatten_schema(&document.keys),
        &flatten_data(&document.values),
    )
}

/// Pairs schema entries with the value entries they claim and builds
/// the resulting value.
fn reconcile(schema: &[SchemaEntry], data: &[DataEntry]) -> Result<HronValue> {
    // No schema means nothing is addressable; values are ignored.
    if schema.is_empty() {
        return Ok(HronValue::Object(HronMap::new()));
    }

    let mut builder = Builder::new(schema);
    // Ancestry of schema entries already entered, innermost last.
    let mut ancestry: Vec<(usize, SchemaKind, String)> = Vec::new();
    let mut di = 0;

    for (i, entry) in schema.iter().enumerate() {
        while ancestry.last().map_or(false, |a| a.0 >= entry.depth) {
            ancestry.pop();
        }
        let in_list = ancestry.last().map_or(false, |a| a.1 == SchemaKind::List);
        let d = entry.depth;

        if in_list {
            // A list element schema repeats for every element, so it
            // claims everything remaining inside the list. Each claimed
            // entry is checked against the shape entry governing its
            // own depth, not just the instance roots.
            let mut shape = ShapeChecker::new(schema, i);
            while di < data.len() && data[di].depth >= d {
                shape.check(&data[di], &ancestry)?;
                builder.attach(&data[di])?;
                di += 1;
            }
        } else {
            match entry.kind {
                SchemaKind::Leaf => {
                    if di < data.len() && data[di].depth == d {
                        builder.attach(&data[di])?;
                        di += 1;
                        // A composite value under a leaf field is
                        // claimed wholesale.
                        while di < data.len() && data[di].depth > d {
                            builder.attach(&data[di])?;
                            di += 1;
                        }
                    }
                }
                SchemaKind::Object => {
                    if di < data.len() && data[di].depth == d {
                        check_kind(entry, &data[di], &ancestry)?;
                        builder.attach(&data[di])?;
                        di += 1;
                    }
                }
                SchemaKind::List => {
                    if di < data.len() && data[di].depth == d {
                        check_kind(entry, &data[di], &ancestry)?;
                        builder.attach(&data[di])?;
                        di += 1;
                        // Without an element schema the list is flat;
                        // its contents have no schema entries of their
                        // own and are claimed here.
                        let flat = schema.get(i + 1).map_or(true, |next| next.depth <= d);
                        if flat {
                            while di < data.len() && data[di].depth > d {
                                builder.attach(&data[di])?;
                                di += 1;
                            }
                        }
                    }
                }
            }
        }

        ancestry.push((entry.depth, entry.kind, entry.name.clone()));
    }

    let leftover = data.len() - di;
    if leftover > 0 {
        return Err(Error::ExtraValues { count: leftover });
    }

    builder.finish()
}

/// Verifies that a declared container received a matching value.
fn check_kind(
    entry: &SchemaEntry,
    data: &DataEntry,
    ancestry: &[(usize, SchemaKind, String)],
) -> Result<()> {
    let matches = match entry.kind {
        SchemaKind::Object => data.kind == DataKind::Object,
        SchemaKind::List => data.kind == DataKind::List,
        SchemaKind::Leaf => true,
    };
    if matches {
        return Ok(());
    }
    let field = if entry.name.is_empty() {
        ancestry
            .iter()
            .rev()
            .find(|a| !a.2.is_empty())
            .map(|a| a.2.clone())
            .unwrap_or_else(|| "(root)".to_string())
    } else {
        entry.name.clone()
    };
    Err(Error::schema_mismatch(
        &field,
        entry.kind.describe(),
        data.kind.describe(),
    ))
}

/// Validates a claimed data span against a repeating element shape.
///
/// Instance roots sit at the shape's own depth; deeper entries are
/// matched to the shape's nested declarations by walking the data
/// span's container ancestry. Object-parented entries cycle through
/// the parent's declared fields the same way slot naming does;
/// list-parented entries all take the parent's single element shape,
/// and a parent with no declared children leaves its contents
/// unchecked.
struct ShapeChecker<'a> {
    schema: &'a [SchemaEntry],
    /// Index of the element-shape entry driving the claim.
    root: usize,
    /// Open composite data entries, innermost last.
    stack: Vec<ShapeFrame>,
}

struct ShapeFrame {
    depth: usize,
    /// Schema entry matched to this container, if any.
    entry: Option<usize>,
    /// Next declared field, for object containers.
    cursor: usize,
}

impl<'a> ShapeChecker<'a> {
    fn new(schema: &'a [SchemaEntry], root: usize) -> Self {
        ShapeChecker {
            schema,
            root,
            stack: Vec::new(),
        }
    }

    fn check(
        &mut self,
        data: &DataEntry,
        ancestry: &[(usize, SchemaKind, String)],
    ) -> Result<()> {
        while self.stack.last().map_or(false, |f| f.depth >= data.depth) {
            self.stack.pop();
        }

        let governing = if data.depth == self.schema[self.root].depth {
            Some(self.root)
        } else {
            match self.stack.last_mut() {
                Some(frame) => match frame.entry {
                    Some(parent) => {
                        let children = declared_children(self.schema, parent);
                        match self.schema[parent].kind {
                            SchemaKind::List => children.first().copied(),
                            SchemaKind::Object if !children.is_empty() => {
                                let index = children[frame.cursor % children.len()];
                                frame.cursor += 1;
                                Some(index)
                            }
                            _ => None,
                        }
                    }
                    None => None,
                },
                None => None,
            }
        };

        if let Some(index) = governing {
            check_kind(&self.schema[index], data, ancestry)?;
        }
        if data.kind.is_composite() {
            self.stack.push(ShapeFrame {
                depth: data.depth,
                entry: governing,
                cursor: 0,
            });
        }
        Ok(())
    }
}

/// Indices of the schema entries one level inside `parent`.
fn declared_children(schema: &[SchemaEntry], parent: usize) -> Vec<usize> {
    let depth = schema[parent].depth;
    let mut children = Vec::new();
    for (index, entry) in schema.iter().enumerate().skip(parent + 1) {
        if entry.depth <= depth {
            break;
        }
        if entry.depth == depth + 1 {
            children.push(index);
        }
    }
    children
}

/// A container still being filled.
enum Container {
    Object(HronMap),
    List(Vec<HronValue>),
}

struct Pending {
    depth: usize,
    /// Slot name in the parent object; `None` when the parent is a
    /// list (or the container itself is positional).
    name: Option<String>,
    node: Container,
}

/// Assembles attached value entries into the final [`HronValue`].
struct Builder {
    root: HronMap,
    stack: Vec<Pending>,
    /// Field names declared at each depth, in header order.
    keys_at_level: HashMap<usize, Vec<String>>,
    /// Next name to hand out per depth, cycling.
    cursor: HashMap<usize, usize>,
}

impl Builder {
    fn new(schema: &[SchemaEntry]) -> Self {
        let mut keys_at_level: HashMap<usize, Vec<String>> = HashMap::new();
        for entry in schema {
            keys_at_level
                .entry(entry.depth)
                .or_default()
                .push(entry.name.clone());
        }
        Builder {
            root: HronMap::new(),
            stack: Vec::new(),
            keys_at_level,
            cursor: HashMap::new(),
        }
    }

    fn next_key(&mut self, depth: usize) -> Option<String> {
        let keys = self.keys_at_level.get(&depth)?;
        if keys.is_empty() {
            return None;
        }
        let index = self.cursor.entry(depth).or_insert(0);
        let key = keys[*index % keys.len()].clone();
        *index += 1;
        Some(key)
    }

    /// Name of the innermost named open container, for error reporting.
    fn context_name(&self) -> String {
        self.stack
            .iter()
            .rev()
            .find_map(|p| p.name.clone().filter(|n| !n.is_empty()))
            .unwrap_or_else(|| "(root)".to_string())
    }

    fn attach(&mut self, entry: &DataEntry) -> Result<()> {
        self.settle(entry.depth)?;

        let parent_is_object = match self.stack.last() {
            Some(pending) => matches!(pending.node, Container::Object(_)),
            None => true,
        };
        let name = if parent_is_object {
            match self.next_key(entry.depth) {
                Some(key) => Some(key),
                None => {
                    return Err(Error::undefined_key(&self.context_name()));
                }
            }
        } else {
            None
        };

        if entry.kind.is_composite() {
            let node = match entry.kind {
                DataKind::Object => Container::Object(HronMap::new()),
                _ => Container::List(Vec::new()),
            };
            self.stack.push(Pending {
                depth: entry.depth,
                name,
                node,
            });
            return Ok(());
        }

        let value = scalar_value(entry)?;
        self.place(name, value)
    }

    /// Closes open containers at or below `depth`.
    fn settle(&mut self, depth: usize) -> Result<()> {
        while self.stack.last().map_or(false, |p| p.depth >= depth) {
            let pending = match self.stack.pop() {
                Some(pending) => pending,
                None => break,
            };
            let value = match pending.node {
                Container::Object(map) => HronValue::Object(map),
                Container::List(items) => HronValue::Array(items),
            };
            self.place(pending.name, value)?;
        }
        Ok(())
    }

    fn place(&mut self, name: Option<String>, value: HronValue) -> Result<()> {
        match self.stack.last_mut() {
            Some(Pending {
                node: Container::Object(map),
                ..
            }) => {
                let key = match name {
                    Some(key) => key,
                    None => return Err(Error::undefined_key("(root)")),
                };
                map.insert(key, value);
            }
            Some(Pending {
                node: Container::List(items),
                ..
            }) => {
                items.push(value);
            }
            None => {
                let key = match name {
                    Some(key) => key,
                    None => return Err(Error::undefined_key("(root)")),
                };
                self.root.insert(key, value);
            }
        }
        Ok(())
    }

    fn finish(mut self) -> Result<HronValue> {
        self.settle(0)?;
        // An unnamed header container lands under the empty key; when
        // it is the whole document, unwrap it.
        if self.root.len() == 1 && self.root.get("").is_some() {
            return Ok(self
                .root
                .into_iter()
                .next()
                .map(|(_, value)| value)
                .unwrap_or(HronValue::Null));
        }
        Ok(HronValue::Object(self.root))
    }
}

fn scalar_value(entry: &DataEntry) -> Result<HronValue> {
    match entry.kind {
        DataKind::Boolean => Ok(HronValue::Bool(entry.literal == "true")),
        DataKind::Null => Ok(HronValue::Null),
        DataKind::String => Ok(HronValue::String(entry.literal.clone())),
        DataKind::Number => {
            if let Ok(i) = entry.literal.parse::<i64>() {
                return Ok(HronValue::Number(Number::Integer(i)));
            }
            entry
                .literal
                .parse::<f64>()
                .map(|f| HronValue::Number(Number::Float(f)))
                .map_err(|_| Error::message(format!("invalid number literal {:?}", entry.literal)))
        }
        DataKind::Object | DataKind::List => {
            Err(Error::message("container entry in scalar position"))
        }
    }
}

//! AST model for parsed JSON documents
//!
//! This module provides the node types the tree builder consumes. They mirror
//! the shape emitted by `json-to-ast`-compatible parsers: four node kinds
//! (array, object, property, literal), each optionally carrying the byte
//! offsets of its serialized span in the original source text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A byte position in the original JSON source text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Position {
    pub offset: usize,
}

/// Start/end byte offsets of a node's serialized span in the source text.
///
/// # Examples
///
/// ```rust
/// use json_foam::ast::Location;
/// let loc = Location::new(3, 10);
/// assert_eq!(loc.len(), 7);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

impl Location {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: Position { offset: start },
            end: Position { offset: end },
        }
    }

    /// Byte length of the span.
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A property's key, with its own span for richer diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyKey {
    pub value: String,
    pub loc: Option<Location>,
}

/// A scalar carried by a literal node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Null => write!(f, "null"),
            LiteralValue::Bool(b) => write!(f, "{}", b),
            LiteralValue::Number(n) => write!(f, "{}", n),
            LiteralValue::String(s) => write!(f, "{}", s),
        }
    }
}

/// One parsed JSON syntactic construct.
///
/// An `Object`'s children are *expected* to be `Property` nodes, but the type
/// does not enforce it: the builder treats anything else as a non-fatal
/// anomaly, so adversarial or future-format inputs stay representable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JsonNode {
    Array {
        loc: Option<Location>,
        children: Vec<JsonNode>,
    },
    Object {
        loc: Option<Location>,
        children: Vec<JsonNode>,
    },
    Property {
        loc: Option<Location>,
        key: PropertyKey,
        value: Box<JsonNode>,
    },
    Literal {
        loc: Option<Location>,
        value: LiteralValue,
    },
}

impl JsonNode {
    /// Returns the kind name of the node as a string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_foam::ast::{JsonNode, LiteralValue};
    /// let node = JsonNode::Literal { loc: None, value: LiteralValue::Null };
    /// assert_eq!(node.kind(), "Literal");
    /// ```
    pub fn kind(&self) -> &'static str {
        match self {
            JsonNode::Array { .. } => "Array",
            JsonNode::Object { .. } => "Object",
            JsonNode::Property { .. } => "Property",
            JsonNode::Literal { .. } => "Literal",
        }
    }

    /// Returns the span of this node, if the parser attached one.
    pub fn loc(&self) -> Option<Location> {
        match self {
            JsonNode::Array { loc, .. } => *loc,
            JsonNode::Object { loc, .. } => *loc,
            JsonNode::Property { loc, .. } => *loc,
            JsonNode::Literal { loc, .. } => *loc,
        }
    }

    /// Serialized byte size of this node's span; 0 when no location is known.
    pub fn size(&self) -> usize {
        self.loc().map_or(0, |loc| loc.len())
    }
}

//! Key paths: the segment sequence leading from the document root to a node.
//!
//! Paths exist only to feed label text; they carry no structural meaning.
//! Extension is copy-on-extend over a persistent vector, so sibling branches
//! never observe each other's segments.

use std::fmt;

use im::Vector;

/// One step from the document root toward a node, as it renders in a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Array element by position: `[3]`.
    Index(usize),
    /// Object property by name: `.name`.
    Key(String),
    /// A literal's quoted value, appended when labeling an array-element
    /// literal: `."true"`.
    Literal(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(index) => write!(f, "[{}]", index),
            PathSegment::Key(key) => write!(f, ".{}", key),
            PathSegment::Literal(rendered) => write!(f, ".\"{}\"", rendered),
        }
    }
}

/// An immutable key path.
///
/// # Examples
///
/// ```rust
/// use json_foam::path::KeyPath;
/// let path = KeyPath::root().key("list").index(0);
/// assert_eq!(path.to_string(), ".list[0]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPath(Vector<PathSegment>);

impl KeyPath {
    /// The empty path of the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Extends with an array-index segment.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    /// Extends with a property-key segment.
    #[must_use]
    pub fn key(&self, key: &str) -> Self {
        self.push(PathSegment::Key(key.to_string()))
    }

    /// Extends with a quoted-literal segment.
    #[must_use]
    pub fn literal(&self, rendered: String) -> Self {
        self.push(PathSegment::Literal(rendered))
    }

    fn push(&self, segment: PathSegment) -> Self {
        let mut segments = self.0.clone();
        segments.push_back(segment);
        Self(segments)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

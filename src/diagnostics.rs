//! Non-fatal anomaly reporting for the tree builder.
//!
//! A malformed fragment never aborts a build. The builder records one
//! [`BuildDiagnostic`] per anomaly, drops the offending subtree, and keeps
//! going, so callers always receive a (possibly partial) tree and may
//! surface, log, or ignore the diagnostics as they see fit.

use miette::{Diagnostic, LabeledSpan};
use thiserror::Error;

use crate::ast::Location;

/// A single anomaly observed while building the foam tree.
///
/// Each variant carries the unexpected node's kind name, the rendered key
/// path of the position where it appeared (empty for the document root), and
/// the node's span when the parser attached one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildDiagnostic {
    /// A non-container node appeared where an array or object was expected.
    #[error("unexpected {kind} node at `{path}` where an array or object was expected")]
    UnexpectedValueKind {
        kind: &'static str,
        path: String,
        loc: Option<Location>,
    },
    /// An object's children contained something other than a property.
    #[error("unexpected {kind} node among the properties of `{path}`")]
    NonPropertyChild {
        kind: &'static str,
        path: String,
        loc: Option<Location>,
    },
}

impl BuildDiagnostic {
    /// Kind name of the node that triggered the anomaly.
    pub fn node_kind(&self) -> &'static str {
        match self {
            BuildDiagnostic::UnexpectedValueKind { kind, .. } => kind,
            BuildDiagnostic::NonPropertyChild { kind, .. } => kind,
        }
    }

    /// Rendered key path of the position where the anomaly occurred.
    pub fn path(&self) -> &str {
        match self {
            BuildDiagnostic::UnexpectedValueKind { path, .. } => path,
            BuildDiagnostic::NonPropertyChild { path, .. } => path,
        }
    }

    fn loc(&self) -> Option<Location> {
        match self {
            BuildDiagnostic::UnexpectedValueKind { loc, .. } => *loc,
            BuildDiagnostic::NonPropertyChild { loc, .. } => *loc,
        }
    }
}

impl Diagnostic for BuildDiagnostic {
    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let loc = self.loc()?;
        // Zero-length spans still get a one-byte label so the offset shows.
        let len = if loc.len() > 0 { loc.len() } else { 1 };
        let label = LabeledSpan::new(Some(self.to_string()), loc.start.offset, len);
        Some(Box::new(std::iter::once(label)))
    }
}

pub use crate::ast::{JsonNode, LiteralValue, Location, Position, PropertyKey};
pub use crate::diagnostics::BuildDiagnostic;
pub use crate::foam::{build_foam_tree, FoamGroup, FoamTree, RootFoamGroup};
pub use crate::path::{KeyPath, PathSegment};

pub mod ast;
pub mod bytes;
pub mod diagnostics;
pub mod foam;
pub mod path;

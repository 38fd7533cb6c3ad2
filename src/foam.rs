//! The tree builder: a parsed JSON AST in, labeled weighted foam groups out.
//!
//! One group per array element, object property, and the synthetic root. Each
//! label combines the node's key path with its formatted byte size; each
//! weight is the byte length of the node's serialized span. The recursion is
//! pure over its input and threads nothing between siblings except the key
//! path each call receives.

use serde::{Deserialize, Serialize};

use crate::ast::JsonNode;
use crate::bytes::format_bytes;
use crate::diagnostics::BuildDiagnostic;
use crate::path::KeyPath;

/// One labeled, weighted region of the visualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoamGroup {
    /// Reserved for the renderer; never set by the builder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<bool>,
    pub label: String,
    /// Byte size of the node's serialized span; 0 when unknown.
    pub weight: usize,
    /// Present iff the node is an array or object; absent for scalar leaves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<FoamGroup>>,
}

/// The synthetic root wrapper handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootFoamGroup {
    pub groups: Vec<FoamGroup>,
}

/// A finished build: the (possibly partial) tree plus the anomalies observed
/// along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct FoamTree {
    pub root: RootFoamGroup,
    pub diagnostics: Vec<BuildDiagnostic>,
}

/// Builds the foam-group tree for a parsed JSON document.
///
/// Never fails: a malformed fragment contributes no groups and is reported
/// through [`FoamTree::diagnostics`] instead, so the rest of the document
/// still renders.
pub fn build_foam_tree(node: &JsonNode) -> FoamTree {
    let mut builder = Builder::default();
    let groups = builder.visit_value(node, &KeyPath::root());
    FoamTree {
        root: RootFoamGroup { groups },
        diagnostics: builder.diagnostics,
    }
}

#[derive(Default)]
struct Builder {
    diagnostics: Vec<BuildDiagnostic>,
}

impl Builder {
    fn visit_value(&mut self, node: &JsonNode, path: &KeyPath) -> Vec<FoamGroup> {
        match node {
            JsonNode::Array { children, .. } => self.visit_array(children, path),
            JsonNode::Object { children, .. } => self.visit_object(children, path),
            other => {
                self.diagnostics.push(BuildDiagnostic::UnexpectedValueKind {
                    kind: other.kind(),
                    path: path.to_string(),
                    loc: other.loc(),
                });
                Vec::new()
            }
        }
    }

    fn visit_array(&mut self, children: &[JsonNode], path: &KeyPath) -> Vec<FoamGroup> {
        let mut groups = Vec::with_capacity(children.len());
        for (index, child) in children.iter().enumerate() {
            let child_path = path.index(index);
            let weight = child.size();
            let group = if let JsonNode::Literal { .. } = child {
                FoamGroup {
                    description: None,
                    label: node_label(child, &child_path),
                    weight,
                    groups: None,
                }
            } else {
                FoamGroup {
                    description: None,
                    label: format!("{}\n{}", child_path, format_bytes(weight)),
                    weight,
                    groups: Some(self.visit_value(child, &child_path)),
                }
            };
            groups.push(group);
        }
        groups
    }

    fn visit_object(&mut self, children: &[JsonNode], path: &KeyPath) -> Vec<FoamGroup> {
        let mut groups = Vec::new();
        for child in children {
            if let JsonNode::Property { key, .. } = child {
                let child_path = path.key(&key.value);
                groups.push(self.visit_property(child, &child_path));
            } else {
                self.diagnostics.push(BuildDiagnostic::NonPropertyChild {
                    kind: child.kind(),
                    path: path.to_string(),
                    loc: child.loc(),
                });
            }
        }
        groups
    }

    fn visit_property(&mut self, property: &JsonNode, path: &KeyPath) -> FoamGroup {
        let groups = match property {
            JsonNode::Property { value, .. } => match value.as_ref() {
                JsonNode::Literal { .. } => None,
                other => Some(self.visit_value(other, path)),
            },
            _ => None,
        };
        FoamGroup {
            description: None,
            label: node_label(property, path),
            weight: property.size(),
            groups,
        }
    }
}

/// Renders a node's label at the given key path.
///
/// Properties whose value is an array show the full path with a trailing
/// `[]` marker; other properties show the bare key. Array-element literals
/// show the path extended with their quoted value. A bare object falls back
/// to its size alone.
fn node_label(node: &JsonNode, path: &KeyPath) -> String {
    match node {
        JsonNode::Property { key, value, .. } => {
            let text = if matches!(value.as_ref(), JsonNode::Array { .. }) {
                format!("{}[]", path)
            } else {
                key.value.clone()
            };
            format!("{}\n{}", text, format_bytes(node.size()))
        }
        JsonNode::Literal { value, .. } => {
            format!(
                "{}\n{}",
                path.literal(value.to_string()),
                format_bytes(node.size())
            )
        }
        JsonNode::Object { .. } => format_bytes(node.size()),
        other => format!("<no label> ({})", other.kind()),
    }
}

//! Interchange tests: consuming `json-to-ast`-shaped parser output and
//! producing renderer-ready JSON.

use json_foam::ast::JsonNode;
use json_foam::foam::build_foam_tree;
use serde_json::json;

/// Output of a `json-to-ast`-compatible parser for `{"a": 1}`, including the
/// line/column and `raw` fields this crate does not model.
const PARSED_DOC: &str = r#"{
  "type": "Object",
  "children": [
    {
      "type": "Property",
      "key": {
        "type": "Identifier",
        "value": "a",
        "raw": "\"a\"",
        "loc": {
          "start": { "line": 1, "column": 2, "offset": 1 },
          "end": { "line": 1, "column": 5, "offset": 4 },
          "source": null
        }
      },
      "value": {
        "type": "Literal",
        "value": 1,
        "raw": "1",
        "loc": {
          "start": { "line": 1, "column": 7, "offset": 6 },
          "end": { "line": 1, "column": 8, "offset": 7 },
          "source": null
        }
      },
      "loc": {
        "start": { "line": 1, "column": 2, "offset": 1 },
        "end": { "line": 1, "column": 8, "offset": 7 },
        "source": null
      }
    }
  ],
  "loc": {
    "start": { "line": 1, "column": 1, "offset": 0 },
    "end": { "line": 1, "column": 9, "offset": 8 },
    "source": null
  }
}"#;

#[cfg(test)]
mod consume_tests {
    use super::*;

    #[test]
    fn parser_output_deserializes_and_builds() {
        let ast: JsonNode = serde_json::from_str(PARSED_DOC).expect("valid parser output");
        assert_eq!(ast.kind(), "Object");
        assert_eq!(ast.size(), 8);

        let tree = build_foam_tree(&ast);
        assert!(tree.diagnostics.is_empty());
        assert_eq!(tree.root.groups.len(), 1);
        assert_eq!(tree.root.groups[0].label, "a\n6B");
    }

    #[test]
    fn literal_scalars_cover_all_json_kinds() {
        let parsed = json!({
            "type": "Array",
            "loc": null,
            "children": [
                { "type": "Literal", "value": null, "loc": null },
                { "type": "Literal", "value": true, "loc": null },
                { "type": "Literal", "value": 2.5, "loc": null },
                { "type": "Literal", "value": "hi", "loc": null }
            ]
        });
        let ast: JsonNode = serde_json::from_value(parsed).expect("valid parser output");

        let tree = build_foam_tree(&ast);
        let labels: Vec<&str> = tree.root.groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "[0].\"null\"\n0B",
                "[1].\"true\"\n0B",
                "[2].\"2.5\"\n0B",
                "[3].\"hi\"\n0B"
            ]
        );
    }
}

#[cfg(test)]
mod produce_tests {
    use super::*;

    #[test]
    fn leaves_serialize_without_groups_or_description() {
        let ast: JsonNode = serde_json::from_str(PARSED_DOC).expect("valid parser output");
        let tree = build_foam_tree(&ast);

        let rendered = serde_json::to_value(&tree.root).expect("serializable tree");
        let leaf = &rendered["groups"][0];
        assert_eq!(leaf["label"], "a\n6B");
        assert_eq!(leaf["weight"], 6);
        assert!(leaf.get("groups").is_none());
        assert!(leaf.get("description").is_none());
    }

    #[test]
    fn containers_serialize_with_nested_groups() {
        let parsed = json!({
            "type": "Object",
            "loc": { "start": { "offset": 0 }, "end": { "offset": 14 } },
            "children": [{
                "type": "Property",
                "key": { "value": "list", "loc": null },
                "value": {
                    "type": "Array",
                    "loc": { "start": { "offset": 8 }, "end": { "offset": 13 } },
                    "children": [{
                        "type": "Literal",
                        "value": 1,
                        "loc": { "start": { "offset": 9 }, "end": { "offset": 10 } }
                    }]
                },
                "loc": { "start": { "offset": 1 }, "end": { "offset": 13 } }
            }]
        });
        let ast: JsonNode = serde_json::from_value(parsed).expect("valid parser output");
        let tree = build_foam_tree(&ast);

        let rendered = serde_json::to_value(&tree.root).expect("serializable tree");
        let group = &rendered["groups"][0];
        assert_eq!(group["label"], ".list[]\n12B");
        assert_eq!(group["groups"][0]["label"], ".list[0].\"1\"\n1B");
    }
}

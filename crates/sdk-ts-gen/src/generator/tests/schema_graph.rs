use http::Method;
use serde_json::json;

use super::support::{api, document, graph};
use crate::{
  generator::{errors::GenerationError, metrics::GenerationWarning, schema_graph::SchemaGraph},
  openapi::ObjectOrReference,
};

#[test]
fn test_rejects_non_3x_documents() {
  let mut value = api(json!({}), json!({}));
  value["openapi"] = json!("2.0");

  let err = SchemaGraph::new(document(value)).unwrap_err();
  assert_eq!(
    err,
    GenerationError::UnsupportedVersion {
      version: "2.0".to_string()
    }
  );
}

#[test]
fn test_accepts_3_1_documents() {
  let mut value = api(json!({}), json!({}));
  value["openapi"] = json!("3.1.0");
  assert!(SchemaGraph::new(document(value)).is_ok());
}

#[test]
fn test_component_aliases_resolve_and_dangling_refs_warn() {
  let graph = graph(api(
    json!({}),
    json!({
      "Pet": { "type": "object", "properties": { "name": { "type": "string" } } },
      "Animal": { "$ref": "#/components/schemas/Pet" },
      "Broken": { "$ref": "#/components/schemas/Missing" }
    }),
  ));

  let names: Vec<&str> = graph.schemas().map(|(name, _)| name.as_str()).collect();
  assert_eq!(names, vec!["Animal", "Pet"]);

  let alias = ObjectOrReference::Ref {
    ref_path: "#/components/schemas/Animal".to_string(),
  };
  let animal = graph.resolve(&alias).expect("alias should resolve");
  assert!(animal.properties.contains_key("name"));

  assert_eq!(
    graph.warnings(),
    &[GenerationWarning::DanglingReference {
      context: "components.schemas.Broken".to_string(),
      reference: "#/components/schemas/Missing".to_string(),
    }]
  );
}

#[test]
fn test_detect_cycles() {
  let graph = graph(api(
    json!({}),
    json!({
      "Node": {
        "type": "object",
        "properties": { "children": { "type": "array", "items": { "$ref": "#/components/schemas/Node" } } }
      },
      "A": { "type": "object", "properties": { "b": { "$ref": "#/components/schemas/B" } } },
      "B": { "type": "object", "properties": { "a": { "$ref": "#/components/schemas/A" } } },
      "Leaf": { "type": "string" }
    }),
  ));

  assert_eq!(
    graph.detect_cycles(),
    vec![
      vec!["A".to_string(), "B".to_string()],
      vec!["Node".to_string()]
    ]
  );
}

#[test]
fn test_path_parameters_are_merged_and_overridden() {
  let mut value = api(
    json!({
      "/items/{item_id}": {
        "parameters": [
          { "name": "item_id", "in": "path", "required": true, "schema": { "type": "string" } },
          { "name": "q", "in": "query", "description": "shared", "schema": { "type": "string" } }
        ],
        "get": {
          "operationId": "getItem",
          "parameters": [
            { "name": "q", "in": "query", "description": "own", "schema": { "type": "string" } },
            { "$ref": "#/components/parameters/Verbose" }
          ],
          "responses": {}
        }
      }
    }),
    json!({}),
  );
  value["components"]["parameters"] = json!({
    "Verbose": { "name": "verbose", "in": "query", "schema": { "type": "boolean" } }
  });

  let graph = graph(value);
  let [entry] = graph.operations() else {
    panic!("expected one operation");
  };

  assert_eq!(entry.method, Method::GET);
  assert_eq!(entry.operation_id().unwrap(), "getItem");
  let names: Vec<&str> = entry.parameters.iter().map(|p| p.name.as_str()).collect();
  assert_eq!(names, vec!["item_id", "q", "verbose"]);

  let query: Vec<_> = entry.query_parameters().collect();
  assert_eq!(query.len(), 2);
  assert_eq!(query[0].description.as_deref(), Some("own"));
}

#[test]
fn test_unresolvable_parameter_ref_is_fatal() {
  let value = api(
    json!({
      "/items": {
        "get": {
          "operationId": "listItems",
          "parameters": [{ "$ref": "#/components/parameters/Missing" }],
          "responses": {}
        }
      }
    }),
    json!({}),
  );

  let err = SchemaGraph::new(document(value)).unwrap_err();
  assert!(matches!(err, GenerationError::UnresolvedReference { .. }));
  assert!(err.to_string().contains("GET /items"));
}

#[test]
fn test_missing_operation_id_is_reported_lazily() {
  let graph = graph(api(json!({ "/ping": { "get": { "responses": {} } } }), json!({})));
  let err = graph.operations()[0].operation_id().unwrap_err();
  assert_eq!(
    err,
    GenerationError::MissingOperationId {
      method: "GET".to_string(),
      path: "/ping".to_string()
    }
  );
}

#[test]
fn test_default_server() {
  let mut value = api(json!({}), json!({}));
  value["servers"] = json!([{ "url": "https://a.example" }, { "url": "https://b.example" }]);
  assert_eq!(graph(value).default_server(), Some("https://a.example"));
  assert_eq!(graph(api(json!({}), json!({}))).default_server(), None);
}

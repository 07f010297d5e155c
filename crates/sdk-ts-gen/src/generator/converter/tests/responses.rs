use serde_json::{Value, json};

use crate::generator::{
  ast::{ResponseDefinition, ResponseKind},
  converter::{TypeResolver, responses::select_response},
  tests::support::{api, graph},
};

fn response_of(responses: Value, schemas: Value) -> ResponseDefinition {
  let graph = graph(api(
    json!({ "/things": { "get": { "operationId": "getThing", "responses": responses } } }),
    schemas,
  ));
  let resolver = TypeResolver::new(&graph);
  select_response(&resolver, &graph.operations()[0])
}

#[test]
fn test_html_beats_json() {
  let response = response_of(
    json!({
      "200": {
        "description": "ok",
        "content": {
          "application/json": { "schema": { "type": "object" } },
          "text/html": { "schema": { "type": "string" } }
        }
      }
    }),
    json!({}),
  );

  assert_eq!(response.kind, ResponseKind::Html);
  assert_eq!(response.ty.to_string(), "string");
}

#[test]
fn test_binary_is_blob() {
  let response = response_of(
    json!({
      "200": { "description": "ok", "content": { "application/octet-stream": { "schema": { "type": "string", "format": "binary" } } } }
    }),
    json!({}),
  );

  assert_eq!(response.kind, ResponseKind::Binary);
  assert_eq!(response.ty.to_string(), "Blob");
  assert!(response.schema.is_none());
}

#[test]
fn test_json_reference_and_later_status() {
  let response = response_of(
    json!({
      "201": { "description": "created", "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Thing" } } } },
      "400": { "description": "bad", "content": { "application/json": { "schema": { "type": "string" } } } }
    }),
    json!({ "Thing": { "type": "object", "properties": { "id": { "type": "string" } } } }),
  );

  assert_eq!(response.kind, ResponseKind::Json);
  assert_eq!(response.ty.to_string(), "Thing");
  assert!(response.schema.is_some_and(|schema| schema.properties.contains_key("id")));
}

#[test]
fn test_dates_in_inline_responses() {
  let response = response_of(
    json!({
      "200": {
        "description": "ok",
        "content": {
          "application/vnd.api+json": {
            "schema": { "type": "object", "properties": { "at": { "type": "string", "format": "date-time" } } }
          }
        }
      }
    }),
    json!({}),
  );

  assert_eq!(response.kind, ResponseKind::Json);
  assert_eq!(response.ty.to_string(), "{ at?: Date; }");
}

#[test]
fn test_plain_text() {
  let response = response_of(
    json!({ "200": { "description": "ok", "content": { "text/plain": { "schema": { "type": "string" } } } } }),
    json!({}),
  );

  assert_eq!(response.kind, ResponseKind::Text);
  assert_eq!(response.ty.to_string(), "string");
}

#[test]
fn test_no_body_is_void() {
  let response = response_of(json!({ "204": { "description": "no content" } }), json!({}));
  assert_eq!(response, ResponseDefinition::empty());
  assert_eq!(response.ty.to_string(), "void");

  let response = response_of(
    json!({ "404": { "description": "missing", "content": { "application/json": { "schema": { "type": "object" } } } } }),
    json!({}),
  );
  assert_eq!(response.kind, ResponseKind::Empty);
}

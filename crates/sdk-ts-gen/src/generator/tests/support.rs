use serde_json::{Value, json};

use crate::{
  generator::{
    orchestrator::{GeneratedOutput, GeneratorConfig, Orchestrator},
    schema_graph::SchemaGraph,
  },
  openapi::Document,
};

pub(crate) const STORE_API: &str = include_str!("../../../fixtures/store_api.json");
pub(crate) const DATE_RANGE_API: &str = include_str!("../../../fixtures/date_range.yaml");
pub(crate) const FILTERS_API: &str = include_str!("../../../fixtures/comprehensive_filters.yaml");

pub(crate) fn document(value: Value) -> Document {
  serde_json::from_value(value).expect("test document should deserialize")
}

pub(crate) fn json_document(text: &str) -> Document {
  serde_json::from_str(text).expect("test document should parse as JSON")
}

pub(crate) fn yaml_document(text: &str) -> Document {
  serde_yaml::from_str(text).expect("test document should parse as YAML")
}

/// A 3.0 document with the given `paths` and `components.schemas`.
pub(crate) fn api(paths: Value, schemas: Value) -> Value {
  json!({
    "openapi": "3.0.3",
    "info": { "title": "Test API", "version": "1.0.0" },
    "paths": paths,
    "components": { "schemas": schemas }
  })
}

pub(crate) fn graph(value: Value) -> SchemaGraph {
  SchemaGraph::new(document(value)).expect("schema graph should build")
}

pub(crate) fn generate(document: Document) -> GeneratedOutput {
  Orchestrator::new(document, GeneratorConfig::default())
    .generate()
    .expect("generation should succeed")
}

pub(crate) fn json_response(schema: Value) -> Value {
  json!({
    "200": {
      "description": "ok",
      "content": { "application/json": { "schema": schema } }
    }
  })
}

#[track_caller]
pub(crate) fn assert_contains(haystack: &str, needle: &str) {
  assert!(
    haystack.contains(needle),
    "expected to find:\n{needle}\n\nin:\n{haystack}"
  );
}

#[track_caller]
pub(crate) fn assert_not_contains(haystack: &str, needle: &str) {
  assert!(
    !haystack.contains(needle),
    "did not expect to find:\n{needle}\n\nin:\n{haystack}"
  );
}

/// Asserts that every needle occurs, each one after the end of the previous match.
#[track_caller]
pub(crate) fn assert_in_order(haystack: &str, needles: &[&str]) {
  let mut offset = 0;
  for needle in needles {
    match haystack[offset..].find(needle) {
      Some(index) => offset += index + needle.len(),
      None => panic!("expected to find {needle:?} after byte {offset} in:\n{haystack}"),
    }
  }
}

/// Source of one client method, from its signature to its closing brace.
#[track_caller]
pub(crate) fn method_source<'a>(sdk: &'a str, name: &str) -> &'a str {
  let signature = format!("public async {name}(");
  let Some(start) = sdk.find(&signature) else {
    panic!("method {name} not found in:\n{sdk}");
  };
  let end = sdk[start..].find("\n  }\n").map_or(sdk.len(), |index| start + index + 4);
  &sdk[start..end]
}

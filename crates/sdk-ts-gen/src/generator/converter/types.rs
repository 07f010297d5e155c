use std::collections::BTreeMap;

use http::Method;

use super::requests::select_request_body;
use crate::{
  generator::{
    ast::{TypeDefinition, TypeSource},
    metrics::GenerationWarning,
    schema_graph::SchemaGraph,
  },
  naming::identifiers::{request_type_name, to_pascal_case},
  openapi::ObjectOrReference,
};

impl TypeSource {
  fn describe(&self) -> String {
    match self {
      Self::Component(name) => format!("components.schemas.{name}"),
      Self::RequestBody { operation_id } => format!("request body of '{operation_id}'"),
    }
  }
}

/// Collects every named model: component schemas in name order, then one
/// `<OperationId>Request` per inline request body, in operation order.
///
/// The first definition of a TypeScript name wins; later ones are reported and dropped.
pub(crate) fn type_definitions(graph: &SchemaGraph, warnings: &mut Vec<GenerationWarning>) -> Vec<TypeDefinition> {
  let mut definitions: Vec<TypeDefinition> = vec![];
  let mut seen: BTreeMap<String, TypeSource> = BTreeMap::new();

  let mut push = |definition: TypeDefinition, warnings: &mut Vec<GenerationWarning>| {
    if let Some(kept) = seen.get(&definition.name) {
      warnings.push(GenerationWarning::TypeNameCollision {
        name: definition.name.clone(),
        kept: kept.describe(),
        dropped: definition.source.describe(),
      });
      return;
    }
    seen.insert(definition.name.clone(), definition.source.clone());
    definitions.push(definition);
  };

  for (name, schema) in graph.schemas() {
    push(
      TypeDefinition::new(to_pascal_case(name), TypeSource::Component(name.clone()), schema.clone()),
      warnings,
    );
  }

  for entry in graph.operations() {
    if !matches!(entry.method, Method::POST | Method::PUT | Method::PATCH) {
      continue;
    }
    let Some(operation_id) = entry.operation_id.as_deref().filter(|id| !id.is_empty()) else {
      continue;
    };
    let Some(selected) = entry.request_body.as_ref().and_then(select_request_body) else {
      continue;
    };
    let ObjectOrReference::Object(schema) = selected.schema else {
      continue;
    };

    push(
      TypeDefinition::new(
        request_type_name(operation_id),
        TypeSource::RequestBody {
          operation_id: operation_id.to_string(),
        },
        schema.clone(),
      ),
      warnings,
    );
  }

  definitions
}

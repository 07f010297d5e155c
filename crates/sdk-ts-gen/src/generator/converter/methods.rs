use std::collections::BTreeSet;

use http::Method;

use super::{
  parameters::{group_parameters, query_parameters},
  requests::{embedded_object_keys, select_request_body},
  responses::select_response,
  type_resolver::TypeResolver,
};
use crate::{
  generator::{
    ast::{
      ArgumentKind, MethodArgument, MethodDefinition, PathTemplate, RequestBodyDefinition, RequestBodyKind, TsType,
    },
    errors::GenerationResult,
    metrics::GenerationWarning,
    schema_graph::OperationEntry,
  },
  naming::identifiers::{params_interface_name, ref_name, request_type_name, to_method_name, to_pascal_case},
  openapi::{ObjectOrReference, Schema},
};

/// Name of the synthetic path argument for mutations on an unparameterized path.
const IMPLICIT_ID_ARGUMENT: &str = "id";

fn carries_body(method: &Method) -> bool {
  matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

/// Builds one method per operation, ordered by method name.
///
/// Operations without an `operationId` abort generation. A repeated method name keeps
/// the first operation and records a warning for the rest.
pub(crate) fn method_definitions(
  resolver: &TypeResolver<'_>,
  warnings: &mut Vec<GenerationWarning>,
) -> GenerationResult<Vec<MethodDefinition>> {
  let mut methods = resolver
    .graph()
    .operations()
    .iter()
    .map(|entry| method_definition(resolver, entry))
    .collect::<GenerationResult<Vec<_>>>()?;

  methods.sort_by(|a, b| a.name.cmp(&b.name));

  let mut seen = BTreeSet::new();
  methods.retain(|method| {
    let first = seen.insert(method.name.clone());
    if !first {
      warnings.push(GenerationWarning::OperationSpecific {
        operation_id: method.name.clone(),
        message: format!(
          "{} {} reuses an existing method name and was skipped",
          method.method,
          method.path.raw()
        ),
      });
    }
    first
  });

  Ok(methods)
}

pub(crate) fn method_definition(resolver: &TypeResolver<'_>, entry: &OperationEntry) -> GenerationResult<MethodDefinition> {
  let operation_id = entry.operation_id()?;
  let path = PathTemplate::parse(&entry.path);
  let response = select_response(resolver, entry);

  let request_body = entry
    .request_body
    .as_ref()
    .filter(|_| carries_body(&entry.method))
    .and_then(select_request_body)
    .map(|selected| RequestBodyDefinition {
      kind: selected.kind,
      type_name: payload_type_name(selected.schema, operation_id),
      schema: resolver.graph().resolve(selected.schema).cloned().unwrap_or_default(),
    });

  let mut arguments: Vec<MethodArgument> = path.argument_names().into_iter().map(MethodArgument::path).collect();
  if arguments.is_empty() && matches!(entry.method, Method::PUT | Method::PATCH | Method::DELETE) {
    arguments.push(MethodArgument::path(IMPLICIT_ID_ARGUMENT.to_string()));
  }

  if let Some(body) = &request_body {
    arguments.push(MethodArgument {
      name: "req".to_string(),
      ty: TsType::named(&body.type_name),
      kind: ArgumentKind::Payload,
    });
  }

  if entry.method == Method::GET {
    arguments.push(MethodArgument {
      name: "params".to_string(),
      ty: TsType::named(params_interface_name(
        entry.method.as_str(),
        &entry.path,
        Some(operation_id),
      )),
      kind: ArgumentKind::Params,
    });
  }

  let embedded_objects = request_body
    .as_ref()
    .filter(|body| body.kind == RequestBodyKind::Json)
    .map(|body| embedded_object_keys(resolver.graph(), &body.schema, response.schema.as_ref()))
    .unwrap_or_default();

  let param_groups = group_parameters(resolver.graph(), &query_parameters(entry), None, &mut vec![]);

  Ok(
    MethodDefinition::builder()
      .name(to_method_name(operation_id))
      .method(entry.method.clone())
      .path(path)
      .arguments(arguments)
      .response(response)
      .maybe_request_body(request_body)
      .param_groups(param_groups)
      .embedded_objects(embedded_objects)
      .maybe_summary(entry.summary.clone())
      .build(),
  )
}

/// Referenced payloads use the component's type; inline ones get `<OperationId>Request`.
pub(crate) fn payload_type_name(schema: &ObjectOrReference<Schema>, operation_id: &str) -> String {
  match schema {
    ObjectOrReference::Ref { ref_path } => to_pascal_case(ref_name(ref_path)),
    ObjectOrReference::Object(_) => request_type_name(operation_id),
  }
}

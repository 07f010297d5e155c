use crate::{
  generator::{
    ast::{ContentCategory, RequestBodyKind},
    converter::type_resolver::EMBEDDED_PROPERTY,
    schema_graph::SchemaGraph,
  },
  naming::identifiers::to_camel_case,
  openapi::{ObjectOrReference, RequestBody, Schema, SchemaType},
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct SelectedBody<'a> {
  pub kind: RequestBodyKind,
  pub schema: &'a ObjectOrReference<Schema>,
}

/// Picks the payload encoding of a request body. Multipart wins over JSON.
pub(crate) fn select_request_body(body: &RequestBody) -> Option<SelectedBody<'_>> {
  let with_schema = |category: ContentCategory| {
    body.content.iter().find_map(|(content_type, media)| {
      let schema = media.schema.as_ref()?;
      (ContentCategory::from_content_type(content_type) == category).then_some(schema)
    })
  };

  if let Some(schema) = with_schema(ContentCategory::Multipart) {
    return Some(SelectedBody {
      kind: RequestBodyKind::Multipart,
      schema,
    });
  }

  with_schema(ContentCategory::Json).map(|schema| SelectedBody {
    kind: RequestBodyKind::Json,
    schema,
  })
}

/// Keys of `_embedded` members that `toApiType` must treat as nested objects.
///
/// Object payloads take them from the response schema, array payloads from the schema of
/// their referenced item type.
pub(crate) fn embedded_object_keys(graph: &SchemaGraph, request: &Schema, response: Option<&Schema>) -> Vec<String> {
  if request.is_array() {
    return match request.items.as_deref() {
      Some(items @ ObjectOrReference::Ref { .. }) => graph
        .resolve(items)
        .filter(|item| item.is_object())
        .map(|item| embedded_keys_of(graph, item))
        .unwrap_or_default(),
      _ => vec![],
    };
  }

  if request.is_object() {
    return response.map(|schema| embedded_keys_of(graph, schema)).unwrap_or_default();
  }

  vec![]
}

fn embedded_keys_of(graph: &SchemaGraph, schema: &Schema) -> Vec<String> {
  let Some(embedded) = schema
    .properties
    .get(EMBEDDED_PROPERTY)
    .and_then(|embedded| graph.resolve(embedded))
  else {
    return vec![];
  };

  embedded
    .properties
    .iter()
    .filter(|(_, property)| {
      let Some(resolved) = graph.resolve(property) else {
        return false;
      };
      let single_object = resolved.has_type(SchemaType::Object) && resolved.items.is_none();
      let referenced_items = resolved.has_type(SchemaType::Array)
        && matches!(resolved.items.as_deref(), Some(ObjectOrReference::Ref { .. }));
      single_object || referenced_items
    })
    .map(|(name, _)| to_camel_case(name))
    .collect()
}

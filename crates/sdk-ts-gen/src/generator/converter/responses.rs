use super::type_resolver::{ResolveContext, TypeResolver};
use crate::{
  generator::{
    ast::{ContentCategory, ResponseDefinition, ResponseKind, TsType},
    schema_graph::OperationEntry,
  },
  openapi::Response,
};

/// Success statuses scanned for a response body, in priority order.
pub(crate) const STATUS_PRIORITY: [&str; 4] = ["200", "201", "202", "204"];

/// Handler preference inside one response. HTML is deliberately ahead of JSON.
const KIND_PRIORITY: [(ContentCategory, ResponseKind); 4] = [
  (ContentCategory::Html, ResponseKind::Html),
  (ContentCategory::Binary, ResponseKind::Binary),
  (ContentCategory::Json, ResponseKind::Json),
  (ContentCategory::Text, ResponseKind::Text),
];

/// Chooses the response type of an operation from the first success status with a usable body.
pub(crate) fn select_response(resolver: &TypeResolver<'_>, entry: &OperationEntry) -> ResponseDefinition {
  STATUS_PRIORITY
    .iter()
    .filter_map(|status| entry.responses.get(*status))
    .find_map(|response| classify(resolver, response))
    .unwrap_or_else(ResponseDefinition::empty)
}

fn classify(resolver: &TypeResolver<'_>, response: &Response) -> Option<ResponseDefinition> {
  let (media, kind) = KIND_PRIORITY.iter().find_map(|(category, kind)| {
    response
      .content
      .iter()
      .find(|(content_type, _)| ContentCategory::from_content_type(content_type) == *category)
      .map(|(_, media)| (media, *kind))
  })?;

  let schema_ref = media.schema.as_ref();

  let definition = match kind {
    ResponseKind::Json => {
      let ty = schema_ref.map_or(TsType::Any, |schema| {
        resolver.resolve(schema, ResolveContext::Response).ty
      });
      ResponseDefinition {
        kind,
        ty,
        schema: schema_ref.and_then(|schema| resolver.graph().resolve(schema)).cloned(),
      }
    }
    ResponseKind::Binary => ResponseDefinition {
      kind,
      ty: TsType::Blob,
      schema: None,
    },
    ResponseKind::Html | ResponseKind::Text => ResponseDefinition {
      kind,
      ty: TsType::String,
      schema: None,
    },
    ResponseKind::Empty => ResponseDefinition::empty(),
  };

  Some(definition)
}
